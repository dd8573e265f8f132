//! Headless entry point. Reads one payload from stdin, streams framed
//! diagnostics to stdout, and exits nonzero on any session error.

use std::io::{self, Read};
use std::process;

use typelint_core::tracing_setup::init_tracing;
use typelint_engine::headless::run_headless;

fn main() {
    init_tracing();

    let mut input = Vec::new();
    if let Err(e) = io::stdin().lock().read_to_end(&mut input) {
        tracing::error!(error = %e, "failed reading payload from stdin");
        process::exit(1);
    }

    let mut stdout = io::stdout();
    let code = run_headless(&input, &mut stdout);
    process::exit(code);
}
