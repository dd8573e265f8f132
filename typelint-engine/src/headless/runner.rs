//! Headless run loop: payload in, framed diagnostics out.

use std::io::{self, Write};
use std::path::PathBuf;

use crossbeam_channel::bounded;
use typelint_core::types::collections::FxHashMap;
use typelint_core::{ConfigError, LintConfig};

use crate::linter::{run_linter_on_program, ConfiguredRule};
use crate::rule::{FixMode, Rule, RuleDiagnostic};
use crate::rules::rule_by_name;
use crate::syntax::{Program, SourceFile};

use super::payload::deserialize_payload;
use super::protocol::{FrameWriter, MessageType, WireDiagnostic, WireError};

/// Diagnostics buffered between workers and the writer thread. Workers
/// block when the writer falls this far behind.
const DIAGNOSTIC_QUEUE_CAP: usize = 4096;

/// Run one headless session: parse `input`, lint the assigned files, and
/// stream every diagnostic to `out` as a frame. Returns the process exit
/// code.
pub fn run_headless<W: Write + Send>(input: &[u8], out: &mut W) -> i32 {
    let payload = match deserialize_payload(input) {
        Ok(payload) => payload,
        Err(e) => return write_error(out, format!("error parsing config: {e}")),
    };

    // Resolve every rule name before touching the filesystem; an unknown
    // rule invalidates the whole session.
    let mut assignments: FxHashMap<PathBuf, Vec<&'static Rule>> = FxHashMap::default();
    let mut paths: Vec<PathBuf> = Vec::new();
    for config in &payload.configs {
        let mut rules = Vec::with_capacity(config.rules.len());
        for rule in &config.rules {
            match rule_by_name(&rule.name) {
                Some(resolved) => rules.push(resolved),
                None => {
                    let err = ConfigError::UnknownRule {
                        name: rule.name.clone(),
                    };
                    return write_error(out, format!("error parsing config: {err}"));
                }
            }
        }
        for path in &config.file_paths {
            let path = PathBuf::from(path);
            let entry = assignments.entry(path.clone()).or_default();
            for rule in rules.iter().copied() {
                if !entry.iter().any(|r| r.name == rule.name) {
                    entry.push(rule);
                }
            }
            paths.push(path);
        }
    }

    let lint_config = LintConfig::default();
    let program = match Program::load(&paths, lint_config.effective_checker_shards()) {
        Ok(program) => program,
        Err(e) => return write_error(out, format!("error building program: {e}")),
    };

    let rules_for_file = |file: &SourceFile| -> Vec<ConfiguredRule> {
        assignments
            .get(file.path())
            .map(|rules| rules.iter().copied().map(ConfiguredRule::from_rule).collect())
            .unwrap_or_default()
    };

    let (tx, rx) = bounded::<RuleDiagnostic>(DIAGNOSTIC_QUEUE_CAP);
    let mut writer = FrameWriter::new(&mut *out);

    let write_result: io::Result<()> = std::thread::scope(|scope| {
        let handle = scope.spawn(move || {
            for diagnostic in rx.iter() {
                writer.write_message(
                    MessageType::Diagnostic,
                    &WireDiagnostic::from(&diagnostic),
                )?;
            }
            writer.flush()
        });

        let sink = move |diagnostic: RuleDiagnostic| {
            // Send fails only after the writer has bailed on an io error;
            // remaining diagnostics are dropped on the floor.
            let _ = tx.send(diagnostic);
        };
        run_linter_on_program(
            &program,
            program.source_files(),
            lint_config.effective_workers(),
            &rules_for_file,
            &sink,
            FixMode::all(),
        );
        drop(sink);

        match handle.join() {
            Ok(result) => result,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    });

    match write_result {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!(error = %e, "failed writing diagnostics to output");
            1
        }
    }
}

fn write_error<W: Write>(out: &mut W, error: String) -> i32 {
    tracing::error!(%error, "headless session aborted");
    let mut writer = FrameWriter::new(out);
    let _ = writer.write_message(MessageType::Error, &WireError { error });
    let _ = writer.flush();
    1
}
