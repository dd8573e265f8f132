//! Headless mode: work arrives as one JSON payload on stdin, results
//! stream to stdout as length-prefixed binary frames.

pub mod payload;
pub mod protocol;
pub mod runner;

pub use payload::{deserialize_payload, HeadlessConfig, HeadlessPayload, HeadlessRule};
pub use protocol::{read_frame, FrameWriter, MessageType, WireDiagnostic, WireError};
pub use runner::run_headless;
