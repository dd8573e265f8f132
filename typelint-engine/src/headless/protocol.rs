//! Framed output protocol and the wire shapes it carries.
//!
//! Each message is a 5-byte header (payload length as little-endian u32,
//! then one type tag byte) followed by the JSON payload. Exactly one
//! writer owns the stream; producers reach it only through the bounded
//! diagnostic queue.

use std::io::{self, Read, Write};

use serde::{Deserialize, Serialize};
use typelint_core::TextRange;

use crate::rule::{RuleDiagnostic, RuleFix, RuleMessage, RuleSuggestion};

/// Frame type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MessageType {
    Error = 0,
    Diagnostic = 1,
}

impl MessageType {
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Self::Error),
            1 => Some(Self::Diagnostic),
            _ => None,
        }
    }
}

const HEADER_LEN: usize = 5;
/// Output buffer size. The writer flushes once free space drops below
/// `FLUSH_LOW_WATER`, and always at shutdown.
const OUTPUT_BUFFER_SIZE: usize = 400 * 1024;
const FLUSH_LOW_WATER: usize = 4096;

/// The single writer draining the diagnostic queue onto the output stream.
pub struct FrameWriter<W: Write> {
    out: W,
    buf: Vec<u8>,
}

impl<W: Write> FrameWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(OUTPUT_BUFFER_SIZE),
        }
    }

    /// Append one frame, flushing if the buffer is nearly full.
    pub fn write_frame(&mut self, message_type: MessageType, payload: &[u8]) -> io::Result<()> {
        let mut header = [0u8; HEADER_LEN];
        header[..4].copy_from_slice(&(payload.len() as u32).to_le_bytes());
        header[4] = message_type as u8;
        self.buf.extend_from_slice(&header);
        self.buf.extend_from_slice(payload);

        if OUTPUT_BUFFER_SIZE.saturating_sub(self.buf.len()) < FLUSH_LOW_WATER {
            self.flush()?;
        }
        Ok(())
    }

    /// Serialize and frame a value.
    pub fn write_message<T: Serialize>(
        &mut self,
        message_type: MessageType,
        value: &T,
    ) -> io::Result<()> {
        let payload = serde_json::to_vec(value)?;
        self.write_frame(message_type, &payload)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        if !self.buf.is_empty() {
            self.out.write_all(&self.buf)?;
            self.buf.clear();
        }
        self.out.flush()
    }
}

/// Read one frame. Returns `None` on a clean end of stream.
pub fn read_frame(reader: &mut impl Read) -> io::Result<Option<(MessageType, Vec<u8>)>> {
    let mut header = [0u8; HEADER_LEN];
    match reader.read_exact(&mut header) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
        Err(e) => return Err(e),
    }
    let len = u32::from_le_bytes([header[0], header[1], header[2], header[3]]) as usize;
    let message_type = MessageType::from_tag(header[4])
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "unknown frame type tag"))?;
    let mut payload = vec![0u8; len];
    reader.read_exact(&mut payload)?;
    Ok(Some((message_type, payload)))
}

// ---- Wire shapes ----

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireMessage {
    pub id: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub help: Option<String>,
}

impl From<&RuleMessage> for WireMessage {
    fn from(m: &RuleMessage) -> Self {
        Self {
            id: m.id.clone(),
            description: m.description.clone(),
            help: m.help.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireFix {
    pub text: String,
    pub range: TextRange,
}

impl From<&RuleFix> for WireFix {
    fn from(f: &RuleFix) -> Self {
        Self {
            text: f.text.clone(),
            range: f.range,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireSuggestion {
    pub message: WireMessage,
    pub fixes: Vec<WireFix>,
}

impl From<&RuleSuggestion> for WireSuggestion {
    fn from(s: &RuleSuggestion) -> Self {
        Self {
            message: WireMessage::from(&s.message),
            fixes: s.fixes.iter().map(WireFix::from).collect(),
        }
    }
}

/// A diagnostic as the host sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireDiagnostic {
    pub range: TextRange,
    pub rule: String,
    pub message: WireMessage,
    pub fixes: Vec<WireFix>,
    pub suggestions: Vec<WireSuggestion>,
    pub file_path: String,
}

impl From<&RuleDiagnostic> for WireDiagnostic {
    fn from(d: &RuleDiagnostic) -> Self {
        Self {
            range: d.range,
            rule: d.rule_name.clone(),
            message: WireMessage::from(&d.message),
            fixes: d.fixes.iter().map(WireFix::from).collect(),
            suggestions: d.suggestions.iter().map(WireSuggestion::from).collect(),
            file_path: d.file.file_name(),
        }
    }
}

/// Payload of a type=error frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireError {
    pub error: String,
}
