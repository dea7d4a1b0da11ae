//! Content access for file nodes.
//!
//! Payloads are stored as they appear in the tree source and decoded on demand.
//! Callers pick the representation: raw bytes for counting, text for display.

use crate::error::DecodeError;
use crate::tree::node::{File, TransportEncoding};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::borrow::Cow;

impl File {
    /// Decode the payload into raw bytes.
    pub fn decode_bytes(&self) -> Result<Cow<'_, [u8]>, DecodeError> {
        match self.encoding {
            TransportEncoding::None => Ok(Cow::Borrowed(self.content.as_bytes())),
            TransportEncoding::Base64 => Ok(Cow::Owned(decode_base64(&self.content)?)),
        }
    }

    /// Decode the payload into UTF-8 text.
    pub fn decode_text(&self) -> Result<Cow<'_, str>, DecodeError> {
        match self.encoding {
            TransportEncoding::None => Ok(Cow::Borrowed(self.content.as_str())),
            TransportEncoding::Base64 => {
                let bytes = decode_base64(&self.content)?;
                Ok(Cow::Owned(String::from_utf8(bytes)?))
            }
        }
    }

    /// Text for display. A decode failure is rendered in place of the content.
    pub fn display_text(&self) -> Cow<'_, str> {
        match self.decode_text() {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!(file = %self.name, error = %e, "Failed to decode file content");
                Cow::Owned(format!("<decode error: {}>", e))
            }
        }
    }
}

// Line-wrapped payloads are common in hand-written sources.
fn decode_base64(payload: &str) -> Result<Vec<u8>, DecodeError> {
    let compact: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    Ok(STANDARD.decode(compact.as_bytes())?)
}
