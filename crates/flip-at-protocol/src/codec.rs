//! Line-based codec for the serial link.
//!
//! The FLipMouse protocol is plain line-oriented text: commands are
//! terminated with a carriage return (`\r`), responses arrive as text
//! lines ended with CR and/or LF. The codec accumulates received bytes
//! and hands out complete lines; it performs no classification.

use bytes::BytesMut;

use crate::constants::COMMAND_TERMINATOR;

/// Maximum command/response line length.
pub const MAX_LINE_LENGTH: usize = 160;

/// A codec for reading and writing protocol lines.
#[derive(Debug, Default)]
pub struct LineCodec {
    /// Buffer for accumulating incoming data.
    buffer: BytesMut,
}

impl LineCodec {
    /// Create a new line codec.
    pub fn new() -> Self {
        LineCodec {
            buffer: BytesMut::with_capacity(MAX_LINE_LENGTH * 2),
        }
    }

    /// Add received data to the buffer.
    pub fn push(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    /// Try to decode a complete line from the buffer.
    ///
    /// Returns `Some(line)` without its terminator if a complete line is
    /// available, or `None` if more data is needed. Empty lines (bare
    /// CR/LF pairs) are skipped.
    pub fn decode_line(&mut self) -> Option<String> {
        let end = self
            .buffer
            .iter()
            .position(|&byte| byte == b'\r' || byte == b'\n')?;

        let line_data = self.buffer.split_to(end);
        let line = String::from_utf8_lossy(&line_data).to_string();

        // Skip the newline character(s)
        while !self.buffer.is_empty() && (self.buffer[0] == b'\r' || self.buffer[0] == b'\n') {
            let _ = self.buffer.split_to(1);
        }

        if line.is_empty() {
            return self.decode_line();
        }
        Some(line)
    }

    /// Encode a command for transmission.
    ///
    /// Appends the carriage return terminator.
    pub fn encode_command(cmd: &str) -> Vec<u8> {
        let mut buf = Vec::with_capacity(cmd.len() + 1);
        buf.extend_from_slice(cmd.as_bytes());
        buf.push(COMMAND_TERMINATOR);
        buf
    }

    /// Get the number of buffered bytes.
    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
    }

    /// Clear the buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_command() {
        let encoded = LineCodec::encode_command("AT ID");
        assert_eq!(encoded, b"AT ID\r");
    }

    #[test]
    fn test_decode_line() {
        let mut codec = LineCodec::new();
        codec.push(b"OK\r\nSLOT:mouse\r\n");

        assert_eq!(codec.decode_line(), Some("OK".to_string()));
        assert_eq!(codec.decode_line(), Some("SLOT:mouse".to_string()));
        assert!(codec.decode_line().is_none());
    }

    #[test]
    fn test_decode_partial_line() {
        let mut codec = LineCodec::new();
        codec.push(b"VALUES:512,512,");
        assert!(codec.decode_line().is_none());

        codec.push(b"512,512,512\r\n");
        assert_eq!(codec.decode_line(), Some("VALUES:512,512,512,512,512".to_string()));
    }

    #[test]
    fn test_decode_skips_blank_lines() {
        let mut codec = LineCodec::new();
        codec.push(b"\r\n\r\nEND\r\n");
        assert_eq!(codec.decode_line(), Some("END".to_string()));
    }
}
