//! OSC message encoding
//!
//! The minimal OSC 1.0 subset the installation emits: messages with an
//! address pattern and int32 arguments. Address and type-tag strings are
//! NUL-terminated and padded to 4-byte boundaries; arguments are
//! big-endian. Bundles and the receive path are absent; the node only
//! ever sends.

/// A single outbound OSC message: address pattern plus int32 arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OscMessage {
    address: String,
    args: Vec<i32>,
}

impl OscMessage {
    /// Create a message with no arguments
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            args: Vec::new(),
        }
    }

    /// Create a message with int32 arguments
    pub fn with_args(address: impl Into<String>, args: Vec<i32>) -> Self {
        Self {
            address: address.into(),
            args,
        }
    }

    /// Append an int32 argument
    pub fn push(&mut self, arg: i32) {
        self.args.push(arg);
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn args(&self) -> &[i32] {
        &self.args
    }

    /// Encode into an OSC 1.0 datagram payload
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.address.len() + 8 + self.args.len() * 5);

        buf.extend_from_slice(self.address.as_bytes());
        buf.push(0);
        pad4(&mut buf);

        buf.push(b',');
        buf.extend(std::iter::repeat(b'i').take(self.args.len()));
        buf.push(0);
        pad4(&mut buf);

        for &arg in &self.args {
            buf.extend_from_slice(&arg.to_be_bytes());
        }
        buf
    }
}

/// Pad with NULs up to the next 4-byte boundary
fn pad4(buf: &mut Vec<u8>) {
    while buf.len() % 4 != 0 {
        buf.push(0);
    }
}
