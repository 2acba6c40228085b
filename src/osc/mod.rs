//! OSC Module
//!
//! Outbound-only OSC support: message encoding and the UDP emitter.

pub mod emitter;
pub mod message;

pub use emitter::OscEmitter;
pub use message::OscMessage;
