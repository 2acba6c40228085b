//! Fire-and-forget OSC emission over UDP
//!
//! The emitter binds an ephemeral local port and sends each encoded
//! message to the patch endpoint. There is no acknowledgment and no retry;
//! the loop emits continuously, so a lost datagram is just a skipped frame.

use std::net::{SocketAddr, UdpSocket};

use crate::error::Result;
use crate::osc::message::OscMessage;

/// One-way OSC sender bound to an ephemeral local port
pub struct OscEmitter {
    socket: UdpSocket,
    target: SocketAddr,
}

impl OscEmitter {
    /// Bind a local sending socket aimed at `target`
    pub fn new(target: SocketAddr) -> Result<Self> {
        let socket = UdpSocket::bind(("0.0.0.0", 0))?;
        Ok(Self { socket, target })
    }

    /// Encode and send one message
    ///
    /// Succeeds whether or not anything is listening; UDP surfaces no
    /// delivery information here.
    pub fn send(&self, msg: &OscMessage) -> Result<()> {
        self.socket.send_to(&msg.encode(), self.target)?;
        Ok(())
    }

    /// The patch endpoint this emitter sends to
    pub fn target(&self) -> SocketAddr {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_send_reaches_a_local_listener() {
        let listener = UdpSocket::bind("127.0.0.1:0").unwrap();
        listener
            .set_read_timeout(Some(Duration::from_secs(2)))
            .unwrap();
        let addr = listener.local_addr().unwrap();

        let emitter = OscEmitter::new(addr).unwrap();
        let msg = OscMessage::with_args("/trajectory", vec![48, 52, 67, 100, 90, 80]);
        emitter.send(&msg).unwrap();

        let mut buf = [0u8; 256];
        let (len, _) = listener.recv_from(&mut buf).unwrap();
        assert_eq!(&buf[..len], msg.encode().as_slice());
    }

    #[test]
    fn test_send_without_listener_is_not_an_error() {
        // Port 1 on loopback: nothing listens there, the datagram just
        // disappears
        let target: SocketAddr = "127.0.0.1:1".parse().unwrap();
        let emitter = OscEmitter::new(target).unwrap();
        assert_eq!(emitter.target(), target);

        let msg = OscMessage::with_args("/target_chord", vec![48, 52, 67]);
        assert!(emitter.send(&msg).is_ok());
    }
}
