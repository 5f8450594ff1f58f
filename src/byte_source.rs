use embedded_hal::serial::Read;
use void::Void;

/// Byte reported in place of a receiver error (framing, overrun, ...)
pub const READ_ERROR_BYTE: u8 = 0;

/// Source of single bytes with an abstract "wait for the next byte" operation
///
/// The default waits are busy loops around [`ByteSource::poll_byte`]. A target
/// with real blocking I/O can override them without touching the line reader.
pub trait ByteSource {
    /// Return the next byte if one has arrived
    fn poll_byte(&mut self) -> nb::Result<u8, Void>;

    /// Spin until a byte arrives
    fn wait_for_byte(&mut self) -> u8 {
        match nb::block!(self.poll_byte()) {
            Ok(byte) => byte,
            Err(never) => match never {},
        }
    }

    /// Poll at most `max_polls` times for a byte; `0` gives up without polling
    fn wait_for_byte_within(&mut self, max_polls: u32) -> Option<u8> {
        for _ in 0..max_polls {
            match self.poll_byte() {
                Ok(byte) => return Some(byte),
                Err(nb::Error::Other(never)) => match never {},
                Err(nb::Error::WouldBlock) => {}
            }
        }
        None
    }
}

impl<S: Read<u8>> ByteSource for S {
    fn poll_byte(&mut self) -> nb::Result<u8, Void> {
        match self.read() {
            Ok(byte) => Ok(byte),
            Err(nb::Error::WouldBlock) => Err(nb::Error::WouldBlock),
            Err(nb::Error::Other(_)) => Ok(READ_ERROR_BYTE),
        }
    }
}
