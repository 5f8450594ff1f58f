use crate::byte_source::ByteSource;
use ufmt::uWrite;
use void::Void;

/// Serial port with a debug log channel
///
/// Writing through the wrapper is a no-op unless the `debug` feature is enabled
/// and the wrapper was created with `debug = true`. Data bytes are read from
/// [`SerialWrapper::get_serial`] and are never affected.
pub struct SerialWrapper<SERIAL> {
    debug: bool,
    serial: SERIAL,
}

impl<SERIAL> SerialWrapper<SERIAL>
where
    SERIAL: ByteSource + uWrite<Error = Void>,
{
    pub fn new(debug: bool, serial: SERIAL) -> Self {
        SerialWrapper { debug, serial }
    }

    pub fn get_serial(&mut self) -> &mut SERIAL {
        &mut self.serial
    }

    pub fn is_debug(&self) -> bool {
        cfg!(feature = "debug") && self.debug
    }
}

impl<SERIAL> uWrite for SerialWrapper<SERIAL>
where
    SERIAL: ByteSource + uWrite<Error = Void>,
{
    type Error = Void;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        if self.is_debug() {
            self.serial.write_str(s)
        } else {
            Ok(())
        }
    }
}
