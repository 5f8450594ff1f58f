use crate::byte_source::ByteSource;
use ufmt::derive::uDebug;

const CR: u8 = b'\r';
const LF: u8 = b'\n';
const NUL: u8 = 0;

/// Waiting for a byte took longer than the allowed number of polls
#[derive(Copy, Clone, PartialEq, Debug, uDebug)]
pub struct LineTimeout {
    /// Bytes stored (and NUL-terminated) before giving up
    pub bytes_read: usize,
}

/// Reassembles serial bytes into NUL-terminated lines
///
/// A line ends with `\r`, `\n` or a NUL byte. The terminator is consumed but
/// not stored. `\r\n` counts as one terminator: a `\n` arriving right after a
/// `\r` terminator is skipped by the next read. A terminator arriving right
/// after a line that was cut at capacity ends that cut line and does not
/// produce an extra empty line.
#[derive(Default)]
pub struct LineReader {
    skip_line_feed: bool,
    line_cut: bool,
    pending: Option<u8>,
}

fn is_terminator(byte: u8) -> bool {
    byte == CR || byte == LF || byte == NUL
}

impl LineReader {
    pub const fn new() -> Self {
        Self {
            skip_line_feed: false,
            line_cut: false,
            pending: None,
        }
    }

    /// Read one line into `line`, blocking until it is complete
    ///
    /// At most `line.len() - 1` bytes are stored; a longer line is cut there
    /// and its remainder is left in the source. Returns the number of bytes
    /// stored. `line[bytes_read]` is always NUL unless `line` is empty.
    pub fn read_line<S: ByteSource + ?Sized>(&mut self, source: &mut S, line: &mut [u8]) -> usize {
        match self.read_line_with(line, || Some(source.wait_for_byte())) {
            Ok(bytes_read) => bytes_read,
            Err(LineTimeout { bytes_read }) => bytes_read,
        }
    }

    /// Like [`LineReader::read_line`] but gives up once a single byte takes more than
    /// `max_polls` polls to arrive
    pub fn read_line_within<S: ByteSource + ?Sized>(
        &mut self,
        source: &mut S,
        line: &mut [u8],
        max_polls: u32,
    ) -> Result<usize, LineTimeout> {
        self.read_line_with(line, || source.wait_for_byte_within(max_polls))
    }

    /// Hand back a byte the caller read around the line reader
    ///
    /// The byte becomes the first byte of the next line. Only one byte can be
    /// held back at a time. Returns `false` if the byte was only the `\n` half
    /// of a `\r\n` terminator and was dropped.
    pub fn unread(&mut self, byte: u8) -> bool {
        if byte == LF && self.skip_line_feed {
            self.skip_line_feed = false;
            return false;
        }
        self.pending = Some(byte);
        true
    }

    fn read_line_with<F>(&mut self, line: &mut [u8], mut next_byte: F) -> Result<usize, LineTimeout>
    where
        F: FnMut() -> Option<u8>,
    {
        let capacity = line.len();
        if capacity == 0 {
            return Ok(0);
        }

        let mut after_cut = core::mem::replace(&mut self.line_cut, false);
        let mut bytes_read = 0;
        let mut terminated = false;
        let mut timeout = None;
        while bytes_read < capacity - 1 {
            let byte = match self.pending.take().or_else(&mut next_byte) {
                Some(byte) => byte,
                None => {
                    timeout = Some(LineTimeout { bytes_read });
                    break;
                }
            };

            if byte == LF && self.skip_line_feed {
                self.skip_line_feed = false;
                continue;
            }
            self.skip_line_feed = false;

            if is_terminator(byte) {
                self.skip_line_feed = byte == CR;
                if after_cut {
                    // End of the line that was cut at capacity
                    after_cut = false;
                    continue;
                }
                terminated = true;
                break;
            }

            after_cut = false;
            line[bytes_read] = byte;
            bytes_read += 1;
        }

        if !terminated {
            self.line_cut = after_cut || (timeout.is_none() && bytes_read > 0);
        }

        line[bytes_read] = NUL;
        match timeout {
            Some(timeout) => Err(timeout),
            None => Ok(bytes_read),
        }
    }
}
