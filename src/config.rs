use ufmt::{derive::uDebug, uDebug, uDisplay, uWrite, Formatter};

/// How bytes arriving on the serial port become samples
#[derive(Copy, Clone, PartialEq, Debug, uDebug)]
pub enum StreamMode {
    /// Every received byte is one sample, played as soon as it arrives
    Raw,
    /// Lines of decimal fields; each line is played as one batch
    Framed,
    /// Lines fill the waveform buffer until an empty line, then it loops
    Wavetable,
}

impl uDisplay for StreamMode {
    #[inline(always)]
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        <StreamMode as uDebug>::fmt(self, f)
    }
}

#[derive(Copy, Clone)]
pub struct Config {
    pub mode: StreamMode,
    /// Time in microseconds each sample is held on the pins
    pub sample_period_us: u16,
    /// Bytes that split a line into fields
    pub separators: &'static [u8],
    /// Give up on a line when a byte takes longer than this many polls.
    /// `None` waits forever.
    pub line_timeout_polls: Option<u32>,
}

impl Config {
    pub const fn new(mode: StreamMode, sample_period_us: u16) -> Self {
        Self {
            mode,
            sample_period_us,
            separators: b", \t",
            line_timeout_polls: None,
        }
    }
}
