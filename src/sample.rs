use ufmt::{derive::uDebug, uDisplay, uWrite, Formatter};

pub const BIT_COUNT: usize = 8;

/// One 8-bit output value of the DAC
#[derive(Copy, Clone, PartialEq, Eq, Debug, uDebug)]
pub struct Sample(u8);

impl Sample {
    pub const fn new(input: u8) -> Self {
        Self(input)
    }

    pub const fn max() -> Self {
        Self(u8::MAX)
    }

    pub const fn min() -> Self {
        Self(0b00000000)
    }

    /// Clamp a parsed integer into the output range `0..=255`
    pub const fn saturating_from(input: i32) -> Self {
        if input < 0 {
            Self::min()
        } else if input > u8::MAX as i32 {
            Self::max()
        } else {
            Self(input as u8)
        }
    }

    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Return if bit `index` (0 = least significant) is set
    ///
    /// `index` must be below [`BIT_COUNT`].
    pub fn bit(&self, index: usize) -> bool {
        debug_assert!(index < BIT_COUNT, "bit index out of range");
        (self.0 >> index) & 1 == 1
    }
}

impl From<u8> for Sample {
    fn from(input: u8) -> Self {
        Self(input)
    }
}

impl uDisplay for Sample {
    #[inline(always)]
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        <u8 as uDisplay>::fmt(&self.0, f)
    }
}

/// Format a sample as `0b` followed by its eight bits, most significant first
pub struct Bits(pub Sample);

impl uDisplay for Bits {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        f.write_str("0b")?;
        for position in (0..BIT_COUNT).rev() {
            f.write_str(if self.0.bit(position) { "1" } else { "0" })?;
        }
        Ok(())
    }
}
