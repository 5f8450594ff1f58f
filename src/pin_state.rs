use ufmt::{derive::uDebug, uDebug, uDisplay, uWrite, Formatter};

#[derive(Copy, Clone, PartialOrd, PartialEq, Debug, uDebug)]
pub enum PinState {
    Low,
    High,
}

impl From<bool> for PinState {
    fn from(high: bool) -> Self {
        if high {
            PinState::High
        } else {
            PinState::Low
        }
    }
}

impl uDisplay for PinState {
    #[inline(always)]
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        <PinState as uDebug>::fmt(self, f)
    }
}
