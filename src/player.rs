use crate::dac::Dac;
use crate::sample::Sample;
use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::OutputPin;
use void::Void;

/// Drives samples onto the DAC at a fixed sample period
pub struct Player<PIN: OutputPin<Error = Void>, DELAY: DelayUs<u16>> {
    dac: Dac<PIN>,
    delay: DELAY,
    /// Time in microseconds each sample is held on the pins
    sample_period_us: u16,
}

impl<PIN: OutputPin<Error = Void>, DELAY: DelayUs<u16>> Player<PIN, DELAY> {
    pub fn new(dac: Dac<PIN>, delay: DELAY, sample_period_us: u16) -> Self {
        Self {
            dac,
            delay,
            sample_period_us,
        }
    }

    pub fn sample_period_us(&self) -> u16 {
        self.sample_period_us
    }

    /// Output one sample and hold it for one sample period
    #[inline(always)]
    pub fn play(&mut self, sample: Sample) {
        self.dac.set(sample);
        self.delay.delay_us(self.sample_period_us);
    }

    /// Play `samples` back to back
    ///
    /// Nothing but the DAC write runs between two periods, so callers must
    /// finish parsing before handing the batch over.
    pub fn play_all(&mut self, samples: &[Sample]) {
        for sample in samples {
            self.play(*sample);
        }
    }
}
