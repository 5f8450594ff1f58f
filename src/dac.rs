use crate::pin_state::PinState;
use crate::sample::{Sample, BIT_COUNT};
use embedded_hal::digital::v2::OutputPin;
use void::{ResultVoidExt, Void};

/// Parallel 8-bit DAC driving one output pin per bit
///
/// `pins[i]` carries bit `i` of the sample. On the board the pins form the
/// contiguous block `DAC_BASE_PIN..DAC_BASE_PIN + 8`, so bit 0 lands on the
/// lowest-numbered pin and bit 7 on the highest.
pub struct Dac<PIN: OutputPin<Error = Void>> {
    pins: [PIN; BIT_COUNT],
}

impl<PIN: OutputPin<Error = Void>> Dac<PIN> {
    pub fn new(pins: [PIN; BIT_COUNT]) -> Self {
        Self { pins }
    }

    pub fn set(&mut self, input: Sample) {
        for (index, pin) in self.pins.iter_mut().enumerate() {
            if input.bit(index) {
                pin.set_high()
            } else {
                pin.set_low()
            }
            .void_unwrap();
        }
    }

    pub fn pin_states(input: Sample) -> [PinState; BIT_COUNT] {
        let mut states = [PinState::Low; BIT_COUNT];
        for (index, state) in states.iter_mut().enumerate() {
            *state = PinState::from(input.bit(index));
        }
        states
    }
}
