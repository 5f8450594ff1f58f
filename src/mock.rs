//! Host-side stand-ins for the board peripherals

use crate::sample::BIT_COUNT;
use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::OutputPin;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use ufmt::uWrite;
use void::Void;

/// Give up on a source that keeps polling an empty input instead of hanging the test run
const MAX_EMPTY_POLLS: usize = 100_000;

#[derive(Default)]
pub struct Collector(String);

impl Collector {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl uWrite for Collector {
    type Error = Void;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.0.push_str(s);
        Ok(())
    }
}

#[derive(Default)]
struct BoardState {
    levels: [bool; BIT_COUNT],
    writes: usize,
}

#[derive(Clone, Default)]
pub struct MockBoard {
    state: Rc<RefCell<BoardState>>,
}

impl MockBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pins(&self) -> [MockPin; BIT_COUNT] {
        let pin = |index| MockPin {
            index,
            state: self.state.clone(),
        };
        [pin(0), pin(1), pin(2), pin(3), pin(4), pin(5), pin(6), pin(7)]
    }

    pub fn levels(&self) -> [bool; BIT_COUNT] {
        self.state.borrow().levels
    }

    /// Levels packed back into a byte, pin 0 as bit 0
    pub fn value(&self) -> u8 {
        self.levels()
            .iter()
            .enumerate()
            .fold(0, |acc, (i, high)| if *high { acc | 1 << i } else { acc })
    }

    pub fn writes(&self) -> usize {
        self.state.borrow().writes
    }
}

pub struct MockPin {
    index: usize,
    state: Rc<RefCell<BoardState>>,
}

impl OutputPin for MockPin {
    type Error = Void;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();
        state.levels[self.index] = false;
        state.writes += 1;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();
        state.levels[self.index] = true;
        state.writes += 1;
        Ok(())
    }
}

#[derive(Default)]
struct SerialState {
    input: VecDeque<u8>,
    output: String,
    stall: usize,
    stall_left: usize,
    empty_polls: usize,
}

/// Serial port fed from a byte queue
///
/// Every byte is preceded by `stall` `WouldBlock` polls to exercise the busy-wait.
#[derive(Clone, Default)]
pub struct MockSerial {
    state: Rc<RefCell<SerialState>>,
}

impl MockSerial {
    pub fn new(input: &[u8]) -> Self {
        let serial = Self::default();
        serial.feed(input);
        serial
    }

    pub fn with_stall(input: &[u8], stall: usize) -> Self {
        let serial = Self::new(input);
        {
            let mut state = serial.state.borrow_mut();
            state.stall = stall;
            state.stall_left = stall;
        }
        serial
    }

    pub fn feed(&self, input: &[u8]) {
        self.state.borrow_mut().input.extend(input.iter().copied());
    }

    pub fn remaining(&self) -> Vec<u8> {
        self.state.borrow().input.iter().copied().collect()
    }

    pub fn output(&self) -> String {
        self.state.borrow().output.clone()
    }
}

impl embedded_hal::serial::Read<u8> for MockSerial {
    type Error = Void;

    fn read(&mut self) -> nb::Result<u8, Self::Error> {
        let mut state = self.state.borrow_mut();
        if state.stall_left > 0 {
            state.stall_left -= 1;
            return Err(nb::Error::WouldBlock);
        }
        match state.input.pop_front() {
            Some(byte) => {
                state.stall_left = state.stall;
                state.empty_polls = 0;
                Ok(byte)
            }
            None => {
                state.empty_polls += 1;
                if state.empty_polls > MAX_EMPTY_POLLS {
                    panic!("serial input exhausted");
                }
                Err(nb::Error::WouldBlock)
            }
        }
    }
}

impl uWrite for MockSerial {
    type Error = Void;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.state.borrow_mut().output.push_str(s);
        Ok(())
    }
}

/// Records every delay together with the DAC output held during it
#[derive(Clone, Default)]
pub struct MockDelay {
    board: Option<MockBoard>,
    calls: Rc<RefCell<Vec<(u16, u8)>>>,
}

impl MockDelay {
    pub fn watching(board: &MockBoard) -> Self {
        Self {
            board: Some(board.clone()),
            calls: Default::default(),
        }
    }

    pub fn calls(&self) -> Vec<(u16, u8)> {
        self.calls.borrow().clone()
    }

    /// Output values in the order they were held
    pub fn held_values(&self) -> Vec<u8> {
        self.calls.borrow().iter().map(|(_, value)| *value).collect()
    }
}

impl DelayUs<u16> for MockDelay {
    fn delay_us(&mut self, us: u16) {
        let value = self.board.as_ref().map_or(0, |board| board.value());
        self.calls.borrow_mut().push((us, value));
    }
}
