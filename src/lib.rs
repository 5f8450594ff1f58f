//! Software parallel DAC
//!
//! Bytes arriving on the serial port are turned into 8-bit samples and driven
//! onto eight output pins at a fixed sample period. An external resistor
//! ladder turns the pin pattern into a voltage.
#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod app;
pub mod byte_source;
pub mod config;
pub mod dac;
pub mod field_tokenizer;
pub mod integer_parser;
pub mod line_reader;
pub mod pin_state;
pub mod player;
pub mod sample;
pub mod serial_wrapper;
pub mod waveform;

#[cfg(test)]
mod mock;

/// Capacity of the line buffer including the terminating NUL
pub const LINE_CAPACITY: usize = 64;
/// Capacity of one field including the terminating NUL
pub const FIELD_CAPACITY: usize = 16;
/// Most samples a single framed line can carry ("0,0,0,..." fills a line with them)
pub const MAX_FIELDS: usize = LINE_CAPACITY / 2;
pub const WAVEFORM_CAPACITY: usize = 512;

pub use app::App;
pub use config::{Config, StreamMode};
pub use dac::Dac;
pub use player::Player;
pub use sample::Sample;
pub use serial_wrapper::SerialWrapper;
