#[cfg(feature = "board")]
mod app_builder;

use crate::byte_source::ByteSource;
use crate::config::{Config, StreamMode};
use crate::field_tokenizer::Fields;
use crate::integer_parser::try_parse_int;
use crate::line_reader::{LineReader, LineTimeout};
use crate::player::Player;
use crate::sample::{Bits, Sample};
use crate::serial_wrapper::SerialWrapper;
use crate::waveform::Waveform;
use crate::{FIELD_CAPACITY, LINE_CAPACITY, MAX_FIELDS, WAVEFORM_CAPACITY};
#[cfg(feature = "board")]
pub use app_builder::{AppBuilder, AppBuilderTrait};
use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::OutputPin;
use ufmt::uWrite;
use void::{ResultVoidExt, Void};

#[derive(Copy, Clone, PartialEq, Debug)]
enum Phase {
    Loading,
    Playing,
}

pub struct App<SERIAL, PIN, DELAY>
where
    SERIAL: ByteSource + uWrite<Error = Void>,
    PIN: OutputPin<Error = Void>,
    DELAY: DelayUs<u16>,
{
    serial: SerialWrapper<SERIAL>,
    player: Player<PIN, DELAY>,
    config: Config,
    line_reader: LineReader,
    line: [u8; LINE_CAPACITY],
    waveform: Waveform<WAVEFORM_CAPACITY>,
    phase: Phase,
}

impl<SERIAL, PIN, DELAY> App<SERIAL, PIN, DELAY>
where
    SERIAL: ByteSource + uWrite<Error = Void>,
    PIN: OutputPin<Error = Void>,
    DELAY: DelayUs<u16>,
{
    pub fn new(serial: SerialWrapper<SERIAL>, player: Player<PIN, DELAY>, config: Config) -> Self {
        Self {
            serial,
            player,
            config,
            line_reader: LineReader::new(),
            line: [0; LINE_CAPACITY],
            waveform: Waveform::new(),
            phase: Phase::Loading,
        }
    }

    pub fn run(&mut self) -> ! {
        ufmt::uwriteln!(
            &mut self.serial,
            "Parallel DAC ready: mode {} period {}us\r",
            self.config.mode,
            self.player.sample_period_us()
        )
        .void_unwrap();

        loop {
            self.poll();
        }
    }

    /// Do one unit of work: one byte in raw mode, one line in framed mode,
    /// one line or one waveform cycle in wavetable mode
    pub fn poll(&mut self) {
        match self.config.mode {
            StreamMode::Raw => self.poll_raw(),
            StreamMode::Framed => self.poll_framed(),
            StreamMode::Wavetable => match self.phase {
                Phase::Loading => self.poll_loading(),
                Phase::Playing => self.poll_playing(),
            },
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn waveform(&self) -> &Waveform<WAVEFORM_CAPACITY> {
        &self.waveform
    }

    fn poll_raw(&mut self) {
        let byte = self.serial.get_serial().wait_for_byte();
        self.player.play(Sample::new(byte));
    }

    fn poll_framed(&mut self) {
        let bytes_read = match self.read_line() {
            Some(bytes_read) => bytes_read,
            None => return,
        };

        let mut batch = [Sample::min(); MAX_FIELDS];
        let mut count = 0;
        let mut dropped: usize = 0;
        let fallbacks = parse_samples(&self.line[..bytes_read], self.config.separators, |sample| {
            if count < MAX_FIELDS {
                batch[count] = sample;
                count += 1;
            } else {
                dropped += 1;
            }
        });

        if count > 0 {
            ufmt::uwriteln!(
                &mut self.serial,
                "play {} first {} fallback {} dropped {}\r",
                count,
                Bits(batch[0]),
                fallbacks,
                dropped
            )
            .void_unwrap();
        }
        self.player.play_all(&batch[..count]);
    }

    fn poll_loading(&mut self) {
        let bytes_read = match self.read_line() {
            Some(bytes_read) => bytes_read,
            None => return,
        };

        if bytes_read == 0 {
            if !self.waveform.is_empty() {
                ufmt::uwriteln!(&mut self.serial, "loop {} samples\r", self.waveform.len())
                    .void_unwrap();
                self.phase = Phase::Playing;
            }
            return;
        }

        let waveform = &mut self.waveform;
        let mut dropped: usize = 0;
        let fallbacks = parse_samples(&self.line[..bytes_read], self.config.separators, |sample| {
            if !waveform.push(sample) {
                dropped += 1;
            }
        });

        ufmt::uwriteln!(
            &mut self.serial,
            "loaded {}/{} fallback {} dropped {}\r",
            self.waveform.len(),
            self.waveform.capacity(),
            fallbacks,
            dropped
        )
        .void_unwrap();
    }

    fn poll_playing(&mut self) {
        self.player.play_all(self.waveform.samples());

        // Only look at the port between two cycles so the cycle timing stays uniform.
        // The byte that stops playback is the start of the next waveform.
        let stop = match self.serial.get_serial().poll_byte() {
            Ok(byte) => self.line_reader.unread(byte),
            Err(_) => false,
        };
        if stop {
            self.waveform.clear();
            self.phase = Phase::Loading;
            ufmt::uwriteln!(&mut self.serial, "stopped\r").void_unwrap();
        }
    }

    /// Read the next line into `self.line`; `None` if it timed out and was discarded
    fn read_line(&mut self) -> Option<usize> {
        let serial = self.serial.get_serial();
        match self.config.line_timeout_polls {
            None => Some(self.line_reader.read_line(serial, &mut self.line)),
            Some(max_polls) => {
                match self
                    .line_reader
                    .read_line_within(serial, &mut self.line, max_polls)
                {
                    Ok(bytes_read) => Some(bytes_read),
                    Err(LineTimeout { bytes_read }) => {
                        ufmt::uwriteln!(&mut self.serial, "timeout after {} bytes\r", bytes_read)
                            .void_unwrap();
                        None
                    }
                }
            }
        }
    }
}

/// Parse every non-empty field of `line` into a sample and hand it to `consume`
///
/// Fields without a number play as 0, numbers outside `0..=255` are clamped.
/// Returns how many fields needed a fallback value.
fn parse_samples<F>(line: &[u8], separators: &[u8], mut consume: F) -> usize
where
    F: FnMut(Sample),
{
    let mut fields: Fields<FIELD_CAPACITY> = Fields::new(line, separators);
    let mut fallbacks = 0;
    while let Some(field) = fields.next_field() {
        if field.is_empty() {
            continue;
        }
        let value = try_parse_int(field).unwrap_or_else(|error| {
            fallbacks += 1;
            error.fallback()
        });
        consume(Sample::saturating_from(value));
    }
    fallbacks
}
