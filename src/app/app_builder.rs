use crate::app::App;
use crate::config::Config;
use crate::dac::Dac;
use crate::player::Player;
use crate::sample::BIT_COUNT;
use crate::serial_wrapper::SerialWrapper;
use arduino::prelude::*;
use arduino_uno as arduino;
use arduino_uno::hal::port::mode::{Floating, Output};
use arduino_uno::hal::port::Pin;

/// Arduino pin carrying bit 0 of the DAC; bit `i` is on `DAC_BASE_PIN + i`
pub const DAC_BASE_PIN: u8 = 3;

pub type BoardApp = App<arduino::Serial<Floating>, Pin<Output>, arduino::Delay>;

pub trait AppBuilderTrait {
    type App;

    fn build(config: Config, baud_rate: u32) -> Self::App;
}

pub struct AppBuilder {}

impl AppBuilderTrait for AppBuilder {
    type App = BoardApp;

    fn build(config: Config, baud_rate: u32) -> Self::App {
        let dp = arduino::Peripherals::take().unwrap();

        let mut pins = arduino::Pins::new(dp.PORTB, dp.PORTC, dp.PORTD);

        // D3..D10, bit 0 first
        let dac_pins: [Pin<Output>; BIT_COUNT] = [
            pins.d3.into_output(&mut pins.ddr).downgrade(),
            pins.d4.into_output(&mut pins.ddr).downgrade(),
            pins.d5.into_output(&mut pins.ddr).downgrade(),
            pins.d6.into_output(&mut pins.ddr).downgrade(),
            pins.d7.into_output(&mut pins.ddr).downgrade(),
            pins.d8.into_output(&mut pins.ddr).downgrade(),
            pins.d9.into_output(&mut pins.ddr).downgrade(),
            pins.d10.into_output(&mut pins.ddr).downgrade(),
        ];
        let dac = Dac::new(dac_pins);

        let serial = SerialWrapper::new(
            cfg!(feature = "debug"),
            arduino::Serial::new(
                dp.USART0,
                pins.d0,
                pins.d1.into_output(&mut pins.ddr),
                baud_rate.into_baudrate(),
            ),
        );

        let player = Player::new(dac, arduino::Delay::new(), config.sample_period_us);

        App::new(serial, player, config)
    }
}
