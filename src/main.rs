#![no_std]
#![no_main]

#[cfg(not(feature = "debug"))]
use panic_halt as _;

use arduino_uno as arduino;
use parallel_dac::app::{AppBuilder, AppBuilderTrait};
use parallel_dac::{Config, StreamMode};

const BAUD_RATE: u32 = 115200;
/// Time each sample is held on the pins, in microseconds
const SAMPLE_PERIOD_US: u16 = 50;
const STREAM_MODE: StreamMode = StreamMode::Raw;

const CONFIG: Config = Config::new(STREAM_MODE, SAMPLE_PERIOD_US);

#[arduino::entry]
fn main() -> ! {
    let mut app = AppBuilder::build(CONFIG, BAUD_RATE);
    app.run()
}

#[cfg(feature = "debug")]
#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    use arduino_uno::hal::port::mode::Output;
    use arduino_uno::hal::port::portb::PB5;
    use embedded_hal::digital::v2::OutputPin;
    use void::ResultVoidExt;

    let mut builtin_led: PB5<Output> = unsafe { core::mem::MaybeUninit::uninit().assume_init() };
    builtin_led.set_high().void_unwrap();

    let mut serial: arduino::Serial<arduino::hal::port::mode::Floating> =
        unsafe { core::mem::MaybeUninit::uninit().assume_init() };

    ufmt::uwriteln!(&mut serial, "Firmware panic!\r").void_unwrap();

    if let Some(loc) = info.location() {
        ufmt::uwriteln!(
            &mut serial,
            "  At {}:{}:{}\r",
            loc.file(),
            loc.line(),
            loc.column(),
        )
        .void_unwrap();
    }

    loop {
        builtin_led.set_high().void_unwrap();
        arduino::delay_ms(600);
        builtin_led.set_low().void_unwrap();
        arduino::delay_ms(150);
    }
}
