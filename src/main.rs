//! Morse trainer firmware for the nRF52840.
//!
//! Wires the board peripherals into a [`Device`] and runs its control
//! loop: sample the keys, tick, sleep for the interval the tick asks for.

#![no_std]
#![no_main]

mod ui;

use defmt::{info, unwrap};
use embassy_executor::Spawner;
use embassy_nrf::gpio::Pin;
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals, pwm::SimplePwm};
use embassy_time::{Delay, Instant, Timer};
use morse_trainer::{Device, Timing};
use {defmt_rtt as _, panic_probe as _};

use crate::ui::buttons::Keys;
use crate::ui::display::TextPanel;
use crate::ui::log::rtt_log;
use crate::ui::pwm::{PwmBacklight, PwmTone};

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("morse-trainer v{}", env!("CARGO_PKG_VERSION"));

    // Pins: button P0.11, key P0.16, backlight P0.17, buzzer P0.22,
    // OLED SDA P0.26 / SCL P0.27.
    let keys = Keys::new(p.P0_11.degrade(), p.P0_16.degrade());

    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let panel = unwrap!(TextPanel::new(i2c));

    let backlight = PwmBacklight::new(SimplePwm::new_1ch(p.PWM0, p.P0_17));
    let tone = PwmTone::new(SimplePwm::new_1ch(p.PWM1, p.P0_22));

    let mut device = Device::new(panel, tone, rtt_log(), backlight, Timing::default());
    let mut delay = Delay;

    unwrap!(device.start(&mut delay));

    loop {
        let now = Instant::now().as_millis();
        let wait = unwrap!(device.tick(now, keys.is_down(), &mut delay));
        Timer::after_millis(wait).await;
    }
}
