//! PWM outputs: backlight level and sidetone.

use embassy_nrf::pwm::{Instance, SimplePwm};
use morse_trainer::{Backlight, Error, Tone};

/// PWM period for the backlight, well above flicker.
const BACKLIGHT_HZ: u32 = 1_000;

/// Backlight LED on a single PWM channel.
pub struct PwmBacklight<T: Instance> {
    pwm: SimplePwm<'static, T>,
}

impl<T: Instance> PwmBacklight<T> {
    pub fn new(mut pwm: SimplePwm<'static, T>) -> Self {
        pwm.set_period(BACKLIGHT_HZ);
        pwm.set_duty(0, 0);
        pwm.disable();
        Self { pwm }
    }
}

impl<T: Instance> Backlight for PwmBacklight<T> {
    fn set_level(&mut self, level: f32) -> Result<(), Error> {
        if level <= 0.0 {
            self.pwm.disable();
            return Ok(());
        }
        let duty = (f32::from(self.pwm.max_duty()) * level) as u16;
        self.pwm.enable();
        self.pwm.set_duty(0, duty);
        Ok(())
    }
}

/// Piezo buzzer driven with a 50 % square wave.
pub struct PwmTone<T: Instance> {
    pwm: SimplePwm<'static, T>,
}

impl<T: Instance> PwmTone<T> {
    pub fn new(mut pwm: SimplePwm<'static, T>) -> Self {
        pwm.disable();
        Self { pwm }
    }
}

impl<T: Instance> Tone for PwmTone<T> {
    fn start(&mut self, frequency_hz: u32) -> Result<(), Error> {
        if frequency_hz == 0 {
            return Err(Error::Tone);
        }
        self.pwm.enable();
        self.pwm.set_period(frequency_hz);
        self.pwm.set_duty(0, self.pwm.max_duty() / 2);
        Ok(())
    }

    fn stop(&mut self) -> Result<(), Error> {
        self.pwm.disable();
        Ok(())
    }
}
