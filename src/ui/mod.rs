//! Board side of the trainer - OLED text panel, key inputs, PWM outputs
//! and the RTT log stream.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C, used as a 16×2 text grid
//! - **Keys**: push button and straight key, either one keys the tone
//! - **PWM**: backlight level on PWM0, sidetone square wave on PWM1
//! - **Log**: decoded text streamed to the host over defmt-rtt

pub mod buttons;
pub mod display;
pub mod log;
pub mod pwm;
