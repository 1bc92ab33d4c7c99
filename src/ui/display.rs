//! SSD1306 OLED display as a 16×2 character panel.

use embedded_graphics::mono_font::ascii::FONT_8X13;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use morse_trainer::config::{DISPLAY_COLS, DISPLAY_ROWS};
use morse_trainer::{CharacterDisplay, Error};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Cell size in pixels. 16 columns of 8 px fill the 128 px width.
const CELL_WIDTH: i32 = 8;
const CELL_HEIGHT: i32 = 13;
/// Vertical pitch between the two text rows.
const ROW_PITCH: i32 = 24;
const TOP_MARGIN: i32 = 8;

/// Type alias for the concrete display driver.
pub type Oled<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Character panel on top of a buffered SSD1306.
///
/// Each `print` redraws the touched cells and flushes the frame buffer.
pub struct TextPanel<I2C> {
    oled: Oled<I2C>,
    row: u8,
    col: u8,
}

impl<I2C> TextPanel<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Initialise the SSD1306 and blank the screen.
    pub fn new(i2c: I2C) -> Result<Self, Error> {
        let interface = I2CDisplayInterface::new(i2c);
        let mut oled = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        oled.init().map_err(|_| Error::Display)?;
        oled.clear_buffer();
        oled.flush().map_err(|_| Error::Display)?;
        Ok(Self { oled, row: 0, col: 0 })
    }

    fn cell_origin(row: u8, col: u8) -> Point {
        Point::new(
            i32::from(col) * CELL_WIDTH,
            TOP_MARGIN + i32::from(row) * ROW_PITCH,
        )
    }

    fn draw_cell(&mut self, c: char) -> Result<(), Error> {
        let origin = Self::cell_origin(self.row, self.col);
        Rectangle::new(origin, Size::new(CELL_WIDTH as u32, CELL_HEIGHT as u32))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::Off))
            .draw(&mut self.oled)
            .map_err(|_| Error::Display)?;

        let mut buf = [0u8; 4];
        Text::with_baseline(c.encode_utf8(&mut buf), origin, text_style(), Baseline::Top)
            .draw(&mut self.oled)
            .map_err(|_| Error::Display)?;
        Ok(())
    }
}

fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_8X13)
        .text_color(BinaryColor::On)
        .build()
}

impl<I2C> CharacterDisplay for TextPanel<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn clear(&mut self) -> Result<(), Error> {
        self.oled.clear_buffer();
        self.row = 0;
        self.col = 0;
        self.oled.flush().map_err(|_| Error::Display)
    }

    fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), Error> {
        self.row = row;
        self.col = col;
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<(), Error> {
        for c in text.chars() {
            // Off-panel writes are dropped, like an HD44780 past column 16.
            if self.row < DISPLAY_ROWS && self.col < DISPLAY_COLS {
                self.draw_cell(c)?;
            }
            self.col = self.col.saturating_add(1);
        }
        self.oled.flush().map_err(|_| Error::Display)
    }
}
