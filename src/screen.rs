use std::path::PathBuf;

use anyhow::{anyhow, Context};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::{Dimensions, DrawTarget, Pixel};
use embedded_graphics::primitives::Rectangle;
use linux_embedded_hal::I2cdev;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

type Oled =
    Ssd1306<I2CInterface<I2cdev>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

pub struct ScreenBuilder {
    pub i2c_bus: PathBuf,
    pub address: u8,
}

impl ScreenBuilder {
    pub fn build(self) -> anyhow::Result<Screen> {
        let Self { i2c_bus, address } = self;

        let i2c = I2cdev::new(&i2c_bus)
            .with_context(|| format!("opening I2C bus {}", i2c_bus.display()))?;
        let interface = I2CDisplayInterface::new_custom_address(i2c, address);

        log::info!("initializing SSD1306 at {address:#04x}");
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        display
            .init()
            .map_err(|e| anyhow!("initializing SSD1306 at {address:#04x}: {e:?}"))?;

        Ok(Screen { display })
    }
}

pub struct Screen {
    display: Oled,
}

impl Screen {
    /// Clears the buffer and hands out exclusive drawing rights for one
    /// frame. Nothing reaches the panel until the frame is committed.
    pub fn begin_frame(&mut self) -> Frame<'_> {
        self.display.clear_buffer();
        Frame {
            display: &mut self.display,
        }
    }
}

/// One in-memory frame. Drawing goes to the buffer; `commit` flushes it to
/// the panel in a single transfer. Dropping a frame without committing
/// abandons it, so nothing is ever half-flushed.
pub struct Frame<'a> {
    display: &'a mut Oled,
}

impl Frame<'_> {
    pub fn commit(self) -> anyhow::Result<()> {
        self.display
            .flush()
            .map_err(|e| anyhow!("flushing frame to panel: {e:?}"))
    }
}

impl Dimensions for Frame<'_> {
    fn bounding_box(&self) -> Rectangle {
        self.display.bounding_box()
    }
}

impl DrawTarget for Frame<'_> {
    type Color = BinaryColor;
    type Error = <Oled as DrawTarget>::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.display.draw_iter(pixels)
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        self.display.fill_solid(area, color)
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.display.clear(color)
    }
}
