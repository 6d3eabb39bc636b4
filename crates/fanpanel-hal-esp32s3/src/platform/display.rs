use display_interface::DisplayError as InterfaceError;
use embedded_hal::i2c::I2c;
use log::debug;
use ssd1306::{I2CDisplayInterface, Ssd1306, mode::BufferedGraphicsMode, prelude::*};

/// Panel geometry shared with the renderer.
pub const WIDTH: u32 = 128;
pub const HEIGHT: u32 = 64;

/// Buffered SSD1306 on I2C; also the embedded-graphics draw target.
pub type OledCanvas<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

#[derive(Debug)]
pub enum DisplayError {
    Init(InterfaceError),
    Flush(InterfaceError),
}

pub type OledDisplayResult = Result<(), DisplayError>;

/// Board-level adapter for the 128x64 SSD1306 panel.
///
/// The panel is mounted upside down on the panel board, hence the
/// rotation argument.
pub struct OledDisplay<I2C> {
    canvas: OledCanvas<I2C>,
}

impl<I2C> OledDisplay<I2C>
where
    I2C: I2c,
{
    pub fn new(i2c: I2C, rotation: DisplayRotation) -> Self {
        let interface = I2CDisplayInterface::new(i2c);
        let canvas =
            Ssd1306::new(interface, DisplaySize128x64, rotation).into_buffered_graphics_mode();
        Self { canvas }
    }

    /// Send the controller init sequence and blank the panel.
    pub fn initialize(&mut self) -> OledDisplayResult {
        self.canvas.init().map_err(DisplayError::Init)?;
        self.canvas.clear_buffer();
        self.flush()?;
        debug!("display: ssd1306 ready {}x{}", WIDTH, HEIGHT);
        Ok(())
    }

    pub fn canvas(&mut self) -> &mut OledCanvas<I2C> {
        &mut self.canvas
    }

    pub fn flush(&mut self) -> OledDisplayResult {
        self.canvas.flush().map_err(DisplayError::Flush)
    }
}
