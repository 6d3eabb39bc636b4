pub mod oled;

use embedded_graphics::{draw_target::DrawTarget, pixelcolor::BinaryColor};
use fanpanel_core::render::Screen;

pub trait FrameRenderer {
    fn render<D>(&mut self, screen: Screen<'_>, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>;
}
