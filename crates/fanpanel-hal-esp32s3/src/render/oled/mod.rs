use core::fmt::Write;

use embedded_graphics::{
    mono_font::{
        MonoTextStyle,
        ascii::{FONT_6X10, FONT_9X15},
    },
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle, Rectangle, RoundedRectangle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};
use fanpanel_core::{
    animation::{Sprite, SpriteSheet},
    password::PassCode,
    render::{MenuRowView, RowValue, Screen},
    telemetry::{AlarmKind, Telemetry},
};
use heapless::String;

use crate::platform::display::WIDTH;

use super::FrameRenderer;

mod dialog;
mod fan;
mod idle;
mod menu;
mod primitives;

#[allow(unused_imports)]
use self::{dialog::*, fan::*, idle::*, menu::*, primitives::*};

const CHAR_W: i32 = 6;
const TITLE_RULE_Y: i32 = 11;
const ROW_HEIGHT: i32 = 10;
const LIST_TOP: i32 = 13;
const ROWS_VISIBLE: usize = 5;
const VALUE_BUF: usize = 24;

#[derive(Clone, Copy, Debug)]
struct Palette {
    bg: BinaryColor,
    fg: BinaryColor,
}

/// Draws every [`Screen`] onto a monochrome 128x64 target.
#[derive(Debug, Clone, Copy, Default)]
pub struct OledRenderer {
    inverted: bool,
}

impl OledRenderer {
    pub const fn new() -> Self {
        Self { inverted: false }
    }

    /// Dark text on a lit panel.
    pub const fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    fn palette(&self) -> Palette {
        if self.inverted {
            Palette {
                bg: BinaryColor::On,
                fg: BinaryColor::Off,
            }
        } else {
            Palette {
                bg: BinaryColor::Off,
                fg: BinaryColor::On,
            }
        }
    }
}

impl FrameRenderer for OledRenderer {
    fn render<D>(&mut self, screen: Screen<'_>, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let palette = self.palette();
        target.clear(palette.bg)?;

        match screen {
            Screen::Idle { telemetry, sprites } => draw_idle(target, telemetry, sprites, palette),
            Screen::Carousel {
                title,
                tiles,
                selected,
            } => draw_carousel(target, title, tiles, selected, palette),
            Screen::Submenu {
                title,
                rows,
                cursor,
                editing,
            } => draw_submenu(target, title, rows, cursor, editing, palette),
            Screen::Password {
                digits,
                focus,
                wrong,
            } => draw_password(target, &digits, focus, wrong, palette),
            Screen::Confirm {
                prompt,
                options,
                selected,
            } => draw_confirm(target, prompt, options, selected, palette),
        }
    }
}

#[cfg(test)]
mod tests {
    use core::convert::Infallible;

    use embedded_graphics::Pixel;
    use fanpanel_core::{
        animation::SpriteAnimator,
        telemetry::{Alarms, FanTelemetry},
    };

    use super::*;
    use crate::platform::display::HEIGHT;

    struct TestCanvas {
        pixels: [[bool; WIDTH as usize]; HEIGHT as usize],
    }

    impl TestCanvas {
        fn new() -> Self {
            Self {
                pixels: [[false; WIDTH as usize]; HEIGHT as usize],
            }
        }

        fn is_on(&self, x: usize, y: usize) -> bool {
            self.pixels[y][x]
        }

        fn lit_count(&self) -> usize {
            self.pixels.iter().flatten().filter(|on| **on).count()
        }
    }

    impl OriginDimensions for TestCanvas {
        fn size(&self) -> Size {
            Size::new(WIDTH, HEIGHT)
        }
    }

    impl DrawTarget for TestCanvas {
        type Color = BinaryColor;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(point, color) in pixels {
                if point.x < 0 || point.y < 0 {
                    continue;
                }
                let (x, y) = (point.x as usize, point.y as usize);
                if x < WIDTH as usize && y < HEIGHT as usize {
                    self.pixels[y][x] = color.is_on();
                }
            }
            Ok(())
        }
    }

    fn quiet_telemetry(alarms: Alarms) -> Telemetry {
        let fan = FanTelemetry {
            current_ma: 0.0,
            power_w: 0.0,
            runtime_min: 0.0,
        };
        Telemetry {
            temperature_c: 21.5,
            supply_v: 12.0,
            fans: [fan; 2],
            light_ok: true,
            alarms,
        }
    }

    #[test]
    fn idle_screen_draws_active_alarm_badges_only() {
        let telemetry = quiet_telemetry(Alarms {
            door: true,
            ..Alarms::default()
        });
        let mut canvas = TestCanvas::new();
        let mut renderer = OledRenderer::new();
        let Ok(()) = renderer.render(
            Screen::Idle {
                telemetry: &telemetry,
                sprites: &[],
            },
            &mut canvas,
        );

        assert!(canvas.is_on(1, 55));
        assert!(!canvas.is_on(14, 55));
    }

    #[test]
    fn idle_screen_draws_visible_fans() {
        let telemetry = quiet_telemetry(Alarms::default());
        let mut animator = SpriteAnimator::new();
        assert!(
            animator
                .add_sprite(86, 10, 16, 16, SpriteSheet::Fan, 100)
                .is_some()
        );

        let mut canvas = TestCanvas::new();
        let Ok(()) = OledRenderer::new().render(
            Screen::Idle {
                telemetry: &telemetry,
                sprites: animator.sprites(),
            },
            &mut canvas,
        );

        // hub and the horizontal blade of frame 0
        assert!(canvas.is_on(94, 18));
        assert!(canvas.is_on(90, 18));
    }

    #[test]
    fn submenu_inverts_cursor_row() {
        let rows = [
            MenuRowView {
                label: "Temp L",
                value: RowValue::Number {
                    value: 25,
                    units: "C",
                },
            },
            MenuRowView {
                label: "Back",
                value: RowValue::Back,
            },
        ];
        let mut canvas = TestCanvas::new();
        let Ok(()) = OledRenderer::new().render(
            Screen::Submenu {
                title: "Temperature",
                rows: &rows,
                cursor: 0,
                editing: false,
            },
            &mut canvas,
        );

        assert!(canvas.is_on(0, 14));
        assert!(!canvas.is_on(0, 24));
    }

    #[test]
    fn password_focus_box_is_filled() {
        let mut canvas = TestCanvas::new();
        let Ok(()) = OledRenderer::new().render(
            Screen::Password {
                digits: [0, 0, 0, 0],
                focus: 2,
                wrong: false,
            },
            &mut canvas,
        );

        assert!(canvas.is_on(68, 19));
        assert!(canvas.is_on(23, 18));
        assert!(!canvas.is_on(25, 20));
    }

    #[test]
    fn confirm_highlights_selected_option() {
        let mut canvas = TestCanvas::new();
        let Ok(()) = OledRenderer::new().render(
            Screen::Confirm {
                prompt: "Save changes?",
                options: &["Apply & Exit", "Discard & Exit", "Cancel"],
                selected: 1,
            },
            &mut canvas,
        );

        assert!(canvas.is_on(17, 29));
        assert!(!canvas.is_on(17, 15));
    }

    #[test]
    fn inverted_palette_lights_the_background() {
        let mut canvas = TestCanvas::new();
        let Ok(()) = OledRenderer::new().with_inverted(true).render(
            Screen::Carousel {
                title: "Main",
                tiles: &["Status"],
                selected: 0,
            },
            &mut canvas,
        );

        assert!(canvas.is_on(0, 63));
        assert!(canvas.lit_count() > (WIDTH * HEIGHT / 2) as usize);
    }

    #[test]
    fn value_labels_follow_row_kind() {
        let mut out = String::<VALUE_BUF>::new();

        format_value(
            RowValue::Reading {
                value: 12.34,
                units: "V",
            },
            false,
            &mut out,
        );
        assert_eq!(out.as_str(), "12.3V");

        format_value(RowValue::Flag(false), false, &mut out);
        assert_eq!(out.as_str(), "OFF");

        format_value(
            RowValue::Number {
                value: -5,
                units: "C",
            },
            true,
            &mut out,
        );
        assert_eq!(out.as_str(), "[-5C]");

        format_value(RowValue::Submenu { locked: true }, false, &mut out);
        assert_eq!(out.as_str(), "*");
    }

    #[test]
    fn long_labels_are_cut_to_fit() {
        assert_eq!(fit_chars("Temperature", 4), "Temp");
        assert_eq!(fit_chars("Temp", 10), "Temp");
    }
}
