//! App-level view models consumed by the board renderer.

use crate::{animation::Sprite, password::PassCode, telemetry::Telemetry};

/// Right-hand side of a submenu row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RowValue<'a> {
    None,
    Submenu { locked: bool },
    Number { value: i32, units: &'a str },
    Choice(&'a str),
    Reading { value: f32, units: &'a str },
    Flag(bool),
    Action,
    Back,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuRowView<'a> {
    pub label: &'a str,
    pub value: RowValue<'a>,
}

impl Default for MenuRowView<'_> {
    fn default() -> Self {
        Self {
            label: "",
            value: RowValue::None,
        }
    }
}

/// App-level view model consumed by board/HAL renderer.
pub enum Screen<'a> {
    Idle {
        telemetry: &'a Telemetry,
        sprites: &'a [Sprite],
    },
    /// Top-level tiles, one shown at a time.
    Carousel {
        title: &'a str,
        tiles: &'a [&'a str],
        selected: usize,
    },
    Submenu {
        title: &'a str,
        rows: &'a [MenuRowView<'a>],
        cursor: usize,
        /// The row under the cursor is being edited.
        editing: bool,
    },
    Password {
        digits: PassCode,
        focus: usize,
        wrong: bool,
    },
    Confirm {
        prompt: &'a str,
        options: &'a [&'a str],
        selected: usize,
    },
}
