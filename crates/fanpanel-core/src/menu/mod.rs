//! Menu tree model and the cursor-stack walker that navigates it.

mod tree;
mod walker;

pub use tree::MAIN_MENU;
pub use walker::{EditState, MAX_DEPTH, MenuWalker, WalkOutcome};

use crate::{
    settings::{ChoiceField, NumericField},
    telemetry::ReadingSource,
};

/// Access rule for entering a submenu.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Guard {
    Open,
    Password,
}

/// Leaf actions handled by the app rather than the walker.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MenuAction {
    FactoryReset,
}

#[derive(Debug)]
pub struct MenuPage {
    pub label: &'static str,
    pub guard: Guard,
    pub children: &'static [MenuNode],
}

#[derive(Debug)]
pub enum MenuNode {
    Submenu(MenuPage),
    /// Numeric value bound to a staged setting.
    Field {
        label: &'static str,
        field: NumericField,
        units: &'static str,
        min: i32,
        max: i32,
        step: i32,
    },
    /// Enumerated value bound to a staged setting.
    Choice {
        label: &'static str,
        field: ChoiceField,
    },
    /// Live telemetry value, read-only.
    Reading {
        label: &'static str,
        source: ReadingSource,
        units: &'static str,
    },
    /// Static text line.
    Info { label: &'static str },
    Action {
        label: &'static str,
        action: MenuAction,
    },
    Back,
}

impl MenuNode {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Submenu(page) => page.label,
            Self::Field { label, .. }
            | Self::Choice { label, .. }
            | Self::Reading { label, .. }
            | Self::Info { label }
            | Self::Action { label, .. } => *label,
            Self::Back => "<Back",
        }
    }
}
