//! Input abstraction layer.

mod accel;
pub mod gesture;
pub mod mock;
pub mod panel;

pub use accel::{REPEAT_FLOOR_MS, repeat_due, repeat_interval_ms};

/// The four physical panel buttons.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Button {
    Up,
    Down,
    Enter,
    Esc,
}

impl Button {
    pub const COUNT: usize = 4;
    pub const ALL: [Button; Self::COUNT] = [Self::Up, Self::Down, Self::Enter, Self::Esc];

    pub const fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Down => 1,
            Self::Enter => 2,
            Self::Esc => 3,
        }
    }
}

/// Semantic gesture derived from raw press/release timing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GestureKind {
    Click,
    DoubleClick,
    LongPressStart,
    LongPressRepeat,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GestureEvent {
    pub button: Button,
    pub kind: GestureKind,
}

impl GestureEvent {
    pub const fn new(button: Button, kind: GestureKind) -> Self {
        Self { button, kind }
    }

    pub const fn click(button: Button) -> Self {
        Self::new(button, GestureKind::Click)
    }

    pub const fn double_click(button: Button) -> Self {
        Self::new(button, GestureKind::DoubleClick)
    }
}

/// Polled gesture provider.
///
/// Implementations sample their buttons when polled and return at most one
/// event per call; callers keep polling until `Ok(None)`.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self, now_ms: u32) -> Result<Option<GestureEvent>, Self::Error>;
}
