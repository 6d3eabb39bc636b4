//! Application state machine for the idle screen, menu, and modal overlays.

use log::{debug, info, warn};

use crate::{
    animation::{SpriteAnimator, SpriteId, SpriteSheet, duty_cycle_interval},
    input::{Button, GestureEvent, GestureKind, InputProvider},
    menu::{EditState, Guard, MAIN_MENU, MenuAction, MenuNode, MenuWalker, WalkOutcome},
    password::{DEFAULT_PASSCODE, PassCode, PasswordGate},
    queue::{Command, EventQueue},
    render::{MenuRowView, RowValue, Screen},
    settings::{Settings, SettingsStage},
    telemetry::{ReadingValue, Telemetry, TelemetrySource},
    time::{elapsed_ms, has_elapsed},
};

const MAX_TILES: usize = 8;
const MAX_ROWS: usize = 12;

const FAN_SPRITE_SIZE: u8 = 16;
/// Position and base frame interval of each idle-screen fan.
const FAN_SPRITES: [(i16, i16, u32); 4] = [
    (86, 10, 50),
    (107, 10, 150),
    (86, 38, 450),
    (107, 38, 1_350),
];

const CONFIRM_PROMPT: &str = "Save changes?";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HmiConfig {
    /// Inactivity after which any menu session is abandoned.
    pub menu_timeout_ms: u32,
    /// Minimum spacing between render requests.
    pub frame_period_ms: u32,
    pub passcode: PassCode,
    /// Fan sprite 0 switches between fast and slow every period.
    pub fan_duty_period_ms: u32,
    pub fan_fast_ms: u32,
    pub fan_slow_ms: u32,
}

impl Default for HmiConfig {
    fn default() -> Self {
        Self {
            menu_timeout_ms: 60_000,
            frame_period_ms: 25,
            passcode: DEFAULT_PASSCODE,
            fan_duty_period_ms: 5_000,
            fan_fast_ms: 50,
            fan_slow_ms: 800,
        }
    }
}

impl HmiConfig {
    pub const fn with_menu_timeout_ms(mut self, menu_timeout_ms: u32) -> Self {
        self.menu_timeout_ms = menu_timeout_ms;
        self
    }

    pub const fn with_frame_period_ms(mut self, frame_period_ms: u32) -> Self {
        self.frame_period_ms = frame_period_ms;
        self
    }

    pub const fn with_passcode(mut self, passcode: PassCode) -> Self {
        self.passcode = passcode;
        self
    }

    pub const fn with_fan_duty(mut self, period_ms: u32, fast_ms: u32, slow_ms: u32) -> Self {
        self.fan_duty_period_ms = period_ms;
        self.fan_fast_ms = fast_ms;
        self.fan_slow_ms = slow_ms;
        self
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UiMode {
    Idle,
    MenuRoot,
    /// `depth` counts submenus entered below the root carousel.
    Submenu { depth: u8 },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfirmOption {
    ApplyAndExit,
    DiscardAndExit,
    Cancel,
}

impl ConfirmOption {
    pub const ALL: [ConfirmOption; 3] = [Self::ApplyAndExit, Self::DiscardAndExit, Self::Cancel];

    pub const fn label(self) -> &'static str {
        match self {
            Self::ApplyAndExit => "Apply & Exit",
            Self::DiscardAndExit => "Discard & Exit",
            Self::Cancel => "Cancel",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::ApplyAndExit => 0,
            Self::DiscardAndExit => 1,
            Self::Cancel => 2,
        }
    }

    fn previous(self) -> Self {
        Self::ALL[self.index().saturating_sub(1)]
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1).min(Self::ALL.len() - 1)]
    }
}

const CONFIRM_LABELS: [&str; 3] = [
    ConfirmOption::ApplyAndExit.label(),
    ConfirmOption::DiscardAndExit.label(),
    ConfirmOption::Cancel.label(),
];

/// Modal layer that owns all gestures while active.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Overlay {
    None,
    PasswordPrompt(PasswordGate),
    ConfirmDialog { selected: ConfirmOption },
}

/// Single owner of the HMI session: mode, overlays, staged settings, queue,
/// and idle animation.
pub struct HmiApp<IN, TS>
where
    IN: InputProvider,
    TS: TelemetrySource,
{
    input: IN,
    telemetry_source: TS,
    telemetry: Telemetry,
    config: HmiConfig,
    mode: UiMode,
    overlay: Overlay,
    queue: EventQueue,
    settings: SettingsStage,
    walker: MenuWalker,
    carousel: u8,
    unlocked: bool,
    animator: SpriteAnimator,
    duty_sprite: Option<SpriteId>,
    last_input_ms: u32,
    last_frame_ms: Option<u32>,
    pending_redraw: bool,
}

include!("view.rs");
include!("input.rs");
include!("runtime.rs");
include!("navigation.rs");
