//! Per-button gesture state machine.
//!
//! A [`GestureDetector`] is fed the raw button level once per loop iteration
//! and turns it into at most one [`GestureKind`] per call:
//!
//! * release before the long-press threshold opens a short window; a second
//!   press inside it yields one `DoubleClick`, otherwise the window expiry
//!   yields one `Click`. With double clicks disabled the release itself
//!   yields the `Click`, so rapid presses each count;
//! * holding past the threshold yields `LongPressStart`, then
//!   `LongPressRepeat` at the accelerated cadence until release. Releasing a
//!   long press emits nothing.
//!
//! Level changes shorter than the debounce window never reach the state
//! machine, so glitches do not restart any timer.

use super::{GestureKind, repeat_due};
use crate::time::elapsed_ms;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GestureConfig {
    debounce_ms: u16,
    click_ms: u16,
    long_press_ms: u16,
    double_click: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self::command()
    }
}

impl GestureConfig {
    pub const fn new(debounce_ms: u16, click_ms: u16, long_press_ms: u16) -> Self {
        Self {
            debounce_ms,
            click_ms,
            long_press_ms,
            double_click: true,
        }
    }

    /// Timing for Up/Down: no double click and an early long press so
    /// stepping through digits and values feels immediate.
    pub const fn stepping() -> Self {
        Self::new(2, 60, 450).with_double_click(false)
    }

    /// Timing for Enter/Esc, where double clicks carry meaning.
    pub const fn command() -> Self {
        Self::new(2, 220, 800)
    }

    pub const fn with_debounce_ms(mut self, debounce_ms: u16) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    pub const fn with_click_ms(mut self, click_ms: u16) -> Self {
        self.click_ms = click_ms;
        self
    }

    pub const fn with_long_press_ms(mut self, long_press_ms: u16) -> Self {
        self.long_press_ms = long_press_ms;
        self
    }

    /// When disabled, `click_ms` is unused.
    pub const fn with_double_click(mut self, double_click: bool) -> Self {
        self.double_click = double_click;
        self
    }

    pub const fn debounce_ms(&self) -> u16 {
        self.debounce_ms
    }

    pub const fn click_ms(&self) -> u16 {
        self.click_ms
    }

    pub const fn long_press_ms(&self) -> u16 {
        self.long_press_ms
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Edge {
    Press(u32),
    Release(u32),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Phase {
    Released,
    Pressed {
        since_ms: u32,
    },
    AwaitingSecond {
        released_ms: u32,
    },
    Held {
        since_ms: u32,
        last_repeat_ms: Option<u32>,
    },
    /// Second press of a double click; swallowed until release.
    AwaitingRelease,
}

#[derive(Clone, Copy, Debug)]
pub struct GestureDetector {
    config: GestureConfig,
    raw_pressed: bool,
    raw_since_ms: u32,
    stable_pressed: bool,
    phase: Phase,
}

impl GestureDetector {
    pub const fn new(config: GestureConfig) -> Self {
        Self {
            config,
            raw_pressed: false,
            raw_since_ms: 0,
            stable_pressed: false,
            phase: Phase::Released,
        }
    }

    pub const fn config(&self) -> GestureConfig {
        self.config
    }

    /// Debounced level.
    pub const fn is_pressed(&self) -> bool {
        self.stable_pressed
    }

    pub fn update(&mut self, pressed: bool, now_ms: u32) -> Option<GestureKind> {
        let edge = self.debounce(pressed, now_ms);

        match self.phase {
            Phase::Released => {
                if let Some(Edge::Press(at_ms)) = edge {
                    self.phase = Phase::Pressed { since_ms: at_ms };
                }
                None
            }
            Phase::Pressed { since_ms } => match edge {
                Some(Edge::Release(_)) if !self.config.double_click => {
                    self.phase = Phase::Released;
                    Some(GestureKind::Click)
                }
                Some(Edge::Release(at_ms)) => {
                    self.phase = Phase::AwaitingSecond { released_ms: at_ms };
                    None
                }
                _ if elapsed_ms(now_ms, since_ms) >= self.config.long_press_ms as u32 => {
                    self.phase = Phase::Held {
                        since_ms: now_ms,
                        last_repeat_ms: None,
                    };
                    Some(GestureKind::LongPressStart)
                }
                _ => None,
            },
            Phase::AwaitingSecond { released_ms } => match edge {
                Some(Edge::Press(at_ms))
                    if elapsed_ms(at_ms, released_ms) <= self.config.click_ms as u32 =>
                {
                    self.phase = Phase::AwaitingRelease;
                    Some(GestureKind::DoubleClick)
                }
                Some(Edge::Press(at_ms)) => {
                    // Polled too late to see the window close: resolve the
                    // first click and start tracking the new press.
                    self.phase = Phase::Pressed { since_ms: at_ms };
                    Some(GestureKind::Click)
                }
                _ if elapsed_ms(now_ms, released_ms) > self.config.click_ms as u32 => {
                    self.phase = Phase::Released;
                    Some(GestureKind::Click)
                }
                _ => None,
            },
            Phase::Held {
                since_ms,
                last_repeat_ms,
            } => {
                if let Some(Edge::Release(_)) = edge {
                    self.phase = Phase::Released;
                    return None;
                }

                let due = match last_repeat_ms {
                    None => true,
                    Some(last) => repeat_due(now_ms, last, elapsed_ms(now_ms, since_ms)),
                };
                if !due {
                    return None;
                }

                self.phase = Phase::Held {
                    since_ms,
                    last_repeat_ms: Some(now_ms),
                };
                Some(GestureKind::LongPressRepeat)
            }
            Phase::AwaitingRelease => {
                if let Some(Edge::Release(_)) = edge {
                    self.phase = Phase::Released;
                }
                None
            }
        }
    }

    fn debounce(&mut self, pressed: bool, now_ms: u32) -> Option<Edge> {
        if pressed != self.raw_pressed {
            self.raw_pressed = pressed;
            self.raw_since_ms = now_ms;
        }

        if self.raw_pressed == self.stable_pressed
            || elapsed_ms(now_ms, self.raw_since_ms) < self.config.debounce_ms as u32
        {
            return None;
        }

        self.stable_pressed = self.raw_pressed;
        Some(if self.stable_pressed {
            Edge::Press(self.raw_since_ms)
        } else {
            Edge::Release(self.raw_since_ms)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive(
        detector: &mut GestureDetector,
        pressed: bool,
        start_ms: u32,
        duration_ms: u32,
    ) -> Vec<(u32, GestureKind)> {
        (0..duration_ms)
            .filter_map(|step| {
                let now = start_ms.wrapping_add(step);
                detector.update(pressed, now).map(|kind| (now, kind))
            })
            .collect()
    }

    #[test]
    fn single_press_resolves_to_click_after_window() {
        let mut det = GestureDetector::new(GestureConfig::command());
        assert!(drive(&mut det, false, 0, 10).is_empty());
        assert!(drive(&mut det, true, 10, 100).is_empty());
        let events = drive(&mut det, false, 110, 300);
        assert_eq!(events, vec![(331, GestureKind::Click)]);
    }

    #[test]
    fn second_press_inside_window_is_one_double_click() {
        let mut det = GestureDetector::new(GestureConfig::command());
        let mut events = drive(&mut det, true, 0, 50);
        events.extend(drive(&mut det, false, 50, 50));
        events.extend(drive(&mut det, true, 100, 50));
        events.extend(drive(&mut det, false, 150, 600));
        assert_eq!(events, vec![(102, GestureKind::DoubleClick)]);
    }

    #[test]
    fn stepping_presses_click_on_release_without_merging() {
        let mut det = GestureDetector::new(GestureConfig::stepping());
        let mut events = drive(&mut det, true, 0, 20);
        events.extend(drive(&mut det, false, 20, 20));
        events.extend(drive(&mut det, true, 40, 20));
        events.extend(drive(&mut det, false, 60, 300));
        assert_eq!(
            events,
            vec![(22, GestureKind::Click), (62, GestureKind::Click)]
        );
    }

    #[test]
    fn glitches_shorter_than_debounce_are_ignored() {
        let mut det = GestureDetector::new(GestureConfig::command());
        assert_eq!(det.update(true, 0), None);
        assert_eq!(det.update(false, 1), None);
        assert!(drive(&mut det, false, 2, 1_000).is_empty());
        assert!(!det.is_pressed());
    }

    #[test]
    fn glitch_during_hold_does_not_restart_long_press_timer() {
        let mut det = GestureDetector::new(GestureConfig::command());
        assert!(drive(&mut det, true, 0, 300).is_empty());
        assert_eq!(det.update(false, 300), None);
        let events = drive(&mut det, true, 301, 500);
        assert_eq!(events.first(), Some(&(800, GestureKind::LongPressStart)));
    }

    #[test]
    fn long_press_repeats_accelerate_and_release_is_silent() {
        let mut det = GestureDetector::new(GestureConfig::stepping());
        let events = drive(&mut det, true, 0, 5_000);

        assert_eq!(events[0], (450, GestureKind::LongPressStart));
        assert_eq!(events[1], (451, GestureKind::LongPressRepeat));
        assert_eq!(events[2], (611, GestureKind::LongPressRepeat));
        assert!(
            events[1..]
                .iter()
                .all(|(_, kind)| *kind == GestureKind::LongPressRepeat)
        );

        let gaps: Vec<u32> = events[1..].windows(2).map(|w| w[1].0 - w[0].0).collect();
        assert!(gaps.windows(2).all(|w| w[1] <= w[0]));
        assert_eq!(gaps.last(), Some(&30));

        assert!(drive(&mut det, false, 5_000, 1_000).is_empty());
    }

    #[test]
    fn click_across_counter_wrap() {
        let mut det = GestureDetector::new(GestureConfig::command());
        let start = u32::MAX - 40;
        let mut events = drive(&mut det, true, start, 20);
        events.extend(drive(&mut det, false, start.wrapping_add(20), 300));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].1, GestureKind::Click);
    }
}
