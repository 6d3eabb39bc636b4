//! Four independent gesture detectors sampled together.

use heapless::Deque;
use log::debug;

use super::{
    Button, GestureEvent,
    gesture::{GestureConfig, GestureDetector},
};

// One sample emits at most one gesture per button.
const PENDING_EVENTS: usize = Button::COUNT;

/// Raw pressed levels indexed by [`Button::index`].
pub type ButtonLevels = [bool; Button::COUNT];

/// Gesture detection for the whole button panel.
///
/// Board adapters read the pins, hand the levels to [`GesturePanel::sample`]
/// and drain the resulting events one at a time. No chord detection: each
/// button is classified on its own.
#[derive(Debug)]
pub struct GesturePanel {
    detectors: [GestureDetector; Button::COUNT],
    pending: Deque<GestureEvent, PENDING_EVENTS>,
    dropped: u32,
}

impl Default for GesturePanel {
    fn default() -> Self {
        Self::new([
            GestureConfig::stepping(),
            GestureConfig::stepping(),
            GestureConfig::command(),
            GestureConfig::command(),
        ])
    }
}

impl GesturePanel {
    pub fn new(configs: [GestureConfig; Button::COUNT]) -> Self {
        Self {
            detectors: configs.map(GestureDetector::new),
            pending: Deque::new(),
            dropped: 0,
        }
    }

    pub fn sample(&mut self, levels: ButtonLevels, now_ms: u32) {
        for button in Button::ALL {
            let detector = &mut self.detectors[button.index()];
            if let Some(kind) = detector.update(levels[button.index()], now_ms) {
                // Capacity matches the button count; a full deque means the
                // caller stopped draining and the oldest backlog wins.
                if let Err(event) = self.pending.push_back(GestureEvent::new(button, kind)) {
                    self.dropped = self.dropped.saturating_add(1);
                    debug!("input: gesture backlog full, dropped event={:?}", event);
                }
            }
        }
    }

    pub fn next_event(&mut self) -> Option<GestureEvent> {
        self.pending.pop_front()
    }

    pub fn is_pressed(&self, button: Button) -> bool {
        self.detectors[button.index()].is_pressed()
    }

    /// Gestures lost because the backlog was not drained.
    pub const fn dropped(&self) -> u32 {
        self.dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::GestureKind;

    fn levels(pressed: &[Button]) -> ButtonLevels {
        let mut levels = [false; Button::COUNT];
        for button in pressed {
            levels[button.index()] = true;
        }
        levels
    }

    fn collect(
        panel: &mut GesturePanel,
        pressed: &[Button],
        start: u32,
        len: u32,
    ) -> Vec<GestureEvent> {
        let mut out = Vec::new();
        for now in start..start + len {
            panel.sample(levels(pressed), now);
            while let Some(event) = panel.next_event() {
                out.push(event);
            }
        }
        out
    }

    #[test]
    fn buttons_are_classified_independently() {
        let mut panel = GesturePanel::default();
        let mut events = collect(&mut panel, &[Button::Up, Button::Esc], 0, 30);
        events.extend(collect(&mut panel, &[], 30, 400));

        assert_eq!(
            events,
            vec![
                GestureEvent::click(Button::Up),
                GestureEvent::click(Button::Esc),
            ]
        );
    }

    #[test]
    fn simultaneous_long_press_streams_interleave() {
        let mut panel = GesturePanel::default();
        let events = collect(&mut panel, &[Button::Up, Button::Down], 0, 460);
        assert_eq!(
            events,
            vec![
                GestureEvent::new(Button::Up, GestureKind::LongPressStart),
                GestureEvent::new(Button::Down, GestureKind::LongPressStart),
                GestureEvent::new(Button::Up, GestureKind::LongPressRepeat),
                GestureEvent::new(Button::Down, GestureKind::LongPressRepeat),
            ]
        );
        assert!(panel.is_pressed(Button::Up));
        assert!(!panel.is_pressed(Button::Enter));
    }

    #[test]
    fn rapid_up_presses_each_step() {
        let mut panel = GesturePanel::default();
        let mut events = collect(&mut panel, &[Button::Up], 0, 20);
        events.extend(collect(&mut panel, &[], 20, 20));
        events.extend(collect(&mut panel, &[Button::Up], 40, 20));
        events.extend(collect(&mut panel, &[], 60, 20));

        assert_eq!(
            events,
            vec![GestureEvent::click(Button::Up), GestureEvent::click(Button::Up)]
        );
    }

    #[test]
    fn undrained_backlog_keeps_oldest_and_counts_drops() {
        let mut panel = GesturePanel::default();
        for now in 0..=800 {
            panel.sample(levels(&Button::ALL), now);
        }

        let mut backlog = Vec::new();
        while let Some(event) = panel.next_event() {
            backlog.push(event);
        }
        assert_eq!(
            backlog,
            vec![
                GestureEvent::new(Button::Up, GestureKind::LongPressStart),
                GestureEvent::new(Button::Down, GestureKind::LongPressStart),
                GestureEvent::new(Button::Up, GestureKind::LongPressRepeat),
                GestureEvent::new(Button::Down, GestureKind::LongPressRepeat),
            ]
        );
        assert!(panel.dropped() >= 2);
    }
}
