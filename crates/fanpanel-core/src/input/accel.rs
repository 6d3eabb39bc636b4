use crate::time::elapsed_ms;

/// Shortest repeat interval, reached after a long hold.
pub const REPEAT_FLOOR_MS: u16 = 30;
const REPEAT_BASE_MS: u16 = 160;

// (held longer than, interval); ordered from the longest hold down.
const REPEAT_STEPS: [(u32, u16); 4] = [
    (2_500, REPEAT_FLOOR_MS),
    (1_600, 50),
    (1_000, 80),
    (600, 120),
];

/// Repeat interval for a button that has been held for `held_ms`.
///
/// Non-increasing in `held_ms` and never below [`REPEAT_FLOOR_MS`].
pub fn repeat_interval_ms(held_ms: u32) -> u16 {
    REPEAT_STEPS
        .iter()
        .find(|(threshold, _)| held_ms > *threshold)
        .map(|(_, interval)| *interval)
        .unwrap_or(REPEAT_BASE_MS)
}

/// Whether the next repeat should fire given the last one at `last_repeat_ms`.
pub fn repeat_due(now_ms: u32, last_repeat_ms: u32, held_ms: u32) -> bool {
    elapsed_ms(now_ms, last_repeat_ms) >= repeat_interval_ms(held_ms) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_table_steps_down_with_hold_time() {
        assert_eq!(repeat_interval_ms(0), 160);
        assert_eq!(repeat_interval_ms(600), 160);
        assert_eq!(repeat_interval_ms(601), 120);
        assert_eq!(repeat_interval_ms(1_001), 80);
        assert_eq!(repeat_interval_ms(1_601), 50);
        assert_eq!(repeat_interval_ms(2_501), 30);
        assert_eq!(repeat_interval_ms(u32::MAX), 30);
    }

    #[test]
    fn interval_is_non_increasing_and_floored() {
        let mut previous = repeat_interval_ms(0);
        for held in (0..10_000).step_by(7) {
            let interval = repeat_interval_ms(held);
            assert!(interval <= previous, "interval grew at held={held}");
            assert!(interval >= REPEAT_FLOOR_MS);
            previous = interval;
        }
    }

    #[test]
    fn repeat_due_uses_wrapping_distance() {
        let last = u32::MAX - 20;
        assert!(!repeat_due(last.wrapping_add(29), last, 3_000));
        assert!(repeat_due(last.wrapping_add(30), last, 3_000));
    }
}
