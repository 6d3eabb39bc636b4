//! Millisecond tick arithmetic.
//!
//! The board clock is truncated to a `u32` millisecond counter which wraps
//! roughly every 49.7 days. All comparisons go through [`elapsed_ms`] so a
//! wrap between two timestamps still yields the right distance.

/// Milliseconds elapsed from `since_ms` to `now_ms`, modulo 2^32.
#[inline]
pub const fn elapsed_ms(now_ms: u32, since_ms: u32) -> u32 {
    now_ms.wrapping_sub(since_ms)
}

/// True once at least `period_ms` has passed since `since_ms`.
#[inline]
pub const fn has_elapsed(now_ms: u32, since_ms: u32, period_ms: u32) -> bool {
    elapsed_ms(now_ms, since_ms) >= period_ms
}
