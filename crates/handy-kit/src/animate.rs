//! Value animation behind an injected scheduler.
//!
//! The counter animation the catalog UI runs on statistics tiles: count
//! from zero to a target over a fixed duration, emitting each intermediate
//! value. Time is a capability here — callers hand in a [`Scheduler`], so
//! the driver stays deterministic under test and never reaches for ambient
//! timers.

use std::time::Duration;

/// Sleep capability injected into time-based helpers.
pub trait Scheduler {
    /// Blocks the caller for the given duration.
    fn sleep(&self, duration: Duration);
}

/// [`Scheduler`] backed by [`std::thread::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadScheduler;

impl Scheduler for ThreadScheduler {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Blocks for `ms` milliseconds on the given scheduler.
pub fn wait(scheduler: &dyn Scheduler, ms: u64) {
    scheduler.sleep(Duration::from_millis(ms));
}

/// Ticks never fire faster than this, however short the duration.
const MIN_STEP_MS: u64 = 50;

/// Animates a counter from zero to `target` over `duration_ms`,
/// emitting each interpolated value into `sink`.
///
/// The step interval is the duration divided by the distance, floored at
/// 50ms. The first emitted value is `0` and the last is always exactly
/// `target`, whatever rounding does in between. Negative targets count
/// downward.
///
/// # Example
///
/// ```rust
/// use handy_kit::{animate_value, Scheduler};
/// use std::time::Duration;
///
/// struct NoSleep;
/// impl Scheduler for NoSleep {
///     fn sleep(&self, _: Duration) {}
/// }
///
/// let mut seen = Vec::new();
/// animate_value(4, 200, &NoSleep, |n| seen.push(n));
/// assert_eq!(seen.first(), Some(&0));
/// assert_eq!(seen.last(), Some(&4));
/// ```
pub fn animate_value<F>(target: i64, duration_ms: u64, scheduler: &dyn Scheduler, mut sink: F)
where
    F: FnMut(i64),
{
    if target == 0 || duration_ms == 0 {
        sink(target);
        return;
    }

    let step_ms = (duration_ms / target.unsigned_abs()).max(MIN_STEP_MS);
    let mut elapsed: u64 = 0;
    loop {
        let remaining = duration_ms.saturating_sub(elapsed) as f64 / duration_ms as f64;
        let counter = (target as f64 - remaining * target as f64).round() as i64;
        sink(counter);
        if counter == target {
            return;
        }
        scheduler.sleep(Duration::from_millis(step_ms));
        elapsed += step_ms;
    }
}
