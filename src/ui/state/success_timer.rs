// SPDX-License-Identifier: MPL-2.0
//! Timed success state of drawers that confirm and then close themselves.

use crate::config::SUCCESS_DISMISS_MS;
use std::time::{Duration, Instant};

/// Tracks when a success confirmation started showing.
///
/// # Example
///
/// ```
/// use learnreel::ui::state::SuccessTimer;
/// use std::time::{Duration, Instant};
///
/// let mut timer = SuccessTimer::default();
/// let start = Instant::now();
/// timer.start(start);
/// assert!(timer.is_showing());
/// assert!(!timer.is_elapsed(start + Duration::from_millis(500)));
/// assert!(timer.is_elapsed(start + Duration::from_secs(3)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SuccessTimer {
    since: Option<Instant>,
}

impl SuccessTimer {
    /// How long the confirmation stays up.
    pub const DURATION: Duration = Duration::from_millis(SUCCESS_DISMISS_MS);

    pub fn start(&mut self, now: Instant) {
        self.since = Some(now);
    }

    pub fn clear(&mut self) {
        self.since = None;
    }

    #[must_use]
    pub fn is_showing(self) -> bool {
        self.since.is_some()
    }

    /// Whether a running confirmation has been up long enough to close.
    #[must_use]
    pub fn is_elapsed(self, now: Instant) -> bool {
        self.since
            .is_some_and(|since| now.saturating_duration_since(since) >= Self::DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_timer_never_elapses() {
        let timer = SuccessTimer::default();
        assert!(!timer.is_showing());
        assert!(!timer.is_elapsed(Instant::now() + Duration::from_secs(60)));
    }

    #[test]
    fn clear_stops_the_timer() {
        let mut timer = SuccessTimer::default();
        let now = Instant::now();
        timer.start(now);
        timer.clear();
        assert!(!timer.is_elapsed(now + SuccessTimer::DURATION));
    }

    #[test]
    fn elapses_exactly_at_duration() {
        let mut timer = SuccessTimer::default();
        let now = Instant::now();
        timer.start(now);
        assert!(!timer.is_elapsed(now + SuccessTimer::DURATION - Duration::from_millis(1)));
        assert!(timer.is_elapsed(now + SuccessTimer::DURATION));
    }
}
