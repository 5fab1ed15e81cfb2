//! SM-2 variant scheduler.
//!
//! Based on SuperMemo 2 with a single 0-5 quality scale: below 3 the card
//! lapses back to a one-day interval, at or above 3 the interval grows with
//! the ease factor.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::types::{CardState, Quality};

/// SM-2 variant with configurable parameters.
#[derive(Debug, Clone)]
pub struct Sm2 {
    pub initial_ease: f64,
    pub minimum_ease: f64,
}

impl Default for Sm2 {
    fn default() -> Self {
        Self {
            initial_ease: 2.5,
            minimum_ease: 1.3,
        }
    }
}

impl Sm2 {
    /// Scheduling state for a card that has never been reviewed: due today,
    /// interval 0, repetition streak 0.
    pub fn initial_state(&self, today: NaiveDate) -> CardState {
        CardState {
            ease_factor: self.initial_ease,
            ..CardState::fresh(today)
        }
    }

    /// Compute the state after a review with the given quality.
    ///
    /// Deterministic given `(state, quality, today, now)`. Has no side
    /// effects; writing the result back is the caller's responsibility.
    pub fn schedule(
        &self,
        state: &CardState,
        quality: Quality,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> CardState {
        let (ease_factor, repetitions, interval_days) = if quality.is_failing() {
            (state.ease_factor, 0, 1)
        } else {
            let spread = f64::from(5 - quality.value());
            let ease = state.ease_factor + 0.1 - spread * (0.08 + spread * 0.02);
            let ease = ease.max(self.minimum_ease);
            match state.repetitions {
                0 => (ease, 1, 1),
                1 => (ease, 2, 6),
                r => (ease, r + 1, (f64::from(state.interval_days) * ease).round() as u32),
            }
        };

        CardState {
            ease_factor,
            repetitions,
            interval_days,
            due: Some(today + Duration::days(i64::from(interval_days))),
            last_reviewed: Some(now),
        }
    }
}
