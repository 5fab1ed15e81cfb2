//! Review-session state machine.
//!
//! One session at a time: Idle -> Running -> Completed. Starting while
//! running discards the in-flight session; nothing about an ungraded card is
//! ever persisted.

use chrono::{DateTime, NaiveDate, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::due;
use crate::error::{Error, Result};
use crate::mode::select_mode;
use crate::quiz::{self, Quiz};
use crate::scheduler::Sm2;
use crate::store::CardStore;
use crate::types::{Card, ModeSelection, Quality, ReviewMode, StudySettings};

/// Outcome of attempting to start a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Started { queue_len: usize },
    /// No cards are due. A normal outcome, not an error; the engine stays
    /// idle.
    NothingDue,
}

/// Where the session stands after a grade or skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionProgress {
    Next,
    Completed,
}

/// Grading action for the current card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    /// Leave the card untouched and move on.
    Skip,
    Review(Quality),
}

impl Grade {
    /// Grade from an optional quality selector; a missing selection reviews
    /// at quality 3.
    pub fn from_selection(value: Option<i64>) -> Self {
        Self::Review(Quality::from_selection(value))
    }
}

enum SessionState {
    Idle,
    Running {
        /// Snapshot taken at start; later store mutations do not reach it.
        queue: Vec<Card>,
        index: usize,
        selection: ModeSelection,
        /// Resolved when the card becomes current, so repeated reads agree.
        current_mode: ReviewMode,
    },
    Completed,
}

impl SessionState {
    fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running { .. } => "running",
            Self::Completed => "completed",
        }
    }
}

/// Drives one review session over a card store.
///
/// All randomness comes in through the `rng` arguments, so seeded tests are
/// fully deterministic. "Today" and "now" are threaded in explicitly for the
/// same reason.
pub struct SessionEngine<S> {
    store: S,
    scheduler: Sm2,
    settings: StudySettings,
    state: SessionState,
}

impl<S: CardStore> SessionEngine<S> {
    pub fn new(store: S, scheduler: Sm2, settings: StudySettings) -> Self {
        Self {
            store,
            scheduler,
            settings,
            state: SessionState::Idle,
        }
    }

    /// Start a session over today's due cards.
    ///
    /// Samples `min(quota, |due|)` cards uniformly without replacement, in
    /// random order. `quota` defaults to the settings' daily target. Any
    /// in-flight session is discarded first.
    pub fn start(
        &mut self,
        quota: Option<usize>,
        selection: ModeSelection,
        today: NaiveDate,
        rng: &mut impl Rng,
    ) -> Result<StartOutcome> {
        self.state = SessionState::Idle;

        let mut due = due::due_cards(&self.store.list_cards()?, today);
        let due_len = due.len();
        let quota = quota.unwrap_or(self.settings.daily_target as usize);
        let take = quota.min(due_len);
        if take == 0 {
            debug!(due = due_len, "nothing to review");
            return Ok(StartOutcome::NothingDue);
        }

        let (sampled, _) = due.partial_shuffle(rng, take);
        let queue = sampled.to_vec();
        let current_mode = select_mode(&queue[0], selection, rng);
        debug!(queue_len = take, due = due_len, "session started");

        self.state = SessionState::Running {
            queue,
            index: 0,
            selection,
            current_mode,
        };
        Ok(StartOutcome::Started { queue_len: take })
    }

    /// The card under review and its resolved presentation mode.
    ///
    /// Fails with [`Error::InvalidSessionState`] unless a session is running.
    pub fn current_card(&self) -> Result<(&Card, ReviewMode)> {
        match &self.state {
            SessionState::Running {
                queue,
                index,
                current_mode,
                ..
            } => Ok((&queue[*index], *current_mode)),
            other => Err(Error::InvalidSessionState { found: other.name() }),
        }
    }

    /// Build a quiz for the current card, drawing distractors from the whole
    /// store.
    pub fn build_quiz_for_current(&self, rng: &mut impl Rng) -> Result<Quiz> {
        let (card, _) = self.current_card()?;
        let pool = self.store.list_cards()?;
        Ok(quiz::build_quiz(card, &pool, rng))
    }

    /// Grade or skip the current card and advance.
    ///
    /// A review reschedules the card and writes it back through the store; a
    /// skip leaves it untouched. Reaching the end of the queue completes the
    /// session.
    pub fn grade(
        &mut self,
        grade: Grade,
        today: NaiveDate,
        now: DateTime<Utc>,
        rng: &mut impl Rng,
    ) -> Result<SessionProgress> {
        let SessionState::Running {
            queue,
            index,
            selection,
            current_mode,
        } = &mut self.state
        else {
            return Err(Error::InvalidSessionState {
                found: self.state.name(),
            });
        };

        match grade {
            Grade::Review(quality) => {
                let card = &mut queue[*index];
                card.state = self.scheduler.schedule(&card.state, quality, today, now);
                self.store.put_card(card.clone())?;
                debug!(
                    card = %card.id,
                    quality = quality.value(),
                    interval = card.state.interval_days,
                    "card graded"
                );
            }
            Grade::Skip => {
                debug!(card = %queue[*index].id, "card skipped");
            }
        }

        *index += 1;
        if *index == queue.len() {
            self.state = SessionState::Completed;
            debug!("session completed");
            return Ok(SessionProgress::Completed);
        }

        *current_mode = select_mode(&queue[*index], *selection, rng);
        Ok(SessionProgress::Next)
    }

    /// Discard any in-flight session without persisting anything.
    pub fn abandon(&mut self) {
        self.state = SessionState::Idle;
    }

    /// Rewrite every card's scheduling state to fresh (due today, repetition
    /// streak 0, default ease). Returns the number of cards touched.
    pub fn reset_schedule(&mut self, today: NaiveDate) -> Result<usize> {
        let cards = self.store.list_cards()?;
        let count = cards.len();
        for mut card in cards {
            card.state = self.scheduler.initial_state(today);
            self.store.put_card(card)?;
        }
        debug!(count, "review schedule reset");
        Ok(count)
    }

    /// Cards due for review today, across all decks.
    pub fn due_count(&self, today: NaiveDate) -> Result<usize> {
        Ok(due::due_count(&self.store.list_cards()?, today))
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, SessionState::Running { .. })
    }

    /// `(current index, queue length)` while a session is running.
    pub fn progress(&self) -> Option<(usize, usize)> {
        match &self.state {
            SessionState::Running { queue, index, .. } => Some((*index, queue.len())),
            _ => None,
        }
    }

    pub fn settings(&self) -> &StudySettings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
