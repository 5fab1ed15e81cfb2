//! Core types for the vocabulary trainer.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier for a card.
pub type CardId = Uuid;

/// Identifier for a deck.
pub type DeckId = Uuid;

/// Derived word forms, keyed by part of speech and then form name
/// (e.g. `verb -> {s, ed, ing}`).
pub type Forms = BTreeMap<String, BTreeMap<String, String>>;

/// Self-assessed recall quality on the 0-5 SM-2 scale.
///
/// Anything below 3 counts as a failed recall. Construction clamps, so a
/// `Quality` is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct Quality(u8);

impl Quality {
    /// Clamp an arbitrary integer into the 0-5 range.
    pub fn new(value: i64) -> Self {
        Self(value.clamp(0, 5) as u8)
    }

    /// Quality from an optional selector; a missing selection defaults to 3
    /// so a presentation layer that omits the control cannot corrupt
    /// scheduling state.
    pub fn from_selection(value: Option<i64>) -> Self {
        value.map(Self::new).unwrap_or_default()
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Below 3 the recall counts as a failure and resets the repetition streak.
    pub fn is_failing(self) -> bool {
        self.0 < 3
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(3)
    }
}

impl From<i64> for Quality {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Quality> for i64 {
    fn from(quality: Quality) -> Self {
        quality.0 as i64
    }
}

/// How a card is presented during review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewMode {
    Flash,
    Quiz,
    Cloze,
    Sentence,
}

impl ReviewMode {
    pub const ALL: [ReviewMode; 4] = [Self::Flash, Self::Quiz, Self::Cloze, Self::Sentence];
}

/// Mode requested when starting a session: a concrete mode, or automatic
/// per-card selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeSelection {
    Auto,
    Fixed(ReviewMode),
}

impl Default for ModeSelection {
    fn default() -> Self {
        Self::Auto
    }
}

/// Scheduling state of a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardState {
    /// Interval growth multiplier, never below 1.3.
    pub ease_factor: f64,
    /// Consecutive successful reviews; resets to 0 on failure.
    pub repetitions: u32,
    pub interval_days: u32,
    /// Next review date. `None` means the card has never been scheduled and
    /// is always due.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_reviewed: Option<DateTime<Utc>>,
}

impl Default for CardState {
    fn default() -> Self {
        Self {
            ease_factor: 2.5,
            repetitions: 0,
            interval_days: 0,
            due: None,
            last_reviewed: None,
        }
    }
}

impl CardState {
    /// State for a freshly imported (or bulk-reset) card: due today, never
    /// reviewed.
    pub fn fresh(today: NaiveDate) -> Self {
        Self {
            due: Some(today),
            ..Self::default()
        }
    }
}

/// A single vocabulary item under review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub deck_id: DeckId,
    /// Canonical trimmed-lowercase form.
    pub word: String,
    pub meaning: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
    #[serde(default)]
    pub parts_of_speech: Vec<String>,
    #[serde(default)]
    pub example: String,
    #[serde(default)]
    pub forms: Forms,
    #[serde(default)]
    pub state: CardState,
}

impl Card {
    /// Create a card with fresh scheduling state.
    pub fn new(deck_id: DeckId, word: &str, meaning: &str, today: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            deck_id,
            word: word.trim().to_lowercase(),
            meaning: meaning.trim().to_string(),
            synonyms: Vec::new(),
            antonyms: Vec::new(),
            parts_of_speech: Vec::new(),
            example: String::new(),
            forms: Forms::new(),
            state: CardState::fresh(today),
        }
    }
}

/// A named grouping of cards. Cards reference their deck by id; the deck does
/// not embed a card list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    pub id: DeckId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Deck {
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Study plan and session defaults.
///
/// The active deck lives here rather than on the deck itself, so at most one
/// deck is active at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudySettings {
    /// Default session quota.
    pub daily_target: u32,
    pub plan_total: u32,
    pub plan_days: u32,
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_deck_id: Option<DeckId>,
}

impl StudySettings {
    /// Default settings anchored on `today`: 200 words over 10 days, 20 a day.
    pub fn for_today(today: NaiveDate) -> Self {
        Self {
            daily_target: 20,
            plan_total: 200,
            plan_days: 10,
            start: today,
            end: today + chrono::Duration::days(10),
            active_deck_id: None,
        }
    }

    /// Words per day implied by the plan, rounded up.
    pub fn plan_quota(&self) -> u32 {
        self.plan_total.div_ceil(self.plan_days.max(1))
    }

    /// Rewrite the plan, recomputing the end date and daily target.
    pub fn replan(&mut self, start: NaiveDate, total: u32, days: u32) {
        let days = days.max(1);
        let total = total.max(1);
        self.start = start;
        self.plan_total = total;
        self.plan_days = days;
        self.end = start + chrono::Duration::days(days as i64);
        self.daily_target = total.div_ceil(days);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn quality_clamps_out_of_range_values() {
        assert_eq!(Quality::new(-3).value(), 0);
        assert_eq!(Quality::new(9).value(), 5);
        assert_eq!(Quality::new(4).value(), 4);
    }

    #[test]
    fn missing_selection_defaults_to_mid_quality() {
        assert_eq!(Quality::from_selection(None).value(), 3);
        assert_eq!(Quality::from_selection(Some(1)).value(), 1);
    }

    #[test]
    fn new_card_is_lowercased_and_due_today() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let card = Card::new(Uuid::new_v4(), "  Run ", "move fast", today);
        assert_eq!(card.word, "run");
        assert_eq!(card.state.due, Some(today));
        assert_eq!(card.state.repetitions, 0);
        assert_eq!(card.state.ease_factor, 2.5);
    }

    #[test]
    fn replan_recomputes_end_and_daily_target() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut settings = StudySettings::for_today(today);
        settings.replan(today, 95, 7);
        assert_eq!(settings.daily_target, 14);
        assert_eq!(settings.end, NaiveDate::from_ymd_opt(2024, 3, 8).unwrap());
    }

    #[test]
    fn quality_deserializes_with_clamping() {
        let q: Quality = serde_json::from_str("11").unwrap();
        assert_eq!(q.value(), 5);
    }
}
