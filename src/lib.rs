//! Spaced-repetition core for a vocabulary trainer.
//!
//! Provides:
//! - SM-2 variant scheduler ([`scheduler`])
//! - Due-card selection ([`due`])
//! - Review-session state machine ([`session`])
//! - Presentation-mode policy ([`mode`]), quiz and cloze generation
//!   ([`quiz`], [`cloze`])
//! - Card store and dictionary-enrichment interfaces ([`store`], [`enrich`])
//!
//! Persistence backends, rendering, and the network half of enrichment live
//! in the surrounding application. The crate is synchronous and assumes a
//! single writer driving one session at a time; "today" and all randomness
//! are passed in explicitly, so every component is deterministic under test.

pub mod cloze;
pub mod due;
pub mod enrich;
pub mod error;
pub mod mode;
pub mod quiz;
pub mod scheduler;
pub mod session;
pub mod store;
pub mod types;

pub use cloze::{check_answer, cloze_sentence};
pub use due::{due_cards, due_count};
pub use enrich::{derive_forms, Enricher, Enrichment};
pub use error::{Error, Result, StoreError};
pub use mode::select_mode;
pub use quiz::{build_quiz, Quiz, QuizKind};
pub use scheduler::Sm2;
pub use session::{Grade, SessionEngine, SessionProgress, StartOutcome};
pub use store::{CardStore, MemoryStore};
pub use types::{
    Card, CardId, CardState, Deck, DeckId, ModeSelection, Quality, ReviewMode, StudySettings,
};
