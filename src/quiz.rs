//! Multiple-choice quiz generation.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::types::Card;

/// Upper bound on choices per quiz: the answer plus three distractors.
pub const MAX_CHOICES: usize = 4;

/// Shown as the answer when a card has no meaning to quiz on.
const NO_MEANING: &str = "(no definition)";

/// Which dimension of the card the quiz asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizKind {
    Synonym,
    Antonym,
    Meaning,
}

/// A single multiple-choice question derived from a card. Transient, never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub kind: QuizKind,
    pub question: String,
    pub answer: String,
    /// Unique, randomly ordered, contains the answer exactly once. Fewer than
    /// [`MAX_CHOICES`] entries when the distractor pool runs thin.
    pub choices: Vec<String>,
}

/// Build a quiz for `card`, drawing distractors from `pool`.
///
/// Synonym material is preferred, then antonyms, then a fallback over the
/// first clause of each meaning. A thin distractor pool shrinks the choice
/// list instead of failing.
pub fn build_quiz(card: &Card, pool: &[Card], rng: &mut impl Rng) -> Quiz {
    if let Some(answer) = card.synonyms.choose(rng) {
        let candidates = collect_terms(pool, |c| c.synonyms.as_slice(), answer);
        return assemble(
            QuizKind::Synonym,
            format!("Which word is a synonym of \"{}\"?", card.word),
            answer.clone(),
            candidates,
            rng,
        );
    }

    if let Some(answer) = card.antonyms.choose(rng) {
        let candidates = collect_terms(pool, |c| c.antonyms.as_slice(), answer);
        return assemble(
            QuizKind::Antonym,
            format!("Which word is an antonym of \"{}\"?", card.word),
            answer.clone(),
            candidates,
            rng,
        );
    }

    let answer = first_clause(&card.meaning).unwrap_or_else(|| NO_MEANING.to_string());
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();
    for other in pool.iter().filter(|c| c.id != card.id) {
        if let Some(clause) = first_clause(&other.meaning) {
            if clause != answer && seen.insert(clause.clone()) {
                candidates.push(clause);
            }
        }
    }
    assemble(
        QuizKind::Meaning,
        format!("\"{}\" is closest in meaning to:", card.word),
        answer,
        candidates,
        rng,
    )
}

/// Deduplicated terms of one kind across the pool, answer and blanks
/// excluded. Insertion order is kept so seeded sampling stays deterministic.
fn collect_terms<'a>(
    pool: &'a [Card],
    terms_of: impl Fn(&'a Card) -> &'a [String],
    answer: &str,
) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut terms = Vec::new();
    for term in pool.iter().flat_map(|c| terms_of(c)) {
        let term = term.trim();
        if term.is_empty() || term == answer {
            continue;
        }
        if seen.insert(term) {
            terms.push(term.to_string());
        }
    }
    terms
}

/// First semicolon- or comma-delimited clause of a meaning.
fn first_clause(meaning: &str) -> Option<String> {
    let clause = meaning.split([';', ',']).next().unwrap_or("").trim();
    if clause.is_empty() {
        None
    } else {
        Some(clause.to_string())
    }
}

fn assemble(
    kind: QuizKind,
    question: String,
    answer: String,
    mut candidates: Vec<String>,
    rng: &mut impl Rng,
) -> Quiz {
    let take = candidates.len().min(MAX_CHOICES - 1);
    let (distractors, _) = candidates.partial_shuffle(rng, take);

    let mut choices = Vec::with_capacity(take + 1);
    choices.push(answer.clone());
    choices.extend(distractors.iter().cloned());
    choices.shuffle(rng);

    Quiz {
        kind,
        question,
        answer,
        choices,
    }
}
