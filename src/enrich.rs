//! Dictionary-enrichment interface and derived-forms heuristics.
//!
//! The lookup itself (network, caching, rate limits) lives outside this
//! crate; the core only defines the shape it consumes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{Card, Forms};

/// Optional material a dictionary lookup contributes to a card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Enrichment {
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
    pub parts_of_speech: Vec<String>,
    pub example: String,
}

/// External dictionary lookup.
///
/// Implementations must degrade to [`Enrichment::default`] on any failure;
/// enrichment never aborts an import.
pub trait Enricher {
    fn enrich(&self, word: &str) -> Enrichment;
}

impl Card {
    /// Merge enrichment material into the card, keeping whatever the card
    /// already has. Fills in derived forms when none exist.
    pub fn apply_enrichment(&mut self, enrichment: Enrichment) {
        if self.synonyms.is_empty() {
            self.synonyms = enrichment.synonyms;
        }
        if self.antonyms.is_empty() {
            self.antonyms = enrichment.antonyms;
        }
        if self.parts_of_speech.is_empty() {
            self.parts_of_speech = enrichment.parts_of_speech;
        }
        if self.example.is_empty() {
            self.example = enrichment.example;
        }
        if self.forms.is_empty() {
            self.forms = derive_forms(&self.word, &self.parts_of_speech);
        }
    }
}

/// Heuristic inflected forms for a word, keyed by part of speech.
///
/// Simple suffix rules only: verbs get -s/-ed/-ing, nouns a plural,
/// adjectives an -ly adverb.
pub fn derive_forms(word: &str, parts_of_speech: &[String]) -> Forms {
    let has = |tag: &str| parts_of_speech.iter().any(|p| p == tag);
    let mut forms = Forms::new();

    if has("verb") {
        let stem = word.strip_suffix('e').unwrap_or(word);
        let mut verb = BTreeMap::new();
        verb.insert("s".to_string(), pluralize(word));
        verb.insert(
            "ed".to_string(),
            if word.ends_with('e') {
                format!("{word}d")
            } else {
                format!("{word}ed")
            },
        );
        verb.insert("ing".to_string(), format!("{stem}ing"));
        forms.insert("verb".to_string(), verb);
    }

    if has("noun") {
        let mut noun = BTreeMap::new();
        noun.insert("plural".to_string(), pluralize(word));
        forms.insert("noun".to_string(), noun);
    }

    if has("adjective") {
        let mut adjective = BTreeMap::new();
        adjective.insert("adv".to_string(), format!("{word}ly"));
        forms.insert("adjective".to_string(), adjective);
    }

    forms
}

fn pluralize(word: &str) -> String {
    if word.ends_with('s') {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
