//! Cloze (fill-in-the-blank) exercises.

use regex::Regex;

use crate::types::Card;

/// Marker substituted for the hidden word.
pub const BLANK: &str = "_____";

/// The sentence shown for a cloze exercise: the card's example with every
/// whole-word, case-insensitive occurrence of the word blanked out.
///
/// Cards without an example get a synthesized sentence naming the word, which
/// still yields exactly one blank.
pub fn cloze_sentence(card: &Card) -> String {
    let sentence = source_sentence(card);
    blank_out(&sentence, &card.word)
}

/// The unblanked sentence a cloze is built from.
pub fn source_sentence(card: &Card) -> String {
    if card.example.trim().is_empty() {
        format!("I will use the word \"{}\" in a sentence.", card.word)
    } else {
        card.example.clone()
    }
}

/// Exact-match grading: trimmed, lowercased input against the card's word.
pub fn check_answer(input: &str, card: &Card) -> bool {
    input.trim().to_lowercase() == card.word.to_lowercase()
}

fn blank_out(sentence: &str, word: &str) -> String {
    let pattern = format!(r"(?i)\b{}\b", regex::escape(word));
    match Regex::new(&pattern) {
        Ok(re) => re.replace_all(sentence, BLANK).into_owned(),
        // The escaped pattern is a literal and always compiles; keep a plain
        // substitution as the fallback anyway.
        Err(_) => sentence.replace(word, BLANK),
    }
}
