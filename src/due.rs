//! Due-set selection.

use chrono::NaiveDate;

use crate::types::Card;

/// Whether a card is eligible for review: never scheduled, or due on or
/// before `today`.
pub fn is_due(card: &Card, today: NaiveDate) -> bool {
    match card.state.due {
        None => true,
        Some(due) => due <= today,
    }
}

/// Cards eligible for review today.
pub fn due_cards(cards: &[Card], today: NaiveDate) -> Vec<Card> {
    cards.iter().filter(|c| is_due(c, today)).cloned().collect()
}

pub fn due_count(cards: &[Card], today: NaiveDate) -> usize {
    cards.iter().filter(|c| is_due(c, today)).count()
}
