//! Presentation-mode policy.

use rand::Rng;

use crate::types::{Card, ModeSelection, ReviewMode};

/// Resolve the presentation mode for a card.
///
/// A fixed selection passes through unchanged. In auto mode a card with no
/// synonym and no antonym material is limited to flash and sentence: a quiz
/// would have nothing to draw on, and a cloze adds little for such sparse
/// cards. Otherwise all four modes are equally likely.
pub fn select_mode(card: &Card, selection: ModeSelection, rng: &mut impl Rng) -> ReviewMode {
    match selection {
        ModeSelection::Fixed(mode) => mode,
        ModeSelection::Auto => {
            if card.synonyms.is_empty() && card.antonyms.is_empty() {
                if rng.gen_bool(0.5) {
                    ReviewMode::Flash
                } else {
                    ReviewMode::Sentence
                }
            } else {
                ReviewMode::ALL[rng.gen_range(0..ReviewMode::ALL.len())]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;
    use uuid::Uuid;

    fn card(synonyms: &[&str]) -> Card {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut card = Card::new(Uuid::new_v4(), "run", "move fast", today);
        card.synonyms = synonyms.iter().map(|s| s.to_string()).collect();
        card
    }

    #[test]
    fn fixed_selection_passes_through() {
        let mut rng = StdRng::seed_from_u64(1);
        let card = card(&[]);
        for mode in ReviewMode::ALL {
            assert_eq!(
                select_mode(&card, ModeSelection::Fixed(mode), &mut rng),
                mode
            );
        }
    }

    #[test]
    fn sparse_card_only_gets_flash_or_sentence() {
        let mut rng = StdRng::seed_from_u64(2);
        let card = card(&[]);
        for _ in 0..200 {
            let mode = select_mode(&card, ModeSelection::Auto, &mut rng);
            assert!(matches!(mode, ReviewMode::Flash | ReviewMode::Sentence));
        }
    }

    #[test]
    fn rich_card_eventually_sees_all_modes() {
        let mut rng = StdRng::seed_from_u64(3);
        let card = card(&["sprint", "jog"]);
        let seen: HashSet<_> = (0..200)
            .map(|_| select_mode(&card, ModeSelection::Auto, &mut rng))
            .collect();
        assert_eq!(seen.len(), ReviewMode::ALL.len());
    }
}
