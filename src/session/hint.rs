//! Hint allocation.
//!
//! A hint turns one unmatched pair face up for a short preview. It is not
//! a move: the cards do not enter the pending set and the move counter is
//! untouched. Once the preview ends, the cards are turned back unless the
//! player matched them or picked one as part of a move in the meantime.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::state::{Session, SessionStatus};
use crate::core::{CardId, MatchKey};
use crate::error::InvalidTransition;

impl Session {
    /// Reveal a random unmatched pair and count the hint.
    pub fn use_hint(&mut self) -> Result<[CardId; 2], InvalidTransition> {
        if self.hints_used >= self.max_hints {
            return Err(InvalidTransition::HintsExhausted);
        }
        if self.status != SessionStatus::Active {
            return Err(InvalidTransition::NotActive);
        }
        if self.pending.len() >= 2 {
            return Err(InvalidTransition::EvaluationPending);
        }

        let pairs = self.unmatched_pairs();
        let cards = *self
            .hint_rng
            .choose(&pairs)
            .ok_or(InvalidTransition::NothingToHint)?;

        for id in cards {
            if let Some(card) = self.card_mut(id) {
                card.reveal();
            }
        }
        self.hints_used += 1;
        Ok(cards)
    }

    /// End a hint preview, turning its cards back face down.
    ///
    /// Cards that were matched or are part of the current move stay up.
    /// Returns how many cards were hidden.
    pub fn end_hint_preview(&mut self, cards: [CardId; 2]) -> usize {
        let mut hidden = 0;
        for id in cards {
            if self.pending.contains(&id) {
                continue;
            }
            if let Some(card) = self.card_mut(id) {
                if card.is_revealed() {
                    card.hide();
                    hidden += 1;
                }
            }
        }
        hidden
    }

    /// Complete unmatched pairs, ordered by match key.
    fn unmatched_pairs(&self) -> Vec<[CardId; 2]> {
        let mut groups: FxHashMap<MatchKey, SmallVec<[CardId; 2]>> = FxHashMap::default();
        for card in self.cards.iter().filter(|c| !c.is_matched()) {
            groups.entry(card.match_key).or_default().push(card.id);
        }

        let mut pairs: Vec<(MatchKey, [CardId; 2])> = groups
            .into_iter()
            .filter_map(|(key, ids)| match ids.as_slice() {
                [a, b] => Some((key, [*a, *b])),
                _ => None,
            })
            .collect();
        pairs.sort_unstable_by_key(|(key, _)| *key);
        pairs.into_iter().map(|(_, ids)| ids).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Category, Pair};
    use crate::core::{Difficulty, EngineConfig, GameRng, Generation};

    fn active(pairs: usize) -> Session {
        let category = Category::new("c", "C")
            .with_pairs((0..pairs).map(|i| Pair::new(format!("f{}", i), format!("b{}", i))));
        let difficulty = Difficulty::new("d", "D", pairs, 60, 1.0);
        let mut s = Session::new(
            Generation(1),
            "p",
            &category,
            &difficulty,
            &EngineConfig::default(),
            &GameRng::new(11),
        )
        .unwrap();
        s.start();
        s
    }

    #[test]
    fn test_hint_reveals_a_pair() {
        let mut s = active(4);
        let [a, b] = s.use_hint().unwrap();

        let (ca, cb) = (s.card(a).unwrap(), s.card(b).unwrap());
        assert!(ca.pairs_with(cb));
        assert!(ca.is_revealed() && cb.is_revealed());
        assert!(s.pending().is_empty());
        assert_eq!(s.move_count(), 0);
        assert_eq!(s.hints_used(), 1);
    }

    #[test]
    fn test_preview_end_hides() {
        let mut s = active(4);
        let cards = s.use_hint().unwrap();

        assert_eq!(s.end_hint_preview(cards), 2);
        assert!(cards.iter().all(|&id| !s.card(id).unwrap().is_face_up()));
    }

    #[test]
    fn test_preview_end_keeps_matched_cards() {
        let mut s = active(4);
        let [a, b] = s.use_hint().unwrap();

        s.reveal(a).unwrap();
        s.reveal(b).unwrap();
        s.evaluate_pending().unwrap();

        assert_eq!(s.end_hint_preview([a, b]), 0);
        assert!(s.card(a).unwrap().is_matched());
    }

    #[test]
    fn test_preview_end_keeps_pending_card() {
        let mut s = active(4);
        let [a, b] = s.use_hint().unwrap();
        s.reveal(a).unwrap();

        assert_eq!(s.end_hint_preview([a, b]), 1);
        assert!(s.card(a).unwrap().is_revealed());
        assert!(!s.card(b).unwrap().is_face_up());
    }

    #[test]
    fn test_hint_limit() {
        let mut s = active(6);
        for _ in 0..3 {
            let cards = s.use_hint().unwrap();
            s.end_hint_preview(cards);
        }

        let before = s.snapshot();
        assert_eq!(s.use_hint(), Err(InvalidTransition::HintsExhausted));
        assert_eq!(s.hints_used(), 3);
        assert_eq!(s.snapshot(), before);
    }

    #[test]
    fn test_hint_refused_while_evaluating() {
        let mut s = active(4);
        s.reveal(CardId::new(0)).unwrap();
        s.reveal(CardId::new(1)).unwrap();

        assert_eq!(s.use_hint(), Err(InvalidTransition::EvaluationPending));
        assert_eq!(s.hints_used(), 0);
    }

    #[test]
    fn test_hint_allowed_with_one_card_up() {
        let mut s = active(4);
        s.reveal(CardId::new(0)).unwrap();
        assert!(s.use_hint().is_ok());
    }

    #[test]
    fn test_hint_skips_matched_pairs() {
        let mut s = active(2);
        let first = s.use_hint().unwrap();
        s.end_hint_preview(first);
        s.reveal(first[0]).unwrap();
        s.reveal(first[1]).unwrap();
        s.evaluate_pending().unwrap();

        let second = s.use_hint().unwrap();
        assert!(second.iter().all(|&id| !s.card(id).unwrap().is_matched()));
        assert_ne!(
            s.card(first[0]).unwrap().match_key,
            s.card(second[0]).unwrap().match_key
        );
    }

    #[test]
    fn test_hint_requires_active() {
        let mut s = active(2);
        s.status = SessionStatus::Completed;
        assert_eq!(s.use_hint(), Err(InvalidTransition::NotActive));
    }
}
