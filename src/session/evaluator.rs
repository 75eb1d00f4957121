//! Flip and match evaluation.
//!
//! Session-level revelation moves `Idle(0) → OneRevealed(1) → Evaluating(2)`
//! and back to `Idle` once the pair is evaluated. A reveal is refused while
//! two cards await evaluation, so an evaluation always lands before the
//! next reveal is accepted.

use smallvec::SmallVec;

use super::state::{Session, SessionStatus};
use crate::core::CardId;
use crate::error::InvalidTransition;
use crate::scoring::{completion_bonus, per_pair_award};

/// Result of an accepted reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// First card of a move is face up.
    FirstCard(CardId),
    /// Second card is face up; the move counted and the pair awaits evaluation.
    PairPending([CardId; 2]),
}

/// Result of evaluating a pending pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Evaluation {
    Matched {
        cards: [CardId; 2],
        award: u32,
        streak: u32,
        completion: Option<Completion>,
    },
    Mismatched {
        cards: [CardId; 2],
        wrong_streak: u32,
        suggest_hint: bool,
    },
}

/// Final accounting when the last pair is matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Completion {
    pub bonus: u32,
    pub final_score: u32,
}

impl Session {
    /// Turn a card face up as part of a move.
    pub fn reveal(&mut self, id: CardId) -> Result<RevealOutcome, InvalidTransition> {
        if self.status != SessionStatus::Active {
            return Err(InvalidTransition::NotActive);
        }
        if self.pending.len() >= 2 {
            return Err(InvalidTransition::EvaluationPending);
        }
        let card = self.card(id).ok_or(InvalidTransition::UnknownCard(id))?;
        if card.is_matched() {
            return Err(InvalidTransition::AlreadyMatched(id));
        }
        if self.pending.contains(&id) {
            return Err(InvalidTransition::AlreadyRevealed(id));
        }

        if let Some(card) = self.card_mut(id) {
            card.reveal();
        }
        self.pending.push(id);

        match self.pending.as_slice() {
            [first, second] => {
                self.move_count += 1;
                Ok(RevealOutcome::PairPending([*first, *second]))
            }
            _ => Ok(RevealOutcome::FirstCard(id)),
        }
    }

    /// Evaluate the pending pair.
    ///
    /// Returns `None` unless exactly two cards are pending. The pending set
    /// is always cleared when a pair is evaluated.
    pub fn evaluate_pending(&mut self) -> Option<Evaluation> {
        if self.status != SessionStatus::Active || self.pending.len() != 2 {
            return None;
        }
        let pending: SmallVec<[CardId; 2]> = std::mem::take(&mut self.pending);
        let cards = [pending[0], pending[1]];

        let is_match = match (self.card(cards[0]), self.card(cards[1])) {
            (Some(a), Some(b)) => a.pairs_with(b),
            _ => false,
        };

        if is_match {
            Some(self.apply_match(cards))
        } else {
            Some(self.apply_mismatch(cards))
        }
    }

    fn apply_match(&mut self, cards: [CardId; 2]) -> Evaluation {
        for id in cards {
            if let Some(card) = self.card_mut(id) {
                card.mark_matched();
            }
        }
        self.streak += 1;
        self.wrong_streak = 0;

        let award = per_pair_award(&self.difficulty, self.score_inputs());
        self.score = self.score.saturating_add(award);

        let completion = self.check_completion();
        Evaluation::Matched {
            cards,
            award,
            streak: self.streak,
            completion,
        }
    }

    fn apply_mismatch(&mut self, cards: [CardId; 2]) -> Evaluation {
        for id in cards {
            if let Some(card) = self.card_mut(id) {
                card.hide();
            }
        }
        self.streak = 0;
        self.wrong_streak += 1;

        Evaluation::Mismatched {
            cards,
            wrong_streak: self.wrong_streak,
            suggest_hint: self.wrong_streak >= self.hint_suggest_after
                && self.hints_used < self.max_hints,
        }
    }

    fn check_completion(&mut self) -> Option<Completion> {
        if !self.all_matched() {
            return None;
        }
        let bonus = completion_bonus(&self.difficulty, self.score_inputs());
        self.score = self.score.saturating_add(bonus);
        self.status = SessionStatus::Completed;
        Some(Completion {
            bonus,
            final_score: self.score,
        })
    }
}
