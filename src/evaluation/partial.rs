use super::evaluation::Evaluation;
use super::table::HandRanks;
use crate::cards::Card;

/// A board already folded into the table, waiting for two hole cards.
///
/// Fold the five board cards once, then finish every player's hand with two
/// lookups instead of seven.
#[derive(Debug, Clone, Copy)]
pub struct PartialEvaluation<'a> {
    ranks: &'a HandRanks,
    state: u32,
}

impl<'a> PartialEvaluation<'a> {
    pub(super) fn new(ranks: &'a HandRanks, state: u32) -> Self {
        Self { ranks, state }
    }
    pub fn state(&self) -> u32 {
        self.state
    }
    /// Adds two hole cards to a five-card fold.
    pub fn eval(&self, a: Card, b: Card) -> Evaluation {
        let state = self.ranks.get(self.state as usize + a.id() as usize);
        let value = self.ranks.get(state as usize + b.id() as usize);
        Evaluation::from(value)
    }
}
