use super::evaluation::Evaluation;
use super::partial::PartialEvaluation;
use super::table::HandRanks;
use super::table::START;
use crate::OddsError;
use crate::TableError;
use crate::cards::Card;

/// Table-driven hand evaluator shared read-only by every worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandEvaluator {
    ranks: HandRanks,
}

impl HandEvaluator {
    pub fn new(ranks: HandRanks) -> Self {
        Self { ranks }
    }

    /// Loads the table from [`HandRanks::path`].
    pub fn load() -> Result<Self, TableError> {
        HandRanks::load(HandRanks::path()).map(Self::new)
    }

    pub fn ranks(&self) -> &HandRanks {
        &self.ranks
    }

    /// Value of five, six or seven cards. Any other count is invalid.
    pub fn evaluate(&self, cards: &[Card]) -> Evaluation {
        let state = self.fold(START, cards);
        Evaluation::from(match cards.len() {
            7 => state,
            5 | 6 => self.ranks.get(state as usize),
            _ => 0,
        })
    }

    /// Folds every group once. Finish with [`PartialEvaluation::eval`] after five cards.
    pub fn partial(&self, groups: &[&[Card]]) -> PartialEvaluation<'_> {
        let state = groups
            .iter()
            .fold(START, |state, cards| self.fold(state, cards));
        PartialEvaluation::new(&self.ranks, state)
    }

    /// Parses and evaluates exactly seven cards.
    pub fn evaluate_strings<S: AsRef<str>>(&self, cards: &[S]) -> Result<Evaluation, OddsError> {
        if cards.len() != 7 {
            return Err(OddsError::HandSize(cards.len()));
        }
        let ref cards = Card::parse(cards).map_err(OddsError::Card)?;
        if let Some(card) = Card::duplicate(cards) {
            return Err(OddsError::Duplicate(card));
        }
        Ok(self.evaluate(cards))
    }

    fn fold(&self, state: u32, cards: &[Card]) -> u32 {
        cards
            .iter()
            .fold(state, |state, card| {
                self.ranks.get(state as usize + card.id() as usize)
            })
    }
}

impl From<HandRanks> for HandEvaluator {
    fn from(ranks: HandRanks) -> Self {
        Self::new(ranks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Deck;
    use crate::evaluation::Evaluator;
    use crate::evaluation::HandCategory;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rand::seq::SliceRandom;

    fn cards(hand: &str) -> Vec<Card> {
        Card::parse(&hand.split_whitespace().collect::<Vec<_>>()).unwrap()
    }

    fn random_hands(n: usize, size: usize) -> Vec<Vec<Card>> {
        let ref mut rng = SmallRng::seed_from_u64(0xB0A7);
        let mut deck = Deck::all().collect::<Vec<_>>();
        (0..n)
            .map(|_| {
                deck.shuffle(rng);
                deck[..size].to_vec()
            })
            .collect()
    }

    #[test]
    fn categories() {
        let evaluator = crate::testing::evaluator();
        for (hand, category) in [
            ("2c 4d 6h 8s tc qd kh", HandCategory::HighCard),
            ("2c 2d 6h 8s tc qd kh", HandCategory::OnePair),
            ("2c 2d 6h 6s tc qd kh", HandCategory::TwoPairs),
            ("2c 2d 2h 8s tc qd kh", HandCategory::ThreeOfAKind),
            ("as 2d 3h 4s 5c qd kh", HandCategory::Straight),
            ("2c 4c 6c 8c tc qd kh", HandCategory::Flush),
            ("2c 2d 2h 8s 8c qd kh", HandCategory::FullHouse),
            ("2c 2d 2h 2s tc qd kh", HandCategory::FourOfAKind),
            ("9h th jh qh kh 2c 2d", HandCategory::StraightFlush),
        ] {
            assert_eq!(evaluator.evaluate(&cards(hand)).category(), category, "{}", hand);
        }
    }

    #[test]
    fn order_independent() {
        let evaluator = crate::testing::evaluator();
        let ref mut rng = SmallRng::seed_from_u64(7);
        for mut hand in random_hands(500, 7) {
            let expected = evaluator.evaluate(&hand);
            hand.shuffle(rng);
            assert_eq!(evaluator.evaluate(&hand), expected);
        }
    }

    #[test]
    fn royal_flush_beats_everything_else() {
        let evaluator = crate::testing::evaluator();
        let royal = evaluator.evaluate(&cards("as ks qs js ts 2c 3d"));
        assert_eq!(royal.category(), HandCategory::StraightFlush);
        for hand in random_hands(2_000, 7) {
            let other = evaluator.evaluate(&hand);
            assert!(other.is_valid());
            assert!(royal >= other);
            if other.category() != HandCategory::StraightFlush {
                assert!(royal > other);
            }
        }
    }

    #[test]
    fn partial_matches_full() {
        let evaluator = crate::testing::evaluator();
        for hand in random_hands(2_000, 7) {
            let (board, hole) = hand.split_at(5);
            let partial = evaluator.partial(&[&board[..2], &board[2..]]);
            assert_eq!(partial.eval(hole[0], hole[1]), evaluator.evaluate(&hand));
        }
    }

    #[test]
    fn short_hands_take_slot_zero() {
        let evaluator = crate::testing::evaluator();
        for size in [5, 6] {
            for hand in random_hands(1_000, size) {
                let expected = Evaluator::from(hand.as_slice()).strength().unwrap();
                let found = evaluator.evaluate(&hand);
                assert_eq!(found.category(), expected.category(), "{:?}", hand);
            }
        }
        assert_eq!(evaluator.evaluate(&cards("as ks qs js ts")).value(), 9 << 12 | 10);
        assert!(!evaluator.evaluate(&cards("as ks qs js")).is_valid());
    }

    #[test]
    fn agrees_with_lazy_evaluator() {
        let evaluator = crate::testing::evaluator();
        let hands = random_hands(3_000, 7);
        for pair in hands.windows(2) {
            let lazy = |h: &Vec<Card>| Evaluator::from(h.as_slice()).strength().unwrap();
            let (a, b) = (evaluator.evaluate(&pair[0]), evaluator.evaluate(&pair[1]));
            assert_eq!(a.cmp(&b), lazy(&pair[0]).cmp(&lazy(&pair[1])));
            assert_eq!(a.category(), lazy(&pair[0]).category());
        }
    }

    #[test]
    fn strings() {
        let evaluator = crate::testing::evaluator();
        let evaluation = evaluator
            .evaluate_strings(&["as", "ks", "qs", "js", "ts", "2c", "3d"])
            .unwrap();
        assert_eq!(evaluation.rank(), 10);
        assert_eq!(evaluation.category(), HandCategory::StraightFlush);
        assert_eq!(
            evaluator.evaluate_strings(&["as", "ks"]),
            Err(OddsError::HandSize(2))
        );
        assert!(matches!(
            evaluator.evaluate_strings(&["as", "ks", "qs", "js", "ts", "2c", "zz"]),
            Err(OddsError::Card(_))
        ));
        assert!(matches!(
            evaluator.evaluate_strings(&["as", "ks", "qs", "js", "ts", "2c", "as"]),
            Err(OddsError::Duplicate(_))
        ));
    }

    #[test]
    fn duplicates_rejected_before_folding() {
        let evaluator = crate::testing::evaluator();
        for hand in [
            ["as", "ks", "qs", "js", "9d", "2c", "2c"],
            ["7h", "8d", "9c", "jd", "kc", "2s", "7h"],
        ] {
            assert!(matches!(
                evaluator.evaluate_strings(&hand),
                Err(OddsError::Duplicate(_))
            ));
        }
    }
}
