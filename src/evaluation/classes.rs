use super::evaluator::Evaluator;
use super::strength::Strength;
use crate::cards::Rank;
use crate::cards::Suit;
use std::collections::HashMap;

/// Number of distinct five-card hands once suits stop mattering.
pub const N_CLASSES: usize = 7462;

/// Every five-card equivalence class, numbered the way the rank table stores it.
///
/// Classes are sorted weakest first. A class is worth `category << 12 | index`
/// where `index` counts from 1 within its category, so a larger value is
/// always a stronger hand and the category can be read back from the top bits.
#[derive(Debug, Clone)]
pub struct Classes(HashMap<Strength, u32>);

impl Classes {
    pub fn new() -> Self {
        let mut strengths = Self::unsuited()
            .chain(Self::suited())
            .filter_map(|evaluator| evaluator.strength())
            .collect::<Vec<_>>();
        strengths.sort();
        strengths.dedup();
        let mut values = HashMap::with_capacity(strengths.len());
        let mut index = 0;
        let mut category = None;
        for strength in strengths {
            if category != Some(strength.category()) {
                category = Some(strength.category());
                index = 0;
            }
            index += 1;
            values.insert(strength, u32::from(strength.category()) << 12 | index);
        }
        Self(values)
    }

    /// Table value for the best five cards a hand can make.
    pub fn value(&self, strength: &Strength) -> Option<u32> {
        self.0.get(strength).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Five-rank multisets that cannot flush. Five of a kind is skipped.
    fn unsuited() -> impl Iterator<Item = Evaluator> {
        (0..13u8).flat_map(|a| {
            (a..13).flat_map(move |b| {
                (b..13).flat_map(move |c| {
                    (c..13).flat_map(move |d| {
                        (d..13)
                            .filter(move |&e| e != a)
                            .map(move |e| {
                                [a, b, c, d, e]
                                    .into_iter()
                                    .map(|r| (Rank::from(r), None))
                                    .collect::<Evaluator>()
                            })
                    })
                })
            })
        })
    }

    /// Five distinct ranks of one suit.
    fn suited() -> impl Iterator<Item = Evaluator> {
        (0..1u16 << 13)
            .filter(|mask| mask.count_ones() == 5)
            .map(|mask| {
                Rank::all()
                    .filter(|r| mask & u16::from(*r) != 0)
                    .map(|r| (r, Some(Suit::Spade)))
                    .collect::<Evaluator>()
            })
    }
}

impl Default for Classes {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::evaluation::HandCategory;

    fn value(classes: &Classes, hand: &str) -> u32 {
        let ref cards = Card::parse(&hand.split_whitespace().collect::<Vec<_>>()).unwrap();
        let strength = Evaluator::from(cards.as_slice()).strength().unwrap();
        classes.value(&strength).unwrap()
    }

    #[test]
    fn all_classes() {
        assert_eq!(Classes::new().len(), N_CLASSES);
    }

    #[test]
    fn classes_per_category() {
        let classes = Classes::new();
        let count = |category: HandCategory| {
            classes
                .0
                .values()
                .filter(|v| HandCategory::from(**v) == category)
                .count()
        };
        assert_eq!(count(HandCategory::HighCard), 1277);
        assert_eq!(count(HandCategory::OnePair), 2860);
        assert_eq!(count(HandCategory::TwoPairs), 858);
        assert_eq!(count(HandCategory::ThreeOfAKind), 858);
        assert_eq!(count(HandCategory::Straight), 10);
        assert_eq!(count(HandCategory::Flush), 1277);
        assert_eq!(count(HandCategory::FullHouse), 156);
        assert_eq!(count(HandCategory::FourOfAKind), 156);
        assert_eq!(count(HandCategory::StraightFlush), 10);
    }

    #[test]
    fn extremes() {
        let classes = Classes::new();
        assert_eq!(value(&classes, "7c 5d 4h 3s 2c"), 1 << 12 | 1);
        assert_eq!(value(&classes, "as ks qs js ts"), 9 << 12 | 10);
        assert_eq!(value(&classes, "5h 4h 3h 2h ah"), 9 << 12 | 1);
        assert!(value(&classes, "ac ad ah as kc") > value(&classes, "kc kd kh ks ac"));
    }
}
