use super::evaluator::Evaluator;
use crate::cards::Card;
use crate::cards::Rank;
use crate::cards::Suit;

/// A canonical partial hand: one of the states of the rank table.
///
/// Up to seven cards packed one per byte, strongest byte first in the
/// lowest position. Each byte is `(rank + 1) << 4 | (suit + 1)`; a suit
/// nibble of zero means the card's suit can no longer contribute to a
/// flush and was erased. Erasing suits is what folds the 133M seven-card
/// sequences down to a few hundred thousand states.
///
/// More cards always means a larger id, so sorting ids sorts them by size first.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct HandId(u64);

impl HandId {
    /// Number of cards in the hand.
    pub fn len(&self) -> usize {
        self.0
            .to_le_bytes()
            .iter()
            .take_while(|b| **b != 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// The state reached by adding `card`, or `None` if the card is already held.
    ///
    /// Suits are kept only while enough cards of that suit are present for a
    /// flush to still be possible by the seventh card.
    pub fn with(&self, card: Card) -> Option<Self> {
        let n = card.id() - 1;
        let new = ((n >> 2) + 1) << 4 | ((n & 3) + 1);
        let mut bytes = [0u8; 8];
        bytes[0] = new;
        bytes[1..7].copy_from_slice(&self.0.to_le_bytes()[..6]);
        let count = bytes.iter().take_while(|b| **b != 0).count();
        if bytes[1..count].contains(&new) {
            return None;
        }
        let mut suits = [0u8; 5];
        let mut ranks = [0u8; 14];
        for byte in &bytes[..count] {
            suits[(byte & 0xf) as usize] += 1;
            ranks[(byte >> 4) as usize] += 1;
        }
        if ranks.iter().any(|&r| r > 4) {
            return None;
        }
        let needed = count.saturating_sub(2) as u8;
        if needed > 1 {
            for byte in bytes[..count].iter_mut() {
                if suits[(*byte & 0xf) as usize] < needed {
                    *byte &= 0xf0;
                }
            }
        }
        bytes[..count].sort_unstable_by(|a, b| b.cmp(a));
        Some(Self(u64::from_le_bytes(bytes)))
    }

    /// The cards as ranks with their surviving suits.
    pub fn evaluator(&self) -> Evaluator {
        self.0
            .to_le_bytes()
            .into_iter()
            .take_while(|b| *b != 0)
            .map(|b| {
                let rank = Rank::from((b >> 4) - 1);
                let suit = match b & 0xf {
                    0 => None,
                    s => Some(Suit::from(s - 1)),
                };
                (rank, suit)
            })
            .collect()
    }
}

/// u64 isomorphism
impl From<HandId> for u64 {
    fn from(id: HandId) -> u64 {
        id.0
    }
}
impl From<u64> for HandId {
    fn from(n: u64) -> Self {
        Self(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(hand: &str) -> Option<HandId> {
        Card::parse(&hand.split_whitespace().collect::<Vec<_>>())
            .unwrap()
            .into_iter()
            .try_fold(HandId::default(), |id, card| id.with(card))
    }

    #[test]
    fn order_independent() {
        assert_eq!(id("as kd 7h 7c 2s"), id("7c 2s kd as 7h"));
        assert_eq!(id("as kd 7h 7c 2s 9s 3s"), id("3s 9s 2s 7c 7h kd as"));
    }

    #[test]
    fn counts_cards() {
        assert_eq!(HandId::default().len(), 0);
        assert_eq!(id("as").map(|i| i.len()), Some(1));
        assert_eq!(id("as kd 7h 7c 2s 9s").map(|i| i.len()), Some(6));
    }

    #[test]
    fn duplicates_rejected() {
        assert_eq!(id("as kd as"), None);
    }

    #[test]
    fn dead_suits_erased() {
        // three spades among five cards keep their suit; the others cannot flush
        assert_eq!(id("as ks 2s 7h 9d"), id("as ks 2s 7c 9c"));
        assert_ne!(id("as ks 2s 7h 9d"), id("as ks 2d 7h 9d"));
    }

    #[test]
    fn seventh_card_keeps_only_the_flush() {
        assert_eq!(id("as ks qs js 9s 2h 3d"), id("as ks qs js 9s 2c 3c"));
        assert_eq!(id("as ks qs js 2h 3d 4c"), id("ac kd qh js 2s 3d 4c"));
    }
}
