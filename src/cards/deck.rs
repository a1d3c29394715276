use super::card::Card;

/// The full 52-card dictionary in ascending id order.
///
/// Everything that lists "available" cards goes through here so that
/// the order of unknown cards is the same for every caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct Deck;

impl Deck {
    /// All 52 cards, 2c first and As last.
    pub fn all() -> impl Iterator<Item = Card> {
        (1..=crate::DECK_SIZE as u8).filter_map(|n| Card::try_from(n).ok())
    }
    /// Cards not in `known`, ascending.
    pub fn without(known: &[Card]) -> Vec<Card> {
        let mask = known.iter().map(|c| u64::from(*c)).fold(0u64, |a, b| a | b);
        Self::all().filter(|c| u64::from(*c) & mask == 0).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete() {
        let cards = Deck::all().collect::<Vec<_>>();
        assert_eq!(cards.len(), 52);
        assert!(cards.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn without_known() {
        let ref known = Card::parse(&["as", "ks", "2c"]).unwrap();
        let rest = Deck::without(known);
        assert_eq!(rest.len(), 49);
        assert!(known.iter().all(|k| !rest.contains(k)));
        assert_eq!(rest.first().map(Card::to_string), Some("2d".to_string()));
    }
}
