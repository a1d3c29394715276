use super::rank::Rank;
use super::suit::Suit;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `1..=52` where the encoding is
/// `rank * 4 + suit + 1`, so 2c is 1 and As is 52. Zero is left free
/// because the rank table reserves it for "no card". Cards sort first by
/// rank, then by suit within each rank.
///
/// Cards parse from two-character strings like `"as"` or `"Td"`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    /// Extracts the rank component (2 through Ace).
    pub fn rank(&self) -> Rank {
        Rank::from((self.0 - 1) / 4)
    }
    /// Extracts the suit component (clubs, diamonds, hearts, spades).
    pub fn suit(&self) -> Suit {
        Suit::from((self.0 - 1) % 4)
    }
    /// Numeric id in `1..=52`, the index the rank table folds on.
    pub fn id(&self) -> u8 {
        self.0
    }
    /// Parses every string in `strings`, failing on the first invalid one.
    pub fn parse<S: AsRef<str>>(strings: &[S]) -> Result<Vec<Self>, String> {
        strings
            .iter()
            .map(|s| Self::try_from(s.as_ref()))
            .collect::<Result<Vec<Self>, _>>()
    }
    /// First card that appears more than once.
    pub fn duplicate(cards: &[Self]) -> Option<Self> {
        let mut seen = 0u64;
        cards.iter().copied().find(|card| {
            let bit = u64::from(*card);
            let dup = seen & bit != 0;
            seen |= bit;
            dup
        })
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s) + 1)
    }
}

/// u8 isomorphism
/// 2c 2d 2h 2s 3c ... Ah As
/// 1  2  3  4  5  ... 51 52
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl TryFrom<u8> for Card {
    type Error = String;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1..=52 => Ok(Self(n)),
            _ => Err(format!("{} is not a valid card", n)),
        }
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << (c.0 - 1)
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let trimmed = s.trim();
        match (trimmed.len(), trimmed.is_ascii()) {
            (2, true) => {
                let rank = Rank::try_from(&trimmed[0..1]).map_err(|_| invalid(s))?;
                let suit = Suit::try_from(&trimmed[1..2]).map_err(|_| invalid(s))?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(invalid(s)),
        }
    }
}

fn invalid(s: &str) -> String {
    format!("{} is not a valid card", s)
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}
