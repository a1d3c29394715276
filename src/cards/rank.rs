/// Card rank, deuce low. The discriminant is the rank's position in
/// [`Rank::all`] and its bit in a 13-bit rank mask.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Rank {
    #[default]
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

const RANKS: [Rank; 13] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

const SYMBOLS: &str = "23456789tjqka";

impl Rank {
    pub const fn mask() -> u16 {
        0b1111111111111
    }
    /// Ascending, so `.rev()` walks from the ace down.
    pub fn all() -> impl DoubleEndedIterator<Item = Self> {
        RANKS.into_iter()
    }
    fn symbol(&self) -> char {
        SYMBOLS.as_bytes()[*self as usize] as char
    }
}

/// u8 isomorphism
impl From<u8> for Rank {
    fn from(n: u8) -> Rank {
        match RANKS.get(n as usize) {
            Some(rank) => *rank,
            None => panic!("no rank at {}", n),
        }
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r as u8
    }
}

/// u16 isomorphism
///
/// One bit per rank. A mask with several bits maps to its highest rank.
impl From<u16> for Rank {
    fn from(n: u16) -> Rank {
        let msb = (u16::BITS - 1 - (n & Self::mask()).leading_zeros()) as u8;
        Rank::from(msb)
    }
}
impl From<Rank> for u16 {
    fn from(r: Rank) -> u16 {
        1 << u8::from(r)
    }
}

/// str isomorphism, one symbol, case-insensitive
impl TryFrom<&str> for Rank {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.chars().map(|c| c.to_ascii_lowercase());
        match (chars.next(), chars.next()) {
            (Some(c), None) => SYMBOLS
                .find(c)
                .map(|i| RANKS[i])
                .ok_or_else(|| format!("invalid rank str: {}", s)),
            _ => Err(format!("invalid rank str: {}", s)),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
