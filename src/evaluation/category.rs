use serde::Serialize;
use serde::Serializer;

/// Entries in the category table, `Invalid` included.
pub const N_CATEGORIES: usize = 10;

/// The ten slots of the category table a rank value points into.
///
/// `Invalid` comes out of a fold over fewer than five cards. The table does
/// not reliably catch repeated cards once their suits are erased, so callers
/// reject duplicates before folding. Everything else is ordered weakest first.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandCategory {
    Invalid = 0,
    HighCard = 1,
    OnePair = 2,
    TwoPairs = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
}

impl HandCategory {
    pub const fn all() -> [Self; N_CATEGORIES] {
        [
            Self::Invalid,
            Self::HighCard,
            Self::OnePair,
            Self::TwoPairs,
            Self::ThreeOfAKind,
            Self::Straight,
            Self::Flush,
            Self::FullHouse,
            Self::FourOfAKind,
            Self::StraightFlush,
        ]
    }
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Invalid => "invalid hand",
            Self::HighCard => "high card",
            Self::OnePair => "one pair",
            Self::TwoPairs => "two pairs",
            Self::ThreeOfAKind => "three of a kind",
            Self::Straight => "straight",
            Self::Flush => "flush",
            Self::FullHouse => "full house",
            Self::FourOfAKind => "four of a kind",
            Self::StraightFlush => "straight flush",
        }
    }
}

/// rank value isomorphism
///
/// The category lives above the low 12 bits. Anything past the table maps to Invalid.
impl From<u32> for HandCategory {
    fn from(value: u32) -> Self {
        Self::all()
            .get((value >> 12) as usize)
            .copied()
            .unwrap_or(Self::Invalid)
    }
}
impl From<HandCategory> for u32 {
    fn from(c: HandCategory) -> u32 {
        c as u32
    }
}

impl Serialize for HandCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl std::fmt::Display for HandCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
