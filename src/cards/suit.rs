#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    Club = 0,
    Diamond = 1,
    Heart = 2,
    Spade = 3,
}

const SYMBOLS: &str = "cdhs";

impl Suit {
    pub const fn all() -> [Self; 4] {
        [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade]
    }
}

/// u8 isomorphism, clubs low
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match Self::all().get(n as usize) {
            Some(suit) => *suit,
            None => panic!("no suit at {}", n),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// str isomorphism, one symbol, case-insensitive
impl TryFrom<&str> for Suit {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_ascii_lowercase().as_str() {
            symbol if symbol.len() == 1 => SYMBOLS
                .find(symbol)
                .map(|i| Self::all()[i])
                .ok_or_else(|| format!("invalid suit str: {}", s)),
            _ => Err(format!("invalid suit str: {}", s)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", &SYMBOLS[*self as usize..*self as usize + 1])
    }
}
