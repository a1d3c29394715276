//! Card dictionary: ranks, suits, cards and their string/numeric forms.
mod card;
mod deck;
mod rank;
mod suit;

pub use card::*;
pub use deck::*;
pub use rank::*;
pub use suit::*;
