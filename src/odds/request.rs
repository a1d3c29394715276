use crate::OddsError;
use crate::cards::Card;

/// A validated odds request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub hero: [Card; 2],
    pub community: Vec<Card>,
    pub opponents: usize,
    pub samples: usize,
}

impl Request {
    /// Parses and validates card strings.
    ///
    /// Checks run in a fixed order so the same bad request always reports
    /// the same error: card strings, hole card count, community count,
    /// duplicates, opponents, then sample depth.
    pub fn parse<S: AsRef<str>>(
        hero: &[S],
        community: &[S],
        opponents: usize,
        samples: usize,
    ) -> Result<Self, OddsError> {
        let hole = Card::parse(hero).map_err(OddsError::Card)?;
        let community = Card::parse(community).map_err(OddsError::Card)?;
        let hero = match hole.as_slice() {
            [a, b] => [*a, *b],
            _ => return Err(OddsError::HoleCards(hole.len())),
        };
        if !matches!(community.len(), 0 | 3 | 4 | 5) {
            return Err(OddsError::Community(community.len()));
        }
        if let Some(card) = Card::duplicate(&[&hero[..], &community[..]].concat()) {
            return Err(OddsError::Duplicate(card));
        }
        if !(1..=crate::MAX_OPPONENTS).contains(&opponents) {
            return Err(OddsError::Opponents(opponents));
        }
        if !(crate::MIN_SAMPLES..=crate::MAX_SAMPLES).contains(&samples) {
            return Err(OddsError::Samples(samples));
        }
        Ok(Self {
            hero,
            community,
            opponents,
            samples,
        })
    }

    pub fn is_preflop(&self) -> bool {
        self.community.is_empty()
    }

    /// Hero and community cards together.
    pub fn known(&self) -> Vec<Card> {
        self.hero
            .iter()
            .chain(self.community.iter())
            .copied()
            .collect()
    }
}
