use super::request::Request;
use crate::cards::Card;
use crate::cards::Rank;

/// The memo key: which requests are guaranteed the same answer.
///
/// Before the flop only ranks and suitedness matter, so every suit
/// relabeling of the hole cards shares one entry. Once community cards are
/// known the key is the exact card set. Results depend on the number of
/// opponents, so that is part of both.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Situation {
    Preflop {
        high: Rank,
        low: Rank,
        suited: bool,
        opponents: usize,
    },
    Board {
        hero: [Card; 2],
        community: Vec<Card>,
        opponents: usize,
    },
}

impl From<&Request> for Situation {
    fn from(request: &Request) -> Self {
        let [a, b] = request.hero;
        let hero = if a <= b { [a, b] } else { [b, a] };
        if request.is_preflop() {
            Self::Preflop {
                high: hero[1].rank(),
                low: hero[0].rank(),
                suited: a.suit() == b.suit(),
                opponents: request.opponents,
            }
        } else {
            let mut community = request.community.clone();
            community.sort();
            Self::Board {
                hero,
                community,
                opponents: request.opponents,
            }
        }
    }
}

impl std::fmt::Display for Situation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Preflop {
                high,
                low,
                suited,
                opponents,
            } => write!(
                f,
                "{}{}-{} vs {}",
                high,
                low,
                if *suited { "same-suit" } else { "different-suit" },
                opponents
            ),
            Self::Board {
                hero,
                community,
                opponents,
            } => {
                write!(f, "{}{} |", hero[0], hero[1])?;
                for card in community {
                    write!(f, " {}", card)?;
                }
                write!(f, " vs {}", opponents)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    fn key(hero: &[&str], community: &[&str], opponents: usize) -> Situation {
        Situation::from(&Request::parse(hero, community, opponents, 1_000).unwrap())
    }

    #[test]
    fn preflop_ignores_suit_labels() {
        assert_eq!(key(&["as", "ks"], &NONE, 1), key(&["kh", "ah"], &NONE, 1));
        assert_eq!(key(&["as", "kd"], &NONE, 1), key(&["ac", "kh"], &NONE, 1));
        assert_ne!(key(&["as", "ks"], &NONE, 1), key(&["as", "kd"], &NONE, 1));
        assert_eq!(key(&["as", "ks"], &NONE, 1).to_string(), "ak-same-suit vs 1");
    }

    #[test]
    fn opponents_matter() {
        assert_ne!(key(&["as", "ks"], &NONE, 1), key(&["as", "ks"], &NONE, 2));
        assert_ne!(
            key(&["as", "ks"], &["2d", "3d", "4d"], 1),
            key(&["as", "ks"], &["2d", "3d", "4d"], 3)
        );
    }

    #[test]
    fn board_is_order_free_but_exact() {
        assert_eq!(
            key(&["ks", "as"], &["4d", "2d", "3d"], 1),
            key(&["as", "ks"], &["2d", "3d", "4d"], 1)
        );
        assert_ne!(
            key(&["as", "ks"], &["2d", "3d", "4d"], 1),
            key(&["ah", "kh"], &["2d", "3d", "4d"], 1)
        );
        assert_eq!(
            key(&["ks", "as"], &["4d", "2d", "3d"], 1).to_string(),
            "ksas | 2d 3d 4d vs 1"
        );
    }
}
