use super::kicks::Kickers;
use super::ranking::Ranking;
use super::strength::Strength;
use crate::cards::Card;
use crate::cards::Rank;
use crate::cards::Suit;

const WHEEL: u16 = 0b_1000000001111;
const LOWEST_STRAIGHT_RANK: Rank = Rank::Five;

/// A lazy evaluator for a hand's strength.
///
/// Cards are reduced to per-rank counts plus one rank mask per suit, and the
/// best five-card hand is searched for with bitwise operations. A card may
/// also enter without a suit: it counts for pairs and straights but never for
/// a flush. The rank table generator relies on that to evaluate hands whose
/// off-suit cards were already erased.
///
/// Orders of magnitude slower than a table lookup. It ranks the 7462
/// equivalence classes once and cross-checks the table in tests.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    ranks: u16,
    counts: [u8; 13],
    suits: [u16; 4],
}

impl Evaluator {
    pub fn add(&mut self, rank: Rank, suit: Option<Suit>) {
        let bit = u16::from(rank);
        self.ranks |= bit;
        self.counts[u8::from(rank) as usize] += 1;
        if let Some(suit) = suit {
            self.suits[u8::from(suit) as usize] |= bit;
        }
    }

    /// Best ranking plus kickers, or `None` for an empty hand.
    pub fn strength(&self) -> Option<Strength> {
        self.find_ranking()
            .map(|ranking| Strength::from((ranking, self.find_kickers(ranking))))
    }

    pub fn find_ranking(&self) -> Option<Ranking> {
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_1_oak())
    }

    pub fn find_kickers(&self, ranking: Ranking) -> Kickers {
        match ranking.n_kickers() {
            0 => Kickers::from(0),
            n => {
                let source = match ranking {
                    Ranking::Flush(_) => self.find_suit_of_flush().map_or(0, |s| self.of(s)),
                    _ => self.ranks,
                };
                let mut rank = source & ranking.mask();
                while n < rank.count_ones() as usize {
                    rank &= !(1 << rank.trailing_zeros());
                }
                Kickers::from(rank)
            }
        }
    }

    ///

    fn find_1_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(1).map(Ranking::HighCard)
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3).map(Ranking::ThreeOAK)
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(4).map(Ranking::FourOAK)
    }
    fn find_2_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2).map(|hi| {
            self.find_rank_of_n_oak_skip(2, Some(hi))
                .map(|lo| Ranking::TwoPair(hi, lo))
                .unwrap_or(Ranking::OnePair(hi))
        })
    }
    fn find_3_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3).and_then(|triple| {
            self.find_rank_of_n_oak_skip(2, Some(triple))
                .map(|paired| Ranking::FullHouse(triple, paired))
        })
    }
    fn find_straight(&self) -> Option<Ranking> {
        self.find_rank_of_straight(self.ranks).map(Ranking::Straight)
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush()
            .map(|suit| Ranking::Flush(Rank::from(self.of(suit))))
    }
    fn find_straight_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush().and_then(|suit| {
            self.find_rank_of_straight(self.of(suit))
                .map(Ranking::StraightFlush)
        })
    }

    fn find_rank_of_straight(&self, ranks: u16) -> Option<Rank> {
        let mut bits = ranks;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        if bits > 0 {
            Some(Rank::from(bits))
        } else if WHEEL == (WHEEL & ranks) {
            Some(LOWEST_STRAIGHT_RANK)
        } else {
            None
        }
    }
    fn find_suit_of_flush(&self) -> Option<Suit> {
        Suit::all()
            .into_iter()
            .find(|s| self.of(*s).count_ones() >= 5)
    }
    fn find_rank_of_n_oak(&self, n: u8) -> Option<Rank> {
        self.find_rank_of_n_oak_skip(n, None)
    }
    fn find_rank_of_n_oak_skip(&self, n: u8, skip: Option<Rank>) -> Option<Rank> {
        Rank::all()
            .rev()
            .filter(|r| Some(*r) != skip)
            .find(|r| self.counts[u8::from(*r) as usize] >= n)
    }
    fn of(&self, suit: Suit) -> u16 {
        self.suits[u8::from(suit) as usize]
    }
}

impl From<&[Card]> for Evaluator {
    fn from(cards: &[Card]) -> Self {
        cards
            .iter()
            .map(|c| (c.rank(), Some(c.suit())))
            .collect()
    }
}

impl FromIterator<(Rank, Option<Suit>)> for Evaluator {
    fn from_iter<I: IntoIterator<Item = (Rank, Option<Suit>)>>(iter: I) -> Self {
        let mut evaluator = Self::default();
        for (rank, suit) in iter {
            evaluator.add(rank, suit);
        }
        evaluator
    }
}
