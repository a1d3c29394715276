use super::level::Level;
use super::tally::Tally;
use crate::Count;
use crate::OddsError;
use crate::arena::BattleArena;
use crate::cards::Card;
use crate::combinations::CombinationIndex;
use crate::combinations::Combinations;
use crate::evaluation::HandEvaluator;
use crate::sampler::IndexSampler;
use std::cmp::Ordering;

/// Everything one worker needs to play out boards for a single request.
///
/// Built once per worker and reused for every board it is handed: the
/// sampler, both arenas and the board buffer keep their allocations across
/// calls to [`run`](Self::run). Opponents are expanded level by level through
/// a fixed frame per opponent instead of recursion. Branches where an opponent
/// beats the hero stop immediately; the rest move to the next level's arena.
#[derive(Debug)]
pub struct Showdown<'a> {
    evaluator: &'a HandEvaluator,
    hero: [Card; 2],
    known: &'a [Card],
    available: &'a [Card],
    completions: &'a Combinations,
    levels: Vec<Level<'a>>,
    unassigned: usize,
    total: Count,
    sampler: IndexSampler,
    arenas: [BattleArena; 2],
    board: Vec<Card>,
    tally: Tally,
}

impl<'a> Showdown<'a> {
    /// `available` lists every card the hero cannot see, in deck order.
    pub fn new(
        evaluator: &'a HandEvaluator,
        combinations: &'a CombinationIndex,
        hero: [Card; 2],
        known: &'a [Card],
        available: &'a [Card],
        opponents: usize,
        per_opponent: usize,
    ) -> Result<Self, OddsError> {
        let missing = crate::BOARD_SIZE.saturating_sub(known.len());
        let completions = combinations.get(available.len(), missing)?;
        let unassigned = available.len().saturating_sub(missing);
        let levels = Level::stack(
            |n| combinations.get(n, crate::HOLE_SIZE),
            unassigned,
            opponents,
            per_opponent,
        )?;
        let total = levels.iter().map(|l| l.samples as Count).product();
        let capacity = levels.first().map_or(0, |l| l.pairs.len());
        Ok(Self {
            evaluator,
            hero,
            known,
            available,
            completions,
            levels,
            unassigned,
            total,
            sampler: IndexSampler::new(capacity),
            arenas: [BattleArena::new(), BattleArena::new()],
            board: Vec::with_capacity(missing),
            tally: Tally::default(),
        })
    }

    /// Number of ways to complete the board.
    pub fn boards(&self) -> usize {
        self.completions.len()
    }

    /// Plays out the board completion at `index` against every opponent level.
    pub fn run(&mut self, index: usize) -> Result<(), OddsError> {
        if index >= self.completions.len() {
            return Err(OddsError::Invariant(format!("board {}", index)));
        }
        let completion = self.completions.get(index);
        self.board.clear();
        self.board.extend(
            completion
                .selected()
                .iter()
                .map(|&i| self.available[i as usize]),
        );
        let partial = self
            .evaluator
            .partial(&[self.known, self.board.as_slice()]);
        let hero = partial.eval(self.hero[0], self.hero[1]);
        if !hero.is_valid() {
            return Err(OddsError::Invariant("hero".to_string()));
        }

        let [a, b] = &mut self.arenas;
        let (mut prev, mut next) = (a, b);
        prev.reset(self.unassigned);
        prev.add(self.available, completion.selected(), 0);

        let mut won: Count = 0;
        let mut lost: Count = 0;
        let mut tied: Count = 0;
        let last = self.levels.len().saturating_sub(1);
        for (v, level) in self.levels.iter().enumerate() {
            next.reset(self.unassigned.saturating_sub(crate::HOLE_SIZE * (v + 1)));
            self.sampler.configure(level.pairs.len(), level.samples);
            for (cards, ties) in prev.iter() {
                self.sampler.reset();
                while let Some(i) = self.sampler.next() {
                    let pair = level.pairs.get(i).selected();
                    let villain = partial.eval(cards[pair[0] as usize], cards[pair[1] as usize]);
                    if !villain.is_valid() {
                        return Err(OddsError::Invariant(format!("opponent {}", v + 1)));
                    }
                    let ties = match villain.value().cmp(&hero.value()) {
                        Ordering::Greater => {
                            lost += level.weight;
                            continue;
                        }
                        Ordering::Equal => ties + 1,
                        Ordering::Less => ties,
                    };
                    if v < last {
                        next.add(cards, pair, ties);
                    } else if ties == 0 {
                        won += 1;
                    } else {
                        tied += 1;
                        self.tally.ties[ties as usize] += 1;
                    }
                }
            }
            std::mem::swap(&mut prev, &mut next);
        }

        self.tally.total += self.total;
        self.tally.win += won;
        self.tally.lose += lost;
        self.tally.tie += tied;
        self.tally.hero[hero.category() as usize] += self.total;
        Ok(())
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    pub fn into_tally(self) -> Tally {
        self.tally
    }
}
