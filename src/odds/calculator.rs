use super::budget::Budget;
use super::memo::Memo;
use super::odds::Odds;
use super::request::Request;
use super::situation::Situation;
use crate::OddsError;
use crate::cards::Deck;
use crate::combinations::CombinationIndex;
use crate::evaluation::HandEvaluator;
use crate::sampler::IndexSampler;
use crate::showdown::Showdown;
use crate::showdown::Tally;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Instant;

/// Preflop requests deeper than this wait for any identical one in flight.
const PREFLOP_LOCK_SAMPLES: usize = 5_000;

/// Entry point: validates a request, serves it from the memo or fans the
/// sampled boards out over a pool of worker threads.
///
/// The rank table and combination blocks are shared read-only. Each call
/// builds its own scoped workers; each worker owns a [`Showdown`] and pulls
/// board indices from a bounded channel until the producer hangs up.
#[derive(Debug)]
pub struct Calculator {
    evaluator: Arc<HandEvaluator>,
    combinations: Arc<CombinationIndex>,
    memo: Memo,
    preflop: Mutex<()>,
    workers: usize,
}

impl Calculator {
    pub fn new(evaluator: Arc<HandEvaluator>, combinations: Arc<CombinationIndex>) -> Self {
        Self {
            evaluator,
            combinations,
            memo: Memo::default(),
            preflop: Mutex::new(()),
            workers: num_cpus::get(),
        }
    }

    /// Caps the worker pool. At least one worker always runs.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn memo(&self) -> &Memo {
        &self.memo
    }

    pub fn evaluator(&self) -> &HandEvaluator {
        &self.evaluator
    }

    /// Odds at the default sample depth.
    pub fn calculate<S: AsRef<str>>(
        &self,
        hero: &[S],
        community: &[S],
        opponents: usize,
    ) -> Result<Odds, OddsError> {
        self.calculate_with(hero, community, opponents, crate::DEFAULT_SAMPLES)
    }

    pub fn calculate_with<S: AsRef<str>>(
        &self,
        hero: &[S],
        community: &[S],
        opponents: usize,
        samples: usize,
    ) -> Result<Odds, OddsError> {
        let ref request = Request::parse(hero, community, opponents, samples)?;
        self.solve(request)
    }

    pub fn solve(&self, request: &Request) -> Result<Odds, OddsError> {
        let key = Situation::from(request);
        log::debug!("memo key {}", key);
        if let Some(odds) = self.memo.get(&key, request.samples) {
            log::debug!("serving cached {}", key);
            return Ok(odds);
        }
        let _guard = match request.is_preflop() && request.samples > PREFLOP_LOCK_SAMPLES {
            false => None,
            true => {
                log::debug!("waiting to compute preflop {}", key);
                let guard = self.preflop.lock().expect("preflop lock");
                if let Some(odds) = self.memo.get(&key, request.samples) {
                    log::debug!("preflop now cached {}", key);
                    return Ok(odds);
                }
                Some(guard)
            }
        };
        let start = Instant::now();
        let odds = Odds::from(self.simulate(request)?);
        log::info!("{:<32}{} in {:?}", key.to_string(), odds, start.elapsed());
        Ok(self.memo.put(key, odds, request.samples))
    }

    fn simulate(&self, request: &Request) -> Result<Tally, OddsError> {
        let ref available = Deck::without(&request.known());
        let missing = crate::BOARD_SIZE - request.community.len();
        let completions = self.combinations.get(available.len(), missing)?;
        let budget = Budget::new(request.samples, completions.len(), request.opponents);
        let workers = self.workers.min(budget.communities()).max(1);
        log::debug!(
            "{} boards x {} hands per opponent on {} workers",
            budget.communities(),
            budget.per_opponent(),
            workers
        );
        let showdowns = (0..workers)
            .map(|_| {
                Showdown::new(
                    &self.evaluator,
                    &self.combinations,
                    request.hero,
                    &request.community,
                    available,
                    request.opponents,
                    budget.per_opponent(),
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        let (tx, rx) = crossbeam::channel::bounded::<usize>(crate::QUEUE_CAPACITY);
        std::thread::scope(|scope| {
            let handles = showdowns
                .into_iter()
                .map(|mut showdown| {
                    let rx = rx.clone();
                    scope.spawn(move || -> Result<Tally, OddsError> {
                        for index in rx.iter() {
                            showdown.run(index)?;
                        }
                        Ok(showdown.into_tally())
                    })
                })
                .collect::<Vec<_>>();
            drop(rx);
            let mut sampler = IndexSampler::new(completions.len());
            sampler.configure(completions.len(), budget.communities());
            sampler.reset();
            while let Some(index) = sampler.next() {
                if tx.send(index).is_err() {
                    log::debug!("every showdown worker stopped early");
                    break;
                }
            }
            drop(tx);
            let mut tally = Tally::default();
            for handle in handles {
                tally += handle
                    .join()
                    .unwrap_or_else(|panic| std::panic::resume_unwind(panic))?;
            }
            Ok(tally)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::HandRanks;

    const NONE: [&str; 0] = [];

    fn calculator() -> Calculator {
        Calculator::new(
            crate::testing::evaluator().clone(),
            crate::testing::combinations().clone(),
        )
    }

    #[test]
    fn suited_ace_king_heads_up() {
        let odds = calculator()
            .calculate_with(&["as", "ks"], &NONE, 1, 200_000)
            .unwrap();
        assert_eq!(odds.win + odds.lose + odds.tie, odds.total);
        assert!((odds.win_p - 66.2).abs() < 2.5, "{}", odds);
        assert!((odds.tie_p - 1.6).abs() < 1.0, "{}", odds);
        assert_eq!(odds.hero.values().sum::<u64>(), odds.total);
    }

    #[test]
    fn totals_add_up() {
        let calculator = calculator();
        for (hero, community, opponents) in [
            (["7h", "7d"], vec!["2c", "9s", "kd"], 3),
            (["ah", "2c"], vec!["3d", "4d", "5h", "td"], 2),
            (["jc", "tc"], vec![], 6),
            (["qs", "qd"], vec!["2c", "7s", "9d", "jh", "3c"], 9),
        ] {
            let odds = calculator
                .calculate_with(&hero, &community, opponents, 20_000)
                .unwrap();
            assert_eq!(odds.win + odds.lose + odds.tie, odds.total, "{:?}", hero);
            assert_eq!(odds.ties.values().sum::<u64>(), odds.tie);
            assert!(odds.ties.keys().all(|n| (1..=opponents).contains(n)));
            assert!((odds.win_p + odds.lose_p + odds.tie_p - 100.).abs() < 0.01);
        }
    }

    #[test]
    fn river_board_plays() {
        let odds = calculator()
            .calculate_with(&["2c", "3d"], &["as", "ks", "qs", "js", "ts"], 1, 1_000)
            .unwrap();
        assert_eq!(odds.total, 990);
        assert_eq!(odds.tie, 990);
        assert_eq!(odds.ties.get(&1), Some(&990));
        assert_eq!(odds.tie_p, 100.);
    }

    #[test]
    fn royal_flush_wins_outright() {
        let odds = calculator()
            .calculate_with(&["as", "ks"], &["qs", "js", "ts", "2c", "3d"], 3, 10_000)
            .unwrap();
        assert_eq!(odds.win, odds.total);
        assert_eq!(odds.win_p, 100.);
    }

    #[test]
    fn duplicate_card_rejected() {
        let result = calculator().calculate(&["as", "ks"], &["as", "2d", "3d"], 1);
        assert_eq!(result.unwrap_err().to_string(), "found more than one as");
    }

    #[test]
    fn memo_never_downgrades() {
        let calculator = calculator().with_workers(2);
        let ref request = Request::parse(&["9h", "9d"], &["2c", "5s", "kd"], 2, 1_000).unwrap();
        let ref key = Situation::from(request);
        let deep = calculator
            .calculate_with(&["9h", "9d"], &["2c", "5s", "kd"], 2, 8_000)
            .unwrap();
        assert_eq!(calculator.memo().depth(key), Some(8_000));
        let shallow = calculator
            .calculate_with(&["9d", "9h"], &["kd", "2c", "5s"], 2, 2_000)
            .unwrap();
        assert_eq!(shallow, deep);
        assert_eq!(calculator.memo().depth(key), Some(8_000));
        let deeper = calculator
            .calculate_with(&["9h", "9d"], &["2c", "5s", "kd"], 2, 16_000)
            .unwrap();
        assert_eq!(calculator.memo().depth(key), Some(16_000));
        assert!(deeper.total >= deep.total);
    }

    #[test]
    fn preflop_suits_share_an_entry() {
        let calculator = calculator();
        let spades = calculator.calculate_with(&["as", "ks"], &NONE, 2, 10_000).unwrap();
        let hearts = calculator.calculate_with(&["kh", "ah"], &NONE, 2, 10_000).unwrap();
        assert_eq!(spades, hearts);
        assert_eq!(calculator.memo().len(), 1);
    }

    #[test]
    fn concurrent_preflop_requests() {
        let ref calculator = calculator();
        let results = std::thread::scope(|scope| {
            (0..4)
                .map(|_| scope.spawn(move || calculator.calculate_with(&["qc", "jc"], &NONE, 1, 20_000)))
                .collect::<Vec<_>>()
                .into_iter()
                .map(|h| h.join().unwrap().unwrap())
                .collect::<Vec<_>>()
        });
        assert!(results.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(calculator.memo().len(), 1);
    }

    #[test]
    fn broken_table_aborts_without_caching() {
        let evaluator = Arc::new(HandEvaluator::new(HandRanks::from(vec![0u32; 200])));
        let calculator = Calculator::new(evaluator, crate::testing::combinations().clone())
            .with_workers(4);
        let result = calculator.calculate_with(&["as", "ks"], &["2d", "3d", "4d"], 2, 10_000);
        assert_eq!(result, Err(OddsError::Invariant("hero".to_string())));
        assert!(calculator.memo().is_empty());
    }
}
