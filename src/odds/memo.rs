use super::odds::Odds;
use super::situation::Situation;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory cache of finished calculations and the depth behind each.
///
/// An entry is served only to requests asking for at most its depth, and is
/// replaced only by a strictly deeper result, so the depth stored under a key
/// never decreases.
#[derive(Debug, Default)]
pub struct Memo(RwLock<HashMap<Situation, (Odds, usize)>>);

impl Memo {
    /// Cached odds computed with at least `samples`.
    pub fn get(&self, key: &Situation, samples: usize) -> Option<Odds> {
        self.0
            .read()
            .expect("memo lock")
            .get(key)
            .filter(|(_, depth)| *depth >= samples)
            .map(|(odds, _)| odds.clone())
    }

    /// Stores `odds` unless an entry at least as deep exists; returns whichever is kept.
    pub fn put(&self, key: Situation, odds: Odds, samples: usize) -> Odds {
        let mut memo = self.0.write().expect("memo lock");
        match memo.get(&key) {
            Some((cached, depth)) if *depth >= samples => {
                log::debug!("keeping {} at depth {} over depth {}", key, depth, samples);
                cached.clone()
            }
            _ => {
                memo.insert(key, (odds.clone(), samples));
                odds
            }
        }
    }

    /// Depth of the entry under `key`, if any.
    pub fn depth(&self, key: &Situation) -> Option<usize> {
        self.0
            .read()
            .expect("memo lock")
            .get(key)
            .map(|(_, depth)| *depth)
    }

    pub fn len(&self) -> usize {
        self.0.read().expect("memo lock").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
