use crate::cards::Card;

/// Branches that survived one opponent level, stored column-wise.
///
/// Every record is the cards still unassigned on that branch plus how many
/// opponents have tied the hero so far. Records within an epoch all hold the
/// same number of cards, so record `i` is simply `cards[i * stride..][..stride]`.
/// Buffers grow as needed and are never shrunk; [`reset`](Self::reset) only
/// truncates, so after warm-up an epoch allocates nothing.
///
/// Two arenas are alternated across opponent levels: one is read while the
/// survivors are written to the other.
#[derive(Debug, Clone, Default)]
pub struct BattleArena {
    cards: Vec<Card>,
    ties: Vec<u32>,
    stride: usize,
    cursor: usize,
}

impl BattleArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empties the arena and fixes the record length for the next epoch.
    pub fn reset(&mut self, stride: usize) {
        self.cards.clear();
        self.ties.clear();
        self.stride = stride;
        self.cursor = 0;
    }

    /// Appends `source` minus the positions in `excluded`, which must be ascending.
    ///
    /// Panics if the record does not come out at the epoch's length.
    pub fn add(&mut self, source: &[Card], excluded: &[u8], ties: u32) {
        let before = self.cards.len();
        let mut skip = excluded.iter().map(|&i| i as usize).peekable();
        for (i, card) in source.iter().enumerate() {
            if skip.next_if_eq(&i).is_none() {
                self.cards.push(*card);
            }
        }
        let added = self.cards.len() - before;
        if added != self.stride {
            self.cards.truncate(before);
            panic!(
                "expected {} cards per record, got {}",
                self.stride, added
            );
        }
        self.ties.push(ties);
    }

    /// Single pass over the records not yet visited since the last reset.
    ///
    /// The position survives the iterator, so a second call picks up where
    /// the first one stopped.
    pub fn iter(&mut self) -> Records<'_> {
        Records {
            cards: &self.cards,
            ties: &self.ties,
            stride: self.stride,
            cursor: &mut self.cursor,
        }
    }

    /// Records in the current epoch.
    pub fn len(&self) -> usize {
        self.ties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ties.is_empty()
    }

    /// Cards the backing buffer holds without reallocating.
    pub fn capacity(&self) -> usize {
        self.cards.capacity()
    }
}

/// Lending view over an arena's unvisited records.
#[derive(Debug)]
pub struct Records<'a> {
    cards: &'a [Card],
    ties: &'a [u32],
    stride: usize,
    cursor: &'a mut usize,
}

impl<'a> Iterator for Records<'a> {
    type Item = (&'a [Card], u32);
    fn next(&mut self) -> Option<Self::Item> {
        let index = *self.cursor;
        let ties = *self.ties.get(index)?;
        *self.cursor += 1;
        let start = index * self.stride;
        Some((&self.cards[start..start + self.stride], ties))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.ties.len().saturating_sub(*self.cursor);
        (n, Some(n))
    }
}
