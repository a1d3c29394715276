use super::classes::Classes;
use super::hand_id::HandId;
use crate::TableError;
use crate::cards::Deck;
use byteorder::LittleEndian;
use byteorder::ReadBytesExt;
use byteorder::WriteBytesExt;
use rayon::prelude::*;
use std::fs::File;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

/// Slots per state: slot 0 plus one per card id.
pub const N_SLOTS: usize = 53;
/// The empty hand's state.
pub const START: u32 = N_SLOTS as u32;

/// The perfect-hash rank table.
///
/// A flat array of states. Every state owns [`N_SLOTS`] consecutive entries:
/// entry `state + card` is the state reached by adding `card`, or once the
/// seventh card lands, the hand's final rank value. Entry `state` itself holds
/// the value of five- and six-card hands so they can be finished with one
/// extra lookup. Zero is absorbing: it marks a malformed sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandRanks(Vec<u32>);

impl HandRanks {
    /// `HANDRANKS_PATH` if set, else `HandRanks.dat` in the working directory.
    pub fn path() -> PathBuf {
        std::env::var_os("HANDRANKS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(crate::HAND_RANKS_FILE))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let io = |source| TableError::Io {
            path: name.clone(),
            source,
        };
        let start = Instant::now();
        log::info!("{:<32}{:<32}", "loading     rank table", name);
        let file = File::open(path).map_err(io)?;
        let bytes = file.metadata().map_err(io)?.len();
        if bytes % 4 != 0 {
            return Err(TableError::Misaligned { path: name, bytes });
        }
        let found = (bytes / 4) as usize;
        if found < crate::HAND_RANKS_LEN {
            return Err(TableError::Truncated {
                path: name,
                found,
                expected: crate::HAND_RANKS_LEN,
            });
        }
        let mut table = vec![0u32; found];
        BufReader::new(file)
            .read_u32_into::<LittleEndian>(&mut table)
            .map_err(io)?;
        log::info!("loaded {} entries in {:?}", found, start.elapsed());
        Ok(Self(table))
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), TableError> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let io = |source| TableError::Io {
            path: name.clone(),
            source,
        };
        log::info!("{:<32}{:<32}", "saving      rank table", name);
        let mut writer = BufWriter::new(File::create(path).map_err(io)?);
        for value in self.0.iter() {
            writer.write_u32::<LittleEndian>(*value).map_err(io)?;
        }
        writer.flush().map_err(io)
    }

    /// Builds the table from scratch.
    ///
    /// Every canonical hand of up to six cards becomes a state. States are
    /// sorted so the empty hand sits at [`START`] and each state's position
    /// can be found by binary search. Blocks are filled in parallel.
    pub fn generate() -> Self {
        let start = Instant::now();
        let ref classes = Classes::new();
        let ref ids = Self::enumerate();
        log::info!("enumerated {} hand states in {:?}", ids.len(), start.elapsed());
        let mut table = vec![0u32; (ids.len() + 1) * N_SLOTS];
        table[N_SLOTS..]
            .par_chunks_mut(N_SLOTS)
            .zip(ids.par_iter())
            .for_each(|(block, id)| {
                for card in Deck::all() {
                    block[card.id() as usize] = match id.with(card) {
                        None => 0,
                        Some(next) if next.len() < 7 => ids
                            .binary_search(&next)
                            .map_or(0, |i| ((i + 1) * N_SLOTS) as u32),
                        Some(next) => Self::value(classes, next),
                    };
                }
                if matches!(id.len(), 5 | 6) {
                    block[0] = Self::value(classes, *id);
                }
            });
        log::info!("generated {} entries in {:?}", table.len(), start.elapsed());
        Self(table)
    }

    /// Entry at `index`, zero past the end.
    pub fn get(&self, index: usize) -> u32 {
        self.0.get(index).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Layer by layer, every canonical hand of zero to six cards, ascending.
    fn enumerate() -> Vec<HandId> {
        let mut ids = vec![HandId::default()];
        let mut layer = vec![HandId::default()];
        for _ in 0..6 {
            layer = layer
                .par_iter()
                .flat_map_iter(|id| Deck::all().filter_map(move |card| id.with(card)))
                .collect::<Vec<_>>();
            layer.par_sort_unstable();
            layer.dedup();
            ids.extend_from_slice(&layer);
        }
        ids
    }

    fn value(classes: &Classes, id: HandId) -> u32 {
        id.evaluator()
            .strength()
            .and_then(|strength| classes.value(&strength))
            .unwrap_or(0)
    }
}

impl From<Vec<u32>> for HandRanks {
    fn from(table: Vec<u32>) -> Self {
        Self(table)
    }
}
