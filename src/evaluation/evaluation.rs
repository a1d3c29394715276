use super::category::HandCategory;
use serde::Serialize;
use serde::Serializer;
use serde::ser::SerializeStruct;

/// A hand's rank value read off the table.
///
/// Values compare directly: larger is stronger, equal is a split.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Evaluation {
    value: u32,
    category: HandCategory,
}

impl Evaluation {
    pub fn value(&self) -> u32 {
        self.value
    }
    pub fn category(&self) -> HandCategory {
        self.category
    }
    /// Position within the category, 1 being the weakest.
    pub fn rank(&self) -> u32 {
        self.value & 0xFFF
    }
    pub fn is_valid(&self) -> bool {
        self.category != HandCategory::Invalid
    }
}

/// rank value isomorphism
impl From<u32> for Evaluation {
    fn from(value: u32) -> Self {
        Self {
            value,
            category: HandCategory::from(value),
        }
    }
}
impl From<Evaluation> for u32 {
    fn from(e: Evaluation) -> u32 {
        e.value
    }
}

impl Serialize for Evaluation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Evaluation", 3)?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("rank", &self.rank())?;
        state.serialize_field("category", &self.category)?;
        state.end()
    }
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} #{}", self.category, self.rank())
    }
}
