//! Shared fixtures, built once per test binary.
use crate::combinations::CombinationIndex;
use crate::evaluation::HandEvaluator;
use crate::evaluation::HandRanks;
use std::sync::Arc;
use std::sync::OnceLock;

static EVALUATOR: OnceLock<Arc<HandEvaluator>> = OnceLock::new();
static COMBINATIONS: OnceLock<Arc<CombinationIndex>> = OnceLock::new();

/// Evaluator over a freshly generated table.
pub fn evaluator() -> &'static Arc<HandEvaluator> {
    EVALUATOR.get_or_init(|| Arc::new(HandEvaluator::new(HandRanks::generate())))
}

pub fn ranks() -> &'static HandRanks {
    evaluator().ranks()
}

/// Every combination block the calculator can ask for.
pub fn combinations() -> &'static Arc<CombinationIndex> {
    COMBINATIONS.get_or_init(|| Arc::new(CombinationIndex::new()))
}
