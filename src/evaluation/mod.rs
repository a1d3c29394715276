//! Perfect-hash hand evaluation.
//!
//! The rank table is a state machine over card ids: start at [`START`], fold
//! each card with `state = table[state + card]`, and after seven cards the
//! state is the hand's value. The lazy [`Evaluator`] defines what the values
//! mean and is used to build the table.
mod category;
mod classes;
mod evaluation;
mod evaluator;
mod hand_id;
mod kicks;
mod lookup;
mod partial;
mod ranking;
mod strength;
mod table;

pub use category::*;
pub use classes::*;
pub use evaluation::*;
pub use evaluator::*;
pub use hand_id::*;
pub use kicks::*;
pub use lookup::*;
pub use partial::*;
pub use ranking::*;
pub use strength::*;
pub use table::*;
