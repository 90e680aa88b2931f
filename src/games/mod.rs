//! Reference game implementations.
//!
//! These are the engines the history tree is checked against: their
//! history counts and counterfactual reach probabilities are known
//! exactly. Each one is a plain value type whose state is its move list.

mod kuhn;
mod leduc;
mod liars;

pub use kuhn::*;
pub use leduc::*;
pub use liars::*;
