//! Counterfactual reach and information-set grouping.
//!
//! - [`successors`]: per-transition reach multipliers at a single state
//! - [`Counterfactual`]: reach probability of every history under a policy
//! - [`Grouping`]: which nodes an information-set partition admits
//! - [`InfoSet`]: histories sharing one information state, with their reach

mod grouping;
mod infoset;
mod reach;

pub use grouping::*;
pub use infoset::*;
pub use reach::*;
