//! History enumeration.
//!
//! - [`HistoryNode`]: per-history payload: state, history key, info key
//! - [`Node`]: cheap `Copy` handle for navigating a built tree
//! - [`HistoryTree`]: arena of every reachable history, indexed by history string

mod history;
mod node;
mod tree;

pub use history::*;
pub use node::*;
pub use tree::*;
