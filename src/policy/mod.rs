//! Policy query interface.
//!
//! A policy maps an information state to a distribution over the acting
//! player's actions. The history engine only ever reads policies, so the
//! trait is a pure query surface; [`TabularPolicy`] is the concrete table
//! used by tests, the CLI and serialized exchange.

mod policy;
mod tabular;

pub use policy::*;
pub use tabular::*;
