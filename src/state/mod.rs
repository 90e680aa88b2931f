//! Game-engine capability interface.
//!
//! The history engine never inspects game rules directly. Everything it
//! needs (whose turn, which moves, what each player sees) flows through
//! [`GameState`], and nodes are classified once via [`StateType`].

mod game;
mod kind;
mod turn;

pub use game::*;
pub use kind::*;
pub use turn::*;
