use crate::Player;

/// Who acts at a game state.
///
/// Decision states carry the acting seat; chance and terminal states
/// are distinguished sentinels rather than magic player ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Turn {
    Choice(Player),
    Chance,
    Terminal,
}

impl Turn {
    pub fn is_chance(&self) -> bool {
        matches!(self, Self::Chance)
    }
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal)
    }
    /// The acting seat, if a player is to move.
    pub fn player(&self) -> Option<Player> {
        match self {
            Self::Choice(player) => Some(*player),
            _ => None,
        }
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Choice(player) => write!(f, "P{}", player),
            Self::Chance => write!(f, "chance"),
            Self::Terminal => write!(f, "terminal"),
        }
    }
}
