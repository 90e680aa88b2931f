use crate::*;

/// Which nodes take part in an information-set partition.
///
/// Every admitted node is keyed by its stored info key, so the variants
/// differ only in membership.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Grouping {
    /// Decision nodes of the designated player only.
    #[default]
    Responder,
    /// Every non-terminal node: own decisions, other players' decisions
    /// under their own view, and chance nodes under [`CHANCE_INFOSTATE`].
    Acting,
    /// As [`Grouping::Acting`], plus terminals under [`TERMINAL_INFOSTATE`].
    Everything,
}

impl Grouping {
    pub fn admits<S>(&self, node: &Node<'_, S>, player: Player) -> bool
    where
        S: GameState,
    {
        match self {
            Self::Responder => node.turn() == Turn::Choice(player),
            Self::Acting => node.kind() != StateType::Terminal,
            Self::Everything => true,
        }
    }
}

impl std::fmt::Display for Grouping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Responder => write!(f, "responder"),
            Self::Acting => write!(f, "acting"),
            Self::Everything => write!(f, "everything"),
        }
    }
}
