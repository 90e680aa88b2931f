use super::Turn;

/// Classification of a history node, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateType {
    Decision,
    Chance,
    Terminal,
}

impl From<Turn> for StateType {
    fn from(turn: Turn) -> Self {
        match turn {
            Turn::Choice(_) => Self::Decision,
            Turn::Chance => Self::Chance,
            Turn::Terminal => Self::Terminal,
        }
    }
}

impl std::fmt::Display for StateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decision => write!(f, "decision"),
            Self::Chance => write!(f, "chance"),
            Self::Terminal => write!(f, "terminal"),
        }
    }
}
