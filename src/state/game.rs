use super::Turn;
use crate::Action;
use crate::HISTORY_SEPARATOR;
use crate::Player;
use crate::Probability;

/// An immutable snapshot of a game in progress.
///
/// This is the full surface the history engine consumes from a game
/// implementation. Everything else about the rules stays opaque.
///
/// # Contract
///
/// - `apply` is pure: it returns a new state and never mutates `self`.
/// - `legal_actions` is stable in order; that order defines child order.
/// - `history` of `self.apply(a)` is `self.history()` followed by `a`.
/// - `chance_outcomes` covers every legal action at chance states.
///
/// Breaking any of these is a contract violation that the tree and the
/// reach computation surface as fatal errors.
pub trait GameState: Clone + Send + Sync + std::fmt::Debug {
    /// Identifier used in diagnostics.
    fn name(&self) -> &'static str;
    /// Number of decision-making seats.
    fn num_players(&self) -> usize;
    /// Who acts here: a player, chance, or nobody.
    fn turn(&self) -> Turn;
    /// Ordered moves available at this state (empty at terminals).
    fn legal_actions(&self) -> Vec<Action>;
    /// The state reached by taking `action`.
    fn apply(&self, action: Action) -> Self;
    /// Full move sequence from the initial state, chance outcomes included.
    fn history(&self) -> Vec<Action>;
    /// What `player` can observe about this history.
    fn information_state_string(&self, player: Player) -> String;
    /// Outcome distribution at a chance state (empty elsewhere).
    fn chance_outcomes(&self) -> Vec<(Action, Probability)>;

    fn is_terminal(&self) -> bool {
        self.turn().is_terminal()
    }
    fn is_chance(&self) -> bool {
        self.turn().is_chance()
    }
    /// Canonical serialization of the move sequence, e.g. `"0, 1, 0, 1"`.
    fn history_string(&self) -> String {
        self.history()
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<_>>()
            .join(HISTORY_SEPARATOR)
    }
    /// Information state of the acting player, if a player is to move.
    fn current_information_state_string(&self) -> Option<String> {
        self.turn()
            .player()
            .map(|player| self.information_state_string(player))
    }
    /// Probability of a specific chance outcome.
    fn chance_outcome_probability(&self, action: Action) -> Option<Probability> {
        self.chance_outcomes()
            .into_iter()
            .find(|(outcome, _)| *outcome == action)
            .map(|(_, p)| p)
    }
}
