use crate::*;

/// One history of the game, as seen from a designated player.
///
/// Classification, history key, info key and legal actions are all read
/// once from the wrapped state and cached. Children are not stored here;
/// inside a [`HistoryTree`] they live in the arena as outgoing edges.
///
/// # Info Key
///
/// - Decision node of the designated player: the designated player's view.
/// - Decision node of anyone else: the acting player's view.
/// - Chance node: [`CHANCE_INFOSTATE`].
/// - Terminal node: [`TERMINAL_INFOSTATE`].
#[derive(Debug, Clone)]
pub struct HistoryNode<S>
where
    S: GameState,
{
    state: S,
    history: String,
    info: String,
    turn: Turn,
    kind: StateType,
    actions: Vec<Action>,
}

impl<S> HistoryNode<S>
where
    S: GameState,
{
    /// Wrap `state` as seen by the designated `player`.
    pub fn new(player: Player, state: S) -> Self {
        let turn = state.turn();
        let kind = StateType::from(turn);
        let history = state.history_string();
        let info = match turn {
            Turn::Chance => CHANCE_INFOSTATE.to_string(),
            Turn::Terminal => TERMINAL_INFOSTATE.to_string(),
            Turn::Choice(actor) if actor != player => state.information_state_string(actor),
            Turn::Choice(_) => state.information_state_string(player),
        };
        let actions = match kind {
            StateType::Terminal => Vec::new(),
            _ => state.legal_actions(),
        };
        Self {
            state,
            history,
            info,
            turn,
            kind,
            actions,
        }
    }
    /// The wrapped game state.
    pub fn state(&self) -> &S {
        &self.state
    }
    /// Canonical history string.
    pub fn history(&self) -> &str {
        &self.history
    }
    /// Info key, see the type-level docs.
    pub fn info(&self) -> &str {
        &self.info
    }
    /// Who acts here.
    pub fn turn(&self) -> Turn {
        self.turn
    }
    /// Chance, decision or terminal.
    pub fn kind(&self) -> StateType {
        self.kind
    }
    /// Legal actions memoized at construction, in engine order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
    /// Any player's view of this history, regardless of who acts.
    pub fn information_state(&self, player: Player) -> String {
        self.state.information_state_string(player)
    }
    /// No actions remain.
    pub fn is_terminal(&self) -> bool {
        self.kind == StateType::Terminal
    }
    /// Chance picks the next action.
    pub fn is_chance(&self) -> bool {
        self.kind == StateType::Chance
    }
}

impl<S> std::fmt::Display for HistoryNode<S>
where
    S: GameState,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {:?} ({})", self.history, self.info, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::KuhnPoker;

    fn deal(cards: &[Action]) -> KuhnPoker {
        cards
            .iter()
            .fold(KuhnPoker::default(), |state, card| state.apply(*card))
    }

    #[test]
    fn chance_root() {
        let node = HistoryNode::new(0, KuhnPoker::default());
        assert_eq!(node.kind(), StateType::Chance);
        assert_eq!(node.info(), CHANCE_INFOSTATE);
        assert!(node.is_chance() && !node.is_terminal());
        assert_eq!(node.history(), "");
        assert_eq!(node.actions(), &[0, 1, 2]);
    }

    #[test]
    fn designated_decision_uses_designated_view() {
        let node = HistoryNode::new(0, deal(&[2, 0]));
        assert_eq!(node.kind(), StateType::Decision);
        assert_eq!(node.turn(), Turn::Choice(0));
        assert_eq!(node.info(), "2");
        assert_eq!(node.history(), "2, 0");
    }

    #[test]
    fn opponent_decision_uses_acting_view() {
        let node = HistoryNode::new(0, deal(&[2, 0, 1]));
        assert_eq!(node.turn(), Turn::Choice(1));
        assert_eq!(node.info(), "0b");
        assert_eq!(node.information_state(0), "2b");
    }

    #[test]
    fn terminal_has_sentinel_and_no_actions() {
        let node = HistoryNode::new(1, deal(&[1, 2, 0, 0]));
        assert_eq!(node.kind(), StateType::Terminal);
        assert_eq!(node.info(), TERMINAL_INFOSTATE);
        assert!(node.actions().is_empty());
        assert_ne!(CHANCE_INFOSTATE, TERMINAL_INFOSTATE);
    }
}
