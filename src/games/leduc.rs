use crate::*;

const DECK: usize = 6;
const SUITS: usize = 2;
const PLAYERS: usize = 2;
const ROUNDS: usize = 2;
const MAX_RAISES: usize = 2;

pub const FOLD: Action = 0;
pub const CALL: Action = 1;
pub const RAISE: Action = 2;

/// Two-player Leduc hold'em.
///
/// A six-card deck holds two suits of three ranks (cards `2r` and `2r + 1`
/// share rank `r`). Each player is dealt one private card, a betting
/// round follows, one public card is dealt, and a second betting round
/// closes the hand. Player 0 opens both rounds.
///
/// Within a round: [`CALL`] checks or calls, [`RAISE`] is allowed while
/// fewer than two raises have been made, and [`FOLD`] only when facing
/// a raise. A round closes on a call that is not the opening action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LeducPoker {
    history: Vec<Action>,
    private: Vec<Action>,
    public: Option<Action>,
    rounds: [Vec<Action>; ROUNDS],
    round: usize,
    folded: bool,
}

impl LeducPoker {
    fn line(&self) -> &[Action] {
        &self.rounds[self.round]
    }
    fn raises(&self) -> usize {
        self.line().iter().filter(|a| **a == RAISE).count()
    }
    fn facing(&self) -> bool {
        self.line().last() == Some(&RAISE)
    }
    fn closed(line: &[Action]) -> bool {
        line.len() >= 2 && line.last() == Some(&CALL)
    }
    fn dealt(&self) -> impl Iterator<Item = Action> + '_ {
        self.private.iter().copied().chain(self.public)
    }
    /// Rank of a card: 0 = Jack, 1 = Queen, 2 = King.
    pub fn rank(card: Action) -> usize {
        card / SUITS
    }
    pub fn private(&self, player: Player) -> Option<Action> {
        self.private.get(player).copied()
    }
    pub fn public(&self) -> Option<Action> {
        self.public
    }
}

impl GameState for LeducPoker {
    fn name(&self) -> &'static str {
        "leduc_poker"
    }
    fn num_players(&self) -> usize {
        PLAYERS
    }
    fn turn(&self) -> Turn {
        if self.folded {
            Turn::Terminal
        } else if self.private.len() < PLAYERS {
            Turn::Chance
        } else if self.round > 0 && self.public.is_none() {
            Turn::Chance
        } else if self.round == ROUNDS - 1 && Self::closed(self.line()) {
            Turn::Terminal
        } else {
            Turn::Choice(self.line().len() % PLAYERS)
        }
    }
    fn legal_actions(&self) -> Vec<Action> {
        match self.turn() {
            Turn::Chance => {
                let dealt = self.dealt().collect::<Vec<_>>();
                (0..DECK).filter(|card| !dealt.contains(card)).collect()
            }
            Turn::Choice(_) => {
                let mut actions = Vec::with_capacity(3);
                if self.facing() {
                    actions.push(FOLD);
                }
                actions.push(CALL);
                if self.raises() < MAX_RAISES {
                    actions.push(RAISE);
                }
                actions
            }
            Turn::Terminal => Vec::new(),
        }
    }
    fn apply(&self, action: Action) -> Self {
        debug_assert!(self.legal_actions().contains(&action));
        let mut next = self.clone();
        next.history.push(action);
        match self.turn() {
            Turn::Chance if self.private.len() < PLAYERS => next.private.push(action),
            Turn::Chance => next.public = Some(action),
            Turn::Choice(_) => {
                next.rounds[next.round].push(action);
                if action == FOLD {
                    next.folded = true;
                } else if Self::closed(next.line()) && next.round < ROUNDS - 1 {
                    next.round += 1;
                }
            }
            Turn::Terminal => unreachable!("no actions at terminal states"),
        }
        next
    }
    fn history(&self) -> Vec<Action> {
        self.history.clone()
    }
    fn information_state_string(&self, player: Player) -> String {
        let card = |c: Option<Action>| c.map(|c| c.to_string()).unwrap_or_else(|| "-".into());
        let line = |round: &[Action]| {
            round
                .iter()
                .map(|a| match *a {
                    FOLD => 'f',
                    CALL => 'c',
                    _ => 'r',
                })
                .collect::<String>()
        };
        format!(
            "[Private: {}][Public: {}][Round1: {}][Round2: {}]",
            card(self.private(player)),
            card(self.public),
            line(&self.rounds[0]),
            line(&self.rounds[1]),
        )
    }
    fn chance_outcomes(&self) -> Vec<(Action, Probability)> {
        match self.turn() {
            Turn::Chance => {
                let cards = self.legal_actions();
                let p = 1. / cards.len() as Probability;
                cards.into_iter().map(|card| (card, p)).collect()
            }
            _ => Vec::new(),
        }
    }
}
