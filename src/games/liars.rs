use crate::*;

const PLAYERS: usize = 2;
const DICE: usize = 1;
const FACES: usize = 6;
const BIDS: usize = PLAYERS * DICE * FACES;

/// Challenge the previous bid.
pub const LIAR: Action = BIDS;

/// Two-player Liar's Dice with one six-sided die per player.
///
/// Chance rolls each player's die (actions 0..6 are faces 1..=6). Players
/// then alternate strictly increasing bids, starting with player 0. Bid
/// `b` claims at least `b / 6 + 1` dice showing face `b % 6 + 1`. Once a
/// bid is on the table the next player may call [`LIAR`] instead, which
/// ends the game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LiarsDice {
    history: Vec<Action>,
    dice: Vec<Action>,
    bids: Vec<Action>,
    called: bool,
}

impl LiarsDice {
    /// (quantity, face) claimed by a bid, both 1-based.
    pub fn decode(bid: Action) -> (usize, usize) {
        (bid / FACES + 1, bid % FACES + 1)
    }
    /// The face rolled by `player`, 1-based.
    pub fn die(&self, player: Player) -> Option<usize> {
        self.dice.get(player).map(|d| d + 1)
    }
}

impl GameState for LiarsDice {
    fn name(&self) -> &'static str {
        "liars_dice"
    }
    fn num_players(&self) -> usize {
        PLAYERS
    }
    fn turn(&self) -> Turn {
        if self.dice.len() < PLAYERS * DICE {
            Turn::Chance
        } else if self.called {
            Turn::Terminal
        } else {
            Turn::Choice(self.bids.len() % PLAYERS)
        }
    }
    fn legal_actions(&self) -> Vec<Action> {
        match self.turn() {
            Turn::Chance => (0..FACES).collect(),
            Turn::Choice(_) => match self.bids.last() {
                None => (0..BIDS).collect(),
                Some(last) => (last + 1..BIDS).chain(std::iter::once(LIAR)).collect(),
            },
            Turn::Terminal => Vec::new(),
        }
    }
    fn apply(&self, action: Action) -> Self {
        debug_assert!(self.legal_actions().contains(&action));
        let mut next = self.clone();
        next.history.push(action);
        match self.turn() {
            Turn::Chance => next.dice.push(action),
            Turn::Choice(_) if action == LIAR => next.called = true,
            Turn::Choice(_) => next.bids.push(action),
            Turn::Terminal => unreachable!("no actions at terminal states"),
        }
        next
    }
    fn history(&self) -> Vec<Action> {
        self.history.clone()
    }
    fn information_state_string(&self, player: Player) -> String {
        let die = self
            .die(player)
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".into());
        let bids = self
            .bids
            .iter()
            .map(|b| Self::decode(*b))
            .map(|(q, f)| format!(" {}-{}", q, f))
            .collect::<String>();
        let call = if self.called { " Liar" } else { "" };
        format!("{}{}{}", die, bids, call)
    }
    fn chance_outcomes(&self) -> Vec<(Action, Probability)> {
        match self.turn() {
            Turn::Chance => {
                let p = 1. / FACES as Probability;
                (0..FACES).map(|face| (face, p)).collect()
            }
            _ => Vec::new(),
        }
    }
}
