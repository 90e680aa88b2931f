use crate::*;

const CARDS: usize = 3;
const PLAYERS: usize = 2;

/// Check, or fold when facing a bet.
pub const PASS: Action = 0;
/// Bet, or call when facing a bet.
pub const BET: Action = 1;

/// Two-player Kuhn poker over a three-card deck.
///
/// Chance deals one card to each player (actions are card ranks 0..3),
/// then players alternate [`PASS`] and [`BET`] starting with player 0.
/// The hand ends after pass-pass, bet-anything, or pass-bet-anything.
///
/// A player's information state is their card followed by the public
/// betting line, e.g. `"2pb"`. Before their card is dealt it is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KuhnPoker {
    history: Vec<Action>,
}

impl KuhnPoker {
    fn dealt(&self) -> &[Action] {
        &self.history[..self.history.len().min(PLAYERS)]
    }
    fn bets(&self) -> &[Action] {
        &self.history[self.history.len().min(PLAYERS)..]
    }
    fn is_over(&self) -> bool {
        matches!(self.bets(), [PASS, PASS] | [BET, _] | [PASS, BET, _])
    }
    /// The card dealt to `player`, if any.
    pub fn card(&self, player: Player) -> Option<Action> {
        self.dealt().get(player).copied()
    }

    /// The alpha-parameterized family of Nash equilibria.
    ///
    /// Player 0 bets a Jack with probability alpha, a King with 3·alpha,
    /// and calls with a Queen at 1/3 + alpha. Player 1's strategy is fixed.
    /// Valid for 0 ≤ alpha ≤ 1/3.
    pub fn optimal(alpha: Probability) -> anyhow::Result<TabularPolicy> {
        if !(0.0..=1.0 / 3.0).contains(&alpha) {
            anyhow::bail!("kuhn equilibrium alpha must lie in [0, 1/3], got {}", alpha);
        }
        let mut policy = TabularPolicy::default();
        // player 0
        policy.insert("0", vec![(PASS, 1. - alpha), (BET, alpha)]);
        policy.insert("0pb", vec![(PASS, 1.), (BET, 0.)]);
        policy.insert("1", vec![(PASS, 1.), (BET, 0.)]);
        policy.insert("1pb", vec![(PASS, 2. / 3. - alpha), (BET, 1. / 3. + alpha)]);
        policy.insert("2", vec![(PASS, 1. - 3. * alpha), (BET, 3. * alpha)]);
        policy.insert("2pb", vec![(PASS, 0.), (BET, 1.)]);
        // player 1
        policy.insert("0p", vec![(PASS, 2. / 3.), (BET, 1. / 3.)]);
        policy.insert("0b", vec![(PASS, 1.), (BET, 0.)]);
        policy.insert("1p", vec![(PASS, 1.), (BET, 0.)]);
        policy.insert("1b", vec![(PASS, 2. / 3.), (BET, 1. / 3.)]);
        policy.insert("2p", vec![(PASS, 0.), (BET, 1.)]);
        policy.insert("2b", vec![(PASS, 0.), (BET, 1.)]);
        Ok(policy)
    }
}

impl GameState for KuhnPoker {
    fn name(&self) -> &'static str {
        "kuhn_poker"
    }
    fn num_players(&self) -> usize {
        PLAYERS
    }
    fn turn(&self) -> Turn {
        if self.dealt().len() < PLAYERS {
            Turn::Chance
        } else if self.is_over() {
            Turn::Terminal
        } else {
            Turn::Choice(self.bets().len() % PLAYERS)
        }
    }
    fn legal_actions(&self) -> Vec<Action> {
        match self.turn() {
            Turn::Chance => (0..CARDS)
                .filter(|card| !self.dealt().contains(card))
                .collect(),
            Turn::Choice(_) => vec![PASS, BET],
            Turn::Terminal => Vec::new(),
        }
    }
    fn apply(&self, action: Action) -> Self {
        debug_assert!(self.legal_actions().contains(&action));
        let mut history = self.history.clone();
        history.push(action);
        Self { history }
    }
    fn history(&self) -> Vec<Action> {
        self.history.clone()
    }
    fn information_state_string(&self, player: Player) -> String {
        let card = self.card(player).map(|c| c.to_string()).unwrap_or_default();
        let line = self
            .bets()
            .iter()
            .map(|bet| if *bet == BET { 'b' } else { 'p' })
            .collect::<String>();
        format!("{}{}", card, line)
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
