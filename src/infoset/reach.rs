use crate::*;

/// Reach multiplier for each legal action at `state`, in legal-action order.
///
/// - chance: the outcome's probability
/// - `player` acting: exactly 1.0
/// - anyone else acting: the policy's weight at their information state
/// - terminal: no actions
///
/// Policy distributions may be sparse; unlisted legal actions weigh zero.
/// Missing coverage, mass on illegal actions, and chance lists that skip
/// a legal outcome are all fatal.
pub fn successors<S, P>(state: &S, player: Player, policy: &P) -> anyhow::Result<Vec<(Action, Probability)>>
where
    S: GameState,
    P: Policy + ?Sized,
{
    match state.turn() {
        Turn::Terminal => Ok(Vec::new()),
        Turn::Chance => {
            let outcomes = state.chance_outcomes();
            state
                .legal_actions()
                .into_iter()
                .map(|action| {
                    outcomes
                        .iter()
                        .find(|(outcome, _)| *outcome == action)
                        .map(|(_, p)| (action, *p))
                        .ok_or_else(|| {
                            anyhow::anyhow!(
                                "{}: chance outcome {} missing at history {:?}",
                                state.name(),
                                action,
                                state.history_string()
                            )
                        })
                })
                .collect()
        }
        Turn::Choice(actor) if actor == player => Ok(state
            .legal_actions()
            .into_iter()
            .map(|action| (action, 1.))
            .collect()),
        Turn::Choice(actor) => {
            let info = state.information_state_string(actor);
            let distribution = policy.distribution(&info).ok_or_else(|| {
                anyhow::anyhow!(
                    "{}: policy has no entry for P{} information state {:?} at history {:?}",
                    state.name(),
                    actor,
                    info,
                    state.history_string()
                )
            })?;
            let actions = state.legal_actions();
            if let Some((action, p)) = distribution
                .iter()
                .find(|(a, p)| *p != 0. && !actions.contains(a))
            {
                anyhow::bail!(
                    "{}: policy gives illegal action {} weight {} at {:?}",
                    state.name(),
                    action,
                    p,
                    info
                );
            }
            Ok(actions
                .into_iter()
                .map(|action| {
                    let p = distribution
                        .iter()
                        .find(|(a, _)| *a == action)
                        .map(|(_, p)| *p)
                        .unwrap_or_default();
                    (action, p)
                })
                .collect())
        }
    }
}

/// Counterfactual reach probability of every history in a tree.
///
/// The designated player's own moves count as certain; chance and every
/// other player are weighted by their actual odds. Terminals get a reach
/// too, even though they never join an information set by default.
///
/// # Computation
///
/// One top-down pass in arena order. The root is 1.0 and each child is its
/// parent's reach times the multiplier from [`successors`]. Arena order
/// puts every parent before its children, so a single forward loop
/// suffices.
#[derive(Debug)]
pub struct Counterfactual<'tree, S>
where
    S: GameState,
{
    tree: &'tree HistoryTree<S>,
    reach: Vec<Probability>,
}

impl<'tree, S> Counterfactual<'tree, S>
where
    S: GameState,
{
    pub fn new<P>(tree: &'tree HistoryTree<S>, player: Player, policy: &P) -> anyhow::Result<Self>
    where
        P: Policy + ?Sized,
    {
        if player != tree.player() {
            anyhow::bail!(
                "{}: reach for P{} requested on a tree built for P{}",
                tree.root().state().name(),
                player,
                tree.player()
            );
        }
        let start = std::time::Instant::now();
        let mut reach = vec![0.; tree.len()];
        if let Some(root) = reach.first_mut() {
            *root = 1.;
        }
        for node in tree.all() {
            let here = reach[node.index().index()];
            let weights = successors(node.state(), player, policy)?;
            let children = node.children();
            if weights.len() != children.len() {
                anyhow::bail!(
                    "{}: {} children but {} legal actions at history {:?}",
                    node.state().name(),
                    children.len(),
                    weights.len(),
                    node.history()
                );
            }
            for ((action, child), (legal, weight)) in children.into_iter().zip(weights) {
                if action != legal {
                    anyhow::bail!(
                        "{}: child action {} does not match legal action {} at history {:?}",
                        node.state().name(),
                        action,
                        legal,
                        node.history()
                    );
                }
                reach[child.index().index()] = here * weight;
                log::trace!("{:<24} {:.9}", child.history(), here * weight);
            }
        }
        log::debug!(
            "counterfactual reach for P{} over {} histories in {:.2?}",
            player,
            tree.len(),
            start.elapsed()
        );
        Ok(Self { tree, reach })
    }

    pub fn player(&self) -> Player {
        self.tree.player()
    }
    pub fn tree(&self) -> &'tree HistoryTree<S> {
        self.tree
    }
    /// Reach of a node handed out by this tree.
    pub fn reach(&self, node: &Node<'tree, S>) -> Probability {
        self.reach[node.index().index()]
    }
    pub fn by_history(&self, history: &str) -> Option<Probability> {
        self.tree.get(history).map(|node| self.reach(&node))
    }
    /// Every node with its reach, in arena order.
    pub fn nodes(&self) -> impl Iterator<Item = (Node<'tree, S>, Probability)> + '_ {
        self.tree.all().map(|node| (node, self.reach(&node)))
    }
    /// The designated player's decision nodes with their reach.
    pub fn decisions(&self) -> impl Iterator<Item = (Node<'tree, S>, Probability)> + '_ {
        let player = self.player();
        self.nodes()
            .filter(move |(node, _)| node.turn() == Turn::Choice(player))
    }

    /// Group admitted nodes by their info key.
    pub fn partition(&self, grouping: Grouping) -> InfoSets<'tree, S> {
        let player = self.player();
        let mut sets = InfoSets::new();
        for (node, reach) in self.nodes().filter(|(node, _)| grouping.admits(node, player)) {
            sets.entry(node.info().to_string())
                .or_insert_with(|| InfoSet::from(node.info()))
                .push(node, reach);
        }
        log::debug!(
            "partitioned {} histories into {} {} information sets",
            sets.values().map(|set| set.len()).sum::<usize>(),
            sets.len(),
            grouping
        );
        sets
    }
}
