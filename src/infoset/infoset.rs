use crate::*;
use std::collections::BTreeMap;

/// Information sets keyed by information state, in sorted key order.
pub type InfoSets<'tree, S> = BTreeMap<String, InfoSet<'tree, S>>;

/// A collection of histories sharing the same information state.
///
/// Members keep the order in which they were visited (ascending arena
/// index, so parents and earlier-listed actions first), each paired with
/// its counterfactual reach probability.
///
/// # Invariants
///
/// 1. Every member's stored info key equals [`InfoSet::info`]
/// 2. Built by [`Counterfactual::partition`], never empty
#[derive(Debug, Clone)]
pub struct InfoSet<'tree, S>
where
    S: GameState,
{
    info: String,
    span: Vec<(Node<'tree, S>, Probability)>,
}

impl<'tree, S> InfoSet<'tree, S>
where
    S: GameState,
{
    pub fn from(info: impl Into<String>) -> Self {
        Self {
            info: info.into(),
            span: Vec::new(),
        }
    }
    pub fn push(&mut self, node: Node<'tree, S>, reach: Probability) {
        debug_assert_eq!(node.info(), self.info);
        self.span.push((node, reach));
    }
    /// The shared information state.
    pub fn info(&self) -> &str {
        &self.info
    }
    pub fn span(&self) -> &[(Node<'tree, S>, Probability)] {
        &self.span
    }
    /// First member (representative for action lookup).
    pub fn head(&self) -> Option<Node<'tree, S>> {
        self.span.first().map(|(node, _)| *node)
    }
    pub fn len(&self) -> usize {
        self.span.len()
    }
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
    /// Total counterfactual reach of the set.
    pub fn reach(&self) -> Probability {
        self.span.iter().map(|(_, p)| p).sum()
    }
}

impl<S> std::fmt::Display for InfoSet<'_, S>
where
    S: GameState,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:?} ({} histories, reach {:.9})", self.info, self.len(), self.reach())?;
        for (node, reach) in self.span.iter() {
            writeln!(f, "  {:<24} {:.9}", format!("[{}]", node.history()), reach)?;
        }
        Ok(())
    }
}

/// Group the designated player's decision histories by information state,
/// each paired with its counterfactual reach under `policy`.
pub fn infosets<'tree, S, P>(
    tree: &'tree HistoryTree<S>,
    player: Player,
    policy: &P,
) -> anyhow::Result<InfoSets<'tree, S>>
where
    S: GameState,
    P: Policy + ?Sized,
{
    Ok(Counterfactual::new(tree, player, policy)?.partition(Grouping::Responder))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::KuhnPoker;
    use crate::games::LeducPoker;

    macro_rules! partitions {
        ($name:ident, $game:ty) => {
            paste::paste! {
                #[test]
                fn [<$name _p0_infosets>]() {
                    check(&HistoryTree::new(<$game>::default(), 0).unwrap());
                }
                #[test]
                fn [<$name _p1_infosets>]() {
                    check(&HistoryTree::new(<$game>::default(), 1).unwrap());
                }
            }
        };
    }

    /// every designated decision lands in exactly one set, under its own
    /// view, next to histories with the same legal actions
    fn check<S: GameState>(tree: &HistoryTree<S>) {
        let player = tree.player();
        let policy = TabularPolicy::uniform(tree.root().state());
        let sets = infosets(tree, player, &policy).unwrap();
        let decisions = tree
            .all()
            .filter(|node| node.turn() == Turn::Choice(player))
            .count();
        assert!(decisions > 0);
        assert_eq!(sets.values().map(|set| set.len()).sum::<usize>(), decisions);
        for (info, set) in sets.iter() {
            assert_eq!(info, set.info());
            let head = set.head().expect("non-empty");
            for (node, reach) in set.span() {
                assert_eq!(node.info(), info);
                assert_eq!(&node.state().information_state_string(player), info);
                assert_eq!(node.turn(), Turn::Choice(player));
                assert_eq!(node.child_actions(), head.child_actions());
                assert!((0.0..=1.0).contains(reach));
            }
        }
    }

    partitions!(kuhn, KuhnPoker);
    partitions!(leduc, LeducPoker);

    #[test]
    fn kuhn_sets_hold_two_histories() {
        for player in 0..2 {
            let tree = HistoryTree::new(KuhnPoker::default(), player).unwrap();
            let policy = TabularPolicy::uniform(&KuhnPoker::default());
            let sets = infosets(&tree, player, &policy).unwrap();
            assert_eq!(sets.len(), 6);
            for set in sets.values() {
                assert_eq!(set.len(), 2, "{}", set);
            }
        }
    }

    #[test]
    fn children_belong_to_someone_else() {
        let tree = HistoryTree::new(KuhnPoker::default(), 0).unwrap();
        let policy = TabularPolicy::uniform(&KuhnPoker::default());
        for set in infosets(&tree, 0, &policy).unwrap().values() {
            for (node, _) in set.span() {
                for (_, child) in node.children() {
                    if child.kind() != StateType::Decision {
                        continue;
                    }
                    let bare = HistoryNode::new(0, child.state().clone());
                    assert_ne!(child.turn(), Turn::Choice(0));
                    assert_ne!(bare.info(), set.info());
                }
            }
        }
    }

    #[test]
    fn kuhn_set_reach() {
        let tree = HistoryTree::new(KuhnPoker::default(), 1).unwrap();
        let policy = KuhnPoker::optimal(0.2).unwrap();
        let sets = infosets(&tree, 1, &policy).unwrap();
        // dealt a Queen: Jack bets 0.2, King bets 0.6
        let facing = sets.get("1b").expect("queen facing a bet");
        assert!((facing.reach() - (0.2 + 0.6) / 6.).abs() < 1e-9);
        assert!(sets.get("1pb").is_none());
    }
}
