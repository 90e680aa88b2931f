use crate::*;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;
use std::collections::HashMap;
use std::collections::HashSet;

/// Every reachable history of a game, viewed from one designated player.
///
/// Internally an arena (`petgraph::graph::DiGraph`) of [`HistoryNode`]s with
/// edges labeled by the action taken, plus a flat index from history string
/// to arena slot. Parents own their children structurally; nothing is
/// reference counted, and dropping the tree drops every node.
///
/// # Construction
///
/// [`HistoryTree::new`] expands the whole game eagerly with an explicit
/// stack, so very deep games cannot exhaust the call stack. The tree is
/// only handed back once expansion has finished; any contract violation
/// by the game engine aborts construction with an error instead.
///
/// # Index Order
///
/// The root sits at index 0 and every child is registered after its
/// parent, so ascending index order is a valid top-down traversal.
#[derive(Debug)]
pub struct HistoryTree<S>
where
    S: GameState,
{
    player: Player,
    graph: DiGraph<HistoryNode<S>, Action>,
    index: HashMap<String, NodeIndex>,
}

impl<S> HistoryTree<S>
where
    S: GameState,
{
    /// Enumerate every history reachable from `root`.
    pub fn new(root: S, player: Player) -> anyhow::Result<Self> {
        let start = std::time::Instant::now();
        let game = root.name();
        log::debug!("expanding {} history tree for P{}", game, player);
        let mut tree = Self {
            player,
            graph: DiGraph::default(),
            index: HashMap::default(),
        };
        let seed = tree.register(HistoryNode::new(player, root))?;
        let mut todo = vec![seed];
        while let Some(head) = todo.pop() {
            for (action, child) in tree.branches(head)? {
                let tail = tree.register(child)?;
                tree.graph.add_edge(head, tail, action);
                todo.push(tail);
            }
        }
        log::debug!(
            "expanded {} history tree for P{}: {} histories in {:.2?}",
            game,
            player,
            tree.len(),
            start.elapsed()
        );
        Ok(tree)
    }

    /// The player whose information states key decision nodes.
    pub fn player(&self) -> Player {
        self.player
    }
    /// Total number of histories, terminals included.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }
    pub fn num_histories(&self) -> usize {
        self.len()
    }
    /// Always false for a constructed tree; the root is always present.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
    pub fn root(&self) -> Node<'_, S> {
        self.at(NodeIndex::new(0))
    }
    pub fn at(&self, index: NodeIndex) -> Node<'_, S> {
        Node::from(index, &self.graph)
    }
    /// Exact lookup by history string. A miss is not an error.
    pub fn get(&self, history: &str) -> Option<Node<'_, S>> {
        self.index.get(history).map(|index| self.at(*index))
    }
    /// Every registered history key, in arena order.
    pub fn histories(&self) -> impl Iterator<Item = &str> + '_ {
        self.graph.node_weights().map(|node| node.history())
    }
    /// Every node, in arena order (parents before children).
    pub fn all(&self) -> impl Iterator<Item = Node<'_, S>> + '_ {
        self.graph.node_indices().map(|index| self.at(index))
    }

    /// add a node to the arena and the history index, once
    fn register(&mut self, node: HistoryNode<S>) -> anyhow::Result<NodeIndex> {
        if self.index.contains_key(node.history()) {
            anyhow::bail!(
                "{}: history collision at {:?}",
                node.state().name(),
                node.history()
            );
        }
        let key = node.history().to_string();
        let index = self.graph.add_node(node);
        self.index.insert(key, index);
        Ok(index)
    }

    /// materialize every child of an unexpanded node, checking
    /// the engine's legal actions and move sequences as we go
    fn branches(&self, head: NodeIndex) -> anyhow::Result<Vec<(Action, HistoryNode<S>)>> {
        let parent = &self.graph[head];
        let game = parent.state().name();
        if parent.is_terminal() {
            return Ok(Vec::new());
        }
        if parent.actions().is_empty() {
            anyhow::bail!(
                "{}: non-terminal history {:?} has no legal actions",
                game,
                parent.history()
            );
        }
        let mut seen = HashSet::with_capacity(parent.actions().len());
        if let Some(action) = parent.actions().iter().find(|a| !seen.insert(**a)) {
            anyhow::bail!(
                "{}: history {:?} lists legal action {} twice",
                game,
                parent.history(),
                action
            );
        }
        let prefix = parent.state().history();
        parent
            .actions()
            .iter()
            .copied()
            .map(|action| -> anyhow::Result<(Action, HistoryNode<S>)> {
                let state = parent.state().apply(action);
                let moves = state.history();
                let consistent = moves
                    .split_last()
                    .is_some_and(|(last, rest)| *last == action && rest == prefix.as_slice());
                if !consistent {
                    anyhow::bail!(
                        "{}: taking {} from {:?} produced inconsistent history {:?}",
                        game,
                        action,
                        parent.history(),
                        state.history_string()
                    );
                }
                Ok((action, HistoryNode::new(self.player, state)))
            })
            .collect()
    }

    /// display the Tree in a human-readable format
    /// be careful because it's really big and recursive
    fn show(&self, f: &mut std::fmt::Formatter, node: Node<'_, S>, prefix: &str) -> std::fmt::Result {
        if node.index() == NodeIndex::new(0) {
            writeln!(f, "ROOT   {:?}", node.info())?;
        }
        let children = node.children();
        let n = children.len();
        for (i, (action, child)) in children.into_iter().enumerate() {
            let last = i == n - 1;
            let stem = if last { "└" } else { "├" };
            let gaps = if last { "    " } else { "│   " };
            writeln!(f, "{}{}──{} → {:?}", prefix, stem, action, child.info())?;
            self.show(f, child, &format!("{}{}", prefix, gaps))?;
        }
        Ok(())
    }
}

impl<S> std::fmt::Display for HistoryTree<S>
where
    S: GameState,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.show(f, self.root(), "")
    }
}
