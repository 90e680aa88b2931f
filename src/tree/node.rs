use crate::*;
use petgraph::Direction::Incoming;
use petgraph::Direction::Outgoing;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

/// A lightweight handle to a history in a [`HistoryTree`].
///
/// Stores only an index and a reference to the underlying arena, so
/// handles are cheap to copy and hand out. Everything a handle returns
/// borrows from the tree, never from the handle itself.
///
/// # Child Order
///
/// Children come back in the order the engine reported legal actions.
/// The builder adds all outgoing edges of a node in one go, so edge
/// insertion order is action order.
pub struct Node<'tree, S>
where
    S: GameState,
{
    index: NodeIndex,
    graph: &'tree DiGraph<HistoryNode<S>, Action>,
}

impl<'tree, S> Node<'tree, S>
where
    S: GameState,
{
    /// Handle to slot `index` of an arena.
    pub fn from(index: NodeIndex, graph: &'tree DiGraph<HistoryNode<S>, Action>) -> Self {
        Self { index, graph }
    }
    /// Arena slot of this history.
    pub fn index(&self) -> NodeIndex {
        self.index
    }
    /// The stored payload for this history.
    pub fn data(&self) -> &'tree HistoryNode<S> {
        let graph = self.graph;
        &graph[self.index]
    }
    /// The game state at this history.
    pub fn state(&self) -> &'tree S {
        self.data().state()
    }
    /// Canonical history string, e.g. `"0, 1, 0"`.
    pub fn history(&self) -> &'tree str {
        self.data().history()
    }
    /// Info key under which this history is grouped.
    pub fn info(&self) -> &'tree str {
        self.data().info()
    }
    /// Who acts here.
    pub fn turn(&self) -> Turn {
        self.data().turn()
    }
    /// Chance, decision or terminal.
    pub fn kind(&self) -> StateType {
        self.data().kind()
    }
    /// Handle to another node of the same tree.
    pub fn at(&self, index: NodeIndex) -> Self {
        Self::from(index, self.graph)
    }

    // navigation

    /// Parent node (None at the root).
    pub fn parent(&self) -> Option<Self> {
        self.graph
            .neighbors_directed(self.index, Incoming)
            .next()
            .map(|index| self.at(index))
    }
    /// The action taken to reach this node from its parent.
    pub fn incoming(&self) -> Option<Action> {
        self.graph
            .edges_directed(self.index, Incoming)
            .next()
            .map(|edge| *edge.weight())
    }
    /// Parent and the action leading here, if not at the root.
    pub fn up(&self) -> Option<(Self, Action)> {
        match (self.parent(), self.incoming()) {
            (None, None) => None,
            (Some(parent), Some(action)) => Some((parent, action)),
            _ => unreachable!("tree property violation"),
        }
    }
    /// Children paired with the action reaching each, in legal-action order.
    pub fn children(&self) -> Vec<(Action, Self)> {
        let mut edges = self
            .graph
            .edges_directed(self.index, Outgoing)
            .collect::<Vec<_>>();
        edges.sort_by_key(|edge| edge.id());
        edges
            .into_iter()
            .map(|edge| (*edge.weight(), self.at(edge.target())))
            .collect()
    }
    /// Actions to each child, in legal-action order.
    pub fn child_actions(&self) -> Vec<Action> {
        self.children().into_iter().map(|(a, _)| a).collect()
    }
    /// Child reached by taking a specific action.
    pub fn child(&self, action: Action) -> Option<Self> {
        self.graph
            .edges_directed(self.index, Outgoing)
            .find(|edge| *edge.weight() == action)
            .map(|edge| self.at(edge.target()))
    }
    /// Count of direct children (no allocation).
    pub fn num_children(&self) -> usize {
        self.graph.neighbors_directed(self.index, Outgoing).count()
    }
    /// Number of actions between the root and this node.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut node = *self;
        while let Some((parent, _)) = node.up() {
            node = parent;
            depth += 1;
        }
        depth
    }
}

impl<S> Clone for Node<'_, S>
where
    S: GameState,
{
    fn clone(&self) -> Self {
        *self
    }
}
impl<S> Copy for Node<'_, S> where S: GameState {}

/// Two handles are equal when they point at the same slot of the same arena.
impl<S> PartialEq for Node<'_, S>
where
    S: GameState,
{
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && std::ptr::eq(self.graph, other.graph)
    }
}
impl<S> Eq for Node<'_, S> where S: GameState {}

impl<S> std::fmt::Debug for Node<'_, S>
where
    S: GameState,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}/{})",
            self.data(),
            self.index.index(),
            self.graph.node_count()
        )
    }
}

impl<S> std::fmt::Display for Node<'_, S>
where
    S: GameState,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.data())
    }
}
