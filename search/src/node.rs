//! Search nodes, the parent-pointer node arena, and frontier ordering keys.

use crate::problem::Cost;

/// Index of a node in its [`NodeArena`].
pub type NodeId = usize;

/// A state reached by a specific path.
///
/// Nodes are immutable once allocated. The path is not stored on the node;
/// it is recovered by walking `parent_id` links through the arena, so
/// expanding a node never copies its ancestors' actions.
#[derive(Debug, Clone)]
pub struct SearchNode<S, A> {
    /// Arena index, assigned in creation order.
    pub node_id: NodeId,
    /// Parent node (`None` for the root).
    pub parent_id: Option<NodeId>,
    /// The state this node reaches.
    pub state: S,
    /// The action that produced this node from its parent.
    pub producing_action: Option<A>,
    /// Number of actions from the root (root = 0).
    pub depth: u32,
    /// Cumulative path cost from the root.
    pub g_cost: Cost,
    /// Heuristic estimate at `state` (0 for uninformed strategies).
    pub h_cost: Cost,
}

impl<S, A> SearchNode<S, A> {
    /// `g_cost + h_cost`, saturating.
    #[must_use]
    pub fn f_cost(&self) -> Cost {
        self.g_cost.saturating_add(self.h_cost)
    }
}

/// Append-only node storage for one search invocation.
#[derive(Debug, Clone)]
pub struct NodeArena<S, A> {
    nodes: Vec<SearchNode<S, A>>,
}

impl<S, A: Clone> NodeArena<S, A> {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Allocate the root node for `state`.
    pub fn push_root(&mut self, state: S, h_cost: Cost) -> NodeId {
        let node_id = self.nodes.len();
        self.nodes.push(SearchNode {
            node_id,
            parent_id: None,
            state,
            producing_action: None,
            depth: 0,
            g_cost: 0,
            h_cost,
        });
        node_id
    }

    /// Allocate a child of `parent` reached by `action`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not allocated by this arena.
    pub fn push_child(
        &mut self,
        parent: NodeId,
        state: S,
        action: A,
        g_cost: Cost,
        h_cost: Cost,
    ) -> NodeId {
        let depth = self.nodes[parent].depth + 1;
        let node_id = self.nodes.len();
        self.nodes.push(SearchNode {
            node_id,
            parent_id: Some(parent),
            state,
            producing_action: Some(action),
            depth,
            g_cost,
            h_cost,
        });
        node_id
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&SearchNode<S, A>> {
        self.nodes.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Actions from the root to `id`, in execution order.
    #[must_use]
    pub fn path_to(&self, id: NodeId) -> Vec<A> {
        let mut actions = Vec::new();
        let mut current = self.nodes.get(id);
        while let Some(node) = current {
            if let Some(action) = &node.producing_action {
                actions.push(action.clone());
            }
            current = node.parent_id.and_then(|p| self.nodes.get(p));
        }
        actions.reverse();
        actions
    }

    /// Reconstruct the plan ending at `id`.
    #[must_use]
    pub fn plan_to(&self, id: NodeId) -> Option<Plan<A>> {
        let node = self.nodes.get(id)?;
        Some(Plan {
            actions: self.path_to(id),
            cost: node.g_cost,
        })
    }
}

impl<S, A> std::ops::Index<NodeId> for NodeArena<S, A> {
    type Output = SearchNode<S, A>;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id]
    }
}

impl<S, A: Clone> Default for NodeArena<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

/// A solution: the ordered actions from the start state to a goal state and
/// their accumulated cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan<A> {
    pub actions: Vec<A>,
    pub cost: Cost,
}

impl<A> Plan<A> {
    /// Number of actions. Zero when the start state is a goal.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// The priority-frontier ordering key: `(priority, creation_order)`.
///
/// Lower priority first; equal priorities pop oldest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub priority: Cost,
    pub creation_order: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.creation_order.cmp(&other.creation_order))
    }
}
