//! Explicit weighted digraph world.
//!
//! States are names; each edge carries a label (its action), a target and a
//! cost. Successors of a state come out in edge insertion order, so a test
//! controls exactly what the stack and FIFO frontiers see.

use std::collections::{BTreeMap, BTreeSet};

use wayfind_search::{Cost, SearchProblem, Successor};

use crate::contract::HarnessWorld;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Edge {
    label: String,
    to: String,
    cost: Cost,
}

/// A graph world built edge by edge.
///
/// ```
/// use wayfind_harness::worlds::graph_world::GraphWorld;
///
/// let world = GraphWorld::new("S")
///     .edge("S", "S->G", "G", 3)
///     .goal("G")
///     .heuristic("S", 3);
/// assert_eq!(world.state_names().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphWorld {
    id: String,
    start: String,
    edges: BTreeMap<String, Vec<Edge>>,
    goals: BTreeSet<String>,
    estimates: BTreeMap<String, Cost>,
}

impl GraphWorld {
    #[must_use]
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            id: "graph_world".to_owned(),
            start: start.into(),
            edges: BTreeMap::new(),
            goals: BTreeSet::new(),
            estimates: BTreeMap::new(),
        }
    }

    /// Replace the default `"graph_world"` identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Add an edge `from -> to` labelled `label`.
    #[must_use]
    pub fn edge(
        mut self,
        from: impl Into<String>,
        label: impl Into<String>,
        to: impl Into<String>,
        cost: Cost,
    ) -> Self {
        self.edges.entry(from.into()).or_default().push(Edge {
            label: label.into(),
            to: to.into(),
            cost,
        });
        self
    }

    /// Add an edge labelled with its target's name.
    #[must_use]
    pub fn arc(self, from: impl Into<String>, to: impl Into<String>, cost: Cost) -> Self {
        let to = to.into();
        self.edge(from, to.clone(), to, cost)
    }

    #[must_use]
    pub fn goal(mut self, state: impl Into<String>) -> Self {
        self.goals.insert(state.into());
        self
    }

    /// Set the heuristic value of `state` (unlisted states estimate 0).
    #[must_use]
    pub fn heuristic(mut self, state: impl Into<String>, h: Cost) -> Self {
        self.estimates.insert(state.into(), h);
        self
    }

    /// Every state named by the start, an edge, a goal or the estimate table.
    #[must_use]
    pub fn state_names(&self) -> BTreeSet<&str> {
        let mut names = BTreeSet::from([self.start.as_str()]);
        for (from, edges) in &self.edges {
            names.insert(from.as_str());
            names.extend(edges.iter().map(|e| e.to.as_str()));
        }
        names.extend(self.goals.iter().map(String::as_str));
        names.extend(self.estimates.keys().map(String::as_str));
        names
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }
}

impl SearchProblem for GraphWorld {
    type State = String;
    type Action = String;

    fn start(&self) -> String {
        self.start.clone()
    }

    fn is_goal(&self, state: &String) -> bool {
        self.goals.contains(state)
    }

    fn successors(&self, state: &String) -> Vec<Successor<String, String>> {
        self.edges.get(state).map_or_else(Vec::new, |edges| {
            edges
                .iter()
                .map(|e| Successor::new(e.to.clone(), e.label.clone(), e.cost))
                .collect()
        })
    }
}

impl HarnessWorld for GraphWorld {
    fn world_id(&self) -> &str {
        &self.id
    }

    fn estimate(&self, state: &String) -> Cost {
        self.estimates.get(state).copied().unwrap_or(0)
    }

    fn action_label(&self, action: &String) -> String {
        action.clone()
    }
}
