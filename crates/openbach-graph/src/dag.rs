//! Directed dependency graph over one scenario's function nodes
//!
//! Wait edges point from the predecessor to the dependent node, so a
//! topological order of the graph is an executable schedule.

use crate::error::GraphError;
use openbach_scenario::{FunctionId, Scenario};
use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use petgraph::Direction;

/// Which wait collection produced an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// Dependent runs once the predecessor has started
    Launched,
    /// Dependent runs once the predecessor has completed
    Finished,
}

/// Dependency graph extracted from a built scenario
#[derive(Debug)]
pub struct DependencyGraph {
    inner: DiGraphMap<FunctionId, EdgeKind>,
}

impl DependencyGraph {
    /// Build the graph, rejecting structurally malformed scenarios
    ///
    /// A node listed in both wait collections of the same dependent keeps
    /// the stronger `Finished` edge.
    pub fn from_scenario(scenario: &Scenario) -> Result<Self, GraphError> {
        let mut graph = DiGraphMap::new();

        for function in scenario.functions() {
            if graph.contains_node(function.id()) {
                return Err(GraphError::DuplicateId(function.id()));
            }
            graph.add_node(function.id());
        }

        for function in scenario.functions() {
            for &dep in &function.wait.launched {
                Self::add_edge(&mut graph, dep, function.id(), EdgeKind::Launched)?;
            }
            for &dep in &function.wait.finished {
                Self::add_edge(&mut graph, dep, function.id(), EdgeKind::Finished)?;
            }
        }

        Ok(Self { inner: graph })
    }

    fn add_edge(
        graph: &mut DiGraphMap<FunctionId, EdgeKind>,
        predecessor: FunctionId,
        dependent: FunctionId,
        kind: EdgeKind,
    ) -> Result<(), GraphError> {
        if predecessor == dependent {
            return Err(GraphError::SelfWait(dependent));
        }
        // DiGraphMap::add_edge would silently create the missing endpoint
        if !graph.contains_node(predecessor) {
            return Err(GraphError::DanglingReference {
                from: dependent,
                to: predecessor,
            });
        }
        graph.add_edge(predecessor, dependent, kind);
        Ok(())
    }

    /// Number of function nodes
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Number of wait edges
    #[inline]
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Edge from `predecessor` to `dependent`, if declared
    #[must_use]
    pub fn edge(&self, predecessor: FunctionId, dependent: FunctionId) -> Option<EdgeKind> {
        self.inner.edge_weight(predecessor, dependent).copied()
    }

    /// One executable schedule honoring every wait edge
    pub fn topological_order(&self) -> Result<Vec<FunctionId>, GraphError> {
        toposort(&self.inner, None).map_err(|cycle| GraphError::CycleDetected(cycle.node_id()))
    }

    /// Nodes with no predecessors, schedulable immediately
    #[must_use]
    pub fn entry_nodes(&self) -> Vec<FunctionId> {
        self.inner
            .nodes()
            .filter(|&node| {
                self.inner
                    .neighbors_directed(node, Direction::Incoming)
                    .next()
                    .is_none()
            })
            .collect()
    }

    /// Nodes nothing waits on, the scenario's loose ends
    #[must_use]
    pub fn exit_nodes(&self) -> Vec<FunctionId> {
        self.inner
            .nodes()
            .filter(|&node| {
                self.inner
                    .neighbors_directed(node, Direction::Outgoing)
                    .next()
                    .is_none()
            })
            .collect()
    }

    /// Direct predecessors of one node
    #[must_use]
    pub fn predecessors(&self, id: FunctionId) -> Vec<FunctionId> {
        self.inner
            .neighbors_directed(id, Direction::Incoming)
            .collect()
    }
}
