//! Node-object Markov chain.
//!
//! The arena owns every node; pathways refer to their targets by
//! [`NodeId`], so cycles (including self-pathways) need no shared ownership
//! between nodes.

use std::sync::Arc;

use rand::Rng;

use crate::error::{GraphError, Result};
use crate::graph::weighted::{select_weighted, total_weight, validate_weight, Edge};

/// Stable index of a node within its arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

// == Markov Node ==
/// A payload with an ordered list of weighted pathways to other nodes.
#[derive(Debug)]
pub struct MarkovNode<P> {
    payload: Arc<P>,
    pathways: Vec<Edge<NodeId>>,
}

impl<P> MarkovNode<P> {
    fn new(payload: Arc<P>) -> Self {
        Self {
            payload,
            pathways: Vec::new(),
        }
    }

    pub fn payload(&self) -> &Arc<P> {
        &self.payload
    }

    pub fn pathways(&self) -> &[Edge<NodeId>] {
        &self.pathways
    }

    pub fn total_weight(&self) -> f64 {
        total_weight(&self.pathways)
    }

    pub fn is_terminal(&self) -> bool {
        self.pathways.is_empty()
    }

    // == Next Node ==
    /// Returns the pathway target addressed by `t`, or `None` for a node
    /// without pathways.
    pub fn next_node(&self, t: f64) -> Option<NodeId> {
        select_weighted(&self.pathways, t).map(|edge| edge.target)
    }
}

// == Markov Arena ==
/// Owner of all nodes of a node-object Markov chain.
#[derive(Debug)]
pub struct MarkovArena<P> {
    nodes: Vec<MarkovNode<P>>,
}

impl<P> Default for MarkovArena<P> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<P> MarkovArena<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node holding `payload` and returns its id.
    pub fn add_node(&mut self, payload: P) -> NodeId {
        self.add_shared(Arc::new(payload))
    }

    /// Adds a node holding a payload that is also referenced elsewhere.
    pub fn add_shared(&mut self, payload: Arc<P>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(MarkovNode::new(payload));
        id
    }

    // == Add Pathway ==
    /// Appends a pathway `from -> to`.
    ///
    /// # Errors
    /// - `GraphError::UnknownNode` if either id was not issued by this arena
    /// - `GraphError::InvalidWeight` for NaN, infinite or negative weights
    pub fn add_pathway(&mut self, from: NodeId, to: NodeId, weight: f64) -> Result<()> {
        if to.0 >= self.nodes.len() {
            return Err(GraphError::UnknownNode(to.0));
        }
        let weight = validate_weight(weight)?;
        let node = self
            .nodes
            .get_mut(from.0)
            .ok_or(GraphError::UnknownNode(from.0))?;
        node.pathways.push(Edge::new(to, weight));
        Ok(())
    }

    pub fn node(&self, id: NodeId) -> Option<&MarkovNode<P>> {
        self.nodes.get(id.0)
    }

    pub fn payload(&self, id: NodeId) -> Option<&Arc<P>> {
        self.node(id).map(MarkovNode::payload)
    }

    /// Selects the next node from `id`; `None` for terminal or unknown nodes.
    pub fn next_node(&self, id: NodeId, t: f64) -> Option<NodeId> {
        self.node(id).and_then(|node| node.next_node(t))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    // == Random Walk ==
    /// Walks up to `steps` transitions from `start`, drawing each `t` from `rng`.
    ///
    /// The path starts with `start` and stops early at a terminal node. An
    /// unknown `start` yields an empty path.
    pub fn random_walk<R: Rng>(&self, start: NodeId, steps: usize, rng: &mut R) -> Vec<NodeId> {
        if self.node(start).is_none() {
            return Vec::new();
        }

        let mut path = vec![start];
        let mut current = start;

        for _ in 0..steps {
            match self.next_node(current, rng.gen::<f64>()) {
                Some(next) => {
                    path.push(next);
                    current = next;
                }
                None => break,
            }
        }

        path
    }
}
