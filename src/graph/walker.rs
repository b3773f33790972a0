//! Value-keyed Markov walker.
//!
//! Nodes are identified by value. Each node keeps its outgoing edges in
//! insertion order, so selection is deterministic for a given `t`.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use rand::Rng;

use crate::error::Result;
use crate::graph::weighted::{select_weighted, total_weight, validate_weight, Edge};

// == Markov Graph ==
/// Weighted directed graph keyed by node value.
#[derive(Debug, Clone)]
pub struct MarkovGraph<V> {
    /// Outgoing edges by source value
    edges: HashMap<V, Vec<Edge<V>>>,
}

impl<V> Default for MarkovGraph<V> {
    fn default() -> Self {
        Self {
            edges: HashMap::new(),
        }
    }
}

impl<V: Eq + Hash + Clone> MarkovGraph<V> {
    pub fn new() -> Self {
        Self::default()
    }

    // == Add Edge ==
    /// Appends an edge `from -> to`.
    ///
    /// Repeated pairs stay separate parallel edges, so their weights add up
    /// in selection.
    ///
    /// # Errors
    /// `GraphError::InvalidWeight` for NaN, infinite or negative weights.
    pub fn add_edge(&mut self, from: V, to: V, weight: f64) -> Result<()> {
        let weight = validate_weight(weight)?;
        self.edges
            .entry(from)
            .or_default()
            .push(Edge::new(to, weight));
        Ok(())
    }

    // == Select Edge ==
    /// Returns the target addressed by `t` among the edges leaving `from`.
    ///
    /// A node without outgoing edges (or one never seen) selects itself.
    pub fn select_edge(&self, from: &V, t: f64) -> V {
        select_weighted(self.edges(from), t)
            .map(|edge| edge.target.clone())
            .unwrap_or_else(|| from.clone())
    }

    /// Outgoing edges of `from` in insertion order.
    pub fn edges(&self, from: &V) -> &[Edge<V>] {
        self.edges.get(from).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn total_weight(&self, from: &V) -> f64 {
        total_weight(self.edges(from))
    }

    /// Returns true if `node` appears as a source or a target.
    pub fn contains_node(&self, node: &V) -> bool {
        self.edges.contains_key(node)
            || self
                .edges
                .values()
                .any(|out| out.iter().any(|edge| &edge.target == node))
    }

    /// Number of distinct values appearing as a source or a target.
    pub fn node_count(&self) -> usize {
        let mut seen: HashSet<&V> = self.edges.keys().collect();
        for out in self.edges.values() {
            seen.extend(out.iter().map(|edge| &edge.target));
        }
        seen.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    // == Random Walk ==
    /// Walks `steps` transitions from `start`, drawing each `t` from `rng`.
    ///
    /// The returned path starts with `start` and always has `steps + 1`
    /// values; terminal nodes repeat themselves.
    pub fn random_walk<R: Rng>(&self, start: V, steps: usize, rng: &mut R) -> Vec<V> {
        let mut path = Vec::with_capacity(steps + 1);
        let mut current = start;

        for _ in 0..steps {
            let next = self.select_edge(&current, rng.gen::<f64>());
            path.push(std::mem::replace(&mut current, next));
        }

        path.push(current);
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_graph_new() {
        let graph: MarkovGraph<&str> = MarkovGraph::new();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_graph_worked_example() {
        let mut graph = MarkovGraph::new();
        graph.add_edge("start", "A", 1.0).unwrap();
        graph.add_edge("start", "B", 9.0).unwrap();

        assert_eq!(graph.select_edge(&"start", 0.05), "A");
        assert_eq!(graph.select_edge(&"start", 0.5), "B");
        assert_eq!(graph.select_edge(&"start", 0.0), "A");
        assert_eq!(graph.select_edge(&"start", 1.0), "B");
    }

    #[test]
    fn test_graph_terminal_node_selects_itself() {
        let mut graph = MarkovGraph::new();
        graph.add_edge(1, 2, 1.0).unwrap();

        assert_eq!(graph.select_edge(&2, 0.5), 2);
        assert_eq!(graph.select_edge(&99, 0.5), 99);
    }

    #[test]
    fn test_graph_parallel_edges_are_not_merged() {
        let mut graph = MarkovGraph::new();
        graph.add_edge('x', 'a', 1.0).unwrap();
        graph.add_edge('x', 'b', 1.0).unwrap();
        graph.add_edge('x', 'a', 2.0).unwrap();

        assert_eq!(graph.edges(&'x').len(), 3);
        assert_eq!(graph.total_weight(&'x'), 4.0);
        // t = 0.9 lands in the second 'a' edge
        assert_eq!(graph.select_edge(&'x', 0.9), 'a');
        assert_eq!(graph.select_edge(&'x', 0.4), 'b');
    }

    #[test]
    fn test_graph_rejects_invalid_weight() {
        let mut graph = MarkovGraph::new();

        assert_eq!(
            graph.add_edge(1, 2, -0.5),
            Err(GraphError::InvalidWeight(-0.5))
        );
        assert!(graph.add_edge(1, 2, f64::NAN).is_err());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_graph_accepts_zero_weight() {
        let mut graph = MarkovGraph::new();
        graph.add_edge(1, 2, 0.0).unwrap();
        graph.add_edge(1, 3, 0.0).unwrap();

        assert_eq!(graph.select_edge(&1, 0.8), 2);
    }

    #[test]
    fn test_graph_huge_weights_keep_first_edge_at_zero() {
        let mut graph = MarkovGraph::new();
        graph.add_edge("s", "A", 1e308).unwrap();
        graph.add_edge("s", "B", 1e308).unwrap();

        assert_eq!(graph.select_edge(&"s", 0.0), "A");
        assert_eq!(graph.select_edge(&"s", 0.9), "B");
    }

    #[test]
    fn test_graph_node_count() {
        let mut graph = MarkovGraph::new();
        graph.add_edge("a", "b", 1.0).unwrap();
        graph.add_edge("b", "a", 1.0).unwrap();
        graph.add_edge("b", "c", 1.0).unwrap();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.contains_node(&"c"));
        assert!(!graph.contains_node(&"d"));
    }

    #[test]
    fn test_random_walk_follows_edges() {
        let mut graph = MarkovGraph::new();
        graph.add_edge(0, 1, 1.0).unwrap();
        graph.add_edge(1, 2, 1.0).unwrap();
        graph.add_edge(2, 0, 1.0).unwrap();

        let mut rng = StdRng::seed_from_u64(7);
        let path = graph.random_walk(0, 6, &mut rng);

        assert_eq!(path, vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn test_random_walk_stays_on_terminal() {
        let mut graph = MarkovGraph::new();
        graph.add_edge("a", "end", 1.0).unwrap();

        let mut rng = StdRng::seed_from_u64(1);
        let path = graph.random_walk("a", 3, &mut rng);

        assert_eq!(path, vec!["a", "end", "end", "end"]);
    }
}
