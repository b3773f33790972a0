//! Graph Module
//!
//! Markov-style traversal over weighted directed edges. A normalized scalar
//! `t` in `[0, 1]` picks an outgoing edge in proportion to its weight.
//!
//! Two variants keep their own fallback for nodes without outgoing edges:
//! - [`MarkovGraph`] is keyed by value and selects the node itself
//! - [`MarkovArena`] holds payload nodes and selects `None`

mod arena;
mod walker;
mod weighted;


pub use arena::{MarkovArena, MarkovNode, NodeId};
pub use walker::MarkovGraph;
pub use weighted::{select_weighted, total_weight, Edge, Weighted};
