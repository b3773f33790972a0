//! Error types for the graph walker
//!
//! Cache operations never fail; only precondition violations on the graph
//! surface as errors.

use thiserror::Error;

// == Graph Error Enum ==
/// Unified error type for graph construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// Edge weight is NaN, infinite or negative
    #[error("Invalid weight: {0}")]
    InvalidWeight(f64),

    /// Node id was not issued by this arena
    #[error("Unknown node: {0}")]
    UnknownNode(usize),
}

// == Result Type Alias ==
/// Convenience Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
