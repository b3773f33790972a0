//! Cache Walk - a size-bounded named cache and a weighted graph walker
//!
//! The two utilities are independent:
//! - [`cache`]: string-keyed values under a size ceiling, evicting the least
//!   recently requested entries first
//! - [`graph`]: Markov-style edge selection driven by a normalized scalar

pub mod cache;
pub mod config;
pub mod error;
pub mod graph;
pub mod tasks;

pub use cache::{NamedCache, SharedCache};
pub use config::CacheConfig;
pub use error::GraphError;
pub use graph::{MarkovArena, MarkovGraph, NodeId};
pub use tasks::spawn_trim_task;
