//! Background Tasks Module
//!
//! # Tasks
//! - Cache Trim: Enforces the size ceiling of a shared cache at a fixed interval

mod trim;

pub use trim::spawn_trim_task;
