//! Weighted selection shared by both graph variants.
//!
//! A normalized scalar `t` addresses the cumulative weight space of an edge
//! list: `v = t * W` is walked down edge by edge and the first edge that
//! brings it to zero or below is chosen. Driving `t` from a uniform sample
//! in `[0, 1)` picks each edge with probability proportional to its weight.

use tracing::debug;

use crate::error::{GraphError, Result};

/// Anything carrying a selection weight.
pub trait Weighted {
    fn weight(&self) -> f64;
}

/// A directed edge to `target` with a non-negative weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<T> {
    pub target: T,
    pub weight: f64,
}

impl<T> Edge<T> {
    pub fn new(target: T, weight: f64) -> Self {
        Self { target, weight }
    }
}

impl<T> Weighted for Edge<T> {
    #[inline]
    fn weight(&self) -> f64 {
        self.weight
    }
}

/// Sums the weights of `items` in order.
pub fn total_weight<E: Weighted>(items: &[E]) -> f64 {
    items.iter().map(Weighted::weight).sum()
}

/// Picks the item addressed by `t`.
///
/// - `t <= 0` or an all-zero pool selects the first item.
/// - If rounding leaves `v` above zero after the last item, the last item
///   is returned, so a non-empty list always yields a selection.
/// - Finite weights whose sum overflows to infinity are scaled down by the
///   largest weight before the walk.
///
/// Returns `None` only for an empty list.
pub fn select_weighted<E: Weighted>(items: &[E], t: f64) -> Option<&E> {
    if t <= 0.0 {
        return items.first();
    }

    let mut total = total_weight(items);
    let mut scale = 1.0;
    if !total.is_finite() {
        scale = items.iter().map(Weighted::weight).fold(0.0, f64::max);
        total = items.iter().map(|item| item.weight() / scale).sum();
    }

    let mut remaining = t * total;
    for item in items {
        remaining -= item.weight() / scale;
        if remaining <= 0.0 {
            return Some(item);
        }
    }

    items.last()
}

/// Rejects weights that cannot take part in selection.
pub(crate) fn validate_weight(weight: f64) -> Result<f64> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(weight)
    } else {
        debug!(weight, "rejected edge weight");
        Err(GraphError::InvalidWeight(weight))
    }
}
