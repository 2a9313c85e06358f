//! The delivery-order optimiser seam.

use crate::{Coordinate, DeliveryRequest};

/// Outcome of reordering a tour.
///
/// Costs are straight-line tour costs (see [`tour_cost`](crate::tour_cost)),
/// not routed distances.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizationReport {
    /// Cost of the order the caller supplied.
    pub original_cost: f64,
    /// Cost of the order left in the slice.
    pub optimized_cost: f64,
    /// Search iterations performed.
    pub iterations: usize,
}

/// Reorder deliveries to shorten the closed tour from and back to the depot.
///
/// Implementations rearrange `deliveries` in place, keep the same elements,
/// and never leave an order costlier than the original.
pub trait OrderOptimizer {
    /// Reorder `deliveries` for a tour that starts and ends at `depot`.
    fn optimize(
        &mut self,
        depot: &Coordinate,
        deliveries: &mut [DeliveryRequest],
    ) -> OptimizationReport;
}

impl<O: OrderOptimizer + ?Sized> OrderOptimizer for &mut O {
    fn optimize(
        &mut self,
        depot: &Coordinate,
        deliveries: &mut [DeliveryRequest],
    ) -> OptimizationReport {
        (**self).optimize(depot, deliveries)
    }
}
