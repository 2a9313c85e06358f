//! Great-circle distances and bearings between coordinates.
//!
//! Distances are reported in miles. The router uses the same metric for
//! segment lengths and for its heuristic, and the optimiser uses it for
//! straight-line tour costs, so every consumer takes a [`DistanceMetric`]
//! that tests can replace with a planar one.

use geo::{Bearing, Distance, Haversine};

use crate::{Coordinate, DeliveryRequest, Segment};

/// Metres in one statute mile.
pub const METERS_PER_MILE: f64 = 1_609.344;

/// Distance between two coordinates.
///
/// Implementations must be non-negative, symmetric and return zero for equal
/// coordinates. Routing relies on the metric never exceeding the true road
/// distance between two points.
///
/// Zero does not imply equality. Metrics measure parsed values, so `"34.05"`
/// and `"34.050"` are different coordinates (and different graph nodes) with
/// a distance of zero between them.
pub trait DistanceMetric {
    /// Distance from `from` to `to`.
    fn distance(&self, from: &Coordinate, to: &Coordinate) -> f64;
}

impl<M: DistanceMetric + ?Sized> DistanceMetric for &M {
    fn distance(&self, from: &Coordinate, to: &Coordinate) -> f64 {
        (**self).distance(from, to)
    }
}

/// Haversine great-circle distance in miles.
///
/// # Examples
/// ```
/// use courier_core::{Coordinate, DistanceMetric, GreatCircle};
///
/// # fn main() -> Result<(), courier_core::CoordinateError> {
/// let a = Coordinate::new("34.0625329", "-118.4470263")?;
/// let b = Coordinate::new("34.0712323", "-118.4505969")?;
/// let miles = GreatCircle.distance(&a, &b);
/// assert!(miles > 0.6 && miles < 0.7);
/// assert!(GreatCircle.distance(&a, &a).abs() < f64::EPSILON);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GreatCircle;

impl DistanceMetric for GreatCircle {
    fn distance(&self, from: &Coordinate, to: &Coordinate) -> f64 {
        if from == to {
            return 0.0;
        }
        Haversine.distance(from.point(), to.point()) / METERS_PER_MILE
    }
}

/// Initial bearing from `from` to `to` in degrees clockwise from north,
/// normalised to `[0, 360)`.
#[must_use]
pub fn bearing(from: &Coordinate, to: &Coordinate) -> f64 {
    Haversine.bearing(from.point(), to.point()).rem_euclid(360.0)
}

/// Bearing of a segment from its start towards its end.
#[must_use]
pub fn segment_bearing(segment: &Segment) -> f64 {
    bearing(&segment.start, &segment.end)
}

/// Length of a segment under `metric`.
pub fn segment_length<M: DistanceMetric + ?Sized>(metric: &M, segment: &Segment) -> f64 {
    metric.distance(&segment.start, &segment.end)
}

/// Straight-line cost of the closed tour depot → stops → depot.
///
/// An empty tour costs nothing.
///
/// # Examples
/// ```
/// use courier_core::{tour_cost, Coordinate, DeliveryRequest, GreatCircle, DistanceMetric};
///
/// # fn main() -> Result<(), courier_core::CoordinateError> {
/// let depot = Coordinate::new("34.0625329", "-118.4470263")?;
/// let stop = Coordinate::new("34.0712323", "-118.4505969")?;
/// let tour = [DeliveryRequest::new(stop.clone(), "Chicken tenders")];
/// let cost = tour_cost(&GreatCircle, &depot, &tour);
/// assert!((cost - 2.0 * GreatCircle.distance(&depot, &stop)).abs() < 1e-12);
/// # Ok(())
/// # }
/// ```
pub fn tour_cost<M: DistanceMetric + ?Sized>(
    metric: &M,
    depot: &Coordinate,
    deliveries: &[DeliveryRequest],
) -> f64 {
    let Some(last) = deliveries.last() else {
        return 0.0;
    };
    let mut cost = 0.0;
    let mut previous = depot;
    for delivery in deliveries {
        cost += metric.distance(previous, &delivery.location);
        previous = &delivery.location;
    }
    cost + metric.distance(&last.location, depot)
}
