//! Test-only, in-memory `StreetGraph` and metric implementations used by unit
//! and behaviour tests across the workspace.

use crate::{Coordinate, DeliveryRequest, DistanceMetric, ExpandableMap, Segment, StreetGraph};

/// Build a coordinate from literal text.
///
/// # Panics
/// Panics when the text is not a valid coordinate; tests supply literals.
#[must_use]
pub fn coord(latitude: &str, longitude: &str) -> Coordinate {
    Coordinate::new(latitude, longitude)
        .unwrap_or_else(|err| panic!("invalid test coordinate {latitude} {longitude}: {err}"))
}

/// Build a delivery of `item` at a literal coordinate.
///
/// # Panics
/// Panics when the text is not a valid coordinate.
#[must_use]
pub fn delivery(latitude: &str, longitude: &str, item: &str) -> DeliveryRequest {
    DeliveryRequest::new(coord(latitude, longitude), item)
}

/// In-memory street graph assembled road by road.
///
/// # Examples
/// ```rust
/// use courier_core::StreetGraph;
/// use courier_core::test_support::{coord, MemoryGraph};
///
/// let graph = MemoryGraph::default().with_road("Main St", coord("0", "0"), coord("0", "1"));
/// assert!(graph.contains(&coord("0", "1")));
/// assert_eq!(graph.segment_count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct MemoryGraph {
    segments: ExpandableMap<Coordinate, Vec<Segment>>,
    segment_count: usize,
}

impl MemoryGraph {
    /// Add a two-way road between `a` and `b`.
    #[must_use]
    pub fn with_road(mut self, street: &str, a: Coordinate, b: Coordinate) -> Self {
        let forward = Segment::new(a, b, street);
        let backward = forward.reversed();
        self.push(forward);
        self.push(backward);
        self
    }

    /// Add a one-way segment from `from` to `to`.
    #[must_use]
    pub fn with_one_way(mut self, street: &str, from: Coordinate, to: Coordinate) -> Self {
        self.push(Segment::new(from, to, street));
        self
    }

    /// Number of directed segments stored.
    #[must_use]
    pub const fn segment_count(&self) -> usize {
        self.segment_count
    }

    fn push(&mut self, segment: Segment) {
        self.segment_count += 1;
        if let Some(outgoing) = self.segments.find_mut(&segment.start) {
            outgoing.push(segment);
        } else {
            self.segments.associate(segment.start.clone(), vec![segment]);
        }
    }
}

impl StreetGraph for MemoryGraph {
    fn segments_from(&self, coordinate: &Coordinate) -> Option<&[Segment]> {
        self.segments.find(coordinate).map(Vec::as_slice)
    }
}

/// Euclidean distance over raw degrees, treating latitude and longitude as
/// plane axes. Makes hand-built graphs have exact edge lengths.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlanarMetric;

impl DistanceMetric for PlanarMetric {
    fn distance(&self, from: &Coordinate, to: &Coordinate) -> f64 {
        (from.latitude() - to.latitude()).hypot(from.longitude() - to.longitude())
    }
}

/// The chain `A(0,0) → B(0,1) → C(0,2) → D(0,3)` of unit-length roads, all
/// on one street, returned with its four coordinates.
#[must_use]
pub fn chain_graph() -> (MemoryGraph, [Coordinate; 4]) {
    let nodes = [coord("0", "0"), coord("0", "1"), coord("0", "2"), coord("0", "3")];
    let graph = MemoryGraph::default()
        .with_road("Chain Rd", nodes[0].clone(), nodes[1].clone())
        .with_road("Chain Rd", nodes[1].clone(), nodes[2].clone())
        .with_road("Chain Rd", nodes[2].clone(), nodes[3].clone());
    (graph, nodes)
}
