//! Read access to a directed street graph.
//!
//! The `StreetGraph` trait abstracts whatever stores the road network. The
//! router only ever asks one question of it: which segments leave this
//! coordinate?

use crate::{Coordinate, Segment};

/// Outgoing-segment lookup over a street network.
///
/// `None` means the coordinate is not a node of the graph. Routers treat an
/// empty slice the same way, since no route can leave such a node.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use courier_core::{Coordinate, Segment, StreetGraph};
///
/// struct Adjacency(HashMap<Coordinate, Vec<Segment>>);
///
/// impl StreetGraph for Adjacency {
///     fn segments_from(&self, coordinate: &Coordinate) -> Option<&[Segment]> {
///         self.0.get(coordinate).map(Vec::as_slice)
///     }
/// }
///
/// # fn main() -> Result<(), courier_core::CoordinateError> {
/// let a = Coordinate::new("0", "0")?;
/// let b = Coordinate::new("0", "1")?;
/// let graph = Adjacency(HashMap::from([(
///     a.clone(),
///     vec![Segment::new(a.clone(), b.clone(), "Main St")],
/// )]));
/// assert_eq!(graph.segments_from(&a).map(<[_]>::len), Some(1));
/// assert!(!graph.contains(&b));
/// # Ok(())
/// # }
/// ```
pub trait StreetGraph {
    /// Segments whose start is `coordinate`, or `None` when it is unknown.
    fn segments_from(&self, coordinate: &Coordinate) -> Option<&[Segment]>;

    /// Whether at least one segment starts at `coordinate`.
    fn contains(&self, coordinate: &Coordinate) -> bool {
        self.segments_from(coordinate)
            .is_some_and(|segments| !segments.is_empty())
    }
}

impl<G: StreetGraph + ?Sized> StreetGraph for &G {
    fn segments_from(&self, coordinate: &Coordinate) -> Option<&[Segment]> {
        (**self).segments_from(coordinate)
    }
}
