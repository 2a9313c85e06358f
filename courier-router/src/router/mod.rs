//! `AStarRouter` implementation.
//!
//! Both endpoints are checked against the graph before any search work, so a
//! typo in a delivery address surfaces as `BadCoordinate` rather than
//! `NoRoute`.

use courier_core::{
    Coordinate, DistanceMetric, GreatCircle, RouteError, RouteLeg, Router, StreetGraph,
};
use log::debug;

mod search;

use search::{Search, SearchOutcome};

/// A* router over a street graph.
///
/// The router is generic over the graph it searches and the metric used for
/// both segment costs and the heuristic. It borrows nothing per query, so a
/// single router may serve many routes.
///
/// # Examples
/// ```
/// use courier_core::{Coordinate, Router, Segment};
/// use courier_core::test_support::MemoryGraph;
/// use courier_router::AStarRouter;
///
/// let a = Coordinate::new("34.0500", "-118.2500")?;
/// let b = Coordinate::new("34.0510", "-118.2500")?;
/// let graph = MemoryGraph::default().with_road("Spring St", a.clone(), b.clone());
/// let router = AStarRouter::new(graph);
///
/// let leg = router.route(&a, &b)?;
/// assert_eq!(leg.segments, vec![Segment::new(a, b, "Spring St")]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct AStarRouter<G, M = GreatCircle>
where
    G: StreetGraph,
    M: DistanceMetric,
{
    graph: G,
    metric: M,
}

impl<G> AStarRouter<G>
where
    G: StreetGraph,
{
    /// Construct a router using great-circle distances.
    #[must_use]
    pub const fn new(graph: G) -> Self {
        Self::with_metric(graph, GreatCircle)
    }
}

impl<G, M> AStarRouter<G, M>
where
    G: StreetGraph,
    M: DistanceMetric,
{
    /// Construct a router with an explicit distance metric.
    #[must_use]
    pub const fn with_metric(graph: G, metric: M) -> Self {
        Self { graph, metric }
    }

    /// The graph this router searches.
    #[must_use]
    pub const fn graph(&self) -> &G {
        &self.graph
    }

    fn require_known(&self, coordinate: &Coordinate) -> Result<(), RouteError> {
        if self.graph.contains(coordinate) {
            Ok(())
        } else {
            debug!("coordinate {coordinate} is not a graph node");
            Err(RouteError::BadCoordinate {
                coordinate: coordinate.clone(),
            })
        }
    }
}

impl<G, M> Router for AStarRouter<G, M>
where
    G: StreetGraph,
    M: DistanceMetric,
{
    fn route(&self, start: &Coordinate, end: &Coordinate) -> Result<RouteLeg, RouteError> {
        self.require_known(start)?;
        self.require_known(end)?;
        if start == end {
            return Ok(RouteLeg::empty());
        }

        match Search::new(&self.metric, start, end).run(&self.graph) {
            SearchOutcome::Reached(leg) => Ok(leg),
            SearchOutcome::Exhausted => {
                debug!("open list exhausted routing {start} -> {end}");
                Err(RouteError::NoRoute {
                    from: start.clone(),
                    to: end.clone(),
                })
            }
        }
    }
}
