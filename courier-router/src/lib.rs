//! A* shortest-path routing over a street graph for Courier.
//!
//! This crate provides [`AStarRouter`], the default implementation of the
//! [`Router`](courier_core::Router) trait. It searches any
//! [`StreetGraph`](courier_core::StreetGraph) using a
//! [`DistanceMetric`](courier_core::DistanceMetric) both for edge costs and as
//! the heuristic, so with the default great-circle metric the heuristic is
//! admissible and the returned leg is a shortest path.
//!
//! The search keeps its nodes in an arena indexed by position, with parents
//! stored as arena indices. Coordinates are mapped to arena slots through an
//! [`ExpandableMap`](courier_core::ExpandableMap).

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod router;

pub use router::AStarRouter;
