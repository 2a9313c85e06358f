//! Arena-backed A* search state.
//!
//! Nodes live in a `Vec` and refer to their parent by index, so the search
//! tree never holds references into itself. The open list is a binary heap
//! with lazy deletion: improving a node pushes a fresh entry and stale entries
//! are skipped when popped because the node is already finalized.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use courier_core::{Coordinate, DistanceMetric, ExpandableMap, RouteLeg, Segment, StreetGraph};
use log::{trace, warn};

/// Position of a node in the search arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(super) struct NodeId(usize);

#[derive(Debug)]
struct SearchNode {
    coordinate: Coordinate,
    /// Best known distance from the start.
    g: f64,
    /// `g` plus the heuristic distance to the goal.
    f: f64,
    parent: Option<NodeId>,
    /// The segment leading here from `parent`.
    via: Option<Segment>,
    finalized: bool,
}

/// Open-list entry. Ordered so the max-heap pops the lowest `f`, and among
/// equal `f` the node created first.
#[derive(Debug, Clone, Copy)]
struct OpenEntry {
    f: f64,
    node: NodeId,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

/// How a search ended.
#[derive(Debug)]
pub(super) enum SearchOutcome {
    /// The goal was finalized; the leg runs from start to goal.
    Reached(RouteLeg),
    /// Every reachable node was finalized without meeting the goal.
    Exhausted,
}

/// One A* query. Consumed by [`Search::run`].
pub(super) struct Search<'m, M> {
    metric: &'m M,
    goal: Coordinate,
    nodes: Vec<SearchNode>,
    index: ExpandableMap<Coordinate, NodeId>,
    open: BinaryHeap<OpenEntry>,
    expansions: usize,
}

impl<'m, M: DistanceMetric> Search<'m, M> {
    /// Seed the search with `start` as the only open node.
    pub(super) fn new(metric: &'m M, start: &Coordinate, goal: &Coordinate) -> Self {
        let mut search = Self {
            metric,
            goal: goal.clone(),
            nodes: Vec::new(),
            index: ExpandableMap::new(),
            open: BinaryHeap::new(),
            expansions: 0,
        };
        let heuristic = metric.distance(start, goal);
        search.insert(start.clone(), 0.0, heuristic, None, None);
        search
    }

    /// Expand nodes until the goal is finalized or the open list empties.
    pub(super) fn run<G: StreetGraph>(mut self, graph: &G) -> SearchOutcome {
        while let Some(current) = self.pop_open() {
            let Some(coordinate) = self.coordinate(current).cloned() else {
                continue;
            };
            if coordinate == self.goal {
                trace!(
                    "reached {} after {} expansions over {} nodes",
                    self.goal,
                    self.expansions,
                    self.nodes.len()
                );
                return SearchOutcome::Reached(self.into_leg(current));
            }
            self.expansions += 1;
            for segment in graph.segments_from(&coordinate).unwrap_or_default() {
                self.relax(current, segment);
            }
        }
        SearchOutcome::Exhausted
    }

    fn coordinate(&self, id: NodeId) -> Option<&Coordinate> {
        self.nodes.get(id.0).map(|node| &node.coordinate)
    }

    /// Pop the open node with the lowest `f` and finalize it.
    fn pop_open(&mut self) -> Option<NodeId> {
        while let Some(entry) = self.open.pop() {
            let Some(node) = self.nodes.get_mut(entry.node.0) else {
                continue;
            };
            if node.finalized {
                continue;
            }
            node.finalized = true;
            return Some(entry.node);
        }
        None
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "A* scores are sums of metric distances"
    )]
    fn relax(&mut self, from: NodeId, segment: &Segment) {
        let Some(base) = self.nodes.get(from.0).map(|node| node.g) else {
            return;
        };
        let candidate = base + self.metric.distance(&segment.start, &segment.end);
        let heuristic = self.metric.distance(&segment.end, &self.goal);

        let Some(&existing) = self.index.find(&segment.end) else {
            self.insert(
                segment.end.clone(),
                candidate,
                candidate + heuristic,
                Some(from),
                Some(segment.clone()),
            );
            return;
        };
        let Some(node) = self.nodes.get_mut(existing.0) else {
            return;
        };
        if candidate < node.g {
            node.g = candidate;
            node.f = candidate + heuristic;
            node.parent = Some(from);
            node.via = Some(segment.clone());
            if !node.finalized {
                self.open.push(OpenEntry {
                    f: node.f,
                    node: existing,
                });
            }
        }
    }

    fn insert(
        &mut self,
        coordinate: Coordinate,
        g: f64,
        f: f64,
        parent: Option<NodeId>,
        via: Option<Segment>,
    ) {
        let id = NodeId(self.nodes.len());
        self.index.associate(coordinate.clone(), id);
        self.nodes.push(SearchNode {
            coordinate,
            g,
            f,
            parent,
            via,
            finalized: false,
        });
        self.open.push(OpenEntry { f, node: id });
    }

    /// Walk parent links from `goal` back to the start and return the
    /// segments in travel order.
    fn into_leg(mut self, goal: NodeId) -> RouteLeg {
        let distance = self.nodes.get(goal.0).map_or(0.0, |node| node.g);
        let mut segments = Vec::new();
        let limit = self.nodes.len();
        let mut cursor = Some(goal);
        while let Some(id) = cursor {
            let Some(node) = self.nodes.get_mut(id.0) else {
                break;
            };
            let Some(segment) = node.via.take() else {
                break;
            };
            segments.push(segment);
            cursor = node.parent;
            if segments.len() > limit {
                warn!("parent links around {} do not form a tree", self.goal);
                break;
            }
        }
        segments.reverse();
        RouteLeg::new(segments, distance)
    }

    #[cfg(test)]
    pub(super) fn is_tree(&self) -> bool {
        self.nodes.iter().all(|node| {
            let mut steps = 0;
            let mut cursor = node.parent;
            while let Some(id) = cursor {
                steps += 1;
                if steps > self.nodes.len() {
                    return false;
                }
                cursor = self.nodes.get(id.0).and_then(|parent| parent.parent);
            }
            true
        })
    }

    #[cfg(test)]
    pub(super) fn step<G: StreetGraph>(&mut self, graph: &G) -> bool {
        let Some(current) = self.pop_open() else {
            return false;
        };
        if let Some(coordinate) = self.coordinate(current).cloned() {
            for segment in graph.segments_from(&coordinate).unwrap_or_default() {
                self.relax(current, segment);
            }
        }
        true
    }
}
