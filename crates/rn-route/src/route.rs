//! The result of a path query: an ordered list of legs with running metrics.

use rn_core::{ConnectionId, IntersectionId, Metric};
use rn_graph::RoadNetwork;

/// One traversed connection plus the totals accumulated *through* it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteLeg {
    /// The connection taken.
    pub conn: ConnectionId,
    /// Road segments traversed so far, this leg included.
    pub hops: u32,
    /// Cumulative Euclidean length.
    pub length: f64,
    /// Cumulative direction changes.
    pub turns: u32,
}

/// An optimal route from `start` to the last leg's destination.
///
/// All three metrics are filled in regardless of which one the search
/// minimized, so callers can compare routes across criteria.  The leg list is
/// empty when start and destination coincide.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Where the route begins.
    pub start: IntersectionId,
    /// Connections in travel order, with cumulative metrics.
    pub legs: Vec<RouteLeg>,
}

impl Route {
    /// `true` if the start and destination are the same intersection.
    pub fn is_trivial(&self) -> bool {
        self.legs.is_empty()
    }

    /// Number of road segments traversed.
    pub fn hops(&self) -> u32 {
        self.legs.len() as u32
    }

    /// Total Euclidean length.
    pub fn total_length(&self) -> f64 {
        self.legs.last().map_or(0.0, |l| l.length)
    }

    /// Total number of direction changes.
    pub fn turns(&self) -> u32 {
        self.legs.last().map_or(0, |l| l.turns)
    }

    /// The route's total under `metric`, as a float so callers can form
    /// ratios uniformly across metrics.
    pub fn metric_total(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Hops     => self.hops() as f64,
            Metric::Distance => self.total_length(),
            Metric::Turns    => self.turns() as f64,
        }
    }

    /// The destination intersection (equals `start` for trivial routes).
    pub fn destination(&self, net: &RoadNetwork) -> IntersectionId {
        self.legs
            .last()
            .map_or(self.start, |l| net.conn_to[l.conn.index()])
    }

    /// Every intersection the route touches, start first, destination last.
    pub fn arrivals(&self, net: &RoadNetwork) -> Vec<IntersectionId> {
        let mut stops = Vec::with_capacity(self.legs.len() + 1);
        stops.push(self.start);
        stops.extend(self.legs.iter().map(|l| net.conn_to[l.conn.index()]));
        stops
    }
}
