//! Road-network representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing
//! connections.  Given an `IntersectionId n`, its outgoing connections occupy
//! the slice:
//!
//! ```text
//! conn_from[ out_start[n] .. out_start[n+1] ]
//! ```
//!
//! All connection arrays (`conn_from`, `conn_to`, `conn_bearing`,
//! `conn_length`) are sorted by source intersection and indexed by
//! `ConnectionId`.  The sort is **stable**, so within one intersection the
//! outgoing connections keep their declaration order — that order is part of
//! the search contract (frontier ties break on earliest insertion, and the
//! turn filter preserves candidate order).
//!
//! # Immutability
//!
//! A built `RoadNetwork` is never mutated.  Loading a new network replaces
//! the whole value; queries only ever see a complete graph.  The no-left-turn
//! legality table is computed once inside [`RoadNetworkBuilder::build`], so
//! the finished network is safe to share across threads.

use rustc_hash::FxHashMap;

use rn_core::{ConnectionId, IntersectionId, Point};

use crate::turns;

// ── RoadNetwork ───────────────────────────────────────────────────────────────

/// Immutable road graph in CSR format plus the per-connection legality table.
///
/// SoA fields are `pub` for direct indexed access on hot paths.  Do not
/// construct directly; use [`RoadNetworkBuilder`] or the loader.
#[derive(Debug)]
pub struct RoadNetwork {
    // ── Intersection data ─────────────────────────────────────────────────
    /// Display name of each intersection.  Indexed by `IntersectionId`.
    pub names: Vec<String>,

    /// Planar position of each intersection.  Indexed by `IntersectionId`.
    pub positions: Vec<Point>,

    // ── CSR connection adjacency ──────────────────────────────────────────
    /// CSR row pointer.  Outgoing connections of intersection `n` are at
    /// ConnectionIds `out_start[n] .. out_start[n+1]`.
    /// Length = `intersection_count + 1`.
    pub out_start: Vec<u32>,

    // ── Connection data (indexed by ConnectionId) ─────────────────────────
    /// Source intersection of each connection.
    pub conn_from: Vec<IntersectionId>,

    /// Destination intersection of each connection.
    pub conn_to: Vec<IntersectionId>,

    /// Bearing of each connection: `atan2(Δy, Δx)` from source to
    /// destination, radians.
    pub conn_bearing: Vec<f64>,

    /// Euclidean length of each connection.
    pub conn_length: Vec<f64>,

    // ── Derived tables ────────────────────────────────────────────────────
    /// CSR row pointer over `legal_conns`: legal continuations of connection
    /// `c` under the no-left-turn rule are at
    /// `legal_conns[ legal_start[c] .. legal_start[c+1] ]`.
    legal_start: Vec<u32>,
    legal_conns: Vec<ConnectionId>,

    /// Name → id lookup.  Names are unique (the loader enforces this).
    name_index: FxHashMap<String, IntersectionId>,
}

impl RoadNetwork {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn intersection_count(&self) -> usize {
        self.positions.len()
    }

    pub fn connection_count(&self) -> usize {
        self.conn_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `ConnectionId`s of all outgoing connections of
    /// `intersection`, in declaration order.
    ///
    /// This is a contiguous index range — no heap allocation.
    #[inline]
    pub fn out_connections(
        &self,
        intersection: IntersectionId,
    ) -> impl Iterator<Item = ConnectionId> + '_ {
        let start = self.out_start[intersection.index()] as usize;
        let end   = self.out_start[intersection.index() + 1] as usize;
        (start..end).map(|i| ConnectionId(i as u32))
    }

    /// Out-degree of `intersection` (number of outgoing connections).
    #[inline]
    pub fn out_degree(&self, intersection: IntersectionId) -> usize {
        let start = self.out_start[intersection.index()] as usize;
        let end   = self.out_start[intersection.index() + 1] as usize;
        end - start
    }

    /// Legal continuations of `inbound` under the no-left-turn rule, in the
    /// same order as the destination's outgoing connections.
    ///
    /// The table is precomputed at build time.  It covers arrivals *via a
    /// connection* only; a route's start has no inbound direction and is
    /// expanded unfiltered by the search.
    #[inline]
    pub fn legal_out(&self, inbound: ConnectionId) -> &[ConnectionId] {
        let start = self.legal_start[inbound.index()] as usize;
        let end   = self.legal_start[inbound.index() + 1] as usize;
        &self.legal_conns[start..end]
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    /// Resolve an intersection by its unique name.
    pub fn lookup_by_name(&self, name: &str) -> Option<IntersectionId> {
        self.name_index.get(name).copied()
    }

    #[inline]
    pub fn name(&self, intersection: IntersectionId) -> &str {
        &self.names[intersection.index()]
    }

    #[inline]
    pub fn position(&self, intersection: IntersectionId) -> Point {
        self.positions[intersection.index()]
    }
}

// ── RoadNetworkBuilder ────────────────────────────────────────────────────────

/// Construct a [`RoadNetwork`] incrementally, then call [`build`](Self::build).
///
/// The builder accepts intersections and connections in any order.  `build()`
/// stable-sorts connections by source intersection, constructs the CSR
/// arrays, derives bearings and lengths from the endpoint positions, and
/// precomputes the no-left-turn legality table.
///
/// Intersection names must be unique; the text loader enforces this with a
/// proper error, direct builder use is expected to respect it.
///
/// # Example
///
/// ```
/// use rn_graph::RoadNetworkBuilder;
///
/// let mut b = RoadNetworkBuilder::new();
/// let a = b.add_intersection("A", 0.0, 0.0);
/// let c = b.add_intersection("B", 10.0, 0.0);
/// b.add_road(a, c);
/// let net = b.build();
/// assert_eq!(net.intersection_count(), 2);
/// assert_eq!(net.connection_count(), 2); // one per direction
/// ```
pub struct RoadNetworkBuilder {
    names:      Vec<String>,
    positions:  Vec<Point>,
    name_index: FxHashMap<String, IntersectionId>,
    raw_conns:  Vec<RawConnection>,
}

struct RawConnection {
    from: IntersectionId,
    to:   IntersectionId,
}

impl RoadNetworkBuilder {
    pub fn new() -> Self {
        Self {
            names:      Vec::new(),
            positions:  Vec::new(),
            name_index: FxHashMap::default(),
            raw_conns:  Vec::new(),
        }
    }

    /// Pre-allocate for the expected number of intersections and directed
    /// connections to reduce reallocations when bulk-loading from a file.
    pub fn with_capacity(intersections: usize, connections: usize) -> Self {
        Self {
            names:      Vec::with_capacity(intersections),
            positions:  Vec::with_capacity(intersections),
            name_index: FxHashMap::with_capacity_and_hasher(intersections, Default::default()),
            raw_conns:  Vec::with_capacity(connections),
        }
    }

    /// Add an intersection and return its `IntersectionId` (sequential from 0).
    pub fn add_intersection(&mut self, name: impl Into<String>, x: f64, y: f64) -> IntersectionId {
        let id = IntersectionId(self.positions.len() as u32);
        let name = name.into();
        self.name_index.entry(name.clone()).or_insert(id);
        self.names.push(name);
        self.positions.push(Point::new(x, y));
        id
    }

    /// Resolve a previously added intersection by name.
    pub fn lookup(&self, name: &str) -> Option<IntersectionId> {
        self.name_index.get(name).copied()
    }

    /// Add a **directed** connection from `from` to `to`.
    ///
    /// The text format never produces these on its own; they exist for
    /// hand-built networks (one-way streets in tests and experiments).
    pub fn add_one_way(&mut self, from: IntersectionId, to: IntersectionId) {
        self.raw_conns.push(RawConnection { from, to });
    }

    /// Add connections in **both directions** for an undirected road — the
    /// only kind the text format can express.
    pub fn add_road(&mut self, a: IntersectionId, b: IntersectionId) {
        self.add_one_way(a, b);
        self.add_one_way(b, a);
    }

    pub fn intersection_count(&self) -> usize {
        self.positions.len()
    }

    pub fn connection_count(&self) -> usize {
        self.raw_conns.len()
    }

    /// Consume the builder and produce a [`RoadNetwork`].
    ///
    /// Time complexity: O(C log C) for the connection sort plus O(C · d²) for
    /// the legality table, where d is the maximum intersection degree.
    pub fn build(self) -> RoadNetwork {
        let intersection_count = self.positions.len();
        let connection_count = self.raw_conns.len();

        // Stable sort by source: declaration order within an intersection is
        // part of the ordering contract.
        let mut raw = self.raw_conns;
        raw.sort_by_key(|c| c.from.0);

        let conn_from: Vec<IntersectionId> = raw.iter().map(|c| c.from).collect();
        let conn_to:   Vec<IntersectionId> = raw.iter().map(|c| c.to).collect();

        let conn_bearing: Vec<f64> = raw
            .iter()
            .map(|c| self.positions[c.from.index()].bearing_to(self.positions[c.to.index()]))
            .collect();
        let conn_length: Vec<f64> = raw
            .iter()
            .map(|c| self.positions[c.from.index()].distance(self.positions[c.to.index()]))
            .collect();

        // Build CSR row pointer (out_start).
        let mut out_start = vec![0u32; intersection_count + 1];
        for c in &raw {
            out_start[c.from.index() + 1] += 1;
        }
        for i in 1..=intersection_count {
            out_start[i] += out_start[i - 1];
        }
        debug_assert_eq!(out_start[intersection_count] as usize, connection_count);

        let mut net = RoadNetwork {
            names: self.names,
            positions: self.positions,
            out_start,
            conn_from,
            conn_to,
            conn_bearing,
            conn_length,
            legal_start: Vec::new(),
            legal_conns: Vec::new(),
            name_index: self.name_index,
        };

        // The graph is immutable from here on, so the legality table can be
        // computed once instead of being cached lazily per query.
        let (legal_start, legal_conns) = turns::build_legal_table(&net);
        net.legal_start = legal_start;
        net.legal_conns = legal_conns;
        net
    }
}

impl Default for RoadNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
