//! Best-first path search over immutable path states.
//!
//! # Algorithm
//!
//! The search expands a frontier of *path states* — immutable nodes in an
//! arena, each referencing the connection just taken and its parent state.
//! Each round removes the frontier entry with the smallest active-metric
//! value and expands it through the legal continuations of its arrival
//! connection (or the full outgoing set when unrestricted, and always for
//! the seed, which has no inbound direction).  Because every per-connection
//! metric delta is non-negative, the first extraction at the destination is
//! optimal.
//!
//! # Determinism
//!
//! Frontier ties break on earliest insertion: the minimum is found by a
//! linear scan keeping the *first* strict minimum, and removal shifts the
//! remainder without reordering.  A binary heap would be asymptotically
//! better but does not preserve this tie-break; keep the scan unless the
//! admission order is encoded into the priority.
//!
//! # Dominance
//!
//! Visited bookkeeping is keyed by the **exact inbound connection**, not the
//! arrival intersection: whether a future turn is legal depends on the
//! approach direction, so states arriving at the same intersection via
//! different connections are never compared.  A new state is admitted only
//! if it strictly beats every earlier state that arrived via the identical
//! connection; admitted values per connection therefore decrease strictly,
//! and remembering the best one is enough.

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;

use rn_core::{ConnectionId, IntersectionId, Metric};
use rn_graph::RoadNetwork;

use crate::route::{Route, RouteLeg};

// ── TurnRule ──────────────────────────────────────────────────────────────────

/// Whether a search honors the no-left-turn restriction.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnRule {
    /// Expansion is limited to each connection's legal continuations.
    #[default]
    NoLeftTurns,
    /// Expansion uses the full outgoing set; the legality table is ignored.
    Unrestricted,
}

// ── Path states ───────────────────────────────────────────────────────────────

/// Arena index sentinel for the seed state.
const NO_PARENT: u32 = u32::MAX;

/// One node of the persistent route chain.  States are append-only; many
/// frontier entries may share an ancestor chain.
#[derive(Copy, Clone)]
struct PathState {
    /// Connection just taken; `INVALID` for the seed (no inbound direction).
    conn: ConnectionId,
    /// Arena index of the extended state; `NO_PARENT` for the seed.
    parent: u32,
    /// Arrival intersection.
    at: IntersectionId,
    hops: u32,
    length: f64,
    turns: u32,
}

impl PathState {
    /// The running total of the active metric, as a float so all three
    /// metrics compare uniformly.
    fn metric_value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Hops     => self.hops as f64,
            Metric::Distance => self.length,
            Metric::Turns    => self.turns as f64,
        }
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Find an optimal route from `from` to `to` under `metric`.
///
/// All three running metrics are tracked regardless of which is minimized.
/// Returns `None` when the frontier is exhausted without reaching `to` — a
/// normal outcome on disconnected or heavily restricted networks, not an
/// error.  `from == to` yields a trivial (empty-leg) route.
pub fn find_path(
    net: &RoadNetwork,
    from: IntersectionId,
    to: IntersectionId,
    metric: Metric,
    rule: TurnRule,
) -> Option<Route> {
    let seed = PathState {
        conn:   ConnectionId::INVALID,
        parent: NO_PARENT,
        at:     from,
        hops:   0,
        length: 0.0,
        turns:  0,
    };
    let mut arena: Vec<PathState> = vec![seed];
    let mut frontier: Vec<u32> = vec![0];

    // Best admitted metric value per exact inbound connection.
    let mut best_via: FxHashMap<ConnectionId, f64> = FxHashMap::default();

    // Reused expansion buffer.
    let mut outbound: Vec<ConnectionId> = Vec::new();

    while !frontier.is_empty() {
        let state_idx = extract_first_min(&mut frontier, &arena, metric);
        let state = arena[state_idx as usize];

        if state.at == to {
            return Some(reconstruct(&arena, state_idx, from));
        }

        outbound.clear();
        let started = state.conn != ConnectionId::INVALID;
        if started && rule == TurnRule::NoLeftTurns {
            outbound.extend_from_slice(net.legal_out(state.conn));
        } else {
            outbound.extend(net.out_connections(state.at));
        }

        for &conn in &outbound {
            let turned = started
                && net.conn_bearing[state.conn.index()] != net.conn_bearing[conn.index()];
            let child = PathState {
                conn,
                parent: state_idx,
                at:     net.conn_to[conn.index()],
                hops:   state.hops + 1,
                length: state.length + net.conn_length[conn.index()],
                turns:  state.turns + u32::from(turned),
            };
            let value = child.metric_value(metric);

            match best_via.entry(conn) {
                Entry::Occupied(mut e) => {
                    // An earlier state via this exact connection is at least
                    // as good — discard the newcomer.
                    if *e.get() <= value {
                        continue;
                    }
                    e.insert(value);
                }
                Entry::Vacant(e) => {
                    e.insert(value);
                }
            }

            frontier.push(arena.len() as u32);
            arena.push(child);
        }
    }

    None
}

// ── Internals ─────────────────────────────────────────────────────────────────

/// Remove and return the frontier entry with the smallest metric value,
/// breaking ties in favor of the earliest-inserted entry.
fn extract_first_min(frontier: &mut Vec<u32>, arena: &[PathState], metric: Metric) -> u32 {
    let mut min_pos = 0;
    let mut min_value = arena[frontier[0] as usize].metric_value(metric);
    for (pos, &idx) in frontier.iter().enumerate().skip(1) {
        let value = arena[idx as usize].metric_value(metric);
        if value < min_value {
            min_pos = pos;
            min_value = value;
        }
    }
    // Order-preserving removal: the relative order of survivors is the
    // tie-break, so no swap_remove here.
    frontier.remove(min_pos)
}

/// Walk the parent chain from `goal` back to the seed and reverse it.
fn reconstruct(arena: &[PathState], goal: u32, start: IntersectionId) -> Route {
    let mut legs = Vec::new();
    let mut idx = goal;
    loop {
        let state = arena[idx as usize];
        if state.parent == NO_PARENT {
            break;
        }
        legs.push(RouteLeg {
            conn:   state.conn,
            hops:   state.hops,
            length: state.length,
            turns:  state.turns,
        });
        idx = state.parent;
    }
    legs.reverse();
    Route { start, legs }
}
