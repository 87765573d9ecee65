//! No-left-turn legality table.
//!
//! # The right-priority rule
//!
//! Arriving at an intersection via connection `inbound`, the legal
//! continuations are decided per candidate outgoing connection `c` from the
//! signed turn angle `signed_turn(inbound.bearing, c.bearing)` in `(−π, π]`
//! (positive = rightward, straight = 0):
//!
//! 1. A dead end (exactly one outgoing connection) permits everything,
//!    including the U-turn.
//! 2. The candidate leading straight back to `inbound`'s source is dropped —
//!    reversing counts as a left turn.
//! 3. `turn ≥ 0` (straight or right) is always legal.
//! 4. `turn < 0` (nominally left) is legal **only** when no other
//!    non-reversing candidate has a strictly larger turn value: the most
//!    rightward available continuation is never illegal, even if it
//!    geometrically bends left.
//!
//! A route's *start* has no inbound direction and is not covered here; the
//! search expands its seed state over the unfiltered outgoing set.
//!
//! Candidate order is preserved — the result is the destination's outgoing
//! list filtered in place.

use rn_core::{ConnectionId, signed_turn};

use crate::network::RoadNetwork;

/// Compute the legal-continuation table for every connection.
///
/// Returns `(legal_start, legal_conns)`: a CSR row pointer of length
/// `connection_count + 1` over a flat array of legal `ConnectionId`s.
/// Called once from [`RoadNetworkBuilder::build`](crate::RoadNetworkBuilder::build);
/// the network's own `legal_*` fields are still empty at that point.
pub(crate) fn build_legal_table(net: &RoadNetwork) -> (Vec<u32>, Vec<ConnectionId>) {
    let connection_count = net.connection_count();
    let mut legal_start = Vec::with_capacity(connection_count + 1);
    let mut legal_conns = Vec::new();

    legal_start.push(0u32);
    for c in 0..connection_count {
        legal_conns.extend(legal_continuations(net, ConnectionId(c as u32)));
        legal_start.push(legal_conns.len() as u32);
    }

    (legal_start, legal_conns)
}

/// Legal continuations of `inbound`, in candidate declaration order.
fn legal_continuations(
    net: &RoadNetwork,
    inbound: ConnectionId,
) -> impl Iterator<Item = ConnectionId> + '_ {
    let arrival = net.conn_to[inbound.index()];
    let reverse_target = net.conn_from[inbound.index()];
    let inbound_bearing = net.conn_bearing[inbound.index()];

    // Dead end: the only way onward is back the way we came.
    let dead_end = net.out_degree(arrival) == 1;

    net.out_connections(arrival).filter(move |&c| {
        if dead_end {
            return true;
        }
        if net.conn_to[c.index()] == reverse_target {
            return false;
        }
        let turn = signed_turn(inbound_bearing, net.conn_bearing[c.index()]);
        if turn >= 0.0 {
            return true;
        }
        // Nominally a left turn: legal only when nothing non-reversing is
        // more rightward.
        !net.out_connections(arrival).any(|other| {
            net.conn_to[other.index()] != reverse_target
                && signed_turn(inbound_bearing, net.conn_bearing[other.index()]) > turn
        })
    })
}
