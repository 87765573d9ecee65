//! Unit tests for rn-graph.
//!
//! All tests use hand-crafted networks or embedded text fixtures; nothing
//! touches the filesystem.

#[cfg(test)]
mod helpers {
    use rn_core::{ConnectionId, IntersectionId};

    use crate::{RoadNetwork, RoadNetworkBuilder};

    /// Four intersections on a single square loop (y grows downward):
    ///
    /// ```text
    ///   A(0,0) ── B(10,0)
    ///     │          │
    ///   D(0,10) ─ C(10,10)
    /// ```
    pub fn square_loop() -> (RoadNetwork, [IntersectionId; 4]) {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_intersection("A", 0.0, 0.0);
        let bb = b.add_intersection("B", 10.0, 0.0);
        let c = b.add_intersection("C", 10.0, 10.0);
        let d = b.add_intersection("D", 0.0, 10.0);
        b.add_road(a, bb);
        b.add_road(bb, c);
        b.add_road(c, d);
        b.add_road(d, a);
        (b.build(), [a, bb, c, d])
    }

    /// A T-shape with two dead ends (A and C) and a stem (D):
    ///
    /// ```text
    ///   A(0,0) ── B(10,0) ── C(20,0)
    ///                │
    ///             D(10,10)
    /// ```
    ///
    /// Driving C→B, continuing to D is a left turn with B→A available as the
    /// straighter alternative — so it is illegal.
    pub fn tee() -> (RoadNetwork, [IntersectionId; 4]) {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_intersection("A", 0.0, 0.0);
        let bb = b.add_intersection("B", 10.0, 0.0);
        let c = b.add_intersection("C", 20.0, 0.0);
        let d = b.add_intersection("D", 10.0, 10.0);
        b.add_road(a, bb);
        b.add_road(bb, c);
        b.add_road(bb, d);
        (b.build(), [a, bb, c, d])
    }

    /// The directed connection `from → to`, which must exist.
    pub fn conn(net: &RoadNetwork, from: &str, to: &str) -> ConnectionId {
        let f = net.lookup_by_name(from).unwrap();
        let t = net.lookup_by_name(to).unwrap();
        net.out_connections(f)
            .find(|&c| net.conn_to[c.index()] == t)
            .unwrap()
    }

    /// Destinations of `legal_out(inbound)` as names, preserving order.
    pub fn legal_names(net: &RoadNetwork, inbound: ConnectionId) -> Vec<String> {
        net.legal_out(inbound)
            .iter()
            .map(|&c| net.name(net.conn_to[c.index()]).to_string())
            .collect()
    }

    pub const SQUARE_TEXT: &str = "\
# a single square loop
4 4
A 0 0
B 10 0
C 10 10
D 0 10
# the count again, then the roads
4
A B
B C
C D
D A
";
}

// ── Builder & network structure ───────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use crate::RoadNetworkBuilder;

    #[test]
    fn empty_build() {
        let net = RoadNetworkBuilder::new().build();
        assert_eq!(net.intersection_count(), 0);
        assert_eq!(net.connection_count(), 0);
        assert!(net.is_empty());
    }

    #[test]
    fn road_is_bidirectional() {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_intersection("A", 0.0, 0.0);
        let c = b.add_intersection("B", 3.0, 4.0);
        b.add_road(a, c);
        let net = b.build();
        assert_eq!(net.connection_count(), 2);
        assert_eq!(net.out_degree(a), 1);
        assert_eq!(net.out_degree(c), 1);
        // Both directions have the 3-4-5 length.
        assert!((net.conn_length[0] - 5.0).abs() < 1e-12);
        assert!((net.conn_length[1] - 5.0).abs() < 1e-12);
    }

    #[test]
    fn one_way_has_no_return() {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_intersection("A", 0.0, 0.0);
        let c = b.add_intersection("B", 1.0, 0.0);
        b.add_one_way(a, c);
        let net = b.build();
        assert_eq!(net.connection_count(), 1);
        assert_eq!(net.out_degree(a), 1);
        assert_eq!(net.out_degree(c), 0);
    }

    #[test]
    fn declaration_order_preserved() {
        // The stable sort must keep each intersection's outgoing connections
        // in the order their roads were declared.
        let mut b = RoadNetworkBuilder::new();
        let s = b.add_intersection("S", 0.0, 0.0);
        let p = b.add_intersection("P", 10.0, 0.0);
        let q = b.add_intersection("Q", 0.0, 10.0);
        let r = b.add_intersection("R", -10.0, 0.0);
        b.add_road(s, p);
        b.add_road(s, q);
        b.add_road(s, r);
        let net = b.build();
        let dests: Vec<_> = net
            .out_connections(s)
            .map(|c| net.conn_to[c.index()])
            .collect();
        assert_eq!(dests, vec![p, q, r]);
    }

    #[test]
    fn lookup_by_name() {
        let (net, [a, ..]) = super::helpers::square_loop();
        assert_eq!(net.lookup_by_name("A"), Some(a));
        assert_eq!(net.lookup_by_name("Z"), None);
        assert_eq!(net.name(a), "A");
    }
}

// ── Geometry of built connections ─────────────────────────────────────────────

#[cfg(test)]
mod symmetry {
    use std::f64::consts::PI;

    use rn_core::signed_turn;

    use crate::load_network_str;

    #[test]
    fn every_road_yields_two_opposite_connections() {
        let net = load_network_str(super::helpers::SQUARE_TEXT).unwrap();
        assert_eq!(net.connection_count(), 8);

        for c in 0..net.connection_count() {
            // Find the mirror connection.
            let mirror = (0..net.connection_count())
                .find(|&m| {
                    net.conn_from[m] == net.conn_to[c] && net.conn_to[m] == net.conn_from[c]
                })
                .expect("each connection has a mirror");

            assert!(
                (net.conn_length[c] - net.conn_length[mirror]).abs() < 1e-12,
                "mirror lengths differ"
            );
            // Opposite bearings: the turn from one onto the other is an exact
            // reversal, which normalizes to +π.
            let turn = signed_turn(net.conn_bearing[c], net.conn_bearing[mirror]);
            assert!((turn - PI).abs() < 1e-9, "got turn {turn}");
        }
    }
}

// ── Turn filter ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod turn_filter {
    use super::helpers::{conn, legal_names, square_loop, tee};
    use crate::RoadNetworkBuilder;

    #[test]
    fn dead_end_permits_uturn() {
        let (net, _) = tee();
        // A and D are dead ends; arriving there always allows turning back.
        assert_eq!(legal_names(&net, conn(&net, "B", "A")), vec!["B"]);
        assert_eq!(legal_names(&net, conn(&net, "B", "D")), vec!["B"]);
    }

    #[test]
    fn no_double_reversal_at_through_intersections() {
        let (net, _) = tee();
        // Arriving at B (degree 3) never allows an immediate U-turn.
        for inbound in ["A", "C", "D"] {
            let legal = legal_names(&net, conn(&net, inbound, "B"));
            assert!(
                !legal.contains(&inbound.to_string()),
                "U-turn back to {inbound} should be illegal"
            );
        }
    }

    #[test]
    fn straight_and_right_are_kept() {
        let (net, _) = tee();
        // A→B: straight on to C, right (down) to D; both legal, in order.
        assert_eq!(legal_names(&net, conn(&net, "A", "B")), vec!["C", "D"]);
    }

    #[test]
    fn left_is_dropped_when_something_more_rightward_exists() {
        let (net, _) = tee();
        // C→B: straight on to A is legal, the left onto D is not.
        assert_eq!(legal_names(&net, conn(&net, "C", "B")), vec!["A"]);
    }

    #[test]
    fn most_rightward_candidate_is_legal_even_if_it_bends_left() {
        // S(0,0) — Y(15,5) — T(30,0): continuing Y→T bends left, but it is
        // the only non-reversing option, so it stays legal.
        let mut b = RoadNetworkBuilder::new();
        let s = b.add_intersection("S", 0.0, 0.0);
        let y = b.add_intersection("Y", 15.0, 5.0);
        let t = b.add_intersection("T", 30.0, 0.0);
        b.add_road(s, y);
        b.add_road(y, t);
        let net = b.build();
        assert_eq!(legal_names(&net, conn(&net, "S", "Y")), vec!["T"]);
    }

    #[test]
    fn tied_left_candidates_both_survive() {
        // Two exactly-parallel left options: neither is *strictly* more
        // rightward than the other, so both are legal.
        let mut b = RoadNetworkBuilder::new();
        let i = b.add_intersection("I", -10.0, 0.0);
        let x = b.add_intersection("X", 0.0, 0.0);
        let p = b.add_intersection("P", 20.0, -10.0);
        let q = b.add_intersection("Q", 30.0, -15.0);
        b.add_road(i, x);
        b.add_road(x, p);
        b.add_road(x, q);
        let net = b.build();
        assert_eq!(legal_names(&net, conn(&net, "I", "X")), vec!["P", "Q"]);
    }

    #[test]
    fn degree_two_loop_always_continues() {
        let (net, _) = square_loop();
        // Every intersection has degree 2: the sole non-reversing candidate
        // is always legal, in either travel direction around the loop.
        assert_eq!(legal_names(&net, conn(&net, "A", "B")), vec!["C"]);
        assert_eq!(legal_names(&net, conn(&net, "B", "C")), vec!["D"]);
        assert_eq!(legal_names(&net, conn(&net, "B", "A")), vec!["D"]);
        assert_eq!(legal_names(&net, conn(&net, "A", "D")), vec!["C"]);
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use super::helpers::SQUARE_TEXT;
    use crate::{NetError, load_network_reader, load_network_str};

    #[test]
    fn loads_square() {
        let net = load_network_str(SQUARE_TEXT).unwrap();
        assert_eq!(net.intersection_count(), 4);
        assert_eq!(net.connection_count(), 8);
        let b = net.lookup_by_name("B").unwrap();
        assert_eq!(net.position(b).x, 10.0);
        assert_eq!(net.position(b).y, 0.0);
        assert_eq!(net.out_degree(b), 2);
    }

    #[test]
    fn reader_source_works() {
        let net = load_network_reader(Cursor::new(SQUARE_TEXT)).unwrap();
        assert_eq!(net.intersection_count(), 4);
    }

    #[test]
    fn malformed_header() {
        let err = load_network_str("4 roads\n").unwrap_err();
        assert!(matches!(err, NetError::Header { line: 1 }));
    }

    #[test]
    fn malformed_coordinates() {
        let err = load_network_str("1 0\nA here 0\n0\n").unwrap_err();
        assert!(matches!(err, NetError::Intersection { line: 2 }));
    }

    #[test]
    fn count_mismatch() {
        let input = "2 1\nA 0 0\nB 1 0\n2\nA B\n";
        let err = load_network_str(input).unwrap_err();
        assert!(matches!(
            err,
            NetError::CountMismatch { line: 4, expected: 1, found: 2 }
        ));
    }

    #[test]
    fn malformed_road_count() {
        let input = "2 1\nA 0 0\nB 1 0\none\nA B\n";
        let err = load_network_str(input).unwrap_err();
        assert!(matches!(err, NetError::RoadCount { line: 4 }));
    }

    #[test]
    fn unknown_intersection_name() {
        let input = "2 1\nA 0 0\nB 1 0\n1\nA Z\n";
        let err = load_network_str(input).unwrap_err();
        match err {
            NetError::UnknownIntersection { line, name } => {
                assert_eq!(line, 5);
                assert_eq!(name, "Z");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicate_intersection_name() {
        let input = "2 0\nA 0 0\nA 1 0\n0\n";
        let err = load_network_str(input).unwrap_err();
        assert!(matches!(err, NetError::DuplicateName { line: 3, .. }));
    }

    #[test]
    fn truncated_input() {
        let err = load_network_str("3 2\nA 0 0\n").unwrap_err();
        assert!(matches!(err, NetError::Truncated { .. }));
    }

    #[test]
    fn malformed_road_line() {
        let input = "2 1\nA 0 0\nB 1 0\n1\nA\n";
        let err = load_network_str(input).unwrap_err();
        assert!(matches!(err, NetError::Road { line: 5 }));
    }

    #[test]
    fn error_lines_count_comments() {
        // The comment shifts the faulty road line to physical line 7.
        let input = "2 1\nA 0 0\nB 1 0\n1\n# roads follow\n# really\nA Z\n";
        let err = load_network_str(input).unwrap_err();
        assert!(matches!(err, NetError::UnknownIntersection { line: 7, .. }));
    }
}

// ── Text round trip ───────────────────────────────────────────────────────────

#[cfg(test)]
mod roundtrip {
    use std::collections::BTreeSet;

    use super::helpers::SQUARE_TEXT;
    use crate::{RoadNetwork, load_network_str};

    /// Name-based view of a network: (names with coordinates, undirected
    /// adjacency).  Ids are deliberately not part of the comparison.
    fn fingerprint(net: &RoadNetwork) -> (BTreeSet<String>, BTreeSet<(String, String)>) {
        let nodes = (0..net.intersection_count())
            .map(|i| {
                let p = net.positions[i];
                format!("{} {} {}", net.names[i], p.x, p.y)
            })
            .collect();
        let adjacency = (0..net.connection_count())
            .map(|c| {
                (
                    net.names[net.conn_from[c].index()].clone(),
                    net.names[net.conn_to[c].index()].clone(),
                )
            })
            .collect();
        (nodes, adjacency)
    }

    #[test]
    fn serialize_then_reload_is_identity() {
        let net = load_network_str(SQUARE_TEXT).unwrap();
        let text = net.to_network_text();
        let reloaded = load_network_str(&text).unwrap();
        assert_eq!(fingerprint(&net), fingerprint(&reloaded));
    }

    #[test]
    fn fractional_coordinates_survive() {
        let input = "2 1\nA 0.25 -3.5 \nB 1.75 2.125\n1\nA B\n";
        let net = load_network_str(input).unwrap();
        let reloaded = load_network_str(&net.to_network_text()).unwrap();
        assert_eq!(fingerprint(&net), fingerprint(&reloaded));
    }
}

// ── Generator ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod generate {
    use rn_core::NetRng;

    use crate::{generate_network_text, load_network_str};

    #[test]
    fn output_loads() {
        let mut rng = NetRng::new(7);
        let text = generate_network_text(&mut rng, 30, 50, 3);
        let net = load_network_str(&text).unwrap();
        assert_eq!(net.intersection_count(), 30);
        // Roads come back as connection pairs.
        assert_eq!(net.connection_count() % 2, 0);
    }

    #[test]
    fn deterministic_per_seed() {
        let a = generate_network_text(&mut NetRng::new(99), 20, 40, 2);
        let b = generate_network_text(&mut NetRng::new(99), 20, 40, 2);
        let c = generate_network_text(&mut NetRng::new(100), 20, 40, 2);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
