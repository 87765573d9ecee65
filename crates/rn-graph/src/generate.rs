//! Seeded random network generator.
//!
//! Produces the **text format**, not a graph: the output is fed through the
//! loader like any other network file, so generated networks exercise the
//! exact same construction path.  Useful for stress-testing the all-pairs
//! analyses on something bigger than a hand-built fixture.

use rustc_hash::FxHashSet;

use rn_core::NetRng;

/// Generate a random road network in the text format.
///
/// `count` intersections, named by index, are placed at uniform integer
/// coordinates in `[0, width)²`.  Each intersection proposes a road to its
/// `neighbors` nearest other intersections, each proposal surviving with
/// probability 0.9; opposite duplicates are then removed so every road
/// appears once.  Deterministic for a given seed.
///
/// Isolated intersections are possible (all proposals dropped); the loader
/// accepts them, and reachability analysis will report them as witnesses.
pub fn generate_network_text(
    rng: &mut NetRng,
    count: usize,
    width: u32,
    neighbors: usize,
) -> String {
    use std::fmt::Write;

    let coords: Vec<(i64, i64)> = (0..count)
        .map(|_| {
            (
                rng.gen_range(0..width) as i64,
                rng.gen_range(0..width) as i64,
            )
        })
        .collect();

    // Propose roads to the nearest `neighbors` intersections.
    let mut proposals: Vec<(usize, usize)> = Vec::new();
    for i in 0..count {
        let mut order: Vec<usize> = (0..count).filter(|&j| j != i).collect();
        order.sort_by_key(|&j| dist2(coords[i], coords[j]));
        for &j in order.iter().take(neighbors) {
            if rng.gen_bool(0.9) {
                proposals.push((i, j));
            }
        }
    }

    // Each undirected road may have been proposed from both ends; keep the
    // first proposal and drop its mirror.
    let mut seen: FxHashSet<(usize, usize)> = FxHashSet::default();
    let mut roads: Vec<(usize, usize)> = Vec::new();
    for (a, b) in proposals {
        if seen.contains(&(b, a)) {
            continue;
        }
        seen.insert((a, b));
        roads.push((a, b));
    }

    let mut out = String::new();
    let _ = writeln!(out, "{} {}", count, roads.len());
    for (i, (x, y)) in coords.iter().enumerate() {
        let _ = writeln!(out, "{i} {x} {y}");
    }
    let _ = writeln!(out, "{}", roads.len());
    for (a, b) in roads {
        let _ = writeln!(out, "{a} {b}");
    }
    out
}

fn dist2(a: (i64, i64), b: (i64, i64)) -> i64 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    dx * dx + dy * dy
}
