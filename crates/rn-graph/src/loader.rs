//! Network text-format parser and serializer.
//!
//! # Format
//!
//! ```text
//! line 1:            <intersectionCount> <connectionCount>
//! lines 2..(1+N):    <name> <x> <y>          (N = intersectionCount)
//! line (2+N):        <connectionCount>        (must equal the line-1 value)
//! lines (3+N)..end:  <nameA> <nameB>          (one line per undirected road)
//! ```
//!
//! Lines whose first character is `#` are comments and are stripped before
//! interpretation; error line numbers always refer to the unstripped input.
//! Coordinates parse as `f64`.  Each road line produces two opposite
//! connections.  Intersection names are unique keys; a road line referencing
//! an unknown (or re-declared) name aborts the load.
//!
//! A failed load returns an error and nothing else — there is no partially
//! constructed network to observe.

use std::io::Read;
use std::path::Path;

use crate::network::{RoadNetwork, RoadNetworkBuilder};
use crate::{NetError, NetResult};

// ── Public entry points ───────────────────────────────────────────────────────

/// Load a road network from a file.
pub fn load_network_path(path: &Path) -> NetResult<RoadNetwork> {
    let file = std::fs::File::open(path)?;
    load_network_reader(file)
}

/// Like [`load_network_path`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from embedded
/// strings.
pub fn load_network_reader<R: Read>(mut reader: R) -> NetResult<RoadNetwork> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    load_network_str(&input)
}

/// Parse a road network from text in the format above.
pub fn load_network_str(input: &str) -> NetResult<RoadNetwork> {
    // Strip comments but remember original 1-based line numbers.
    let lines: Vec<(usize, &str)> = input
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l))
        .filter(|(_, l)| !l.starts_with('#'))
        .collect();

    // ── Header ────────────────────────────────────────────────────────────
    let (header_line, header) = line_at(&lines, 0, "the header")?;
    let mut tokens = header.split_whitespace();
    let intersection_count = parse_count(tokens.next(), header_line)?;
    let road_count = parse_count(tokens.next(), header_line)?;

    // ── Intersections ─────────────────────────────────────────────────────
    let mut builder = RoadNetworkBuilder::with_capacity(intersection_count, road_count * 2);
    for i in 0..intersection_count {
        let (line, text) = line_at(&lines, 1 + i, "intersections")?;
        let mut tokens = text.split_whitespace();
        let name = tokens.next().ok_or(NetError::Intersection { line })?;
        let x = parse_coord(tokens.next(), line)?;
        let y = parse_coord(tokens.next(), line)?;
        if builder.lookup(name).is_some() {
            return Err(NetError::DuplicateName { line, name: name.to_string() });
        }
        builder.add_intersection(name, x, y);
    }

    // ── Repeated road count ───────────────────────────────────────────────
    let (line, text) = line_at(&lines, 1 + intersection_count, "the road count")?;
    let repeated: usize = text
        .trim()
        .parse()
        .map_err(|_| NetError::RoadCount { line })?;
    if repeated != road_count {
        return Err(NetError::CountMismatch { line, expected: road_count, found: repeated });
    }

    // ── Roads ─────────────────────────────────────────────────────────────
    for i in 0..road_count {
        let (line, text) = line_at(&lines, 2 + intersection_count + i, "roads")?;
        let mut tokens = text.split_whitespace();
        let name_a = tokens.next().ok_or(NetError::Road { line })?;
        let name_b = tokens.next().ok_or(NetError::Road { line })?;
        let a = resolve(&builder, name_a, line)?;
        let b = resolve(&builder, name_b, line)?;
        builder.add_road(a, b);
    }

    let net = builder.build();
    log::info!(
        "loaded road network: {} intersections, {} roads ({} directed connections)",
        net.intersection_count(),
        road_count,
        net.connection_count(),
    );
    Ok(net)
}

// ── Serializer ────────────────────────────────────────────────────────────────

impl RoadNetwork {
    /// Serialize back into the text format.
    ///
    /// Reloading the output reproduces names, coordinates, and adjacency
    /// (id assignment order is not contracted).  Only meaningful for networks
    /// whose connections come in opposite pairs, as produced by the loader —
    /// hand-built one-way connections fall outside what the format can say.
    pub fn to_network_text(&self) -> String {
        use std::fmt::Write;

        // One line per undirected road: keep the direction with the smaller
        // source id, its mirror is implied.
        let roads: Vec<usize> = (0..self.connection_count())
            .filter(|&c| self.conn_from[c] < self.conn_to[c])
            .collect();

        let mut out = String::new();
        let _ = writeln!(out, "{} {}", self.intersection_count(), roads.len());
        for i in 0..self.intersection_count() {
            let p = self.positions[i];
            let _ = writeln!(out, "{} {} {}", self.names[i], p.x, p.y);
        }
        let _ = writeln!(out, "{}", roads.len());
        for c in roads {
            let _ = writeln!(
                out,
                "{} {}",
                self.names[self.conn_from[c].index()],
                self.names[self.conn_to[c].index()],
            );
        }
        out
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn line_at<'a>(
    lines: &[(usize, &'a str)],
    idx: usize,
    wanted: &'static str,
) -> NetResult<(usize, &'a str)> {
    lines.get(idx).copied().ok_or(NetError::Truncated { wanted })
}

fn parse_count(token: Option<&str>, line: usize) -> NetResult<usize> {
    token
        .and_then(|t| t.parse().ok())
        .ok_or(NetError::Header { line })
}

fn parse_coord(token: Option<&str>, line: usize) -> NetResult<f64> {
    token
        .and_then(|t| t.parse().ok())
        .ok_or(NetError::Intersection { line })
}

fn resolve(
    builder: &RoadNetworkBuilder,
    name: &str,
    line: usize,
) -> NetResult<rn_core::IntersectionId> {
    builder
        .lookup(name)
        .ok_or_else(|| NetError::UnknownIntersection { line, name: name.to_string() })
}
