//! planner — demo driver for the rust_rn routing engine.
//!
//! Loads a network (a file path given as the first argument, or the embedded
//! sample town), then runs the full query surface: one route per metric with
//! and without the no-left-turn rule, the all-pairs reachability check, and
//! the worst-degradation pair per metric.
//!
//! ```text
//! planner [network.txt [FROM TO]]
//! ```
//!
//! The two analyses issue O(V²) searches each — on large generated networks
//! expect them to dominate the runtime.

mod network;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};

use rn_core::{IntersectionId, Metric};
use rn_graph::{RoadNetwork, load_network_path, load_network_str};
use rn_route::{
    Reachability, Route, TurnRule, check_all_reachable, find_path, worst_degradation,
};

use network::SAMPLE_NETWORK;

// ── Defaults for the embedded sample ──────────────────────────────────────────

const SAMPLE_FROM: &str = "Mill";
const SAMPLE_TO:   &str = "Church";

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    // 1. Load the network.
    let net = match args.first() {
        Some(path) => load_network_path(Path::new(path))
            .with_context(|| format!("loading network from {path}"))?,
        None => load_network_str(SAMPLE_NETWORK)?,
    };
    if net.intersection_count() < 2 {
        bail!("network has fewer than two intersections; nothing to route");
    }

    println!("=== planner — routing without left turns ===");
    println!(
        "Network: {} intersections, {} directed connections",
        net.intersection_count(),
        net.connection_count()
    );
    println!();

    // 2. Pick route endpoints: names from the command line, sample defaults,
    //    or the first/last intersection of a loaded file.
    let (from, to) = endpoints(&net, &args)?;
    println!("Routes {} -> {}", net.name(from), net.name(to));
    println!(
        "{:<10} {:<14} {:>5} {:>9} {:>6}  stops",
        "metric", "rule", "hops", "length", "turns"
    );
    for metric in Metric::ALL {
        for (rule, label) in [
            (TurnRule::NoLeftTurns, "no left turns"),
            (TurnRule::Unrestricted, "unrestricted"),
        ] {
            match find_path(&net, from, to, metric, rule) {
                Some(route) => println!(
                    "{:<10} {:<14} {:>5} {:>9.2} {:>6}  {}",
                    metric.as_str(),
                    label,
                    route.hops(),
                    route.total_length(),
                    route.turns(),
                    stops(&net, &route),
                ),
                None => println!("{:<10} {:<14}  no route", metric.as_str(), label),
            }
        }
    }
    println!();

    // 3. All-pairs reachability under the restriction.
    let t0 = Instant::now();
    match check_all_reachable(&net) {
        Reachability::AllReachable => {
            println!("Reachability: every intersection reaches every other one");
        }
        Reachability::Unreachable { from, to } => {
            println!(
                "Reachability: {} cannot be reached from {} (check aborted)",
                net.name(to),
                net.name(from)
            );
        }
    }
    println!("  ({:.3} s)", t0.elapsed().as_secs_f64());
    println!();

    // 4. Worst degradation per metric.
    for metric in Metric::ALL {
        let t0 = Instant::now();
        match worst_degradation(&net, metric) {
            Some(worst) => println!(
                "Worst {} degradation: {} -> {} becomes {:.2}x as costly  ({:.3} s)",
                metric,
                net.name(worst.from),
                net.name(worst.to),
                worst.factor,
                t0.elapsed().as_secs_f64(),
            ),
            None => println!("Worst {metric} degradation: no routable pair"),
        }
    }

    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn endpoints(net: &RoadNetwork, args: &[String]) -> Result<(IntersectionId, IntersectionId)> {
    let resolve = |name: &str| {
        net.lookup_by_name(name)
            .ok_or_else(|| anyhow::anyhow!("no intersection named {name:?}"))
    };
    match args {
        [_, from, to, ..] => Ok((resolve(from)?, resolve(to)?)),
        [] => Ok((resolve(SAMPLE_FROM)?, resolve(SAMPLE_TO)?)),
        // File given but no endpoints: route across the id range.
        _ => Ok((
            IntersectionId(0),
            IntersectionId(net.intersection_count() as u32 - 1),
        )),
    }
}

fn stops(net: &RoadNetwork, route: &Route) -> String {
    route
        .arrivals(net)
        .iter()
        .map(|&i| net.name(i))
        .collect::<Vec<_>>()
        .join(" -> ")
}
