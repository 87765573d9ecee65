//! All-pairs batch analyses built on repeated path searches.
//!
//! Both sweeps issue up to `O(V²)` searches and run to completion on the
//! calling thread; there is no cancellation.  Hosts offering these on big
//! networks should warn their users first — that gating is deliberately not
//! done here.  Progress is visible at `log::debug!` level, one line per
//! source intersection.

use rn_core::{IntersectionId, Metric};
use rn_graph::RoadNetwork;

use crate::search::{TurnRule, find_path};

// ── Reachability ──────────────────────────────────────────────────────────────

/// Result of the all-pairs reachability check.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Reachability {
    /// Every intersection reaches every other under the restriction.
    AllReachable,
    /// Fail-fast witness: `to` cannot be reached from `from`.
    Unreachable {
        from: IntersectionId,
        to: IntersectionId,
    },
}

/// Check whether every intersection is reachable from every other one under
/// the no-left-turn rule.
///
/// Pairs are visited source-ascending, destination-descending (so the
/// reported witness is reproducible).  Every found route certifies all of
/// its suffix pairs as reachable — reaching the 3rd stop from the 1st also
/// proves the 3rd is reachable from the 2nd — which prunes a large share of
/// the `O(V²)` searches on well-connected networks.
pub fn check_all_reachable(net: &RoadNetwork) -> Reachability {
    let n = net.intersection_count();
    // Dense n×n "known reachable" matrix, indexed from*n + to.
    let mut known = vec![false; n * n];

    for i in 0..n {
        for j in (0..n).rev() {
            if i == j || known[i * n + j] {
                continue;
            }
            let from = IntersectionId(i as u32);
            let to = IntersectionId(j as u32);
            match find_path(net, from, to, Metric::Hops, TurnRule::NoLeftTurns) {
                None => return Reachability::Unreachable { from, to },
                Some(route) => {
                    let stops = route.arrivals(net);
                    for k in 0..stops.len() {
                        for l in (k + 1)..stops.len() {
                            known[stops[k].index() * n + stops[l].index()] = true;
                        }
                    }
                }
            }
        }
        log::debug!("reachability: checked sources {}/{n}", i + 1);
    }

    Reachability::AllReachable
}

// ── Degradation ───────────────────────────────────────────────────────────────

/// The ordered pair whose optimal route degrades most under the restriction.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Degradation {
    pub from: IntersectionId,
    pub to: IntersectionId,
    /// Restricted optimum divided by unrestricted optimum on the chosen
    /// metric.  May be non-finite: a zero-valued unrestricted total (e.g. a
    /// turn-free baseline under [`Metric::Turns`]) makes the ratio ∞ or NaN,
    /// and the value is propagated as-is.
    pub factor: f64,
}

/// Find the ordered pair with the worst restricted/unrestricted cost ratio.
///
/// Pairs the restriction disconnects entirely are skipped — severed
/// connectivity is not a finite degradation.  Returns `None` only when no
/// pair qualifies at all (fewer than two intersections, or nothing routable
/// under the restriction).
///
/// A NaN candidate never displaces the current maximum (the comparison is
/// false), but it can *become* the maximum when it is the first qualifying
/// pair; callers must handle non-finite factors explicitly.
pub fn worst_degradation(net: &RoadNetwork, metric: Metric) -> Option<Degradation> {
    let n = net.intersection_count();
    let mut worst: Option<Degradation> = None;

    for i in 0..n {
        for j in (0..n).rev() {
            if i == j {
                continue;
            }
            let from = IntersectionId(i as u32);
            let to = IntersectionId(j as u32);

            let unrestricted = find_path(net, from, to, metric, TurnRule::Unrestricted);
            let restricted = find_path(net, from, to, metric, TurnRule::NoLeftTurns);
            // No restricted route → the restriction severed the pair (and if
            // even the unrestricted search failed, there is nothing to rate).
            let (Some(unrestricted), Some(restricted)) = (unrestricted, restricted) else {
                continue;
            };

            let factor = restricted.metric_total(metric) / unrestricted.metric_total(metric);
            if worst.as_ref().is_none_or(|w| w.factor < factor) {
                worst = Some(Degradation { from, to, factor });
            }
        }
        log::debug!("degradation ({metric}): checked sources {}/{n}", i + 1);
    }

    worst
}
