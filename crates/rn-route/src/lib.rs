//! `rn-route` — path search and network analyses under the no-left-turn rule.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`route`]    | `Route`, `RouteLeg` (per-leg cumulative metrics)          |
//! | [`search`]   | `find_path`, `TurnRule` — best-first multi-criteria search|
//! | [`analysis`] | `check_all_reachable`, `worst_degradation`                |
//!
//! # Result conventions
//!
//! "No route" is a value, not an error: `find_path` returns `Option`, the
//! reachability sweep returns the offending pair, and a degradation factor
//! may be non-finite (turn-count ratio against a zero-turn baseline) — all
//! are normal outcomes of a restricted graph, so nothing here returns
//! `Result`.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod analysis;
pub mod route;
pub mod search;


pub use analysis::{Degradation, Reachability, check_all_reachable, worst_degradation};
pub use route::{Route, RouteLeg};
pub use search::{TurnRule, find_path};
