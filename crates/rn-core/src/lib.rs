//! `rn-core` — foundational types for the `rust_rn` routing engine.
//!
//! This crate is a dependency of every other `rn-*` crate.  It intentionally
//! has no `rn-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`ids`]      | `IntersectionId`, `ConnectionId`                      |
//! | [`geom`]     | `Point`, bearings, signed turn angles                 |
//! | [`metric`]   | `Metric` enum (hops / distance / turns)               |
//! | [`rng`]      | `NetRng` (deterministic network generation RNG)       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod geom;
pub mod ids;
pub mod metric;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geom::{Point, signed_turn};
pub use ids::{ConnectionId, IntersectionId};
pub use metric::Metric;
pub use rng::NetRng;
