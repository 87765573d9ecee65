//! `rn-graph` — road-network model, loading, and turn legality.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`network`]  | `RoadNetwork` (CSR adjacency), `RoadNetworkBuilder`        |
//! | [`turns`]    | No-left-turn legality table, built eagerly at build time   |
//! | [`loader`]   | Network text-format parser and serializer                  |
//! | [`generate`] | Seeded random network generator (emits the text format)    |
//! | [`error`]    | `NetError`, `NetResult<T>`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod generate;
pub mod loader;
pub mod network;
pub mod turns;

#[cfg(test)]
mod tests;

pub use error::{NetError, NetResult};
pub use generate::generate_network_text;
pub use loader::{load_network_path, load_network_reader, load_network_str};
pub use network::{RoadNetwork, RoadNetworkBuilder};
