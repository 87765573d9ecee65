//! Embedded sample network used when no file is given on the command line.
//!
//! A small town (y grows downward/southward):
//!
//! ```text
//!   Harbor ─── Market ─── Mill
//!     │           │         │
//!   Park ───── Church ─── Depot
//! ```
//!
//! Driving Mill→Market, the turn onto Church is an illegal left (Harbor is
//! straight ahead), so restricted routes toward Church from the east loop
//! around through Harbor and Park — a visible degradation for the demo.

pub const SAMPLE_NETWORK: &str = "\
# demo town: main street with a southern loop
6 7
Harbor 0 0
Market 20 0
Mill 40 0
Church 20 20
Park 0 20
Depot 40 20
7
Harbor Market
Market Mill
Market Church
Harbor Park
Park Church
Church Depot
Mill Depot
";
