//! Planar coordinate type and turn-angle utilities.
//!
//! Networks live on an abstract plane, not a geodetic datum: coordinates are
//! plain `f64` pairs and distances are Euclidean.  The y axis follows the
//! screen/map-file convention (+y downward), so a positive bearing delta is a
//! clockwise — that is, rightward — turn.

use std::f64::consts::{PI, TAU};

/// A planar coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Bearing of the direction from `self` to `other`, as
    /// `atan2(Δy, Δx)` in radians.  Pointing toward +x is 0.
    #[inline]
    pub fn bearing_to(self, other: Point) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Turn angles ───────────────────────────────────────────────────────────────

/// Signed turn angle between an inbound bearing and an outbound bearing,
/// normalized into `(−π, π]`.
///
/// Positive values are rightward turns (straight ahead is 0), negative values
/// are leftward turns.  This convention is the authoritative one for turn
/// legality; an exact reversal normalizes to `+π`.
#[inline]
pub fn signed_turn(inbound_bearing: f64, outbound_bearing: f64) -> f64 {
    let d = (outbound_bearing - inbound_bearing).rem_euclid(TAU);
    if d > PI { d - TAU } else { d }
}
