//! Route-cost metric selector shared by the search and analysis crates.

/// Which running cost a path search minimizes.
///
/// Every path state tracks all three values regardless of the active metric,
/// so callers may inspect the others on the returned route.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Metric {
    /// Fewest road segments.
    #[default]
    Hops,
    /// Shortest cumulative Euclidean length.
    Distance,
    /// Fewest changes of direction.
    Turns,
}

impl Metric {
    /// All metrics, in selector order — handy for sweeps over every metric.
    pub const ALL: [Metric; 3] = [Metric::Hops, Metric::Distance, Metric::Turns];

    /// Human-readable label, useful for table output and log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Hops     => "hops",
            Metric::Distance => "distance",
            Metric::Turns    => "turns",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
