//! What an agent step did.
//!
//! The driver only needs to know that a step succeeded; outcomes exist for
//! logging and tests.

use bg_core::PlantId;

/// Result of one agent step.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Outcome {
    /// The agent has nothing left to decide (an enrolled contributor).
    Idle,

    /// The agent considered acting and stopped.
    Skipped(SkipReason),

    /// A prospect founded `plant` with `contributors` pooled neighbours.
    Built { plant: PlantId, contributors: usize },

    /// An owner grew `plant` by `additional` LSU.
    Upgraded { plant: PlantId, additional: f64, contributors: usize },

    /// A plant paid `amount` to its owner.
    Paid { plant: PlantId, amount: f64 },
}

/// Why a build or upgrade attempt stopped.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum SkipReason {
    /// The cubic willingness gate did not fire.
    Gate,
    /// Pooled capacity is below `MIN_SIZE`.
    TooSmall,
    /// Pooled capacity is above `MAX_SIZE` even with the pool emptied.
    TooLarge,
    /// Expected utility is below `utility_min_threshold`.
    LowUtility,
    /// The final probability draw failed.
    Declined,
    /// No willing prospect neighbours to add to a plant.
    NoCandidates,
    /// The added capacity would not reach a larger size class.
    NoClassChange,
    /// The upgraded plant would exceed `MAX_SIZE`.
    OverCapacity,
}
