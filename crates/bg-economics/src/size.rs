//! Plant size classes.

/// Smallest plant that may be built, in LSU.
pub const MIN_SIZE: f64 = 75.0;

/// Largest plant that may exist, in LSU, at creation and after upgrades.
pub const MAX_SIZE: f64 = 850.0;

/// Upper bound (inclusive) of the SMALL class, in LSU.
pub const SMALL_MAX: f64 = 100.0;

/// Upper bound (inclusive) of the MEDIUM class, in LSU.
pub const MEDIUM_MAX: f64 = 600.0;

/// Size class of a plant.  Ordered: `Small < Medium < Large`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlantType {
    Small,
    Medium,
    Large,
}

impl PlantType {
    /// Human-readable label.
    pub fn as_str(self) -> &'static str {
        match self {
            PlantType::Small  => "small",
            PlantType::Medium => "medium",
            PlantType::Large  => "large",
        }
    }
}

impl std::fmt::Display for PlantType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify `capacity`: `≤ 100` → Small, `≤ 600` → Medium, else Large.
#[inline]
pub fn size_class(capacity: f64) -> PlantType {
    if capacity <= SMALL_MAX {
        PlantType::Small
    } else if capacity <= MEDIUM_MAX {
        PlantType::Medium
    } else {
        PlantType::Large
    }
}
