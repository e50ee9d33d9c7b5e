//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys, lattice
//! occupants, and sorted collection elements without ceremony.  The inner
//! integer is `pub` to allow direct indexing into the world's `Vec`s via
//! `id.0 as usize`, but callers should prefer the `.index()` helpers.
//!
//! Farmers and plants never own each other: every back-reference (farmer →
//! owned plant, plant → owner, plant → contributors) is one of these handles.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a farmer in the world's farmer table.
    pub struct FarmerId(u32);
}

typed_id! {
    /// Index of a biogas plant in the world's plant table.
    pub struct PlantId(u32);
}

/// Any agent the driver can step.
///
/// The driver shuffles a `Vec<AgentRef>` every tick and dispatches on the
/// variant; farmers and plants share no type hierarchy.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentRef {
    Farmer(FarmerId),
    Plant(PlantId),
}

impl fmt::Display for AgentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentRef::Farmer(id) => id.fmt(f),
            AgentRef::Plant(id)  => id.fmt(f),
        }
    }
}
