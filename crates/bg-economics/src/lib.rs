//! `bg-economics`: pure functions of plant capacity.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`size`]      | `PlantType`, `size_class`, capacity bounds                |
//! | [`power`]     | `power_kw`, `capital_cost`, `tariff`, `annual_revenue`    |
//! | [`utility`]   | `UtilityInputs`, `utility`, `sigmoid`                     |
//!
//! Capacities are in livestock units (LSU); money is in a single unnamed
//! currency; power in kW; tariffs in currency per kWh.
//!
//! Nothing here can fail.  Degenerate inputs to [`utility`] produce the
//! [`UTILITY_NEVER_BUILD`] sentinel instead of an error.

pub mod power;
pub mod size;
pub mod utility;


pub use power::{annual_revenue, capital_cost, power_kw, tariff, HOURS_PER_YEAR};
pub use size::{size_class, PlantType, MAX_SIZE, MIN_SIZE};
pub use utility::{sigmoid, utility, UtilityInputs, MAINTENANCE_SHARE_OF_CAPEX, UTILITY_NEVER_BUILD};
