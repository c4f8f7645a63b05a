//! Fluid identity types and their registry.

mod entry;
mod registry;
pub mod vanilla;

pub use entry::{FluidEntry, FluidId};
pub use registry::FluidRegistry;

impl FluidId {
    /// The empty fluid (ID: 0).
    pub const EMPTY: FluidId = FluidId(0);
    /// Water (ID: 1).
    pub const WATER: FluidId = FluidId(1);
    /// Steam (ID: 2).
    pub const STEAM: FluidId = FluidId(2);
    /// Lava (ID: 3).
    pub const LAVA: FluidId = FluidId(3);
    /// Oil (ID: 4).
    pub const OIL: FluidId = FluidId(4);
    /// Fuel (ID: 5).
    pub const FUEL: FluidId = FluidId(5);
}
