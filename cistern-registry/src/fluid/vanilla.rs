//! Built-in fluid definitions.

use super::{FluidEntry, FluidId};

/// Water.
pub const WATER: FluidEntry = FluidEntry {
    id: FluidId::WATER,
    name: "water",
    gaseous: false,
};

/// Steam. The only built-in gaseous fluid.
pub const STEAM: FluidEntry = FluidEntry {
    id: FluidId::STEAM,
    name: "steam",
    gaseous: true,
};

/// Lava.
pub const LAVA: FluidEntry = FluidEntry {
    id: FluidId::LAVA,
    name: "lava",
    gaseous: false,
};

/// Oil.
pub const OIL: FluidEntry = FluidEntry {
    id: FluidId::OIL,
    name: "oil",
    gaseous: false,
};

/// Fuel.
pub const FUEL: FluidEntry = FluidEntry {
    id: FluidId::FUEL,
    name: "fuel",
    gaseous: false,
};

/// Registers all built-in fluids into the given registry.
pub fn register_defaults(registry: &mut super::FluidRegistry) {
    registry.register(WATER);
    registry.register(STEAM);
    registry.register(LAVA);
    registry.register(OIL);
    registry.register(FUEL);
}
