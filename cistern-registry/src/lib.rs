//! Fluid identity registry for the cistern fluid accounting core.
//!
//! Fluids are registered once at startup, frozen, and from then on only
//! looked up. The rest of the workspace refers to fluids by [`FluidId`]
//! and resolves properties (name, gaseous flag) through [`REGISTRY`].

use std::sync::LazyLock;

pub mod fluid;

pub use fluid::{FluidEntry, FluidId, FluidRegistry, vanilla};

/// Volume of one bucket, in the integer units all tanks account in.
pub const BUCKET_VOLUME: i32 = 1000;

/// Trait for registries that can be frozen after startup registration.
pub trait RegistryExt {
    /// Disallows any further registration.
    fn freeze(&mut self);
}

/// The collection of all registries.
pub struct Registry {
    /// The fluid registry.
    pub fluids: FluidRegistry,
}

/// The process-wide registry, populated with the built-in fluids and
/// frozen before first use.
pub static REGISTRY: LazyLock<Registry> = LazyLock::new(|| {
    let mut fluids = FluidRegistry::new();
    vanilla::register_defaults(&mut fluids);
    fluids.freeze();
    Registry { fluids }
});
