//! # Cistern
//!
//! The in-memory accounting core for stackable fluid tanks.
//!
//! A tank is one capacity-bounded slot holding at most one fluid kind.
//! Vertically adjacent tanks that agree to connect form a chain that
//! behaves as a single logical reservoir: filling prefers the bottom
//! (or the top, for gaseous fluids), draining works from the opposite
//! end, and a balance pass packs everything toward the preferred end
//! after structural changes.
//!
//! The world itself stays outside this crate: callers inject a
//! [`tank_stack::NeighborResolver`] and hold tanks behind
//! [`tank_stack::TankRef`] handles. Chains are rediscovered on every
//! operation since the surrounding topology is externally owned.

pub mod config;
pub mod fluid;
pub mod tank_stack;
pub mod types;

pub use fluid::{FluidStack, Tank};
pub use types::{BlockPos, Direction};
