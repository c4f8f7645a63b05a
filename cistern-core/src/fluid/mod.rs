//! Fluid value types and the single-tank primitives.

mod stack;
mod tank;
mod util;

pub use stack::FluidStack;
pub use tank::Tank;
pub use util::move_fluid;
