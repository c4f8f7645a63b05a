//! Stacked-tank logic: chain discovery and chain-level fluid routing.
//!
//! Tanks stacked along the vertical axis act as one logical reservoir.
//! The chain is rediscovered from the origin tank on every operation;
//! nothing here caches topology, since the world that determines
//! adjacency is owned by the caller behind a [`NeighborResolver`].

mod chain;
mod entity;
mod grid;
mod router;

pub use chain::{NeighborResolver, TankChain, discover_chain};
pub use entity::{
    InteractionSource, TankBlockEntity, TankEntity, TankRef, can_tanks_connect,
};
pub use grid::GridResolver;
pub use router::{
    TankProperties, aggregate_properties, balance, comparator_level, drain, fill, on_placed,
};
