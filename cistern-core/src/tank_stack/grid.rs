use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::chain::NeighborResolver;
use super::entity::{TankEntity, TankRef};
use crate::types::BlockPos;

/// A map-backed [`NeighborResolver`] for hosts that keep their tank
/// entities in memory, and for tests.
#[derive(Default)]
pub struct GridResolver {
    tanks: FxHashMap<BlockPos, TankRef>,
}

impl GridResolver {
    /// Creates an empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a tank entity at its own reported position, replacing
    /// whatever was there.
    pub fn insert(&mut self, tank: TankRef) {
        let pos = tank.lock().block_pos();
        self.tanks.insert(pos, tank);
    }

    /// Removes the tank entity at `pos`.
    pub fn remove(&mut self, pos: BlockPos) -> Option<TankRef> {
        self.tanks.remove(&pos)
    }
}

impl NeighborResolver for GridResolver {
    fn tank_at(&self, pos: BlockPos) -> Option<TankRef> {
        self.tanks.get(&pos).map(Arc::clone)
    }
}
