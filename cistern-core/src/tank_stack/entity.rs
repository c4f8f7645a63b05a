use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::CISTERN_CONFIG;
use crate::fluid::Tank;
use crate::types::{BlockPos, Direction};

/// Who caused a fluid change. Threaded explicitly through every commit
/// path so the notification hook can decide how urgently to replicate;
/// there is no process-wide "a player is interacting" flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionSource {
    /// A direct player interaction, e.g. a bucket used on the tank.
    Player,
    /// Pipes, machines, scheduled rebalancing.
    Automation,
}

/// A shared handle to a tank-holding entity.
pub type TankRef = Arc<Mutex<dyn TankEntity>>;

/// An entity that hosts a single [`Tank`] and can take part in a
/// vertical tank stack.
pub trait TankEntity: Send + Sync {
    /// The hosted tank.
    fn tank(&self) -> &Tank;

    /// The hosted tank, mutably.
    fn tank_mut(&mut self) -> &mut Tank;

    /// The entity's position in the host world.
    fn block_pos(&self) -> BlockPos;

    /// Whether this entity is willing to connect to `other`, which sits
    /// one step in `direction` from it. Connections only form when both
    /// sides agree, see [`can_tanks_connect`].
    fn can_connect_to(&self, _other: &dyn TankEntity, _direction: Direction) -> bool {
        true
    }

    /// Called after a committed operation changed this entity's tank.
    fn on_fluid_changed(&mut self, _source: InteractionSource) {}
}

/// Symmetric connectivity check: true only if both entities agree to
/// connect, each asked from its own side.
///
/// `direction` points from `from` to `to`.
#[must_use]
pub fn can_tanks_connect(
    from: &dyn TankEntity,
    to: &dyn TankEntity,
    direction: Direction,
) -> bool {
    from.can_connect_to(to, direction) && to.can_connect_to(from, direction.opposite())
}

/// The standard tank block entity.
///
/// Tracks a changed flag for the host's replication layer and the last
/// reported comparator level so [`TankBlockEntity::tick`] only marks
/// the entity changed when the discretized level actually moves.
pub struct TankBlockEntity {
    pos: BlockPos,
    tank: Tank,
    changed: bool,
    needs_sync: bool,
    last_comparator_level: i32,
}

impl TankBlockEntity {
    /// Creates a tank entity with the configured default capacity.
    #[must_use]
    pub fn new(pos: BlockPos) -> Self {
        Self::with_capacity(pos, CISTERN_CONFIG.tank_capacity())
    }

    /// Creates a tank entity with an explicit capacity.
    ///
    /// # Panics
    /// Panics if `capacity` is not positive.
    #[must_use]
    pub fn with_capacity(pos: BlockPos, capacity: i32) -> Self {
        Self {
            pos,
            tank: Tank::new(capacity),
            changed: false,
            needs_sync: false,
            last_comparator_level: 0,
        }
    }

    /// The comparator signal for this single tank.
    #[must_use]
    pub fn comparator_level(&self) -> i32 {
        self.tank.comparator_level()
    }

    /// Per-tick upkeep: marks the entity changed when the comparator
    /// level crossed a threshold since the last tick.
    pub fn tick(&mut self) {
        let level = self.tank.comparator_level();
        if level != self.last_comparator_level {
            self.last_comparator_level = level;
            self.changed = true;
        }
    }

    /// Whether the entity has changed since the flag was last cleared.
    #[must_use]
    pub fn has_changed(&self) -> bool {
        self.changed
    }

    /// Whether a player-sourced change is waiting for immediate
    /// replication.
    #[must_use]
    pub fn needs_sync(&self) -> bool {
        self.needs_sync
    }

    /// Clears the changed and sync flags.
    pub fn clear_changed(&mut self) {
        self.changed = false;
        self.needs_sync = false;
    }
}

impl TankEntity for TankBlockEntity {
    fn tank(&self) -> &Tank {
        &self.tank
    }

    fn tank_mut(&mut self) -> &mut Tank {
        &mut self.tank
    }

    fn block_pos(&self) -> BlockPos {
        self.pos
    }

    fn on_fluid_changed(&mut self, source: InteractionSource) {
        self.changed = true;
        // Player-driven changes replicate immediately, everything else
        // waits for the regular dirty sweep.
        if source == InteractionSource::Player {
            self.needs_sync = true;
        }
        log::trace!("tank at {:?} changed ({source:?})", self.pos);
    }
}

#[cfg(test)]
mod tests {
    use cistern_registry::FluidId;

    use super::*;
    use crate::fluid::FluidStack;

    #[test]
    fn test_tick_tracks_comparator_level() {
        let mut entity = TankBlockEntity::with_capacity(BlockPos::new(0, 0, 0), 1000);
        entity.tick();
        assert!(!entity.has_changed());

        entity
            .tank_mut()
            .fill(&FluidStack::new(FluidId::WATER, 500), true);
        entity.tick();
        assert!(entity.has_changed());

        // Same level again, no further change.
        entity.clear_changed();
        entity.tick();
        assert!(!entity.has_changed());
    }

    #[test]
    fn test_player_changes_request_sync() {
        let mut entity = TankBlockEntity::with_capacity(BlockPos::new(0, 0, 0), 1000);
        entity.on_fluid_changed(InteractionSource::Automation);
        assert!(entity.has_changed());
        assert!(!entity.needs_sync());

        entity.on_fluid_changed(InteractionSource::Player);
        assert!(entity.needs_sync());
    }
}
