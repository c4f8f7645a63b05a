use rustc_hash::FxHashMap;

use super::{FluidEntry, FluidId};
use crate::RegistryExt;

/// Registry of all known fluids, indexed by ID and by name.
pub struct FluidRegistry {
    by_id: FxHashMap<FluidId, FluidEntry>,
    by_name: FxHashMap<&'static str, FluidId>,
    allows_registering: bool,
}

impl FluidRegistry {
    /// Creates an empty, unfrozen registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            by_id: FxHashMap::default(),
            by_name: FxHashMap::default(),
            allows_registering: true,
        }
    }

    /// Registers a fluid.
    ///
    /// # Panics
    /// Panics if the registry has been frozen.
    pub fn register(&mut self, entry: FluidEntry) {
        assert!(
            self.allows_registering,
            "Cannot register fluid after registry is frozen"
        );
        self.by_name.insert(entry.name, entry.id);
        self.by_id.insert(entry.id, entry);
    }

    /// Looks up a fluid by ID.
    #[must_use]
    pub fn get(&self, id: FluidId) -> Option<&FluidEntry> {
        self.by_id.get(&id)
    }

    /// Looks up a fluid ID by name.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<FluidId> {
        self.by_name.get(name).copied()
    }

    /// Returns whether the given fluid is gaseous. Unknown fluids are
    /// treated as liquids.
    #[must_use]
    pub fn is_gaseous(&self, id: FluidId) -> bool {
        self.by_id.get(&id).is_some_and(|entry| entry.gaseous)
    }
}

impl Default for FluidRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryExt for FluidRegistry {
    fn freeze(&mut self) {
        self.allows_registering = false;
    }
}
