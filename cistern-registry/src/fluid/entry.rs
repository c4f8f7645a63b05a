/// Fluid ID - an opaque token distinguishing fluid kinds. Amounts never
/// live here; quantity is the tank's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FluidId(pub u16);

impl FluidId {
    /// Returns true if this is the empty fluid.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

/// A registered fluid and its physical properties.
pub struct FluidEntry {
    /// The fluid's registry ID.
    pub id: FluidId,
    /// The fluid's name.
    pub name: &'static str,
    /// Whether this fluid rises (prefers upper tanks) rather than
    /// settles (prefers lower tanks).
    pub gaseous: bool,
}
