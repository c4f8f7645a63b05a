use cistern_registry::{FluidId, REGISTRY};

/// An amount of one fluid kind.
///
/// A stack with `amount == 0` means "no fluid"; tanks normalize such
/// stacks away rather than storing them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FluidStack {
    /// The fluid kind.
    pub fluid: FluidId,
    /// The amount, in bucket-volume units.
    pub amount: i32,
}

impl FluidStack {
    /// Creates a new fluid stack.
    #[must_use]
    pub const fn new(fluid: FluidId, amount: i32) -> Self {
        Self { fluid, amount }
    }

    /// Returns true if both stacks hold the same fluid kind. Amounts
    /// are irrelevant to this comparison.
    #[must_use]
    pub fn is_fluid_equal(&self, other: &FluidStack) -> bool {
        self.fluid == other.fluid
    }

    /// Returns whether this stack's fluid is gaseous.
    #[must_use]
    pub fn is_gaseous(&self) -> bool {
        REGISTRY.fluids.is_gaseous(self.fluid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fluid_equal_ignores_amount() {
        let a = FluidStack::new(FluidId::WATER, 100);
        let b = FluidStack::new(FluidId::WATER, 9000);
        let c = FluidStack::new(FluidId::LAVA, 100);
        assert!(a.is_fluid_equal(&b));
        assert!(!a.is_fluid_equal(&c));
    }

    #[test]
    fn test_gaseous_lookup() {
        assert!(FluidStack::new(FluidId::STEAM, 1).is_gaseous());
        assert!(!FluidStack::new(FluidId::WATER, 1).is_gaseous());
    }
}
