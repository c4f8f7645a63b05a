use cistern_registry::FluidId;

use super::FluidStack;

/// One capacity-bounded fluid slot.
///
/// A tank holds at most one fluid kind at a time. All mutation goes
/// through [`Tank::fill`] and [`Tank::drain`], both of which take a
/// commit flag: when it is false the operation only reports what it
/// would have done.
#[derive(Debug)]
pub struct Tank {
    capacity: i32,
    fluid: Option<FluidStack>,
}

impl Tank {
    /// Creates an empty tank.
    ///
    /// # Panics
    /// Panics if `capacity` is not positive.
    #[must_use]
    pub fn new(capacity: i32) -> Self {
        assert!(capacity > 0, "tank capacity must be positive");
        Self {
            capacity,
            fluid: None,
        }
    }

    /// The tank's capacity. Fixed for the tank's lifetime.
    #[must_use]
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// The held fluid, if any.
    #[must_use]
    pub fn fluid(&self) -> Option<&FluidStack> {
        self.fluid.as_ref()
    }

    /// The held amount, 0 when empty.
    #[must_use]
    pub fn amount(&self) -> i32 {
        self.fluid.as_ref().map_or(0, |f| f.amount)
    }

    /// Returns true if the tank holds no fluid.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fluid.is_none()
    }

    /// Replaces the tank's contents directly. Zero and negative amounts
    /// normalize to an empty tank.
    pub fn set_fluid(&mut self, fluid: Option<FluidStack>) {
        match fluid {
            Some(stack) if stack.amount > 0 => {
                debug_assert!(stack.amount <= self.capacity);
                self.fluid = Some(stack);
            }
            _ => self.fluid = None,
        }
    }

    /// Tries to put `resource` into the tank, returning the accepted
    /// amount.
    ///
    /// An empty tank accepts any fluid up to its capacity; a non-empty
    /// tank only accepts more of the fluid it already holds, up to the
    /// remaining headroom. Returns 0 on a fluid mismatch or a
    /// non-positive resource amount. Without `do_fill` the tank is left
    /// untouched and only the would-be accepted amount is returned.
    pub fn fill(&mut self, resource: &FluidStack, do_fill: bool) -> i32 {
        if resource.amount <= 0 {
            return 0;
        }
        match &mut self.fluid {
            None => {
                let filled = resource.amount.min(self.capacity);
                if do_fill {
                    self.fluid = Some(FluidStack::new(resource.fluid, filled));
                }
                filled
            }
            Some(held) => {
                if !held.is_fluid_equal(resource) {
                    return 0;
                }
                let filled = resource.amount.min(self.capacity - held.amount);
                if do_fill {
                    held.amount += filled;
                }
                filled
            }
        }
    }

    /// Tries to take up to `max_drain` of the held fluid, if the filter
    /// accepts it.
    ///
    /// Returns `None` when the tank is empty, the filter rejects the
    /// held fluid, or `max_drain` is not positive. Without `do_drain`
    /// the tank is left untouched. Draining the last unit clears the
    /// tank back to empty.
    pub fn drain<F>(&mut self, filter: F, max_drain: i32, do_drain: bool) -> Option<FluidStack>
    where
        F: Fn(FluidId) -> bool,
    {
        if max_drain <= 0 {
            return None;
        }
        let held = self.fluid.as_mut()?;
        if !filter(held.fluid) {
            return None;
        }
        let drained = max_drain.min(held.amount);
        let result = FluidStack::new(held.fluid, drained);
        if do_drain {
            held.amount -= drained;
            if held.amount == 0 {
                self.fluid = None;
            }
        }
        Some(result)
    }

    /// A coarse 0-15 discretization of the fill fraction, for the
    /// external comparator-style signal. The exact thresholds matter
    /// downstream: one unit of fluid already reads as level 1.
    #[must_use]
    pub fn comparator_level(&self) -> i32 {
        let amount = self.amount();
        (amount * 14 / self.capacity + i32::from(amount > 0)).clamp(0, 15)
    }
}
