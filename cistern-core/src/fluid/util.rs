use super::{FluidStack, Tank};

/// Moves as much fluid as possible from one tank into another,
/// returning the moved amount.
///
/// The transfer is simulate-then-commit: first the source reports what
/// it could give, then the destination reports what it would take, and
/// only that exact amount is committed on both sides. Returns 0 when
/// the tanks hold different fluids or the destination has no headroom.
pub fn move_fluid(from: &mut Tank, to: &mut Tank) -> i32 {
    let Some(available) = from.drain(|_| true, i32::MAX, false) else {
        return 0;
    };
    let accepted = to.fill(&available, false);
    if accepted <= 0 {
        return 0;
    }
    let Some(drained) = from.drain(|f| f == available.fluid, accepted, true) else {
        return 0;
    };
    debug_assert_eq!(drained.amount, accepted);
    to.fill(&drained, true)
}

#[cfg(test)]
mod tests {
    use cistern_registry::FluidId;

    use super::*;

    #[test]
    fn test_move_everything_that_fits() {
        let mut from = Tank::new(1000);
        let mut to = Tank::new(1000);
        from.fill(&FluidStack::new(FluidId::WATER, 600), true);
        to.fill(&FluidStack::new(FluidId::WATER, 700), true);

        assert_eq!(move_fluid(&mut from, &mut to), 300);
        assert_eq!(from.amount(), 300);
        assert_eq!(to.amount(), 1000);

        // Destination is now full, nothing further moves.
        assert_eq!(move_fluid(&mut from, &mut to), 0);
    }

    #[test]
    fn test_move_respects_fluid_identity() {
        let mut from = Tank::new(1000);
        let mut to = Tank::new(1000);
        from.fill(&FluidStack::new(FluidId::LAVA, 500), true);
        to.fill(&FluidStack::new(FluidId::WATER, 100), true);

        assert_eq!(move_fluid(&mut from, &mut to), 0);
        assert_eq!(from.amount(), 500);
        assert_eq!(to.amount(), 100);
    }

    #[test]
    fn test_move_from_empty_tank() {
        let mut from = Tank::new(1000);
        let mut to = Tank::new(1000);
        assert_eq!(move_fluid(&mut from, &mut to), 0);
    }
}
