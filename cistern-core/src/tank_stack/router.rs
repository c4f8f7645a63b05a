use cistern_registry::FluidId;

use super::chain::{NeighborResolver, discover_chain};
use super::entity::{InteractionSource, TankEntity, TankRef};
use crate::config::CISTERN_CONFIG;
use crate::fluid::{FluidStack, move_fluid};

/// The aggregate view of a whole chain: what the stack reports as one
/// virtual tank. Never stored anywhere, always recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TankProperties {
    /// Summed capacity of every tank in the chain.
    pub capacity: i32,
    /// Summed amount over the non-empty tanks.
    pub amount: i32,
    /// The fluid held by the chain, if any tank is non-empty. All
    /// non-empty tanks hold the same fluid by construction.
    pub fluid: Option<FluidId>,
}

/// Fills the chain through `origin` with `resource`, returning the
/// accepted amount.
///
/// If any tank in the chain already holds a different fluid the whole
/// chain rejects the fill and 0 is returned; capacity shortage is not a
/// rejection, the overflow is simply left with the caller. Gaseous
/// fluids fill top-down, everything else bottom-up. Without `do_fill`
/// nothing is mutated and the would-be accepted amount is returned.
pub fn fill(
    resolver: &dyn NeighborResolver,
    origin: &TankRef,
    resource: &FluidStack,
    do_fill: bool,
    source: InteractionSource,
) -> i32 {
    if resource.amount <= 0 {
        return 0;
    }
    let mut tanks = discover_chain(resolver, origin);
    for tank in &tanks {
        let guard = tank.lock();
        if let Some(held) = guard.tank().fluid()
            && !held.is_fluid_equal(resource)
        {
            return 0;
        }
    }
    if resource.is_gaseous() {
        tanks.reverse();
    }
    let mut remaining = resource.amount;
    let mut filled = 0;
    for tank in &tanks {
        let mut guard = tank.lock();
        let accepted = guard
            .tank_mut()
            .fill(&FluidStack::new(resource.fluid, remaining), do_fill);
        if accepted > 0 {
            if do_fill {
                guard.on_fluid_changed(source);
            }
            remaining -= accepted;
            filled += accepted;
            if remaining == 0 {
                break;
            }
        }
    }
    filled
}

/// Drains up to `max_drain` of whatever fluid in the chain passes the
/// filter, merging the sub-drains into one stack.
///
/// The walk order is the mirror of the fill order: it reverses the
/// bottom-to-top chain unless the first held fluid is gaseous, so
/// draining takes from the end opposite to where filling adds. Returns
/// `None` when nothing at all was drained.
pub fn drain<F>(
    resolver: &dyn NeighborResolver,
    origin: &TankRef,
    filter: F,
    max_drain: i32,
    do_drain: bool,
    source: InteractionSource,
) -> Option<FluidStack>
where
    F: Fn(FluidId) -> bool,
{
    if max_drain <= 0 {
        return None;
    }
    let mut tanks = discover_chain(resolver, origin);
    let mut gas = false;
    for tank in &tanks {
        if let Some(held) = tank.lock().tank().fluid() {
            gas = held.is_gaseous();
            break;
        }
    }
    if !gas {
        tanks.reverse();
    }
    let mut total: Option<FluidStack> = None;
    for tank in &tanks {
        let real_max = max_drain - total.as_ref().map_or(0, |t| t.amount);
        if real_max <= 0 {
            break;
        }
        let mut guard = tank.lock();
        let Some(drained) = guard.tank_mut().drain(&filter, real_max, do_drain) else {
            continue;
        };
        if do_drain {
            guard.on_fluid_changed(source);
        }
        match &mut total {
            None => total = Some(drained),
            // Sub-drains past the first cannot change identity: tanks
            // only ever mix matching fluids.
            Some(total) => total.amount += drained.amount,
        }
    }
    total
}

/// Moves fluid around the chain to its preferred position: as high as
/// possible for gaseous fluids, as low as possible for everything else.
///
/// A no-op when the chain is entirely empty or holds more than one
/// distinct fluid. Adjacent-pair transfers repeat until a whole pass
/// moves nothing, leaving the fluid packed at the target end.
pub fn balance(resolver: &dyn NeighborResolver, origin: &TankRef, source: InteractionSource) {
    let mut tanks = discover_chain(resolver, origin);
    let mut fluid: Option<FluidStack> = None;
    for tank in &tanks {
        let guard = tank.lock();
        let Some(held) = guard.tank().fluid() else {
            continue;
        };
        match &fluid {
            None => fluid = Some(held.clone()),
            Some(first) => {
                if !first.is_fluid_equal(held) {
                    log::debug!(
                        "not balancing chain at {:?}: more than one fluid present",
                        guard.block_pos()
                    );
                    return;
                }
            }
        }
    }
    let Some(fluid) = fluid else {
        return;
    };
    if fluid.is_gaseous() {
        tanks.reverse();
    }
    loop {
        let mut moved_any = false;
        for pair in tanks.windows(2) {
            let mut to = pair[0].lock();
            let mut from = pair[1].lock();
            let moved = move_fluid(from.tank_mut(), to.tank_mut());
            if moved > 0 {
                from.on_fluid_changed(source);
                to.on_fluid_changed(source);
                moved_any = true;
            }
        }
        if !moved_any {
            break;
        }
    }
}

/// Host hook for a tank being spliced into the world: rebalances the
/// chain it joined, if configured to.
pub fn on_placed(resolver: &dyn NeighborResolver, origin: &TankRef, source: InteractionSource) {
    if CISTERN_CONFIG.balance_on_placement {
        balance(resolver, origin, source);
    }
}

/// Computes the aggregate view over the chain through `origin`.
///
/// Capacities sum unconditionally; amounts sum over the non-empty
/// tanks; the reported fluid comes from the first non-empty tank in
/// bottom-to-top order.
#[must_use]
pub fn aggregate_properties(resolver: &dyn NeighborResolver, origin: &TankRef) -> TankProperties {
    let tanks = discover_chain(resolver, origin);
    let mut properties = TankProperties {
        capacity: 0,
        amount: 0,
        fluid: None,
    };
    for tank in &tanks {
        let guard = tank.lock();
        properties.capacity += guard.tank().capacity();
        if let Some(held) = guard.tank().fluid() {
            properties.amount += held.amount;
            if properties.fluid.is_none() {
                properties.fluid = Some(held.fluid);
            }
        }
    }
    properties
}

/// The comparator signal for the origin tank alone. The signal is a
/// per-tank reading, not a chain aggregate.
#[must_use]
pub fn comparator_level(origin: &TankRef) -> i32 {
    origin.lock().tank().comparator_level()
}
