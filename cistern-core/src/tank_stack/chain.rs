use std::collections::VecDeque;
use std::sync::Arc;

use smallvec::SmallVec;

use super::entity::{TankEntity, TankRef, can_tanks_connect};
use crate::types::{BlockPos, Direction};

/// Resolves which tank entity, if any, occupies a position. Injected by
/// the host so the core never touches a concrete world representation.
pub trait NeighborResolver: Send + Sync {
    /// The tank entity at `pos`, if one exists there.
    fn tank_at(&self, pos: BlockPos) -> Option<TankRef>;
}

/// An ordered run of connected tanks, bottom to top.
pub type TankChain = SmallVec<[TankRef; 8]>;

/// Discovers the maximal chain of mutually-connected tanks through
/// `origin`, ordered bottom to top.
///
/// The walk probes outward from the origin in each direction and stops
/// at the first missing neighbour or refused connection; a chain never
/// skips over a gap. Every tank is at least its own singleton chain.
/// The result is never cached: the topology belongs to the resolver and
/// may have changed since the last call. The walk itself never mutates
/// tank state.
pub fn discover_chain(resolver: &dyn NeighborResolver, origin: &TankRef) -> TankChain {
    // Double-ended queue rather than a vec to avoid the copy operation
    // when we search downwards.
    let mut tanks: VecDeque<TankRef> = VecDeque::new();
    tanks.push_back(Arc::clone(origin));
    walk(resolver, origin, Direction::Up, &mut tanks);
    walk(resolver, origin, Direction::Down, &mut tanks);
    tanks.into_iter().collect()
}

fn walk(
    resolver: &dyn NeighborResolver,
    origin: &TankRef,
    direction: Direction,
    tanks: &mut VecDeque<TankRef>,
) {
    let mut prev = Arc::clone(origin);
    loop {
        let next_pos = prev.lock().block_pos().offset(direction);
        let Some(next) = resolver.tank_at(next_pos) else {
            break;
        };
        // A resolver handing back a tank we already walked would create
        // a duplicate entry; treat it as the end of the chain.
        if tanks.iter().any(|t| Arc::ptr_eq(t, &next)) {
            break;
        }
        let connects = {
            let from = prev.lock();
            let to = next.lock();
            can_tanks_connect(&*from, &*to, direction)
        };
        if !connects {
            break;
        }
        match direction {
            Direction::Up => tanks.push_back(Arc::clone(&next)),
            Direction::Down => tanks.push_front(Arc::clone(&next)),
        }
        prev = next;
    }
}

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;

    use super::*;
    use crate::fluid::Tank;
    use crate::tank_stack::entity::TankEntity;
    use crate::tank_stack::grid::GridResolver;

    struct PlainTank {
        pos: BlockPos,
        tank: Tank,
    }

    impl PlainTank {
        fn at_height(y: i32) -> TankRef {
            Arc::new(Mutex::new(Self {
                pos: BlockPos::new(0, y, 0),
                tank: Tank::new(1000),
            }))
        }
    }

    impl TankEntity for PlainTank {
        fn tank(&self) -> &Tank {
            &self.tank
        }

        fn tank_mut(&mut self) -> &mut Tank {
            &mut self.tank
        }

        fn block_pos(&self) -> BlockPos {
            self.pos
        }
    }

    /// A tank that refuses every connection from its own side.
    struct SealedTank {
        pos: BlockPos,
        tank: Tank,
    }

    impl TankEntity for SealedTank {
        fn tank(&self) -> &Tank {
            &self.tank
        }

        fn tank_mut(&mut self) -> &mut Tank {
            &mut self.tank
        }

        fn block_pos(&self) -> BlockPos {
            self.pos
        }

        fn can_connect_to(&self, _other: &dyn TankEntity, _direction: Direction) -> bool {
            false
        }
    }

    #[test]
    fn test_singleton_chain() {
        let mut resolver = GridResolver::new();
        let tank = PlainTank::at_height(0);
        resolver.insert(Arc::clone(&tank));

        let chain = discover_chain(&resolver, &tank);
        assert_eq!(chain.len(), 1);
        assert!(Arc::ptr_eq(&chain[0], &tank));
    }

    #[test]
    fn test_chain_ordered_bottom_to_top_from_any_origin() {
        let mut resolver = GridResolver::new();
        let tanks: Vec<TankRef> = (0..4).map(PlainTank::at_height).collect();
        for tank in &tanks {
            resolver.insert(Arc::clone(tank));
        }

        for origin in &tanks {
            let chain = discover_chain(&resolver, origin);
            assert_eq!(chain.len(), 4);
            for (i, tank) in tanks.iter().enumerate() {
                assert!(Arc::ptr_eq(&chain[i], tank));
            }
        }
    }

    #[test]
    fn test_chain_stops_at_gap() {
        let mut resolver = GridResolver::new();
        let bottom = PlainTank::at_height(0);
        let detached = PlainTank::at_height(2);
        resolver.insert(Arc::clone(&bottom));
        resolver.insert(Arc::clone(&detached));

        let chain = discover_chain(&resolver, &bottom);
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn test_chain_respects_asymmetric_refusal() {
        let mut resolver = GridResolver::new();
        let bottom = PlainTank::at_height(0);
        let sealed: TankRef = Arc::new(Mutex::new(SealedTank {
            pos: BlockPos::new(0, 1, 0),
            tank: Tank::new(1000),
        }));
        let top = PlainTank::at_height(2);
        resolver.insert(Arc::clone(&bottom));
        resolver.insert(Arc::clone(&sealed));
        resolver.insert(Arc::clone(&top));

        // The sealed tank refuses from its side, so the check fails in
        // one direction and the chain must not include it, nor skip
        // over it to reach the tank above.
        let chain = discover_chain(&resolver, &bottom);
        assert_eq!(chain.len(), 1);

        // Seen from the sealed tank itself, the chain is a singleton.
        let chain = discover_chain(&resolver, &sealed);
        assert_eq!(chain.len(), 1);
    }
}
