// Wrapper types making it harder to accidentaly use the wrong underlying type.

/// A block position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockPos {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate (the tank-stacking axis).
    pub y: i32,
    /// Z coordinate.
    pub z: i32,
}

impl BlockPos {
    /// Creates a new block position.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Returns the position one step in the given direction.
    #[must_use]
    pub const fn offset(self, direction: Direction) -> Self {
        Self {
            x: self.x,
            y: self.y + direction.dy(),
            z: self.z,
        }
    }
}

/// A direction along the tank-stacking axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards positive Y.
    Up,
    /// Towards negative Y.
    Down,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// The Y offset of one step in this direction.
    #[must_use]
    pub const fn dy(self) -> i32 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_and_opposite() {
        let pos = BlockPos::new(3, 10, -2);
        assert_eq!(pos.offset(Direction::Up), BlockPos::new(3, 11, -2));
        assert_eq!(pos.offset(Direction::Down), BlockPos::new(3, 9, -2));
        assert_eq!(Direction::Up.opposite(), Direction::Down);
    }
}
