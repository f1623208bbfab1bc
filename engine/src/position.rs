use std::fmt;

use glam::{ivec2, IVec2};

use crate::Dir;

/// Map cell coordinates with a facing.
///
/// Out-of-map coordinates are representable, the map decides what they
/// mean.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct Position {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
    pub facing: Dir,
}

impl Position {
    pub fn new(x: i32, y: i32, facing: Dir) -> Self {
        Position { x, y, facing }
    }

    pub fn cell(&self) -> IVec2 {
        ivec2(self.x, self.y)
    }

    fn moved(&self, d: IVec2) -> Position {
        Position {
            x: self.x + d.x,
            y: self.y + d.y,
            facing: self.facing,
        }
    }

    /// Same cell, turned 90 degrees counter-clockwise.
    pub fn left_facing(&self) -> Position {
        Position {
            facing: self.facing.left(),
            ..*self
        }
    }

    /// Same cell, turned 90 degrees clockwise.
    pub fn right_facing(&self) -> Position {
        Position {
            facing: self.facing.right(),
            ..*self
        }
    }

    /// Same cell, turned around.
    pub fn reversed(&self) -> Position {
        self.left_facing().left_facing()
    }

    /// Cell `steps` forward along the current facing.
    pub fn ahead(&self, steps: i32) -> Position {
        self.moved(self.facing.vec() * steps)
    }

    pub fn behind(&self, steps: i32) -> Position {
        self.ahead(-steps)
    }

    /// Cell `steps` to the left of the current facing, facing unchanged.
    pub fn step_left(&self, steps: i32) -> Position {
        self.moved(self.facing.left().vec() * steps)
    }

    pub fn step_right(&self, steps: i32) -> Position {
        self.moved(self.facing.right().vec() * steps)
    }

    pub fn copy_from(&mut self, other: &Position) {
        *self = *other;
    }

    /// Rectangle containment test, bounds are included in the rectangle if
    /// `inclusive` is set.
    pub fn in_bounds(
        &self,
        left: i32,
        top: i32,
        right: i32,
        bottom: i32,
        inclusive: bool,
    ) -> bool {
        let (x, y) = (self.x, self.y);
        if inclusive {
            x >= left && y >= top && x <= right && y <= bottom
        } else {
            x > left && y > top && x < right && y < bottom
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) {}", self.x, self.y, self.facing)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Position {
    fn arbitrary(g: &mut quickcheck::Gen) -> Position {
        // Keep coordinates small enough that stepping never overflows.
        Position::new(
            i16::arbitrary(g) as i32,
            i16::arbitrary(g) as i32,
            Dir::arbitrary(g),
        )
    }
}
