use glam::IVec2;
use strum::{Display, EnumIter};
use util::DIR_4;

/// Cardinal facing, in clockwise order.
///
/// Used both for which way the player is looking and for which face of a
/// map cell a wall sits on.
#[derive(
    Copy, Clone, Default, Eq, PartialEq, Hash, Debug, Display, EnumIter,
)]
pub enum Dir {
    #[default]
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

use Dir::*;

impl Dir {
    /// Convert any integer to a facing, modulo 4.
    pub fn from_index(i: i32) -> Dir {
        match i.rem_euclid(4) {
            0 => North,
            1 => East,
            2 => South,
            _ => West,
        }
    }

    pub fn idx(self) -> usize {
        self as usize
    }

    /// Rotate by a number of clockwise quarter turns.
    pub fn turn(self, quarter_turns: i32) -> Dir {
        Dir::from_index(self as i32 + quarter_turns)
    }

    /// Counter-clockwise neighbor.
    pub fn left(self) -> Dir {
        self.turn(3)
    }

    /// Clockwise neighbor.
    pub fn right(self) -> Dir {
        self.turn(1)
    }

    pub fn opposite(self) -> Dir {
        self.turn(2)
    }

    /// Unit step in map space. Rows grow southwards.
    pub fn vec(self) -> IVec2 {
        DIR_4[self.idx()]
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Dir {
    fn arbitrary(g: &mut quickcheck::Gen) -> Dir {
        Dir::from_index(i32::arbitrary(g))
    }
}
