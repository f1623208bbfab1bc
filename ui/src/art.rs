//! Pre-rendered wall sprites and where on the view they go.

use std::path::Path;

use engine::WallId;
use glam::{ivec2, IVec2};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::Buffer;

/// How many cells ahead have wall art, depth rank 0 is the nearest.
pub const VISIBLE_DEPTH: usize = 3;

/// The offset tables are in unscaled art pixels, the sprites are drawn at
/// this many screen pixels per art pixel.
const SCALE: i32 = 4;

/// Art directories for each wall type, in wall id order starting from 1.
pub const WALL_FAMILIES: [&str; 4] =
    ["first_wall", "stone_wall", "wood_wall", "metal_wall"];

/// Which way a wall sprite is seen from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display, EnumIter)]
pub enum Side {
    /// Wall straight across the view.
    Front,
    /// Receding side wall on the left.
    Left,
    /// Receding side wall on the right.
    Right,
}

impl Side {
    /// File name prefix for sprites of this side.
    fn prefix(self) -> char {
        match self {
            Side::Front => 'f',
            Side::Left => 'l',
            Side::Right => 'r',
        }
    }

    /// Screen position of the top left corner of a sprite.
    pub fn offset(self, rank: usize, lateral: i32) -> IVec2 {
        match self {
            Side::Front => ivec2(
                offset_x_center(rank, lateral),
                offset_y_center(rank, lateral),
            ),
            Side::Left => ivec2(
                offset_x_left(rank, lateral),
                offset_y_left(rank, lateral),
            ),
            Side::Right => ivec2(
                offset_x_right(rank, lateral),
                offset_y_right(rank, lateral),
            ),
        }
    }
}

/// Horizontal position of a front-facing wall. `lateral` counts cells to the
/// right of the view axis, negative to the left.
pub fn offset_x_center(rank: usize, lateral: i32) -> i32 {
    SCALE
        * match rank {
            0 => 6 + lateral * 63,
            1 => 17 + lateral * 41,
            2 => 23 + lateral * 29,
            _ => 0,
        }
}

pub fn offset_x_left(rank: usize, _lateral: i32) -> i32 {
    SCALE
        * match rank {
            0 => 0,
            1 => 6,
            2 => 17,
            _ => 0,
        }
}

pub fn offset_x_right(rank: usize, _lateral: i32) -> i32 {
    SCALE
        * match rank {
            0 => 69,
            1 => 58,
            2 => 52,
            _ => 0,
        }
}

pub fn offset_y_center(rank: usize, _lateral: i32) -> i32 {
    SCALE
        * match rank {
            0 => 8,
            1 => 23,
            2 => 32,
            _ => 0,
        }
}

pub fn offset_y_left(rank: usize, _lateral: i32) -> i32 {
    SCALE
        * match rank {
            0 => 0,
            1 => 8,
            2 => 23,
            _ => 0,
        }
}

pub fn offset_y_right(rank: usize, lateral: i32) -> i32 {
    // Side walls are symmetric vertically.
    offset_y_left(rank, lateral)
}

/// Sprites of one wall type at every depth rank, for all three sides.
///
/// Missing images are `None` and just don't get drawn.
#[derive(Clone, Debug)]
pub struct WallSpriteSet {
    visible_depth: usize,
    front: Vec<Option<Buffer>>,
    left: Vec<Option<Buffer>>,
    right: Vec<Option<Buffer>>,
}

impl WallSpriteSet {
    /// Build a set from already loaded images, each list indexed by depth
    /// rank.
    pub fn new(
        front: Vec<Option<Buffer>>,
        left: Vec<Option<Buffer>>,
        right: Vec<Option<Buffer>>,
    ) -> Self {
        let mut ret = WallSpriteSet {
            visible_depth: VISIBLE_DEPTH,
            front,
            left,
            right,
        };
        for family in [&mut ret.front, &mut ret.left, &mut ret.right] {
            family.resize(VISIBLE_DEPTH, None);
        }
        ret
    }

    /// Load `f{N}.png`, `l{N}.png` and `r{N}.png` for every depth rank from
    /// a directory.
    pub fn load(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();

        let family = |side: Side| -> Vec<Option<Buffer>> {
            (0..VISIBLE_DEPTH)
                .map(|rank| {
                    let path = dir.join(format!("{}{rank}.png", side.prefix()));
                    match Buffer::load(&path) {
                        Ok(img) => Some(img),
                        Err(e) => {
                            log::warn!("{e:#}");
                            None
                        }
                    }
                })
                .collect()
        };

        WallSpriteSet::new(
            family(Side::Front),
            family(Side::Left),
            family(Side::Right),
        )
    }

    pub fn visible_depth(&self) -> usize {
        self.visible_depth
    }

    pub fn sprite(&self, side: Side, rank: usize) -> Option<&Buffer> {
        // Ranks up to and including the visible depth pass this check, the
        // slice lookup below catches the one past the end.
        if rank > self.visible_depth {
            return None;
        }

        let family = match side {
            Side::Front => &self.front,
            Side::Left => &self.left,
            Side::Right => &self.right,
        };
        family.get(rank)?.as_ref()
    }

    pub fn front(&self, rank: usize) -> Option<&Buffer> {
        self.sprite(Side::Front, rank)
    }

    pub fn left(&self, rank: usize) -> Option<&Buffer> {
        self.sprite(Side::Left, rank)
    }

    pub fn right(&self, rank: usize) -> Option<&Buffer> {
        self.sprite(Side::Right, rank)
    }

    /// Whether every sprite of the set is present.
    pub fn is_complete(&self) -> bool {
        Side::iter().all(|side| {
            (0..self.visible_depth).all(|r| self.sprite(side, r).is_some())
        })
    }
}

/// All the wall art, indexed by wall id.
#[derive(Clone, Default, Debug)]
pub struct ArtCatalog {
    sets: Vec<WallSpriteSet>,
}

impl ArtCatalog {
    /// Load every wall family in `WALL_FAMILIES` from under `root`.
    pub fn load(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let ret = ArtCatalog::from_sets(
            WALL_FAMILIES
                .iter()
                .map(|name| WallSpriteSet::load(root.join(name)))
                .collect(),
        );

        if ret.all_loaded() {
            log::info!("loaded {} wall sets from {root:?}", ret.len());
        } else {
            log::warn!("wall art under {root:?} is incomplete");
        }
        ret
    }

    /// Build a catalog where the first set is wall id 1.
    pub fn from_sets(sets: Vec<WallSpriteSet>) -> Self {
        ArtCatalog { sets }
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Sprite set for a wall id, `None` for `NO_WALL` or unknown ids.
    pub fn sprite_set(&self, wall: WallId) -> Option<&WallSpriteSet> {
        let idx = (wall as usize).checked_sub(1)?;
        self.sets.get(idx)
    }

    pub fn all_loaded(&self) -> bool {
        self.sets.iter().all(|s| s.is_complete())
    }
}
