pub use crate::{
    Dir, GameConfig, GameState, Layout, Map, Position, WallId, NO_WALL,
};
pub use glam::{ivec2, IVec2};
