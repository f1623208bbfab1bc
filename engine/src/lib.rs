//! Game logic layer machinery.

/// Width and height of the fixture maps.
pub const MOCKUP_SIZE: i32 = 10;

mod dir;
pub use dir::Dir;

mod game_state;
pub use game_state::{GameConfig, GameState};

mod layout;
pub use layout::Layout;

mod map;
pub use map::{Map, WallId, BRICK, METAL, NO_WALL, STONE, WOOD};

mod position;
pub use position::Position;

pub mod prelude;
