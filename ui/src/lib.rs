//! Game display and user interface

pub mod prelude;

pub type Buffer = gfx::Buffer<gfx::Rgba>;

pub mod art;
pub use art::{ArtCatalog, WallSpriteSet};

pub mod corridor_view;
pub use corridor_view::CorridorView;

mod hud;
pub use hud::{compass, Hud, MESSAGE_CLEAR_DELAY};

mod input;
pub use input::{Controls, Key, KeyEvent, Msg, MOTION_DELAY};

pub mod minimap;
pub use minimap::MiniMap;

pub mod screen;
pub use screen::{Overlays, Screen};
