pub use gfx::{Canvas, Rgba, Window};

pub use crate::{
    ArtCatalog, Buffer, Controls, CorridorView, Hud, Key, KeyEvent, MiniMap,
    Msg, Overlays, Screen, WallSpriteSet,
};

pub type Rect = util::Rect;
