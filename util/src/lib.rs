//! Unopinionated standalone utilities.

mod geom;
pub use geom::{v2, DIR_4};

mod rect;
pub use rect::Rect;
