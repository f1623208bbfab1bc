//! Pixel buffers and the drawing primitives used to compose frames out of
//! pre-rendered images.

mod buffer;
pub use buffer::Buffer;

mod canvas;
pub use canvas::Canvas;

mod pixel;
pub use pixel::{Pixel, Rgba};

mod image;
pub use crate::image::Image;

mod window;
pub use window::Window;

pub type Rect = util::Rect;
