use glam::IVec2;
use util::v2;

use crate::{Buffer, Pixel, Rect};

/// Rectangular view into a pixel buffer.
#[derive(Copy, Clone)]
pub struct Image<'a, P> {
    buf: &'a Buffer<P>,
    bounds: Rect,
}

impl<'a, P: Pixel> From<&'a Buffer<P>> for Image<'a, P> {
    fn from(buf: &'a Buffer<P>) -> Self {
        Image {
            buf,
            bounds: buf.area(),
        }
    }
}

impl<'a, P: Pixel> Image<'a, P> {
    /// Create a view of `bounds` within `buf`. Bounds are clipped to the
    /// buffer.
    pub fn new(buf: &'a Buffer<P>, bounds: Rect) -> Self {
        Image {
            buf,
            bounds: buf.area().intersection(&bounds),
        }
    }

    /// Get a pixel in image-local coordinates, transparent if outside the
    /// image.
    pub fn get(&self, pos: impl Into<[i32; 2]>) -> P {
        let pos = v2(pos);
        if !self.area().contains(pos) {
            return Default::default();
        }
        self.buf.get(pos + v2(self.bounds.min()))
    }

    pub fn dim(&self) -> IVec2 {
        self.bounds.dim().into()
    }

    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Area of the image in image-local coordinates, anchored to origin.
    pub fn area(&self) -> Rect {
        Rect::sized(self.dim())
    }

    /// Sub-view from an area given in image-local coordinates.
    pub fn sub(&self, area: Rect) -> Image<'a, P> {
        let area = area + self.bounds.min();
        Image {
            buf: self.buf,
            bounds: self.bounds.intersection(&area),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Rgba;

    #[test]
    fn sub_image() {
        let buf = Buffer::from_fn(4, 4, |x, y| Rgba::rgb(x as u8, y as u8, 0));
        let img = Image::new(&buf, Rect::new([1, 1], [4, 4]));
        assert_eq!(img.dim(), IVec2::new(3, 3));
        assert_eq!(img.get([0, 0]), Rgba::rgb(1, 1, 0));

        let sub = img.sub(Rect::new([1, 0], [10, 1]));
        assert_eq!(sub.dim(), IVec2::new(2, 1));
        assert_eq!(sub.get([1, 0]), Rgba::rgb(3, 1, 0));
        assert!(sub.get([2, 0]).is_transparent());
    }
}
