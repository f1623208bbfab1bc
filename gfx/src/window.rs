use glam::IVec2;
use util::v2;

use crate::{Buffer, Canvas, Image, Pixel, Rect};

/// A view structure through which things can be drawn on a canvas.
///
/// Drawing operations take window-local coordinates and are clipped to the
/// window's bounds.
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug)]
pub struct Window {
    /// The window's bounds in the coordinates of the canvas.
    bounds: Rect,
}

impl<P: Pixel> From<&Buffer<P>> for Window {
    fn from(c: &Buffer<P>) -> Self {
        Window::new(c.area())
    }
}

impl Window {
    pub fn new(bounds: Rect) -> Window {
        Window { bounds }
    }

    /// Area rectangle of the window in window-local coordinates, anchored to
    /// origin.
    pub fn area(&self) -> Rect {
        Rect::sized(self.bounds.dim())
    }

    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Window bounds rectangle in canvas coordinates.
    pub fn bounds(&self) -> &Rect {
        &self.bounds
    }

    /// Create a sub-window from the area within this window's space.
    pub fn sub(&self, area: Rect) -> Window {
        let area = area + self.bounds.min();
        Window {
            bounds: self.bounds.intersection(&area),
        }
    }

    pub fn fill<P: Pixel>(&self, c: &mut impl Canvas<P>, col: P) {
        self.fill_rect(c, self.area(), col);
    }

    pub fn fill_rect<P: Pixel>(
        &self,
        c: &mut impl Canvas<P>,
        rect: Rect,
        col: P,
    ) {
        let rect = self.bounds.intersection(&(rect + self.bounds.min()));
        if !rect.is_empty() {
            c.fill_rect(rect, col);
        }
    }

    /// Draw an image in the window. Only the part that lands inside the
    /// window is passed on to the canvas.
    pub fn blit<P: Pixel>(
        &self,
        c: &mut impl Canvas<P>,
        pos: impl Into<IVec2>,
        img: &Image<'_, P>,
    ) {
        let pos: IVec2 = pos.into();
        let dest = Rect::sized(img.dim()) + pos + self.bounds.min();
        let clipped = self.bounds.intersection(&dest);
        if clipped.is_empty() {
            return;
        }

        let src = img.sub(clipped - dest.min());
        c.blit_region(v2(clipped.min()), &src);
    }

    /// Draw an entire buffer in the window.
    pub fn blit_buffer<P: Pixel>(
        &self,
        c: &mut impl Canvas<P>,
        pos: impl Into<IVec2>,
        buf: &Buffer<P>,
    ) {
        self.blit(c, pos, &Image::from(buf));
    }
}
