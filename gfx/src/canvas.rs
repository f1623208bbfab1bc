use glam::IVec2;

use crate::{Buffer, Image, Pixel, Rect};

/// Drawing surface that frames are composed onto.
///
/// All coordinates are in the surface's own space. Implementations clip
/// everything to `area` and must skip transparent source pixels when
/// blitting.
pub trait Canvas<P: Pixel> {
    fn area(&self) -> Rect;

    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, col: P);

    /// Copy the region covered by `img` so that its top left corner lands on
    /// `pos`.
    fn blit_region(&mut self, pos: IVec2, img: &Image<'_, P>);

    /// Copy an entire buffer to `pos`.
    fn blit(&mut self, pos: IVec2, buf: &Buffer<P>) {
        self.blit_region(pos, &Image::from(buf));
    }
}
