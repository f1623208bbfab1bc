/// Trait for buffer cells.
///
/// Assumption: `<T: Pixel>::default().is_transparent()` is always true.
pub trait Pixel: Copy + Default + Eq + PartialEq + 'static {
    fn is_transparent(&self) -> bool;
}

/// 32-bit color with alpha, byte layout matches RGBA8 image data.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Debug)]
#[repr(C)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Rgba = Rgba::rgb(0xff, 0xff, 0xff);
    pub const CYAN: Rgba = Rgba::rgb(0x00, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Rgba {
        Rgba { r, g, b, a }
    }

    /// Fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Rgba {
        Rgba::new(r, g, b, 0xff)
    }
}

impl Pixel for Rgba {
    fn is_transparent(&self) -> bool {
        self.a == 0x00
    }
}
