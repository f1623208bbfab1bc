use std::path::Path;

use anyhow::Context;
use glam::{ivec2, IVec2};
use util::v2;

use crate::{Canvas, Image, Pixel, Rect, Rgba};

/// Owned rectangular block of pixels.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Buffer<P> {
    width: u32,
    height: u32,
    pub(crate) data: Vec<P>,
}

impl From<image::DynamicImage> for Buffer<Rgba> {
    fn from(image: image::DynamicImage) -> Self {
        let image = image.to_rgba8();
        let (width, height) = (image.width(), image.height());
        let data = image
            .into_raw()
            .chunks_exact(4)
            .map(|c| Rgba::new(c[0], c[1], c[2], c[3]))
            .collect();

        Buffer {
            width,
            height,
            data,
        }
    }
}

impl Buffer<Rgba> {
    /// Pixels of this color in loaded images become transparent.
    ///
    /// The wall art uses black for the empty parts of the sprites.
    pub const KEY_COLOR: Rgba = Rgba::BLACK;

    /// Decode an image from in-memory file data and apply the color key.
    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        let mut ret: Buffer<Rgba> = image::load_from_memory(bytes)?.into();
        ret.set_key_to_transparent(Buffer::KEY_COLOR);
        Ok(ret)
    }

    /// Load an image file and apply the color key.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let mut ret: Buffer<Rgba> = image::open(path)
            .with_context(|| {
                format!("failed to load image from {path:?}")
            })?
            .into();
        ret.set_key_to_transparent(Buffer::KEY_COLOR);
        log::debug!("loaded {path:?}, {}x{}", ret.width, ret.height);
        Ok(ret)
    }

    /// Create a screenshot PNG of the buffer.
    ///
    /// Transparent pixels show up as black.
    pub fn to_png(&self) -> anyhow::Result<Vec<u8>> {
        use image::ImageEncoder;

        let img = image::RgbImage::from_fn(self.width, self.height, |x, y| {
            let p = self.get([x as i32, y as i32]);
            if p.is_transparent() {
                image::Rgb([0, 0, 0])
            } else {
                image::Rgb([p.r, p.g, p.b])
            }
        });

        let mut ret = Vec::new();
        let encoder = image::codecs::png::PngEncoder::new(&mut ret);
        encoder.write_image(
            &img.into_raw(),
            self.width,
            self.height,
            image::ExtendedColorType::Rgb8,
        )?;

        Ok(ret)
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_png()?)
            .with_context(|| format!("failed to write {path:?}"))
    }
}

impl<P: Pixel> Buffer<P> {
    pub fn new(width: u32, height: u32) -> Self {
        Buffer {
            width,
            height,
            data: vec![Default::default(); (width * height) as usize],
        }
    }

    pub fn from_fn(width: u32, height: u32, f: impl Fn(i32, i32) -> P) -> Self {
        let area = Rect::sized([width as i32, height as i32]);
        let data = (0..(width * height) as usize)
            .map(|i| {
                let [x, y] = area.get(i);
                f(x, y)
            })
            .collect();
        Buffer {
            width,
            height,
            data,
        }
    }

    /// Pixel at position, transparent default if outside the buffer.
    pub fn get(&self, pos: impl Into<[i32; 2]>) -> P {
        let pos = pos.into();
        let area = self.area();
        if area.contains(pos) {
            self.data[area.idx(pos)]
        } else {
            Default::default()
        }
    }

    pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut P> {
        self.data.iter_mut()
    }

    pub fn data(&self) -> &[P] {
        &self.data
    }

    pub fn set_key_to_transparent(&mut self, key: P) {
        for p in self.pixels_mut() {
            if *p == key {
                *p = P::default();

                debug_assert!(
                    p.is_transparent(),
                    "default pixel is not transparent"
                );
            }
        }
    }

    pub fn dim(&self) -> IVec2 {
        ivec2(self.width as i32, self.height as i32)
    }

    pub fn width(&self) -> i32 {
        self.width as i32
    }

    pub fn height(&self) -> i32 {
        self.height as i32
    }

    pub fn area(&self) -> Rect {
        Rect::sized(self.dim())
    }

    /// Reset every pixel to transparent.
    pub fn clear(&mut self) {
        for p in self.pixels_mut() {
            *p = P::default();
        }
    }
}

impl<P: Pixel> Canvas<P> for Buffer<P> {
    fn area(&self) -> Rect {
        Buffer::area(self)
    }

    fn fill_rect(&mut self, rect: Rect, col: P) {
        let area = Buffer::area(self);
        for pos in rect.intersection(&area) {
            self.data[area.idx(pos)] = col;
        }
    }

    fn blit_region(&mut self, pos: IVec2, img: &Image<'_, P>) {
        let area = Buffer::area(self);
        for p in img.area() {
            let a = img.get(p);
            if a.is_transparent() {
                continue;
            }
            let dest = pos + v2(p);
            if area.contains(dest) {
                self.data[area.idx(dest)] = a;
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn png(w: u32, h: u32, f: impl Fn(u32, u32) -> [u8; 4]) -> Vec<u8> {
        use image::ImageEncoder;

        let img = image::RgbaImage::from_fn(w, h, |x, y| image::Rgba(f(x, y)));
        let mut ret = Vec::new();
        image::codecs::png::PngEncoder::new(&mut ret)
            .write_image(&img.into_raw(), w, h, image::ExtendedColorType::Rgba8)
            .unwrap();
        ret
    }

    #[test]
    fn color_key() {
        // Checkerboard of black and red.
        let data = png(2, 2, |x, y| {
            if (x + y) % 2 == 0 {
                [0, 0, 0, 255]
            } else {
                [255, 0, 0, 255]
            }
        });
        let buf = Buffer::from_bytes(&data).unwrap();
        assert_eq!(buf.dim(), ivec2(2, 2));
        assert!(buf.get([0, 0]).is_transparent());
        assert_eq!(buf.get([1, 0]), Rgba::rgb(255, 0, 0));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("x.png");
        std::fs::write(&path, png(3, 1, |_, _| [1, 2, 3, 255])).unwrap();

        let buf = Buffer::load(&path).unwrap();
        assert_eq!(buf.get([2, 0]), Rgba::rgb(1, 2, 3));

        assert!(Buffer::load(dir.path().join("missing.png")).is_err());
    }

    #[test]
    fn fill_is_clipped() {
        let mut buf: Buffer<Rgba> = Buffer::new(4, 4);
        buf.fill_rect(Rect::new([-2, -2], [2, 2]), Rgba::WHITE);
        assert_eq!(buf.data().iter().filter(|p| **p == Rgba::WHITE).count(), 4);
        assert_eq!(buf.get([1, 1]), Rgba::WHITE);
        assert!(buf.get([2, 2]).is_transparent());
    }

    #[test]
    fn blit_skips_transparent_pixels() {
        let sprite = Buffer::from_fn(2, 2, |x, _| {
            if x == 0 {
                Rgba::WHITE
            } else {
                Rgba::default()
            }
        });

        let mut buf = Buffer::from_fn(4, 4, |_, _| Rgba::CYAN);
        buf.blit(ivec2(3, 3), &sprite);
        assert_eq!(buf.get([3, 3]), Rgba::WHITE);

        buf.blit(ivec2(-1, 0), &sprite);
        // Only the transparent column landed inside, nothing changes.
        assert_eq!(buf.get([0, 0]), Rgba::CYAN);
        assert_eq!(buf.get([0, 1]), Rgba::CYAN);
    }

    #[test]
    fn png_roundtrip_keeps_opaque_pixels() {
        let buf = Buffer::from_fn(3, 2, |x, y| {
            Rgba::rgb(10 * x as u8 + 1, 20 * y as u8 + 1, 7)
        });
        let decoded = Buffer::from_bytes(&buf.to_png().unwrap()).unwrap();
        assert_eq!(decoded, buf);
    }
}
