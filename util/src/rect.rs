use std::ops::{Add, Sub};

use glam::IVec2;

/// Integer rectangle over a pixel or cell lattice.
///
/// The `p0` corner is inclusive and the `p1` corner is exclusive, so a
/// rectangle of `[0, 0]` to `[2, 2]` covers four cells.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Debug)]
pub struct Rect {
    pub p0: [i32; 2],
    pub p1: [i32; 2],
}

impl Rect {
    /// Create a new rectangle. If `p1` is less than `p0` along an axis, the
    /// rectangle collapses to zero size along that axis.
    pub fn new(p0: impl Into<[i32; 2]>, p1: impl Into<[i32; 2]>) -> Self {
        let (p0, p1) = (p0.into(), p1.into());

        Rect {
            p0,
            p1: [p0[0].max(p1[0]), p0[1].max(p1[1])],
        }
    }

    /// Create a rectangle of the given size with the origin at zero.
    pub fn sized(dim: impl Into<[i32; 2]>) -> Self {
        Rect::new([0, 0], dim)
    }

    pub fn min(&self) -> [i32; 2] {
        self.p0
    }

    pub fn max(&self) -> [i32; 2] {
        self.p1
    }

    pub fn dim(&self) -> [i32; 2] {
        [self.width(), self.height()]
    }

    pub fn width(&self) -> i32 {
        self.p1[0] - self.p0[0]
    }

    pub fn height(&self) -> i32 {
        self.p1[1] - self.p0[1]
    }

    /// Number of cells in the rectangle.
    pub fn volume(&self) -> usize {
        (self.width() * self.height()) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub fn contains(&self, p: impl Into<[i32; 2]>) -> bool {
        let p = p.into();
        (0..2).all(|i| (self.p0[i]..self.p1[i]).contains(&p[i]))
    }

    pub fn intersection(&self, rhs: &Rect) -> Rect {
        Rect::new(
            [self.p0[0].max(rhs.p0[0]), self.p0[1].max(rhs.p0[1])],
            [self.p1[0].min(rhs.p1[0]), self.p1[1].min(rhs.p1[1])],
        )
    }

    /// Row-major index of a point inside the rectangle.
    ///
    /// Points outside the rectangle produce garbage, check with `contains`
    /// first.
    pub fn idx(&self, p: impl Into<[i32; 2]>) -> usize {
        let [x, y] = p.into();
        let (x, y) = (x - self.p0[0], y - self.p0[1]);
        (y * self.width() + x) as usize
    }

    /// Inverse of `idx`.
    pub fn get(&self, i: usize) -> [i32; 2] {
        let w = self.width().max(1) as usize;
        [
            self.p0[0] + (i % w) as i32,
            self.p0[1] + (i / w) as i32,
        ]
    }
}

impl<E: Into<[i32; 2]>> Add<E> for Rect {
    type Output = Rect;

    fn add(self, rhs: E) -> Self::Output {
        let d = IVec2::from(rhs.into());
        Rect {
            p0: (IVec2::from(self.p0) + d).into(),
            p1: (IVec2::from(self.p1) + d).into(),
        }
    }
}

impl<E: Into<[i32; 2]>> Sub<E> for Rect {
    type Output = Rect;

    fn sub(self, rhs: E) -> Self::Output {
        self + (-IVec2::from(rhs.into()))
    }
}

impl IntoIterator for Rect {
    type Item = [i32; 2];
    type IntoIter = RectIter;

    fn into_iter(self) -> Self::IntoIter {
        RectIter {
            bounds: self,
            i: 0,
        }
    }
}

/// Row-major iterator over the points of a rectangle.
pub struct RectIter {
    bounds: Rect,
    i: usize,
}

impl Iterator for RectIter {
    type Item = [i32; 2];

    fn next(&mut self) -> Option<Self::Item> {
        if self.i >= self.bounds.volume() {
            return None;
        }
        let ret = self.bounds.get(self.i);
        self.i += 1;
        Some(ret)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bounds.volume().saturating_sub(self.i);
        (n, Some(n))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn iter() {
        assert_eq!(Rect::new([0, 0], [5, 5]).into_iter().count(), 25);
        assert_eq!(Rect::new([0, 0], [5, 0]).into_iter().count(), 0);
        assert_eq!(Rect::new([0, 0], [0, 5]).into_iter().count(), 0);
        assert_eq!(
            Rect::new([1, 1], [3, 2]).into_iter().collect::<Vec<_>>(),
            vec![[1, 1], [2, 1]]
        );
    }

    #[test]
    fn collapse() {
        let r = Rect::new([4, 4], [2, 8]);
        assert_eq!(r.dim(), [0, 4]);
        assert!(r.is_empty());
    }

    #[test]
    fn intersection() {
        let a = Rect::new([0, 0], [10, 10]);
        assert_eq!(
            a.intersection(&Rect::new([-5, 5], [5, 20])),
            Rect::new([0, 5], [5, 10])
        );
        assert!(a.intersection(&Rect::new([20, 20], [30, 30])).is_empty());
    }

    #[test]
    fn translate() {
        let r = Rect::sized([2, 3]) + [10, 20];
        assert_eq!(r, Rect::new([10, 20], [12, 23]));
        assert_eq!(r - IVec2::new(10, 20), Rect::sized([2, 3]));
        assert!(r.contains([11, 22]));
        assert!(!r.contains([12, 22]));
    }

    #[quickcheck]
    fn indexing(w: u8, h: u8, x: i8, y: i8) -> bool {
        let bounds = Rect::sized([(w % 20) as i32, (h % 20) as i32])
            + [x as i32, y as i32];

        bounds
            .into_iter()
            .enumerate()
            .all(|(i, p)| bounds.idx(p) == i && bounds.get(i) == p)
    }
}
