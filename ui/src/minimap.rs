use engine::{Map, Position};
use gfx::{Canvas, Rgba, Window};
use glam::{ivec2, IVec2};
use util::Rect;

use crate::Buffer;

pub const PLAYER_COL: Rgba = Rgba::rgb(255, 255, 0);
pub const VISITED_COL: Rgba = Rgba::rgb(0, 128, 0);
pub const UNVISITED_COL: Rgba = Rgba::rgb(32, 32, 32);

/// Overhead map of the whole level, one colored box per cell.
#[derive(Clone, Debug)]
pub struct MiniMap {
    width: i32,
    height: i32,
    /// Drawn on the first update.
    surface: Option<Buffer>,
}

impl MiniMap {
    /// Create a minimap of the given pixel size. Non-positive sizes are
    /// bumped up to one pixel.
    pub fn new(width: i32, height: i32) -> Self {
        MiniMap {
            width: width.max(1),
            height: height.max(1),
            surface: None,
        }
    }

    pub fn dim(&self) -> IVec2 {
        ivec2(self.width, self.height)
    }

    pub fn surface(&self) -> Option<&Buffer> {
        self.surface.as_ref()
    }

    /// Redraw the map with the player's current cell highlighted.
    pub fn update(&mut self, map: &Map, player: Position) {
        let (w, h) = (self.width, self.height);
        let surface = self
            .surface
            .get_or_insert_with(|| Buffer::new(w as u32, h as u32));
        surface.clear();

        if map.width() <= 0 || map.height() <= 0 {
            return;
        }

        let cell = ivec2(w / map.width(), h / map.height());
        for row in 0..map.height() {
            for col in 0..map.width() {
                let color = if player.cell() == ivec2(col, row) {
                    PLAYER_COL
                } else if map.is_visited(col, row) {
                    VISITED_COL
                } else {
                    UNVISITED_COL
                };

                let rect = Rect::sized(cell) + cell * ivec2(col, row);
                surface.fill_rect(rect, color);
            }
        }
    }

    /// Draw the minimap with its top left corner at `pos` in `win`. Does
    /// nothing before the first update.
    pub fn render(&self, c: &mut impl Canvas<Rgba>, win: &Window, pos: IVec2) {
        if let Some(surface) = &self.surface {
            win.blit_buffer(c, pos, surface);
        }
    }
}

#[cfg(test)]
mod test {
    use engine::{Dir, Layout};

    use super::*;

    #[test]
    fn cell_colors() {
        let map = Map::mockup(Layout::Corridors);
        let mut mm = MiniMap::new(140, 140);
        assert!(mm.surface().is_none());

        mm.update(&map, Position::new(3, 1, Dir::East));
        let s = mm.surface().unwrap();
        assert_eq!(s.dim(), ivec2(140, 140));

        // Cells are 14 pixels square.
        assert_eq!(s.get([42, 14]), PLAYER_COL);
        assert_eq!(s.get([55, 27]), PLAYER_COL);
        assert_eq!(s.get([41, 14]), UNVISITED_COL);
        assert_eq!(s.get([56, 27]), UNVISITED_COL);
        assert_eq!(s.get([0, 0]), UNVISITED_COL);
        assert_eq!(s.get([139, 139]), UNVISITED_COL);
    }

    #[test]
    fn leftover_is_transparent() {
        let map = Map::new(3, 3);
        let mut mm = MiniMap::new(10, 10);
        mm.update(&map, Position::default());

        let s = mm.surface().unwrap();
        assert_eq!(s.get([0, 0]), PLAYER_COL);
        assert_eq!(s.get([3, 3]), UNVISITED_COL);
        assert_eq!(s.get([8, 8]), UNVISITED_COL);
        assert_eq!(s.get([9, 9]), Rgba::default());
    }

    #[test]
    fn player_moves() {
        let map = Map::new(2, 1);
        let mut mm = MiniMap::new(4, 2);
        mm.update(&map, Position::new(0, 0, Dir::North));
        mm.update(&map, Position::new(1, 0, Dir::North));

        let s = mm.surface().unwrap();
        assert_eq!(s.get([0, 0]), UNVISITED_COL);
        assert_eq!(s.get([2, 0]), PLAYER_COL);
    }

    #[test]
    fn degenerate_sizes() {
        let mut mm = MiniMap::new(0, -5);
        assert_eq!(mm.dim(), ivec2(1, 1));

        // Map bigger than the surface, cells are zero pixels wide.
        mm.update(&Map::new(4, 4), Position::default());
        assert_eq!(mm.surface().unwrap().get([0, 0]), Rgba::default());

        mm.update(&Map::default(), Position::default());
        assert_eq!(mm.surface().unwrap().dim(), ivec2(1, 1));
    }

    #[test]
    fn render_before_update_is_noop() {
        let mm = MiniMap::new(4, 4);
        let mut buf = Buffer::new(8, 8);
        let win = Window::from(&buf);
        mm.render(&mut buf, &win, ivec2(2, 2));
        assert!(buf.data().iter().all(|&p| p == Rgba::default()));
    }
}
