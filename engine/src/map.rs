use crate::{Dir, Layout, Position, MOCKUP_SIZE};

/// Identifier of the art family a wall face is drawn with.
pub type WallId = u16;

pub const NO_WALL: WallId = 0;
pub const BRICK: WallId = 1;
pub const STONE: WallId = 2;
pub const WOOD: WallId = 3;
pub const METAL: WallId = 4;

/// Grid of cells where each of the four faces of every cell can hold a wall.
///
/// Walls are two-sided: a wall between two cells shows up on the facing
/// sides of both. The outer edge of the map is never passable.
#[derive(Clone, Default, Debug)]
pub struct Map {
    width: i32,
    height: i32,
    /// Wall type per cell face, indexed `(row * width + col) * 4 + face`.
    walls: Vec<WallId>,
    /// Whether a cell face can be walked through, same indexing as `walls`.
    passable: Vec<bool>,
    starting_points: Vec<Position>,
}

impl Map {
    /// Create an empty map with only the border blocked.
    pub fn new(width: i32, height: i32) -> Map {
        let mut ret = Map {
            width: width.max(0),
            height: height.max(0),
            ..Default::default()
        };
        ret.reset();
        ret
    }

    /// Create a map with one of the fixture layouts.
    pub fn mockup(layout: Layout) -> Map {
        let mut ret = Map::default();
        ret.build_mockup_layout(layout);
        ret
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }

    fn idx(&self, pos: Position) -> Option<usize> {
        self.contains(pos.x, pos.y).then(|| {
            ((pos.y * self.width + pos.x) * 4) as usize + pos.facing.idx()
        })
    }

    /// Wall on the face of `pos`'s cell that `pos` is facing.
    ///
    /// Returns `NO_WALL` outside the map.
    pub fn wall_at(&self, pos: Position) -> WallId {
        self.idx(pos).map_or(NO_WALL, |i| self.walls[i])
    }

    /// Whether the face of `pos`'s cell that `pos` is facing can be walked
    /// through.
    ///
    /// Always false outside the map.
    pub fn can_pass(&self, pos: Position) -> bool {
        self.idx(pos).is_some_and(|i| self.passable[i])
    }

    fn set_face(&mut self, pos: Position, wall: WallId, passable: bool) {
        if let Some(i) = self.idx(pos) {
            self.walls[i] = wall;
            self.passable[i] = passable;
        }
    }

    /// Set both sides of the cell boundary `pos` faces.
    fn set_boundary(&mut self, pos: Position, wall: WallId, passable: bool) {
        self.set_face(pos, wall, passable);

        let neighbor = pos.ahead(1);
        if self.contains(neighbor.x, neighbor.y) {
            self.set_face(neighbor.reversed(), wall, passable);
        }
    }

    /// Put a wall on the boundary `pos` faces, blocking it from both sides.
    pub fn place_wall(&mut self, pos: Position, wall: WallId) {
        self.set_boundary(pos, wall, false);
    }

    /// Clear the boundary `pos` faces from both sides.
    pub fn remove_wall(&mut self, pos: Position) {
        self.set_boundary(pos, NO_WALL, true);
    }

    /// Clear all walls, block the outer border and drop the starting points.
    pub fn reset(&mut self) {
        let n = (self.width * self.height * 4) as usize;
        self.walls = vec![NO_WALL; n];
        self.passable = vec![true; n];
        self.starting_points.clear();

        let (w, h) = (self.width, self.height);
        for y in 0..h {
            for x in 0..w {
                for (facing, is_edge) in [
                    (Dir::North, y == 0),
                    (Dir::East, x == w - 1),
                    (Dir::South, y == h - 1),
                    (Dir::West, x == 0),
                ] {
                    if is_edge {
                        let p = Position::new(x, y, facing);
                        self.set_face(p, NO_WALL, false);
                    }
                }
            }
        }
    }

    /// Rebuild the map as a fixed 10x10 fixture layout.
    pub fn build_mockup_layout(&mut self, layout: Layout) {
        self.width = MOCKUP_SIZE;
        self.height = MOCKUP_SIZE;
        self.reset();

        self.starting_points.push(layout.starting_point());
        layout.author(self);
        log::debug!("built {layout} mockup map");
    }

    /// Return a designated starting point, or the origin facing north if
    /// there isn't one.
    pub fn starting_point(&self, which: usize) -> Position {
        self.starting_points
            .get(which)
            .copied()
            .unwrap_or_default()
    }

    /// Whether the player has been to the cell.
    ///
    /// Exploration isn't tracked yet, so this is always false.
    pub fn is_visited(&self, _col: i32, _row: i32) -> bool {
        false
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use quickcheck_macros::quickcheck;
    use strum::IntoEnumIterator;
    use Dir::*;

    fn faces(map: &Map) -> impl Iterator<Item = Position> + '_ {
        (0..map.height()).flat_map(move |y| {
            (0..map.width()).flat_map(move |x| {
                Dir::iter().map(move |d| Position::new(x, y, d))
            })
        })
    }

    fn is_border_face(map: &Map, p: Position) -> bool {
        let n = p.ahead(1);
        !map.contains(n.x, n.y)
    }

    #[test]
    fn fresh_map_has_blocked_border() {
        let map = Map::new(7, 5);
        assert_eq!(faces(&map).count(), 7 * 5 * 4);

        for p in faces(&map) {
            assert_eq!(map.can_pass(p), !is_border_face(&map, p), "{p}");
            assert_eq!(map.wall_at(p), NO_WALL);
        }
    }

    #[test]
    fn out_of_bounds_queries() {
        let map = Map::mockup(Layout::Corridors);
        for p in [
            Position::new(-1, 0, East),
            Position::new(0, -1, South),
            Position::new(10, 3, West),
            Position::new(3, 10, North),
        ] {
            assert_eq!(map.wall_at(p), NO_WALL);
            assert!(!map.can_pass(p));
        }

        let empty = Map::default();
        assert!(!empty.can_pass(Position::default()));
    }

    #[test]
    fn walls_are_bilateral() {
        let mut map = Map::new(5, 5);
        let p = Position::new(2, 2, East);
        map.place_wall(p, WOOD);

        let back = Position::new(3, 2, West);
        assert_eq!(map.wall_at(p), WOOD);
        assert_eq!(map.wall_at(back), WOOD);
        assert!(!map.can_pass(p));
        assert!(!map.can_pass(back));
        // Other faces untouched.
        assert!(map.can_pass(Position::new(2, 2, North)));
        assert_eq!(map.wall_at(Position::new(3, 2, East)), NO_WALL);

        map.remove_wall(back);
        assert_eq!(map.wall_at(p), NO_WALL);
        assert!(map.can_pass(p));
        assert!(map.can_pass(back));
    }

    #[test]
    fn wall_on_border_is_one_sided() {
        let mut map = Map::new(3, 3);
        map.place_wall(Position::new(2, 0, East), METAL);
        assert_eq!(map.wall_at(Position::new(2, 0, East)), METAL);
        assert!(!map.can_pass(Position::new(2, 0, East)));
    }

    #[quickcheck]
    fn placed_walls_block_both_sides(x: u8, y: u8, facing: Dir) -> bool {
        let mut map = Map::new(6, 6);
        let p = Position::new((x % 6) as i32, (y % 6) as i32, facing);
        map.place_wall(p, STONE);

        let n = p.ahead(1);
        let far_side_ok = !map.contains(n.x, n.y)
            || (map.wall_at(n.reversed()) == STONE
                && !map.can_pass(n.reversed()));

        map.wall_at(p) == STONE && !map.can_pass(p) && far_side_ok
    }

    #[test]
    fn starting_points() {
        let map = Map::mockup(Layout::Corridors);
        assert_eq!(map.starting_point(0), Position::new(1, 1, East));
        assert_eq!(map.starting_point(1), Position::new(0, 0, North));
        assert_eq!(Map::new(4, 4).starting_point(0), Position::default());
    }

    #[test]
    fn corridors_mockup() {
        let map = Map::mockup(Layout::Corridors);
        assert_eq!((map.width(), map.height()), (10, 10));

        // Outer stone ring, seen from the inside.
        assert_eq!(map.wall_at(Position::new(1, 4, West)), STONE);
        assert_eq!(map.wall_at(Position::new(8, 4, East)), STONE);
        assert_eq!(map.wall_at(Position::new(4, 1, North)), STONE);
        assert_eq!(map.wall_at(Position::new(4, 8, South)), STONE);

        // Top corridor runs free along row 1.
        for x in 1..8 {
            assert!(map.can_pass(Position::new(x, 1, East)));
        }
        assert!(!map.can_pass(Position::new(3, 1, South)));

        // The gap half way down the west inner wall.
        assert!(map.can_pass(Position::new(1, 5, East)));
        assert!(map.can_pass(Position::new(2, 5, West)));
        assert!(!map.can_pass(Position::new(1, 4, East)));
        assert!(!map.can_pass(Position::new(1, 6, East)));

        assert!(faces(&map).all(|p| {
            !is_border_face(&map, p) || !map.can_pass(p)
        }));
    }

    #[test]
    fn courtyard_mockup() {
        let map = Map::mockup(Layout::Courtyard);
        assert_eq!(map.starting_point(0), Position::new(5, 9, North));
        assert_eq!(map.wall_at(Position::new(5, 7, North)), BRICK);
        assert_eq!(map.wall_at(Position::new(5, 6, South)), BRICK);
        assert_eq!(map.wall_at(Position::new(3, 6, North)), METAL);
        assert!(map.can_pass(Position::new(5, 9, North)));
    }

    #[test]
    fn nothing_is_visited() {
        let map = Map::mockup(Layout::Corridors);
        assert!(!map.is_visited(1, 1));
    }
}
