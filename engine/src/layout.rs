//! Hand-authored fixture maps.

use strum::{Display, EnumIter, EnumString};

use crate::{map::*, Dir, Position};

/// Which fixture to build a map from.
#[derive(
    Copy,
    Clone,
    Default,
    Eq,
    PartialEq,
    Hash,
    Debug,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Layout {
    /// Stone ring with a corridor around a closed-off middle block that has
    /// one opening on its west side.
    #[default]
    Corridors,
    /// Dead-end brick hallway flanked by wood, stone and metal walls.
    Courtyard,
}

/// Wall table for the courtyard: column, row, face, wall type.
#[rustfmt::skip]
const COURTYARD: [(i32, i32, i32, WallId); 29] = [
    (4, 9, 0, BRICK), (6, 9, 0, BRICK),
    (5, 8, 1, BRICK), (5, 8, 3, BRICK),
    (4, 8, 0, BRICK), (6, 8, 0, BRICK),
    (5, 7, 0, BRICK), (5, 7, 1, BRICK), (5, 7, 3, BRICK),
    (4, 7, 0, BRICK), (6, 7, 0, BRICK),
    (5, 9, 2, STONE), (4, 9, 2, STONE), (3, 9, 2, STONE),
    (6, 9, 2, STONE), (7, 9, 2, STONE), (2, 9, 2, STONE), (8, 9, 2, STONE),
    (4, 8, 3, WOOD), (6, 8, 1, WOOD), (4, 7, 3, WOOD), (6, 7, 1, WOOD),
    (3, 7, 3, STONE), (3, 8, 3, STONE), (3, 9, 3, STONE),
    (3, 6, 3, STONE), (3, 5, 3, STONE),
    (3, 6, 0, METAL), (4, 6, 0, METAL),
];

impl Layout {
    pub fn starting_point(self) -> Position {
        match self {
            Layout::Corridors => Position::new(1, 1, Dir::East),
            Layout::Courtyard => Position::new(5, 9, Dir::North),
        }
    }

    /// Write the fixture walls into a freshly reset map.
    pub(crate) fn author(self, map: &mut Map) {
        let (w, h) = (map.width(), map.height());

        match self {
            Layout::Corridors => {
                // Stone ring all around the map border.
                for y in 0..h {
                    map.place_wall(Position::new(0, y, Dir::East), STONE);
                    map.place_wall(Position::new(w - 1, y, Dir::West), STONE);
                }
                for x in 0..w {
                    map.place_wall(Position::new(x, 0, Dir::South), STONE);
                    map.place_wall(Position::new(x, h - 1, Dir::North), STONE);
                }

                // Inner block walls.
                for x in 2..w - 2 {
                    map.place_wall(Position::new(x, 1, Dir::South), STONE);
                    map.place_wall(Position::new(x, h - 2, Dir::South), STONE);
                }
                for y in 2..h - 1 {
                    map.place_wall(Position::new(1, y, Dir::East), STONE);
                    map.place_wall(Position::new(w - 2, y, Dir::West), STONE);
                }

                // Opening half way down the west inner wall.
                map.remove_wall(Position::new(2, h / 2, Dir::West));
            }
            Layout::Courtyard => {
                for (x, y, face, wall) in COURTYARD {
                    map.place_wall(
                        Position::new(x, y, Dir::from_index(face)),
                        wall,
                    );
                }
            }
        }
    }
}
