use engine::{Map, Position, NO_WALL};
use gfx::{Canvas, Rgba, Window};
use glam::{ivec2, IVec2};
use util::Rect;

use crate::{
    art::{Side, VISIBLE_DEPTH},
    ArtCatalog,
};

pub const SKY_COL: Rgba = Rgba::rgb(77, 130, 229);
pub const GROUND_COL: Rgba = Rgba::rgb(16, 80, 30);

/// How many cells to each side of the view axis get their front walls
/// drawn.
const LATERAL_SPREAD: i32 = 1;

/// First-person view down the corridor in front of a position.
///
/// Walls are painted farthest first so nearer sprites cover them. Wall faces
/// without art are skipped.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct CorridorView {
    width: i32,
    height: i32,
}

impl Default for CorridorView {
    fn default() -> Self {
        CorridorView::new(300, 400)
    }
}

impl CorridorView {
    pub fn new(width: i32, height: i32) -> Self {
        CorridorView {
            width: width.max(0),
            height: height.max(0),
        }
    }

    pub fn dim(&self) -> IVec2 {
        ivec2(self.width, self.height)
    }

    /// Draw the view from `pos` at the top left corner of `win`.
    pub fn render(
        &self,
        c: &mut impl Canvas<Rgba>,
        win: &Window,
        map: &Map,
        pos: Position,
        art: &ArtCatalog,
    ) {
        let win = win.sub(Rect::sized(self.dim()));

        let horizon = self.height * 3 / 5;
        win.fill_rect(c, Rect::sized([self.width, horizon]), SKY_COL);
        win.fill_rect(
            c,
            Rect::sized([self.width, self.height * 2 / 5]) + [0, horizon],
            GROUND_COL,
        );

        for rank in (0..VISIBLE_DEPTH).rev() {
            let base = pos.ahead(rank as i32);

            let mut draw = |face: Position, side: Side, lateral: i32| {
                let wall = map.wall_at(face);
                if wall == NO_WALL {
                    return;
                }

                match art.sprite_set(wall).and_then(|s| s.sprite(side, rank)) {
                    Some(sprite) => {
                        win.blit_buffer(c, side.offset(rank, lateral), sprite)
                    }
                    None => {
                        log::trace!("no {side} art for wall {wall} at {rank}")
                    }
                }
            };

            for (face, lateral) in lateral_faces(base, LATERAL_SPREAD) {
                draw(face, Side::Front, lateral);
            }

            draw(base.left_facing(), Side::Left, 0);
            draw(base.right_facing(), Side::Right, 0);
            draw(base, Side::Front, 0);
        }
    }
}

/// Cells beside the view axis whose front walls are drawn, with their
/// lateral offsets. The left side comes first, each side from the outside
/// in.
fn lateral_faces(base: Position, spread: i32) -> Vec<(Position, i32)> {
    let left = (1..=spread).rev().map(|l| (base.step_left(l), -l));
    let right = (1..=spread).rev().map(|l| (base.step_right(l), l));
    left.chain(right).collect()
}
