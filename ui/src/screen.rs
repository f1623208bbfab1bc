//! Composition of the full game screen.

use std::path::Path;

use anyhow::Context;
use engine::{Dir, GameState};
use gfx::{Rgba, Window};
use glam::{ivec2, IVec2};
use util::Rect;

use crate::{ArtCatalog, Buffer, CorridorView, Hud, MiniMap};

pub const SCREEN_WIDTH: i32 = 640;
pub const SCREEN_HEIGHT: i32 = 480;

const VIEW_WIDTH: i32 = 300;
const VIEW_HEIGHT: i32 = 400;

/// Where the corridor view goes, vertically centered.
pub const VIEW_POS: IVec2 = IVec2::new(40, SCREEN_HEIGHT / 2 - VIEW_HEIGHT / 2);
pub const COMPASS_POS: IVec2 = IVec2::new(42, 42);
pub const MINIMAP_POS: IVec2 = IVec2::new(390, 290);
pub const MINIMAP_SIZE: i32 = 140;

/// Decorative images drawn on top of the game view.
#[derive(Clone, Debug)]
pub struct Overlays {
    frame: Buffer,
    /// Compass needle for each facing, indexed by `Dir::idx`.
    compass: [Option<Buffer>; 4],
}

impl Overlays {
    pub fn new(frame: Buffer, compass: [Option<Buffer>; 4]) -> Self {
        Overlays { frame, compass }
    }

    /// Load overlay images from a directory.
    ///
    /// Only the screen frame is mandatory, startup fails without it. The
    /// compass needles are optional and a missing one is only warned about.
    pub fn load(dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        let dir = dir.as_ref();
        let frame = Buffer::load(dir.join("mainscreen.png"))
            .context("screen frame overlay is required")?;

        let compass = ["n", "e", "s", "w"].map(|d| {
            match Buffer::load(dir.join(format!("sm_compass_{d}.png"))) {
                Ok(img) => Some(img),
                Err(e) => {
                    log::warn!("{e:#}");
                    None
                }
            }
        });

        Ok(Overlays::new(frame, compass))
    }

    pub fn frame(&self) -> &Buffer {
        &self.frame
    }

    pub fn compass(&self, facing: Dir) -> Option<&Buffer> {
        self.compass[facing.idx()].as_ref()
    }
}

/// Main screen and everything drawn on it.
pub struct Screen {
    buf: Buffer,
    view: CorridorView,
    minimap: MiniMap,
    art: ArtCatalog,
    overlays: Overlays,
}

impl Screen {
    pub fn new(art: ArtCatalog, overlays: Overlays) -> Self {
        Screen {
            buf: Buffer::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32),
            view: CorridorView::new(VIEW_WIDTH, VIEW_HEIGHT),
            minimap: MiniMap::new(MINIMAP_SIZE, MINIMAP_SIZE),
            art,
            overlays,
        }
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buf
    }

    /// Redraw the whole screen for the current game state.
    pub fn draw(&mut self, g: &GameState, hud: &Hud) {
        let player = g.player();
        let root = Window::from(&self.buf);
        root.fill(&mut self.buf, Rgba::BLACK);

        let view_win = root.sub(Rect::sized(self.view.dim()) + VIEW_POS);
        self.view
            .render(&mut self.buf, &view_win, g.map(), player, &self.art);

        for line in hud.lines(player) {
            log::debug!("{line}");
        }

        root.blit_buffer(&mut self.buf, ivec2(0, 0), &self.overlays.frame);
        if let Some(compass) = self.overlays.compass(player.facing) {
            root.blit_buffer(&mut self.buf, COMPASS_POS, compass);
        }

        self.minimap.update(g.map(), player);
        self.minimap.render(&mut self.buf, &root, MINIMAP_POS);
    }
}
