use std::{path::Path, str::FromStr, thread, time::Duration};

use anyhow::{bail, Context};

use engine::prelude::*;
use ui::prelude::*;

/// Longest accepted script, about an hour at 60 ticks per second.
pub const MAX_SCRIPT_TICKS: usize = 60 * 60 * 60;

/// Timeline of key events, one list of events per tick.
#[derive(Clone, Default, Debug, Eq, PartialEq)]
pub struct Script(Vec<Vec<KeyEvent>>);

impl FromStr for Script {
    type Err = anyhow::Error;

    /// Parse whitespace-separated steps. `k` presses key `k` for one tick,
    /// `k:N` holds it for N ticks and `-:N` waits N ticks.
    fn from_str(s: &str) -> anyhow::Result<Self> {
        let mut ticks: Vec<Vec<KeyEvent>> = Vec::new();
        let mut t: usize = 0;

        let mut at = |t: usize, ev: KeyEvent| {
            if ticks.len() <= t {
                ticks.resize(t + 1, Vec::new());
            }
            ticks[t].push(ev);
        };

        for step in s.split_whitespace() {
            let (name, n) = match step.rsplit_once(':') {
                Some((name, n)) if !name.is_empty() => {
                    let n = n
                        .parse::<usize>()
                        .with_context(|| format!("bad tick count {step:?}"))?;
                    (name, n)
                }
                _ => (step, 1),
            };
            if n == 0 {
                bail!("zero length step {step:?}");
            }

            let end = match t.checked_add(n) {
                Some(end) if end <= MAX_SCRIPT_TICKS => end,
                _ => bail!(
                    "script is longer than {MAX_SCRIPT_TICKS} ticks at {step:?}"
                ),
            };

            if name != "-" {
                let key = name.parse::<Key>().map_err(anyhow::Error::msg)?;
                at(t, KeyEvent::Down(key));
                at(end, KeyEvent::Up(key));
            }
            t = end;
        }

        if ticks.len() < t {
            ticks.resize(t, Vec::new());
        }
        Ok(Script(ticks))
    }
}

impl Script {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[KeyEvent]> {
        self.0.iter().map(|v| v.as_slice())
    }
}

/// Running game with its display.
pub struct Session {
    game: GameState,
    controls: Controls,
    hud: Hud,
    screen: Screen,
}

impl Session {
    pub fn new(config: GameConfig, screen: Screen) -> Self {
        let mut game = GameState::new(config);
        game.start_new_game();

        Session {
            game,
            controls: Default::default(),
            hud: Default::default(),
            screen,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Run one tick of the game with the given input events. Return whether
    /// the screen was redrawn.
    pub fn tick(&mut self, events: &[KeyEvent]) -> bool {
        for &ev in events {
            if let Some(msg) = self.controls.handle(ev, &mut self.game) {
                self.hud.post(msg);
            }
        }

        for msg in self.controls.tick(&mut self.game) {
            self.hud.post(msg);
        }
        self.hud.tick();

        if self.hud.take_redraw() {
            self.screen.draw(&self.game, &self.hud);
            true
        } else {
            false
        }
    }

    /// Play through a key script, stopping early if quit is pressed.
    pub fn run(
        &mut self,
        script: &Script,
        frames_dir: Option<&Path>,
        frame_delay: Duration,
    ) -> anyhow::Result<()> {
        // Show the starting view even with an empty script.
        self.screen.draw(&self.game, &self.hud);
        if script.is_empty() {
            log::info!("empty key script");
        } else {
            log::info!("running {} ticks", script.len());
        }

        for (t, events) in script.iter().enumerate() {
            let redrawn = self.tick(events);

            if self.controls.quit_requested() {
                break;
            }

            if redrawn {
                if let Some(dir) = frames_dir {
                    let path = dir.join(format!("frame_{t:05}.png"));
                    self.screen.buffer().save_png(&path)?;
                }
            }

            if !frame_delay.is_zero() {
                thread::sleep(frame_delay);
            }
        }

        Ok(())
    }
}
