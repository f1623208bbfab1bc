use std::fmt;

use engine::{Dir, Position};

/// Ticks a message stays up before it's replaced with the idle message.
pub const MESSAGE_CLEAR_DELAY: i32 = 50;

const START_MSG: &str = "Starting Out...";
const IDLE_MSG: &str = "Waiting...";

/// Text status display: the latest action message, player coordinates and
/// a compass line.
#[derive(Clone, Debug)]
pub struct Hud {
    message: String,
    clear_delay: i32,
    clear_counter: i32,
    redraw: bool,
}

impl Default for Hud {
    fn default() -> Self {
        Hud::new(MESSAGE_CLEAR_DELAY)
    }
}

impl Hud {
    pub fn new(clear_delay: i32) -> Self {
        Hud {
            message: START_MSG.to_owned(),
            clear_delay,
            clear_counter: clear_delay,
            redraw: true,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Show a new action message.
    pub fn post(&mut self, msg: impl fmt::Display) {
        self.message = msg.to_string();
        log::info!("{}", self.message);
        self.request_redraw();
    }

    pub fn request_redraw(&mut self) {
        self.redraw = true;
    }

    /// Return whether a redraw was requested and clear the request.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }

    /// Count down to clearing the message.
    pub fn tick(&mut self) {
        self.clear_counter -= 1;
        if self.clear_counter <= 0 {
            self.clear_counter = self.clear_delay;
            self.message = IDLE_MSG.to_owned();
            self.request_redraw();
        }
    }

    /// Lines of text to show for the player at `player`.
    pub fn lines(&self, player: Position) -> [String; 4] {
        [
            self.message.clone(),
            format!("Player X: {:2}", player.x),
            format!("Player Z: {:2}", player.y),
            compass(player.facing),
        ]
    }
}

pub fn compass(facing: Dir) -> String {
    format!("You are facing {facing}.")
}
