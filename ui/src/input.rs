use std::str::FromStr;

use derive_more::Display;
use engine::GameState;
use strum::{EnumIter, IntoEnumIterator};

/// Ticks between repeated moves while a motion key is held.
pub const MOTION_DELAY: i32 = 10;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, EnumIter)]
pub enum Key {
    Forward,
    Back,
    StrafeLeft,
    StrafeRight,
    TurnLeft,
    TurnRight,
    Quit,
}

impl FromStr for Key {
    type Err = String;

    /// Parse a physical key name into the game key it's bound to.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use Key::*;
        match s {
            "w" | "W" | "Up" => Ok(Forward),
            "s" | "S" | "Down" => Ok(Back),
            "q" | "Q" | "," | "<" => Ok(StrafeLeft),
            "e" | "E" | "." | ">" => Ok(StrafeRight),
            "a" | "A" | "Left" => Ok(TurnLeft),
            "d" | "D" | "Right" => Ok(TurnRight),
            "Esc" => Ok(Quit),
            _ => Err(format!("unbound key {s:?}")),
        }
    }
}

impl Key {
    /// Slot in the held key table for keys that repeat while held.
    fn motion_idx(self) -> Option<usize> {
        match self {
            Key::Forward => Some(0),
            Key::Back => Some(1),
            Key::StrafeLeft => Some(2),
            Key::StrafeRight => Some(3),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum KeyEvent {
    Down(Key),
    Up(Key),
}

/// Feedback line for something the player did.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Display)]
pub enum Msg {
    #[display("Moved Forward...")]
    MovedForward,
    #[display("Moved Back...")]
    MovedBack,
    #[display("Stepped Left...")]
    SteppedLeft,
    #[display("Stepped Right...")]
    SteppedRight,
    #[display("That way is blocked!")]
    Blocked,
    #[display("Turned Left...")]
    TurnedLeft,
    #[display("Turned Right...")]
    TurnedRight,
}

/// Turns key events into game state changes.
///
/// Motion keys repeat while held, gated by a cooldown counter shared by all
/// of them. Turns happen once when the key is released.
#[derive(Clone, Debug)]
pub struct Controls {
    held: [bool; 4],
    delay: i32,
    cooldown: i32,
    quit: bool,
}

impl Default for Controls {
    fn default() -> Self {
        Controls::new(MOTION_DELAY)
    }
}

impl Controls {
    pub fn new(delay: i32) -> Self {
        Controls {
            held: [false; 4],
            delay,
            cooldown: delay,
            quit: false,
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        key.motion_idx().is_some_and(|i| self.held[i])
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Handle a single key event. Turns are applied right away and reported
    /// back, everything else waits for `tick`.
    pub fn handle(&mut self, ev: KeyEvent, g: &mut GameState) -> Option<Msg> {
        match ev {
            KeyEvent::Down(Key::Quit) => {
                log::info!("quit requested");
                self.quit = true;
                None
            }
            KeyEvent::Down(k) => {
                if let Some(i) = k.motion_idx() {
                    self.held[i] = true;
                }
                None
            }
            KeyEvent::Up(Key::TurnLeft) => {
                g.turn_left();
                Some(Msg::TurnedLeft)
            }
            KeyEvent::Up(Key::TurnRight) => {
                g.turn_right();
                Some(Msg::TurnedRight)
            }
            KeyEvent::Up(k) => {
                if let Some(i) = k.motion_idx() {
                    self.held[i] = false;
                }
                None
            }
        }
    }

    /// Advance one tick, moving the player for held keys whose turn has
    /// come up.
    pub fn tick(&mut self, g: &mut GameState) -> Vec<Msg> {
        let mut ret = Vec::new();

        for key in Key::iter() {
            if !self.is_held(key) {
                continue;
            }

            self.cooldown -= 1;
            if self.cooldown > 0 {
                continue;
            }
            self.cooldown = self.delay;

            let (moved, msg) = match key {
                Key::Forward => (g.move_forward(), Msg::MovedForward),
                Key::Back => (g.move_back(), Msg::MovedBack),
                Key::StrafeLeft => (g.move_left(), Msg::SteppedLeft),
                Key::StrafeRight => (g.move_right(), Msg::SteppedRight),
                _ => continue,
            };
            ret.push(if moved { msg } else { Msg::Blocked });
        }

        ret
    }
}

#[cfg(test)]
mod test {
    use engine::{Dir::*, GameConfig, Position};

    use super::*;

    fn game() -> GameState {
        let mut ret = GameState::new(GameConfig::default());
        ret.start_new_game();
        ret
    }

    #[test]
    fn key_names() {
        assert_eq!("w".parse::<Key>(), Ok(Key::Forward));
        assert_eq!("Down".parse::<Key>(), Ok(Key::Back));
        assert_eq!("<".parse::<Key>(), Ok(Key::StrafeLeft));
        assert_eq!(".".parse::<Key>(), Ok(Key::StrafeRight));
        assert_eq!("Left".parse::<Key>(), Ok(Key::TurnLeft));
        assert_eq!("d".parse::<Key>(), Ok(Key::TurnRight));
        assert_eq!("Esc".parse::<Key>(), Ok(Key::Quit));
        assert!("x".parse::<Key>().is_err());
    }

    #[test]
    fn messages() {
        assert_eq!(Msg::MovedForward.to_string(), "Moved Forward...");
        assert_eq!(Msg::Blocked.to_string(), "That way is blocked!");
        assert_eq!(Msg::TurnedRight.to_string(), "Turned Right...");
    }

    #[test]
    fn held_key_moves_after_cooldown() {
        let mut g = game();
        let mut ctl = Controls::default();

        assert_eq!(ctl.handle(KeyEvent::Down(Key::Forward), &mut g), None);
        assert!(ctl.is_held(Key::Forward));

        for _ in 1..MOTION_DELAY {
            assert!(ctl.tick(&mut g).is_empty());
        }
        assert_eq!(ctl.tick(&mut g), vec![Msg::MovedForward]);
        assert_eq!(g.player(), Position::new(2, 1, East));

        // Keeps repeating while held.
        for _ in 1..MOTION_DELAY {
            assert!(ctl.tick(&mut g).is_empty());
        }
        assert_eq!(ctl.tick(&mut g), vec![Msg::MovedForward]);
        assert_eq!(g.player(), Position::new(3, 1, East));

        ctl.handle(KeyEvent::Up(Key::Forward), &mut g);
        for _ in 0..(3 * MOTION_DELAY) {
            assert!(ctl.tick(&mut g).is_empty());
        }
        assert_eq!(g.player(), Position::new(3, 1, East));
    }

    #[test]
    fn blocked_move() {
        let mut g = game();
        let mut ctl = Controls::new(1);
        ctl.handle(KeyEvent::Down(Key::Back), &mut g);
        assert_eq!(ctl.tick(&mut g), vec![Msg::Blocked]);
        assert_eq!(g.player(), Position::new(1, 1, East));
    }

    #[test]
    fn keys_share_cooldown() {
        let mut g = game();
        let mut ctl = Controls::new(2);
        ctl.handle(KeyEvent::Down(Key::Forward), &mut g);
        ctl.handle(KeyEvent::Down(Key::StrafeRight), &mut g);

        // Both keys count down the same counter, so the second one fires on
        // the first tick.
        assert_eq!(ctl.tick(&mut g), vec![Msg::SteppedRight]);
        assert_eq!(g.player(), Position::new(1, 2, East));

        ctl.handle(KeyEvent::Up(Key::StrafeRight), &mut g);
        assert!(ctl.tick(&mut g).is_empty());
        // Inner block wall.
        assert_eq!(ctl.tick(&mut g), vec![Msg::Blocked]);
        assert_eq!(g.player(), Position::new(1, 2, East));
    }

    #[test]
    fn turns_on_release() {
        let mut g = game();
        let mut ctl = Controls::default();

        assert_eq!(ctl.handle(KeyEvent::Down(Key::TurnRight), &mut g), None);
        assert_eq!(g.player().facing, East);
        assert_eq!(
            ctl.handle(KeyEvent::Up(Key::TurnRight), &mut g),
            Some(Msg::TurnedRight)
        );
        assert_eq!(g.player().facing, South);
        assert_eq!(
            ctl.handle(KeyEvent::Up(Key::TurnLeft), &mut g),
            Some(Msg::TurnedLeft)
        );
        assert_eq!(g.player().facing, East);
        assert!(!ctl.is_held(Key::TurnLeft));
    }

    #[test]
    fn quit() {
        let mut g = game();
        let mut ctl = Controls::default();
        assert!(!ctl.quit_requested());
        ctl.handle(KeyEvent::Down(Key::Quit), &mut g);
        assert!(ctl.quit_requested());
    }
}
