use crate::{Layout, Map, Position};

/// Fixed choices for a game session.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct GameConfig {
    /// Fixture the map is built from on a new game.
    pub layout: Layout,
    /// Whether sideways steps are allowed.
    pub strafing: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            layout: Default::default(),
            strafing: true,
        }
    }
}

/// Toplevel game logic state, the current map and where the player is on
/// it.
#[derive(Clone, Debug)]
pub struct GameState {
    config: GameConfig,
    map: Map,
    player: Position,
}

impl GameState {
    /// Create a game state that has not started yet. The map is empty until
    /// `start_new_game` is called.
    pub fn new(config: GameConfig) -> Self {
        GameState {
            config,
            map: Default::default(),
            player: Default::default(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn player(&self) -> Position {
        self.player
    }

    /// Throw away the current map, build a fresh one and put the player at
    /// its starting point.
    pub fn start_new_game(&mut self) {
        self.map = Map::mockup(self.config.layout);
        self.player.copy_from(&self.map.starting_point(0));
        log::info!("new game, player at {}", self.player);
    }

    /// Move the player to `dest` if the cell face `gate` is passable.
    fn try_move(&mut self, gate: Position, dest: Position) -> bool {
        if self.map.can_pass(gate) {
            self.player = dest;
            true
        } else {
            log::debug!("blocked at {gate}");
            false
        }
    }

    pub fn move_forward(&mut self) -> bool {
        let p = self.player;
        self.try_move(p, p.ahead(1))
    }

    pub fn move_back(&mut self) -> bool {
        let p = self.player;
        self.try_move(p.reversed(), p.behind(1))
    }

    /// Sidestep to the left, keeping the current facing.
    pub fn move_left(&mut self) -> bool {
        if !self.config.strafing {
            return false;
        }
        let p = self.player;
        self.try_move(p.left_facing(), p.step_left(1))
    }

    /// Sidestep to the right, keeping the current facing.
    pub fn move_right(&mut self) -> bool {
        if !self.config.strafing {
            return false;
        }
        let p = self.player;
        self.try_move(p.right_facing(), p.step_right(1))
    }

    pub fn turn_left(&mut self) {
        self.player = self.player.left_facing();
    }

    pub fn turn_right(&mut self) {
        self.player = self.player.right_facing();
    }
}
