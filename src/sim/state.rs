//! Game state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Aabb;
use crate::consts::*;

/// Which sprite an obstacle uses. Flowers are short, clouds are tall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    Flower,
    Cloud,
}

impl ObstacleKind {
    /// Sprite height in pixels
    pub fn height(self) -> f32 {
        match self {
            ObstacleKind::Flower => FLOWER_HEIGHT,
            ObstacleKind::Cloud => CLOUD_HEIGHT,
        }
    }
}

/// A scrolling obstacle, resting on the floor
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub kind: ObstacleKind,
}

impl Obstacle {
    /// Spawn a new obstacle at the right viewport edge
    pub fn new(kind: ObstacleKind, viewport_w: f32, floor_y: f32) -> Self {
        let height = kind.height();
        Self {
            x: viewport_w,
            y: floor_y - height,
            width: OBSTACLE_WIDTH,
            height,
            kind,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }

    /// True once the trailing edge has crossed the left viewport boundary
    pub fn off_screen(&self) -> bool {
        self.x + self.width < 0.0
    }
}

/// The player sprite
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner in screen coordinates
    pub pos: Vec2,
    pub width: f32,
    /// Current height; toggles between standing and duck height
    pub height: f32,
    /// Vertical velocity, positive is downward (screen coordinates)
    pub vel_y: f32,
    pub airborne: bool,
    pub ducking: bool,
    /// Frames remaining in the current duck
    pub duck_frames: u32,
    /// Frames until the next duck is allowed
    pub duck_cooldown: u32,
}

impl Player {
    pub fn new(floor_y: f32) -> Self {
        Self {
            pos: Vec2::new(PLAYER_X, floor_y - PLAYER_HEIGHT),
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            vel_y: 0.0,
            airborne: false,
            ducking: false,
            duck_frames: 0,
            duck_cooldown: 0,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    /// Snap a grounded player onto the floor
    pub fn clamp_to_floor(&mut self, floor_y: f32) {
        self.pos.y = floor_y - self.height;
    }

    /// End the current duck and arm the cooldown
    pub(crate) fn end_duck(&mut self, floor_y: f32) {
        self.ducking = false;
        self.duck_frames = 0;
        self.height = PLAYER_HEIGHT;
        self.duck_cooldown = DUCK_COOLDOWN_FRAMES;
        if !self.airborne {
            self.clamp_to_floor(floor_y);
        }
    }
}

/// Complete game state. Owned by the host loop and mutated only through
/// `tick` and `apply_input`.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub viewport_w: f32,
    pub viewport_h: f32,
    /// Ground level, derived from viewport height
    pub floor_y: f32,
    /// Obstacles cleared this run, monotonic
    pub score: u64,
    /// Best score ever achieved (loaded at startup, raised on game over)
    pub best_score: u64,
    pub level: u32,
    /// Obstacle scroll speed (pixels/frame)
    pub speed: f32,
    pub spawn_timer: u32,
    pub spawn_interval: u32,
    /// Background scroll offset, wraps every viewport width
    pub bg_offset: f32,
    /// Terminal until an explicit restart
    pub game_over: bool,
    pub frame: u64,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
}

impl GameState {
    pub fn new(seed: u64, viewport_w: f32, viewport_h: f32) -> Self {
        let floor_y = viewport_h * FLOOR_RATIO;
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            viewport_w,
            viewport_h,
            floor_y,
            score: 0,
            best_score: 0,
            level: 1,
            speed: BASE_SPEED,
            spawn_timer: 0,
            spawn_interval: SPAWN_INTERVAL_START,
            bg_offset: 0.0,
            game_over: false,
            frame: 0,
            player: Player::new(floor_y),
            obstacles: Vec::new(),
        }
    }

    /// Reset for a fresh run. Keeps the persisted best score and the RNG
    /// stream; everything else returns to its initial value.
    pub fn restart(&mut self) {
        self.score = 0;
        self.level = 1;
        self.speed = BASE_SPEED;
        self.spawn_timer = 0;
        self.spawn_interval = SPAWN_INTERVAL_START;
        self.bg_offset = 0.0;
        self.game_over = false;
        self.frame = 0;
        self.player = Player::new(self.floor_y);
        self.obstacles.clear();
    }

    /// Viewport resize: recompute the floor and re-clamp a grounded player
    pub fn resize(&mut self, viewport_w: f32, viewport_h: f32) {
        self.viewport_w = viewport_w;
        self.viewport_h = viewport_h;
        self.floor_y = viewport_h * FLOOR_RATIO;
        if !self.player.airborne {
            self.player.clamp_to_floor(self.floor_y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick::tick;

    #[test]
    fn new_state_starts_grounded() {
        let state = GameState::new(1, 800.0, 600.0);
        assert_eq!(state.floor_y, 360.0);
        assert_eq!(state.player.pos.y, state.floor_y - PLAYER_HEIGHT);
        assert!(!state.player.airborne);
    }

    #[test]
    fn restart_resets_run_but_keeps_best_score() {
        let mut state = GameState::new(1, 800.0, 600.0);
        state.score = 17;
        state.best_score = 42;
        state.level = 4;
        state.speed = BASE_SPEED + 3.0 * SPEED_PER_LEVEL;
        state.spawn_interval = 140;
        state.game_over = true;
        state
            .obstacles
            .push(Obstacle::new(ObstacleKind::Flower, 800.0, state.floor_y));

        state.restart();

        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.speed, BASE_SPEED);
        assert_eq!(state.spawn_interval, SPAWN_INTERVAL_START);
        assert!(!state.game_over);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.best_score, 42);
    }

    #[test]
    fn resize_reclamps_grounded_player() {
        let mut state = GameState::new(1, 800.0, 600.0);
        state.resize(1024.0, 900.0);
        assert_eq!(state.floor_y, 540.0);
        assert_eq!(state.player.pos.y, state.floor_y - state.player.height);
    }

    #[test]
    fn resize_leaves_airborne_player_alone() {
        let mut state = GameState::new(1, 800.0, 600.0);
        state.player.airborne = true;
        state.player.pos.y = 100.0;
        state.resize(1024.0, 900.0);
        assert_eq!(state.player.pos.y, 100.0);
        // Landing after the resize still settles on the new floor
        for _ in 0..200 {
            tick(&mut state);
        }
        assert!(!state.player.airborne);
        assert_eq!(state.player.pos.y, state.floor_y - state.player.height);
    }
}
