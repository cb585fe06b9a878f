//! Petal Dash - a pastel side-scrolling obstacle dodger
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, obstacles, scoring)
//! - `render`: Canvas-2D draw pass (wasm only)
//! - `assets`: Sprite loading gate (wasm only)
//! - `highscores`: Persisted best score

pub mod highscores;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod assets;
#[cfg(target_arch = "wasm32")]
pub mod render;

pub use highscores::HighScore;

/// Game configuration constants
pub mod consts {
    /// Fixed horizontal position of the player sprite
    pub const PLAYER_X: f32 = 100.0;
    pub const PLAYER_WIDTH: f32 = 60.0;
    /// Standing height
    pub const PLAYER_HEIGHT: f32 = 80.0;
    /// Height while ducking
    pub const PLAYER_DUCK_HEIGHT: f32 = 40.0;

    /// Initial upward speed of a jump (pixels/frame)
    pub const JUMP_FORCE: f32 = 15.0;
    /// Downward acceleration while airborne (pixels/frame^2)
    pub const GRAVITY: f32 = 0.6;

    /// Maximum duck duration in frames
    pub const DUCK_MAX_FRAMES: u32 = 45;
    /// Frames after a duck ends before the next duck is allowed
    pub const DUCK_COOLDOWN_FRAMES: u32 = 30;

    /// Ground level sits at this fraction of the viewport height
    pub const FLOOR_RATIO: f32 = 0.6;

    /// Starting scroll speed (pixels/frame)
    pub const BASE_SPEED: f32 = 4.0;
    /// Speed gained per level
    pub const SPEED_PER_LEVEL: f32 = 0.2;
    /// Background scrolls at half obstacle speed for parallax
    pub const BG_SCROLL_FACTOR: f32 = 0.5;

    /// Obstacle sprite width
    pub const OBSTACLE_WIDTH: f32 = 40.0;
    pub const FLOWER_HEIGHT: f32 = 50.0;
    pub const CLOUD_HEIGHT: f32 = 90.0;

    /// Frames between spawns at level 1
    pub const SPAWN_INTERVAL_START: u32 = 150;
    /// Spawn interval never drops below this
    pub const SPAWN_INTERVAL_MIN: u32 = 120;
    /// Interval reduction per level
    pub const SPAWN_INTERVAL_STEP: u32 = 2;

    /// Points per level-up
    pub const LEVEL_SCORE_STEP: u64 = 5;

    /// Inset applied to both hitboxes before overlap testing
    pub const HITBOX_MARGIN: f32 = 10.0;
}
