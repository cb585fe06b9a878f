//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame-based timestep only (one tick per rendered frame)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::{Aabb, hitboxes_collide};
pub use input::{InputEvent, apply_input};
pub use state::{GameState, Obstacle, ObstacleKind, Player};
pub use tick::tick;
