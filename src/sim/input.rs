//! Input-intent transitions
//!
//! Key and pointer events arrive from the host event queue between frames
//! and are applied here as point mutations, validated against the current
//! player state. While the game-over flag is set, any press becomes a
//! restart instead.

use super::state::GameState;
use crate::consts::*;

/// A single host input signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Jump key pressed
    Jump,
    /// Duck key pressed
    DuckStart,
    /// Duck key released
    DuckEnd,
    /// Mouse click / tap
    Pointer,
}

impl InputEvent {
    /// Presses can trigger the game-over restart; releases cannot
    pub fn is_press(self) -> bool {
        self != InputEvent::DuckEnd
    }
}

/// Apply one input event to the state
pub fn apply_input(state: &mut GameState, event: InputEvent) {
    if state.game_over {
        if event.is_press() {
            log::info!("restarting (final score {})", state.score);
            state.restart();
        }
        return;
    }

    let floor_y = state.floor_y;
    let player = &mut state.player;
    match event {
        InputEvent::Jump => {
            if !player.airborne {
                player.airborne = true;
                player.vel_y = -JUMP_FORCE;
            }
        }
        InputEvent::DuckStart => {
            if !player.ducking && !player.airborne && player.duck_cooldown == 0 {
                player.ducking = true;
                player.duck_frames = DUCK_MAX_FRAMES;
                player.height = PLAYER_DUCK_HEIGHT;
                player.clamp_to_floor(floor_y);
            }
        }
        InputEvent::DuckEnd => {
            if player.ducking {
                player.end_duck(floor_y);
            }
        }
        InputEvent::Pointer => {}
    }
}
