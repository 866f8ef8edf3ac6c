//! # Input State
//!
//! This module defines the input state types used by the input manager.
//! It provides enums and structs for representing the state of input devices, and
//! the key bindings that turn a frame's input into an [`InputIntent`].

use std::collections::HashMap;

use winit::{event::MouseButton, keyboard::KeyCode};

use crate::game_state::player::intent::InputIntent;

/// Digit keys and the block type each one selects.
pub const BLOCK_SELECTION_KEYS: [(KeyCode, u8); 9] = [
    (KeyCode::Digit1, 1),
    (KeyCode::Digit2, 2),
    (KeyCode::Digit3, 3),
    (KeyCode::Digit4, 4),
    (KeyCode::Digit5, 5),
    (KeyCode::Digit6, 6),
    (KeyCode::Digit7, 7),
    (KeyCode::Digit8, 8),
    (KeyCode::Digit9, 9),
];

/// Represents the state of a key or button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RawInputState {
    /// Key/button is not pressed
    #[default]
    NotPressed,
    /// Key/button was just pressed this frame
    Pressed,
    /// Key/button has been held down for multiple frames
    Held,
    /// Key/button was just released this frame
    Released,
}

impl RawInputState {
    /// Determines if the input is actively down (either pressed or held)
    pub fn is_active(&self) -> bool {
        matches!(self, RawInputState::Pressed | RawInputState::Held)
    }

    /// Determines if the input was just pressed this frame
    pub fn is_just_pressed(&self) -> bool {
        matches!(self, RawInputState::Pressed)
    }

    /// Derives the transition from the previous and current raw states
    pub fn from_raw_states(previous: bool, current: bool) -> Self {
        match (previous, current) {
            (false, true) => RawInputState::Pressed,
            (true, true) => RawInputState::Held,
            (true, false) => RawInputState::Released,
            (false, false) => RawInputState::NotPressed,
        }
    }
}

/// A snapshot of the processed input states with state transitions.
///
/// Key and button states are translated into `RawInputState` values, and the
/// pointer and touch positions are in physical screen pixels.
#[derive(Debug, Default)]
pub struct ProcessedInputState {
    /// Current state of all tracked keyboard keys
    pub keyboard_states: HashMap<KeyCode, RawInputState>,

    /// Current state of mouse buttons
    pub mouse_button_states: HashMap<MouseButton, RawInputState>,

    /// Last known cursor position
    pub cursor_position: Option<(f64, f64)>,

    /// Position of the active touch, if a finger is down
    pub touch_position: Option<(f64, f64)>,
}

impl ProcessedInputState {
    /// Gets the state of a keyboard key
    pub fn get_key_state(&self, key: KeyCode) -> RawInputState {
        self.keyboard_states.get(&key).copied().unwrap_or_default()
    }

    /// Gets the state of a mouse button
    pub fn get_mouse_button_state(&self, button: MouseButton) -> RawInputState {
        self.mouse_button_states.get(&button).copied().unwrap_or_default()
    }

    fn any_active(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|&key| self.get_key_state(key).is_active())
    }

    fn just_pressed(&self, key: KeyCode) -> bool {
        self.get_key_state(key).is_just_pressed()
    }

    /// Translates the keyboard bindings into an intent.
    ///
    /// Pointer and touch actions need the camera to resolve world cells and are
    /// added by the caller.
    ///
    /// # Returns
    /// The keyboard part of this frame's `InputIntent`.
    pub fn keyboard_intent(&self) -> InputIntent {
        InputIntent {
            move_left: self.any_active(&[KeyCode::KeyA, KeyCode::ArrowLeft]),
            move_right: self.any_active(&[KeyCode::KeyD, KeyCode::ArrowRight]),
            jetpack: self.any_active(&[KeyCode::Space, KeyCode::ArrowUp]),
            jump: self.any_active(&[KeyCode::KeyW]),
            mine_below: self.any_active(&[KeyCode::KeyS, KeyCode::ArrowDown]),
            toggle_wall_mining: self.just_pressed(KeyCode::KeyT),
            select_block: BLOCK_SELECTION_KEYS
                .iter()
                .find(|(key, _)| self.just_pressed(*key))
                .map(|&(_, block_type)| block_type),
            toggle_logo: self.just_pressed(KeyCode::KeyL),
            leave_logo: self.just_pressed(KeyCode::Escape),
            ..Default::default()
        }
    }
}

/// Tracks the state of mouse inputs.
pub struct MouseInput {
    /// Previous state of each mouse button (pressed/released)
    pub mouse_button_inputs_old: HashMap<MouseButton, bool>,
    /// Current state of each mouse button (pressed/released)
    pub mouse_button_inputs_new: HashMap<MouseButton, bool>,

    /// Last known cursor position in physical pixels
    pub cursor_position: Option<(f64, f64)>,
}
