//! # Input Manager
//!
//! This module handles input processing for the application, including:
//! - Keyboard input state tracking
//! - Mouse button and cursor tracking
//! - Touch tracking
//!
//! Window events are folded into raw boolean states as they arrive. Once per frame
//! the manager turns them into a [`ProcessedInputState`] holding press/hold/release
//! transitions, and the game turns that into an intent.

use std::collections::HashMap;

use winit::{
    event::{ElementState, KeyEvent, MouseButton, TouchPhase, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

use super::input_state::{MouseInput, ProcessedInputState, RawInputState, BLOCK_SELECTION_KEYS};

const KEY_CODES: [KeyCode; 12] = [
    KeyCode::KeyW,
    KeyCode::KeyA,
    KeyCode::KeyS,
    KeyCode::KeyD,
    KeyCode::KeyT,
    KeyCode::KeyL,
    KeyCode::Space,
    KeyCode::Escape,
    KeyCode::ArrowLeft,
    KeyCode::ArrowRight,
    KeyCode::ArrowUp,
    KeyCode::ArrowDown,
];

/// Manages the state of all input devices and processes input events.
pub struct InputManager {
    /// Previous state of all tracked keyboard keys
    pub keyboard_inputs_old: HashMap<KeyCode, bool>,
    /// Current state of all tracked keyboard keys
    pub keyboard_inputs_new: HashMap<KeyCode, bool>,

    /// Current state of mouse inputs
    pub mouse_inputs: MouseInput,

    /// Finger currently driving touch input, and where it is
    pub active_touch: Option<(u64, (f64, f64))>,
}

impl InputManager {
    /// Creates a new InputManager with every tracked key and button released.
    pub fn new() -> Self {
        let tracked_keys = KEY_CODES
            .into_iter()
            .chain(BLOCK_SELECTION_KEYS.into_iter().map(|(key, _)| key));

        let keyboard_inputs_old: HashMap<KeyCode, bool> =
            tracked_keys.map(|key_code| (key_code, false)).collect();
        let keyboard_inputs_new = keyboard_inputs_old.clone();

        let mouse_button_inputs_old: HashMap<MouseButton, bool> = [MouseButton::Left, MouseButton::Right]
            .into_iter()
            .map(|button| (button, false))
            .collect();
        let mouse_button_inputs_new = mouse_button_inputs_old.clone();

        Self {
            keyboard_inputs_old,
            keyboard_inputs_new,
            mouse_inputs: MouseInput {
                mouse_button_inputs_old,
                mouse_button_inputs_new,
                cursor_position: None,
            },
            active_touch: None,
        }
    }

    /// Updates the old state with the current state to prepare for the next frame.
    pub fn move_old_states(&mut self) {
        for (key, new_state) in self.keyboard_inputs_new.iter() {
            if let Some(old_state) = self.keyboard_inputs_old.get_mut(key) {
                *old_state = *new_state;
            }
        }

        for (button, new_state) in self.mouse_inputs.mouse_button_inputs_new.iter() {
            if let Some(old_state) = self.mouse_inputs.mouse_button_inputs_old.get_mut(button) {
                *old_state = *new_state;
            }
        }
    }

    /// Processes a window event and updates internal input state.
    ///
    /// # Arguments
    /// * `event` - The window event to process
    pub fn intake_input(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state,
                        physical_key: PhysicalKey::Code(key),
                        ..
                    },
                ..
            } => {
                if let Some(key_state) = self.keyboard_inputs_new.get_mut(key) {
                    *key_state = *state == ElementState::Pressed;
                }
            }
            WindowEvent::MouseInput { button, state, .. } => {
                if let Some(button_state) = self.mouse_inputs.mouse_button_inputs_new.get_mut(button) {
                    *button_state = *state == ElementState::Pressed;
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_inputs.cursor_position = Some((position.x, position.y));
            }
            WindowEvent::CursorLeft { .. } => {
                self.mouse_inputs.cursor_position = None;
            }
            WindowEvent::Touch(touch) => {
                let location = (touch.location.x, touch.location.y);
                match touch.phase {
                    TouchPhase::Started => {
                        if self.active_touch.is_none() {
                            self.active_touch = Some((touch.id, location));
                        }
                    }
                    TouchPhase::Moved => {
                        if let Some((id, position)) = &mut self.active_touch {
                            if *id == touch.id {
                                *position = location;
                            }
                        }
                    }
                    TouchPhase::Ended | TouchPhase::Cancelled => {
                        if matches!(self.active_touch, Some((id, _)) if id == touch.id) {
                            self.active_touch = None;
                        }
                    }
                }
            }
            _ => {}
        }
    }

    /// Creates a processed input state from the current raw boolean states.
    ///
    /// # Returns
    /// A new `ProcessedInputState` with pressed, held, released or not pressed
    /// values for every tracked key and button.
    pub fn create_processed_input_state(&self) -> ProcessedInputState {
        let keyboard_states = self
            .keyboard_inputs_new
            .iter()
            .map(|(key, &new_state)| {
                let old_state = self.keyboard_inputs_old.get(key).copied().unwrap_or(false);
                (*key, RawInputState::from_raw_states(old_state, new_state))
            })
            .collect();

        let mouse_button_states = self
            .mouse_inputs
            .mouse_button_inputs_new
            .iter()
            .map(|(button, &new_state)| {
                let old_state = self
                    .mouse_inputs
                    .mouse_button_inputs_old
                    .get(button)
                    .copied()
                    .unwrap_or(false);
                (*button, RawInputState::from_raw_states(old_state, new_state))
            })
            .collect();

        ProcessedInputState {
            keyboard_states,
            mouse_button_states,
            cursor_position: self.mouse_inputs.cursor_position,
            touch_position: self.active_touch.map(|(_, position)| position),
        }
    }

    /// Returns the processed input state and rolls the transitions forward.
    pub fn get_and_reset_processed_input(&mut self) -> ProcessedInputState {
        let processed_input = self.create_processed_input_state();
        self.move_old_states();
        processed_input
    }

    /// Releases every key, button and touch.
    ///
    /// Called when the window loses focus to prevent stuck keys.
    pub fn reset_inputs(&mut self) {
        self.keyboard_inputs_new.values_mut().for_each(|state| *state = false);
        self.mouse_inputs
            .mouse_button_inputs_new
            .values_mut()
            .for_each(|state| *state = false);
        self.active_touch = None;
        self.move_old_states();
    }
}
