//! # Application State Management
//!
//! This module is the platform input adapter and frame driver:
//! - Window creation
//! - Input handling and translation into one `InputIntent` per frame
//! - The frame loop that ticks the game with the wall-clock delta
//! - Application lifecycle events

pub mod input_manager;
pub mod input_state;
pub mod window_builder;

use std::sync::Arc;

use cgmath::Point2;
use input_manager::InputManager;
use input_state::ProcessedInputState;

use winit::{
    application::ApplicationHandler,
    event::{MouseButton, WindowEvent},
    event_loop::ActiveEventLoop,
    window::{Window, WindowId},
};

use crate::{
    config::GameConfig,
    game_state::{player::intent::InputIntent, GameState},
};

/// The main application state container that manages the application's lifecycle.
///
/// Holds the configuration until the window exists, then the running game.
/// It implements `ApplicationHandler` to handle window events.
pub struct ApplicationState {
    /// Configuration used to start the game once the window is available
    pub config: GameConfig,

    /// The initialized application state, if the application has started
    pub state: Option<InitializedApplicationState>,
}

/// Represents the fully initialized and running state of the application.
pub struct InitializedApplicationState {
    /// The game core
    pub game_state: GameState,

    /// Handle to the application window
    pub window: Arc<Window>,

    /// Manages input state and event processing
    pub input_manager: InputManager,

    /// Timestamp of the last frame for delta time calculations
    pub last_wait_time: web_time::Instant,

    /// Last status text written to the window title
    last_status: String,
}

impl ApplicationState {
    pub fn new(config: GameConfig) -> Self {
        ApplicationState {
            config,
            state: None,
        }
    }

    /// Creates the window and the game.
    fn initialize_application_state(&mut self, event_loop: &ActiveEventLoop) {
        let window = window_builder::create_window(event_loop, &self.config.view);

        let mut game_state = GameState::new(self.config.clone());
        let size = window.inner_size();
        if size.width > 0 && size.height > 0 {
            game_state.resize(size.width as f32, size.height as f32);
        }

        self.state = Some(InitializedApplicationState {
            game_state,
            window,
            input_manager: InputManager::new(),
            last_wait_time: web_time::Instant::now(),
            last_status: String::new(),
        });
    }
}

impl InitializedApplicationState {
    /// Shows the HUD status line in the window title when it changes.
    fn draw_status(&mut self) {
        let status = self.game_state.status_line();
        if status != self.last_status {
            self.window
                .set_title(&format!("{} | {}", window_builder::WINDOW_TITLE, status));
            self.last_status = status;
        }
    }
}

/// Builds this frame's intent from keyboard, pointer and touch input.
///
/// Pointer positions are resolved to world cells through the game's camera.
fn frame_intent(input: &ProcessedInputState, game_state: &GameState) -> InputIntent {
    let mut intent = input.keyboard_intent();

    if let Some((x, y)) = input.cursor_position {
        let cell = game_state.pointer_cell(Point2::new(x as f32, y as f32));
        if input.get_mouse_button_state(MouseButton::Left).is_just_pressed() {
            intent.break_at = Some(cell);
        }
        if input.get_mouse_button_state(MouseButton::Right).is_just_pressed() {
            intent.place_at = Some(cell);
        }
    }

    if let Some((x, y)) = input.touch_position {
        game_state.apply_touch(&mut intent, Point2::new(x as f32, y as f32));
    }

    intent
}

impl ApplicationHandler for ApplicationState {
    /// Handles window-related events such as resize, focus changes, and input events.
    ///
    /// # Arguments
    /// * `_event_loop` - Reference to the active event loop
    /// * `_window_id` - ID of the window that generated the event
    /// * `event` - The window event to process
    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = &mut self.state else {
            return;
        };

        state.input_manager.intake_input(&event);

        match event {
            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    state
                        .game_state
                        .resize(size.width as f32, size.height as f32);
                }
            }
            WindowEvent::Focused(is_focused) => {
                if !is_focused {
                    state.input_manager.reset_inputs();
                }
            }
            WindowEvent::RedrawRequested => {
                state.draw_status();
            }
            WindowEvent::CloseRequested => state.game_state.stop(),
            _ => (),
        }
    }

    /// Called when the application is resumed. Creates the window and game on first resume.
    ///
    /// # Arguments
    /// * `event_loop` - Reference to the active event loop
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_none() {
            self.initialize_application_state(event_loop);
        }
    }

    /// Called before the event loop goes to sleep.
    ///
    /// Runs one frame: measures the delta since the last frame, builds the intent,
    /// ticks the game and requests a redraw. Exits once the game has stopped.
    ///
    /// # Arguments
    /// * `event_loop` - Reference to the active event loop
    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(state) = &mut self.state else {
            return;
        };

        if !state.game_state.is_running() {
            log::info!("Stopping game loop");
            event_loop.exit();
            return;
        }

        let now = web_time::Instant::now();
        let wait_dt = now - state.last_wait_time;
        state.last_wait_time = now;

        let processed_input = state.input_manager.get_and_reset_processed_input();
        let intent = frame_intent(&processed_input, &state.game_state);
        state.game_state.tick_at(now, wait_dt, &intent);

        state.window.request_redraw();
    }
}
