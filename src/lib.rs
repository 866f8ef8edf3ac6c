#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Blockenspiel
//!
//! A 2D block sandbox: a side-on world of grid cells that the player can run, jump
//! and jetpack through while mining and placing blocks.
//!
//! ## Key Modules
//!
//! * `config` - Tunable physics, generation and view constants loaded from JSON
//! * `game_state` - The platform-independent core: block storage, world generation,
//!   player physics and mode switching
//! * `application_state` - Window, input and frame loop (winit)
//!
//! ## Architecture
//!
//! The core never touches window events. Each frame the application layer turns raw
//! keyboard, mouse and touch state into a single `InputIntent` and passes it, with
//! the frame delta, to `GameState::tick`.
//!
//! ## Usage
//!
//! ```no_run
//! // Native application initialization
//! fn main() {
//!     blockenspiel::run();
//! }
//! ```
//!
//! For web applications, `run_web()` is exported to JavaScript and binds the game to
//! the page's canvas.

use application_state::ApplicationState;
#[cfg(target_family = "wasm")]
use wasm_bindgen::prelude::wasm_bindgen;

use winit::event_loop::EventLoop;

pub mod config;
pub mod game_state;

mod application_state;

#[cfg(target_family = "wasm")]
const CANVAS_ID: &str = "blockenspiel-canvas";

/// Starts the game natively: logger, configuration, window and event loop.
#[cfg(not(target_family = "wasm"))]
pub fn run() {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    log::info!("Logger initialized");
    let config = config::GameConfig::from_env();

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    let mut state = ApplicationState::new(config);

    if let Err(err) = event_loop.run_app(&mut state) {
        log::error!("Event loop terminated with an error: {}", err);
    }
}

/// Starts the game in the browser.
#[cfg(target_family = "wasm")]
#[wasm_bindgen]
pub fn run_web() {
    use winit::platform::web::EventLoopExtWebSys;

    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    console_log::init_with_level(log::Level::Info).expect("Couldn't initialize logger");

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    let state = ApplicationState::new(config::GameConfig::default());

    event_loop.spawn_app(state);
}
