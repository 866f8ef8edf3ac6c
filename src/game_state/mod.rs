//! # Game State Module
//!
//! The platform-independent core of the game.
//!
//! ## Key Components
//!
//! * `GameState` - Owns the worlds, the player and the camera and runs one tick per frame
//! * `camera` - Screen to world mapping used for drawing and pointer picking
//! * `player` - Player physics, mining and placing
//! * `voxels` - Block storage and world generation
//!
//! ## Modes
//!
//! The game is either in the main world or on the logo screen. The logo world is
//! generated the first time it is entered and kept afterwards. Entering it saves the
//! player's position, leaving it restores that position. Only the active world is
//! updated each tick.

pub mod camera;
pub mod player;
pub mod voxels;

use cgmath::{Point2, Vector2};
use web_time::{Duration, Instant};

use camera::Camera2D;
use player::{intent::InputIntent, PlayerController};
use voxels::{block::block_type::BlockType, world::World};

use crate::config::GameConfig;

/// Where the player appears on the logo screen.
const LOGO_SPAWN: Vector2<f32> = Vector2::new(0.0, 35.0);

/// Which world is active.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameMode {
    Playing,
    LogoScreen,
}

/// The running game session.
///
/// # Examples
///
/// ```
/// use blockenspiel::{
///     config::GameConfig,
///     game_state::{player::intent::InputIntent, GameState},
/// };
/// use web_time::Duration;
///
/// let mut config = GameConfig::default();
/// config.world.half_span = 40;
/// config.world.seed = Some(3);
///
/// let mut game = GameState::new(config);
/// game.tick(Duration::from_millis(16), &InputIntent::default());
/// ```
pub struct GameState {
    pub config: GameConfig,
    pub player: PlayerController,
    pub camera: Camera2D,
    main_world: World,
    /// Created on first entry to the logo screen.
    logo_world: Option<World>,
    mode: GameMode,
    /// Player position in the main world while the logo screen is shown.
    saved_position: Option<Vector2<f32>>,
    running: bool,
}

impl GameState {
    /// Generates the main world and spawns the player in it.
    pub fn new(config: GameConfig) -> Self {
        let main_world = World::open_terrain(&config.world);
        let mut player = PlayerController::new(config.physics.clone());
        let spawn = player.find_safe_spawn_position(main_world.store(), &config.world);
        log::info!("Player spawned at ({}, {})", spawn.x, spawn.y);

        let mut camera = Camera2D::new(&config.view);
        camera.follow(player.position);

        GameState {
            config,
            player,
            camera,
            main_world,
            logo_world: None,
            mode: GameMode::Playing,
            saved_position: None,
            running: true,
        }
    }

    /// Advances the game by `dt` using the current wall-clock time.
    pub fn tick(&mut self, dt: Duration, intent: &InputIntent) {
        self.tick_at(Instant::now(), dt, intent);
    }

    /// Advances the game by `dt` as if the current time were `now`.
    pub fn tick_at(&mut self, now: Instant, dt: Duration, intent: &InputIntent) {
        if intent.toggle_logo {
            self.toggle_logo_screen();
        } else if intent.leave_logo && self.mode == GameMode::LogoScreen {
            self.switch_to_game();
        }

        let world = match self.mode {
            GameMode::Playing => &mut self.main_world,
            GameMode::LogoScreen => self
                .logo_world
                .get_or_insert_with(|| World::logo(&self.config.world)),
        };
        self.player.update_at(now, dt, intent, world.store_mut());
        self.camera.follow(self.player.position);
    }

    /// Shows the logo world, generating it on first use.
    pub fn switch_to_logo_screen(&mut self) {
        if self.mode == GameMode::LogoScreen {
            return;
        }

        if self.logo_world.is_none() {
            log::info!("Generating logo world");
            self.logo_world = Some(World::logo(&self.config.world));
        }

        self.saved_position = Some(self.player.position);
        self.player.position = LOGO_SPAWN;
        self.player.reset_motion();
        self.mode = GameMode::LogoScreen;
        self.camera.follow(self.player.position);
        log::info!("Switched to logo screen");
    }

    /// Returns to the main world at the position the player left it.
    pub fn switch_to_game(&mut self) {
        if self.mode == GameMode::Playing {
            return;
        }

        if let Some(position) = self.saved_position.take() {
            self.player.position = position;
        }
        self.player.reset_motion();
        self.mode = GameMode::Playing;
        self.camera.follow(self.player.position);
        log::info!("Switched to main world");
    }

    pub fn toggle_logo_screen(&mut self) {
        match self.mode {
            GameMode::Playing => self.switch_to_logo_screen(),
            GameMode::LogoScreen => self.switch_to_game(),
        }
    }

    /// The world cell under a screen point.
    pub fn pointer_cell(&self, screen: Point2<f32>) -> Point2<i32> {
        self.camera.screen_to_cell(screen)
    }

    /// Folds a touch at `screen` into `intent`.
    pub fn apply_touch(&self, intent: &mut InputIntent, screen: Point2<f32>) {
        let touch_world = self.camera.screen_to_world(screen);
        intent.apply_touch(
            touch_world.x,
            self.player.position.x,
            screen.y,
            self.camera.viewport_height,
        );
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.camera.resize(width, height);
        self.camera.follow(self.player.position);
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn main_world(&self) -> &World {
        &self.main_world
    }

    pub fn logo_world(&self) -> Option<&World> {
        self.logo_world.as_ref()
    }

    /// The world currently updated and drawn.
    pub fn active_world(&self) -> &World {
        match (self.mode, &self.logo_world) {
            (GameMode::LogoScreen, Some(logo)) => logo,
            _ => &self.main_world,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stops the frame loop after the current frame.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// One-line HUD text describing the current state.
    pub fn status_line(&self) -> String {
        if self.mode == GameMode::LogoScreen {
            return format!("{} | L or Escape to return", self.config.world.logo_text);
        }

        let block = BlockType::from_int(self.player.selected_block)
            .map(|block_type| format!("{:?}", block_type))
            .unwrap_or_else(|| self.player.selected_block.to_string());

        format!(
            "X: {:.1} Y: {:.1} | Block: {} | {} | Wall mining: {}",
            self.player.position.x,
            self.player.position.y,
            block,
            if self.player.on_ground { "Grounded" } else { "Airborne" },
            if self.player.wall_mining_enabled { "ON" } else { "OFF" },
        )
    }
}
