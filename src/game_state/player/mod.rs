//! # Player Controller
//!
//! Owns the player's position and velocity and advances them once per frame against
//! the active world's block store.
//!
//! ## Update Order
//!
//! Each call to [`PlayerController::update`] runs the same fixed sequence with the
//! raw frame delta (there is no fixed-timestep accumulator):
//!
//! 1. Gravity is added to the vertical velocity
//! 2. Horizontal input sets the horizontal velocity, or damps it when idle
//! 3. Jetpack overrides the vertical velocity; a jump only fires from the ground
//! 4. Mine-below digs out the cell under the feet, subject to a cooldown
//! 5. Candidate x and y are integrated independently
//! 6. Horizontal collision either stops the player or, with wall mining on, breaks
//!    the obstruction and moves through it
//! 7. Vertical collision lands the player when falling, and always breaks through
//!    when rising
//!
//! The upward case ignores the wall mining toggle: jumping or flying into a ceiling
//! always tunnels through it, while falling never digs. This asymmetry with the
//! horizontal case is kept on purpose.
//!
//! The controller works on a single plane of the grid (`z = 0` by default), which
//! keeps 2D play usable inside worlds generated on full 3D coordinates.

pub mod collision;
pub mod intent;

use cgmath::{Point2, Vector2};
use web_time::{Duration, Instant};

use collision::PlayerBox;
use intent::InputIntent;

use crate::{
    config::{PhysicsConfig, WorldConfig},
    game_state::voxels::{
        block::{block_type::BlockType, Block, BlockTypeSize},
        store::BlockStore,
    },
};

/// Where a new player stands before a spawn search runs.
const INITIAL_POSITION: Vector2<f32> = Vector2::new(0.0, 25.0);

/// Which way the player is looking.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// `-1` for left, `1` for right.
    pub fn signum(self) -> i32 {
        match self {
            Facing::Left => -1,
            Facing::Right => 1,
        }
    }
}

/// Result of looking up a single cell picked by the pointer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RaycastHit {
    /// The picked cell.
    pub cell: Point2<i32>,
    /// What occupies it.
    pub block: Block,
    /// Distance from the player to the cell, only reported on a hit.
    pub distance: Option<f32>,
}

impl RaycastHit {
    pub fn is_hit(&self) -> bool {
        self.block.is_solid()
    }
}

/// The player character: physics state, mining state and block selection.
pub struct PlayerController {
    pub position: Vector2<f32>,
    pub velocity: Vector2<f32>,
    /// Recomputed every tick from the vertical collision result.
    pub on_ground: bool,
    pub facing: Facing,
    /// When on, horizontal collisions break the obstruction instead of stopping.
    pub wall_mining_enabled: bool,
    /// Block type placed by pointer placement.
    pub selected_block: BlockTypeSize,
    /// The grid plane the player lives on.
    pub plane: i32,
    last_mine_time: Option<Instant>,
    physics: PhysicsConfig,
}

impl PlayerController {
    /// Creates a player at the initial position with the given physics constants.
    pub fn new(physics: PhysicsConfig) -> Self {
        PlayerController {
            position: INITIAL_POSITION,
            velocity: Vector2::new(0.0, 0.0),
            on_ground: false,
            facing: Facing::Right,
            wall_mining_enabled: physics.wall_mining_enabled,
            selected_block: BlockType::GRASS.as_int(),
            plane: 0,
            last_mine_time: None,
            physics,
        }
    }

    pub fn physics(&self) -> &PhysicsConfig {
        &self.physics
    }

    /// Moves the player to the first free column at spawn height.
    ///
    /// Tries x from `-range` to `range` in steps of `step` at `spawn_y` and stops
    /// at the first empty cell. When every candidate is blocked, x falls back to 0 even
    /// though that spawn may be inside a block.
    ///
    /// # Returns
    /// The chosen spawn position.
    pub fn find_safe_spawn_position(&mut self, store: &BlockStore, world: &WorldConfig) -> Vector2<f32> {
        let spawn_y = world.spawn_y;
        let step = world.spawn_search_step.max(1) as usize;

        let spawn_x = (-world.spawn_search_range..=world.spawn_search_range)
            .step_by(step)
            .find(|&x| store.get((x as f32, spawn_y, self.plane as f32)).is_air())
            .unwrap_or_else(|| {
                log::warn!("No free spawn column at y = {}, falling back to x = 0", spawn_y);
                0
            });

        self.position = Vector2::new(spawn_x as f32, spawn_y);
        self.position
    }

    /// Zeroes velocity and lets the next tick recompute ground contact.
    pub fn reset_motion(&mut self) {
        self.velocity = Vector2::new(0.0, 0.0);
        self.on_ground = false;
    }

    /// Advances the player by `dt` using the current wall-clock time.
    pub fn update(&mut self, dt: Duration, intent: &InputIntent, store: &mut BlockStore) {
        self.update_at(Instant::now(), dt, intent, store);
    }

    /// Advances the player by `dt` as if the current time were `now`.
    pub fn update_at(&mut self, now: Instant, dt: Duration, intent: &InputIntent, store: &mut BlockStore) {
        self.apply_actions(intent, store);

        let dt = dt.as_secs_f32();

        self.velocity.y += self.physics.gravity * dt;

        if !intent.has_horizontal() {
            self.velocity.x *= self.physics.idle_damping;
        } else if intent.move_left {
            self.velocity.x = -self.physics.speed;
            self.facing = Facing::Left;
        } else {
            self.velocity.x = self.physics.speed;
            self.facing = Facing::Right;
        }

        if intent.jetpack {
            self.velocity.y = self.physics.jetpack_power;
        } else if intent.jump && self.on_ground {
            self.velocity.y = self.physics.jump_power;
            self.on_ground = false;
        }

        if intent.mine_below {
            self.mine_below(store, now);
        }

        let new_x = self.position.x + self.velocity.x * dt;
        let new_y = self.position.y + self.velocity.y * dt;

        if !self.check_collision(new_x, self.position.y, store) {
            self.position.x = new_x;
        } else if self.wall_mining_enabled {
            self.break_blocks_in_path(new_x, self.position.y, store);
            self.position.x = new_x;
        } else {
            self.velocity.x = 0.0;
        }

        if !self.check_collision(self.position.x, new_y, store) {
            self.position.y = new_y;
            self.on_ground = false;
        } else if self.velocity.y < 0.0 {
            self.on_ground = true;
            self.velocity.y = 0.0;
        } else {
            self.break_blocks_in_path(self.position.x, new_y, store);
            self.position.y = new_y;
        }
    }

    /// Handles the discrete actions of an intent: toggles, selection and pointer edits.
    fn apply_actions(&mut self, intent: &InputIntent, store: &mut BlockStore) {
        if intent.toggle_wall_mining {
            self.wall_mining_enabled = !self.wall_mining_enabled;
            log::info!("Wall mining {}", if self.wall_mining_enabled { "on" } else { "off" });
        }

        if let Some(block_type) = intent.select_block {
            self.select_block(block_type);
        }

        if let Some(cell) = intent.break_at {
            self.break_at(store, cell);
        }

        if let Some(cell) = intent.place_at {
            self.place_at(store, cell);
        }
    }

    /// Selects the block type used for placing. Only types 1 to 9 are selectable.
    pub fn select_block(&mut self, block_type: BlockTypeSize) {
        if (1..=9).contains(&block_type) {
            self.selected_block = block_type;
            log::info!("Selected block {}", block_type);
        }
    }

    /// Digs out the cell just under the feet.
    ///
    /// Does nothing until the cooldown has elapsed since the last successful dig.
    /// Digging into air does not restart the cooldown.
    ///
    /// # Returns
    /// `true` if a block was removed.
    pub fn mine_below(&mut self, store: &mut BlockStore, now: Instant) -> bool {
        let cooled_down = self.last_mine_time.map_or(true, |last| {
            now.saturating_duration_since(last) >= self.physics.mine_cooldown()
        });
        if !cooled_down {
            return false;
        }

        let cell = (
            self.position.x.floor() as i32,
            (self.position.y - self.physics.mine_below_offset).floor() as i32,
            self.plane,
        );
        if store.is_solid(cell) {
            store.set(cell, BlockType::AIR);
            self.last_mine_time = Some(now);
            return true;
        }

        false
    }

    /// Whether the player's box with its feet at `(x, y)` overlaps a solid cell.
    pub fn check_collision(&self, x: f32, y: f32, store: &BlockStore) -> bool {
        self.bounding_box(x, y).collides(store, self.plane)
    }

    /// Destroys every block overlapping the player's box with its feet at `(x, y)`.
    pub fn break_blocks_in_path(&self, x: f32, y: f32, store: &mut BlockStore) -> usize {
        let broken = self.bounding_box(x, y).break_overlapping(store, self.plane);
        if broken > 0 {
            log::trace!("Broke {} blocks at ({:.2}, {:.2})", broken, x, y);
        }
        broken
    }

    /// Looks up the cell picked by the pointer.
    pub fn raycast_hit(&self, store: &BlockStore, cell: Point2<i32>) -> RaycastHit {
        let block = store.get((cell.x, cell.y, self.plane));
        let distance = block.is_solid().then(|| {
            let dx = cell.x as f32 - self.position.x;
            let dy = cell.y as f32 - self.position.y;
            (dx * dx + dy * dy).sqrt()
        });

        RaycastHit {
            cell,
            block,
            distance,
        }
    }

    /// Breaks the block in `cell`.
    ///
    /// # Returns
    /// `true` if there was a block to break.
    pub fn break_at(&self, store: &mut BlockStore, cell: Point2<i32>) -> bool {
        if !self.raycast_hit(store, cell).is_hit() {
            return false;
        }
        store.set((cell.x, cell.y, self.plane), BlockType::AIR);
        true
    }

    /// Places the selected block in `cell`. Occupied cells are left untouched.
    ///
    /// # Returns
    /// `true` if the block was placed.
    pub fn place_at(&self, store: &mut BlockStore, cell: Point2<i32>) -> bool {
        if self.raycast_hit(store, cell).is_hit() {
            return false;
        }
        store.set((cell.x, cell.y, self.plane), self.selected_block);
        true
    }

    fn bounding_box(&self, x: f32, y: f32) -> PlayerBox {
        PlayerBox::new(
            Vector2::new(x, y),
            self.physics.player_width,
            self.physics.player_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(16);

    fn player_at(x: f32, y: f32) -> PlayerController {
        let mut player = PlayerController::new(PhysicsConfig::default());
        player.position = Vector2::new(x, y);
        player
    }

    fn floor_under(store: &mut BlockStore, y: i32) {
        for x in -20..20 {
            store.set((x, y, 0), BlockType::STONE);
        }
    }

    #[test]
    fn falling_player_lands_on_floor() {
        let mut store = BlockStore::new();
        floor_under(&mut store, 9);
        let mut player = player_at(0.5, 12.0);
        let intent = InputIntent::default();
        let start = Instant::now();

        for i in 0..120 {
            player.update_at(start + TICK * i, TICK, &intent, &mut store);
        }

        assert!(player.on_ground);
        assert_eq!(player.velocity.y, 0.0);
        assert!(player.position.y >= 10.0 && player.position.y < 10.5);
    }

    #[test]
    fn idle_damping_slows_horizontal_motion() {
        let mut store = BlockStore::new();
        let mut player = player_at(0.5, 50.0);
        player.velocity.x = 8.0;

        player.update_at(Instant::now(), TICK, &InputIntent::default(), &mut store);
        assert!((player.velocity.x - 6.4).abs() < 1e-5);
    }

    #[test]
    fn left_wins_when_both_directions_are_held() {
        let mut store = BlockStore::new();
        let mut player = player_at(0.5, 50.0);
        let both = InputIntent {
            move_left: true,
            move_right: true,
            ..Default::default()
        };
        player.update_at(Instant::now(), TICK, &both, &mut store);
        assert_eq!(player.velocity.x, -player.physics().speed);
        assert_eq!(player.facing, Facing::Left);

        let right = InputIntent {
            move_right: true,
            ..Default::default()
        };
        player.update_at(Instant::now(), TICK, &right, &mut store);
        assert_eq!(player.velocity.x, player.physics().speed);
        assert_eq!(player.facing, Facing::Right);
    }

    #[test]
    fn jump_requires_ground_contact() {
        let mut store = BlockStore::new();
        let mut player = player_at(0.5, 50.0);
        let intent = InputIntent {
            jump: true,
            ..Default::default()
        };

        player.update_at(Instant::now(), TICK, &intent, &mut store);
        assert!(player.velocity.y < 0.0);

        player.on_ground = true;
        player.update_at(Instant::now(), TICK, &intent, &mut store);
        assert_eq!(player.velocity.y, 12.0);
        assert!(!player.on_ground);
    }

    #[test]
    fn jetpack_overrides_gravity() {
        let mut store = BlockStore::new();
        let mut player = player_at(0.5, 50.0);
        let intent = InputIntent {
            jetpack: true,
            ..Default::default()
        };
        player.update_at(Instant::now(), TICK, &intent, &mut store);
        assert_eq!(player.velocity.y, 15.0);
        assert!(player.position.y > 50.0);
    }

    #[test]
    fn rising_into_ceiling_breaks_it_even_without_wall_mining() {
        let mut store = BlockStore::new();
        store.set((0, 12, 0), BlockType::STONE);
        let mut player = player_at(0.5, 10.0);
        player.wall_mining_enabled = false;
        let intent = InputIntent {
            jetpack: true,
            ..Default::default()
        };

        // Head reaches y = 11.8, jetpack pushes it into row 12.
        player.update_at(Instant::now(), Duration::from_millis(50), &intent, &mut store);
        assert!(store.get((0, 12, 0)).is_air());
        assert!(player.position.y > 10.0);
    }

    #[test]
    fn falling_never_digs() {
        let mut store = BlockStore::new();
        floor_under(&mut store, 9);
        let mut player = player_at(0.5, 10.0);
        player.velocity.y = -20.0;

        player.update_at(Instant::now(), TICK, &InputIntent::default(), &mut store);
        assert!(store.get((0, 9, 0)).is_solid());
        assert!(player.on_ground);
        assert_eq!(player.position.y, 10.0);
    }

    #[test]
    fn mining_respects_cooldown() {
        let mut store = BlockStore::new();
        for y in 0..10 {
            store.set((0, y, 0), BlockType::DIRT);
        }
        let mut player = player_at(0.5, 10.0);
        let start = Instant::now();

        assert!(player.mine_below(&mut store, start));
        assert!(store.get((0, 9, 0)).is_air());

        player.position.y = 9.0;
        assert!(!player.mine_below(&mut store, start + Duration::from_millis(150)));
        assert!(store.get((0, 8, 0)).is_solid());

        assert!(player.mine_below(&mut store, start + Duration::from_millis(200)));
        assert!(store.get((0, 8, 0)).is_air());
    }

    #[test]
    fn mining_air_does_not_restart_cooldown() {
        let mut store = BlockStore::new();
        let mut player = player_at(0.5, 10.0);
        let start = Instant::now();

        assert!(!player.mine_below(&mut store, start));
        store.set((0, 9, 0), BlockType::DIRT);
        assert!(player.mine_below(&mut store, start + Duration::from_millis(1)));
    }

    #[test]
    fn pointer_break_and_place() {
        let mut store = BlockStore::new();
        let mut player = player_at(0.0, 0.0);
        player.select_block(BlockType::SAND.as_int());

        assert!(player.place_at(&mut store, Point2::new(3, 4)));
        assert_eq!(store.get((3, 4, 0)), Block::new(BlockType::SAND));

        player.select_block(BlockType::STONE.as_int());
        assert!(!player.place_at(&mut store, Point2::new(3, 4)));
        assert_eq!(store.get((3, 4, 0)), Block::new(BlockType::SAND));

        let hit = player.raycast_hit(&store, Point2::new(3, 4));
        assert!(hit.is_hit());
        assert_eq!(hit.distance, Some(5.0));

        assert!(player.break_at(&mut store, Point2::new(3, 4)));
        assert!(!player.break_at(&mut store, Point2::new(3, 4)));
        assert!(player.raycast_hit(&store, Point2::new(3, 4)).distance.is_none());
    }

    #[test]
    fn only_first_nine_blocks_are_selectable() {
        let mut player = player_at(0.0, 0.0);
        player.select_block(9);
        assert_eq!(player.selected_block, 9);
        player.select_block(0);
        player.select_block(12);
        assert_eq!(player.selected_block, 9);
    }

    #[test]
    fn toggle_intent_flips_wall_mining() {
        let mut store = BlockStore::new();
        let mut player = player_at(0.5, 50.0);
        assert!(player.wall_mining_enabled);
        let intent = InputIntent {
            toggle_wall_mining: true,
            ..Default::default()
        };
        player.update_at(Instant::now(), TICK, &intent, &mut store);
        assert!(!player.wall_mining_enabled);
    }

    #[test]
    fn spawn_search_skips_blocked_columns() {
        let mut store = BlockStore::new();
        store.set((-100, 55, 0), BlockType::GLASS);
        store.set((-95, 55, 0), BlockType::GLASS);
        let mut player = player_at(0.0, 0.0);

        let spawn = player.find_safe_spawn_position(&store, &WorldConfig::default());
        assert_eq!(spawn, Vector2::new(-90.0, 55.0));
        assert_eq!(player.position, spawn);
    }

    #[test]
    fn spawn_search_falls_back_to_origin() {
        let mut store = BlockStore::new();
        for x in -100..=100 {
            store.set((x, 55, 0), BlockType::GLASS);
        }
        let mut player = player_at(7.0, 7.0);

        let spawn = player.find_safe_spawn_position(&store, &WorldConfig::default());
        assert_eq!(spawn, Vector2::new(0.0, 55.0));
    }
}
