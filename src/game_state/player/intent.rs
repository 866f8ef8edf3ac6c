//! # Input Intents
//!
//! Device-independent action flags consumed by the player controller and the game.
//! One `InputIntent` is built per tick by the platform input adapter from keyboard,
//! mouse and touch state; the physics code never sees raw events.

use cgmath::Point2;

use crate::game_state::voxels::block::BlockTypeSize;

/// Everything the player asked for during one tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputIntent {
    pub move_left: bool,
    pub move_right: bool,
    /// Held: sustained ascent.
    pub jetpack: bool,
    /// Only acts while standing on the ground.
    pub jump: bool,
    /// Dig out the cell under the feet, subject to the mining cooldown.
    pub mine_below: bool,
    /// Break the block in this cell, if any.
    pub break_at: Option<Point2<i32>>,
    /// Place the selected block in this cell, if it is empty.
    pub place_at: Option<Point2<i32>>,
    pub toggle_wall_mining: bool,
    /// Select the block type used for placing (1 to 9).
    pub select_block: Option<BlockTypeSize>,
    /// Switch between the main world and the logo world.
    pub toggle_logo: bool,
    /// Leave the logo world if it is active.
    pub leave_logo: bool,
}

impl InputIntent {
    /// Whether any horizontal movement was requested.
    pub fn has_horizontal(&self) -> bool {
        self.move_left || self.move_right
    }

    /// Folds an active touch into the movement flags.
    ///
    /// Horizontal intent comes from comparing the touched world x against the
    /// player's x. A touch in the upper half of the screen fires the jetpack, one in
    /// the lower half mines below.
    ///
    /// # Arguments
    /// * `touch_world_x` - World x of the touch point
    /// * `player_x` - Current player x
    /// * `touch_screen_y` - Screen y of the touch point, growing downward
    /// * `viewport_height` - Height of the screen in pixels
    pub fn apply_touch(
        &mut self,
        touch_world_x: f32,
        player_x: f32,
        touch_screen_y: f32,
        viewport_height: f32,
    ) {
        if touch_world_x < player_x {
            self.move_left = true;
        } else if touch_world_x > player_x {
            self.move_right = true;
        }

        if touch_screen_y < viewport_height / 2.0 {
            self.jetpack = true;
        } else {
            self.mine_below = true;
        }
    }
}
