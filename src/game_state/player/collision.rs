//! # Player Collision
//!
//! Axis-aligned box tests of the player against the block grid.
//!
//! The box is anchored at the player's feet: it spans `[x - w/2, x + w/2]`
//! horizontally and `[y, y + h]` vertically. Every extremum is floored to find the
//! range of cells it covers, and the box collides if any of those cells is solid.
//! There is no swept test, so very fast movement at a low frame rate can tunnel.

use std::ops::RangeInclusive;

use cgmath::Vector2;

use crate::game_state::voxels::{block::block_type::BlockType, store::BlockStore};

/// The player's bounding box at a given foot position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlayerBox {
    pub position: Vector2<f32>,
    pub width: f32,
    pub height: f32,
}

impl PlayerBox {
    pub fn new(position: Vector2<f32>, width: f32, height: f32) -> Self {
        PlayerBox {
            position,
            width,
            height,
        }
    }

    /// Columns covered by the box.
    pub fn cell_columns(&self) -> RangeInclusive<i32> {
        let half_width = self.width / 2.0;
        (self.position.x - half_width).floor() as i32..=(self.position.x + half_width).floor() as i32
    }

    /// Rows covered by the box.
    pub fn cell_rows(&self) -> RangeInclusive<i32> {
        self.position.y.floor() as i32..=(self.position.y + self.height).floor() as i32
    }

    /// Iterates over every covered cell as `(x, y)`.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> {
        let rows = self.cell_rows();
        self.cell_columns()
            .flat_map(move |x| rows.clone().map(move |y| (x, y)))
    }

    /// Whether any covered cell on plane `z` is solid.
    pub fn collides(&self, store: &BlockStore, z: i32) -> bool {
        self.cells().any(|(x, y)| store.is_solid((x, y, z)))
    }

    /// Removes every solid cell covered by the box on plane `z`.
    ///
    /// # Returns
    /// The number of blocks destroyed.
    pub fn break_overlapping(&self, store: &mut BlockStore, z: i32) -> usize {
        let mut broken = 0;
        for (x, y) in self.cells() {
            if store.is_solid((x, y, z)) {
                store.set((x, y, z), BlockType::AIR);
                broken += 1;
            }
        }
        broken
    }
}
