//! # Block Store
//!
//! A sparse map from integer cell coordinates to block contents.
//!
//! ## Sparsity
//!
//! Generated worlds span hundreds of columns horizontally but are mostly air above the
//! terrain, so only non-air cells are kept. Writing air to a cell removes its entry,
//! which means a key is never stored with the empty type and memory grows only with
//! the number of solid cells. There is no capacity bound and no eviction.
//!
//! ## Coordinates
//!
//! Every lookup accepts anything implementing [`ToCell`]. Continuous coordinates are
//! floored on each axis, so `(1.9, 2.1, 0.0)` and `(1, 2, 0)` address the same cell and
//! `-0.5` lands in cell `-1`, the cell that actually contains it.

use std::collections::HashMap;

use cgmath::Point3;

use super::block::Block;

/// Integer coordinates of one cell of the grid.
pub type CellPos = Point3<i32>;

/// Conversion of a coordinate triple into the cell that contains it.
pub trait ToCell {
    /// Returns the cell containing this position.
    fn to_cell(self) -> CellPos;
}

impl ToCell for CellPos {
    fn to_cell(self) -> CellPos {
        self
    }
}

impl ToCell for (i32, i32, i32) {
    fn to_cell(self) -> CellPos {
        Point3::new(self.0, self.1, self.2)
    }
}

impl ToCell for (f32, f32, f32) {
    fn to_cell(self) -> CellPos {
        Point3::new(
            self.0.floor() as i32,
            self.1.floor() as i32,
            self.2.floor() as i32,
        )
    }
}

impl ToCell for (f64, f64, f64) {
    fn to_cell(self) -> CellPos {
        Point3::new(
            self.0.floor() as i32,
            self.1.floor() as i32,
            self.2.floor() as i32,
        )
    }
}

/// Sparse voxel storage for one world.
#[derive(Debug, Default, Clone)]
pub struct BlockStore {
    blocks: HashMap<CellPos, Block>,
}

impl BlockStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        BlockStore {
            blocks: HashMap::new(),
        }
    }

    /// Returns the block at `pos`, or [`Block::AIR`] when nothing is stored there.
    pub fn get(&self, pos: impl ToCell) -> Block {
        self.blocks
            .get(&pos.to_cell())
            .copied()
            .unwrap_or(Block::AIR)
    }

    /// Writes `block` at `pos`.
    ///
    /// Writing air deletes the entry; anything else inserts or overwrites it.
    pub fn set(&mut self, pos: impl ToCell, block: impl Into<Block>) {
        let cell = pos.to_cell();
        let block = block.into();
        if block.is_air() {
            self.blocks.remove(&cell);
        } else {
            self.blocks.insert(cell, block);
        }
    }

    /// Whether the cell at `pos` holds a non-air block.
    pub fn is_solid(&self, pos: impl ToCell) -> bool {
        self.get(pos).is_solid()
    }

    /// Whether an entry is physically stored for `pos`.
    pub fn contains(&self, pos: impl ToCell) -> bool {
        self.blocks.contains_key(&pos.to_cell())
    }

    /// Removes every block.
    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    /// Number of non-air cells.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterates over every stored cell in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (CellPos, Block)> + '_ {
        self.blocks.iter().map(|(pos, block)| (*pos, *block))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::voxels::block::block_type::BlockType;

    #[test]
    fn absent_cells_read_as_air() {
        let store = BlockStore::new();
        assert_eq!(store.get((12, -4, 7)), Block::AIR);
        assert!(store.is_empty());
    }

    #[test]
    fn writing_air_removes_the_entry() {
        let mut store = BlockStore::new();
        store.set((3, 4, 0), BlockType::STONE);
        assert_eq!(store.len(), 1);

        store.set((3, 4, 0), BlockType::AIR);
        assert_eq!(store.get((3, 4, 0)), Block::AIR);
        assert!(!store.contains((3, 4, 0)));
        assert!(store.is_empty());

        // Clearing a cell that was never set is harmless.
        store.set((9, 9, 9), 0u8);
        assert!(store.is_empty());
    }

    #[test]
    fn continuous_coordinates_floor_to_their_cell() {
        let mut store = BlockStore::new();
        store.set((1.0f32, 2.0, 0.0), BlockType::DIRT);
        assert_eq!(store.get((1.9f32, 2.1, 0.0)), Block::new(BlockType::DIRT));
        assert_eq!(store.get((1, 2, 0)), Block::new(BlockType::DIRT));

        store.set((-0.5f64, -0.01, 0.0), BlockType::SAND);
        assert_eq!(store.get((-1, -1, 0)), Block::new(BlockType::SAND));
    }

    #[test]
    fn solidity_follows_the_stored_block() {
        let mut store = BlockStore::new();
        assert!(!store.is_solid((5, 5, 0)));

        store.set((5.5f32, 5.2, 0.0), BlockType::GLASS);
        assert!(store.is_solid((5, 5, 0)));
        assert_eq!(store.is_solid((5, 5, 0)), store.get((5, 5, 0)).is_solid());

        store.set((5, 5, 0), BlockType::AIR);
        assert!(!store.is_solid((5, 5, 0)));
    }

    #[test]
    fn unknown_tags_are_stored_verbatim() {
        let mut store = BlockStore::new();
        store.set((0, 0, 0), 42u8);
        assert_eq!(store.get((0, 0, 0)).block_type, 42);
        assert_eq!(store.get((0, 0, 0)).kind(), None);
    }
}
