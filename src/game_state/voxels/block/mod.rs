//! # Block Module
//!
//! This module provides the core block-related functionality for the game world.
//! It includes block type definitions and the compact `Block` value stored per cell.

use block_type::BlockType;

pub mod block_type;

/// The underlying integer type used to represent block types in memory.
pub type BlockTypeSize = u8;

/// Represents the contents of a single cell in the world.
///
/// This is a lightweight structure that stores only the block type tag. There is no
/// per-block metadata. Any tag value is accepted, including tags with no entry in
/// [`BlockType`], so that every integer placed by a caller can round-trip through the
/// store.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Block {
    /// The type of this block, encoded as a `BlockTypeSize` for compact storage.
    pub block_type: BlockTypeSize,
}

impl Block {
    /// The empty cell.
    pub const AIR: Block = Block { block_type: 0 };

    /// Creates a new block of the specified type.
    pub fn new(block_type: BlockType) -> Self {
        Block {
            block_type: block_type as BlockTypeSize,
        }
    }

    /// Creates a block from a raw tag, known or not.
    pub fn from_raw(block_type: BlockTypeSize) -> Self {
        Block { block_type }
    }

    /// Whether the cell is empty.
    pub fn is_air(&self) -> bool {
        self.block_type == 0
    }

    /// Whether the cell blocks movement.
    pub fn is_solid(&self) -> bool {
        !self.is_air()
    }

    /// Looks the tag up in the block catalogue.
    pub fn kind(&self) -> Option<BlockType> {
        BlockType::from_int(self.block_type)
    }
}

impl From<BlockType> for Block {
    fn from(block_type: BlockType) -> Self {
        Block::new(block_type)
    }
}

impl From<BlockTypeSize> for Block {
    fn from(block_type: BlockTypeSize) -> Self {
        Block::from_raw(block_type)
    }
}
