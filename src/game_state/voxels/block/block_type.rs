//! # Block Type Module
//!
//! This module defines the materials a cell of the world can hold.
//! It provides the integer tag conversion used by the block store and the generators.

use num_derive::FromPrimitive;

use super::BlockTypeSize;

/// Enumerates every material known to the game.
///
/// The discriminant of each variant is the integer tag stored in the world, so the
/// numbering is part of the data model and must not be reordered. `AIR` is the
/// empty cell and is never stored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
pub enum BlockType {
    /// The empty cell.
    AIR = 0,
    /// Surface cover for plains and low mountains.
    GRASS = 1,
    /// The band just under the surface.
    DIRT = 2,
    /// Bulk underground fill.
    STONE = 3,
    /// Rare underground deposit, also used as a gold accent in the logo.
    ORE = 4,
    /// Indestructible-looking floor at the bottom of every column.
    BEDROCK = 5,
    /// Desert surface and pyramid walls.
    SAND = 6,
    /// Tundra surface and mountain peaks.
    SNOW = 7,
    WATER = 8,
    WOOD = 9,
    LEAVES = 10,
    CRYSTAL = 11,
    /// Fallback material with no special meaning.
    DEFAULT = 12,
    /// Street-level cap of the city terrain.
    CONCRETE = 13,
    /// Building shells.
    GLASS = 14,
    /// Furniture scattered inside buildings.
    INTERIOR = 15,
    WINDOW = 16,
    ROAD = 17,
    VEHICLE = 18,
}

impl BlockType {
    /// Converts a `BlockTypeSize` to a `BlockType`.
    ///
    /// # Returns
    /// `None` when the tag does not name a known material. Such tags are still valid
    /// world contents, they just have no catalogue entry.
    pub fn from_int(btype: BlockTypeSize) -> Option<Self> {
        num::FromPrimitive::from_u8(btype)
    }

    /// Returns the integer tag of this block type.
    pub fn as_int(self) -> BlockTypeSize {
        self as BlockTypeSize
    }

    /// Whether this is the empty cell.
    pub fn is_air(self) -> bool {
        self == BlockType::AIR
    }
}

impl From<BlockType> for BlockTypeSize {
    fn from(block_type: BlockType) -> Self {
        block_type.as_int()
    }
}
