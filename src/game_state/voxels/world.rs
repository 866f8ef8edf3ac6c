//! # World Module
//!
//! This module provides the `World` struct, which owns the block store of one playable
//! space and exposes its generation entry points.
//!
//! ## Generation Modes
//!
//! A world is populated by exactly one pipeline:
//! - Open terrain: the city landscape (default) or the biome landscape
//! - Logo: the title stage with block letters and credits
//!
//! A session can hold several worlds at once (the main world and the logo world) but
//! only the active one is updated and drawn each frame.

use crate::config::{TerrainKind, WorldConfig};

use super::{
    block::Block,
    generation::TerrainGenerator,
    store::{BlockStore, ToCell},
};

/// Which pipeline populated a world.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WorldMode {
    /// Nothing generated yet.
    Empty,
    OpenTerrain(TerrainKind),
    Logo,
}

/// A playable space: a sparse block store plus the generator that filled it.
///
/// # Examples
///
/// ```
/// use blockenspiel::game_state::voxels::{block::block_type::BlockType, world::World};
///
/// let mut world = World::new(Some(1));
/// world.set_block((0, 0, 0), BlockType::STONE);
/// assert!(world.get_block((0.5, 0.5, 0.0)).is_solid());
/// ```
pub struct World {
    store: BlockStore,
    generator: TerrainGenerator,
    mode: WorldMode,
}

impl World {
    /// Creates an empty world whose random placements follow `seed`.
    pub fn new(seed: Option<u64>) -> Self {
        World {
            store: BlockStore::new(),
            generator: TerrainGenerator::new(seed),
            mode: WorldMode::Empty,
        }
    }

    /// Creates the main world using the pipeline named in `config`.
    pub fn open_terrain(config: &WorldConfig) -> Self {
        let mut world = World::new(config.seed);
        match config.terrain {
            TerrainKind::City => world.generate_terrain(config.half_span),
            TerrainKind::Biome => world.generate_biome_terrain(config.biome_half_span),
        }
        world
    }

    /// Creates the logo world titled with `config.logo_text`.
    pub fn logo(config: &WorldConfig) -> Self {
        let mut world = World::new(config.seed);
        world.generate_logo_world(&config.logo_text);
        world
    }

    /// Populates the city landscape. Does not clear the store first.
    pub fn generate_terrain(&mut self, half_span: i32) {
        self.generator.generate_terrain(&mut self.store, half_span);
        self.mode = WorldMode::OpenTerrain(TerrainKind::City);
    }

    /// Populates the biome landscape. Does not clear the store first.
    pub fn generate_biome_terrain(&mut self, half_span: i32) {
        self.generator
            .generate_biome_world(&mut self.store, half_span);
        self.mode = WorldMode::OpenTerrain(TerrainKind::Biome);
    }

    /// Replaces everything with the logo stage.
    pub fn generate_logo_world(&mut self, text: &str) {
        self.generator.generate_logo_world(&mut self.store, text);
        self.mode = WorldMode::Logo;
    }

    pub fn get_block(&self, pos: impl ToCell) -> Block {
        self.store.get(pos)
    }

    pub fn set_block(&mut self, pos: impl ToCell, block: impl Into<Block>) {
        self.store.set(pos, block);
    }

    pub fn store(&self) -> &BlockStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut BlockStore {
        &mut self.store
    }

    pub fn mode(&self) -> WorldMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn biome_terrain_uses_its_own_span() {
        let config = WorldConfig {
            terrain: TerrainKind::Biome,
            half_span: 200,
            biome_half_span: 6,
            seed: Some(13),
            ..Default::default()
        };
        let world = World::open_terrain(&config);

        assert!(!world.store().is_empty());
        // Pyramids reach eight cells past their centre, which stays inside the span.
        let reach = config.biome_half_span + 8;
        assert!(world
            .store()
            .iter()
            .all(|(pos, _)| pos.x.abs() <= reach && pos.z.abs() <= reach));
    }

    #[test]
    fn new_world_is_empty() {
        let world = World::new(None);
        assert!(world.store().is_empty());
        assert_eq!(world.mode(), WorldMode::Empty);
    }

    #[test]
    fn entering_logo_mode_discards_terrain() {
        let mut world = World::new(Some(2));
        world.generate_terrain(50);
        assert_eq!(world.mode(), WorldMode::OpenTerrain(TerrainKind::City));
        assert!(world.get_block((-100, 0, 0)).is_air());
        assert!(world.get_block((45, 20, 0)).is_solid());

        world.generate_logo_world("B");
        assert_eq!(world.mode(), WorldMode::Logo);
        // Above the platform, where city buildings used to stand.
        assert!(world.get_block((45, 40, 0)).is_air());
    }
}
