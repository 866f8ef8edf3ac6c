//! # Biome Terrain
//!
//! Building blocks for noise-driven, biome-conditioned worlds on full 3D coordinates.
//!
//! Height is the sum of three noise octaves (continental, erosion, ridge) around a
//! base of 32, then reshaped per biome. Columns pick their surface and subsurface
//! materials by biome. Caves, rivers and structures are independent passes over the
//! filled columns, and trees and crystals decorate the surface.

use cgmath::Point3;

use crate::game_state::voxels::{block::block_type::BlockType, store::BlockStore};

use super::TerrainGenerator;

const BASE_HEIGHT: f64 = 32.0;
/// Water level for flooded swamp columns.
const SWAMP_WATER_LEVEL: i32 = 30;
/// Above this height mountain surfaces are snow.
const SNOW_LINE: i32 = 60;
const ORE_CHANCE: f64 = 0.02;
/// Cave noise above this value carves a 3x3x3 pocket.
const CAVE_THRESHOLD: f64 = 0.6;
const CAVE_MIN_Y: i32 = 5;
const CAVE_MAX_Y: i32 = 50;
const RIVER_STEPS: usize = 1000;
const STRUCTURE_COUNT: usize = 5;
const TREE_CHANCE: f64 = 0.08;
const CRYSTAL_CHANCE: f64 = 0.03;

/// A terrain-generation profile altering height and surface material.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Biome {
    Plains,
    Mountains,
    Desert,
    Swamp,
    Tundra,
}

impl Biome {
    /// Picks the biome of column `(x, z)` from three independent noise channels.
    ///
    /// Relief wins first so mountain ranges cut across climates, then temperature
    /// decides tundra and desert, then humidity decides swamp.
    pub fn at(generator: &TerrainGenerator, x: i32, z: i32) -> Self {
        let (x, z) = (x as f64, z as f64);
        let relief = generator.noise(x * 0.004, z * 0.004, 2000.0);
        let temperature = generator.noise(x * 0.002, z * 0.002, 2500.0);
        let humidity = generator.noise(x * 0.002, z * 0.002, 2750.0);

        if relief > 0.6 {
            Biome::Mountains
        } else if temperature < -0.5 {
            Biome::Tundra
        } else if temperature > 0.4 && humidity < 0.0 {
            Biome::Desert
        } else if humidity > 0.5 {
            Biome::Swamp
        } else {
            Biome::Plains
        }
    }

    /// Material of the top cell of a column of height `height`.
    fn surface_block(self, height: i32) -> BlockType {
        match self {
            Biome::Desert => BlockType::SAND,
            Biome::Swamp => BlockType::DIRT,
            Biome::Tundra => BlockType::SNOW,
            Biome::Mountains if height > SNOW_LINE => BlockType::SNOW,
            Biome::Mountains | Biome::Plains => BlockType::GRASS,
        }
    }

    /// Material of the three cells under the surface.
    fn subsurface_block(self) -> BlockType {
        match self {
            Biome::Desert => BlockType::SAND,
            _ => BlockType::DIRT,
        }
    }
}

impl TerrainGenerator {
    /// Terrain height of column `(x, z)` in `biome`, never below 1.
    pub fn get_height_at(&self, x: i32, z: i32, biome: Biome) -> i32 {
        let (x, z) = (x as f64, z as f64);

        let continental = self.noise(x * 0.003, z * 0.003, 0.0) * 30.0;
        let erosion = self.noise(x * 0.008, z * 0.008, 500.0) * 15.0;
        let ridge = self.noise(x * 0.02, z * 0.02, 1000.0) * 8.0;
        let mut height = BASE_HEIGHT + continental + erosion + ridge;

        match biome {
            Biome::Mountains => {
                height += self.noise(x * 0.01, z * 0.01, 3000.0) * 40.0;
                height += self.noise(x * 0.05, z * 0.05, 4000.0).abs() * 20.0;
            }
            Biome::Desert => {
                height += self.noise(x * 0.02, z * 0.02, 5000.0) * 10.0;
                height -= 5.0;
            }
            Biome::Swamp => {
                height = (height - 8.0).max(28.0);
            }
            Biome::Tundra => {
                height += self.noise(x * 0.015, z * 0.015, 6000.0) * 12.0;
            }
            Biome::Plains => {}
        }

        height.max(1.0).floor() as i32
    }

    /// Fills column `(x, z)` from `y = 0` up to `height`.
    ///
    /// The top cell takes the biome's surface material and the three below it the
    /// subsurface material. Deeper cells are stone with a 2% chance of ore above
    /// `y = 5`. Low swamp columns flood up to the water level with a 30% chance.
    pub fn generate_column(&mut self, store: &mut BlockStore, x: i32, z: i32, height: i32, biome: Biome) {
        for y in 0..=height {
            let block_type = if y == height {
                biome.surface_block(height)
            } else if y >= height - 3 {
                biome.subsurface_block()
            } else if y > 5 && self.rng.f64() < ORE_CHANCE {
                BlockType::ORE
            } else {
                BlockType::STONE
            };
            store.set((x, y, z), block_type);
        }

        if biome == Biome::Swamp && height <= SWAMP_WATER_LEVEL && self.rng.f64() < 0.3 {
            for y in height + 1..=SWAMP_WATER_LEVEL {
                store.set((x, y, z), BlockType::WATER);
            }
        }
    }

    /// Carves 3x3x3 pockets wherever the cave noise is high.
    ///
    /// Samples every second cell over x and z in `[-half_span, half_span)` and y in
    /// `[5, 50)`.
    pub fn generate_caves(&self, store: &mut BlockStore, half_span: i32) {
        for x in (-half_span..half_span).step_by(2) {
            for z in (-half_span..half_span).step_by(2) {
                for y in (CAVE_MIN_Y..CAVE_MAX_Y).step_by(2) {
                    let cave_noise = self.noise(x as f64 * 0.05, y as f64 * 0.05, z as f64 * 0.05);
                    if cave_noise > CAVE_THRESHOLD {
                        Self::clear_box(store, Point3::new(x, y, z), 3);
                    }
                }
            }
        }
    }

    /// Traces a river along a wobbling parametric path.
    ///
    /// Each step floods a three-cell wide slice from two below the plains height to
    /// one above it. Steps falling outside the span are skipped.
    pub fn generate_rivers(&self, store: &mut BlockStore, half_span: i32) {
        for t in 0..RIVER_STEPS {
            let t = t as f64;
            let x = (-50.0 + (t * 0.02).sin() * 30.0 + self.noise(t * 0.1, 0.0, 7000.0) * 10.0).floor() as i32;
            let z = (-50.0 + t * 0.1 + self.noise(t * 0.1, 1000.0, 7000.0) * 5.0).floor() as i32;

            if !(-half_span..half_span).contains(&x) || !(-half_span..half_span).contains(&z) {
                continue;
            }

            let height = self.get_height_at(x, z, Biome::Plains);
            for y in (height - 2).max(1)..=height + 1 {
                for dx in -1..=1 {
                    store.set((x + dx, y, z), BlockType::WATER);
                }
            }
        }
    }

    /// Drops a few landmarks: pyramids in deserts and towers in mountains.
    pub fn generate_structures(&mut self, store: &mut BlockStore, half_span: i32) {
        if half_span <= 0 {
            return;
        }

        for _ in 0..STRUCTURE_COUNT {
            let x = self.rng.i32(-half_span..half_span);
            let z = self.rng.i32(-half_span..half_span);
            let biome = Biome::at(self, x, z);
            let height = self.get_height_at(x, z, biome);

            match biome {
                Biome::Desert => Self::generate_pyramid(store, x, height + 1, z),
                Biome::Mountains => Self::generate_tower(store, x, height + 1, z),
                _ => {}
            }
        }
    }

    /// Grows a tree with its trunk base at `(x, y, z)`.
    ///
    /// The trunk is 4 to 6 cells tall. Leaves form a diamond around the top of the
    /// trunk, each cell present with a 70% chance.
    pub fn generate_tree(&mut self, store: &mut BlockStore, x: i32, y: i32, z: i32) {
        let height = 4 + self.rng.i32(0..3);

        for i in 0..height {
            store.set((x, y + i, z), BlockType::WOOD);
        }

        for dx in -2i32..=2 {
            for dz in -2i32..=2 {
                for dy in 0..3 {
                    if dx.abs() + dz.abs() + dy < 4 && self.rng.f64() < 0.7 {
                        store.set((x + dx, y + height - 1 + dy, z + dz), BlockType::LEAVES);
                    }
                }
            }
        }
    }

    /// Grows a crystal spire of 2 to 4 cells from `(x, y, z)`.
    pub fn generate_crystal(&mut self, store: &mut BlockStore, x: i32, y: i32, z: i32) {
        let height = 2 + self.rng.i32(0..3);
        for i in 0..height {
            store.set((x, y + i, z), BlockType::CRYSTAL);
        }
    }

    /// Builds a hollow stepped pyramid of sand with its base centred on `(x, y, z)`.
    ///
    /// Eight levels, each a square ring whose half-width shrinks from 8 to 1.
    pub fn generate_pyramid(store: &mut BlockStore, x: i32, y: i32, z: i32) {
        for level in 0..8i32 {
            let size = 8 - level;
            for dx in -size..=size {
                for dz in -size..=size {
                    if dx.abs() == size || dz.abs() == size {
                        store.set((x + dx, y + level, z + dz), BlockType::SAND);
                    }
                }
            }
        }
    }

    /// Builds a 12-cell stone tower with a plus-shaped cross section.
    pub fn generate_tower(store: &mut BlockStore, x: i32, y: i32, z: i32) {
        for i in 0..12 {
            for dx in -1..=1 {
                for dz in -1..=1 {
                    if dx == 0 || dz == 0 {
                        store.set((x + dx, y + i, z + dz), BlockType::STONE);
                    }
                }
            }
        }
    }

    /// Generates a complete biome world over x and z in `[-half_span, half_span)`.
    ///
    /// Runs columns, then decorations, caves, rivers and structures in that order.
    pub fn generate_biome_world(&mut self, store: &mut BlockStore, half_span: i32) {
        log::info!("Generating biome terrain over [{}, {})", -half_span, half_span);

        for x in -half_span..half_span {
            for z in -half_span..half_span {
                let biome = Biome::at(self, x, z);
                let height = self.get_height_at(x, z, biome);
                self.generate_column(store, x, z, height, biome);
                self.decorate_column(store, x, z, height, biome);
            }
        }

        self.generate_caves(store, half_span);
        self.generate_rivers(store, half_span);
        self.generate_structures(store, half_span);

        log::info!("Biome terrain generated with {} blocks", store.len());
    }

    /// Scatters trees on plains and swamps and crystals on tundra and mountains.
    fn decorate_column(&mut self, store: &mut BlockStore, x: i32, z: i32, height: i32, biome: Biome) {
        // Flooded columns stay bare.
        if store.get((x, height + 1, z)).is_solid() {
            return;
        }

        match biome {
            Biome::Plains | Biome::Swamp if self.rng.f64() < TREE_CHANCE => {
                self.generate_tree(store, x, height + 1, z)
            }
            Biome::Tundra | Biome::Mountains if self.rng.f64() < CRYSTAL_CHANCE => {
                self.generate_crystal(store, x, height + 1, z)
            }
            _ => {}
        }
    }

    fn clear_box(store: &mut BlockStore, origin: Point3<i32>, size: i32) {
        for dx in 0..size {
            for dy in 0..size {
                for dz in 0..size {
                    store.set((origin.x + dx, origin.y + dy, origin.z + dz), BlockType::AIR);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::voxels::block::Block;

    #[test]
    fn heights_are_deterministic_and_positive() {
        let generator = TerrainGenerator::new(Some(3));
        let other = TerrainGenerator::new(Some(4));
        for x in -30..30 {
            for biome in [Biome::Plains, Biome::Mountains, Biome::Desert, Biome::Swamp, Biome::Tundra] {
                let height = generator.get_height_at(x, x * 3, biome);
                assert!(height >= 1);
                assert_eq!(height, other.get_height_at(x, x * 3, biome));
            }
        }
    }

    #[test]
    fn swamp_height_never_drops_below_floor() {
        let generator = TerrainGenerator::new(Some(3));
        for x in -100..100 {
            assert!(generator.get_height_at(x, -x, Biome::Swamp) >= 28);
        }
    }

    #[test]
    fn desert_column_is_sand_over_stone() {
        let mut store = BlockStore::new();
        let mut generator = TerrainGenerator::new(Some(8));
        generator.generate_column(&mut store, 0, 0, 20, Biome::Desert);

        for y in 17..=20 {
            assert_eq!(store.get((0, y, 0)), Block::new(BlockType::SAND));
        }
        for y in 0..=5 {
            assert_eq!(store.get((0, y, 0)), Block::new(BlockType::STONE));
        }
        let deep = store.get((0, 10, 0)).kind();
        assert!(matches!(deep, Some(BlockType::STONE) | Some(BlockType::ORE)));
        assert!(store.get((0, 21, 0)).is_air());
    }

    #[test]
    fn mountain_peaks_are_snow_capped() {
        let mut store = BlockStore::new();
        let mut generator = TerrainGenerator::new(Some(8));
        generator.generate_column(&mut store, 0, 0, 70, Biome::Mountains);
        generator.generate_column(&mut store, 1, 0, 40, Biome::Mountains);

        assert_eq!(store.get((0, 70, 0)), Block::new(BlockType::SNOW));
        assert_eq!(store.get((1, 40, 0)), Block::new(BlockType::GRASS));
    }

    #[test]
    fn pyramid_is_a_hollow_ring_per_level() {
        let mut store = BlockStore::new();
        TerrainGenerator::generate_pyramid(&mut store, 0, 10, 0);

        assert_eq!(store.get((8, 10, 0)), Block::new(BlockType::SAND));
        assert_eq!(store.get((-8, 10, -8)), Block::new(BlockType::SAND));
        assert!(store.get((0, 10, 0)).is_air());
        assert_eq!(store.get((1, 17, 1)), Block::new(BlockType::SAND));
        assert!(store.get((0, 18, 0)).is_air());
    }

    #[test]
    fn tower_has_plus_cross_section() {
        let mut store = BlockStore::new();
        TerrainGenerator::generate_tower(&mut store, 0, 0, 0);

        assert_eq!(store.len(), 12 * 5);
        assert!(store.get((1, 5, 1)).is_air());
        assert_eq!(store.get((0, 11, -1)), Block::new(BlockType::STONE));
    }

    #[test]
    fn trees_and_crystals_grow_upward() {
        let mut store = BlockStore::new();
        let mut generator = TerrainGenerator::new(Some(21));
        generator.generate_tree(&mut store, 0, 0, 0);
        // The top trunk cell may be replaced by leaves.
        for y in 0..3 {
            assert_eq!(store.get((0, y, 0)), Block::new(BlockType::WOOD));
        }

        generator.generate_crystal(&mut store, 10, 0, 0);
        assert_eq!(store.get((10, 0, 0)), Block::new(BlockType::CRYSTAL));
        assert_eq!(store.get((10, 1, 0)), Block::new(BlockType::CRYSTAL));
        assert!(store.get((10, 4, 0)).is_air());
    }

    #[test]
    fn caves_only_remove_blocks() {
        let mut store = BlockStore::new();
        for x in -10..10 {
            for z in -10..10 {
                for y in 0..60 {
                    store.set((x, y, z), BlockType::STONE);
                }
            }
        }
        let before = store.len();

        let generator = TerrainGenerator::new(Some(2));
        generator.generate_caves(&mut store, 10);

        assert!(store.len() <= before);
        assert!(store.iter().all(|(_, block)| block.kind() == Some(BlockType::STONE)));
        // Nothing below the cave floor is touched.
        for x in -10..10 {
            assert!(store.get((x, 4, 0)).is_solid());
        }
    }

    #[test]
    fn rivers_only_place_water_inside_span() {
        let mut store = BlockStore::new();
        let generator = TerrainGenerator::new(Some(2));
        generator.generate_rivers(&mut store, 100);

        assert!(!store.is_empty());
        for (pos, block) in store.iter() {
            assert_eq!(block.kind(), Some(BlockType::WATER));
            assert!((-100..100).contains(&pos.z));
            assert!(pos.y >= 1);
        }
    }
}
