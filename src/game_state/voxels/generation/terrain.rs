//! # Open Terrain
//!
//! The default landscape: a gently rolling street level with a city on top.
//!
//! The ground profile is a plain sine wave rather than noise, so it stays smooth and
//! readable and is a pure function of `x`. Buildings, roads and vehicles all sit
//! relative to that profile.

use crate::game_state::voxels::{block::block_type::BlockType, store::BlockStore};

use super::TerrainGenerator;

/// Number of buildings placed by the city pass.
const BUILDING_COUNT: usize = 20;
/// Number of cars placed by the vehicle pass.
const VEHICLE_COUNT: usize = 10;
/// Buildings and cars are placed with their left edge in `[-150, 150)`.
const PLACEMENT_HALF_RANGE: i32 = 150;
/// Distance between the starts of two road strips.
const ROAD_SPACING: usize = 20;
const ROAD_WIDTH: i32 = 3;
/// Chance that an inner building cell receives furniture.
const INTERIOR_CHANCE: f64 = 0.1;

impl TerrainGenerator {
    /// Height of the street level at column `x`: `floor(20 + 5 * sin(x * 0.02))`.
    pub fn ground_height(x: i32) -> i32 {
        (20.0 + 5.0 * (x as f64 * 0.02).sin()).floor() as i32
    }

    /// Generates the whole open-terrain world for x in `[-half_span, half_span)`.
    ///
    /// Fills each column from `y = 0` to the ground height, then runs the city, road
    /// and vehicle passes in that order.
    pub fn generate_terrain(&mut self, store: &mut BlockStore, half_span: i32) {
        log::info!("Generating open terrain over [{}, {})", -half_span, half_span);

        for x in -half_span..half_span {
            let ground_height = Self::ground_height(x);

            for y in 0..=ground_height {
                let block_type = if y <= 2 {
                    BlockType::BEDROCK
                } else if y == ground_height {
                    BlockType::CONCRETE
                } else if y >= ground_height - 2 {
                    BlockType::DIRT
                } else {
                    BlockType::STONE
                };
                store.set((x, y, 0), block_type);
            }
        }

        self.generate_city(store);
        Self::generate_roads(store, half_span);
        self.generate_vehicles(store);

        log::info!("Open terrain generated with {} blocks", store.len());
    }

    /// Places hollow glass buildings on the street.
    ///
    /// Each building is 8 to 19 cells wide and 10 to 39 cells tall. The shell is
    /// glass, inner cells get furniture with a 10% chance, and windows are punched in
    /// on every fourth row at every third column.
    pub fn generate_city(&mut self, store: &mut BlockStore) {
        for _ in 0..BUILDING_COUNT {
            let x = self.rng.i32(-PLACEMENT_HALF_RANGE..PLACEMENT_HALF_RANGE);
            let ground_height = Self::ground_height(x);
            let building_height = 10 + self.rng.i32(0..30);
            let building_width = 8 + self.rng.i32(0..12);

            let top = ground_height + building_height;
            let right = x + building_width - 1;

            for bx in x..=right {
                for by in ground_height + 1..=top {
                    if bx == x || bx == right || by == ground_height + 1 || by == top {
                        store.set((bx, by, 0), BlockType::GLASS);
                    } else if self.rng.f64() < INTERIOR_CHANCE {
                        store.set((bx, by, 0), BlockType::INTERIOR);
                    }

                    if by.rem_euclid(4) == 0 && (bx - x).rem_euclid(3) == 1 {
                        store.set((bx, by, 0), BlockType::WINDOW);
                    }
                }
            }
        }
    }

    /// Lays a three-cell road strip one cell above the ground every 20 columns.
    pub fn generate_roads(store: &mut BlockStore, half_span: i32) {
        for x in (-half_span..half_span).step_by(ROAD_SPACING) {
            let ground_height = Self::ground_height(x);
            for dx in 0..ROAD_WIDTH {
                store.set((x + dx, ground_height + 1, 0), BlockType::ROAD);
            }
        }
    }

    /// Parks cars: a three-cell body two cells above ground with a window on top.
    pub fn generate_vehicles(&mut self, store: &mut BlockStore) {
        for _ in 0..VEHICLE_COUNT {
            let x = self.rng.i32(-PLACEMENT_HALF_RANGE..PLACEMENT_HALF_RANGE);
            let ground_height = Self::ground_height(x);

            for dx in 0..3 {
                store.set((x + dx, ground_height + 2, 0), BlockType::VEHICLE);
            }
            store.set((x + 1, ground_height + 3, 0), BlockType::WINDOW);
        }
    }
}
