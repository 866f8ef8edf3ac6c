//! # World Generation
//!
//! Procedural population of a [`BlockStore`](super::store::BlockStore).
//!
//! ## Pipelines
//!
//! * **Open terrain** (`terrain`): a smooth sine ground profile capped with concrete,
//!   followed by city, road and vehicle passes. This is what the main world uses by
//!   default.
//! * **Biome** (`biome`): noise-driven heights and surface materials per biome, with
//!   caves, rivers and structures layered on top. Works on full 3D coordinates; the
//!   player walks the `z = 0` slice.
//! * **Logo** (`logo`): a flat platform with the game title stamped as block glyphs
//!   and a credits bar per developer.
//!
//! Passes are order dependent: a later pass overwrites what an earlier pass wrote at
//! the same cell. Only the logo pipeline clears the store first, so the open-terrain
//! and biome pipelines are meant to run once on a fresh store.

use ::noise::NoiseFn;

use super::hash_noise::HashNoise;

pub mod biome;
pub mod credits;
pub mod glyphs;
pub mod logo;
pub mod terrain;

/// Shared state of every generation pass.
///
/// Placement of buildings, vehicles and structures is random; heights are not. The
/// random source is seeded so a world can be regenerated identically.
pub struct TerrainGenerator {
    rng: fastrand::Rng,
    noise: HashNoise,
}

impl TerrainGenerator {
    /// Creates a generator. With no seed a random one is drawn.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        TerrainGenerator {
            rng,
            noise: HashNoise,
        }
    }

    /// Samples the shared noise source.
    pub fn noise(&self, x: f64, y: f64, z: f64) -> f64 {
        self.noise.get([x, y, z])
    }
}
