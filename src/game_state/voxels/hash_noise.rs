//! # Hash Noise
//!
//! The single scalar noise source shared by the height, biome, cave and river
//! generators. It is a stateless sine hash: the same input always gives the same
//! output, so terrain can be reproduced from coordinates alone. Independent channels
//! are obtained by sampling at different third-axis offsets instead of keeping
//! several seeded generators.

use ::noise::NoiseFn;

/// Stateless sine-hash noise with values in `[-1, 1)`.
#[derive(Copy, Clone, Debug, Default)]
pub struct HashNoise;

impl HashNoise {
    /// Samples the noise at `(x, y, z)`.
    ///
    /// Computes `sin(x*12.9898 + y*78.233 + z*37.719) * 43758.5453`, keeps the
    /// fractional part and maps it from `[0, 1)` to `[-1, 1)`.
    pub fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        let a = (x * 12.9898 + y * 78.233 + z * 37.719).sin() * 43758.5453;
        2.0 * (a - a.floor()) - 1.0
    }
}

impl NoiseFn<f64, 3> for HashNoise {
    fn get(&self, point: [f64; 3]) -> f64 {
        self.sample(point[0], point[1], point[2])
    }
}
