//! # Voxel World
//!
//! This module contains everything that represents and populates the block grid.
//!
//! ## Architecture
//!
//! * **Block**: the material tag stored per cell
//! * **Store**: sparse map from integer cell coordinates to blocks
//! * **HashNoise**: the deterministic scalar noise used by generation
//! * **Generation**: open terrain, biome and logo pipelines
//! * **World**: owns one store and the generator that filled it
//!
//! ## Data Flow
//!
//! 1. A world is generated once when it is created
//! 2. The player controller reads and mutates the active world's store every tick
//! 3. The renderer reads the same store to draw the frame

pub mod block;
pub mod generation;
pub mod hash_noise;
pub mod store;
pub mod world;
