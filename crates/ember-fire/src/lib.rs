//! Ember Fire - Pooled fire-particle simulation
//!
//! Provides a bounded-pool flame effect with:
//! - CPU-side position/velocity/age integration per particle
//! - A geometric cone silhouette that clamps and seeds positions
//! - Continuous recycle mode and static-base-plus-flying-tip mode
//! - Alpha/scale/tint animation over lifecycle and height
//! - Swap-remove pool kept in lockstep with the drawable surface

pub mod config;
pub mod emitter;
pub mod geometry;
pub mod particle;
pub mod rng;

pub use config::FireConfig;
pub use emitter::FireEmitter;
pub use particle::{FireParticle, Motion};
pub use rng::FireRng;
