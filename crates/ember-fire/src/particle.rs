//! Per-particle simulation state

use ember_core::Vec2;

/// Velocity state of a pooled particle.
///
/// `Pending` marks a particle whose velocity has not been drawn yet; the
/// first integration step draws it (including the cone drift, which needs
/// the resting spawn position). Once drawn the particle stays `Moving`
/// until it is recycled or removed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    Pending,
    Moving(Vec2),
}

/// CPU-side particle state, mirrored one-to-one with a surface sprite
#[derive(Clone, Copy, Debug)]
pub struct FireParticle {
    pub pos: Vec2,
    pub motion: Motion,
    /// Seconds lived so far
    pub age: f32,
    /// Lifecycle length used to normalize `age`
    pub age_limit: f32,
    /// Per-particle phase offset for wobble and scale flicker
    pub flicker_phase: f32,
}

impl FireParticle {
    /// Normalized lifecycle position in [0, 1]
    pub fn age_ratio(&self) -> f32 {
        (self.age / self.age_limit.max(0.001)).min(1.0)
    }
}
