//! Particle pool & lifecycle controller
//!
//! Owns the live particle set and its drawable surface, kept in lockstep
//! by index. One `update(dt)` call per frame decides recycle/removal,
//! integrates motion, and rewrites the derived visual attributes of every
//! live particle. Two operating modes, fixed at construction:
//!
//! - Continuous: the pool is filled once and particles leaving the flame
//!   bounds are recycled in place, so the live count never changes.
//! - Static cone: the first slots form an immobile silhouette and the
//!   remaining capacity churns with short-lived flyers spawned near the
//!   tip on a timer.

use crate::config::FireConfig;
use crate::geometry;
use crate::particle::{FireParticle, Motion};
use crate::rng::FireRng;
use ember_core::{pack_rgb, rgb_channels, Result, Vec2};
use ember_stage::{Sprite, SpriteBatch, Texture};

/// Seed used when no explicit RNG is injected
pub const DEFAULT_SEED: u32 = 0xDEAD_BEEF;

/// Height of the spawn band above the emission origin, in px
const BASE_BAND_RISE: f32 = 20.0;
/// Vertical jitter half-amplitude within the spawn band
const BASE_BAND_JITTER: f32 = 4.0;
/// Fraction of the configured spread used when seeding spawn x
const BASE_SPREAD_FACTOR: f32 = 0.82;
/// Fraction of the local half-width used for cone-interior spawns
const INTERIOR_SPREAD_FACTOR: f32 = 0.9;
/// Minimum horizontal half-spread for tip spawns
const TIP_MIN_SPREAD: f32 = 8.0;
/// Vertical jitter half-amplitude around the tip for tip spawns
const TIP_BAND_JITTER: f32 = 6.0;
/// How far below the origin a particle may sink before it is out of bounds
const BELOW_BASE_MARGIN: f32 = 50.0;
/// Upper bound on the randomized age of a recycled particle, in seconds
const RECYCLE_AGE_MAX: f32 = 0.2;
/// Frequency of the per-particle scale flicker, in rad/s
const SCALE_FLICKER_FREQ: f32 = 25.0;

pub struct FireEmitter {
    config: FireConfig,
    texture: Texture,
    surface: SpriteBatch,
    particles: Vec<FireParticle>,
    rng: FireRng,
    /// Counts down to the next spawn in static-cone mode
    spawn_timer: f32,
    /// Slots `[0, static_count)` hold the immobile silhouette
    static_count: usize,
    emit_x: f32,
    emit_y: f32,
}

impl FireEmitter {
    /// Validates the config and builds the emitter with the default seed.
    pub fn create(texture: Texture, config: FireConfig) -> Result<Self> {
        Self::create_with_rng(texture, config, FireRng::new(DEFAULT_SEED))
    }

    /// Like `create`, with an injected RNG for deterministic runs.
    pub fn create_with_rng(texture: Texture, config: FireConfig, rng: FireRng) -> Result<Self> {
        config.validate()?;
        let mut emitter = Self {
            emit_x: config.emit_x,
            emit_y: config.emit_y,
            surface: SpriteBatch::with_capacity(config.max_particles),
            particles: Vec::with_capacity(config.max_particles),
            spawn_timer: 0.0,
            static_count: 0,
            rng,
            texture,
            config,
        };
        if emitter.config.static_cone {
            emitter.fill_static_cone();
        } else {
            for _ in 0..emitter.config.max_particles {
                emitter.spawn_one();
            }
        }
        Ok(emitter)
    }

    /// Move the emission origin. Existing particles are untouched; bounds
    /// checks and future spawns use the new origin.
    pub fn set_emit_position(&mut self, x: f32, y: f32) {
        self.emit_x = x;
        self.emit_y = y;
    }

    pub fn emit_position(&self) -> (f32, f32) {
        (self.emit_x, self.emit_y)
    }

    pub fn config(&self) -> &FireConfig {
        &self.config
    }

    /// The drawable surface, one sprite per live particle.
    pub fn surface(&self) -> &SpriteBatch {
        &self.surface
    }

    pub fn live_count(&self) -> usize {
        self.particles.len()
    }

    pub fn static_count(&self) -> usize {
        self.static_count
    }

    pub fn flying_count(&self) -> usize {
        self.particles.len() - self.static_count
    }

    /// Tears down the emitter, releasing every particle and sprite.
    /// Dropping has the same effect; this makes scene-exit teardown
    /// explicit.
    pub fn destroy(mut self) {
        self.particles.clear();
        self.surface.clear();
    }

    /// Advance the simulation by `dt` seconds. Sole mutating entry point;
    /// call once per frame.
    pub fn update(&mut self, dt: f32) {
        let tip_y = self.emit_y - self.config.flame_height;
        let static_mode = self.config.static_cone;
        let start = self.static_count;

        for i in (start..self.particles.len()).rev() {
            if !static_mode && self.out_of_bounds(i, tip_y) {
                self.recycle(i);
                continue;
            }

            self.integrate(i, dt);
            self.clamp_to_cone(i);
            self.refresh_appearance(i);

            if static_mode && self.particles[i].pos.y <= tip_y {
                self.remove_at(i);
            }
        }

        if !static_mode {
            return;
        }
        let capacity = self.config.max_particles - self.static_count;
        self.spawn_timer -= dt;
        if self.spawn_timer <= 0.0 && self.flying_count() < capacity {
            self.spawn_timer = self.config.spawn_interval;
            self.spawn_flying_from_tip();
        }
    }

    /// Places the immobile silhouette along the cone contour. The tick
    /// loop starts past these slots, so their sprites are written exactly
    /// once, here.
    fn fill_static_cone(&mut self) {
        self.static_count = self.config.static_cone_count;
        let contour = geometry::cone_contour(
            self.static_count,
            self.config.base_width,
            self.config.flame_height,
            self.config.cone_min_half_width,
        );
        for point in contour {
            let x = self.emit_x + point.x;
            let y = self.emit_y - point.y;
            let height_factor = (point.y / self.config.flame_height).min(1.0);
            let scale_by_height = 0.18 + 0.82 * (1.0 - height_factor);
            self.particles.push(FireParticle {
                pos: Vec2::new(x, y),
                motion: Motion::Pending,
                age: 1.0,
                age_limit: 1.0,
                flicker_phase: 0.0,
            });
            self.surface.push(Sprite {
                x,
                y,
                scale_x: scale_by_height * self.config.particle_width / self.texture.width(),
                scale_y: scale_by_height * self.config.particle_height / self.texture.height(),
                alpha: 1.0,
                tint: geometry::flame_tint(height_factor),
            });
        }
    }

    /// Spawns one continuous-mode particle. Fresh particles enter at the
    /// end of the alpha curve and only become visible once recycled,
    /// which staggers the flame's warm-up.
    fn spawn_one(&mut self) {
        if self.particles.len() >= self.config.max_particles {
            return;
        }
        let base_width = self.config.base_width;
        let flame_height = self.config.flame_height;
        let no_upward = self.config.velocity_y.is_zero();

        let (x, y) = if base_width > 0.0 && no_upward {
            // Shimmer preset: fill the cone interior instead of the base
            // band, since nothing will rise to cover it
            let height_above_base = self.rng.next_f32() * flame_height;
            let half = geometry::flame_half_width(
                base_width,
                height_above_base,
                flame_height,
                self.config.cone_min_half_width,
            );
            (
                self.emit_x + self.rng.jitter(half * INTERIOR_SPREAD_FACTOR),
                self.emit_y - height_above_base,
            )
        } else {
            let spread = if base_width > 0.0 {
                base_width / 2.0
            } else {
                self.config.spread_x
            };
            (
                self.emit_x + self.rng.jitter(spread * BASE_SPREAD_FACTOR),
                self.emit_y - BASE_BAND_RISE + self.rng.jitter(BASE_BAND_JITTER),
            )
        };

        let lifetime = self.config.lifetime;
        let phase = self.rng.phase();
        let tint = self.spawn_tint();
        self.particles.push(FireParticle {
            pos: Vec2::new(x, y),
            motion: Motion::Pending,
            age: lifetime,
            age_limit: lifetime,
            flicker_phase: phase,
        });
        self.surface.push(Sprite {
            x,
            y,
            scale_x: self.config.particle_width / self.texture.width(),
            scale_y: self.config.particle_height / self.texture.height(),
            alpha: 1.0,
            tint,
        });
    }

    /// Spawns one flyer just below the cone tip with velocity drawn
    /// immediately (static-cone mode).
    fn spawn_flying_from_tip(&mut self) {
        if self.particles.len() >= self.config.max_particles {
            return;
        }
        let tip_spread = self.config.cone_min_half_width.max(TIP_MIN_SPREAD);
        let x = self.emit_x + self.rng.jitter(tip_spread);
        let y = self.emit_y - self.config.flame_height + self.rng.jitter(TIP_BAND_JITTER);
        let vx = self.rng.span(self.config.velocity_x);
        let vy = self.rng.span(self.config.velocity_y);
        let lifetime = self.config.lifetime;
        let phase = self.rng.phase();
        let tint = self.spawn_tint();
        self.particles.push(FireParticle {
            pos: Vec2::new(x, y),
            motion: Motion::Moving(Vec2::new(vx, vy)),
            age: lifetime,
            age_limit: lifetime,
            flicker_phase: phase,
        });
        self.surface.push(Sprite {
            x,
            y,
            scale_x: self.config.particle_width / self.texture.width(),
            scale_y: self.config.particle_height / self.texture.height(),
            alpha: 1.0,
            tint,
        });
    }

    fn out_of_bounds(&self, i: usize, tip_y: f32) -> bool {
        let p = &self.particles[i];
        p.pos.y <= tip_y
            || p.pos.y > self.emit_y + BELOW_BASE_MARGIN
            || (p.pos.x - self.emit_x).abs() > self.config.base_width
    }

    /// Resets an out-of-bounds particle into the spawn band, in place.
    /// The slot and sprite survive, so the pool size never changes.
    fn recycle(&mut self, i: usize) {
        let base_width = self.config.base_width;
        let spread = if base_width > 0.0 {
            base_width / 2.0
        } else {
            self.config.spread_x
        };
        let x = self.emit_x + self.rng.jitter(spread * BASE_SPREAD_FACTOR);
        let y = self.emit_y - BASE_BAND_RISE + self.rng.jitter(BASE_BAND_JITTER);
        let vx = self.rng.span(self.config.velocity_x);
        let vy = self.rng.span(self.config.velocity_y);
        let age = self.rng.next_f32() * RECYCLE_AGE_MAX;
        let phase = self.rng.phase();
        let tint = self.spawn_tint();

        let particle = &mut self.particles[i];
        particle.pos = Vec2::new(x, y);
        particle.motion = Motion::Moving(Vec2::new(vx, vy));
        particle.age = age;
        particle.flicker_phase = phase;
        if let Some(sprite) = self.surface.get_mut(i) {
            sprite.x = x;
            sprite.y = y;
            sprite.tint = tint;
        }
    }

    /// Draws velocity if still pending, applies wobble and motion, ages.
    fn integrate(&mut self, i: usize, dt: f32) {
        if self.particles[i].motion == Motion::Pending {
            let x = self.particles[i].pos.x;
            let velocity = self.draw_velocity(x);
            self.particles[i].motion = Motion::Moving(velocity);
        }
        let amplitude = self.config.flicker_amplitude;
        let freq = self.config.flicker_freq;
        let particle = &mut self.particles[i];
        if let Motion::Moving(velocity) = particle.motion {
            let wobble = amplitude * (particle.age * freq + particle.flicker_phase).sin();
            particle.pos.x += (velocity.x + wobble) * dt;
            particle.pos.y += velocity.y * dt;
        }
        particle.age += dt;
    }

    /// Velocity for a particle resting at `x`: span draws plus the
    /// outward cone drift, stronger the farther off-center it sits.
    fn draw_velocity(&mut self, x: f32) -> Vec2 {
        let vx_span = self.config.velocity_x;
        let vy_span = self.config.velocity_y;
        let base_width = self.config.base_width;
        let cone_spread = self.config.cone_spread;
        let no_upward = vy_span.is_zero();

        let mut vx = self.rng.span(vx_span);
        if base_width > 0.0 && cone_spread != 0.0 && !no_upward {
            vx += (x - self.emit_x) / (base_width / 2.0) * cone_spread;
        }
        let vy = self.rng.span(vy_span);
        Vec2::new(vx, vy)
    }

    fn clamp_to_cone(&mut self, i: usize) {
        let base_width = self.config.base_width;
        if base_width <= 0.0 || self.config.static_cone {
            return;
        }
        let particle = &mut self.particles[i];
        let height_above_base = (self.emit_y - particle.pos.y).max(0.0);
        let half = geometry::flame_half_width(
            base_width,
            height_above_base,
            self.config.flame_height,
            self.config.cone_min_half_width,
        );
        particle.pos.x = particle.pos.x.clamp(self.emit_x - half, self.emit_x + half);
    }

    /// Rewrites the sprite from the particle: alpha over lifecycle, scale
    /// over height with flicker, tint over height.
    fn refresh_appearance(&mut self, i: usize) {
        let particle = &self.particles[i];
        let height_above_base = (self.emit_y - particle.pos.y).max(0.0);
        let height_factor = (height_above_base / self.config.flame_height).min(1.0);

        let alpha = geometry::alpha_over_lifecycle(particle.age_ratio());
        let base_scale = 0.5 + 0.5 * height_factor;
        let scale_flicker = if self.config.static_cone {
            1.0
        } else {
            0.9 + 0.3 * (particle.age * SCALE_FLICKER_FREQ + particle.flicker_phase).sin()
        };
        let scale = base_scale * scale_flicker;

        let (x, y) = (particle.pos.x, particle.pos.y);
        let scale_x = scale * self.config.particle_width / self.texture.width();
        let scale_y = scale * self.config.particle_height / self.texture.height();
        let tint = geometry::flame_tint(height_factor);

        if let Some(sprite) = self.surface.get_mut(i) {
            sprite.x = x;
            sprite.y = y;
            sprite.scale_x = scale_x;
            sprite.scale_y = scale_y;
            sprite.alpha = alpha;
            sprite.tint = tint;
        }
    }

    /// Frees a flyer's slot and sprite together so the vecs stay in
    /// lockstep. Callers iterate high→low, so the swapped-in particle has
    /// already been processed this tick.
    fn remove_at(&mut self, i: usize) {
        self.particles.swap_remove(i);
        self.surface.swap_remove(i);
    }

    /// Spawn tint: the base tint warmed by one random slice of the
    /// per-channel variation.
    fn spawn_tint(&mut self) -> u32 {
        let (br, bg, bb) = rgb_channels(self.config.tint_base);
        let (vr, vg, vb) = rgb_channels(self.config.tint_variation);
        let t = self.rng.next_f32();
        let channel = |base: u8, var: u8| (base as u32 + (t * var as f32) as u32).min(255) as u8;
        pack_rgb(channel(br, vr), channel(bg, vg), channel(bb, vb))
    }
}
