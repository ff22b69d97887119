//! Sprite surfaces
//!
//! A `SpriteBatch` is the contract between a simulation and whatever draws
//! it: an ordered list of sprite states the simulation rewrites every frame.
//! Removal uses `swap_remove` so callers that mirror the batch with their own
//! per-index data can stay in lockstep.

use serde::Serialize;

/// One drawable quad's frame state
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Sprite {
    pub x: f32,
    pub y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub alpha: f32,
    /// Packed `0xRRGGBB` multiply tint
    pub tint: u32,
}

impl Default for Sprite {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            alpha: 1.0,
            tint: 0xFFFFFF,
        }
    }
}

/// An ordered collection of sprites drawn with one texture
#[derive(Clone, Debug, Default)]
pub struct SpriteBatch {
    sprites: Vec<Sprite>,
}

impl SpriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sprites: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, sprite: Sprite) {
        self.sprites.push(sprite);
    }

    /// Removes the sprite at `index` by swapping in the last one.
    pub fn swap_remove(&mut self, index: usize) -> Sprite {
        self.sprites.swap_remove(index)
    }

    pub fn clear(&mut self) {
        self.sprites.clear();
    }

    pub fn get(&self, index: usize) -> Option<&Sprite> {
        self.sprites.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Sprite> {
        self.sprites.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    pub fn as_slice(&self) -> &[Sprite] {
        &self.sprites
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sprite> {
        self.sprites.iter()
    }
}
