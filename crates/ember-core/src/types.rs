//! Simulation value types

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul};

/// A 2D vector
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

/// An inclusive `[min, max]` range for randomized per-spawn draws.
///
/// Serializes as a two-element array so TOML configs can write
/// `velocity_y = [-100, -60]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 2]", into = "[f32; 2]")]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Distance covered by the range
    pub fn width(&self) -> f32 {
        self.max - self.min
    }

    /// Ranges with `min > max` are construction errors upstream
    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }

    /// True when both endpoints are exactly zero (degenerate draw)
    pub fn is_zero(&self) -> bool {
        self.min == 0.0 && self.max == 0.0
    }
}

impl From<[f32; 2]> for Span {
    fn from(arr: [f32; 2]) -> Self {
        Self {
            min: arr[0],
            max: arr[1],
        }
    }
}

impl From<Span> for [f32; 2] {
    fn from(span: Span) -> Self {
        [span.min, span.max]
    }
}
