//! Ember Core - Foundational types for the Ember demo engine
//!
//! This crate provides the types that all other Ember crates depend on:
//! - `Vec2` - 2D simulation vector
//! - `Span` - inclusive `[min, max]` range for randomized draws
//! - Packed RGB tint helpers
//! - Error types and Result alias

mod color;
mod error;
mod types;

pub use color::{pack_rgb, rgb_channels};
pub use error::{EmberError, Result};
pub use types::{Span, Vec2};
