//! Texture descriptions
//!
//! The stage layer never owns pixel data. A `Texture` is just the metadata a
//! simulation needs to size sprites against: a label for diagnostics and the
//! source dimensions in pixels.

use ember_core::{EmberError, Result};

/// Metadata for a drawable image
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    label: String,
    width: u32,
    height: u32,
}

impl Texture {
    /// Create a texture description. Zero-sized textures are rejected since
    /// they would produce division-by-zero sprite scales downstream.
    pub fn new(label: impl Into<String>, width: u32, height: u32) -> Result<Self> {
        let label = label.into();
        if width == 0 || height == 0 {
            return Err(EmberError::InvalidTexture(format!(
                "texture '{}' has zero dimension ({}x{})",
                label, width, height
            )));
        }
        Ok(Self {
            label,
            width,
            height,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn width(&self) -> f32 {
        self.width as f32
    }

    pub fn height(&self) -> f32 {
        self.height as f32
    }
}
