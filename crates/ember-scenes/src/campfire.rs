//! Static-cone campfire demo scene

use crate::presets;
use ember_core::Result;
use ember_fire::FireEmitter;
use ember_stage::{Scene, SpriteBatch, Texture, Viewport};

/// Emission origin height as a fraction of the viewport
const FIRE_BASE_Y: f32 = 0.9;

/// A campfire whose body is an immobile silhouette, topped by a trickle
/// of short-lived flyers. The silhouette is anchored where the scene was
/// entered; resizing re-targets the flyer spawns only.
pub struct CampfireScene {
    emitter: Option<FireEmitter>,
}

impl CampfireScene {
    pub fn new() -> Self {
        Self { emitter: None }
    }

    fn emit_origin(viewport: Viewport) -> (f32, f32) {
        (viewport.width / 2.0, viewport.height * FIRE_BASE_Y)
    }
}

impl Default for CampfireScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for CampfireScene {
    fn on_enter(&mut self, viewport: Viewport) -> Result<()> {
        let texture = Texture::new("campfire", 96, 96)?;
        let mut config = presets::campfire()?;
        let (x, y) = Self::emit_origin(viewport);
        config.emit_x = x;
        config.emit_y = y;
        let emitter = FireEmitter::create(texture, config)?;
        println!(
            "[fire] campfire lit ({} static, {} flying capacity)",
            emitter.static_count(),
            emitter.config().max_particles - emitter.static_count()
        );
        self.emitter = Some(emitter);
        Ok(())
    }

    fn update(&mut self, dt: f32) {
        if let Some(emitter) = self.emitter.as_mut() {
            emitter.update(dt);
        }
    }

    fn on_resize(&mut self, viewport: Viewport) {
        if let Some(emitter) = self.emitter.as_mut() {
            let (x, y) = Self::emit_origin(viewport);
            emitter.set_emit_position(x, y);
        }
    }

    fn on_exit(&mut self) {
        if let Some(emitter) = self.emitter.take() {
            emitter.destroy();
        }
    }

    fn surfaces(&self) -> Vec<&SpriteBatch> {
        match self.emitter.as_ref() {
            Some(emitter) => vec![emitter.surface()],
            None => Vec::new(),
        }
    }

    fn name(&self) -> &str {
        "campfire"
    }
}
