//! Continuous-mode flame demo scene

use crate::presets;
use ember_core::Result;
use ember_fire::FireEmitter;
use ember_stage::{Scene, SpriteBatch, Texture, Viewport};

/// Reference viewport shorter side for composite scale 1.0, in px
const FIRE_SCALE_REFERENCE: f32 = 600.0;
const FIRE_SCALE_MIN: f32 = 0.5;
const FIRE_SCALE_MAX: f32 = 2.5;
/// Emission origin height as a fraction of the viewport
const FIRE_BASE_Y: f32 = 0.84;

/// A single flame burning near the bottom-center of the screen. The
/// emitter follows the viewport: the emission origin is re-targeted every
/// update and on resize.
pub struct PhoenixFlameScene {
    emitter: Option<FireEmitter>,
    viewport: Viewport,
}

impl PhoenixFlameScene {
    pub fn new() -> Self {
        Self {
            emitter: None,
            viewport: Viewport::new(0.0, 0.0),
        }
    }

    /// Scale a compositor should apply around the flame so it reads the
    /// same across screen sizes.
    pub fn composite_scale(&self) -> f32 {
        let size = self.viewport.width.min(self.viewport.height);
        (size / FIRE_SCALE_REFERENCE).clamp(FIRE_SCALE_MIN, FIRE_SCALE_MAX)
    }

    fn emit_origin(viewport: Viewport) -> (f32, f32) {
        (viewport.width / 2.0, viewport.height * FIRE_BASE_Y)
    }
}

impl Default for PhoenixFlameScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for PhoenixFlameScene {
    fn on_enter(&mut self, viewport: Viewport) -> Result<()> {
        self.viewport = viewport;
        let texture = Texture::new("flame", 96, 96)?;
        let mut config = presets::phoenix()?;
        let (x, y) = Self::emit_origin(viewport);
        config.emit_x = x;
        config.emit_y = y;
        let emitter = FireEmitter::create(texture, config)?;
        println!(
            "[fire] phoenix flame ready ({} sprites, scale {:.2})",
            emitter.live_count(),
            self.composite_scale()
        );
        self.emitter = Some(emitter);
        Ok(())
    }

    fn update(&mut self, dt: f32) {
        if let Some(emitter) = self.emitter.as_mut() {
            let (x, y) = Self::emit_origin(self.viewport);
            emitter.set_emit_position(x, y);
            emitter.update(dt);
        }
    }

    fn on_resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
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
        "phoenix-flame"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn enter_builds_a_full_pool() {
        let mut scene = PhoenixFlameScene::new();
        scene.on_enter(Viewport::new(800.0, 600.0)).unwrap();
        let surfaces = scene.surfaces();
        assert_eq!(surfaces.len(), 1);
        assert_eq!(surfaces[0].len(), 10);
    }

    #[test]
    fn particles_cluster_around_the_anchor() {
        let mut scene = PhoenixFlameScene::new();
        scene.on_enter(Viewport::new(800.0, 600.0)).unwrap();
        for _ in 0..300 {
            scene.update(DT);
        }
        // anchor is (400, 504); the flame occupies the cone above it
        let batch = scene.surfaces()[0];
        for sprite in batch.iter() {
            assert!((sprite.x - 400.0).abs() < 60.0);
            assert!(sprite.y > 504.0 - 62.0 - 5.0);
            assert!(sprite.y < 504.0 + 55.0);
        }
    }

    #[test]
    fn resize_moves_the_anchor() {
        let mut scene = PhoenixFlameScene::new();
        scene.on_enter(Viewport::new(800.0, 600.0)).unwrap();
        scene.on_resize(Viewport::new(400.0, 1000.0));
        for _ in 0..600 {
            scene.update(DT);
        }
        let batch = scene.surfaces()[0];
        for sprite in batch.iter() {
            assert!((sprite.x - 200.0).abs() < 60.0);
            assert!(sprite.y > 840.0 - 62.0 - 5.0);
        }
    }

    #[test]
    fn composite_scale_clamps_to_range() {
        let mut scene = PhoenixFlameScene::new();
        scene.on_enter(Viewport::new(800.0, 600.0)).unwrap();
        assert!((scene.composite_scale() - 1.0).abs() < 1e-6);
        scene.on_resize(Viewport::new(320.0, 240.0));
        assert!((scene.composite_scale() - 0.5).abs() < 1e-6);
        scene.on_resize(Viewport::new(4000.0, 3000.0));
        assert!((scene.composite_scale() - 2.5).abs() < 1e-6);
    }

    #[test]
    fn exit_releases_the_emitter() {
        let mut scene = PhoenixFlameScene::new();
        scene.on_enter(Viewport::new(800.0, 600.0)).unwrap();
        scene.on_exit();
        assert!(scene.surfaces().is_empty());
        // re-entering works after an exit
        scene.on_enter(Viewport::new(800.0, 600.0)).unwrap();
        assert_eq!(scene.surfaces().len(), 1);
    }
}
