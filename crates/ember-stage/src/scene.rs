//! Scene trait

use crate::SpriteBatch;
use ember_core::Result;
use serde::Serialize;

/// Logical size of the area a scene lays itself out in
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A self-contained screen managed by the `SceneDirector`
///
/// Scenes are created lazily on first show and cached; `on_enter` and
/// `on_exit` bracket each period on screen, so a scene may be entered
/// again after exiting.
pub trait Scene {
    /// Called when the scene becomes current. Allocates whatever the
    /// scene needs to run (emitters, surfaces).
    fn on_enter(&mut self, viewport: Viewport) -> Result<()>;

    /// Called once per frame while current
    fn update(&mut self, dt: f32);

    /// Called when the host area changes size while current
    fn on_resize(&mut self, viewport: Viewport);

    /// Called when another scene takes over. Releases per-run state.
    fn on_exit(&mut self);

    /// The sprite surfaces to draw this frame, in paint order
    fn surfaces(&self) -> Vec<&SpriteBatch>;

    /// Human-readable name for this scene
    fn name(&self) -> &str;
}
