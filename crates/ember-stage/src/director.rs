//! Scene registry and switching

use crate::{Scene, SpriteBatch, Viewport};
use ember_core::{EmberError, Result};
use std::collections::HashMap;

type SceneFactory = Box<dyn Fn() -> Box<dyn Scene>>;

/// Owns the scene registry and drives whichever scene is current.
///
/// Scenes register as factories and are instantiated on first show, then
/// cached for later revisits. Switching exits the outgoing scene before
/// entering the incoming one.
pub struct SceneDirector {
    viewport: Viewport,
    factories: HashMap<String, SceneFactory>,
    /// Registration order, for stable listings
    order: Vec<String>,
    scenes: HashMap<String, Box<dyn Scene>>,
    current: Option<String>,
}

impl SceneDirector {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            factories: HashMap::new(),
            order: Vec::new(),
            scenes: HashMap::new(),
            current: None,
        }
    }

    /// Register a scene under `id`. The factory runs the first time the
    /// scene is shown.
    pub fn register(&mut self, id: impl Into<String>, factory: impl Fn() -> Box<dyn Scene> + 'static) {
        let id = id.into();
        if !self.factories.contains_key(&id) {
            self.order.push(id.clone());
        }
        self.factories.insert(id, Box::new(factory));
    }

    /// Make `id` the current scene, instantiating it if needed.
    pub fn show(&mut self, id: &str) -> Result<()> {
        if !self.scenes.contains_key(id) {
            let factory = self
                .factories
                .get(id)
                .ok_or_else(|| EmberError::SceneNotFound(id.to_string()))?;
            self.scenes.insert(id.to_string(), factory());
        }

        if let Some(current_id) = self.current.take() {
            if let Some(scene) = self.scenes.get_mut(&current_id) {
                scene.on_exit();
            }
        }

        let scene = self
            .scenes
            .get_mut(id)
            .ok_or_else(|| EmberError::SceneNotFound(id.to_string()))?;
        scene.on_enter(self.viewport)?;
        println!("[stage] scene '{}' entered ({})", id, scene.name());
        self.current = Some(id.to_string());
        Ok(())
    }

    /// Advance the current scene by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if let Some(scene) = self.current_scene_mut() {
            scene.update(dt);
        }
    }

    /// Propagate a host-area size change to the current scene.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        let viewport = self.viewport;
        if let Some(scene) = self.current_scene_mut() {
            scene.on_resize(viewport);
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn current_id(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Sprite surfaces of the current scene, empty when nothing is shown.
    pub fn surfaces(&self) -> Vec<&SpriteBatch> {
        match self.current_scene() {
            Some(scene) => scene.surfaces(),
            None => Vec::new(),
        }
    }

    /// Registered scene ids in registration order.
    pub fn scene_ids(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    fn current_scene(&self) -> Option<&dyn Scene> {
        let id = self.current.as_ref()?;
        self.scenes.get(id).map(|s| s.as_ref())
    }

    fn current_scene_mut(&mut self) -> Option<&mut Box<dyn Scene>> {
        let id = self.current.clone()?;
        self.scenes.get_mut(&id)
    }
}
