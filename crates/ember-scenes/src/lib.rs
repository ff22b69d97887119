//! Ember Scenes - Demo scenes driving the fire engine
//!
//! Each scene owns one emitter and adapts it to the viewport:
//! - `PhoenixFlameScene` — continuous recycle mode, additive-looking
//!   flame anchored near the bottom of the screen
//! - `CampfireScene` — static silhouette plus a trickle of tip flyers

mod campfire;
mod phoenix;
pub mod presets;

pub use campfire::CampfireScene;
pub use phoenix::PhoenixFlameScene;

use ember_stage::SceneDirector;

/// Registers every demo scene with the director.
pub fn register_all(director: &mut SceneDirector) {
    director.register("phoenix-flame", || Box::new(PhoenixFlameScene::new()));
    director.register("campfire", || Box::new(CampfireScene::new()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_stage::Viewport;

    #[test]
    fn all_scenes_register_and_show() {
        let mut director = SceneDirector::new(Viewport::new(800.0, 600.0));
        register_all(&mut director);
        assert_eq!(director.scene_ids(), vec!["phoenix-flame", "campfire"]);
        for id in ["phoenix-flame", "campfire"] {
            director.show(id).unwrap();
            assert_eq!(director.current_id(), Some(id));
            director.update(1.0 / 60.0);
            assert!(!director.surfaces().is_empty());
        }
    }
}
