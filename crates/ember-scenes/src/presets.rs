//! Preset emitter configurations, written as the TOML tables they would
//! occupy in a scene file and merged over the defaults at load

use ember_core::Result;
use ember_fire::FireConfig;

const PHOENIX: &str = r#"
max_particles = 10
spawn_interval = 0.06
lifetime = 1.6
base_width = 100
cone_spread = 7
cone_min_half_width = 3
flame_height = 62
velocity_y = [-95, -55]
velocity_x = [-6, 6]
flicker_amplitude = 22
flicker_freq = 9
particle_width = 40
particle_height = 110
"#;

const CAMPFIRE: &str = r#"
max_particles = 48
static_cone = true
static_cone_count = 32
base_width = 80
cone_min_half_width = 4
flame_height = 110
spawn_interval = 0.06
lifetime = 1.6
particle_width = 30
particle_height = 44
"#;

/// Small continuous-mode flame tuned for the phoenix scene.
pub fn phoenix() -> Result<FireConfig> {
    FireConfig::from_toml_str(PHOENIX)
}

/// Static-cone campfire with a trickle of flyers above the tip.
pub fn campfire() -> Result<FireConfig> {
    FireConfig::from_toml_str(CAMPFIRE)
}

/// Resolves a preset by scene id.
pub fn by_scene_id(id: &str) -> Option<Result<FireConfig>> {
    match id {
        "phoenix-flame" => Some(phoenix()),
        "campfire" => Some(campfire()),
        _ => None,
    }
}
