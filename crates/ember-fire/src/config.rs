//! Emitter configuration: defaults, TOML merge, validation

use ember_core::{EmberError, Result, Span};
use serde::Serialize;

/// Configuration for one fire emitter.
///
/// Every field has a default; callers override via a TOML table merged
/// over `FireConfig::default()`. The merged value is validated once at
/// emitter construction and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct FireConfig {
    /// Hard upper bound on live particles
    pub max_particles: usize,
    /// Seconds between spawn-timer fires (static-cone mode only)
    pub spawn_interval: f32,
    /// Lifecycle length in seconds, normalizes the alpha curve
    pub lifetime: f32,
    /// Emission origin (base-center of the flame)
    pub emit_x: f32,
    pub emit_y: f32,
    /// Horizontal spawn half-spread when no cone base is configured
    pub spread_x: f32,
    /// Full width of the cone base; 0 disables the cone clamp
    pub base_width: f32,
    /// Outward horizontal drift added to spawn velocity, scaled by how
    /// far off-center the particle spawned
    pub cone_spread: f32,
    /// Carried for preset compatibility; the silhouette taper comes from
    /// the quarter-sine in `geometry`, not from this slope
    pub cone_slope: f32,
    /// Floor for the cone half-width until the tip closes
    pub cone_min_half_width: f32,
    /// Cone height above the emission origin
    pub flame_height: f32,
    /// Selects static-base-plus-flying-tip mode
    pub static_cone: bool,
    /// Particles forming the immobile silhouette in static-cone mode
    pub static_cone_count: usize,
    /// Per-spawn horizontal velocity draw
    pub velocity_x: Span,
    /// Per-spawn vertical velocity draw (negative is up)
    pub velocity_y: Span,
    /// Horizontal wobble strength in px/s
    pub flicker_amplitude: f32,
    /// Wobble frequency in rad/s
    pub flicker_freq: f32,
    /// Rendered particle size in px, divided by the texture size to get
    /// the sprite scale
    pub particle_width: f32,
    pub particle_height: f32,
    /// Spawn tint seed (packed RGB)
    pub tint_base: u32,
    /// Random additive spread over `tint_base`, per channel
    pub tint_variation: u32,
}

impl Default for FireConfig {
    fn default() -> Self {
        Self {
            max_particles: 64,
            spawn_interval: 0.06,
            lifetime: 1.6,
            emit_x: 0.0,
            emit_y: 0.0,
            spread_x: 20.0,
            base_width: 0.0,
            cone_spread: 28.0,
            cone_slope: 0.32,
            cone_min_half_width: 10.0,
            flame_height: 110.0,
            static_cone: false,
            static_cone_count: 0,
            velocity_x: Span::new(-20.0, 20.0),
            velocity_y: Span::new(-100.0, -60.0),
            flicker_amplitude: 55.0,
            flicker_freq: 18.0,
            particle_width: 24.0,
            particle_height: 36.0,
            tint_base: 0xFF6600,
            tint_variation: 0x2200,
        }
    }
}

impl FireConfig {
    /// Parse a FireConfig from a TOML table, merging over the defaults
    pub fn from_toml(table: &toml::value::Table) -> Self {
        let mut config = Self::default();

        if let Some(v) = table.get("max_particles") {
            config.max_particles = toml_usize(v, config.max_particles);
        }
        if let Some(v) = table.get("spawn_interval") {
            config.spawn_interval = toml_f32(v, config.spawn_interval);
        }
        if let Some(v) = table.get("lifetime") {
            config.lifetime = toml_f32(v, config.lifetime);
        }
        if let Some(v) = table.get("emit_x") {
            config.emit_x = toml_f32(v, config.emit_x);
        }
        if let Some(v) = table.get("emit_y") {
            config.emit_y = toml_f32(v, config.emit_y);
        }
        if let Some(v) = table.get("spread_x") {
            config.spread_x = toml_f32(v, config.spread_x);
        }
        if let Some(v) = table.get("base_width") {
            config.base_width = toml_f32(v, config.base_width);
        }
        if let Some(v) = table.get("cone_spread") {
            config.cone_spread = toml_f32(v, config.cone_spread);
        }
        if let Some(v) = table.get("cone_slope") {
            config.cone_slope = toml_f32(v, config.cone_slope);
        }
        if let Some(v) = table.get("cone_min_half_width") {
            config.cone_min_half_width = toml_f32(v, config.cone_min_half_width);
        }
        if let Some(v) = table.get("flame_height") {
            config.flame_height = toml_f32(v, config.flame_height);
        }
        if let Some(v) = table.get("static_cone") {
            config.static_cone = v.as_bool().unwrap_or(config.static_cone);
        }
        if let Some(v) = table.get("static_cone_count") {
            config.static_cone_count = toml_usize(v, config.static_cone_count);
        }
        if let Some(v) = table.get("velocity_x") {
            config.velocity_x = toml_span(v, config.velocity_x);
        }
        if let Some(v) = table.get("velocity_y") {
            config.velocity_y = toml_span(v, config.velocity_y);
        }
        if let Some(v) = table.get("flicker_amplitude") {
            config.flicker_amplitude = toml_f32(v, config.flicker_amplitude);
        }
        if let Some(v) = table.get("flicker_freq") {
            config.flicker_freq = toml_f32(v, config.flicker_freq);
        }
        if let Some(v) = table.get("particle_width") {
            config.particle_width = toml_f32(v, config.particle_width);
        }
        if let Some(v) = table.get("particle_height") {
            config.particle_height = toml_f32(v, config.particle_height);
        }
        if let Some(v) = table.get("tint_base") {
            config.tint_base = toml_u32(v, config.tint_base);
        }
        if let Some(v) = table.get("tint_variation") {
            config.tint_variation = toml_u32(v, config.tint_variation);
        }

        config
    }

    /// Parse a FireConfig from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let table: toml::value::Table = toml::from_str(text)?;
        Ok(Self::from_toml(&table))
    }

    /// Reject configurations the emitter has no recovery path for
    pub fn validate(&self) -> Result<()> {
        if self.max_particles < 1 {
            return Err(EmberError::InvalidConfig(
                "max_particles must be at least 1".to_string(),
            ));
        }
        if self.static_cone && self.static_cone_count > self.max_particles {
            return Err(EmberError::InvalidConfig(format!(
                "static_cone_count {} exceeds max_particles {}",
                self.static_cone_count, self.max_particles
            )));
        }
        for (field, value) in [
            ("spawn_interval", self.spawn_interval),
            ("lifetime", self.lifetime),
            ("flame_height", self.flame_height),
            ("particle_width", self.particle_width),
            ("particle_height", self.particle_height),
        ] {
            if value <= 0.0 {
                return Err(EmberError::ValueOutOfRange {
                    field: field.to_string(),
                    min: 0.0,
                    max: f64::INFINITY,
                    value: value as f64,
                });
            }
        }
        if self.base_width < 0.0 {
            return Err(EmberError::ValueOutOfRange {
                field: "base_width".to_string(),
                min: 0.0,
                max: f64::INFINITY,
                value: self.base_width as f64,
            });
        }
        for (field, span) in [
            ("velocity_x", self.velocity_x),
            ("velocity_y", self.velocity_y),
        ] {
            if !span.is_valid() {
                return Err(EmberError::InvalidConfig(format!(
                    "{} range is inverted ({} > {})",
                    field, span.min, span.max
                )));
            }
        }
        Ok(())
    }
}

// ── TOML helpers (handle integer/float coercion) ──

fn toml_f32(v: &toml::Value, default: f32) -> f32 {
    v.as_float()
        .map(|f| f as f32)
        .or_else(|| v.as_integer().map(|i| i as f32))
        .unwrap_or(default)
}

fn toml_usize(v: &toml::Value, default: usize) -> usize {
    v.as_integer()
        .filter(|i| *i >= 0)
        .map(|i| i as usize)
        .unwrap_or(default)
}

fn toml_u32(v: &toml::Value, default: u32) -> u32 {
    v.as_integer()
        .filter(|i| *i >= 0 && *i <= u32::MAX as i64)
        .map(|i| i as u32)
        .unwrap_or(default)
}

fn toml_span(v: &toml::Value, default: Span) -> Span {
    if let Some(arr) = v.as_array() {
        if arr.len() >= 2 {
            return Span::new(
                toml_f32(&arr[0], default.min),
                toml_f32(&arr[1], default.max),
            );
        }
    }
    default
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        let config = FireConfig::default();
        assert!(config.max_particles > 0);
        assert!(config.lifetime > 0.0);
        assert!(config.velocity_y.is_valid());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_from_toml() {
        let toml_str = r#"
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
        let table: toml::value::Table = toml::from_str(toml_str).unwrap();
        let config = FireConfig::from_toml(&table);
        assert_eq!(config.max_particles, 10);
        assert!((config.base_width - 100.0).abs() < 0.01);
        assert!((config.velocity_y.min - (-95.0)).abs() < 0.01);
        assert!((config.velocity_y.max - (-55.0)).abs() < 0.01);
        assert!((config.particle_height - 110.0).abs() < 0.01);
        // untouched fields keep their defaults
        assert!(!config.static_cone);
        assert_eq!(config.tint_base, 0xFF6600);
    }

    #[test]
    fn toml_integer_float_coercion() {
        // `flame_height = 110` gives an integer, `lifetime = 1.6` a float
        let toml_str = "flame_height = 110\nlifetime = 1.6";
        let table: toml::value::Table = toml::from_str(toml_str).unwrap();
        let config = FireConfig::from_toml(&table);
        assert!((config.flame_height - 110.0).abs() < 0.01);
        assert!((config.lifetime - 1.6).abs() < 0.01);
    }

    #[test]
    fn hex_tint_parses() {
        let config = FireConfig::from_toml_str("tint_base = 0xff8844").unwrap();
        assert_eq!(config.tint_base, 0xFF8844);
    }

    #[test]
    fn static_cone_fields_parse() {
        let config =
            FireConfig::from_toml_str("static_cone = true\nstatic_cone_count = 32").unwrap();
        assert!(config.static_cone);
        assert_eq!(config.static_cone_count, 32);
    }

    #[test]
    fn malformed_values_fall_back_to_defaults() {
        let toml_str = "max_particles = \"lots\"\nvelocity_y = [1.0]";
        let table: toml::value::Table = toml::from_str(toml_str).unwrap();
        let config = FireConfig::from_toml(&table);
        assert_eq!(config.max_particles, FireConfig::default().max_particles);
        assert_eq!(config.velocity_y, FireConfig::default().velocity_y);
    }

    #[test]
    fn invalid_toml_text_is_an_error() {
        assert!(FireConfig::from_toml_str("max_particles = = 3").is_err());
    }

    #[test]
    fn validate_rejects_empty_pool() {
        let config = FireConfig {
            max_particles: 0,
            ..FireConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(EmberError::InvalidConfig(_))
        ));
    }

    #[test]
    fn validate_rejects_oversized_static_count() {
        let config = FireConfig {
            static_cone: true,
            static_cone_count: 65,
            max_particles: 64,
            ..FireConfig::default()
        };
        assert!(config.validate().is_err());
        // a non-static config ignores the count
        let config = FireConfig {
            static_cone: false,
            ..config
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_nonpositive_scalars() {
        let cases = [
            FireConfig {
                spawn_interval: 0.0,
                ..FireConfig::default()
            },
            FireConfig {
                lifetime: -1.0,
                ..FireConfig::default()
            },
            FireConfig {
                flame_height: 0.0,
                ..FireConfig::default()
            },
        ];
        for config in cases {
            assert!(matches!(
                config.validate(),
                Err(EmberError::ValueOutOfRange { .. })
            ));
        }
    }

    #[test]
    fn validate_rejects_inverted_span() {
        let config = FireConfig {
            velocity_y: Span::new(-55.0, -95.0),
            ..FireConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_negative_base_width() {
        let config = FireConfig {
            base_width: -10.0,
            ..FireConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
