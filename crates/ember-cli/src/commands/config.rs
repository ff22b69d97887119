//! Preset inspection command

use anyhow::{Context, Result};
use ember_fire::FireConfig;
use ember_scenes::presets;

pub fn run(scene: &str, format: &str) -> Result<()> {
    let config: FireConfig = match presets::by_scene_id(scene) {
        Some(preset) => {
            preset.with_context(|| format!("Failed to resolve preset for '{}'", scene))?
        }
        None => anyhow::bail!("Unknown scene '{}'; run 'ember scenes' for the list", scene),
    };

    let output = match format {
        "json" => serde_json::to_string_pretty(&config)?,
        "toml" => toml::to_string_pretty(&config)?,
        _ => anyhow::bail!("Unknown format: {}", format),
    };

    println!("{}", output);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_presets_in_both_formats() {
        run("phoenix-flame", "json").unwrap();
        run("campfire", "toml").unwrap();
    }

    #[test]
    fn unknown_scene_is_an_error() {
        assert!(run("bonfire", "json").is_err());
    }

    #[test]
    fn unknown_format_is_an_error() {
        assert!(run("campfire", "yaml").is_err());
    }
}
