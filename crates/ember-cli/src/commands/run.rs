//! Headless scene runner

use anyhow::{Context, Result};
use ember_scenes::register_all;
use ember_stage::{FpsCounter, FrameClock, SceneDirector, Viewport};
use serde::Serialize;
use std::time::{Duration, Instant};

pub struct RunArgs {
    pub scene: String,
    pub frames: u32,
    pub dt: Option<f32>,
    pub realtime: bool,
    pub width: u32,
    pub height: u32,
    pub format: String,
}

#[derive(Serialize)]
struct RunReport {
    scene: String,
    frames: u32,
    simulated_seconds: f64,
    elapsed_seconds: f64,
    fps: Option<u32>,
    sprites: usize,
    visible_sprites: usize,
    mean_alpha: f32,
    x_min: f32,
    x_max: f32,
    y_min: f32,
    y_max: f32,
}

pub fn run(args: RunArgs) -> Result<()> {
    let report = simulate(&args)?;

    match args.format.as_str() {
        "text" => print_report(&report),
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        _ => anyhow::bail!("Unknown format: {}", args.format),
    }

    Ok(())
}

fn simulate(args: &RunArgs) -> Result<RunReport> {
    let step = args.dt.unwrap_or(1.0 / 60.0);
    if step <= 0.0 || !step.is_finite() {
        anyhow::bail!("Timestep must be positive, got {}", step);
    }

    let mut director = SceneDirector::new(Viewport::new(args.width as f32, args.height as f32));
    register_all(&mut director);
    director
        .show(&args.scene)
        .with_context(|| format!("Failed to show scene '{}'", args.scene))?;

    let mut clock = FrameClock::new();
    let mut fps = FpsCounter::new();
    let mut last_fps = None;
    let mut simulated = 0.0f64;
    let started = Instant::now();

    for _ in 0..args.frames {
        let dt = if args.realtime {
            std::thread::sleep(Duration::from_secs_f32(step));
            clock.tick();
            clock.delta_time as f32
        } else {
            step
        };
        director.update(dt);
        simulated += dt as f64;
        if let Some(reading) = fps.frame(simulated * 1000.0) {
            last_fps = Some(reading);
        }
    }

    Ok(summarize(
        &director,
        args,
        simulated,
        started.elapsed().as_secs_f64(),
        last_fps,
    ))
}

fn summarize(
    director: &SceneDirector,
    args: &RunArgs,
    simulated: f64,
    elapsed: f64,
    fps: Option<u32>,
) -> RunReport {
    let mut sprites = 0usize;
    let mut visible = 0usize;
    let mut alpha_sum = 0.0f32;
    let mut x_min = f32::INFINITY;
    let mut x_max = f32::NEG_INFINITY;
    let mut y_min = f32::INFINITY;
    let mut y_max = f32::NEG_INFINITY;

    for batch in director.surfaces() {
        for sprite in batch.iter() {
            sprites += 1;
            alpha_sum += sprite.alpha;
            if sprite.alpha > 0.01 {
                visible += 1;
            }
            x_min = x_min.min(sprite.x);
            x_max = x_max.max(sprite.x);
            y_min = y_min.min(sprite.y);
            y_max = y_max.max(sprite.y);
        }
    }

    if sprites == 0 {
        x_min = 0.0;
        x_max = 0.0;
        y_min = 0.0;
        y_max = 0.0;
    }

    RunReport {
        scene: args.scene.clone(),
        frames: args.frames,
        simulated_seconds: simulated,
        elapsed_seconds: elapsed,
        fps,
        sprites,
        visible_sprites: visible,
        mean_alpha: alpha_sum / sprites.max(1) as f32,
        x_min,
        x_max,
        y_min,
        y_max,
    }
}

fn print_report(report: &RunReport) {
    println!(
        "Ran '{}' for {} frame(s): {:.2}s simulated in {:.2}s",
        report.scene, report.frames, report.simulated_seconds, report.elapsed_seconds
    );
    println!(
        "  sprites: {} ({} visible)",
        report.sprites, report.visible_sprites
    );
    println!("  mean alpha: {:.3}", report.mean_alpha);
    println!(
        "  extent: x [{:.1} .. {:.1}], y [{:.1} .. {:.1}]",
        report.x_min, report.x_max, report.y_min, report.y_max
    );
    if let Some(fps) = report.fps {
        println!("  rate: {} fps", fps);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_args(scene: &str, frames: u32) -> RunArgs {
        RunArgs {
            scene: scene.to_string(),
            frames,
            dt: None,
            realtime: false,
            width: 800,
            height: 600,
            format: "text".to_string(),
        }
    }

    #[test]
    fn phoenix_run_keeps_sprites_inside_the_flame_region() {
        let report = simulate(&fixed_args("phoenix-flame", 120)).unwrap();
        assert_eq!(report.sprites, 10);
        assert!(report.visible_sprites > 0);
        assert!((report.simulated_seconds - 2.0).abs() < 1e-3);
        assert_eq!(report.fps, Some(60));
        // Anchor is (400, 504); bounds pad one frame of drift past the cone
        assert!(report.x_min > 290.0 && report.x_max < 510.0);
        assert!(report.y_min > 430.0 && report.y_max < 510.0);
    }

    #[test]
    fn campfire_run_reports_the_static_silhouette() {
        let report = simulate(&fixed_args("campfire", 30)).unwrap();
        assert!(report.sprites >= 32);
        assert!(report.sprites <= 48);
        assert!(report.visible_sprites >= 32);
    }

    #[test]
    fn unknown_scene_is_an_error() {
        assert!(simulate(&fixed_args("bonfire", 1)).is_err());
    }

    #[test]
    fn unknown_format_is_an_error() {
        let mut args = fixed_args("phoenix-flame", 1);
        args.format = "yaml".to_string();
        assert!(run(args).is_err());
    }

    #[test]
    fn zero_timestep_is_an_error() {
        let mut args = fixed_args("phoenix-flame", 1);
        args.dt = Some(0.0);
        assert!(simulate(&args).is_err());
    }
}
