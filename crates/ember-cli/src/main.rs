//! Ember CLI - Command-line interface for the Ember fire engine

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{config, run, scenes};

#[derive(Parser)]
#[command(name = "ember")]
#[command(about = "Headless driver for the Ember fire simulation", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a scene for a number of frames and report sprite stats
    Run {
        /// Scene id to run
        #[arg(default_value = "phoenix-flame")]
        scene: String,

        /// Number of frames to simulate
        #[arg(long, default_value = "600")]
        frames: u32,

        /// Timestep in seconds (default: 1/60); pacing target with --realtime
        #[arg(long)]
        dt: Option<f32>,

        /// Pace frames against the wall clock instead of a fixed step
        #[arg(long)]
        realtime: bool,

        /// Viewport width in pixels
        #[arg(long, default_value = "800")]
        width: u32,

        /// Viewport height in pixels
        #[arg(long, default_value = "600")]
        height: u32,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// List registered scene ids
    Scenes,

    /// Print the resolved emitter preset for a scene
    Config {
        /// Scene id
        scene: String,

        /// Output format (json or toml)
        #[arg(long, default_value = "json")]
        format: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            scene,
            frames,
            dt,
            realtime,
            width,
            height,
            format,
        } => run::run(run::RunArgs {
            scene,
            frames,
            dt,
            realtime,
            width,
            height,
            format,
        }),
        Commands::Scenes => scenes::run(),
        Commands::Config { scene, format } => config::run(&scene, &format),
    }
}
