//! Scene listing command

use anyhow::Result;
use ember_scenes::register_all;
use ember_stage::{SceneDirector, Viewport};

pub fn run() -> Result<()> {
    let mut director = SceneDirector::new(Viewport::new(800.0, 600.0));
    register_all(&mut director);

    println!("Available scenes:");
    for id in director.scene_ids() {
        println!("  - {}", id);
    }

    Ok(())
}
