//! Ember Stage - Presentation-side infrastructure
//!
//! Provides the pieces a host loop needs around a simulation:
//! - `Texture` / `Sprite` / `SpriteBatch` — drawable descriptions
//! - `FrameClock` — variable-timestep frame timing with spike clamping
//! - `FpsCounter` — windowed frames-per-second sampling
//! - `Scene` / `SceneDirector` — lazily-created, switchable scenes

mod clock;
mod director;
mod fps;
mod scene;
mod sprite;
mod texture;

pub use clock::FrameClock;
pub use director::SceneDirector;
pub use fps::FpsCounter;
pub use scene::{Scene, Viewport};
pub use sprite::{Sprite, SpriteBatch};
pub use texture::Texture;
