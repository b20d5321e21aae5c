//! Sprite capability surface used by the game logic.
//!
//! The game never touches the window or the loaded images directly: it creates,
//! moves, animates and frees sprites through [`SpriteProvider`], and draws them
//! through a [`Canvas`]. Bitmap sizes and animation scripts come from an
//! [`AssetSource`], which is the resource bundle at runtime and a fixed table in tests.

mod arena;
mod model;

pub use arena::SpriteArena;
pub use model::{Animation, AnimationState, Sprite, SpriteKey};

#[cfg(test)]
pub(crate) use arena::tests::{test_arena, RecordingCanvas};

use quicksilver::geom::Vector;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpriteError {
    #[error("No bitmap named '{0}'")]
    UnknownBitmap(String),

    #[error("No animation script named '{0}'")]
    UnknownScript(String),

    #[error("Animation script '{script}' has no animation '{name}'")]
    UnknownAnimation { script: String, name: String },

    #[error("Sprite '{0}' was created without an animation script")]
    NotAnimated(String),

    #[error("Sprite {0:?} has already been freed")]
    Stale(SpriteKey),

    #[error("Failed to draw bitmap '{0}'")]
    Draw(String),
}

pub trait AssetSource {
    /// Size of a single cell of the bitmap, or the whole bitmap when it is not split into cells.
    fn bitmap_size(&self, bitmap: &str) -> Option<Vector>;

    fn has_script(&self, script: &str) -> bool;

    fn animation(&self, script: &str, name: &str) -> Option<&Animation>;
}

pub trait Canvas {
    fn draw_cell(&mut self, bitmap: &str, cell: usize, position: Vector) -> Result<(), SpriteError>;
}

pub trait SpriteProvider {
    fn screen_size(&self) -> Vector;

    fn create_sprite(&mut self, bitmap: &str, script: Option<&str>) -> Result<SpriteKey, SpriteError>;

    fn free_sprite(&mut self, key: SpriteKey) -> Result<Sprite, SpriteError>;

    fn sprite(&self, key: SpriteKey) -> Result<&Sprite, SpriteError>;

    fn sprite_mut(&mut self, key: SpriteKey) -> Result<&mut Sprite, SpriteError>;

    fn start_animation(&mut self, key: SpriteKey, name: &str) -> Result<(), SpriteError>;

    /// Moves the sprite by its velocity and advances its animation by one tick.
    fn update_sprite(&mut self, key: SpriteKey) -> Result<(), SpriteError>;

    fn draw_sprite(&self, key: SpriteKey, canvas: &mut impl Canvas) -> Result<(), SpriteError>;
}
