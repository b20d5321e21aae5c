use crate::assets::Bundle;
use crate::sprite::{Canvas, SpriteError};
use quicksilver::{
    geom::{Rectangle, Vector},
    graphics::Background::Img,
    input::{ButtonState, Key},
    lifecycle::Window,
};

/// Draws sprite cells from the bundle into the quicksilver window.
pub struct WindowCanvas<'a> {
    window: &'a mut Window,
    bundle: &'a Bundle,
}

impl<'a> WindowCanvas<'a> {
    pub fn new(window: &'a mut Window, bundle: &'a Bundle) -> Self {
        WindowCanvas { window, bundle }
    }
}

impl<'a> Canvas for WindowCanvas<'a> {
    fn draw_cell(&mut self, bitmap: &str, cell: usize, position: Vector) -> Result<(), SpriteError> {
        let image = self.bundle.cell(bitmap, cell)
            .ok_or_else(|| SpriteError::Draw(bitmap.to_string()))?;
        let area = Rectangle::new(position, image.area().size);
        self.window.draw(&area, Img(image));
        Ok(())
    }
}

/// The space bar is the only key the game listens to, and only the frame it goes down counts.
pub fn jump_typed(window: &Window) -> bool {
    window.keyboard()[Key::Space] == ButtonState::Pressed
}
