use crate::game::model::{GameRules, BACKGROUND_BITMAP, FOREGROUND_ANIMATION, FOREGROUND_BITMAP, FOREGROUND_SCRIPT, FOREROOF_BITMAP};
use crate::sprite::{Canvas, Sprite, SpriteError, SpriteKey, SpriteProvider};

/// The three scrolling layers. Each bitmap holds two copies of its tile, so
/// jumping back to x = 0 after half a width is seamless.
pub struct Scene {
    background: SpriteKey,
    foreground: SpriteKey,
    foreroof: SpriteKey,
}

fn scrolled_past_half(sprite: &Sprite) -> bool {
    sprite.x() <= -(sprite.width() / 2.0).floor()
}

impl Scene {
    pub fn spawn(sprites: &mut impl SpriteProvider, rules: &GameRules) -> Result<Scene, SpriteError> {
        let screen = sprites.screen_size();

        let background = sprites.create_sprite(BACKGROUND_BITMAP, None)?;
        sprites.sprite_mut(background)?.velocity.x = rules.background_scroll_speed;

        let foreground = sprites.create_sprite(FOREGROUND_BITMAP, Some(FOREGROUND_SCRIPT))?;
        {
            let layer = sprites.sprite_mut(foreground)?;
            layer.position.y = screen.y - layer.height();
            layer.velocity.x = rules.foreground_scroll_speed;
        }
        sprites.start_animation(foreground, FOREGROUND_ANIMATION)?;

        let foreroof = sprites.create_sprite(FOREROOF_BITMAP, None)?;
        sprites.sprite_mut(foreroof)?.velocity.x = rules.foreground_scroll_speed;

        Ok(Scene { background, foreground, foreroof })
    }

    pub fn update(&self, sprites: &mut impl SpriteProvider) -> Result<(), SpriteError> {
        sprites.update_sprite(self.background)?;
        sprites.update_sprite(self.foreground)?;
        sprites.update_sprite(self.foreroof)?;

        if scrolled_past_half(sprites.sprite(self.background)?) {
            sprites.sprite_mut(self.background)?.position.x = 0.0;
        }

        // foreroof follows the foreground's reset so both stay aligned
        if scrolled_past_half(sprites.sprite(self.foreground)?) {
            sprites.sprite_mut(self.foreground)?.position.x = 0.0;
            sprites.sprite_mut(self.foreroof)?.position.x = 0.0;
        }
        Ok(())
    }

    pub fn draw_back(&self, sprites: &impl SpriteProvider, canvas: &mut impl Canvas) -> Result<(), SpriteError> {
        sprites.draw_sprite(self.background, canvas)
    }

    pub fn draw_front(&self, sprites: &impl SpriteProvider, canvas: &mut impl Canvas) -> Result<(), SpriteError> {
        sprites.draw_sprite(self.foreroof, canvas)?;
        sprites.draw_sprite(self.foreground, canvas)
    }

    #[cfg(test)]
    pub fn background(&self) -> SpriteKey {
        self.background
    }

    #[cfg(test)]
    pub fn foreground(&self) -> SpriteKey {
        self.foreground
    }

    #[cfg(test)]
    pub fn foreroof(&self) -> SpriteKey {
        self.foreroof
    }
}
