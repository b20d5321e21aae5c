use crate::game::model::{GameRules, PLAYER_ANIMATION, PLAYER_BITMAP, PLAYER_SCRIPT};
use crate::game::MinMax;
use crate::sprite::{Canvas, SpriteError, SpriteKey, SpriteProvider};

pub struct Player {
    sprite: SpriteKey,
}

impl Player {
    pub fn spawn(sprites: &mut impl SpriteProvider) -> Result<Player, SpriteError> {
        let screen = sprites.screen_size();
        let sprite = sprites.create_sprite(PLAYER_BITMAP, Some(PLAYER_SCRIPT))?;
        {
            let player = sprites.sprite_mut(sprite)?;
            player.position.x = screen.x / 2.0 - player.width();
            player.position.y = screen.y / 2.0;
        }
        sprites.start_animation(sprite, PLAYER_ANIMATION)?;
        Ok(Player { sprite })
    }

    /// Jumping only changes the velocity; the move happens in the next `update`.
    pub fn handle_input(&self, sprites: &mut impl SpriteProvider, rules: &GameRules, jump: bool) -> Result<(), SpriteError> {
        if jump {
            sprites.sprite_mut(self.sprite)?.velocity.y -= rules.jump_boost;
        }
        Ok(())
    }

    pub fn update_velocity(&self, sprites: &mut impl SpriteProvider, rules: &GameRules) -> Result<(), SpriteError> {
        let player = sprites.sprite_mut(self.sprite)?;
        player.velocity.y = f32::min_max(player.velocity.y + rules.gravity, -rules.max_speed, rules.max_speed);
        Ok(())
    }

    pub fn update(&self, sprites: &mut impl SpriteProvider, rules: &GameRules) -> Result<(), SpriteError> {
        self.update_velocity(sprites, rules)?;
        sprites.update_sprite(self.sprite)
    }

    pub fn draw(&self, sprites: &impl SpriteProvider, canvas: &mut impl Canvas) -> Result<(), SpriteError> {
        sprites.draw_sprite(self.sprite, canvas)
    }

    #[cfg(test)]
    pub fn sprite(&self) -> SpriteKey {
        self.sprite
    }
}
