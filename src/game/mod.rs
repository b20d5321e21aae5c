pub mod model;
pub mod player;
pub mod poles;
pub mod scene;

use crate::game::model::GameRules;
use crate::game::player::Player;
use crate::game::poles::PolePool;
use crate::game::scene::Scene;
use crate::sprite::{Canvas, SpriteError, SpriteProvider};
use rand::Rng;

trait MinMax{
    type T;

    fn min_max(self, min: Self::T, max: Self::T) -> Self::T;
}

impl MinMax for f32{
    type T = f32;

    fn min_max(self, min: f32, max: f32) -> f32 {
        let value = f32::min(self, max);
        f32::max(value, min)
    }
}

/// Everything on screen. Owns the sprite provider, so dropping the game
/// releases every sprite and the assets behind them.
pub struct Game<P: SpriteProvider, R: Rng> {
    sprites: P,
    rules: GameRules,
    rng: R,
    scene: Scene,
    poles: PolePool,
    player: Player,
}

impl<P: SpriteProvider, R: Rng> Game<P, R> {
    pub fn new(mut sprites: P, rules: GameRules, mut rng: R) -> Result<Self, SpriteError> {
        let scene = Scene::spawn(&mut sprites, &rules)?;
        let poles = PolePool::spawn(&mut sprites, &rules, &mut rng)?;
        let player = Player::spawn(&mut sprites)?;
        Ok(Game { sprites, rules, rng, scene, poles, player })
    }

    /// One frame of simulation. `jump` is whether the jump key was typed this frame.
    pub fn update(&mut self, jump: bool) -> Result<(), SpriteError> {
        self.player.handle_input(&mut self.sprites, &self.rules, jump)?;
        self.scene.update(&mut self.sprites)?;
        self.poles.update_all(&mut self.sprites, &self.rules, &mut self.rng)?;
        self.player.update(&mut self.sprites, &self.rules)
    }

    pub fn draw(&self, canvas: &mut impl Canvas) -> Result<(), SpriteError> {
        self.scene.draw_back(&self.sprites, canvas)?;
        self.poles.draw_all(&self.sprites, canvas)?;
        self.scene.draw_front(&self.sprites, canvas)?;
        self.player.draw(&self.sprites, canvas)
    }

    pub fn sprites(&self) -> &P {
        &self.sprites
    }

    #[cfg(test)]
    pub fn player(&self) -> &Player {
        &self.player
    }

    #[cfg(test)]
    pub fn poles(&self) -> &PolePool {
        &self.poles
    }
}
