use crate::game::model::{GameRules, DOWN_POLE_BITMAP, NUM_POLES, UP_POLE_BITMAP};
use crate::sprite::{Canvas, SpriteError, SpriteKey, SpriteProvider};
use rand::Rng;

/// Floor and ceiling obstacle moving left together.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolePair {
    pub up_pole: SpriteKey,
    pub down_pole: SpriteKey,
}

impl PolePair {
    pub fn spawn(sprites: &mut impl SpriteProvider, rules: &GameRules, rng: &mut impl Rng) -> Result<PolePair, SpriteError> {
        let screen = sprites.screen_size();
        let pos_x = screen.x + rng.gen_range(0, rules.pole_spawn_range) as f32;

        let up_pole = sprites.create_sprite(UP_POLE_BITMAP, None)?;
        {
            let up = sprites.sprite_mut(up_pole)?;
            up.position.x = pos_x;
            up.position.y = screen.y - up.height();
            up.velocity.x = rules.foreground_scroll_speed;
        }

        let down_pole = sprites.create_sprite(DOWN_POLE_BITMAP, None)?;
        {
            let down = sprites.sprite_mut(down_pole)?;
            down.position.x = pos_x;
            down.position.y = 0.0;
            down.velocity.x = rules.foreground_scroll_speed;
        }

        Ok(PolePair { up_pole, down_pole })
    }

    fn free(self, sprites: &mut impl SpriteProvider) -> Result<(), SpriteError> {
        sprites.free_sprite(self.up_pole)?;
        sprites.free_sprite(self.down_pole)?;
        Ok(())
    }

    fn off_screen(&self, sprites: &impl SpriteProvider) -> Result<bool, SpriteError> {
        let up = sprites.sprite(self.up_pole)?;
        Ok(up.x() + up.width() < 0.0)
    }

    pub fn pos_x(&self, sprites: &impl SpriteProvider) -> Result<f32, SpriteError> {
        Ok(sprites.sprite(self.up_pole)?.x())
    }
}

/// Fixed set of pole pairs. A pair that has left the screen is replaced in its
/// own slot, so the pool never grows or shrinks.
pub struct PolePool {
    pairs: Vec<PolePair>,
}

impl PolePool {
    pub fn spawn(sprites: &mut impl SpriteProvider, rules: &GameRules, rng: &mut impl Rng) -> Result<PolePool, SpriteError> {
        let mut pairs = Vec::with_capacity(NUM_POLES);
        for _ in 0 .. NUM_POLES {
            pairs.push(PolePair::spawn(sprites, rules, rng)?);
        }
        Ok(PolePool { pairs })
    }

    pub fn update_pair(&mut self, index: usize, sprites: &mut impl SpriteProvider, rules: &GameRules, rng: &mut impl Rng) -> Result<(), SpriteError> {
        let pair = self.pairs[index];
        sprites.update_sprite(pair.up_pole)?;
        sprites.update_sprite(pair.down_pole)?;

        if pair.off_screen(&*sprites)? {
            pair.free(sprites)?;
            let respawned = PolePair::spawn(sprites, rules, rng)?;
            log::debug!("Pole pair {} recycled at x = {}", index, respawned.pos_x(&*sprites)?);
            self.pairs[index] = respawned;
        }
        Ok(())
    }

    pub fn update_all(&mut self, sprites: &mut impl SpriteProvider, rules: &GameRules, rng: &mut impl Rng) -> Result<(), SpriteError> {
        for index in 0 .. self.pairs.len() {
            self.update_pair(index, sprites, rules, rng)?;
        }
        Ok(())
    }

    pub fn draw_all(&self, sprites: &impl SpriteProvider, canvas: &mut impl Canvas) -> Result<(), SpriteError> {
        for pair in self.pairs.iter() {
            sprites.draw_sprite(pair.up_pole, canvas)?;
            sprites.draw_sprite(pair.down_pole, canvas)?;
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn pairs(&self) -> &[PolePair] {
        &self.pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprite::{test_arena, RecordingCanvas};
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn spawn_pair_shares_x_and_velocity(){
        let mut sprites = test_arena();
        let rules = GameRules::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0 .. 50 {
            let pair = PolePair::spawn(&mut sprites, &rules, &mut rng).unwrap();
            let up = sprites.sprite(pair.up_pole).unwrap();
            let down = sprites.sprite(pair.down_pole).unwrap();

            assert!(up.x() >= 432.0 && up.x() < 432.0 + 1200.0);
            assert_eq!(up.x(), down.x());
            assert_eq!(up.x().fract(), 0.0);
            assert_eq!(up.velocity.x, -2.0);
            assert_eq!(down.velocity.x, -2.0);
            assert_eq!(up.y(), 768.0 - 400.0);
            assert_eq!(down.y(), 0.0);
        }
    }

    #[test]
    fn zero_offset_spawns_at_screen_edge(){
        let mut sprites = test_arena();
        let rules = GameRules::default();
        let mut fake_rng = StepRng::new(0, 0);

        let pair = PolePair::spawn(&mut sprites, &rules, &mut fake_rng).unwrap();

        assert_eq!(pair.pos_x(&sprites).unwrap(), 432.0);
    }

    #[test]
    fn pool_has_fixed_size(){
        let mut sprites = test_arena();
        let rules = GameRules::default();
        let mut rng = StdRng::seed_from_u64(1);

        let mut pool = PolePool::spawn(&mut sprites, &rules, &mut rng).unwrap();
        for _ in 0 .. 2000 {
            pool.update_all(&mut sprites, &rules, &mut rng).unwrap();
        }

        assert_eq!(pool.pairs().len(), NUM_POLES);
        assert_eq!(sprites.live_sprites(), NUM_POLES * 2);
    }

    #[test]
    fn pairs_stay_in_lockstep(){
        let mut sprites = test_arena();
        let rules = GameRules::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut pool = PolePool::spawn(&mut sprites, &rules, &mut rng).unwrap();

        for _ in 0 .. 1500 {
            pool.update_all(&mut sprites, &rules, &mut rng).unwrap();
            for pair in pool.pairs() {
                let up = sprites.sprite(pair.up_pole).unwrap();
                let down = sprites.sprite(pair.down_pole).unwrap();
                assert_eq!(up.x(), down.x());
                assert_eq!(up.velocity.x, -2.0);
                assert_eq!(down.velocity.x, -2.0);
            }
        }
    }

    #[test]
    fn pair_recycles_once_fully_off_screen(){
        let mut sprites = test_arena();
        let rules = GameRules::default();
        let mut fake_rng = StepRng::new(0, 0);
        let mut pool = PolePool::spawn(&mut sprites, &rules, &mut fake_rng).unwrap();
        let original = pool.pairs()[0];

        // 432 + 64 = 496 pixels to cover at 2 per frame; x + width == 0 still counts as visible.
        for _ in 0 .. 248 {
            pool.update_pair(0, &mut sprites, &rules, &mut fake_rng).unwrap();
        }
        assert_eq!(pool.pairs()[0], original);
        assert_eq!(original.pos_x(&sprites).unwrap(), -64.0);

        pool.update_pair(0, &mut sprites, &rules, &mut fake_rng).unwrap();

        let recycled = pool.pairs()[0];
        assert_eq!(recycled.pos_x(&sprites).unwrap(), 432.0);
        assert_eq!(sprites.sprite(original.up_pole), Err(SpriteError::Stale(original.up_pole)));
        assert_eq!(sprites.sprite(original.down_pole), Err(SpriteError::Stale(original.down_pole)));
    }

    #[test]
    fn pairs_recycle_independently(){
        let mut sprites = test_arena();
        let rules = GameRules::default();
        let mut fake_rng = StepRng::new(0, 0);
        let mut pool = PolePool::spawn(&mut sprites, &rules, &mut fake_rng).unwrap();
        sprites.sprite_mut(pool.pairs()[1].up_pole).unwrap().position.x = 100.0;
        sprites.sprite_mut(pool.pairs()[1].down_pole).unwrap().position.x = 100.0;

        for _ in 0 .. 249 {
            pool.update_all(&mut sprites, &rules, &mut fake_rng).unwrap();
        }

        assert_eq!(pool.pairs()[0].pos_x(&sprites).unwrap(), 432.0);
        assert_eq!(pool.pairs()[1].pos_x(&sprites).unwrap(), 432.0 - 2.0 * (249 - 83) as f32);
    }

    #[test]
    fn draw_all_in_index_order(){
        let mut sprites = test_arena();
        let rules = GameRules::default();
        let mut fake_rng = StepRng::new(0, 0);
        let pool = PolePool::spawn(&mut sprites, &rules, &mut fake_rng).unwrap();
        let mut canvas = RecordingCanvas::default();

        pool.draw_all(&sprites, &mut canvas).unwrap();

        let bitmaps: Vec<&str> = canvas.calls.iter().map(|(bitmap, _, _)| bitmap.as_str()).collect();
        assert_eq!(bitmaps, vec!["UpPole", "DownPole", "UpPole", "DownPole", "UpPole", "DownPole", "UpPole", "DownPole"]);
    }
}
