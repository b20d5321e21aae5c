use crate::sprite::{AnimationState, AssetSource, Canvas, Sprite, SpriteError, SpriteKey, SpriteProvider};
use quicksilver::geom::Vector;

struct Slot {
    generation: usize,
    sprite: Option<Sprite>,
}

/// Owns every live sprite. Freed slots are reused with a bumped generation so
/// keys handed out before the free can no longer reach the new occupant.
pub struct SpriteArena<A: AssetSource> {
    assets: A,
    screen_size: Vector,
    slots: Vec<Slot>,
    free: Vec<usize>,
}

impl<A: AssetSource> SpriteArena<A> {
    pub fn new(assets: A, screen_size: Vector) -> Self {
        SpriteArena { assets, screen_size, slots: Vec::new(), free: Vec::new() }
    }

    pub fn assets(&self) -> &A {
        &self.assets
    }

    pub fn live_sprites(&self) -> usize {
        self.slots.iter().filter(|slot| slot.sprite.is_some()).count()
    }

    fn slot(&self, key: SpriteKey) -> Option<&Slot> {
        self.slots.get(key.index).filter(|slot| slot.generation == key.generation)
    }
}

impl<A: AssetSource> SpriteProvider for SpriteArena<A> {
    fn screen_size(&self) -> Vector {
        self.screen_size
    }

    fn create_sprite(&mut self, bitmap: &str, script: Option<&str>) -> Result<SpriteKey, SpriteError> {
        let size = self.assets.bitmap_size(bitmap)
            .ok_or_else(|| SpriteError::UnknownBitmap(bitmap.to_string()))?;
        if let Some(script) = script {
            if !self.assets.has_script(script) {
                return Err(SpriteError::UnknownScript(script.to_string()));
            }
        }
        let sprite = Sprite::new(bitmap, script, size);

        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index];
            slot.generation += 1;
            slot.sprite = Some(sprite);
            Ok(SpriteKey { index, generation: slot.generation })
        } else {
            self.slots.push(Slot { generation: 0, sprite: Some(sprite) });
            Ok(SpriteKey { index: self.slots.len() - 1, generation: 0 })
        }
    }

    fn free_sprite(&mut self, key: SpriteKey) -> Result<Sprite, SpriteError> {
        let sprite = self.slots.get_mut(key.index)
            .filter(|slot| slot.generation == key.generation)
            .and_then(|slot| slot.sprite.take())
            .ok_or(SpriteError::Stale(key))?;
        self.free.push(key.index);
        Ok(sprite)
    }

    fn sprite(&self, key: SpriteKey) -> Result<&Sprite, SpriteError> {
        self.slot(key)
            .and_then(|slot| slot.sprite.as_ref())
            .ok_or(SpriteError::Stale(key))
    }

    fn sprite_mut(&mut self, key: SpriteKey) -> Result<&mut Sprite, SpriteError> {
        self.slots.get_mut(key.index)
            .filter(|slot| slot.generation == key.generation)
            .and_then(|slot| slot.sprite.as_mut())
            .ok_or(SpriteError::Stale(key))
    }

    fn start_animation(&mut self, key: SpriteKey, name: &str) -> Result<(), SpriteError> {
        let sprite = self.sprite(key)?;
        let script = sprite.script.clone()
            .ok_or_else(|| SpriteError::NotAnimated(sprite.bitmap.clone()))?;
        let animation = self.assets.animation(&script, name)
            .cloned()
            .ok_or_else(|| SpriteError::UnknownAnimation { script: script.clone(), name: name.to_string() })?;
        self.sprite_mut(key)?.animation = Some(AnimationState::start(name, animation));
        Ok(())
    }

    fn update_sprite(&mut self, key: SpriteKey) -> Result<(), SpriteError> {
        let sprite = self.sprite_mut(key)?;
        sprite.position = sprite.position + sprite.velocity;
        if let Some(animation) = sprite.animation.as_mut() {
            animation.tick();
        }
        Ok(())
    }

    fn draw_sprite(&self, key: SpriteKey, canvas: &mut impl Canvas) -> Result<(), SpriteError> {
        let sprite = self.sprite(key)?;
        canvas.draw_cell(&sprite.bitmap, sprite.cell(), sprite.position)
    }
}
