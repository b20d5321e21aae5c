use quicksilver::geom::Vector;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpriteKey {
    pub(crate) index: usize,
    pub(crate) generation: usize,
}

impl SpriteKey {
    #[cfg(test)]
    pub fn index(&self) -> usize {
        self.index
    }
}

/// A named animation inside an animation script: the bitmap cells to show,
/// how many update ticks each one stays on screen and whether it starts over.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Animation {
    pub frames: Vec<usize>,
    pub frame_delay: u32,
    #[serde(default = "looping_default")]
    pub looping: bool,
}

fn looping_default() -> bool {
    true
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnimationState {
    pub name: String,
    animation: Animation,
    frame: usize,
    ticks: u32,
}

impl AnimationState {
    pub fn start(name: &str, animation: Animation) -> Self {
        AnimationState { name: name.to_string(), animation, frame: 0, ticks: 0 }
    }

    pub fn tick(&mut self) {
        self.ticks += 1;
        if self.ticks < self.animation.frame_delay {
            return;
        }
        self.ticks = 0;
        let last = self.animation.frames.len().saturating_sub(1);
        if self.frame < last {
            self.frame += 1;
        } else if self.animation.looping {
            self.frame = 0;
        }
    }

    pub fn cell(&self) -> usize {
        self.animation.frames.get(self.frame).copied().unwrap_or(0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub bitmap: String,
    pub script: Option<String>,
    pub position: Vector,
    pub velocity: Vector,
    pub size: Vector,
    pub animation: Option<AnimationState>,
}

impl Sprite {
    pub fn new(bitmap: &str, script: Option<&str>, size: Vector) -> Self {
        Sprite {
            bitmap: bitmap.to_string(),
            script: script.map(str::to_string),
            position: Vector::ZERO,
            velocity: Vector::ZERO,
            size,
            animation: None,
        }
    }

    pub fn x(&self) -> f32 {
        self.position.x
    }

    #[cfg(test)]
    pub fn y(&self) -> f32 {
        self.position.y
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn cell(&self) -> usize {
        self.animation.as_ref().map(AnimationState::cell).unwrap_or(0)
    }
}
