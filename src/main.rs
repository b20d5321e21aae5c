mod assets;
mod config;
mod game;
mod gui;
mod sprite;

use quicksilver::{
    geom::Vector,
    graphics::Color,
    lifecycle::{run, Asset, Settings, State, Window},
    Future,
    Result,
};
use crate::assets::Bundle;
use crate::config::{GameConfig, CONFIG_PATH};
use crate::game::Game;
use crate::gui::{jump_typed, WindowCanvas};
use crate::sprite::{SpriteArena, SpriteError};
use rand::rngs::StdRng;
use rand::SeedableRng;

const TITLE: &str = "Cave Escape";
const SCREEN_WIDTH: u32 = 432;
const SCREEN_HEIGHT: u32 = 768;

type CaveGame = Game<SpriteArena<Bundle>, StdRng>;

enum Stage {
    Loading(Asset<Option<Bundle>>),
    Running(CaveGame),
}

struct CaveEscape {
    config: GameConfig,
    stage: Stage,
}

impl From<SpriteError> for quicksilver::Error {
    fn from(error: SpriteError) -> Self {
        std::io::Error::new(std::io::ErrorKind::Other, error).into()
    }
}

impl CaveEscape {
    fn start_game(&self, bundle: Bundle) -> std::result::Result<CaveGame, SpriteError> {
        let rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let screen = Vector::new(SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32);
        let game = Game::new(SpriteArena::new(bundle, screen), self.config.rules.clone(), rng)?;
        log::info!("Game ready with {} sprites", game.sprites().live_sprites());
        Ok(game)
    }
}

impl State for CaveEscape {
    fn new() -> Result<Self> {
        let config = GameConfig::load_or_default(CONFIG_PATH);
        log::info!("Loading resource bundle {}", config.bundle);
        let bundle = Asset::new(Bundle::load(&config.bundle).map(Some));
        Ok(Self { config, stage: Stage::Loading(bundle) })
    }

    fn update(&mut self, window: &mut Window) -> Result<()> {
        if let Stage::Loading(asset) = &mut self.stage {
            let mut loaded = None;
            asset.execute(|bundle| {
                loaded = bundle.take();
                Ok(())
            })?;
            if let Some(bundle) = loaded {
                log::info!("Resource bundle {} loaded", bundle.name());
                let game = self.start_game(bundle)?;
                self.stage = Stage::Running(game);
            }
        }

        if let Stage::Running(game) = &mut self.stage {
            game.update(jump_typed(window))?;
        }
        Ok(())
    }

    fn draw(&mut self, window: &mut Window) -> Result<()> {
        window.clear(Color::WHITE)?;

        if let Stage::Running(game) = &self.stage {
            let mut canvas = WindowCanvas::new(window, game.sprites().assets());
            game.draw(&mut canvas)?;
        }
        Ok(())
    }
}

fn main() {
    env_logger::init();
    log::info!("Starting {}", TITLE);

    let settings = Settings {
        ..Default::default()
    };
    run::<CaveEscape>(TITLE, Vector::new(SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32), settings);

    log::info!("{} closed", TITLE);
}
