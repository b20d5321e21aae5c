//! The resource bundle: a RON manifest naming every bitmap and animation
//! script the game uses, loaded once at startup.

mod bundle;
mod manifest;

pub use bundle::Bundle;

use crate::game::model::{
    BACKGROUND_BITMAP, DOWN_POLE_BITMAP, FOREGROUND_BITMAP, FOREGROUND_SCRIPT, FOREROOF_BITMAP,
    PLAYER_BITMAP, PLAYER_SCRIPT, UP_POLE_BITMAP,
};
use thiserror::Error;

pub const REQUIRED_BITMAPS: &[&str] = &[
    PLAYER_BITMAP,
    UP_POLE_BITMAP,
    DOWN_POLE_BITMAP,
    BACKGROUND_BITMAP,
    FOREGROUND_BITMAP,
    FOREROOF_BITMAP,
];

pub const REQUIRED_SCRIPTS: &[&str] = &[PLAYER_SCRIPT, FOREGROUND_SCRIPT];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssetError {
    #[error("Failed to parse bundle manifest: {0}")]
    Parse(String),

    #[error("Bundle defines '{0}' more than once")]
    Duplicate(String),

    #[error("Bundle has no entry named '{0}'")]
    Missing(String),

    #[error("Cell grid of bitmap '{0}' does not fit its image")]
    CellGrid(String),
}

impl From<AssetError> for quicksilver::Error {
    fn from(error: AssetError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, error).into()
    }
}
