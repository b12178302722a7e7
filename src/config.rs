use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug)]
pub struct Args {
    pub games_dir: PathBuf,
    pub verbose: bool,
    pub dry_run: bool,
}

/// Marks a directory as a playable game.
pub const ENTRY_POINT_FILE: &str = "index.html";
pub const CONFIG_FILE: &str = "config.json";
pub const THUMBNAIL_FILE: &str = "thumbnail.png";
pub const INDEX_FILE: &str = "game-index.json";

/// Prefix of every locator written to the index, as seen by the catalog page.
pub const GAMES_URL_PREFIX: &str = "games";

/// Optional per-game overrides read from `config.json`. Unknown keys are ignored.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GameConfig {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEntry {
    pub name: String,
    pub path: String,
    pub folder: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

pub type GameIndex = Vec<GameEntry>;

pub const COLOR_RED: &str = "\x1b[31m";
pub const COLOR_YELLOW: &str = "\x1b[33m";
pub const COLOR_CYAN: &str = "\x1b[36m";
pub const COLOR_RESET: &str = "\x1b[0m";
