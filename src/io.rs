use crate::config::{
    GameConfig, GameIndex, COLOR_CYAN, COLOR_RED, COLOR_RESET, COLOR_YELLOW, CONFIG_FILE,
    INDEX_FILE,
};
use crate::error::{IndexError, IndexResult};
use serde_json::{Map, Value};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

pub fn print_error(message: &str) {
    eprintln!("{}ERROR{}: {}", COLOR_RED, COLOR_RESET, message);
}

pub fn print_warning(message: &str) {
    eprintln!("{}WARNING{}: {}", COLOR_YELLOW, COLOR_RESET, message);
}

pub fn print_info(message: &str) {
    eprintln!("{}INFO{}: {}", COLOR_CYAN, COLOR_RESET, message);
}

/// Overrides read from a game's `config.json`, plus the keys that had to be ignored.
#[derive(Debug, Default)]
pub struct LoadedConfig {
    pub config: GameConfig,
    pub ignored: Vec<IndexError>,
}

/// Reads `config.json` from a game directory.
///
/// Returns `Ok(None)` when the file does not exist. A file that cannot be
/// read or is not a JSON object is [`IndexError::UnreadableConfig`] and the
/// caller falls back to defaults. Inside an object each recognised key is
/// taken on its own: a non-string value drops only that key.
pub fn read_game_config(game_dir: &Path, folder: &str) -> IndexResult<Option<LoadedConfig>> {
    let config_path = game_dir.join(CONFIG_FILE);

    let unreadable = |reason: String| IndexError::UnreadableConfig {
        folder: folder.to_string(),
        reason,
    };

    let bytes = match fs::read(&config_path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(unreadable(e.to_string())),
    };

    let object: Map<String, Value> =
        serde_json::from_slice(&bytes).map_err(|e| unreadable(e.to_string()))?;

    Ok(Some(config_from_object(&object, folder)))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn config_from_object(object: &Map<String, Value>, folder: &str) -> LoadedConfig {
    let mut ignored = Vec::new();

    // `null` reads as an absent key.
    let mut take = |key: &str| match object.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(value)) => Some(value.clone()),
        Some(other) => {
            ignored.push(IndexError::InvalidConfigKey {
                folder: folder.to_string(),
                key: key.to_string(),
                reason: format!("expected a string, found {}", json_kind(other)),
            });
            None
        }
    };

    let config = GameConfig {
        title: take("title"),
        description: take("description"),
        category: take("category"),
        thumbnail: take("thumbnail"),
    };

    LoadedConfig { config, ignored }
}

/// Pretty JSON with two-space indentation; non-ASCII is written as-is.
pub fn render_index(index: &GameIndex) -> IndexResult<String> {
    Ok(serde_json::to_string_pretty(index)?)
}

/// Writes the index into the games root, replacing any previous file.
pub fn write_index(games_dir: &Path, index: &GameIndex) -> IndexResult<PathBuf> {
    let output_path = games_dir.join(INDEX_FILE);
    let json = render_index(index)?;
    fs::write(&output_path, json)?;
    Ok(output_path)
}

/// Path as shown to the user: relative to the working directory when one can be computed.
pub fn display_path(path: &Path) -> PathBuf {
    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(_) => return path.to_path_buf(),
    };
    let absolute = cwd.join(path);

    pathdiff::diff_paths(&absolute, &cwd)
        .filter(|rel| !rel.as_os_str().is_empty())
        .unwrap_or(absolute)
}
