use std::{fs, io, path::{Path, PathBuf}};

use crate::config::{
    Args, GameConfig, GameEntry, GameIndex, ENTRY_POINT_FILE, GAMES_URL_PREFIX, THUMBNAIL_FILE,
};
use crate::error::{IndexError, IndexResult};
use crate::io::{print_info, read_game_config};

/// A per-directory problem that did not stop the scan.
#[derive(Debug)]
pub struct Diagnostic {
    /// `None` when the listing entry itself could not be read.
    pub folder: Option<String>,
    pub error: IndexError,
}

impl Diagnostic {
    fn for_folder(folder: &str, error: IndexError) -> Self {
        Diagnostic {
            folder: Some(folder.to_string()),
            error,
        }
    }
}

#[derive(Debug, Default)]
pub struct ScanReport {
    pub index: GameIndex,
    pub diagnostics: Vec<Diagnostic>,
}

/// A subdirectory of the games root, in listing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub folder: String,
    pub dir: PathBuf,
}

pub fn ensure_games_dir(games_dir: &Path) -> IndexResult<()> {
    if games_dir.is_dir() {
        Ok(())
    } else {
        Err(IndexError::MissingRootDirectory(games_dir.to_path_buf()))
    }
}

/// Immediate subdirectories of the games root, sorted by name.
///
/// Only a failure to open the root is an error; entries that cannot be read
/// come back as diagnostics.
pub fn list_candidates(games_dir: &Path) -> IndexResult<(Vec<Candidate>, Vec<Diagnostic>)> {
    let entries = fs::read_dir(games_dir)?.map(|entry| entry.map(|e| e.path()));
    Ok(collect_candidates(entries))
}

fn collect_candidates<I>(entries: I) -> (Vec<Candidate>, Vec<Diagnostic>)
where
    I: IntoIterator<Item = io::Result<PathBuf>>,
{
    let mut candidates = Vec::new();
    let mut diagnostics = Vec::new();

    for entry in entries {
        let dir = match entry {
            Ok(dir) => dir,
            Err(e) => {
                diagnostics.push(Diagnostic {
                    folder: None,
                    error: IndexError::ListEntry(e),
                });
                continue;
            }
        };
        if !dir.is_dir() {
            continue;
        }
        // Non-UTF-8 names are replaced lossily.
        let folder = match dir.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => continue,
        };
        candidates.push(Candidate { folder, dir });
    }

    candidates.sort_by(|a, b| a.dir.file_name().cmp(&b.dir.file_name()));
    (candidates, diagnostics)
}

/// Whether the candidate holds an entry-point file.
pub fn is_game_dir(candidate: &Candidate) -> IndexResult<bool> {
    match fs::metadata(candidate.dir.join(ENTRY_POINT_FILE)) {
        Ok(metadata) => Ok(metadata.is_file()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(IndexError::Inspect {
            folder: candidate.folder.clone(),
            source,
        }),
    }
}

fn locator(folder: &str) -> String {
    format!("{}/{}", GAMES_URL_PREFIX, folder)
}

/// Builds the index entry for one game directory from its (possibly absent) overrides.
pub fn game_entry(candidate: &Candidate, config: GameConfig) -> GameEntry {
    let folder = &candidate.folder;
    let path = locator(folder);

    let thumbnail = match config.thumbnail {
        Some(file) => Some(format!("{}/{}", path, file)),
        None if candidate.dir.join(THUMBNAIL_FILE).is_file() => {
            Some(format!("{}/{}", path, THUMBNAIL_FILE))
        }
        None => None,
    };

    GameEntry {
        name: config.title.unwrap_or_else(|| folder.clone()),
        path,
        folder: folder.clone(),
        description: config.description,
        category: config.category,
        thumbnail,
    }
}

/// Extracts metadata for one qualifying directory.
///
/// A broken `config.json` never drops the game: the entry falls back to
/// defaults and the problem comes back as a diagnostic. A single wrongly
/// typed key only loses that key.
pub fn extract_metadata(candidate: &Candidate) -> (GameEntry, Vec<Diagnostic>) {
    let folder = &candidate.folder;
    match read_game_config(&candidate.dir, folder) {
        Ok(Some(loaded)) => {
            let diagnostics = loaded
                .ignored
                .into_iter()
                .map(|error| Diagnostic::for_folder(folder, error))
                .collect();
            (game_entry(candidate, loaded.config), diagnostics)
        }
        Ok(None) => (game_entry(candidate, GameConfig::default()), Vec::new()),
        Err(error) => (
            game_entry(candidate, GameConfig::default()),
            vec![Diagnostic::for_folder(folder, error)],
        ),
    }
}

/// Scans the games root and returns the entries in folder order.
///
/// `on_game` is called for each game as it is found.
pub fn scan_games<F>(args: &Args, mut on_game: F) -> IndexResult<ScanReport>
where
    F: FnMut(&GameEntry),
{
    ensure_games_dir(&args.games_dir)?;

    let (candidates, diagnostics) = list_candidates(&args.games_dir)?;
    let mut report = ScanReport {
        index: GameIndex::new(),
        diagnostics,
    };

    for candidate in candidates {
        let qualifies = match is_game_dir(&candidate) {
            Ok(qualifies) => qualifies,
            Err(error) => {
                report.diagnostics.push(Diagnostic::for_folder(&candidate.folder, error));
                continue;
            }
        };
        if !qualifies {
            if args.verbose {
                print_info(&format!(
                    "Skipped {} (no {})",
                    candidate.folder, ENTRY_POINT_FILE
                ));
            }
            continue;
        }

        let (entry, diagnostics) = extract_metadata(&candidate);
        on_game(&entry);
        report.index.push(entry);
        report.diagnostics.extend(diagnostics);
    }

    Ok(report)
}
