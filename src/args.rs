use std::path::{Path, PathBuf};
use clap::{Arg, ArgMatches, Command};
use crate::config::Args;

/// The games directory next to this crate, independent of the caller's working directory.
///
/// The crate location is fixed at build time, so a binary copied elsewhere
/// still points at the source tree it was built from.
pub fn default_games_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("games")
}

fn command() -> Command {
    Command::new("game-indexer")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Scan a directory of games and write game-index.json for the catalog page.")
        .arg(
            Arg::new("games-dir")
                .short('g')
                .long("games-dir")
                .value_parser(clap::value_parser!(PathBuf))
                .value_name("GAMES_DIR")
                .help("Directory containing one subdirectory per game (defaults to the games directory of the source tree this tool was built from)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(clap::ArgAction::SetTrue)
                .help("Enables verbose output"),
        )
        .arg(
            Arg::new("dry-run")
                .short('n')
                .long("dry-run")
                .action(clap::ArgAction::SetTrue)
                .help("Print the index to stdout instead of writing game-index.json"),
        )
}

fn args_from_matches(matches: &ArgMatches) -> Args {
    Args {
        games_dir: matches
            .get_one::<PathBuf>("games-dir")
            .cloned()
            .unwrap_or_else(default_games_dir),
        verbose: matches.get_flag("verbose"),
        dry_run: matches.get_flag("dry-run"),
    }
}

/// parse command line arguments
pub fn parse_args() -> Args {
    args_from_matches(&command().get_matches())
}
