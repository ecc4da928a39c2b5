// wordsprint-cli: shared utilities for CLI tools.

pub mod countdown;
pub mod logging;

use std::path::{Path, PathBuf};
use std::process;

use serde_json::Value;
use tracing::{debug, warn};

use wordsprint_core::normalize::normalize;
use wordsprint_engine::catalog::{Catalog, ListSource};
use wordsprint_engine::variants::VariantMapping;

/// Word-list directory name under the home directory.
const HOME_LISTS_DIR: &str = ".wordsprint/lists";

/// Environment variable naming the word-list directory.
const LISTS_PATH_ENV: &str = "WORDSPRINT_LISTS_PATH";

/// Extension of word-list files.
const LIST_EXTENSION: &str = "json";

/// Errors locating or reading word-list files.
#[derive(Debug, thiserror::Error)]
pub enum ListsError {
    #[error("could not find a word-list directory in any of the search paths:\n{}", format_paths(.0))]
    NotFound(Vec<PathBuf>),

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Search for the word-list directory and build the catalog from it.
///
/// Search order:
/// 1. `lists_dir` argument (if provided)
/// 2. `WORDSPRINT_LISTS_PATH` environment variable
/// 3. `~/.wordsprint/lists`
/// 4. `./lists` in the current working directory
///
/// The first directory that exists is used. Every `*.json` file in it is one
/// list, named after its file stem. A file that is not valid JSON makes only
/// that list unavailable.
pub fn load_catalog(lists_dir: Option<&str>) -> Result<Catalog, ListsError> {
    let search_paths = build_search_paths(lists_dir);
    let dir = search_paths
        .iter()
        .find(|p| p.is_dir())
        .ok_or_else(|| ListsError::NotFound(search_paths.clone()))?;

    debug!(dir = %dir.display(), "loading word lists");
    let sources = read_list_sources(dir)?;
    Ok(Catalog::initialize(sources))
}

/// Read every list file in `dir`, sorted by file name.
pub fn read_list_sources(dir: &Path) -> Result<Vec<ListSource>, ListsError> {
    let read_err = |source| ListsError::Read {
        path: dir.to_path_buf(),
        source,
    };
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .map_err(read_err)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == LIST_EXTENSION))
        .collect();
    files.sort();

    let mut sources = Vec::with_capacity(files.len());
    for path in files {
        let Some(id) = path.file_stem().and_then(|s| s.to_str()).map(str::to_string) else {
            warn!(path = %path.display(), "skipping list file with a non UTF-8 name");
            continue;
        };
        let contents = std::fs::read_to_string(&path).map_err(|source| ListsError::Read {
            path: path.clone(),
            source,
        })?;
        sources.push(parse_list_file(id, &path, &contents));
    }
    Ok(sources)
}

fn parse_list_file(id: String, path: &Path, contents: &str) -> ListSource {
    match serde_json::from_str::<Value>(contents) {
        Ok(document) => ListSource::from_document(id, document),
        Err(e) => {
            warn!(list = %id, path = %path.display(), error = %e, "list file is not valid JSON");
            // kept so the catalog reports the id as unavailable
            ListSource::new(id, Value::Null)
        }
    }
}

/// Build the list of directories to search for word lists.
fn build_search_paths(lists_dir: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = lists_dir {
        paths.push(PathBuf::from(p));
    }

    if let Ok(env_path) = std::env::var(LISTS_PATH_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(HOME_LISTS_DIR));
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join("lists"));
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// `(variant, base)` pairs to show for `words`, sorted by base then variant.
///
/// Each word may be any accepted spelling; all spellings of its base are
/// listed. With no words, the whole mapping is listed. Words that do not
/// resolve are returned separately, as given.
pub fn select_variants<'m, S: AsRef<str>>(
    mapping: &'m VariantMapping,
    words: &[S],
) -> (Vec<(&'m str, &'m str)>, Vec<String>) {
    let mut unknown = Vec::new();
    let mut pairs: Vec<(&str, &str)> = if words.is_empty() {
        mapping.iter().collect()
    } else {
        let mut selected = Vec::new();
        for word in words {
            let word = word.as_ref();
            let Some(folded) = normalize(word) else {
                continue;
            };
            match mapping.resolve(&folded) {
                Some(base) => {
                    selected.extend(mapping.variants_of(base).into_iter().map(|v| (v, base)));
                }
                None => unknown.push(word.to_string()),
            }
        }
        selected
    };
    pairs.sort_unstable_by(|a, b| (a.1, a.0).cmp(&(b.1, b.0)));
    pairs.dedup();
    (pairs, unknown)
}

/// Take a `--long=VALUE`, `--long VALUE` or `-s VALUE` option out of `args`.
///
/// Returns `(value, remaining_args)`. The last occurrence wins.
pub fn take_option(args: &[String], long: &str, short: &str) -> (Option<String>, Vec<String>) {
    let long_eq = format!("{long}=");
    let mut value = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix(&long_eq) {
            value = Some(val.to_string());
        } else if arg == long || arg == short {
            if i + 1 < args.len() {
                value = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                fatal(&format!("{arg} requires a value"));
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Parse `-l/--lists DIR`.
pub fn parse_lists_dir(args: &[String]) -> (Option<String>, Vec<String>) {
    take_option(args, "--lists", "-l")
}

/// Parse `-L/--list ID`.
pub fn parse_list_id(args: &[String]) -> (Option<String>, Vec<String>) {
    take_option(args, "--list", "-L")
}

/// Count `-v`, `-vv`, ... and `--verbose` flags and remove them from `args`.
pub fn take_verbosity(args: &[String]) -> (u8, Vec<String>) {
    let mut level = 0u8;
    let mut remaining = Vec::new();
    for arg in args {
        if arg == "--verbose" {
            level = level.saturating_add(1);
        } else if arg.len() > 1 && arg.starts_with('-') && arg[1..].chars().all(|c| c == 'v') {
            level = level.saturating_add((arg.len() - 1) as u8);
        } else {
            remaining.push(arg.clone());
        }
    }
    (level, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
