use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, error};

use crate::error::PatchError;
use crate::patcher::{patch_content, PatchRule};
use crate::walk::{collect_sources, display_relative, Walk};

#[derive(Debug, Clone)]
pub struct Options {
    pub root: PathBuf,
    pub extensions: Vec<String>,
    pub rule: PatchRule,
    /// Report what would change without writing anything.
    pub dry_run: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub scanned: usize,
    /// Files whose content changed. Not files scanned, not occurrences.
    pub modified: usize,
    pub occurrences: usize,
    /// Directories and files that couldn't be read or written.
    pub failed: usize,
    /// Relative paths of the modified files, in scan order.
    pub modified_paths: Vec<String>,
}

enum FileOutcome {
    Unchanged,
    Updated { occurrences: usize },
}

/// Patches every matching file under `options.root`.
///
/// `on_update` is called with the relative path of each file as soon as it has
/// been rewritten. Only a missing or non-directory root is fatal; everything
/// else is logged and counted in [`Summary::failed`].
pub fn run<F>(options: &Options, on_update: F) -> Result<Summary, PatchError>
where
    F: FnMut(&str),
{
    let root = options.root.as_path();
    if !root.exists() {
        return Err(PatchError::RootMissing(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(PatchError::NotADirectory(root.to_path_buf()));
    }

    let walk = collect_sources(root, &options.extensions);
    Ok(patch_walk(options, walk, on_update))
}

/// Patches the files of an already collected walk. Walk errors are logged
/// and counted before any file is touched.
fn patch_walk<F>(options: &Options, walk: Walk, mut on_update: F) -> Summary
where
    F: FnMut(&str),
{
    let root = options.root.as_path();
    for err in &walk.errors {
        error!(path = ?err.path, "Failed to read directory entry: {}", err);
    }

    let initial = Summary {
        failed: walk.errors.len(),
        ..Summary::default()
    };

    walk.files.iter().fold(initial, |mut summary, path| {
        summary.scanned += 1;
        let rel = display_relative(root, path);
        match patch_file(path, &options.rule, options.dry_run) {
            Ok(FileOutcome::Updated { occurrences }) => {
                on_update(&rel);
                summary.modified += 1;
                summary.occurrences += occurrences;
                summary.modified_paths.push(rel);
            }
            Ok(FileOutcome::Unchanged) => debug!("No changes needed in {}", rel),
            Err(e) => {
                error!("Skipping {}: {}", rel, e);
                summary.failed += 1;
            }
        }
        summary
    })
}

fn patch_file(path: &Path, rule: &PatchRule, dry_run: bool) -> Result<FileOutcome, PatchError> {
    let content = fs::read_to_string(path).map_err(|source| PatchError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let patched = patch_content(rule, &content);
    if !patched.is_changed() {
        return Ok(FileOutcome::Unchanged);
    }

    if !dry_run {
        fs::write(path, &patched.content).map_err(|source| PatchError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }

    Ok(FileOutcome::Updated {
        occurrences: patched.changed,
    })
}
