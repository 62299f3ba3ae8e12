//! Source file discovery.
//!
//! Uses the `ignore` walker with every filter switched off, so hidden and
//! git-ignored files are scanned too. Symlinks are not followed. Unreadable
//! entries don't stop the walk; they are collected as [`WalkError`]s for the
//! caller to report.

use std::fmt;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::debug;

#[derive(Debug, Default)]
pub struct Walk {
    /// Matching files, sorted.
    pub files: Vec<PathBuf>,
    pub errors: Vec<WalkError>,
}

/// A directory or entry that couldn't be read.
#[derive(Debug)]
pub struct WalkError {
    pub path: Option<PathBuf>,
    pub message: String,
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<ignore::Error> for WalkError {
    fn from(err: ignore::Error) -> Self {
        Self {
            path: error_path(&err),
            message: err.to_string(),
        }
    }
}

/// Every file under `root` whose extension is in `extensions`.
pub fn collect_sources(root: &Path, extensions: &[String]) -> Walk {
    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false).follow_links(false);

    let mut walk = Walk::default();
    for result in builder.build() {
        match result {
            Ok(entry) => {
                if !has_extension(entry.path(), extensions) {
                    continue;
                }
                if entry.path_is_symlink() {
                    debug!("Skipping symlink {}", entry.path().display());
                } else if entry.file_type().map_or(false, |ft| ft.is_file()) {
                    walk.files.push(entry.into_path());
                }
            }
            Err(err) => walk.errors.push(WalkError::from(err)),
        }
    }

    walk.files.sort();
    walk
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| extensions.iter().any(|wanted| wanted == ext))
}

fn error_path(err: &ignore::Error) -> Option<PathBuf> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.clone()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        ignore::Error::Loop { child, .. } => Some(child.clone()),
        ignore::Error::Partial(errs) => errs.iter().find_map(error_path),
        _ => None,
    }
}

/// `target` relative to `base` with forward slashes, for log lines.
pub fn display_relative(base: &Path, target: &Path) -> String {
    let rel = target.strip_prefix(base).unwrap_or(target);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn make_tree(root: &Path, files: &[&str]) {
        for f in files {
            let p = root.join(f);
            if let Some(parent) = p.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&p, "").unwrap();
        }
    }

    fn exts() -> Vec<String> {
        vec!["jsx".to_string(), "tsx".to_string()]
    }

    #[test]
    fn finds_nested_sources_once_each() {
        let tmp = tempfile::tempdir().unwrap();
        make_tree(
            tmp.path(),
            &[
                "app/page.tsx",
                "app/cities/toronto/page.tsx",
                "components/Hero.jsx",
                "components/Hero.js",
                "styles/site.css",
                "README.md",
            ],
        );

        let walk = collect_sources(tmp.path(), &exts());
        let rel: Vec<String> = walk
            .files
            .iter()
            .map(|p| display_relative(tmp.path(), p))
            .collect();

        assert_eq!(
            rel,
            vec![
                "app/cities/toronto/page.tsx",
                "app/page.tsx",
                "components/Hero.jsx",
            ]
        );
        assert!(walk.errors.is_empty());
    }

    #[test]
    fn hidden_and_gitignored_files_are_scanned() {
        let tmp = tempfile::tempdir().unwrap();
        make_tree(tmp.path(), &[".drafts/Guide.tsx", "generated/Out.tsx"]);
        fs::write(tmp.path().join(".gitignore"), "generated/\n").unwrap();

        let walk = collect_sources(tmp.path(), &exts());

        assert_eq!(walk.files.len(), 2);
    }

    #[test]
    fn walk_error_keeps_the_failing_path() {
        let denied = || std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ignore::Error::WithDepth {
            depth: 2,
            err: Box::new(ignore::Error::WithPath {
                path: PathBuf::from("site/locked"),
                err: Box::new(ignore::Error::Io(denied())),
            }),
        };

        let walk_err = WalkError::from(err);

        assert_eq!(walk_err.path, Some(PathBuf::from("site/locked")));
        assert!(walk_err.to_string().contains("denied"));
    }

    #[test]
    fn partial_error_uses_first_known_path() {
        let err = ignore::Error::Partial(vec![
            ignore::Error::Io(std::io::Error::new(std::io::ErrorKind::Other, "boom")),
            ignore::Error::WithPath {
                path: PathBuf::from("a/b"),
                err: Box::new(ignore::Error::Io(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "boom",
                ))),
            },
        ]);

        assert_eq!(error_path(&err), Some(PathBuf::from("a/b")));
        assert_eq!(
            error_path(&ignore::Error::Io(std::io::Error::new(std::io::ErrorKind::Other, "x"))),
            None
        );
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_sources_are_not_followed() {
        let tmp = tempfile::tempdir().unwrap();
        make_tree(tmp.path(), &["real/Hero.tsx"]);
        std::os::unix::fs::symlink(tmp.path().join("real/Hero.tsx"), tmp.path().join("Alias.tsx"))
            .unwrap();
        std::os::unix::fs::symlink(tmp.path().join("real"), tmp.path().join("linked")).unwrap();

        let walk = collect_sources(tmp.path(), &exts());
        let rel: Vec<String> = walk
            .files
            .iter()
            .map(|p| display_relative(tmp.path(), p))
            .collect();

        assert_eq!(rel, vec!["real/Hero.tsx"]);
        assert!(walk.errors.is_empty());
    }

    #[test]
    fn extension_match_is_exact() {
        assert!(has_extension(Path::new("a/b.tsx"), &exts()));
        assert!(!has_extension(Path::new("a/b.tsx.bak"), &exts()));
        assert!(!has_extension(Path::new("a/tsx"), &exts()));
    }
}
