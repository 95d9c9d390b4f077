//! Input path resolution
//!
//! An input argument names a file, a directory (every file below it) or a
//! glob in its last component (`site/*.html`, `site/**`). Globs follow
//! gitignore syntax; a glob without `**` only matches direct children.

use anyhow::{bail, Context, Result};
use ignore::overrides::OverrideBuilder;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// A file to process and its path relative to the input root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    pub path: PathBuf,
    pub relative: PathBuf,
}

pub fn collect_inputs(input: &str) -> Result<Vec<InputFile>> {
    let path = Path::new(input);

    if path.is_file() {
        let relative = path
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| path.to_path_buf());
        return Ok(vec![InputFile {
            path: path.to_path_buf(),
            relative,
        }]);
    }

    let files = if path.is_dir() {
        walk(path, None)?
    } else if let Some(pattern) = glob_component(path) {
        let root = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        if !root.is_dir() {
            bail!("no such directory: {}", root.display());
        }
        walk(root, Some(pattern))?
    } else {
        bail!("no such file or directory: {}", input);
    };

    if files.is_empty() {
        bail!("no files match {}", input);
    }
    Ok(files)
}

/// The last path component, if it contains glob syntax
fn glob_component(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    name.contains(['*', '?', '[', '{']).then_some(name)
}

fn walk(root: &Path, pattern: Option<&str>) -> Result<Vec<InputFile>> {
    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false);

    if let Some(pattern) = pattern {
        let overrides = OverrideBuilder::new(root)
            .add(pattern)
            .and_then(|b| b.build())
            .with_context(|| format!("invalid glob: {}", pattern))?;
        builder.overrides(overrides);
        if !pattern.contains("**") {
            builder.max_depth(Some(1));
        }
    }

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry.context("failed to walk input directory")?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let path = entry.path().to_path_buf();
        let relative = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
        files.push(InputFile { path, relative });
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}
