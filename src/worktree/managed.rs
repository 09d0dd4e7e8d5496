//! Managed-root checks for worktree paths.
//!
//! A worktree is managed when it is the main worktree or lives under the
//! configured base directory. Only managed worktrees are ever classified or
//! removed. Any path that cannot be resolved is treated as unmanaged.

use std::path::{Component, Path, PathBuf};

/// Decide whether `path` is the main worktree or lies under `base_dir`.
pub fn is_managed(path: &Path, base_dir: &Path, main_path: &Path) -> bool {
    let Some(candidate) = resolve_path(path) else {
        return false;
    };

    if resolve_path(main_path).is_some_and(|main| main == candidate) {
        return true;
    }

    match resolve_path(base_dir) {
        Some(root) => is_within(&candidate, &root),
        None => false,
    }
}

/// Path of `path` relative to `base_dir`, with `/` separators.
///
/// Returns `None` when `path` is not strictly nested under `base_dir`.
pub fn relative_to_base(path: &Path, base_dir: &Path) -> Option<String> {
    let candidate = resolve_path(path)?;
    let root = resolve_path(base_dir)?;
    candidate
        .strip_prefix(&root)
        .and_then(|rest| rest.strip_prefix('/'))
        .filter(|rest| !rest.is_empty())
        .map(str::to_string)
}

/// Absolute, symlink-resolved form of `path` with `/` separators.
///
/// Existing paths are canonicalized. Paths that do not exist are normalized
/// lexically (so `..` cannot escape the comparison) and rebuilt on top of
/// their deepest existing, canonicalized ancestor.
pub(crate) fn resolve_path(path: &Path) -> Option<String> {
    let absolute = std::path::absolute(path).ok()?;
    if let Ok(canonical) = absolute.canonicalize() {
        return Some(to_slash(&canonical));
    }

    let normalized = normalize_lexically(&absolute);
    let mut existing = normalized.as_path();
    let mut missing = Vec::new();
    loop {
        if let Ok(canonical) = existing.canonicalize() {
            let resolved = missing
                .iter()
                .rev()
                .fold(canonical, |acc: PathBuf, part| acc.join(part));
            return Some(to_slash(&resolved));
        }
        missing.push(existing.file_name()?.to_os_string());
        existing = existing.parent()?;
    }
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

fn to_slash(path: &Path) -> String {
    let slashed = path.to_string_lossy().replace('\\', "/");
    let trimmed = slashed.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

fn is_within(candidate: &str, root: &str) -> bool {
    if candidate == root {
        return true;
    }
    let prefix = if root.ends_with('/') {
        root.to_string()
    } else {
        format!("{}/", root)
    };
    candidate.starts_with(&prefix)
}
