use std::path::{Component, Path, PathBuf};

/// Turn a target-path argument into an absolute path.
///
/// Shell wrappers sometimes pass `"~/app --rule-set x"` as one argument, so
/// surrounding whitespace and quotes are stripped and everything from the
/// first ` --` on is dropped before resolving against `cwd`.
pub fn sanitize_target_path(raw: &str, cwd: &Path) -> PathBuf {
    let mut cleaned = strip_quotes(raw);
    if let Some(idx) = cleaned.find(" --") {
        cleaned = strip_quotes(&cleaned[..idx]);
    }

    if cleaned.is_empty() {
        return normalize_lexically(cwd);
    }
    absolutize(Path::new(cleaned), cwd)
}

fn strip_quotes(s: &str) -> &str {
    s.trim().trim_matches('"').trim_matches('\'')
}

/// Join a relative path onto `cwd` and normalize the result.
pub fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize_lexically(path)
    } else {
        normalize_lexically(&cwd.join(path))
    }
}

/// Resolve `.` and `..` without touching the filesystem.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                if !matches!(
                    out.components().next_back(),
                    None | Some(Component::RootDir) | Some(Component::Prefix(_))
                ) {
                    out.pop();
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
