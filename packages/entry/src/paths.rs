//! Path Normalization
//!
//! Forward-slash path arithmetic shared by page enumeration and component
//! resolution. Glob patterns only understand forward slashes, so every path
//! that participates in matching goes through here first. All functions are
//! pure string manipulation; nothing touches the filesystem.

use std::path::Path;

/// Rewrite platform separators to `/`.
pub fn to_forward_slashes<P: AsRef<Path>>(path: P) -> String {
    path.as_ref().to_string_lossy().replace('\\', "/")
}

/// Final component of a path.
pub fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Directory portion of a forward-slash path, without the trailing
/// separator. Empty when the path has a single component.
pub fn parent(path: &str) -> &str {
    match path.rfind('/') {
        Some(i) => &path[..i],
        None => "",
    }
}

/// File extension of the final component, dot included. A leading dot
/// (hidden file) does not count as an extension boundary.
pub fn extension(path: &str) -> &str {
    let base = file_name(path);
    match base.rfind('.') {
        Some(i) if i > 0 => &base[i..],
        _ => "",
    }
}

/// Strip the final component's extension.
pub fn strip_ext(path: &str) -> &str {
    &path[..path.len() - extension(path).len()]
}

/// Replace the final component's extension with `new_ext` (dot included).
/// A component without an extension has `new_ext` appended.
pub fn replace_ext(path: &str, new_ext: &str) -> String {
    format!("{}{}", strip_ext(path), new_ext)
}

/// Prefix `./` unless the path already starts with a dot.
pub fn ensure_dot_prefix(path: &str) -> String {
    if path.starts_with('.') {
        path.to_string()
    } else {
        format!("./{}", path)
    }
}

/// Collapse `.` and interior `..` segments. A rooted path keeps its leading
/// slash; `..` segments that climb past the root are dropped.
pub fn normalize(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&prev) if prev != ".." => {
                    segments.pop();
                }
                _ if rooted => {}
                _ => segments.push(".."),
            },
            _ => segments.push(segment),
        }
    }
    let joined = segments.join("/");
    if rooted {
        format!("/{}", joined)
    } else {
        joined
    }
}

/// Join two forward-slash paths and normalize the result.
pub fn join(base: &str, path: &str) -> String {
    if base.is_empty() {
        return normalize(path);
    }
    normalize(&format!("{}/{}", base, path))
}

/// Express `target` relative to `base`. Both are normalized forward-slash
/// paths; `..` segments already present in the inputs are compared
/// literally.
pub fn relative_to(base: &str, target: &str) -> String {
    let base_segments: Vec<&str> = segments(base);
    let target_segments: Vec<&str> = segments(target);
    let common = base_segments
        .iter()
        .zip(&target_segments)
        .take_while(|(a, b)| a == b)
        .count();
    let mut out: Vec<&str> = vec![".."; base_segments.len() - common];
    out.extend(&target_segments[common..]);
    out.join("/")
}

/// Directory of the root entry file resolved against the context directory,
/// in forward-slash form.
pub fn app_root(context: &Path, entry: &str) -> String {
    let full = join(&to_forward_slashes(context), entry);
    match full.rfind('/') {
        Some(0) => "/".to_string(),
        Some(i) => full[..i].to_string(),
        None => String::new(),
    }
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/')
        .filter(|s| !s.is_empty() && *s != ".")
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_includes_the_dot() {
        assert_eq!(extension("pages/home/index.js"), ".js");
        assert_eq!(extension("app.ts"), ".ts");
    }

    #[test]
    fn extension_is_empty_without_a_dot() {
        assert_eq!(extension("widgets/button"), "");
        assert_eq!(extension("../shared/icon"), "");
    }

    #[test]
    fn extension_ignores_hidden_file_dots() {
        assert_eq!(extension(".gitignore"), "");
        assert_eq!(extension("dir/.env"), "");
    }

    #[test]
    fn replace_ext_appends_when_missing() {
        assert_eq!(replace_ext("widgets/button", ".js"), "widgets/button.js");
    }

    #[test]
    fn replace_ext_swaps_the_last_extension() {
        assert_eq!(replace_ext("pages/home/index.js", ".json"), "pages/home/index.json");
        assert_eq!(replace_ext("a/b.tar.gz", ".js"), "a/b.tar.js");
    }

    #[test]
    fn strip_ext_keeps_dotted_prefixes() {
        assert_eq!(strip_ext("../shared/icon.js"), "../shared/icon");
        assert_eq!(strip_ext("./comps/foo.js"), "./comps/foo");
    }

    #[test]
    fn normalize_collapses_dot_segments() {
        assert_eq!(normalize("./a/./b"), "a/b");
        assert_eq!(normalize("a/b/../c"), "a/c");
        assert_eq!(normalize("/proj/src/./app.js"), "/proj/src/app.js");
    }

    #[test]
    fn join_treats_empty_base_as_nothing() {
        assert_eq!(join("", "pages"), "pages");
        assert_eq!(join("/proj/src", "pages"), "/proj/src/pages");
    }

    #[test]
    fn relative_to_walks_up_with_dotdot() {
        assert_eq!(relative_to("/proj/src", "/proj/src/widgets/button.js"), "widgets/button.js");
        assert_eq!(relative_to("/proj/src", "/proj/shared/icon.js"), "../shared/icon.js");
        assert_eq!(relative_to(".", "pages/home/index.js"), "pages/home/index.js");
    }

    #[test]
    fn app_root_is_the_entry_directory() {
        assert_eq!(app_root(Path::new("/proj/src"), "./app.js"), "/proj/src");
        assert_eq!(app_root(Path::new("/proj"), "src/app.ts"), "/proj/src");
        assert_eq!(app_root(Path::new("."), "./app.js"), "");
    }
}
