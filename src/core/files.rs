//! File naming and writing helpers for report artifacts.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

/// Longest file name (in characters) produced by [`sanitize_filename`].
pub const MAX_FILENAME_LEN: usize = 100;

/// Make a league name safe to use as a file name.
///
/// Runs of reserved characters (`<>:"/\|?*`) and runs of whitespace each
/// collapse to one `_`; leading and trailing `.`/`_` are trimmed and the
/// result is capped at [`MAX_FILENAME_LEN`] characters.
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_reserved = false;
    let mut in_space = false;

    for c in name.chars() {
        if matches!(c, '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*') {
            if !in_reserved {
                out.push('_');
            }
            in_reserved = true;
            in_space = false;
        } else if c.is_whitespace() {
            if !in_space {
                out.push('_');
            }
            in_space = true;
            in_reserved = false;
        } else {
            out.push(c);
            in_reserved = false;
            in_space = false;
        }
    }

    out.trim_matches(|c| c == '.' || c == '_')
        .chars()
        .take(MAX_FILENAME_LEN)
        .collect()
}

/// `{league}_week{week}.json`, with the league name sanitized.
pub fn report_file_name(league_name: &str, week: u16) -> String {
    let safe = sanitize_filename(league_name);
    let safe = if safe.is_empty() { "league".to_string() } else { safe };
    format!("{safe}_week{week}.json")
}

/// Join an optional `a/b/` style prefix in front of a file name using `/` separators.
pub fn destination_path(prefix: Option<&str>, file_name: &str) -> String {
    match prefix.map(|p| p.trim_matches('/')).filter(|p| !p.is_empty()) {
        Some(p) => format!("{p}/{file_name}"),
        None => file_name.to_string(),
    }
}

/// Resolve a `/`-separated relative destination under `root`, refusing to climb out of it.
pub fn resolve_under(root: &Path, destination: &str) -> Option<PathBuf> {
    let mut path = root.to_path_buf();
    for part in destination.split('/').filter(|p| !p.is_empty() && *p != ".") {
        if part == ".." {
            return None;
        }
        path.push(part);
    }
    if path == root {
        None
    } else {
        Some(path)
    }
}

/// Write bytes to file, creating parent directories
pub fn write_bytes(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents)
}
