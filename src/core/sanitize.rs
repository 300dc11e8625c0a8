// src/core/sanitize.rs

/// Collapse every whitespace run (incl. newlines, NBSP) into one space, then trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Last non-empty `/` segment of a URL path, ignoring query and fragment.
/// `https://host/registrants/42?x=1` → `42`.
pub fn last_path_segment(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or("");
    path.trim_end_matches('/').rsplit('/').next().unwrap_or("")
}
