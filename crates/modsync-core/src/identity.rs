//! Package identity from raw file names.
//!
//! A file name like `[Forge]jei-1.20.1.jar` carries an optional bracketed tag,
//! a package name (`jei`) and a version. Local and remote entries are joined on
//! the package name of their normalized form.

/// Returns the package name: everything before the first `-`, or the whole
/// string if there is none.
pub fn package_name(filename: &str) -> &str {
    match filename.find('-') {
        Some(idx) => &filename[..idx],
        None => filename,
    }
}

/// Strips a bracketed tag prefix: everything after the first `]`, or the
/// unchanged name if it has none.
pub fn normalized_name(filename: &str) -> &str {
    match filename.find(']') {
        Some(idx) => &filename[idx + 1..],
        None => filename,
    }
}

/// Returns the text strictly between the first `start` and the first `end`
/// that follows it. Empty if either marker is missing.
pub fn substring_between<'a>(text: &'a str, start: &str, end: &str) -> &'a str {
    let Some(s) = text.find(start) else {
        return "";
    };
    let rest = &text[s + start.len()..];
    match rest.find(end) {
        Some(e) => &rest[..e],
        None => "",
    }
}
