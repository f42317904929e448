use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Component, Path};

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static NON_SLUG_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9-]").unwrap());
static PATH_SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[/\\\x00]").unwrap());

/// Fallback archive name when nothing survives slugification
pub const DEFAULT_ARCHIVE_SLUG: &str = "miniapp";

/// Package / directory slug: "My Mini App" → "my-mini-app".
///
/// Only whitespace is touched; punctuation is kept as typed.
pub fn package_slug(name: &str) -> String {
    WHITESPACE_RUN
        .replace_all(&name.to_lowercase(), "-")
        .into_owned()
}

/// Slug safe for a download filename: [`package_slug`] with every character
/// outside `[a-z0-9-]` removed.
pub fn archive_slug(name: &str) -> String {
    let slug = NON_SLUG_CHARS
        .replace_all(&package_slug(name), "")
        .into_owned();
    if slug.is_empty() {
        DEFAULT_ARCHIVE_SLUG.to_string()
    } else {
        slug
    }
}

/// Directory name for a scaffold: [`package_slug`] reduced to a single
/// plain path component. Separators and leading dots are removed, so names
/// like `../x` or `/` can never point outside the parent directory.
pub fn dir_slug(name: &str) -> String {
    let package = package_slug(name);
    let slug = PATH_SEPARATORS.replace_all(&package, "");
    let slug = slug.trim_start_matches('.');

    let mut components = Path::new(slug).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => slug.to_string(),
        _ => DEFAULT_ARCHIVE_SLUG.to_string(),
    }
}

pub fn archive_file_name(name: &str) -> String {
    format!("{}.zip", archive_slug(name))
}
