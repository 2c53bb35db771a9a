use std::sync::OnceLock;

use regex::Regex;

pub const UNKNOWN_ALBUM: &str = "Unknown Album";
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

const ILLEGAL_PATH_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

fn artist_separator() -> &'static Regex {
    static SEP: OnceLock<Regex> = OnceLock::new();
    SEP.get_or_init(|| Regex::new(", | / |/ |/").expect("separator pattern is valid"))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Capitalize every whitespace-delimited word and join them with single spaces.
pub fn format_name(name: &str) -> String {
    name.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strip characters that are not allowed in a path component.
pub fn clean_name(name: &str) -> String {
    name.chars().filter(|c| !ILLEGAL_PATH_CHARS.contains(c)).collect()
}

/// Turn a display name into a single directory name.
///
/// Slashes become underscores before the illegal characters are stripped.
pub fn path_segment(name: &str) -> String {
    let cleaned = clean_name(&name.replace('/', "_"));
    match cleaned.trim() {
        "" | "." | ".." => "_".to_string(),
        _ => cleaned,
    }
}

/// Split a raw artist tag into formatted artist names.
pub fn split_artists(raw: Option<&str>) -> Vec<String> {
    let artists: Vec<String> = raw
        .map(|raw| {
            artist_separator()
                .split(raw)
                .map(format_name)
                .filter(|a| !a.is_empty())
                .collect()
        })
        .unwrap_or_default();

    if artists.is_empty() {
        vec![UNKNOWN_ARTIST.to_string()]
    } else {
        artists
    }
}

/// Grouping key for an album tag.
pub fn album_key(raw: Option<&str>) -> String {
    let key = clean_name(&format_name(raw.unwrap_or(UNKNOWN_ALBUM)));
    let key = key.trim();
    if key.is_empty() {
        UNKNOWN_ALBUM.to_string()
    } else {
        key.to_string()
    }
}
