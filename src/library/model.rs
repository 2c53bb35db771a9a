use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::PathBuf;

/// One source audio file and the artists credited on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub path: PathBuf,
    /// Base name of the source file, reused verbatim at every destination.
    /// Kept as an `OsString` so names that are not valid UTF-8 survive.
    pub file_name: OsString,
    /// Formatted artist names, in tag order. Never empty.
    pub artists: Vec<String>,
}

impl Track {
    /// Artists with repeats removed, first occurrence wins.
    pub fn distinct_artists(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::with_capacity(self.artists.len());
        for a in &self.artists {
            if !out.contains(&a.as_str()) {
                out.push(a);
            }
        }
        out
    }
}

/// Album key -> tracks in discovery order.
pub type AlbumGroups = BTreeMap<String, Vec<Track>>;

/// Result of a collector pass.
#[derive(Debug, Default)]
pub struct Collection {
    pub albums: AlbumGroups,
    /// Files whose tags could not be read, with the reason.
    pub skipped: Vec<(String, String)>,
}
