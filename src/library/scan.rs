use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::config::LibrarySettings;
use crate::error::{Error, Result};

use super::model::{Collection, Track};
use super::names::{album_key, split_artists};
use super::tags::TagReader;

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(name: &OsStr) -> bool {
    name.as_encoded_bytes().starts_with(b".")
}

/// Group the audio files sitting directly in `dir` by album.
///
/// Files whose tags cannot be read are left out and listed in
/// `Collection::skipped`; only a failure to list `dir` itself is fatal.
pub fn collect(dir: &Path, settings: &LibrarySettings, reader: &dyn TagReader) -> Result<Collection> {
    let meta = fs::metadata(dir).map_err(|e| Error::io("reading source directory", dir, e))?;
    if !meta.is_dir() {
        return Err(Error::Config(format!("source {} is not a directory", dir.display())));
    }

    let mut collection = Collection::default();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(settings.follow_links)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            // Broken symlink or similar inside the directory: not worth the whole run.
            Err(e) if e.depth() > 0 => {
                tracing::warn!(error = %e, "skipping unreadable directory entry");
                continue;
            }
            Err(source) => {
                return Err(Error::Walk {
                    path: dir.to_path_buf(),
                    source,
                });
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let file_name = entry.file_name().to_os_string();
        if (!settings.include_hidden && is_hidden(&file_name)) || !is_audio_file(path, settings) {
            continue;
        }
        let shown = file_name.to_string_lossy().into_owned();

        let tags = match reader.read_tags(path) {
            Ok(tags) => tags,
            Err(e) => {
                tracing::warn!(file = %shown, error = %e, "could not read tags, skipping");
                collection.skipped.push((shown, e.to_string()));
                continue;
            }
        };

        let album = album_key(tags.album.as_deref());
        let artists = split_artists(tags.artist.as_deref());
        tracing::debug!(file = %shown, %album, ?artists, "collected");

        collection.albums.entry(album).or_default().push(Track {
            path: path.to_path_buf(),
            file_name,
            artists,
        });
    }

    Ok(collection)
}
