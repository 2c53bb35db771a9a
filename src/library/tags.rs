use std::path::Path;

use lofty::prelude::{Accessor, TaggedFileExt};

use crate::error::TagReadError;

/// Album and artist exactly as found in the file, blanks already dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTags {
    pub album: Option<String>,
    pub artist: Option<String>,
}

/// Source of album/artist metadata for a file.
pub trait TagReader {
    fn read_tags(&self, path: &Path) -> Result<RawTags, TagReadError>;
}

/// Reads tags with lofty, preferring the file's primary tag type.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoftyTagReader;

fn non_blank(v: Option<std::borrow::Cow<'_, str>>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

impl TagReader for LoftyTagReader {
    fn read_tags(&self, path: &Path) -> Result<RawTags, TagReadError> {
        let tagged = lofty::read_from_path(path)?;

        let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) else {
            return Ok(RawTags::default());
        };

        Ok(RawTags {
            album: non_blank(tag.album()),
            artist: non_blank(tag.artist()),
        })
    }
}
