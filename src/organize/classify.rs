use std::collections::BTreeSet;
use std::fmt;

use crate::library::Track;

/// Artist set algebra over one album group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistStats {
    /// Every artist credited anywhere on the album.
    pub all_artists: BTreeSet<String>,
    /// Artists credited on every track. Empty for an empty group.
    pub common_artists: BTreeSet<String>,
}

impl ArtistStats {
    pub fn of(tracks: &[Track]) -> Self {
        let mut all_artists = BTreeSet::new();
        let mut common: Option<BTreeSet<String>> = None;

        for track in tracks {
            let own: BTreeSet<String> = track.artists.iter().cloned().collect();
            all_artists.extend(own.iter().cloned());
            common = Some(match common {
                None => own,
                Some(acc) => acc.intersection(&own).cloned().collect(),
            });
        }

        Self {
            all_artists,
            common_artists: common.unwrap_or_default(),
        }
    }
}

/// Structural case of an album group, decided once per group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Case {
    /// No artist shared by every track and more than one artist overall.
    MultiArtistAlbum,
    /// Several tracks sharing at least one artist; `main_artist` is the
    /// first of the common artists in sort order.
    SingleArtistAlbum { main_artist: String },
    /// A group made of a single track.
    Standalone,
    /// Nothing above applies; the files land in the random folder.
    Unclassified,
}

impl Case {
    /// Classify a group. Checks run in a fixed order and the first match wins.
    pub fn classify(tracks: &[Track]) -> Self {
        let stats = ArtistStats::of(tracks);
        Self::from_stats(&stats, tracks.len())
    }

    pub fn from_stats(stats: &ArtistStats, track_count: usize) -> Self {
        if stats.common_artists.is_empty() && stats.all_artists.len() > 1 {
            return Self::MultiArtistAlbum;
        }
        if track_count > 1 {
            if let Some(main_artist) = stats.common_artists.first() {
                return Self::SingleArtistAlbum {
                    main_artist: main_artist.clone(),
                };
            }
        }
        if track_count == 1 {
            return Self::Standalone;
        }
        Self::Unclassified
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::MultiArtistAlbum => "Case 1",
            Self::SingleArtistAlbum { .. } => "Case 2",
            Self::Standalone => "Case 3",
            Self::Unclassified => "Case 4",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::MultiArtistAlbum => "multi-artist album",
            Self::SingleArtistAlbum { .. } => "single-artist album",
            Self::Standalone => "standalone track",
            Self::Unclassified => "unclassified",
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.description())
    }
}
