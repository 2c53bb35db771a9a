use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::PathBuf;

use crate::config::LayoutSettings;
use crate::library::{Track, path_segment};

use super::classify::Case;

/// Which kind of folder a placement targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    /// `Albums/<album>/`
    Album,
    /// `Artist/<artist>/<album>/`
    ArtistAlbum { artist: String },
    /// `Artist/<artist>/zSingle/`
    Single { artist: String },
    /// `Artist/<artist>/zCollaboration/`
    Collaboration { artist: String },
    /// `Random/`
    Random,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Album => write!(f, "album"),
            Self::ArtistAlbum { artist } => write!(f, "album of \"{artist}\""),
            Self::Single { artist } => write!(f, "single of \"{artist}\""),
            Self::Collaboration { artist } => write!(f, "collaboration of \"{artist}\""),
            Self::Random => write!(f, "random"),
        }
    }
}

/// One copy of a track to make, relative to the destination root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub slot: Slot,
    pub dir: PathBuf,
    pub file_name: OsString,
}

struct Planner<'a> {
    layout: &'a LayoutSettings,
    album: &'a str,
    file_name: &'a OsStr,
}

impl Planner<'_> {
    fn artist_dir(&self, artist: &str) -> PathBuf {
        PathBuf::from(&self.layout.artists_dir).join(path_segment(artist))
    }

    fn place(&self, slot: Slot) -> Placement {
        let dir = match &slot {
            Slot::Album => PathBuf::from(&self.layout.albums_dir).join(path_segment(self.album)),
            Slot::ArtistAlbum { artist } => self.artist_dir(artist).join(path_segment(self.album)),
            Slot::Single { artist } => self.artist_dir(artist).join(&self.layout.singles_dir),
            Slot::Collaboration { artist } => {
                self.artist_dir(artist).join(&self.layout.collaborations_dir)
            }
            Slot::Random => PathBuf::from(&self.layout.random_dir),
        };
        Placement {
            slot,
            dir,
            file_name: self.file_name.to_os_string(),
        }
    }

    /// A lone artist gets a single; several artists each get a collaboration.
    fn artist_fanout(&self, track: &Track, mut out: Vec<Placement>) -> Vec<Placement> {
        match track.distinct_artists().as_slice() {
            [only] => out.push(self.place(Slot::Single {
                artist: only.to_string(),
            })),
            many => out.extend(many.iter().map(|a| {
                self.place(Slot::Collaboration {
                    artist: a.to_string(),
                })
            })),
        }
        out
    }
}

/// Every destination `track` must be copied to, given its album's case.
pub fn plan_track(case: &Case, album: &str, track: &Track, layout: &LayoutSettings) -> Vec<Placement> {
    let planner = Planner {
        layout,
        album,
        file_name: &track.file_name,
    };

    match case {
        Case::MultiArtistAlbum => planner.artist_fanout(track, vec![planner.place(Slot::Album)]),
        Case::SingleArtistAlbum { main_artist } => {
            let mut out = vec![planner.place(Slot::ArtistAlbum {
                artist: main_artist.clone(),
            })];
            out.extend(
                track
                    .distinct_artists()
                    .into_iter()
                    .filter(|a| *a != main_artist.as_str())
                    .map(|a| {
                        planner.place(Slot::Collaboration {
                            artist: a.to_string(),
                        })
                    }),
            );
            out
        }
        Case::Standalone => planner.artist_fanout(track, Vec::new()),
        Case::Unclassified => vec![planner.place(Slot::Random)],
    }
}
