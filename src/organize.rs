//! Classification of album groups and execution of the resulting copies.
//!
//! Each album group is classified once (`Case`), every track of the group
//! is expanded into its `Placement`s, and the `Placer` copies the file into
//! each destination that does not already hold a file of the same name.

mod classify;
mod copy;
mod placement;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub use classify::Case;
pub use copy::{Copier, FsCopier};
pub use placement::{Placement, Slot, plan_track};

use crate::config::{ErrorPolicy, LayoutSettings, OrganizeSettings};
use crate::error::{Error, Result};
use crate::library::{AlbumGroups, Track};

/// What happened to one placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Copied,
    /// A file with the same name already sits in the destination folder.
    Duplicate,
    /// A file with the same name sits in the destination root, so the track
    /// is not copied anywhere.
    DuplicateInRoot,
    /// Directory creation or copy failed and the run kept going.
    Failed(String),
}

/// One placement decision, handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementRecord {
    pub case: Case,
    pub album: String,
    /// Display form of the file name; lossy for non UTF-8 names.
    pub file_name: String,
    pub slot: Slot,
    /// Absolute destination folder.
    pub destination: PathBuf,
    pub outcome: Outcome,
}

/// Receives placement records as they are decided.
pub trait RecordSink {
    fn record(&mut self, record: &PlacementRecord);
}

impl RecordSink for Vec<PlacementRecord> {
    fn record(&mut self, record: &PlacementRecord) {
        self.push(record.clone());
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub albums: usize,
    pub copied: usize,
    pub duplicates: usize,
    pub failed: usize,
}

impl Summary {
    fn count(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Copied => self.copied += 1,
            Outcome::Duplicate | Outcome::DuplicateInRoot => self.duplicates += 1,
            Outcome::Failed(_) => self.failed += 1,
        }
    }
}

/// Copies album groups into the destination tree.
pub struct Placer<'a> {
    root: &'a Path,
    layout: &'a LayoutSettings,
    settings: &'a OrganizeSettings,
    copier: &'a dyn Copier,
}

impl<'a> Placer<'a> {
    pub fn new(
        root: &'a Path,
        layout: &'a LayoutSettings,
        settings: &'a OrganizeSettings,
        copier: &'a dyn Copier,
    ) -> Self {
        Self {
            root,
            layout,
            settings,
            copier,
        }
    }

    /// Place every album group. Stops at the first filesystem failure
    /// unless the error policy says to continue.
    pub fn run(&self, albums: &AlbumGroups, sink: &mut dyn RecordSink) -> Result<Summary> {
        fs::create_dir_all(self.root).map_err(|e| Error::io("creating directory", self.root, e))?;

        let mut summary = Summary::default();
        for (album, tracks) in albums {
            let case = Case::classify(tracks);
            tracing::info!(%album, tracks = tracks.len(), case = %case, "classified album");
            summary.albums += 1;

            for track in tracks {
                self.place_track(&case, album, track, sink, &mut summary)?;
            }
        }
        Ok(summary)
    }

    fn place_track(
        &self,
        case: &Case,
        album: &str,
        track: &Track,
        sink: &mut dyn RecordSink,
        summary: &mut Summary,
    ) -> Result<()> {
        let in_root = self.settings.skip_if_in_root && self.root.join(&track.file_name).exists();

        for placement in plan_track(case, album, track, self.layout) {
            let outcome = if in_root {
                Outcome::DuplicateInRoot
            } else {
                match self.execute(track, &placement) {
                    Ok(outcome) => outcome,
                    Err(e) if self.settings.on_error == ErrorPolicy::Continue => {
                        tracing::error!(file = %track.file_name.to_string_lossy(), error = %e, "placement failed");
                        Outcome::Failed(e.to_string())
                    }
                    Err(e) => return Err(e),
                }
            };

            summary.count(&outcome);
            sink.record(&PlacementRecord {
                case: case.clone(),
                album: album.to_string(),
                file_name: placement.file_name.to_string_lossy().into_owned(),
                slot: placement.slot,
                destination: self.root.join(placement.dir),
                outcome,
            });
        }
        Ok(())
    }

    fn execute(&self, track: &Track, placement: &Placement) -> Result<Outcome> {
        let dir = self.root.join(&placement.dir);
        fs::create_dir_all(&dir).map_err(|e| Error::io("creating directory", &dir, e))?;

        let dst = dir.join(&placement.file_name);
        if dst.exists() {
            return Ok(Outcome::Duplicate);
        }

        match self.copier.copy_file(&track.path, &dst) {
            Ok(()) => {
                tracing::debug!(src = %track.path.display(), dst = %dst.display(), "copied");
                Ok(Outcome::Copied)
            }
            // Lost a race against another writer; same as finding it there.
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(Outcome::Duplicate),
            Err(e) => Err(Error::io("copying to", dst, e)),
        }
    }
}
