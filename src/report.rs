//! Human-readable console output for placement records.
//!
//! The organizer only produces structured `PlacementRecord`s; this module
//! decides how they look, including colors.

use std::io::Write;

use crossterm::style::{Color, Stylize, style};

use crate::organize::{Case, Outcome, PlacementRecord, RecordSink, Slot, Summary};

pub struct ConsoleReport<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> ConsoleReport<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    fn case_color(case: &Case, slot: &Slot) -> Option<Color> {
        let primary = matches!(slot, Slot::Album | Slot::ArtistAlbum { .. });
        match case {
            Case::MultiArtistAlbum if primary => Some(Color::Red),
            Case::MultiArtistAlbum => Some(Color::DarkRed),
            Case::SingleArtistAlbum { .. } if primary => Some(Color::Green),
            Case::SingleArtistAlbum { .. } => Some(Color::DarkGreen),
            Case::Standalone => Some(Color::Blue),
            Case::Unclassified => None,
        }
    }

    fn emit(&mut self, line: String, color: Option<Color>) {
        let res = match color {
            Some(c) if self.color => writeln!(self.out, "{}", style(line).with(c)),
            _ => writeln!(self.out, "{line}"),
        };
        if let Err(e) = res {
            tracing::debug!(error = %e, "console write failed");
        }
    }

    /// A source file left out because its tags could not be read.
    pub fn unreadable(&mut self, file_name: &str, reason: &str) {
        let line = format!("warning: could not read tags of \"{file_name}\": {reason}");
        self.emit(line, Some(Color::Yellow));
    }

    pub fn summary(&mut self, summary: &Summary, unreadable: usize) {
        self.emit(
            format!(
                "{} albums: {} copied, {} duplicates skipped, {} failed, {} unreadable files",
                summary.albums, summary.copied, summary.duplicates, summary.failed, unreadable
            ),
            None,
        );
        self.emit("Organization complete.".to_string(), Some(Color::Cyan));
    }
}

pub fn format_record(r: &PlacementRecord) -> String {
    let dest = r.destination.display();
    match &r.outcome {
        Outcome::Copied => format!(
            "{} copied \"{}\" as {} -> {dest}",
            r.case.label(),
            r.file_name,
            r.slot
        ),
        Outcome::Duplicate => format!(
            "{} skipped (duplicate) \"{}\" already in {dest}",
            r.case.label(),
            r.file_name
        ),
        Outcome::DuplicateInRoot => format!(
            "{} skipped (duplicate in destination root) \"{}\" not copied to {dest}",
            r.case.label(),
            r.file_name
        ),
        Outcome::Failed(reason) => format!(
            "{} failed \"{}\" from \"{}\" -> {dest}: {reason}",
            r.case.label(),
            r.file_name,
            r.album
        ),
    }
}

impl<W: Write> RecordSink for ConsoleReport<W> {
    fn record(&mut self, record: &PlacementRecord) {
        let color = match record.outcome {
            Outcome::Copied => Self::case_color(&record.case, &record.slot),
            Outcome::Duplicate | Outcome::DuplicateInRoot => Some(Color::DarkGrey),
            Outcome::Failed(_) => Some(Color::Magenta),
        };
        self.emit(format_record(record), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn record(outcome: Outcome) -> PlacementRecord {
        PlacementRecord {
            case: Case::MultiArtistAlbum,
            album: "Mix".into(),
            file_name: "a.mp3".into(),
            slot: Slot::Single { artist: "X".into() },
            destination: PathBuf::from("/music/Artist/X/zSingle"),
            outcome,
        }
    }

    fn render(records: &[PlacementRecord], color: bool) -> String {
        let mut buf = Vec::new();
        {
            let mut report = ConsoleReport::new(&mut buf, color);
            for r in records {
                report.record(r);
            }
        }
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn one_line_per_record_with_case_label() {
        let out = render(&[record(Outcome::Copied), record(Outcome::Duplicate)], false);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Case 1 copied \"a.mp3\" as single of \"X\" -> /music/Artist/X/zSingle",
                "Case 1 skipped (duplicate) \"a.mp3\" already in /music/Artist/X/zSingle",
            ]
        );
    }

    #[test]
    fn failures_carry_the_reason() {
        let line = format_record(&record(Outcome::Failed("disk full".into())));
        assert!(line.starts_with("Case 1 failed"));
        assert!(line.ends_with("disk full"));
    }

    #[test]
    fn no_escape_codes_without_color() {
        assert!(!render(&[record(Outcome::Copied)], false).contains('\u{1b}'));
        assert!(render(&[record(Outcome::Copied)], true).contains("copied \"a.mp3\""));
    }

    #[test]
    fn summary_ends_with_completion_notice() {
        let mut buf = Vec::new();
        ConsoleReport::new(&mut buf, false).summary(
            &Summary {
                albums: 2,
                copied: 3,
                duplicates: 1,
                failed: 0,
            },
            1,
        );
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("2 albums: 3 copied, 1 duplicates skipped, 0 failed, 1 unreadable files"));
        assert!(out.trim_end().ends_with("Organization complete."));
    }
}
