use std::path::PathBuf;

use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/tagfold/config.toml` or `~/.config/tagfold/config.toml`
///
/// Precedence (highest wins):
/// 1) Command line positional paths (source, destination)
/// 2) Environment variables (prefix `TAGFOLD__`, `__` as nested separator)
/// 3) Config file (if present)
/// 4) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub paths: PathSettings,
    pub library: LibrarySettings,
    pub layout: LayoutSettings,
    pub organize: OrganizeSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    /// Flat directory holding the downloaded audio files.
    pub source: Option<PathBuf>,
    /// Root of the organized tree. Created when missing.
    pub destination: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to include hidden files (dotfiles).
    pub include_hidden: bool,
    /// Whether symlinked files in the source directory are followed.
    pub follow_links: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["mp3".into()],
            include_hidden: true,
            follow_links: true,
        }
    }
}

/// Folder names used to build the destination tree.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Multi-artist albums: `<albums_dir>/<album>/`.
    pub albums_dir: String,
    /// Per-artist catalogs: `<artists_dir>/<artist>/...`.
    pub artists_dir: String,
    /// Tracks credited to a single artist: `<artists_dir>/<artist>/<singles_dir>/`.
    pub singles_dir: String,
    /// Tracks shared with other artists: `<artists_dir>/<artist>/<collaborations_dir>/`.
    pub collaborations_dir: String,
    /// Anything that could not be classified.
    pub random_dir: String,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            albums_dir: "Albums".to_string(),
            artists_dir: "Artist".to_string(),
            singles_dir: "zSingle".to_string(),
            collaborations_dir: "zCollaboration".to_string(),
            random_dir: "Random".to_string(),
        }
    }
}

impl LayoutSettings {
    fn named(&self) -> [(&'static str, &str); 5] {
        [
            ("albums_dir", self.albums_dir.as_str()),
            ("artists_dir", self.artists_dir.as_str()),
            ("singles_dir", self.singles_dir.as_str()),
            ("collaborations_dir", self.collaborations_dir.as_str()),
            ("random_dir", self.random_dir.as_str()),
        ]
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        for (key, value) in self.named() {
            if value.trim().is_empty() {
                return Err(format!("layout.{key} must not be empty"));
            }
            if value.contains(['/', '\\']) || value == "." || value == ".." {
                return Err(format!("layout.{key} must be a single folder name, got {value:?}"));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OrganizeSettings {
    /// Skip every copy of a track whose file name already sits directly in
    /// the destination root.
    pub skip_if_in_root: bool,
    /// What to do when creating a folder or copying a file fails.
    pub on_error: ErrorPolicy,
}

impl Default for OrganizeSettings {
    fn default() -> Self {
        Self {
            skip_if_in_root: true,
            on_error: ErrorPolicy::Abort,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPolicy {
    /// Stop the run at the first filesystem failure.
    #[serde(alias = "stop", alias = "fail")]
    Abort,
    /// Record the failure and carry on with the next placement.
    #[serde(alias = "skip", alias = "keep-going", alias = "keep_going")]
    Continue,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Color placement lines by case.
    pub color: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self { color: true }
    }
}
