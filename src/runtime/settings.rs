use crate::config::Settings;
use crate::error::{Error, Result};

/// Load and validate settings. A missing config file is fine; one that does
/// not parse or validate is a configuration error.
pub fn load_settings() -> Result<Settings> {
    checked(Settings::load())
}

fn checked(loaded: std::result::Result<Settings, ::config::ConfigError>) -> Result<Settings> {
    let settings = loaded.map_err(|e| Error::Config(e.to_string()))?;
    settings.validate().map_err(Error::Config)?;
    tracing::debug!(?settings, "settings loaded");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn valid_settings_pass_through_with_their_paths() {
        let mut s = Settings::default();
        s.paths.source = Some(PathBuf::from("/downloads"));
        s.paths.destination = Some(PathBuf::from("/music"));

        let s = checked(Ok(s)).unwrap();
        assert_eq!(s.paths.source, Some(PathBuf::from("/downloads")));
        assert_eq!(s.paths.destination, Some(PathBuf::from("/music")));
    }

    #[test]
    fn invalid_layout_is_a_config_error() {
        let mut s = Settings::default();
        s.paths.source = Some(PathBuf::from("/downloads"));
        s.layout.singles_dir = "a/b".to_string();

        let err = checked(Ok(s)).unwrap_err();
        assert!(matches!(&err, Error::Config(msg) if msg.contains("singles_dir")));
    }

    #[test]
    fn unparseable_config_is_a_config_error() {
        let loaded = Err(::config::ConfigError::Message("invalid type for on_error".into()));
        let err = checked(loaded).unwrap_err();
        assert!(err.to_string().contains("on_error"));
    }
}
