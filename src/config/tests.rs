use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_tagfold_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("TAGFOLD_CONFIG_PATH", "/tmp/tagfold-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        PathBuf::from("/tmp/tagfold-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    assert_eq!(
        default_config_path().unwrap(),
        PathBuf::from("/tmp/xdg-config-home")
            .join("tagfold")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    assert_eq!(
        default_config_path().unwrap(),
        PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("tagfold")
            .join("config.toml")
    );
}

#[test]
fn defaults_match_the_classic_layout() {
    let s = Settings::default();
    assert_eq!(s.layout.albums_dir, "Albums");
    assert_eq!(s.layout.artists_dir, "Artist");
    assert_eq!(s.layout.singles_dir, "zSingle");
    assert_eq!(s.layout.collaborations_dir, "zCollaboration");
    assert_eq!(s.layout.random_dir, "Random");
    assert_eq!(s.library.extensions, vec!["mp3".to_string()]);
    assert!(s.library.include_hidden);
    assert!(s.organize.skip_if_in_root);
    assert_eq!(s.organize.on_error, ErrorPolicy::Abort);
    assert!(s.paths.source.is_none());
    assert!(s.validate().is_ok());
}

#[test]
fn settings_load_from_config_file_and_parse_policy_aliases() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[paths]
source = "/downloads/telegram"
destination = "/music/sorted"

[library]
extensions = ["mp3", "flac"]
include_hidden = false

[layout]
albums_dir = "Compilations"
random_dir = "Misc"

[organize]
skip_if_in_root = false
on_error = "keep-going"

[output]
color = false
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("TAGFOLD_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("TAGFOLD__OUTPUT__COLOR");

    let s = Settings::load().unwrap();
    assert_eq!(s.paths.source, Some(PathBuf::from("/downloads/telegram")));
    assert_eq!(s.paths.destination, Some(PathBuf::from("/music/sorted")));
    assert_eq!(s.library.extensions, vec!["mp3".to_string(), "flac".to_string()]);
    assert!(!s.library.include_hidden);
    assert!(s.library.follow_links);
    assert_eq!(s.layout.albums_dir, "Compilations");
    assert_eq!(s.layout.artists_dir, "Artist");
    assert_eq!(s.layout.random_dir, "Misc");
    assert!(!s.organize.skip_if_in_root);
    assert_eq!(s.organize.on_error, ErrorPolicy::Continue);
    assert!(!s.output.color);
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[output]
color = true
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("TAGFOLD_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("TAGFOLD__OUTPUT__COLOR", "false");

    let s = Settings::load().unwrap();
    assert!(!s.output.color);
}

#[test]
fn cli_paths_override_only_what_was_given() {
    let mut s = Settings::default();
    s.paths.source = Some(PathBuf::from("/from/config"));
    s.paths.destination = Some(PathBuf::from("/dest/config"));

    let s = s.with_cli_paths(Some(PathBuf::from("/from/cli")), None);
    assert_eq!(s.paths.source, Some(PathBuf::from("/from/cli")));
    assert_eq!(s.paths.destination, Some(PathBuf::from("/dest/config")));
}

#[test]
fn validate_rejects_nested_or_empty_folder_names() {
    let mut s = Settings::default();
    s.layout.singles_dir = "a/b".to_string();
    assert!(s.validate().unwrap_err().contains("singles_dir"));

    let mut s = Settings::default();
    s.layout.random_dir = "  ".to_string();
    assert!(s.validate().unwrap_err().contains("random_dir"));

    let mut s = Settings::default();
    s.library.extensions = vec![".".to_string()];
    assert!(s.validate().is_err());
}
