//! Environment variable overrides, kept in their own test binary with a single test
//! so no other test observes the modified process environment.

use std::{env, fs};

use tempfile::TempDir;

use superbalanced::config::Settings;
use superbalanced::ConfigError;

#[test]
fn given_env_vars_when_load_then_env_wins_over_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("superbalanced.toml");
    fs::write(&path, "show_tree = false\nshow_depths = true\n").unwrap();

    env::set_var("SUPERBALANCED_SHOW_TREE", "true");
    env::set_var("SUPERBALANCED_SHOW_DEPTHS", "false");

    let from_file = Settings::load_from(&path).expect("load settings");
    let global = Settings::load().expect("load settings");

    env::remove_var("SUPERBALANCED_SHOW_TREE");
    env::remove_var("SUPERBALANCED_SHOW_DEPTHS");

    assert!(from_file.show_tree);
    assert!(!from_file.show_depths);
    assert!(global.show_tree);
    assert!(!global.show_depths);

    // a value that is not a bool is an error, not silently ignored
    env::set_var("SUPERBALANCED_SHOW_TREE", "sometimes");
    let invalid = Settings::load_from(&path);
    env::remove_var("SUPERBALANCED_SHOW_TREE");

    let err = invalid.unwrap_err();
    assert!(matches!(err, ConfigError::Environment(_)), "{err:?}");
    assert!(err.to_string().contains("SUPERBALANCED_SHOW_TREE"));
}
