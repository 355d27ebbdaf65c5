//! Integration tests for CLI commands
//!
//! Tests for init and config file handling.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create a command for the leafwalk CLI
fn leafwalk_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_leafwalk"))
}

const LISTING: &str = r#"["README.md", {"src": ["lib.rs"]}]"#;

mod init_command {
    use super::*;

    #[test]
    fn creates_new_config_file() {
        let temp_dir = TempDir::new().unwrap();

        leafwalk_cmd()
            .current_dir(temp_dir.path())
            .arg("init")
            .assert()
            .success()
            .stderr(predicate::str::contains("Created .leafwalk.jsonc"));

        // Verify config file was created
        let config_path = temp_dir.path().join(".leafwalk.jsonc");
        assert!(config_path.exists());

        let content = fs::read_to_string(config_path).unwrap();
        assert!(content.contains("format"));
        assert!(content.contains("fullPaths"));
        assert!(content.contains("separator"));
    }

    #[test]
    fn fails_when_config_exists_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(".leafwalk.jsonc");

        fs::write(&config_path, "{}").unwrap();

        leafwalk_cmd()
            .current_dir(temp_dir.path())
            .arg("init")
            .assert()
            .code(2)
            .stderr(predicate::str::contains("already exists"));

        assert_eq!(fs::read_to_string(config_path).unwrap(), "{}");
    }

    #[test]
    fn overwrites_config_with_force() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(".leafwalk.jsonc");

        fs::write(&config_path, r#"{"custom": "data"}"#).unwrap();

        leafwalk_cmd()
            .current_dir(temp_dir.path())
            .arg("init")
            .arg("--force")
            .assert()
            .success();

        let content = fs::read_to_string(config_path).unwrap();
        assert!(!content.contains("custom"));
        assert!(content.contains("fullPaths"));
    }

    #[test]
    fn created_config_is_usable() {
        let temp_dir = TempDir::new().unwrap();

        leafwalk_cmd()
            .current_dir(temp_dir.path())
            .arg("init")
            .assert()
            .success();

        leafwalk_cmd()
            .current_dir(temp_dir.path())
            .arg("walk")
            .write_stdin(LISTING)
            .assert()
            .success()
            .stdout("README.md\nlib.rs\n")
            .stderr(predicate::str::contains("Using config"));
    }

    #[cfg(unix)]
    #[test]
    fn refuses_to_follow_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target.txt");
        fs::write(&target, "keep me").unwrap();
        std::os::unix::fs::symlink(&target, temp_dir.path().join(".leafwalk.jsonc")).unwrap();

        leafwalk_cmd()
            .current_dir(temp_dir.path())
            .arg("init")
            .assert()
            .failure();

        assert_eq!(fs::read_to_string(target).unwrap(), "keep me");
    }
}

mod config_file_handling {
    use super::*;

    #[test]
    fn uses_defaults_when_not_found() {
        let temp_dir = TempDir::new().unwrap();

        leafwalk_cmd()
            .current_dir(temp_dir.path())
            .args(["--verbose", "walk"])
            .write_stdin(LISTING)
            .assert()
            .success()
            .stdout("README.md\nlib.rs\n")
            .stderr(predicate::str::contains("No config file found, using defaults"));
    }

    #[test]
    fn discovers_config_in_current_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(".leafwalk.json"),
            r#"{"fullPaths": true, "separator": "::"}"#,
        )
        .unwrap();

        leafwalk_cmd()
            .current_dir(temp_dir.path())
            .arg("walk")
            .write_stdin(LISTING)
            .assert()
            .success()
            .stdout("README.md\nsrc::lib.rs\n");
    }

    #[test]
    fn loads_config_from_flag() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("custom.jsonc");
        fs::write(&config_file, "{\n  // print paths, not bare names\n  \"fullPaths\": true\n}").unwrap();

        leafwalk_cmd()
            .arg("--config")
            .arg(&config_file)
            .arg("walk")
            .write_stdin(LISTING)
            .assert()
            .success()
            .stdout("README.md\nsrc/lib.rs\n");
    }

    #[test]
    fn flags_override_config() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(".leafwalk.jsonc"),
            r#"{"format": "json", "separator": "::"}"#,
        )
        .unwrap();

        leafwalk_cmd()
            .current_dir(temp_dir.path())
            .args(["walk", "--format", "text", "--full-paths", "--separator", "."])
            .write_stdin(LISTING)
            .assert()
            .success()
            .stdout("README.md\nsrc.lib.rs\n");
    }

    #[test]
    fn fails_on_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("invalid.json");
        fs::write(&config_file, "invalid json").unwrap();

        leafwalk_cmd()
            .arg("--config")
            .arg(&config_file)
            .arg("walk")
            .write_stdin(LISTING)
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Failed to parse config"));
    }

    #[test]
    fn fails_on_unknown_config_field() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(".leafwalk.jsonc"), r#"{"colour": "red"}"#).unwrap();

        leafwalk_cmd()
            .current_dir(temp_dir.path())
            .arg("walk")
            .write_stdin(LISTING)
            .assert()
            .code(2)
            .stderr(predicate::str::contains("unknown field"));
    }

    #[test]
    fn fails_on_missing_config_file() {
        leafwalk_cmd()
            .args(["--config", "does_not_exist.json", "walk"])
            .write_stdin(LISTING)
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Failed to read config"));
    }

    #[test]
    fn init_ignores_broken_config() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(".leafwalk.json"), "not json").unwrap();

        leafwalk_cmd()
            .current_dir(temp_dir.path())
            .arg("init")
            .assert()
            .success();
    }
}
