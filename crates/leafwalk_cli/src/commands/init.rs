//! Init command implementation

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use miette::{IntoDiagnostic, Result};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::config::WalkerConfig;

const HEADER: &str = "\
// leafwalk configuration (JSONC, comments allowed)
//   format:    \"text\" (one leaf per line) or \"json\" (an array)
//   fullPaths: prefix each leaf with the keys of its enclosing mappings
//   separator: joins those keys, must not be empty
";

/// Renders the default configuration as commented JSONC.
pub fn render_default_config() -> Result<String> {
    let body = serde_json::to_string_pretty(&WalkerConfig::default()).into_diagnostic()?;
    Ok(format!("{HEADER}{body}\n"))
}

/// Writes the default config into `dir`, returning its path.
///
/// The file is staged next to its destination and moved into place in one
/// step. Without `force` an existing entry (a symlink included) is left alone;
/// with `force` the entry itself is replaced, never the file a symlink points at.
pub fn run_init(dir: &Path, force: bool) -> Result<PathBuf> {
    let name = WalkerConfig::CONFIG_FILES[0];
    let config_path = dir.join(name);

    let mut staged = NamedTempFile::new_in(dir).into_diagnostic()?;
    staged
        .write_all(render_default_config()?.as_bytes())
        .into_diagnostic()?;

    if force {
        staged.persist(&config_path).into_diagnostic()?;
    } else {
        staged.persist_noclobber(&config_path).map_err(|e| {
            if e.error.kind() == ErrorKind::AlreadyExists {
                miette::miette!("{} already exists; pass --force to replace it", name)
            } else {
                miette::miette!("Failed to write {}: {}", name, e.error)
            }
        })?;
    }

    debug!("Wrote {}", config_path.display());
    info!("Created {}", name);
    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_rendered_config_round_trips_to_defaults() {
        let rendered = render_default_config().unwrap();

        assert!(rendered.starts_with("// leafwalk configuration"));
        assert!(rendered.contains(r#""fullPaths": false"#));
        assert_eq!(WalkerConfig::from_json(&rendered).unwrap(), WalkerConfig::default());
    }

    #[test]
    fn test_init_writes_into_dir() {
        let temp_dir = TempDir::new().unwrap();

        let path = run_init(temp_dir.path(), false).unwrap();

        assert_eq!(path, temp_dir.path().join(".leafwalk.jsonc"));
        assert_eq!(WalkerConfig::from_file(&path).unwrap(), WalkerConfig::default());
        // Only the config itself is left behind.
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_init_keeps_existing_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".leafwalk.jsonc");
        fs::write(&path, r#"{"separator": "::"}"#).unwrap();

        let err = run_init(temp_dir.path(), false).unwrap_err();

        assert!(err.to_string().contains("already exists"));
        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"separator": "::"}"#);
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_init_force_replaces_existing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".leafwalk.jsonc");
        fs::write(&path, r#"{"separator": "::"}"#).unwrap();

        run_init(temp_dir.path(), true).unwrap();

        assert_eq!(WalkerConfig::from_file(&path).unwrap(), WalkerConfig::default());
    }

    #[cfg(unix)]
    #[test]
    fn test_init_force_replaces_symlink_not_its_target() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target.txt");
        let link = temp_dir.path().join(".leafwalk.jsonc");
        fs::write(&target, "keep me").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        assert!(run_init(temp_dir.path(), false).is_err());
        run_init(temp_dir.path(), true).unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "keep me");
        assert!(!fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    }
}
