use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "panedeck.log";

/// Initialize the tracing/logging subsystem.
///
/// With `Some(path)` events are appended to that file, creating its parent
/// directory as needed. With `None`, or when the file cannot be opened,
/// events are discarded: the TUI owns stdout, so there is no console output.
/// Filtering comes from `RUST_LOG`, defaulting to `info`.
pub fn initialize(log_path: Option<&Path>) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false);

    match log_path.and_then(open_log_file) {
        Some(file) => {
            let _ = builder.with_writer(file).try_init();
        }
        None => {
            let _ = builder.with_writer(std::io::sink).try_init();
        }
    }
}

fn open_log_file(path: &Path) -> Option<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

/// Return the log file path inside the config directory.
pub fn log_file_path(config_dir: &Path) -> PathBuf {
    config_dir.join(LOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_log_file_path_in_config_dir() {
        let path = log_file_path(Path::new("/tmp/panedeck-conf"));
        assert_eq!(path, PathBuf::from("/tmp/panedeck-conf/panedeck.log"));
    }

    #[test]
    fn test_open_log_file_creates_parent_dir() {
        let tmp = TempDir::new().unwrap();
        let path = log_file_path(&tmp.path().join("nested"));

        assert!(open_log_file(&path).is_some());
        assert!(path.exists());
    }

    #[test]
    fn test_open_log_file_fails_under_a_file() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        assert!(open_log_file(&blocker.join("panedeck.log")).is_none());
    }

    #[test]
    fn test_initialize_twice_does_not_panic() {
        initialize(None);
        initialize(None);
    }
}
