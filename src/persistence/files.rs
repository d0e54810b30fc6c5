use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::warn;

/// Directory name used under the per-user config dir
pub const APP_NAME: &str = "todo-app";
/// Theme definitions file name
pub const THEMES_FILE: &str = "themes.json";
/// Preference file name
pub const PREFERENCES_FILE: &str = "config.json";

/// Where theme and preference files are looked up, in precedence order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocations {
    /// Working directory, checked first
    pub local: PathBuf,
    /// Per-user config directory (`~/.config/todo-app` on Linux)
    pub user: Option<PathBuf>,
}

impl ConfigLocations {
    pub fn new(local: impl Into<PathBuf>, user: Option<PathBuf>) -> Self {
        Self {
            local: local.into(),
            user,
        }
    }

    /// Resolve the current directory and the platform config dir
    pub fn discover() -> Self {
        let local = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::new(local, dirs::config_dir().map(|dir| dir.join(APP_NAME)))
    }

    /// Candidate paths for `file_name`, local first
    pub fn candidates(&self, file_name: &str) -> Vec<PathBuf> {
        let mut paths = vec![self.local.join(file_name)];
        if let Some(user) = &self.user {
            paths.push(user.join(file_name));
        }
        paths
    }

    /// Log directory inside the user config dir
    pub fn log_dir(&self) -> Option<PathBuf> {
        self.user.as_ref().map(|dir| dir.join("logs"))
    }
}

/// Write `content` to a temp file next to `path`, then rename it over `path`
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut temp_file = NamedTempFile::new_in(&dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}

/// Read file content, or an empty string when the file does not exist.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD; only real I/O
/// failures are errors.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(String::new());
    }
    let bytes = fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    match String::from_utf8(bytes) {
        Ok(content) => Ok(content),
        Err(e) => {
            warn!(path = %path.display(), "file is not valid UTF-8, replacing bad bytes");
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

/// Absolute form of `path` for display. Falls back to joining the working
/// directory when the file does not exist yet.
pub fn absolute_path(path: &Path) -> PathBuf {
    fs::canonicalize(path)
        .or_else(|_| env::current_dir().map(|cwd| cwd.join(path)))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Create `dir` (and parents) if missing
pub fn ensure_dir<P: AsRef<Path>>(dir: P) -> Result<()> {
    let dir = dir.as_ref();
    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(())
}
