use super::files::{atomic_write, ensure_dir, read_file, ConfigLocations, PREFERENCES_FILE};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// User preferences stored in config.json
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub selected_theme: String,
}

/// Load preferences from the first location with a readable config file.
/// A file that does not parse is skipped in favour of the next location.
pub fn load_preferences(locations: &ConfigLocations) -> Preferences {
    for path in locations.candidates(PREFERENCES_FILE) {
        if !path.exists() {
            continue;
        }
        let parsed = read_file(&path).and_then(|content| {
            serde_json::from_str::<Preferences>(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))
        });
        match parsed {
            Ok(prefs) => return prefs,
            Err(e) => debug!("ignoring preferences: {:#}", e),
        }
    }
    Preferences::default()
}

/// Save preferences next to an existing local config file, otherwise into the
/// user config dir (created on demand). Returns the path written.
pub fn save_preferences(locations: &ConfigLocations, prefs: &Preferences) -> Result<PathBuf> {
    let local = locations.local.join(PREFERENCES_FILE);
    let path = if local.exists() {
        local
    } else {
        let dir = locations
            .user
            .as_ref()
            .context("No user config directory available")?;
        ensure_dir(dir)?;
        dir.join(PREFERENCES_FILE)
    };

    let json = serde_json::to_string_pretty(prefs)?;
    atomic_write(&path, &json)?;
    Ok(path)
}
