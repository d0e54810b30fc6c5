use super::files::{read_file, ConfigLocations, THEMES_FILE};
use crate::domain::{parse_color, Theme};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

const BUILTIN_THEMES: &str = include_str!("../assets/themes.json");

/// On-disk form of a theme, colors as strings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeSpec {
    pub name: String,
    pub base: String,
    pub highlight: String,
    pub text: String,
    pub comment: String,
    pub special: String,
    pub error: String,
    pub accent: String,
}

impl From<ThemeSpec> for Theme {
    fn from(spec: ThemeSpec) -> Self {
        Theme {
            base: parse_color(&spec.base),
            highlight: parse_color(&spec.highlight),
            text: parse_color(&spec.text),
            comment: parse_color(&spec.comment),
            special: parse_color(&spec.special),
            error: parse_color(&spec.error),
            accent: parse_color(&spec.accent),
            name: spec.name,
        }
    }
}

/// Parse a JSON array of theme definitions
pub fn parse_themes(content: &str) -> Result<Vec<Theme>> {
    let specs: Vec<ThemeSpec> =
        serde_json::from_str(content).context("Invalid theme definitions")?;
    Ok(specs.into_iter().map(Theme::from).collect())
}

fn load_theme_file(path: &Path) -> Result<Vec<Theme>> {
    let content = read_file(path)?;
    if content.is_empty() {
        return Ok(Vec::new());
    }
    parse_themes(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Collect themes from the working directory, the user config dir and the
/// built-in set, in that order. Names are deduplicated, first one wins.
/// Never returns an empty list.
pub fn load_themes(locations: &ConfigLocations) -> Vec<Theme> {
    let mut sources: Vec<Vec<Theme>> = Vec::new();

    for path in locations.candidates(THEMES_FILE) {
        match load_theme_file(&path) {
            Ok(themes) => sources.push(themes),
            Err(e) => debug!("skipping theme file {}: {:#}", path.display(), e),
        }
    }

    match parse_themes(BUILTIN_THEMES) {
        Ok(themes) => sources.push(themes),
        Err(e) => debug!("built-in themes unavailable: {:#}", e),
    }

    let themes = merge_themes(sources);
    if themes.is_empty() {
        vec![Theme::builtin_default()]
    } else {
        themes
    }
}

/// Flatten theme sources keeping the first theme seen for each name
pub fn merge_themes(sources: Vec<Vec<Theme>>) -> Vec<Theme> {
    let mut seen = HashSet::new();
    sources
        .into_iter()
        .flatten()
        .filter(|theme| seen.insert(theme.name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;
    use std::fs;
    use tempfile::tempdir;

    fn theme_json(name: &str, base: &str) -> String {
        format!(
            r##"[{{"name":"{}","base":"{}","highlight":"#ffffff","text":"#eeeeee","comment":"#888888","special":"#00ff00","error":"#ff0000","accent":"#0000ff"}}]"##,
            name, base
        )
    }

    #[test]
    fn test_builtin_themes_parse() {
        let themes = parse_themes(BUILTIN_THEMES).unwrap();
        assert!(!themes.is_empty());
        assert!(themes.iter().all(|t| t.base != Color::Reset));
    }

    #[test]
    fn test_parse_themes_bad_color_is_reset() {
        let themes = parse_themes(&theme_json("Odd", "chartreuse-ish")).unwrap();
        assert_eq!(themes[0].base, Color::Reset);
        assert_eq!(themes[0].error, Color::Rgb(0xff, 0, 0));
    }

    #[test]
    fn test_parse_themes_rejects_garbage() {
        assert!(parse_themes("{not json").is_err());
    }

    #[test]
    fn test_merge_first_seen_wins() {
        let a = parse_themes(&theme_json("Shared", "#111111")).unwrap();
        let b = parse_themes(&theme_json("Shared", "#222222")).unwrap();
        let c = parse_themes(&theme_json("Other", "#333333")).unwrap();

        let merged = merge_themes(vec![a, b, c]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].name, "Shared");
        assert_eq!(merged[0].base, Color::Rgb(0x11, 0x11, 0x11));
        assert_eq!(merged[1].name, "Other");
    }

    #[test]
    fn test_load_themes_local_overrides_builtin() {
        let local = tempdir().unwrap();
        fs::write(local.path().join(THEMES_FILE), theme_json("Nord", "#010101")).unwrap();

        let themes = load_themes(&ConfigLocations::new(local.path(), None));
        assert_eq!(themes[0].name, "Nord");
        assert_eq!(themes[0].base, Color::Rgb(1, 1, 1));
        assert_eq!(themes.iter().filter(|t| t.name == "Nord").count(), 1);
    }

    #[test]
    fn test_load_themes_order_local_then_user() {
        let local = tempdir().unwrap();
        let user = tempdir().unwrap();
        fs::write(local.path().join(THEMES_FILE), theme_json("Mine", "#010101")).unwrap();
        fs::write(user.path().join(THEMES_FILE), theme_json("Mine", "#020202")).unwrap();
        fs::write(user.path().join("unused.json"), "ignored").unwrap();

        let themes = load_themes(&ConfigLocations::new(local.path(), Some(user.path().to_path_buf())));
        let mine: Vec<&Theme> = themes.iter().filter(|t| t.name == "Mine").collect();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].base, Color::Rgb(1, 1, 1));
    }

    #[test]
    fn test_load_themes_skips_broken_file() {
        let local = tempdir().unwrap();
        fs::write(local.path().join(THEMES_FILE), "[{ broken").unwrap();

        let themes = load_themes(&ConfigLocations::new(local.path(), None));
        let builtin = parse_themes(BUILTIN_THEMES).unwrap();
        assert_eq!(themes, builtin);
    }
}
