use std::path::Path;

use serde::{Deserialize, Serialize};

use super::catalog::{BackgroundName, Language, ThemeName};
use crate::Error;

/// Presentation settings for a rendered snippet.
///
/// Settings are plain values: callers build or load them, adjust fields, and pass them to
/// [super::render_snippet()]. Nothing is kept between calls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SnippetSettings {
    pub theme: ThemeName,
    pub background: BackgroundName,
    /// Space around the code window, in pixels.
    pub padding: u32,
    pub show_line_numbers: bool,
    pub show_window_controls: bool,
    pub language: Language,
    pub font_family: String,
    /// Code font size, in pixels.
    pub font_size: u32,
}

impl Default for SnippetSettings {
    fn default() -> SnippetSettings {
        SnippetSettings {
            theme: ThemeName::Amoled,
            background: BackgroundName::Purple,
            padding: 32,
            show_line_numbers: true,
            show_window_controls: true,
            language: Language::Javascript,
            font_family: String::from("JetBrains Mono"),
            font_size: 14,
        }
    }
}

impl SnippetSettings {
    /// Parses settings from JSON. Missing keys take their default values, unknown keys and
    /// unknown catalog names are errors.
    pub fn from_json(json: &str) -> Result<SnippetSettings, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<SnippetSettings, Error> {
        let json = std::fs::read_to_string(path)?;
        let settings = SnippetSettings::from_json(&json)?;
        tracing::debug!(path = %path.display(), ?settings, "loaded snippet settings");
        Ok(settings)
    }
}
