use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::TagsViewError;

pub const DEFAULT_TITLE: &str = "no-name";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TagsViewSettings {
    /// Title given to a tab whose route carries no `meta.title`.
    pub fallback_title: String,
    pub log_level: String, // "error", "warn", "info", "debug", "trace"
}

impl Default for TagsViewSettings {
    fn default() -> Self {
        Self {
            fallback_title: DEFAULT_TITLE.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl TagsViewSettings {
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                log::warn!("[Settings] Failed to parse {}: {}, returning defaults", path.display(), e);
                Self::default()
            }),
            Err(e) => {
                log::warn!("[Settings] Failed to read {}: {}, returning defaults", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), TagsViewError> {
        let tmp_path = path.with_extension("tmp");
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self).map_err(TagsViewError::Settings)?;

        // Write to tmp, then rename, so a crash never leaves a half-written file.
        fs::write(&tmp_path, json)?;
        fs::rename(tmp_path, path)?;

        Ok(())
    }
}
