use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::game::judge::JudgeWindows;
use crate::model::MAX_LANE_COUNT;

/// Mapping from lane index to an input identifier (KeyboardEvent.code
/// style; the input dispatcher decides what the strings mean).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub lanes: Vec<String>,
}

impl KeyBinding {
    /// Lane bound to the given input identifier, if any.
    pub fn lane_for(&self, code: &str) -> Option<usize> {
        self.lanes.iter().position(|c| c == code)
    }

    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }
}

impl Default for KeyBinding {
    fn default() -> Self {
        Self {
            lanes: ["KeyA", "KeyS", "KeyD", "KeyF"]
                .iter()
                .take(MAX_LANE_COUNT)
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Player configuration, supplied once at `GameCore` construction.
///
/// `judgment_timing` must satisfy `0 < perfect < great < good`; this is
/// an externally enforced precondition, not validated here. Unknown or
/// missing fields in persisted JSON fall back to defaults, so loading
/// is a schema-validated parse boundary rather than a hard failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub key_binding: KeyBinding,
    pub volume: f32,
    pub show_debug: bool,
    pub judgment_timing: JudgeWindows,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            key_binding: KeyBinding::default(),
            volume: 0.8,
            show_debug: false,
            judgment_timing: JudgeWindows::standard(),
        }
    }
}

impl GameConfig {
    /// Load configuration from disk, falling back to defaults on any
    /// failure.
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        if let Some(proj_dirs) = ProjectDirs::from("com", "lyricrails", "lyricrails") {
            Ok(proj_dirs.config_dir().join("config.json"))
        } else {
            Ok(PathBuf::from(".lyricrails-config.json"))
        }
    }
}
