use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from moodgrid.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Rows the sheet is lifted by while a note is being typed
    #[serde(default)]
    pub keyboard_rows: u16,
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Fill overrides keyed by mood ("great", "good", ...)
    #[serde(default)]
    pub mood_colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            keyboard_rows: 0,
            colors: HashMap::new(),
            mood_colors: HashMap::new(),
        }
    }
}

/// Timing of the edit sheet and the cell burst, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    #[serde(default = "default_sheet_hide_ms")]
    pub sheet_hide_ms: u64,
    #[serde(default = "default_burst_ms")]
    pub burst_ms: u64,
    #[serde(default = "default_spring_stiffness")]
    pub spring_stiffness: f32,
    #[serde(default = "default_spring_damping")]
    pub spring_damping: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        AnimationConfig {
            sheet_hide_ms: default_sheet_hide_ms(),
            burst_ms: default_burst_ms(),
            spring_stiffness: default_spring_stiffness(),
            spring_damping: default_spring_damping(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_sheet_hide_ms() -> u64 {
    300
}

fn default_burst_ms() -> u64 {
    1000
}

fn default_spring_stiffness() -> f32 {
    170.0
}

fn default_spring_damping() -> f32 {
    26.0
}
