use std::fs;
use std::path::{Path, PathBuf};

use crate::anim::sheet::{MAX_SPRING_DAMPING, MAX_SPRING_STIFFNESS};
use crate::model::config::AppConfig;

/// File name looked up in the working directory when no --config is given
pub const DEFAULT_CONFIG_FILE: &str = "moodgrid.toml";

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

/// Resolve which config file to use. An explicit path is always returned
/// (so a missing file is reported); otherwise `moodgrid.toml` in `cwd` is
/// used when it exists.
pub fn resolve_config_path(explicit: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let candidate = cwd.join(DEFAULT_CONFIG_FILE);
    candidate.is_file().then_some(candidate)
}

/// Read and validate a config file
pub fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let config = parse_config(&text).map_err(|e| match e {
        ParseFailure::Toml(source) => ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        },
        ParseFailure::Invalid(err) => err,
    })?;
    tracing::info!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Load the config from `explicit` or the working directory, falling back
/// to defaults when there is nothing to read.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<AppConfig, ConfigError> {
    match resolve_config_path(explicit, cwd) {
        Some(path) => read_config(&path),
        None => {
            tracing::debug!("no config file, using defaults");
            Ok(AppConfig::default())
        }
    }
}

enum ParseFailure {
    Toml(toml::de::Error),
    Invalid(ConfigError),
}

fn parse_config(text: &str) -> Result<AppConfig, ParseFailure> {
    let config: AppConfig = toml::from_str(text).map_err(ParseFailure::Toml)?;
    validate(&config).map_err(ParseFailure::Invalid)?;
    Ok(config)
}

fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    let anim = &config.animation;
    if anim.sheet_hide_ms == 0 {
        return Err(ConfigError::InvalidValue {
            key: "animation.sheet_hide_ms",
            reason: "must be greater than zero".into(),
        });
    }
    if anim.burst_ms == 0 {
        return Err(ConfigError::InvalidValue {
            key: "animation.burst_ms",
            reason: "must be greater than zero".into(),
        });
    }
    if !(anim.spring_stiffness.is_finite() && anim.spring_stiffness > 0.0) {
        return Err(ConfigError::InvalidValue {
            key: "animation.spring_stiffness",
            reason: format!("expected a positive number, got {}", anim.spring_stiffness),
        });
    }
    if !(anim.spring_damping.is_finite() && anim.spring_damping > 0.0) {
        return Err(ConfigError::InvalidValue {
            key: "animation.spring_damping",
            reason: format!("expected a positive number, got {}", anim.spring_damping),
        });
    }
    if anim.spring_stiffness >= MAX_SPRING_STIFFNESS {
        return Err(ConfigError::InvalidValue {
            key: "animation.spring_stiffness",
            reason: format!(
                "must be below {}, got {}",
                MAX_SPRING_STIFFNESS, anim.spring_stiffness
            ),
        });
    }
    if anim.spring_damping >= MAX_SPRING_DAMPING {
        return Err(ConfigError::InvalidValue {
            key: "animation.spring_damping",
            reason: format!(
                "must be below {}, got {}",
                MAX_SPRING_DAMPING, anim.spring_damping
            ),
        });
    }
    Ok(())
}
