//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.placeboard/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::directory::Role;
use crate::core::nav::Page;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PlaceboardConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_role: Option<Role>,
    /// Page identifier to open on launch, e.g. "job-board".
    pub start_page: Option<String>,
    pub operator_name: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DirectoryConfig {
    /// Window for the "recent joins" figure on the analytics page.
    pub recent_window_days: Option<i64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_OPERATOR_NAME: &str = "Placement Cell";
pub const DEFAULT_RECENT_WINDOW_DAYS: i64 = 30;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub role: Role,
    pub start_page: Page,
    pub operator_name: String,
    pub recent_window_days: i64,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.placeboard/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".placeboard").join("config.toml"))
}

/// Load config from `~/.placeboard/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PlaceboardConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<PlaceboardConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(PlaceboardConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(PlaceboardConfig::default());
    }

    load_config_file(&path)
}

/// Read and parse one config file. Split out of [`load_config`] so tests
/// can point it at a scratch path.
pub fn load_config_file(path: &Path) -> Result<PlaceboardConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: PlaceboardConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Placeboard Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_role = "student"        # "student", "faculty", "outreach", "operations", "admin"
# start_page = "dashboard"        # "dashboard", "job-board", "user-directory", ...
# operator_name = "Placement Cell"

# [directory]
# recent_window_days = 30         # window for the "recent joins" analytics figure
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_role` is from the `--role` flag (None = not specified).
pub fn resolve(config: &PlaceboardConfig, cli_role: Option<Role>) -> ResolvedConfig {
    // Role: CLI → env → config → default
    let role = cli_role
        .or_else(|| {
            std::env::var("PLACEBOARD_ROLE")
                .ok()
                .and_then(|s| Role::parse(&s))
        })
        .or(config.general.default_role)
        .unwrap_or_default();

    // Start page: env → config → dashboard. Unknown identifiers fall back
    // to the dashboard out loud rather than silently.
    let start_page_id = std::env::var("PLACEBOARD_START_PAGE")
        .ok()
        .or_else(|| config.general.start_page.clone());
    let start_page = match start_page_id {
        Some(id) => match Page::parse(&id) {
            Some(page) => page,
            None => {
                warn!("Unknown start_page '{}', falling back to dashboard", id);
                Page::Dashboard
            }
        },
        None => Page::Dashboard,
    };

    ResolvedConfig {
        role,
        start_page,
        operator_name: config
            .general
            .operator_name
            .clone()
            .unwrap_or_else(|| DEFAULT_OPERATOR_NAME.to_string()),
        recent_window_days: config
            .directory
            .recent_window_days
            .unwrap_or(DEFAULT_RECENT_WINDOW_DAYS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_parses() {
        let config = PlaceboardConfig::default();
        assert!(config.general.default_role.is_none());
        assert!(config.general.start_page.is_none());
        assert!(config.directory.recent_window_days.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = PlaceboardConfig::default();
        let resolved = resolve(&config, None);
        assert_eq!(resolved.role, Role::Student);
        assert_eq!(resolved.start_page, Page::Dashboard);
        assert_eq!(resolved.operator_name, DEFAULT_OPERATOR_NAME);
        assert_eq!(resolved.recent_window_days, DEFAULT_RECENT_WINDOW_DAYS);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = PlaceboardConfig {
            general: GeneralConfig {
                default_role: Some(Role::Operations),
                start_page: Some("job-board".to_string()),
                operator_name: Some("TPO Desk".to_string()),
            },
            directory: DirectoryConfig {
                recent_window_days: Some(7),
            },
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.role, Role::Operations);
        assert_eq!(resolved.start_page, Page::JobBoard);
        assert_eq!(resolved.operator_name, "TPO Desk");
        assert_eq!(resolved.recent_window_days, 7);
    }

    #[test]
    fn test_resolve_cli_role_wins() {
        let config = PlaceboardConfig {
            general: GeneralConfig {
                default_role: Some(Role::Faculty),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some(Role::Admin));
        assert_eq!(resolved.role, Role::Admin);
    }

    #[test]
    fn test_resolve_unknown_start_page_falls_back_to_dashboard() {
        let config = PlaceboardConfig {
            general: GeneralConfig {
                start_page: Some("crystal-ball".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.start_page, Page::Dashboard);
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[general]
default_role = "outreach"
"#;
        let config: PlaceboardConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.default_role, Some(Role::Outreach));
        assert!(config.general.start_page.is_none());
        assert!(config.directory.recent_window_days.is_none());
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
default_role = "admin"
start_page = "user-directory"
operator_name = "Placement Cell"

[directory]
recent_window_days = 14
"#;
        let config: PlaceboardConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.default_role, Some(Role::Admin));
        assert_eq!(config.general.start_page.as_deref(), Some("user-directory"));
        assert_eq!(config.directory.recent_window_days, Some(14));
    }

    #[test]
    fn test_load_config_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut f = fs::File::create(&path).unwrap();
        writeln!(f, "[general]\ndefault_role = \"faculty\"").unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.general.default_role, Some(Role::Faculty));
    }

    #[test]
    fn test_load_config_file_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "general = \"not a table\"").unwrap();

        match load_config_file(&path) {
            Err(ConfigError::Parse(_)) => {}
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
