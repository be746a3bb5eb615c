use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Editor configuration
///
/// The crate is embedded into a host process, so configuration is loaded
/// programmatically rather than from a CLI.
///
/// Loading order (priority from highest to lowest):
/// 1. Environment variables (prefixed with APP_)
/// 2. Configuration file (editor.toml)
/// 3. Default values
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct EditorConfig {
    pub limits: LimitsConfig,
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum amount of requested charts per panel (default: 20)
    pub max_charts: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Whether scenario-switch events are emitted (default: true)
    pub enabled: bool,
}

impl EditorConfig {
    /// Load configuration with environment variable and file support
    pub fn load(path: Option<&str>) -> Result<Self, anyhow::Error> {
        let config_path = path.map(str::to_string).or_else(Self::find_config_file);
        let mut config = if let Some(config_path) = config_path {
            Self::from_toml(&config_path)?
        } else {
            tracing::debug!("Configuration file not found, using defaults");
            EditorConfig::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - APP_MAX_CHARTS: Maximum requested charts per panel (default: 20)
    /// - APP_TELEMETRY_ENABLED: Enable/disable telemetry events (true/false)
    fn apply_env_overrides(&mut self) {
        if let Ok(max_charts) = std::env::var("APP_MAX_CHARTS")
            && let Ok(val) = max_charts.parse()
        {
            self.limits.max_charts = val;
            tracing::info!("Override limits.max_charts from env: {}", self.limits.max_charts);
        }

        if let Ok(enabled) = std::env::var("APP_TELEMETRY_ENABLED")
            && let Ok(val) = enabled.parse()
        {
            self.telemetry.enabled = val;
            tracing::info!("Override telemetry.enabled from env: {}", self.telemetry.enabled);
        }
    }

    /// Validate configuration
    fn validate(&self) -> Result<(), anyhow::Error> {
        if self.limits.max_charts < 1 {
            anyhow::bail!("limits.max_charts must be >= 1");
        }
        Ok(())
    }

    fn find_config_file() -> Option<String> {
        let possible_paths =
            ["conf/editor.toml", "editor.toml", "./conf/editor.toml", "./editor.toml"];

        for path in &possible_paths {
            if Path::new(path).exists() {
                return Some(path.to_string());
            }
        }
        None
    }

    fn from_toml(path: &str) -> Result<Self, anyhow::Error> {
        let content = fs::read_to_string(path)?;
        let config: EditorConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self { max_charts: 20 }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
