//! Top-level netdyn configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{KuramotoConfig, NetworkConfig, PlotConfig};
use crate::constants::{
    MAX_SWEEP_POINTS, MAX_TIME_STEPS, PROJECT_CONFIG_FILE, SUPPORTED_ADJACENCY_MODES,
    SUPPORTED_FREQUENCY_DISTRIBUTIONS, SUPPORTED_PHASE_DISTRIBUTIONS,
};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Project config (`netdyn.toml` in the project root)
/// 2. User config (`~/.netdyn/config.toml`)
/// 3. Compiled defaults
///
/// Random seeding and plot styling live here rather than in process-global
/// state, so every experiment run is reproducible from its config alone.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NetdynConfig {
    pub network: NetworkConfig,
    pub kuramoto: KuramotoConfig,
    pub plot: PlotConfig,
}

impl NetdynConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        ::tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &NetdynConfig) -> Result<(), ConfigError> {
        let network = &config.network;
        let mode = network.effective_adjacency_mode();
        if !SUPPORTED_ADJACENCY_MODES.contains(&mode) {
            return Err(invalid(
                "network.adjacency_mode",
                format!("unsupported mode '{mode}', expected one of {SUPPORTED_ADJACENCY_MODES:?}"),
            ));
        }
        if network.effective_separator().is_empty() {
            return Err(invalid("network.separator", "must not be empty"));
        }
        if network.source_column.is_some() != network.target_column.is_some() {
            return Err(invalid(
                "network.source_column",
                "source_column and target_column must be set together",
            ));
        }

        let kuramoto = &config.kuramoto;
        if kuramoto.effective_oscillators() == 0 {
            return Err(invalid("kuramoto.oscillators", "must be greater than 0"));
        }
        let freq = kuramoto.effective_frequency_distribution();
        if !SUPPORTED_FREQUENCY_DISTRIBUTIONS.contains(&freq) {
            return Err(invalid(
                "kuramoto.frequency_distribution",
                format!("unsupported distribution '{freq}', choose 'normal' or 'uniform'"),
            ));
        }
        let phase = kuramoto.effective_phase_distribution();
        if !SUPPORTED_PHASE_DISTRIBUTIONS.contains(&phase) {
            return Err(invalid(
                "kuramoto.phase_distribution",
                format!("unsupported distribution '{phase}', only 'uniform' is implemented"),
            ));
        }
        check_positive("kuramoto.time_step", kuramoto.effective_time_step())?;
        check_positive("kuramoto.total_time", kuramoto.effective_total_time())?;
        check_grid(
            "kuramoto.time_step",
            kuramoto.effective_total_time(),
            kuramoto.effective_time_step(),
        )?;
        check_positive("kuramoto.run_time_step", kuramoto.effective_run_time_step())?;
        check_non_negative("kuramoto.run_total_time", kuramoto.effective_run_total_time())?;
        check_grid(
            "kuramoto.run_time_step",
            kuramoto.effective_run_total_time(),
            kuramoto.effective_run_time_step(),
        )?;
        check_non_negative(
            "kuramoto.run_frequency_std",
            kuramoto.effective_run_frequency_std(),
        )?;
        let (start, stop, step) = kuramoto.effective_sweep();
        check_positive("kuramoto.sweep_step", step)?;
        if !start.is_finite() || !stop.is_finite() {
            return Err(invalid("kuramoto.sweep_start", "sweep bounds must be finite"));
        }
        if (stop - start) / step > MAX_SWEEP_POINTS as f64 {
            return Err(invalid(
                "kuramoto.sweep_step",
                format!("sweep would exceed {MAX_SWEEP_POINTS} couplings"),
            ));
        }
        if kuramoto.effective_runs() == 0 {
            return Err(invalid("kuramoto.runs", "must be greater than 0"));
        }

        let (width, height) = config.plot.effective_size();
        if width == 0 || height == 0 {
            return Err(invalid("plot.width", "plot dimensions must be greater than 0"));
        }
        Ok(())
    }

    /// Returns the user config path: `~/.netdyn/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".netdyn").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut NetdynConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: NetdynConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        config.network.merge_from(&file_config.network);
        config.kuramoto.merge_from(&file_config.kuramoto);
        config.plot.merge_from(&file_config.plot);
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn invalid(field: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.into(),
    }
}

fn check_positive(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, "must be a finite value greater than 0"))
    }
}

fn check_non_negative(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, "must be a finite value of at least 0"))
    }
}

/// Rejects a time grid with more than `MAX_TIME_STEPS` points.
fn check_grid(field: &str, total_time: f64, dt: f64) -> Result<(), ConfigError> {
    if total_time / dt > MAX_TIME_STEPS as f64 {
        Err(invalid(
            field,
            format!("total time / time step exceeds {MAX_TIME_STEPS} steps"),
        ))
    } else {
        Ok(())
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
