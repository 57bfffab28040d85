use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

// ============================================================================
// Top-level config
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub history: HistoryConfig,
    pub fusion: FusionWeights,
}

impl EngineConfig {
    /// Load config from a TOML file, falling back to defaults for missing fields.
    /// After loading, env var overrides are applied and the result is validated.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
        let mut config: EngineConfig =
            toml::from_str(&content).with_context(|| "Failed to parse TOML config")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Try to load from path; if the file is missing or invalid, return defaults with env overrides.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::info!("Config file not found or invalid ({}), using defaults", e);
                let mut cfg = Self::default();
                cfg.apply_env_overrides();
                cfg
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.fusion.validate()?;
        if self.history.capacity == 0 {
            bail!("history.capacity must be at least 1");
        }
        if !(self.history.slope_threshold.is_finite() && self.history.slope_threshold >= 0.0) {
            bail!("history.slope_threshold must be a non-negative number");
        }
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("SENTIO_HISTORY_CAPACITY") {
            if let Ok(n) = v.parse::<usize>() {
                self.history.capacity = n.max(1);
            }
        }
        if let Ok(v) = std::env::var("SENTIO_TREND_WINDOW_SECS") {
            if let Ok(n) = v.parse() {
                self.history.trend_window_secs = n;
            }
        }
    }
}

// ============================================================================
// Sub-configs
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Ring buffer size; oldest entries are evicted first.
    pub capacity: usize,
    /// How many recent results feed the contextual stage.
    pub context_window: usize,
    /// Default window for trend queries. Default: 24h.
    pub trend_window_secs: u64,
    /// Regression slope beyond which an axis counts as moving.
    pub slope_threshold: f32,
}

impl HistoryConfig {
    pub fn trend_window(&self) -> Duration {
        Duration::from_secs(self.trend_window_secs)
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: 50,
            context_window: 5,
            trend_window_secs: 24 * 60 * 60,
            slope_threshold: 0.05,
        }
    }
}

/// Per-stage weights for the fusion step. Must sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct FusionWeights {
    pub lexical: f32,
    pub pattern: f32,
    pub contextual: f32,
}

impl Default for FusionWeights {
    fn default() -> Self {
        Self {
            lexical: 0.5,
            pattern: 0.3,
            contextual: 0.2,
        }
    }
}

impl FusionWeights {
    pub fn validate(&self) -> Result<()> {
        let weights = [self.lexical, self.pattern, self.contextual];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            bail!("fusion weights must be non-negative, got {:?}", self);
        }
        let sum: f32 = weights.iter().sum();
        if (sum - 1.0).abs() > 1e-3 {
            bail!("fusion weights must sum to 1.0, got {:.4}", sum);
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
