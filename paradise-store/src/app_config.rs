use std::env;
use std::path::Path;

use paradise_catalog::PricingConfig;
use paradise_core::SimulatedLatency;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Delays used in place of real backend calls
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SimulationConfig {
    pub auth_delay_ms: u64,
    pub booking_delay_ms: u64,
    pub backup_delay_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            auth_delay_ms: 1000,
            booking_delay_ms: 1000,
            backup_delay_ms: 2000,
        }
    }
}

impl SimulationConfig {
    pub fn auth_latency(&self) -> SimulatedLatency {
        SimulatedLatency::from_millis(self.auth_delay_ms)
    }

    pub fn booking_latency(&self) -> SimulatedLatency {
        SimulatedLatency::from_millis(self.booking_delay_ms)
    }

    pub fn backup_latency(&self) -> SimulatedLatency {
        SimulatedLatency::from_millis(self.backup_delay_ms)
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AuthConfig {
    pub min_password_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self { min_password_length: 6 }
    }
}

impl Config {
    /// Load from `./config` relative to the working directory
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Path::new("config"))
    }

    pub fn load_from(dir: &Path) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let source = |name: &str| dir.join(name).to_string_lossy().into_owned();

        let s = config::Config::builder()
            .add_source(config::File::with_name(&source("default")))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&source(&run_mode)).required(false))
            // Developer overrides, not checked in
            .add_source(config::File::with_name(&source("local")).required(false))
            // e.g. `PARADISE__PRICING__SERVICE_FEE=60000`
            .add_source(config::Environment::with_prefix("PARADISE").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
