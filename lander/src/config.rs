//! Run configuration, stored as RON.
//!
//! Every field has a default, so a file only needs the settings it changes:
//!
//! ```ron
//! (
//!     body: "mars",
//!     scenario: EllipticalOrbit(periapsis: 8000000.0, eccentricity: 0.5),
//!     run: Some((dt: 10.0, t_max: 20000.0)),
//!     output: (print: Single(verlet), interval: 10),
//! )
//! ```
use std::path::Path;

use marslander_physics::{CentralBody, PhysicalParameters, RunSettings, Scenario, SimResult, MARS};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::cli::{CliArgs, Command};
use crate::error::ConfigError;
use crate::logging::{level_filter, DEFAULT_LEVEL};
use crate::report::PrintType;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Central body, by catalogue name.
    pub body: String,
    /// Lander mass in kg.
    pub lander_mass: f64,
    pub scenario: Scenario,
    /// Step and duration. The scenario's stock run when absent.
    pub run: Option<RunSettings>,
    pub output: OutputConfig,
    /// tracing filter, used when `RUST_LOG` is unset.
    pub log_level: String,
}

/// What gets printed to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub print: PrintType,
    /// Print every n-th sample. The final sample is always printed.
    pub interval: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            body: MARS.name.to_ascii_lowercase(),
            lander_mass: 1.0,
            scenario: Scenario::default(),
            run: None,
            output: OutputConfig::default(),
            log_level: DEFAULT_LEVEL.to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            print: PrintType::Comparison,
            interval: 1,
        }
    }
}

impl Config {
    /// Load a config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }

    /// Save as pretty-printed RON.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;
        std::fs::write(path, serialized).map_err(ConfigError::WriteError)
    }

    /// Checks that the physics crate does not cover.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output.interval == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        self.log_filter()?;
        Ok(())
    }

    /// The configured `log_level` as a tracing filter.
    pub fn log_filter(&self) -> Result<EnvFilter, ConfigError> {
        level_filter(&self.log_level).map_err(|source| ConfigError::BadLogLevel {
            level: self.log_level.clone(),
            source,
        })
    }

    /// Catalogue entry for `body`.
    pub fn central_body(&self) -> SimResult<CentralBody> {
        CentralBody::by_name(&self.body)
    }

    /// Masses for the configured body and lander.
    pub fn params(&self) -> SimResult<PhysicalParameters> {
        PhysicalParameters::around(&self.central_body()?, self.lander_mass)
    }

    /// The explicit run settings, or the scenario's stock ones.
    pub fn run_settings(&self) -> RunSettings {
        self.run.unwrap_or_else(|| self.scenario.kind().default_run())
    }

    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref level) = args.log_level {
            self.log_level = level.clone();
        }

        let Command::Simulate(sim) = &args.command else {
            return;
        };
        if let Some(kind) = sim.scenario {
            // a different recipe brings its own stock run with it
            if kind != self.scenario.kind() {
                self.scenario = kind.preset();
                self.run = None;
            }
        }
        if let Some(ref body) = sim.body {
            self.body = body.clone();
        }
        if let Some(mass) = sim.mass {
            self.lander_mass = mass;
        }
        if sim.dt.is_some() || sim.t_max.is_some() {
            let current = self.run_settings();
            self.run = Some(RunSettings::new(
                sim.dt.unwrap_or(current.dt),
                sim.t_max.unwrap_or(current.t_max),
            ));
        }
        if let Some(method) = sim.method {
            self.output.print = method.print_type();
        }
        if let Some(interval) = sim.interval {
            self.output.interval = interval;
        }
    }
}
