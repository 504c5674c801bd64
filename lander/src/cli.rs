//! Command-line argument parsing.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use marslander_physics::{Method, ScenarioKind};

use crate::report::PrintType;

/// Lander trajectory simulator.
///
/// CLI values override settings loaded from the `--config` file.
#[derive(Parser, Debug)]
#[command(name = "marslander", version, about = "Lander trajectories around a central body")]
pub struct CliArgs {
    /// RON config file. Built-in defaults are used without one.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace). RUST_LOG takes precedence.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Integrate a lander scenario and print the trajectory.
    Simulate(SimulateArgs),
    /// Integrate a mass on a spring and print t, x, v.
    Oscillator(OscillatorArgs),
    /// Print a recorded descent profile and report its worst rate error.
    Descent {
        /// Whitespace-separated time, altitude, actual rate, target rate.
        path: PathBuf,
    },
    /// Write the effective configuration to a RON file.
    InitConfig {
        /// Destination file.
        path: PathBuf,
    },
}

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// free-fall, circular, elliptical or escape, with stock parameters.
    #[arg(long)]
    pub scenario: Option<ScenarioKind>,

    /// Integrator to run, or both for a comparison.
    #[arg(long, value_enum)]
    pub method: Option<MethodChoice>,

    /// Central body (mars, earth, moon).
    #[arg(long)]
    pub body: Option<String>,

    /// Lander mass in kg.
    #[arg(long)]
    pub mass: Option<f64>,

    /// Time step in s.
    #[arg(long)]
    pub dt: Option<f64>,

    /// Duration in s.
    #[arg(long)]
    pub t_max: Option<f64>,

    /// Print every n-th sample.
    #[arg(long)]
    pub interval: Option<usize>,
}

#[derive(Args, Debug)]
pub struct OscillatorArgs {
    /// Spring constant in N/m.
    #[arg(long, default_value_t = 1.0)]
    pub stiffness: f64,

    /// Mass in kg.
    #[arg(long, default_value_t = 1.0)]
    pub mass: f64,

    /// Initial displacement in m.
    #[arg(long, default_value_t = 0.0)]
    pub x0: f64,

    /// Initial velocity in m/s.
    #[arg(long, default_value_t = 1.0)]
    pub v0: f64,

    /// Time step in s.
    #[arg(long, default_value_t = 1.0)]
    pub dt: f64,

    /// Duration in s.
    #[arg(long, default_value_t = 1000.0)]
    pub t_max: f64,

    /// euler or verlet.
    #[arg(long, default_value = "verlet")]
    pub method: Method,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MethodChoice {
    Euler,
    Verlet,
    Both,
}

impl MethodChoice {
    /// What to print for this choice.
    pub fn print_type(self) -> PrintType {
        match self {
            MethodChoice::Euler => PrintType::Single(Method::Euler),
            MethodChoice::Verlet => PrintType::Single(Method::Verlet),
            MethodChoice::Both => PrintType::Comparison,
        }
    }
}
