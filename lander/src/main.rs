//! Runs lander trajectories around a central body (Mars unless told otherwise) and prints
//! them as comma-separated rows on stdout. Logs go to stderr.
use clap::Parser;
use marslander_physics::{RunSettings, Spring, State};
use tracing::debug;

use cli::{CliArgs, Command};
use config::Config;
use error::AppError;

mod cli;
mod config;
mod descent;
mod error;
mod logging;
mod report;

fn main() -> Result<(), AppError> {
    let args = CliArgs::parse();

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.apply_cli_overrides(&args);
    config.validate()?;
    logging::init_logging(config.log_filter()?);
    if let Some(path) = &args.config {
        debug!(path = %path.display(), "loaded config");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match &args.command {
        Command::Simulate(_) => report::simulate(&config, &mut out)?,
        Command::Oscillator(osc) => {
            let spring = Spring::new(osc.stiffness, osc.mass)?;
            report::oscillator(
                osc.method,
                &spring,
                State::new(osc.x0, osc.v0),
                RunSettings::new(osc.dt, osc.t_max),
                &mut out,
            )?;
        }
        Command::Descent { path } => {
            let samples = descent::load_descent_log(path)?;
            report::descent(&samples, &mut out)?;
        }
        Command::InitConfig { path } => {
            config.save(path)?;
            debug!(path = %path.display(), "wrote config");
        }
    }
    Ok(())
}
