//! Runs the configured work and writes comma-separated rows for plotting.
use std::io::{self, Write};

use marslander_physics::diagnostics::{altitude, EnergyDrift};
use marslander_physics::{
    integrate, Method, RunSettings, SimResult, SimulationRunner, Spring, State, Trajectory,
};
use marslander_utils::Vec3D;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::Config;
use crate::descent::{worst_rate_error, DescentSample};
use crate::error::AppError;

/// Which integrators' output gets printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrintType {
    /// One method only.
    Single(Method),
    /// Euler then Verlet, from the same initial state.
    Comparison,
}

impl PrintType {
    /// Methods to run, in print order.
    pub fn methods(&self) -> Vec<Method> {
        match self {
            PrintType::Single(method) => vec![*method],
            PrintType::Comparison => Method::ALL.to_vec(),
        }
    }
}

/// Runs the configured scenario with each selected method.
pub fn simulate<W: Write>(config: &Config, out: &mut W) -> Result<(), AppError> {
    config.validate()?;
    let body = config.central_body()?;
    let runner = SimulationRunner::new(config.params()?);
    let settings = config.run_settings();
    info!(
        body = body.name,
        scenario = %config.scenario.kind(),
        dt = settings.dt,
        t_max = settings.t_max,
        "simulating"
    );

    // every run has to succeed before anything reaches `out`
    let runs = config
        .output
        .print
        .methods()
        .into_iter()
        .map(|method| {
            let trajectory = runner.run_scenario(&method, &config.scenario, settings)?;
            Ok((method, trajectory))
        })
        .collect::<SimResult<Vec<_>>>()?;

    for (method, trajectory) in &runs {
        write_trajectory(out, *method, trajectory, body.radius, config.output.interval)?;
        log_energy_drift(*method, trajectory, runner.params().mu());
    }
    Ok(())
}

/// Writes `TAG, t, x, y, z, vx, vy, vz, altitude` for every `interval`-th sample and
/// the last one.
pub fn write_trajectory<W: Write>(
    out: &mut W,
    method: Method,
    trajectory: &Trajectory<Vec3D>,
    body_radius: f64,
    interval: usize,
) -> io::Result<()> {
    let interval = interval.max(1);
    let last = trajectory.len().saturating_sub(1);

    for (i, (t, state)) in trajectory.iter().enumerate() {
        if i % interval != 0 && i != last {
            continue;
        }
        let Vec3D(x, y, z) = state.position;
        let Vec3D(vx, vy, vz) = state.velocity;
        writeln!(
            out,
            "{}, {t}, {x}, {y}, {z}, {vx}, {vy}, {vz}, {}",
            method.tag(),
            altitude(&state.position, body_radius)
        )?;
    }
    Ok(())
}

fn log_energy_drift(method: Method, trajectory: &Trajectory<Vec3D>, mu: f64) {
    let Some(drift) = EnergyDrift::measure(trajectory, mu) else {
        return;
    };
    if drift.max_relative.is_nan() {
        warn!(%method, "energy became non-finite during the run");
        return;
    }
    info!(
        %method,
        "specific energy: {:.6e}\tchange: {:.6e} ({:+.2}%)\tmax deviation: {:.2e}",
        drift.last,
        drift.last - drift.initial,
        100.0 * drift.final_relative(),
        drift.max_relative
    );
}

/// Runs the spring oscillator and writes `t, x, v` rows.
pub fn oscillator<W: Write>(
    method: Method,
    spring: &Spring,
    initial: State<f64>,
    settings: RunSettings,
    out: &mut W,
) -> Result<(), AppError> {
    let trajectory = integrate(&method, spring, initial, settings.dt, settings.t_max)?;
    for (t, state) in trajectory.iter() {
        writeln!(out, "{t}, {}, {}", state.position, state.velocity)?;
    }

    if let Some(last) = trajectory.last() {
        let initial_energy = spring.specific_energy(initial.position, initial.velocity);
        let final_energy = spring.specific_energy(last.position, last.velocity);
        info!(
            %method,
            omega = spring.angular_frequency(),
            "oscillator energy: {initial_energy:.6e} -> {final_energy:.6e}"
        );
    }
    Ok(())
}

/// Writes `altitude, actual, target` rows and logs the worst rate error.
pub fn descent<W: Write>(samples: &[DescentSample], out: &mut W) -> io::Result<()> {
    for sample in samples {
        writeln!(out, "{}, {}, {}", sample.altitude, sample.actual_rate, sample.target_rate)?;
    }

    match worst_rate_error(samples) {
        Some(worst) => info!(
            samples = samples.len(),
            time = worst.time,
            altitude = worst.altitude,
            "largest descent rate error: {:+.3} m/s",
            worst.rate_error()
        ),
        None => warn!("descent log holds no samples"),
    }
    Ok(())
}
