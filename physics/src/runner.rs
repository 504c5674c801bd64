//! Drives an integrator over a fixed time grid and collects the trajectory.
use marslander_utils::{Coordinate, Vec3D};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{SimResult, SimulationError};
use crate::force::{ForceModel, Gravity};
use crate::integrator::Integrator;
use crate::params::PhysicalParameters;
use crate::scenario::Scenario;
use crate::state::{State, TimeGrid, Trajectory};

/// Step and duration of one run, both in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunSettings {
    /// Time step.
    pub dt: f64,
    /// Last sample time (inclusive).
    pub t_max: f64,
}

impl RunSettings {
    /// Unvalidated pair; checked when the time grid is built.
    pub const fn new(dt: f64, t_max: f64) -> Self {
        Self { dt, t_max }
    }
}

/// Integrates `initial` under any force model.
///
/// Allocates all three output arrays up front. Non-finite values produced while
/// stepping are kept as they are.
pub fn integrate<I, C, F>(
    integrator: &I,
    force: &F,
    initial: State<C>,
    dt: f64,
    t_max: f64,
) -> SimResult<Trajectory<C>>
where
    I: Integrator,
    C: Coordinate,
    F: ForceModel<C>,
{
    let grid = TimeGrid::new(dt, t_max)?;
    let n = grid.len();
    if n < integrator.min_samples() {
        return Err(SimulationError::TooFewSamples {
            method: integrator.name(),
            required: integrator.min_samples(),
            found: n,
        });
    }
    debug!(method = integrator.name(), samples = n, dt, t_max, "starting run");

    let mut positions = vec![C::zero(); n];
    let mut velocities = vec![C::zero(); n];
    integrator.integrate(force, initial, grid.dt(), &mut positions, &mut velocities)?;

    let trajectory = Trajectory::from_parts(&grid, positions, velocities)?;
    if let Some(last) = trajectory.last() {
        if !(last.position.all_finite() && last.velocity.all_finite()) {
            warn!(
                method = integrator.name(),
                "trajectory left the representable range; non-finite samples kept"
            );
        }
    }
    debug!(method = integrator.name(), samples = n, "run finished");
    Ok(trajectory)
}

/// Runs lander trajectories around one central body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationRunner {
    gravity: Gravity,
}

impl SimulationRunner {
    /// Runner for the masses in `params`.
    pub fn new(params: PhysicalParameters) -> Self {
        Self {
            gravity: Gravity::new(params),
        }
    }

    /// Parameters every run uses.
    pub fn params(&self) -> &PhysicalParameters {
        self.gravity.params()
    }

    pub fn run<I: Integrator>(
        &self,
        integrator: &I,
        initial: State<Vec3D>,
        dt: f64,
        t_max: f64,
    ) -> SimResult<Trajectory<Vec3D>> {
        //! integrates `initial` under inverse-square gravity.
        integrate(integrator, &self.gravity, initial, dt, t_max)
    }

    pub fn run_scenario<I: Integrator>(
        &self,
        integrator: &I,
        scenario: &Scenario,
        settings: RunSettings,
    ) -> SimResult<Trajectory<Vec3D>> {
        //! derives the scenario's initial state, then runs it.
        let initial = scenario.initial_state(self.params())?;
        self.run(integrator, initial, settings.dt, settings.t_max)
    }
}
