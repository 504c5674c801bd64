//! Position (Störmer) Verlet.
//!
//! The recurrence only carries positions. Velocities are reconstructed by central
//! differences one sample behind the position front, and the final velocity reuses
//! the last available central difference. Sample 1 is bootstrapped with a
//! second-order Taylor step because there is no `x_{-1}` to recur from.
use marslander_utils::Coordinate;

use crate::error::SimResult;
use crate::force::ForceModel;
use crate::integrator::{check_buffers, Integrator};
use crate::state::State;

/// Position Verlet. Needs at least three samples to form its velocity estimates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Verlet;

impl Verlet {
    pub fn bootstrap<C, F>(&self, force: &F, state: State<C>, dt: f64) -> C
    where
        C: Coordinate,
        F: ForceModel<C>,
    {
        //! x_1 = x_0 + v_0·dt + ½·a_0·dt²
        let a0 = force.acceleration(state.position);
        state.position + state.velocity * dt + a0 * (0.5 * dt * dt)
    }

    pub fn advance<C, F>(&self, force: &F, previous: C, current: C, dt: f64) -> C
    where
        C: Coordinate,
        F: ForceModel<C>,
    {
        //! x_{i+1} = 2·x_i − x_{i−1} + dt²·a(x_i)
        let a = force.acceleration(current);
        current * 2.0 - previous + a * (dt * dt)
    }

    pub fn central_velocity<C: Coordinate>(&self, before: C, after: C, dt: f64) -> C {
        //! velocity midway between two positions 2·dt apart.
        (after - before) / (2.0 * dt)
    }
}

impl Integrator for Verlet {
    fn name(&self) -> &'static str {
        "verlet"
    }

    fn min_samples(&self) -> usize {
        3
    }

    fn integrate<C, F>(
        &self,
        force: &F,
        initial: State<C>,
        dt: f64,
        positions: &mut [C],
        velocities: &mut [C],
    ) -> SimResult<()>
    where
        C: Coordinate,
        F: ForceModel<C>,
    {
        let n = check_buffers(self.name(), self.min_samples(), positions, velocities)?;

        // all indexing below is bounded by n, which check_buffers guarantees is >= 3
        // and equal for both buffers.
        #[allow(clippy::indexing_slicing)]
        {
            positions[0] = initial.position;
            velocities[0] = initial.velocity;

            positions[1] = self.bootstrap(force, initial, dt);
            // placeholder, overwritten once x_2 exists
            velocities[1] = C::zero();

            for i in 2..n {
                positions[i] = self.advance(force, positions[i - 2], positions[i - 1], dt);
                velocities[i - 1] = self.central_velocity(positions[i - 2], positions[i], dt);
            }

            // no x_n to difference against; reuse the last central difference.
            velocities[n - 1] = self.central_velocity(positions[n - 3], positions[n - 1], dt);
        }
        Ok(())
    }
}
