//! Explicit (forward) Euler.
//!
//! Each sample is recorded before the update that leaves it, so the last stored
//! state is the one the final, discarded update started from. Not symplectic:
//! orbits spiral outward and the energy grows every step, which is the point of
//! running it next to Verlet.
use marslander_utils::Coordinate;

use crate::error::SimResult;
use crate::force::ForceModel;
use crate::integrator::{check_buffers, Integrator};
use crate::state::State;

/// Forward Euler: `x += dt·v`, `v += dt·a(x)`, both from the old state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euler;

impl Euler {
    pub fn step<C, F>(&self, force: &F, state: State<C>, dt: f64) -> State<C>
    where
        C: Coordinate,
        F: ForceModel<C>,
    {
        //! one update from `state`; acceleration taken at the old position.
        let acceleration = force.acceleration(state.position);
        State {
            position: state.position + state.velocity * dt,
            velocity: state.velocity + acceleration * dt,
        }
    }
}

impl Integrator for Euler {
    fn name(&self) -> &'static str {
        "euler"
    }

    fn min_samples(&self) -> usize {
        1
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
        check_buffers(self.name(), self.min_samples(), positions, velocities)?;

        let mut state = initial;
        for (position, velocity) in positions.iter_mut().zip(velocities.iter_mut()) {
            *position = state.position;
            *velocity = state.velocity;
            state = self.step(force, state, dt);
        }
        Ok(())
    }
}
