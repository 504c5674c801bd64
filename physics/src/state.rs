//! State, time grid and trajectory buffers.
use marslander_utils::Coordinate;
use serde::{Deserialize, Serialize};

use crate::error::{SimResult, SimulationError};

/// Hard ceiling on samples per run, checked before any allocation.
pub const MAX_SAMPLES: usize = 1 << 26;

/// Position and velocity at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct State<C> {
    /// Position relative to the centre of the attracting body.
    pub position: C,
    /// Velocity.
    pub velocity: C,
}

impl<C: Coordinate> State<C> {
    /// Bundles a position and velocity.
    pub fn new(position: C, velocity: C) -> Self {
        Self { position, velocity }
    }
}

/// Uniform sample times `0, dt, 2dt, …` up to and including `t_max`.
///
/// `len = floor(t_max / dt) + 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    dt: f64,
    samples: usize,
}

impl TimeGrid {
    pub fn new(dt: f64, t_max: f64) -> SimResult<Self> {
        //! validates the step and duration and sizes the grid.
        if !(dt.is_finite() && dt > 0.0) {
            return Err(SimulationError::BadTimeStep(dt));
        }
        if !(t_max.is_finite() && t_max > 0.0) {
            return Err(SimulationError::BadDuration(t_max));
        }

        let steps = (t_max / dt).floor();
        #[allow(clippy::as_conversions)] // MAX_SAMPLES is far below 2^53, exact in f64.
        let limit = MAX_SAMPLES as f64;
        if !steps.is_finite() || steps + 1.0 > limit {
            return Err(SimulationError::TooManySamples {
                dt,
                t_max,
                limit: MAX_SAMPLES,
            });
        }

        #[allow(clippy::as_conversions)] // bounded above by MAX_SAMPLES, non-negative.
        let samples = steps as usize + 1;
        Ok(Self { dt, samples })
    }

    /// Step between samples in seconds.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Number of samples, including t = 0.
    pub fn len(&self) -> usize {
        self.samples
    }

    /// Always false; a grid holds at least the t = 0 sample.
    pub fn is_empty(&self) -> bool {
        self.samples == 0
    }

    /// Time of sample `index`.
    pub fn time(&self, index: usize) -> f64 {
        #[allow(clippy::as_conversions)] // index < MAX_SAMPLES
        let i = index as f64;
        i * self.dt
    }

    /// All sample times in order.
    pub fn times(&self) -> Vec<f64> {
        (0..self.samples).map(|i| self.time(i)).collect()
    }
}

/// Sampled motion: parallel time, position and velocity arrays of equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory<C> {
    time: Vec<f64>,
    positions: Vec<C>,
    velocities: Vec<C>,
}

impl<C: Coordinate> Trajectory<C> {
    pub(crate) fn from_parts(
        grid: &TimeGrid,
        positions: Vec<C>,
        velocities: Vec<C>,
    ) -> SimResult<Self> {
        if positions.len() != grid.len() || velocities.len() != grid.len() {
            return Err(SimulationError::MismatchedBuffers {
                positions: positions.len(),
                velocities: velocities.len(),
            });
        }
        Ok(Self {
            time: grid.times(),
            positions,
            velocities,
        })
    }

    /// Sample times in seconds.
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Positions, one per sample.
    pub fn positions(&self) -> &[C] {
        &self.positions
    }

    /// Velocities, one per sample.
    pub fn velocities(&self) -> &[C] {
        &self.velocities
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// True only for a trajectory with no samples, which the runner never builds.
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// State at sample `index`, if in range.
    pub fn state(&self, index: usize) -> Option<State<C>> {
        let position = *self.positions.get(index)?;
        let velocity = *self.velocities.get(index)?;
        Some(State { position, velocity })
    }

    /// Final sample.
    pub fn last(&self) -> Option<State<C>> {
        self.state(self.len().checked_sub(1)?)
    }

    /// `(t, state)` pairs in time order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, State<C>)> + '_ {
        self.time
            .iter()
            .zip(self.positions.iter().zip(self.velocities.iter()))
            .map(|(&t, (&position, &velocity))| (t, State { position, velocity }))
    }

    /// Hands the three arrays to the caller.
    pub fn into_parts(self) -> (Vec<f64>, Vec<C>, Vec<C>) {
        (self.time, self.positions, self.velocities)
    }
}

#[cfg(test)]
mod tests {
    use marslander_utils::Vec3D;

    use super::*;

    #[test]
    fn grid_includes_t_max() {
        let grid = TimeGrid::new(1.0, 1000.0).unwrap();
        assert_eq!(grid.len(), 1001);
        assert_eq!(grid.time(0), 0.0);
        assert_eq!(grid.time(1000), 1000.0);
    }

    #[test]
    fn grid_floors_partial_steps() {
        let grid = TimeGrid::new(0.3, 1.0).unwrap();
        assert_eq!(grid.len(), 4);
        let times = grid.times();
        assert_eq!(times.len(), 4);
        assert!(times[3] < 1.0);
    }

    #[test]
    fn duration_shorter_than_step_gives_single_sample() {
        assert_eq!(TimeGrid::new(10.0, 3.0).unwrap().len(), 1);
    }

    #[test]
    fn rejects_bad_step_and_duration() {
        assert_eq!(TimeGrid::new(0.0, 10.0), Err(SimulationError::BadTimeStep(0.0)));
        assert_eq!(TimeGrid::new(-1.0, 10.0), Err(SimulationError::BadTimeStep(-1.0)));
        assert!(matches!(TimeGrid::new(f64::NAN, 10.0), Err(SimulationError::BadTimeStep(_))));
        assert_eq!(TimeGrid::new(1.0, 0.0), Err(SimulationError::BadDuration(0.0)));
        assert!(matches!(
            TimeGrid::new(1.0, f64::INFINITY),
            Err(SimulationError::BadDuration(_))
        ));
    }

    #[test]
    fn rejects_unbounded_sample_count() {
        assert!(matches!(
            TimeGrid::new(1e-300, 1e10),
            Err(SimulationError::TooManySamples { .. })
        ));
        assert!(matches!(
            TimeGrid::new(1.0, 1e9),
            Err(SimulationError::TooManySamples { .. })
        ));
    }

    #[test]
    fn trajectory_accessors_agree() {
        let grid = TimeGrid::new(1.0, 2.0).unwrap();
        let positions = vec![Vec3D(0.0, 1.0, 0.0), Vec3D(1.0, 1.0, 0.0), Vec3D(2.0, 1.0, 0.0)];
        let velocities = vec![Vec3D(1.0, 0.0, 0.0); 3];
        let trajectory = Trajectory::from_parts(&grid, positions, velocities).unwrap();

        assert_eq!(trajectory.len(), 3);
        assert_eq!(trajectory.time(), &[0.0, 1.0, 2.0]);
        assert_eq!(trajectory.state(1).unwrap().position, Vec3D(1.0, 1.0, 0.0));
        assert_eq!(trajectory.last().unwrap().position, Vec3D(2.0, 1.0, 0.0));
        assert!(trajectory.state(3).is_none());
        assert_eq!(trajectory.iter().count(), 3);
    }

    #[test]
    fn into_parts_hands_over_parallel_arrays() {
        let grid = TimeGrid::new(0.5, 1.5).unwrap();
        let positions = vec![3.0, 2.5, 1.5, 0.0];
        let velocities = vec![-1.0, -1.5, -2.5, -3.0];
        let trajectory = Trajectory::from_parts(&grid, positions, velocities).unwrap();
        let expected = trajectory.clone();

        let (time, positions, velocities) = trajectory.into_parts();
        assert_eq!(time.len(), positions.len());
        assert_eq!(positions.len(), velocities.len());
        assert_eq!(time, expected.time());
        assert_eq!(positions, expected.positions());
        assert_eq!(velocities, expected.velocities());
        assert_eq!(time, vec![0.0, 0.5, 1.0, 1.5]);
    }

    #[test]
    fn trajectory_rejects_wrong_lengths() {
        let grid = TimeGrid::new(1.0, 2.0).unwrap();
        let result = Trajectory::from_parts(&grid, vec![0.0; 3], vec![0.0; 2]);
        assert_eq!(
            result,
            Err(SimulationError::MismatchedBuffers {
                positions: 3,
                velocities: 2
            })
        );
    }
}
