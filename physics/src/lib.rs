//! Time-stepping integration of a lander falling towards, orbiting, or escaping a planet.
//!
//! Two fixed-step schemes are provided so they can be compared on the same initial
//! conditions: forward Euler, which gains energy every step, and position Verlet,
//! which keeps it bounded. Both are stateless and run through [`integrate`] or a
//! [`SimulationRunner`].
pub mod bodies;
pub mod diagnostics;
pub mod error;
pub mod euler;
pub mod force;
pub mod integrator;
pub mod params;
pub mod runner;
pub mod scenario;
pub mod state;
pub mod verlet;

pub use bodies::{CentralBody, EARTH, MARS, MOON};
pub use error::{SimResult, SimulationError};
pub use euler::Euler;
pub use force::{ForceModel, Gravity, Spring};
pub use integrator::{Integrator, Method};
pub use params::{PhysicalParameters, G};
pub use runner::{integrate, RunSettings, SimulationRunner};
pub use scenario::{Scenario, ScenarioKind};
pub use state::{State, TimeGrid, Trajectory, MAX_SAMPLES};
pub use verlet::Verlet;
