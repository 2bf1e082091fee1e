pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod integrator;
pub mod runtime;
pub mod vector;

pub use config::{SimulationConfig, TimeStepping};
pub use diagnostics::format_config_error;
pub use engine::{ChargedParticle, Fields};
pub use error::{Result, SimulationError};
pub use runtime::{
    build_simulation_context, get_particle_state, run_simulation, step_simulation,
    ParticleState, Sample, SimulationContext, SimulationResult,
};
pub use vector::Vector3;
