use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, SimulationError>;

/// Configuration rejected before the first step is taken.
///
/// Once a configuration validates, the stepping loop itself cannot fail;
/// NaN or infinite field and velocity components simply propagate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("mass must be finite and > 0 (got {0})")]
    InvalidMass(f64),

    #[error("step count must be > 0 (got {0})")]
    InvalidStepCount(u32),

    #[error("total time must be finite and > 0 (got {0})")]
    InvalidDuration(f64),

    #[error("charge must be finite (got {0})")]
    InvalidCharge(f64),

    #[error("time step total_time / step_count must be finite and > 0 (got {0})")]
    InvalidTimeStep(f64),
}
