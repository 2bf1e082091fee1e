//! Simulation configuration
//!
//! `SimulationConfig` holds everything a run needs:
//! - particle charge, mass and initial kinematic state,
//! - the constant electric and magnetic fields,
//! - total duration, step count and how elapsed time is advanced

use crate::constants::{ELECTRON_MASS, ELEMENTARY_CHARGE};
use crate::engine::{ChargedParticle, Fields};
use crate::error::{Result, SimulationError};
use crate::vector::Vector3;

/// How the driver advances elapsed time between samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeStepping {
    /// `elapsed += dt` every step, the legacy accumulation rule. Rounding can
    /// add or drop a final sample: with an f64 clock the reference run yields
    /// 101 samples where the single-precision legacy clock yielded 100.
    #[default]
    Accumulated,

    /// `elapsed = step_index * dt`. Always produces exactly `step_count` samples.
    Indexed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub charge: f64,
    pub mass: f64,
    pub initial_position: Vector3,
    pub initial_velocity: Vector3,
    pub electric_field: Vector3,
    pub magnetic_field: Vector3,
    pub total_time: f64,
    pub step_count: u32,
    pub time_stepping: TimeStepping,
}

impl SimulationConfig {
    /// An electron-like particle starting at rest at the origin in
    /// E = (10, 10, 5), B = (0, 0, 10), sampled 100 times over 10 ns.
    pub fn reference() -> Self {
        Self {
            charge: ELEMENTARY_CHARGE,
            mass: ELECTRON_MASS,
            initial_position: Vector3::ZERO,
            initial_velocity: Vector3::ZERO,
            electric_field: Vector3::new(10.0, 10.0, 5.0),
            magnetic_field: Vector3::new(0.0, 0.0, 10.0),
            total_time: 10.0,
            step_count: 100,
            time_stepping: TimeStepping::Accumulated,
        }
    }

    /// Fixed time step, `total_time / step_count`.
    pub fn dt(&self) -> f64 {
        self.total_time / f64::from(self.step_count)
    }

    /// Reject configurations that would divide by zero or never terminate.
    pub fn validate(&self) -> Result<()> {
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(SimulationError::InvalidMass(self.mass));
        }
        if self.step_count == 0 {
            return Err(SimulationError::InvalidStepCount(self.step_count));
        }
        if !self.total_time.is_finite() || self.total_time <= 0.0 {
            return Err(SimulationError::InvalidDuration(self.total_time));
        }
        if !self.charge.is_finite() {
            return Err(SimulationError::InvalidCharge(self.charge));
        }
        // A step that underflows to zero would never advance the clock
        let dt = self.dt();
        if !dt.is_finite() || dt <= 0.0 {
            return Err(SimulationError::InvalidTimeStep(dt));
        }
        Ok(())
    }

    pub fn fields(&self) -> Fields {
        Fields::new(self.electric_field, self.magnetic_field)
    }

    pub fn particle(&self) -> Result<ChargedParticle> {
        ChargedParticle::new(
            self.charge,
            self.mass,
            self.initial_position,
            self.initial_velocity,
        )
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::reference()
    }
}
