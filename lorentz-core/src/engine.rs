use crate::error::{Result, SimulationError};
use crate::vector::{add, cross, scale, Vector3};

/// A single charged particle moving through the external fields
#[derive(Debug, Clone)]
pub struct ChargedParticle {
    pub charge: f64,
    pub mass: f64,
    pub pos: Vector3,
    pub vel: Vector3,
    pub acc: Vector3,
}

impl ChargedParticle {
    /// Create a particle with zero initial acceleration.
    ///
    /// Mass is divided into every step, so it must be finite and positive.
    pub fn new(charge: f64, mass: f64, pos: Vector3, vel: Vector3) -> Result<Self> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(SimulationError::InvalidMass(mass));
        }
        Ok(Self {
            charge,
            mass,
            pos,
            vel,
            acc: Vector3::ZERO,
        })
    }

    /// Magnetic force `q (v × B)`, velocity on the left.
    pub fn lorentz_force(&self, magnetic: Vector3) -> Vector3 {
        scale(cross(self.vel, magnetic), self.charge)
    }

    /// Electric force `q E`.
    pub fn coulomb_force(&self, electric: Vector3) -> Vector3 {
        scale(electric, self.charge)
    }

    /// Sum of the Coulomb and Lorentz forces from the current velocity.
    pub fn net_force(&self, fields: &Fields) -> Vector3 {
        add(
            self.coulomb_force(fields.electric),
            self.lorentz_force(fields.magnetic),
        )
    }

    pub fn speed(&self) -> f64 {
        self.vel.length()
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.vel.length_squared()
    }
}

/// Uniform, time-invariant electric and magnetic fields
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fields {
    pub electric: Vector3, // force per unit charge
    pub magnetic: Vector3, // flux density
}

impl Fields {
    pub fn new(electric: Vector3, magnetic: Vector3) -> Self {
        Self { electric, magnetic }
    }

    pub fn zero() -> Self {
        Self::new(Vector3::ZERO, Vector3::ZERO)
    }
}
