//! Physical constants in the scaled units of the reference scenario.
//!
//! Time is measured in nanoseconds and position in millimetres, so
//! velocities are mm/ns and accelerations mm/ns². Charge and mass carry
//! their power of ten in the unit rather than the value.

/// Elementary charge, in units of 10^-19 C.
pub const ELEMENTARY_CHARGE: f64 = 1.6;

/// Electron rest mass, in units of 10^-31 kg.
pub const ELECTRON_MASS: f64 = 9.1;

/// Label printed next to sample times.
pub const TIME_UNIT: &str = "ns";

/// Label printed next to sample positions.
pub const POSITION_UNIT: &str = "mm";
