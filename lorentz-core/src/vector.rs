//! 3-component vector algebra used by every layer of the simulation.
//!
//! `Vector3` is a plain alias for `glam::DVec3`, so positions, velocities,
//! accelerations and field strengths all share one double-precision type.
//! Units are carried by convention only (see [`crate::constants`]).

use glam::DVec3;

/// Position, velocity, acceleration or field strength, depending on context.
pub type Vector3 = DVec3;

/// Multiply every component of `v` by `s`.
pub fn scale(v: Vector3, s: f64) -> Vector3 {
    v * s
}

/// Componentwise sum.
pub fn add(a: Vector3, b: Vector3) -> Vector3 {
    a + b
}

/// Componentwise difference `a - b`.
pub fn sub(a: Vector3, b: Vector3) -> Vector3 {
    a - b
}

/// Right-handed cross product `a × b`.
///
/// Operand order matters: `cross(b, a) == -cross(a, b)`.
pub fn cross(a: Vector3, b: Vector3) -> Vector3 {
    Vector3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_matches_glam() {
        let a = Vector3::new(1.5, -2.0, 0.25);
        let b = Vector3::new(-3.0, 4.0, 8.0);
        assert_eq!(cross(a, b), a.cross(b));
    }

    #[test]
    fn nan_propagates_without_panicking() {
        let v = scale(Vector3::new(f64::NAN, 1.0, 2.0), 3.0);
        assert!(v.x.is_nan());
        assert_eq!(v.y, 3.0);
    }
}
