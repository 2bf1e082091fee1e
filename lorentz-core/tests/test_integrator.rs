//! Unit tests for the semi-implicit Euler step

use lorentz_core::engine::ChargedParticle;
use lorentz_core::integrator::step;
use lorentz_core::tests::test_helpers::vec_approx_eq;
use lorentz_core::Vector3;

fn particle(mass: f64, pos: Vector3, vel: Vector3) -> ChargedParticle {
    ChargedParticle::new(1.0, mass, pos, vel).unwrap()
}

#[test]
fn test_acceleration_is_force_over_mass() {
    let mut p = particle(4.0, Vector3::ZERO, Vector3::ZERO);
    step(&mut p, Vector3::new(8.0, -4.0, 2.0), 0.1);
    assert!(vec_approx_eq(p.acc, Vector3::new(2.0, -1.0, 0.5), 1e-12));
}

#[test]
fn test_position_uses_updated_velocity() {
    let mut p = particle(1.0, Vector3::ZERO, Vector3::ZERO);
    step(&mut p, Vector3::new(1.0, 0.0, 0.0), 0.5);

    // v = 0 + 1 * 0.5 = 0.5; x = 0 + 0.5 * 0.5 = 0.25
    // (explicit Euler with the old velocity would leave x at 0)
    assert!(vec_approx_eq(p.vel, Vector3::new(0.5, 0.0, 0.0), 1e-12));
    assert!(vec_approx_eq(p.pos, Vector3::new(0.25, 0.0, 0.0), 1e-12));
}

#[test]
fn test_zero_force_is_uniform_motion() {
    let vel = Vector3::new(1.0, -2.0, 3.0);
    let mut p = particle(9.1, Vector3::new(1.0, 1.0, 1.0), vel);
    for _ in 0..10 {
        step(&mut p, Vector3::ZERO, 0.1);
    }
    assert_eq!(p.acc, Vector3::ZERO);
    assert_eq!(p.vel, vel);
    assert!(vec_approx_eq(p.pos, Vector3::new(2.0, -1.0, 4.0), 1e-12));
}

#[test]
fn test_acceleration_is_overwritten_each_step() {
    let mut p = particle(2.0, Vector3::ZERO, Vector3::ZERO);
    step(&mut p, Vector3::new(2.0, 0.0, 0.0), 1.0);
    step(&mut p, Vector3::new(0.0, 6.0, 0.0), 1.0);
    assert!(vec_approx_eq(p.acc, Vector3::new(0.0, 3.0, 0.0), 1e-12));
    assert!(vec_approx_eq(p.vel, Vector3::new(1.0, 3.0, 0.0), 1e-12));
    assert!(vec_approx_eq(p.pos, Vector3::new(2.0, 3.0, 0.0), 1e-12));
}
