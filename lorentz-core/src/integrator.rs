use crate::engine::ChargedParticle;
use crate::vector::{add, scale, Vector3};

/// Step the particle forward by dt using semi-implicit Euler integration
pub fn step(particle: &mut ChargedParticle, force: Vector3, dt: f64) {
    // F = ma
    particle.acc = force / particle.mass;

    // Semi-implicit Euler: v += a*dt, then x += v*dt with the updated v
    particle.vel = add(particle.vel, scale(particle.acc, dt));
    particle.pos = add(particle.pos, scale(particle.vel, dt));
}
