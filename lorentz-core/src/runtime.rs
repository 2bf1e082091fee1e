use crate::config::{SimulationConfig, TimeStepping};
use crate::engine::{ChargedParticle, Fields};
use crate::error::Result;
use crate::integrator::step;
use crate::vector::Vector3;
use tracing::{debug, info, trace};

/// Particle position captured before a step is taken
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: f64,
    pub position: Vector3,
}

/// Snapshot of the particle's full kinematic state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleState {
    pub time: f64,
    pub pos: Vector3,
    pub vel: Vector3,
    pub acc: Vector3,
}

/// Final result of running a simulation
#[derive(Debug, Clone)]
pub struct SimulationResult {
    /// One sample per step, in chronological order.
    pub samples: Vec<Sample>,
    pub final_state: ParticleState,
}

// Upper bound on the samples reserved before the run starts
const MAX_RESERVED_SAMPLES: usize = 1 << 16;

/// Capacity to reserve for a trace of `step_count` nominal steps
fn trace_capacity(step_count: u32) -> usize {
    (step_count as usize).saturating_add(1).min(MAX_RESERVED_SAMPLES)
}

/// Everything needed to advance a run one step at a time
#[derive(Debug, Clone)]
pub struct SimulationContext {
    pub config: SimulationConfig,
    pub fields: Fields,
    pub particle: ChargedParticle,
    pub dt: f64,
    pub elapsed: f64,
    pub step_index: u64,
}

impl SimulationContext {
    /// Whether another sample will be produced.
    pub fn is_running(&self) -> bool {
        match self.config.time_stepping {
            TimeStepping::Accumulated => self.elapsed < self.config.total_time,
            TimeStepping::Indexed => self.step_index < u64::from(self.config.step_count),
        }
    }
}

/// Main entry point: validate the configuration and run it to completion
pub fn run_simulation(config: &SimulationConfig) -> Result<SimulationResult> {
    let mut ctx = build_simulation_context(config)?;

    info!(
        dt = ctx.dt,
        steps = config.step_count,
        stepping = ?config.time_stepping,
        "starting simulation"
    );

    let mut samples = Vec::with_capacity(trace_capacity(config.step_count));
    while let Some(sample) = step_simulation(&mut ctx) {
        samples.push(sample);
    }

    if samples.len() as u64 != u64::from(config.step_count) {
        debug!(
            samples = samples.len(),
            steps = config.step_count,
            "accumulated clock drifted from the nominal step count"
        );
    }
    debug!(
        speed = ctx.particle.speed(),
        kinetic_energy = ctx.particle.kinetic_energy(),
        "final particle state"
    );
    info!(samples = samples.len(), "simulation finished");

    Ok(SimulationResult {
        samples,
        final_state: get_particle_state(&ctx),
    })
}

/// Validate a configuration and set up the particle and fields
pub fn build_simulation_context(config: &SimulationConfig) -> Result<SimulationContext> {
    config.validate()?;
    Ok(SimulationContext {
        config: config.clone(),
        fields: config.fields(),
        particle: config.particle()?,
        dt: config.dt(),
        elapsed: 0.0,
        step_index: 0,
    })
}

/// Record the current position, then advance the particle by one step.
///
/// Returns `None` once the run has reached its total duration.
pub fn step_simulation(ctx: &mut SimulationContext) -> Option<Sample> {
    if !ctx.is_running() {
        return None;
    }

    let sample = Sample {
        time: ctx.elapsed,
        position: ctx.particle.pos,
    };

    // Force depends on the current velocity, so it is recomputed every step
    let force = ctx.particle.net_force(&ctx.fields);
    step(&mut ctx.particle, force, ctx.dt);

    ctx.step_index += 1;
    ctx.elapsed = match ctx.config.time_stepping {
        TimeStepping::Accumulated => ctx.elapsed + ctx.dt,
        TimeStepping::Indexed => ctx.step_index as f64 * ctx.dt,
    };

    trace!(step = ctx.step_index, t = sample.time, ?force, "step");
    Some(sample)
}

pub fn get_particle_state(ctx: &SimulationContext) -> ParticleState {
    ParticleState {
        time: ctx.elapsed,
        pos: ctx.particle.pos,
        vel: ctx.particle.vel,
        acc: ctx.particle.acc,
    }
}
