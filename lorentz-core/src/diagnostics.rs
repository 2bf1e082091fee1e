//! Diagnostics and error reporting
//!
//! Turns configuration errors into messages a user can act on.

use crate::error::SimulationError;

/// Format a configuration error with a hint on how to fix it
pub fn format_config_error(error: &SimulationError) -> String {
    let hint = match error {
        SimulationError::InvalidMass(_) => "pass a positive --mass",
        SimulationError::InvalidStepCount(_) => "pass --steps of at least 1",
        SimulationError::InvalidDuration(_) => "pass a positive, finite --total-time",
        SimulationError::InvalidCharge(_) => "pass a finite --charge",
        SimulationError::InvalidTimeStep(_) => "raise --total-time or lower --steps",
    };
    format!("Configuration error: {}\n  hint: {}", error, hint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_includes_error_and_hint() {
        let msg = format_config_error(&SimulationError::InvalidStepCount(0));
        assert!(msg.starts_with("Configuration error: step count"));
        assert!(msg.contains("hint: pass --steps"));
    }

    #[test]
    fn time_step_hint_points_at_both_flags() {
        let msg = format_config_error(&SimulationError::InvalidTimeStep(0.0));
        assert!(msg.contains("time step"));
        assert!(msg.contains("--total-time"));
        assert!(msg.contains("--steps"));
    }
}
