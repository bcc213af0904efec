//! Diagnostics and error reporting for pointmass
//!
//! Every failure the core can produce is a [`SimError`]. Construction and
//! runtime setters return `Configuration`, stepping returns
//! `DegenerateConfiguration` or `InvalidTimeStep`.

use thiserror::Error;

/// Errors raised while building or advancing a scenario
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Rejected initial conditions or runtime parameter writes
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// A force on `body` is undefined for the current positions
    #[error("degenerate configuration at body {body}: {message}")]
    DegenerateConfiguration { body: usize, message: String },

    /// Negative or non-finite time step
    #[error("invalid time step {dt}: must be finite and non-negative")]
    InvalidTimeStep { dt: f32 },
}

impl SimError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn degenerate(body: usize, message: impl Into<String>) -> Self {
        Self::DegenerateConfiguration {
            body,
            message: message.into(),
        }
    }
}

/// Format a simulation error the way the command line reports it
pub fn format_sim_error(error: &SimError, frame: Option<usize>) -> String {
    match frame {
        Some(frame) => format!("Simulation error at frame {}: {}", frame, error),
        None => format!("Simulation error: {}", error),
    }
}

/// Check that a mass can be used as a divisor
pub(crate) fn validate_mass(body: usize, mass: f32) -> Result<(), SimError> {
    if mass.is_finite() && mass > 0.0 {
        Ok(())
    } else {
        Err(SimError::configuration(format!(
            "body {} has mass {}, mass must be finite and positive",
            body, mass
        )))
    }
}

/// Reject negative or non-finite time steps
pub(crate) fn validate_dt(dt: f32) -> Result<(), SimError> {
    if dt.is_finite() && dt >= 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidTimeStep { dt })
    }
}
