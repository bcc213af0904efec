use crate::diagnostics::{validate_dt, validate_mass, SimError};
use crate::engine::{net_force, Body, ForceModel, KinematicState};
use crate::integrator::IntegratorKind;
use glam::Vec3;
use log::{debug, warn};

/// An owned set of bodies advanced together by one integrator
#[derive(Debug, Clone)]
pub struct Scenario {
    bodies: Vec<Body>,
    initial: Vec<KinematicState>,
    integrator: IntegratorKind,
    elapsed: f32,
}

impl Scenario {
    /// Build a scenario, rejecting empty body lists, non-positive masses and
    /// force laws that reference missing bodies
    pub fn new(bodies: Vec<Body>, integrator: IntegratorKind) -> Result<Self, SimError> {
        if bodies.is_empty() {
            return Err(SimError::configuration("a scenario needs at least one body"));
        }

        for (i, body) in bodies.iter().enumerate() {
            body.validate(i, bodies.len())?;
        }

        let initial = bodies.iter().map(|b| b.state).collect();
        Ok(Self {
            bodies,
            initial,
            integrator,
            elapsed: 0.0,
        })
    }

    /// Advance every body by `dt`
    ///
    /// Forces for all bodies are sampled from the pre-step positions before
    /// any body moves. If a force is undefined nothing is advanced and the
    /// error is returned. `dt == 0` does nothing.
    pub fn step(&mut self, dt: f32) -> Result<(), SimError> {
        validate_dt(dt)?;
        if dt == 0.0 {
            return Ok(());
        }

        let forces = (0..self.bodies.len())
            .map(|i| net_force(&self.bodies, i))
            .collect::<Result<Vec<Vec3>, SimError>>()
            .map_err(|e| {
                warn!("step of {} skipped: {}", dt, e);
                e
            })?;

        let integrator = self.integrator;
        for (body, force) in self.bodies.iter_mut().zip(forces) {
            body.state.applied_force = force;
            if !body.fixed {
                integrator.advance(&mut body.state, dt);
            }
        }

        self.elapsed += dt;
        Ok(())
    }

    /// Restore every body to its configured initial state
    pub fn reset(&mut self) {
        for (body, initial) in self.bodies.iter_mut().zip(&self.initial) {
            body.state = *initial;
        }
        self.elapsed = 0.0;
        debug!("scenario reset ({} bodies)", self.bodies.len());
    }

    pub fn integrator(&self) -> IntegratorKind {
        self.integrator
    }

    /// Switch integrator; body state is kept as it is
    pub fn set_integrator(&mut self, integrator: IntegratorKind) {
        if integrator != self.integrator {
            debug!("integrator switched from {} to {}", self.integrator, integrator);
        }
        self.integrator = integrator;
    }

    /// Change a body's mass; the new mass also becomes its reset value
    pub fn set_mass(&mut self, index: usize, mass: f32) -> Result<(), SimError> {
        self.check_index(index)?;
        validate_mass(index, mass)?;
        self.bodies[index].state.mass = mass;
        self.initial[index].mass = mass;
        Ok(())
    }

    /// Replace the force laws acting on a body
    pub fn set_forces(&mut self, index: usize, forces: Vec<ForceModel>) -> Result<(), SimError> {
        self.check_index(index)?;
        for force in &forces {
            force.validate(index, self.bodies.len())?;
        }
        self.bodies[index].forces = forces;
        Ok(())
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    pub fn position(&self, index: usize) -> Option<Vec3> {
        self.bodies.get(index).map(|b| b.state.position)
    }

    pub fn positions(&self) -> Vec<Vec3> {
        self.bodies.iter().map(|b| b.state.position).collect()
    }

    /// State each body returns to on `reset`
    pub fn initial_states(&self) -> &[KinematicState] {
        &self.initial
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Simulated time since construction or the last reset
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    fn check_index(&self, index: usize) -> Result<(), SimError> {
        if index < self.bodies.len() {
            Ok(())
        } else {
            Err(SimError::configuration(format!(
                "no body {} in a scenario of {} bodies",
                index,
                self.bodies.len()
            )))
        }
    }
}
