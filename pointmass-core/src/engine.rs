use crate::diagnostics::{validate_mass, SimError};
use glam::Vec3;

/// Kinematic state of a single point mass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicState {
    pub position: Vec3,
    /// Position one step ago, only read and written by Verlet
    pub previous_position: Vec3,
    pub velocity: Vec3,
    pub mass: f32,
    /// Net force sampled at the start of the last step
    pub applied_force: Vec3,
}

impl KinematicState {
    /// State with no history: the previous position equals the position
    pub fn new(position: Vec3, velocity: Vec3, mass: f32) -> Self {
        Self {
            position,
            previous_position: position,
            velocity,
            mass,
            applied_force: Vec3::ZERO,
        }
    }

    pub fn with_previous_position(mut self, previous_position: Vec3) -> Self {
        self.previous_position = previous_position;
        self
    }

    /// Acceleration implied by the applied force
    pub fn acceleration(&self) -> Vec3 {
        self.applied_force / self.mass
    }
}

/// Bodies that attract a body under inverse-square gravity
#[derive(Debug, Clone, PartialEq)]
pub enum Sources {
    /// Every other body in the scenario
    All,
    /// A fixed list of body indices
    Only(Vec<usize>),
}

/// A force law acting on one body
#[derive(Debug, Clone, PartialEq)]
pub enum ForceModel {
    Constant {
        force: Vec3,
    },
    InverseSquareGravity {
        g: f32,
        sources: Sources,
    },
    /// Tangential push about `origin` in the plane orthogonal to `axis_up`
    Centripetal {
        magnitude: f32,
        axis_up: Vec3,
        origin: Vec3,
    },
}

impl ForceModel {
    pub fn constant(force: Vec3) -> Self {
        Self::Constant { force }
    }

    pub fn gravity(g: f32) -> Self {
        Self::InverseSquareGravity {
            g,
            sources: Sources::All,
        }
    }

    pub fn gravity_from(g: f32, sources: Vec<usize>) -> Self {
        Self::InverseSquareGravity {
            g,
            sources: Sources::Only(sources),
        }
    }

    pub fn centripetal(magnitude: f32, axis_up: Vec3, origin: Vec3) -> Self {
        Self::Centripetal {
            magnitude,
            axis_up,
            origin,
        }
    }

    /// Check this force law can be attached to body `index` of `body_count`
    pub fn validate(&self, index: usize, body_count: usize) -> Result<(), SimError> {
        match self {
            ForceModel::Constant { force } => {
                if !force.is_finite() {
                    return Err(SimError::configuration(format!(
                        "body {} has a non-finite constant force",
                        index
                    )));
                }
            }
            ForceModel::InverseSquareGravity { g, sources } => {
                if !g.is_finite() {
                    return Err(SimError::configuration(format!(
                        "body {} has a non-finite gravitational constant",
                        index
                    )));
                }
                if let Sources::Only(list) = sources {
                    for (pos, &source) in list.iter().enumerate() {
                        if source >= body_count {
                            return Err(SimError::configuration(format!(
                                "body {} is attracted by body {}, but only {} bodies exist",
                                index, source, body_count
                            )));
                        }
                        if source == index {
                            return Err(SimError::configuration(format!(
                                "body {} cannot attract itself",
                                index
                            )));
                        }
                        if list[..pos].contains(&source) {
                            return Err(SimError::configuration(format!(
                                "body {} lists body {} as a gravity source twice",
                                index, source
                            )));
                        }
                    }
                }
            }
            ForceModel::Centripetal {
                magnitude,
                axis_up,
                origin,
            } => {
                if !magnitude.is_finite() || !axis_up.is_finite() || !origin.is_finite() {
                    return Err(SimError::configuration(format!(
                        "body {} has a non-finite centripetal force",
                        index
                    )));
                }
            }
        }
        Ok(())
    }

    /// Force this law exerts on `bodies[index]` for the current positions
    pub fn evaluate(&self, bodies: &[Body], index: usize) -> Result<Vec3, SimError> {
        let body = &body_at(bodies, index)?.state;

        match self {
            ForceModel::Constant { force } => Ok(*force),
            ForceModel::InverseSquareGravity { g, sources } => {
                let mut total = Vec3::ZERO;
                let mut attract = |other_idx: usize| -> Result<(), SimError> {
                    let other = &body_at(bodies, other_idx)?.state;
                    let r = other.position - body.position;
                    let dist_sq = r.length_squared();
                    if dist_sq <= f32::EPSILON {
                        return Err(SimError::degenerate(
                            index,
                            format!("coincides with body {}", other_idx),
                        ));
                    }
                    let force_mag = g * body.mass * other.mass / dist_sq;
                    total += r / dist_sq.sqrt() * force_mag;
                    Ok(())
                };

                match sources {
                    Sources::All => {
                        for other_idx in (0..bodies.len()).filter(|&j| j != index) {
                            attract(other_idx)?;
                        }
                    }
                    Sources::Only(list) => {
                        for &other_idx in list {
                            attract(other_idx)?;
                        }
                    }
                }
                Ok(total)
            }
            ForceModel::Centripetal {
                magnitude,
                axis_up,
                origin,
            } => {
                let tangent = axis_up.cross(body.position - *origin);
                if tangent.length_squared() <= f32::EPSILON {
                    return Err(SimError::degenerate(
                        index,
                        "lies on the centripetal axis, tangent is undefined",
                    ));
                }
                Ok(tangent.normalize() * *magnitude)
            }
        }
    }
}

/// A simulated point mass and the force laws acting on it
#[derive(Debug, Clone)]
pub struct Body {
    pub name: String,
    pub state: KinematicState,
    pub forces: Vec<ForceModel>,
    /// Fixed bodies attract others but are never advanced
    pub fixed: bool,
}

impl Body {
    pub fn new(name: impl Into<String>, state: KinematicState) -> Self {
        Self {
            name: name.into(),
            state,
            forces: Vec::new(),
            fixed: false,
        }
    }

    pub fn with_force(mut self, force: ForceModel) -> Self {
        self.forces.push(force);
        self
    }

    pub fn fixed(mut self) -> Self {
        self.fixed = true;
        self
    }

    pub(crate) fn validate(&self, index: usize, body_count: usize) -> Result<(), SimError> {
        validate_mass(index, self.state.mass)?;
        for force in &self.forces {
            force.validate(index, body_count)?;
        }
        Ok(())
    }
}

/// Net force on `bodies[index]`: the sum of all its force laws
pub fn net_force(bodies: &[Body], index: usize) -> Result<Vec3, SimError> {
    let mut total = Vec3::ZERO;
    for force in &body_at(bodies, index)?.forces {
        total += force.evaluate(bodies, index)?;
    }

    if !total.is_finite() {
        return Err(SimError::degenerate(index, "net force is not finite"));
    }
    Ok(total)
}

fn body_at(bodies: &[Body], index: usize) -> Result<&Body, SimError> {
    bodies.get(index).ok_or_else(|| {
        SimError::configuration(format!(
            "no body {} among {} bodies",
            index,
            bodies.len()
        ))
    })
}
