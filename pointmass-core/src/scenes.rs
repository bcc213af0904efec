//! Preset scenes
//!
//! - golf ball: one ball under constant gravity, compared against the
//!   analytic parabola and frozen once it lands
//! - binary star: two stars orbiting each other with a planet pulled by both
//! - star plus planet: two fixed stars and a planet pushed along a circle

use crate::diagnostics::{validate_dt, SimError};
use crate::engine::{Body, ForceModel, KinematicState};
use crate::integrator::IntegratorKind;
use crate::scenario::Scenario;
use glam::Vec3;
use log::debug;
use std::fmt;
use std::str::FromStr;

/// Gravitational constant used by the star scenes
pub const GRAVITATIONAL_CONSTANT: f32 = 6.67e-11;

pub const GOLF_BALL_START: Vec3 = Vec3::new(-6.0, 1.0, 12.0);
/// Start of the analytic comparison track
pub const GOLF_BALL_TRUE_OFFSET: Vec3 = Vec3::new(6.0, 1.0, 12.0);
pub const GOLF_BALL_FORCE: Vec3 = Vec3::new(0.0, 0.0, -10.0);
pub const GOLF_BALL_MASS: f32 = 1.0;
/// Height at which the ball counts as landed
pub const LANDING_HEIGHT: f32 = -12.0;

pub const PLANET_MASS: f32 = 1.0e11;
pub const STAR_MASS: f32 = 1.0e13;
/// Default tangential push for the star plus planet scene
pub const PLANET_TANGENTIAL_FORCE: f32 = 6.0e11;

/// The three preset scenes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SceneKind {
    #[default]
    GolfBall,
    BinaryStar,
    StarPlanet,
}

impl SceneKind {
    pub const ALL: [SceneKind; 3] = [
        SceneKind::GolfBall,
        SceneKind::BinaryStar,
        SceneKind::StarPlanet,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SceneKind::GolfBall => "golf-ball",
            SceneKind::BinaryStar => "binary-star",
            SceneKind::StarPlanet => "star-planet",
        }
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SceneKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "golf-ball" | "golf" => Ok(SceneKind::GolfBall),
            "binary-star" | "bstar" => Ok(SceneKind::BinaryStar),
            "star-planet" => Ok(SceneKind::StarPlanet),
            other => Err(SimError::configuration(format!(
                "unknown scene '{}', expected one of: golf-ball, binary-star, star-planet",
                other
            ))),
        }
    }
}

/// A golf ball integrated numerically next to its exact trajectory
#[derive(Debug, Clone)]
pub struct GolfBall {
    scenario: Scenario,
    force: Vec3,
    true_offset: Vec3,
}

impl GolfBall {
    pub fn new(integrator: IntegratorKind) -> Result<Self, SimError> {
        Self::with_parameters(integrator, GOLF_BALL_FORCE, GOLF_BALL_MASS)
    }

    pub fn with_parameters(
        integrator: IntegratorKind,
        force: Vec3,
        mass: f32,
    ) -> Result<Self, SimError> {
        let ball = Body::new("ball", KinematicState::new(GOLF_BALL_START, Vec3::ZERO, mass))
            .with_force(ForceModel::constant(force));
        Ok(Self {
            scenario: Scenario::new(vec![ball], integrator)?,
            force,
            true_offset: GOLF_BALL_TRUE_OFFSET,
        })
    }

    /// Advance the ball unless it has already landed
    pub fn step(&mut self, dt: f32) -> Result<(), SimError> {
        validate_dt(dt)?;
        if self.landed() {
            debug!("ball has landed, step of {} ignored", dt);
            return Ok(());
        }
        self.scenario.step(dt)
    }

    pub fn reset(&mut self) {
        self.scenario.reset();
    }

    /// True once the integrated ball reaches `LANDING_HEIGHT`
    pub fn landed(&self) -> bool {
        self.position().z <= LANDING_HEIGHT
    }

    /// Integrated position
    pub fn position(&self) -> Vec3 {
        self.scenario.bodies()[0].state.position
    }

    pub fn velocity(&self) -> Vec3 {
        self.scenario.bodies()[0].state.velocity
    }

    /// Exact position for the same force after the elapsed simulated time
    pub fn true_position(&self) -> Vec3 {
        let t = self.scenario.elapsed();
        let mass = self.scenario.bodies()[0].state.mass;
        self.true_offset + 0.5 * (self.force / mass) * (t * t)
    }

    pub fn force(&self) -> Vec3 {
        self.force
    }

    /// Replace the constant force; the analytic track follows it
    pub fn set_force(&mut self, force: Vec3) -> Result<(), SimError> {
        self.scenario.set_forces(0, vec![ForceModel::constant(force)])?;
        self.force = force;
        Ok(())
    }

    pub fn set_mass(&mut self, mass: f32) -> Result<(), SimError> {
        self.scenario.set_mass(0, mass)
    }

    pub fn set_integrator(&mut self, integrator: IntegratorKind) {
        self.scenario.set_integrator(integrator);
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }
}

/// Masses for the binary star scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryStarParams {
    pub planet_mass: f32,
    pub star1_mass: f32,
    pub star2_mass: f32,
}

impl Default for BinaryStarParams {
    fn default() -> Self {
        Self {
            planet_mass: PLANET_MASS,
            star1_mass: STAR_MASS,
            star2_mass: STAR_MASS,
        }
    }
}

/// Planet (body 0) pulled by two stars (bodies 1 and 2) that only feel
/// each other
pub fn binary_star(
    integrator: IntegratorKind,
    params: BinaryStarParams,
) -> Result<Scenario, SimError> {
    let g = GRAVITATIONAL_CONSTANT;

    let planet = Body::new(
        "planet",
        KinematicState::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, params.planet_mass)
            .with_previous_position(Vec3::new(2.0, 0.0, 10.0)),
    )
    .with_force(ForceModel::gravity_from(g, vec![1, 2]));

    let star1 = Body::new(
        "star 1",
        KinematicState::new(Vec3::new(3.0, 0.0, 0.0), Vec3::ZERO, params.star1_mass)
            .with_previous_position(Vec3::new(3.0, 0.0, 1.0)),
    )
    .with_force(ForceModel::gravity_from(g, vec![2]));

    let star2 = Body::new(
        "star 2",
        KinematicState::new(Vec3::new(-3.0, 0.0, 0.0), Vec3::ZERO, params.star2_mass)
            .with_previous_position(Vec3::new(-3.0, 0.0, -1.0)),
    )
    .with_force(ForceModel::gravity_from(g, vec![1]));

    Scenario::new(vec![planet, star1, star2], integrator)
}

/// Parameters for the star plus planet scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarPlanetParams {
    pub planet_mass: f32,
    pub star_mass: f32,
    pub tangential_force: f32,
}

impl Default for StarPlanetParams {
    fn default() -> Self {
        Self {
            planet_mass: PLANET_MASS,
            star_mass: STAR_MASS,
            tangential_force: PLANET_TANGENTIAL_FORCE,
        }
    }
}

/// Planet (body 0) between two fixed stars, pushed tangentially about the
/// origin around the y axis
pub fn star_planet(
    integrator: IntegratorKind,
    params: StarPlanetParams,
) -> Result<Scenario, SimError> {
    let planet = Body::new(
        "planet",
        KinematicState::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, params.planet_mass),
    )
    .with_force(ForceModel::gravity(GRAVITATIONAL_CONSTANT))
    .with_force(ForceModel::centripetal(
        params.tangential_force,
        Vec3::Y,
        Vec3::ZERO,
    ));

    let star1 = Body::new(
        "star 1",
        KinematicState::new(Vec3::new(3.0, 0.0, 0.0), Vec3::ZERO, params.star_mass),
    )
    .fixed();
    let star2 = Body::new(
        "star 2",
        KinematicState::new(Vec3::new(-3.0, 0.0, 0.0), Vec3::ZERO, params.star_mass),
    )
    .fixed();

    Scenario::new(vec![planet, star1, star2], integrator)
}
