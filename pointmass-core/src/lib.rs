pub mod diagnostics;
pub mod engine;
pub mod integrator;
pub mod scenario;
pub mod scenes;

pub use diagnostics::{format_sim_error, SimError};
pub use engine::{net_force, Body, ForceModel, KinematicState, Sources};
pub use glam::Vec3;
pub use integrator::IntegratorKind;
pub use scenario::Scenario;
pub use scenes::{
    binary_star, star_planet, BinaryStarParams, GolfBall, SceneKind, StarPlanetParams,
};
