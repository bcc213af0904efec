//! Headless scene driver
//!
//! Plays the role of the render loop: builds the configured scene, steps it
//! once per frame and prints body positions instead of drawing them.

use crate::config::DriverConfig;
use glam::Vec3;
use log::info;
use pointmass_core::scenes::{
    binary_star, star_planet, BinaryStarParams, GolfBall, StarPlanetParams,
};
use pointmass_core::{format_sim_error, Scenario, SceneKind, SimError};

/// A scene as seen by the frame loop
pub enum SceneRunner {
    Golf(GolfBall),
    Bodies(Scenario),
}

impl SceneRunner {
    pub fn build(config: &DriverConfig) -> Result<Self, SimError> {
        let runner = match config.scene {
            SceneKind::GolfBall => {
                let mut ball = GolfBall::new(config.integrator)?;
                if let Some(z) = config.force {
                    ball.set_force(Vec3::new(0.0, 0.0, z))?;
                }
                if let Some(mass) = config.mass {
                    ball.set_mass(mass)?;
                }
                SceneRunner::Golf(ball)
            }
            SceneKind::BinaryStar => {
                if config.force.is_some() {
                    return Err(SimError::configuration(
                        "--force has no effect on the binary-star scene",
                    ));
                }
                let mut params = BinaryStarParams::default();
                if let Some(mass) = config.mass {
                    params.planet_mass = mass;
                }
                if let Some(mass) = config.star_mass {
                    params.star1_mass = mass;
                    params.star2_mass = mass;
                }
                SceneRunner::Bodies(binary_star(config.integrator, params)?)
            }
            SceneKind::StarPlanet => {
                let mut params = StarPlanetParams::default();
                if let Some(force) = config.force {
                    params.tangential_force = force;
                }
                if let Some(mass) = config.mass {
                    params.planet_mass = mass;
                }
                if let Some(mass) = config.star_mass {
                    params.star_mass = mass;
                }
                SceneRunner::Bodies(star_planet(config.integrator, params)?)
            }
        };
        Ok(runner)
    }

    pub fn step(&mut self, dt: f32) -> Result<(), SimError> {
        match self {
            SceneRunner::Golf(ball) => ball.step(dt),
            SceneRunner::Bodies(scenario) => scenario.step(dt),
        }
    }

    pub fn reset(&mut self) {
        match self {
            SceneRunner::Golf(ball) => ball.reset(),
            SceneRunner::Bodies(scenario) => scenario.reset(),
        }
    }

    pub fn elapsed(&self) -> f32 {
        match self {
            SceneRunner::Golf(ball) => ball.scenario().elapsed(),
            SceneRunner::Bodies(scenario) => scenario.elapsed(),
        }
    }

    /// One line per tracked body
    pub fn report(&self) -> Vec<String> {
        match self {
            SceneRunner::Golf(ball) => {
                let mut lines = vec![
                    format!("ball = {}", format_vec(ball.position())),
                    format!("true = {}", format_vec(ball.true_position())),
                ];
                if ball.landed() {
                    lines.push("ball has landed".to_string());
                }
                lines
            }
            SceneRunner::Bodies(scenario) => scenario
                .bodies()
                .iter()
                .map(|body| format!("{} = {}", body.name, format_vec(body.state.position)))
                .collect(),
        }
    }
}

fn format_vec(v: Vec3) -> String {
    format!("({:.4}, {:.4}, {:.4})", v.x, v.y, v.z)
}

/// Run the frame loop described by `config`, printing to stdout
pub fn run(config: &DriverConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut runner = SceneRunner::build(config)?;
    info!(
        "running {} with {} for {} frames (dt = {})",
        config.scene, config.integrator, config.frames, config.dt
    );

    print_frame(&runner, 0);
    for frame in 1..=config.frames {
        runner
            .step(config.dt)
            .map_err(|e| format_sim_error(&e, Some(frame)))?;

        if config.reset_after == Some(frame) {
            info!("resetting scene after frame {}", frame);
            runner.reset();
        }

        if frame % config.print_every == 0 || frame == config.frames {
            print_frame(&runner, frame);
        }
    }

    Ok(())
}

fn print_frame(runner: &SceneRunner, frame: usize) {
    println!("frame {} (t = {:.3})", frame, runner.elapsed());
    for line in runner.report() {
        println!("  {}", line);
    }
}
