//! Driver configuration assembled from command line flags

use clap::Args;
use pointmass_core::{IntegratorKind, SceneKind, SimError};

/// Flags shared by every scene run
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Scene to simulate: golf-ball, binary-star or star-planet
    #[arg(long, default_value = "golf-ball")]
    pub scene: String,

    /// Integrator: euler, semi-implicit-euler, verlet or rk4
    #[arg(long, short, default_value = "euler")]
    pub integrator: String,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 600)]
    pub frames: usize,

    /// Frames per second; each frame advances the scene by 1 / fps
    #[arg(long, default_value_t = 60.0)]
    pub fps: f32,

    /// Print positions every N frames
    #[arg(long, default_value_t = 60)]
    pub print_every: usize,

    /// Golf ball: z component of the constant force.
    /// Star-planet: magnitude of the tangential push.
    /// Rejected for the binary-star scene.
    #[arg(long, allow_negative_numbers = true)]
    pub force: Option<f32>,

    /// Golf ball mass, or planet mass for the star scenes
    #[arg(long)]
    pub mass: Option<f32>,

    /// Star mass for the star scenes
    #[arg(long)]
    pub star_mass: Option<f32>,

    /// Reset the scene once after this many frames
    #[arg(long)]
    pub reset_after: Option<usize>,
}

/// Validated settings for one driver run
#[derive(Debug, Clone, PartialEq)]
pub struct DriverConfig {
    pub scene: SceneKind,
    pub integrator: IntegratorKind,
    pub frames: usize,
    pub dt: f32,
    pub print_every: usize,
    pub force: Option<f32>,
    pub mass: Option<f32>,
    pub star_mass: Option<f32>,
    pub reset_after: Option<usize>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            scene: SceneKind::GolfBall,
            integrator: IntegratorKind::Euler,
            frames: 600,
            dt: 1.0 / 60.0,
            print_every: 60,
            force: None,
            mass: None,
            star_mass: None,
            reset_after: None,
        }
    }
}

impl TryFrom<RunArgs> for DriverConfig {
    type Error = SimError;

    fn try_from(args: RunArgs) -> Result<Self, Self::Error> {
        if !args.fps.is_finite() || args.fps <= 0.0 {
            return Err(SimError::configuration(format!(
                "fps must be positive, got {}",
                args.fps
            )));
        }

        Ok(Self {
            scene: args.scene.parse()?,
            integrator: args.integrator.parse()?,
            frames: args.frames,
            dt: 1.0 / args.fps,
            print_every: args.print_every.max(1),
            force: args.force,
            mass: args.mass,
            star_mass: args.star_mass,
            reset_after: args.reset_after,
        })
    }
}
