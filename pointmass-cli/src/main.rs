mod config;
mod driver;

use clap::{Parser, Subcommand};
use config::{DriverConfig, RunArgs};
use pointmass_core::{IntegratorKind, SceneKind};

#[derive(Parser)]
#[command(name = "pointmass")]
#[command(about = "pointmass - point-mass integrator playground", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a scene and print body positions
    Run(RunArgs),
    /// List the available integrators
    Integrators,
    /// List the available scenes
    Scenes,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => {
            if let Err(e) = run_scene(args) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Integrators => {
            for kind in IntegratorKind::ALL {
                println!("{:<20} {}", kind.name(), kind.description());
            }
        }
        Commands::Scenes => {
            for scene in SceneKind::ALL {
                println!("{}", scene);
            }
        }
    }
}

fn run_scene(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = DriverConfig::try_from(args)?;
    driver::run(&config)
}
