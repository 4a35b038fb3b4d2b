//! # Rotating Cube Demo
//!
//! Opens a window and spins a cube in front of a fixed perspective camera.

use clap::Parser;
use log::{info, warn};
use macroquad::window::Conf;
use scaffold::cli::{initialize_logging, CommonArgs};
use scaffold::{CubeConfig, CubeScene, ScaffoldResult};

/// Command line arguments for the cube demo.
#[derive(Parser, Debug)]
#[command(name = "cube")]
#[command(about = "Render a rotating cube")]
#[command(version)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,
}

fn window_conf() -> Conf {
    let args = Args::parse();
    // Errors resurface in main once logging is up
    args.common
        .resolve::<CubeConfig>()
        .unwrap_or_default()
        .window
        .to_conf()
}

#[macroquad::main(window_conf)]
async fn main() -> ScaffoldResult<()> {
    let args = Args::parse();
    initialize_logging(&args.common.log_level)?;

    info!("{}", CubeScene::startup_message());

    let config: CubeConfig = match args.common.resolve() {
        Ok(config) => config,
        Err(e) => {
            warn!("Rejected cube settings: {}", e);
            return Err(e);
        }
    };

    let mut scene = CubeScene::new(&config);
    scene.run().await
}
