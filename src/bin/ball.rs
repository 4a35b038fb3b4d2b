//! # Movable Ball Demo
//!
//! Opens a window with a circle that follows the arrow keys.

use clap::Parser;
use log::{info, warn};
use macroquad::window::Conf;
use scaffold::cli::{initialize_logging, CommonArgs};
use scaffold::{BallConfig, BallScene, ScaffoldResult};

/// Command line arguments for the ball demo.
#[derive(Parser, Debug)]
#[command(name = "ball")]
#[command(about = "Move a circle around with the arrow keys")]
#[command(version)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    /// Keep the circle inside the window
    #[arg(long)]
    clamp: bool,
}

impl Args {
    fn resolve(&self) -> ScaffoldResult<BallConfig> {
        let mut config: BallConfig = self.common.resolve()?;
        config.clamp_to_window |= self.clamp;
        Ok(config)
    }
}

fn window_conf() -> Conf {
    // Errors resurface in main once logging is up
    Args::parse().resolve().unwrap_or_default().window.to_conf()
}

#[macroquad::main(window_conf)]
async fn main() -> ScaffoldResult<()> {
    let args = Args::parse();
    initialize_logging(&args.common.log_level)?;

    info!("{}", BallScene::startup_message());

    let config = match args.resolve() {
        Ok(config) => config,
        Err(e) => {
            warn!("Rejected ball settings: {}", e);
            return Err(e);
        }
    };

    let mut scene = BallScene::new(&config);
    scene.run().await
}
