// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "ocean-scene")]
#[command(about = "Ocean scene with sky, fog and first-person movement", long_about = None)]
pub struct Cli {
    /// Disable the egui overlay
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// JSON scene configuration; missing fields take defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value_t = 800)]
    pub width: u32,

    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Override the base movement speed in units per tick
    #[arg(long)]
    pub speed: Option<f32>,

    /// Start presenting to the headset if one is available
    #[arg(long, default_value = "false")]
    pub vr: bool,
}
