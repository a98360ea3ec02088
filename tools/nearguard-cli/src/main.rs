//! NearGuard CLI — Evaluate sensor samples and run simulated sessions.
//!
//! Usage:
//!   nearguard eval [OPTIONS]       Evaluate a pose and/or motion sample
//!   nearguard config [--init]      Show or initialize configuration
//!   nearguard monitor [OPTIONS]    Run a simulated monitoring session

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "nearguard",
    about = "Screen-proximity warnings from face tracking and device motion",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a single pose and/or motion sample
    Eval {
        /// Tracked z-translation of the face in meters; omit to evaluate a
        /// frame with tracking lost
        #[arg(long, allow_negative_numbers = true)]
        pose_z: Option<f64>,

        /// User acceleration sample as three values (x y z, in g)
        #[arg(long, num_args = 3, allow_negative_numbers = true)]
        accel: Option<Vec<f64>>,
    },

    /// Show or initialize the on-disk configuration
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },

    /// Run a simulated monitoring session with synthetic sensor sources
    Monitor {
        /// Session length in seconds
        #[arg(long, default_value = "10.0")]
        duration_secs: f64,

        /// How fast the simulated face approaches the screen (cm/s)
        #[arg(long, default_value = "4.0")]
        approach_rate: f64,

        /// Pose frames per second from the simulated tracking source
        #[arg(long, default_value = "30")]
        frame_rate: u32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    nearguard_common::logging::init_logging(&nearguard_common::config::LoggingConfig {
        level: log_level.to_string(),
        json: false,
        file: None,
    });

    match cli.command {
        Commands::Eval { pose_z, accel } => commands::eval::run(pose_z, accel),
        Commands::Config { init } => commands::config::run(init),
        Commands::Monitor {
            duration_secs,
            approach_rate,
            frame_rate,
        } => commands::monitor::run(duration_secs, approach_rate, frame_rate).await,
    }
}
