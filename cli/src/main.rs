//! StreamPulse CLI
//!
//! Terminal dashboard for the StreamPulse live-streaming analytics demo.
//! The dashboard runs its own local simulation on a fixed timer; it does not
//! consume the backend push feed.
//!
//! # Usage
//!
//! ```bash
//! streampulse --help
//! streampulse dashboard
//! streampulse dashboard --interval-ms 500 --frames 10
//! streampulse health
//! ```

#![deny(unsafe_code)]

mod render;
mod sim;

use clap::{Parser, Subcommand};
use sim::DashboardSim;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// StreamPulse CLI - live-streaming analytics terminal dashboard
#[derive(Parser)]
#[command(name = "streampulse")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// API server URL
    #[arg(
        short,
        long,
        env = "STREAMPULSE_API_URL",
        default_value = "http://localhost:5000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the analytics dashboard, advancing a local simulation
    Dashboard {
        /// Milliseconds between simulation ticks
        #[arg(long, default_value_t = 2000)]
        interval_ms: u64,

        /// Number of frames to render before exiting (default: run until Ctrl+C)
        #[arg(long)]
        frames: Option<u64>,
    },
    /// Check API server health
    Health,
}

/// Initializes tracing output, defaulting to the `info` level.
///
/// Safe to call more than once; later calls are no-ops.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Dashboard {
            interval_ms,
            frames,
        }) => {
            run_dashboard(Duration::from_millis(interval_ms), frames).await;
        }
        Some(Commands::Health) => {
            println!("Checking health of StreamPulse API at {}...", cli.api_url);
            println!("Health check not yet implemented");
        }
        None => {
            println!("StreamPulse CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

/// Drives the dashboard simulation until the frame budget runs out.
async fn run_dashboard(interval: Duration, frames: Option<u64>) {
    tracing::debug!(?interval, ?frames, "Starting dashboard simulation");

    let mut dashboard = DashboardSim::new();
    let mut rng = rand::thread_rng();
    let mut rendered = 0u64;

    loop {
        // Clear the screen between frames
        print!("\x1B[2J\x1B[H");
        println!("{}", render::render_dashboard(&dashboard, chrono::Utc::now()));

        rendered += 1;
        if frames.is_some_and(|budget| rendered >= budget) {
            break;
        }

        tokio::time::sleep(interval).await;
        dashboard.advance(&mut rng);
    }
}
