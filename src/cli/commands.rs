use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

pub const DEFAULT_VERIFY_URL: &str = "https://kindred-echo-latest.vercel.app/api/echo";
pub const DEFAULT_VERIFY_TEXT: &str = "Post-deploy check: Reflect on today's progress.";
pub const DEFAULT_EXPECT_MODEL: &str = "gpt-4o";

/// `Kindred Echo` - empathetic reflections for a private journal.
#[derive(Parser, Debug)]
#[command(name = "kindred-echo")]
#[command(version)]
#[command(about = "Reflection service for the Kindred Echo journal.", long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.kindred-echo/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log verbosity (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: Level,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve /api/echo and /api/echo/health
    Serve {
        /// Port to listen on (use 0 for random available port)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
    },

    /// Show credential presence and the active mode
    Status {
        /// Print the same JSON the health endpoint returns
        #[arg(long)]
        json: bool,
    },

    /// Run the reflection pipeline once and print the response
    Reflect {
        /// Journal text to reflect on
        text: String,

        /// Ask for debug detail (only honoured when debug is enabled)
        #[arg(long)]
        debug: bool,
    },

    /// Check that a deployed endpoint answers with a live model
    Verify {
        /// Full URL of the deployed echo endpoint
        #[arg(long, default_value = DEFAULT_VERIFY_URL)]
        url: String,

        /// Text to submit
        #[arg(long, default_value = DEFAULT_VERIFY_TEXT)]
        text: String,

        /// Substring the reported model must contain
        #[arg(long, default_value = DEFAULT_EXPECT_MODEL)]
        expect_model: String,
    },
}
