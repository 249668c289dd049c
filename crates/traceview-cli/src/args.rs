use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "traceview")]
#[command(about = "Render agent execution traces as shareable HTML timelines", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a config file (defaults to ./traceview.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a trace file as an HTML timeline
    Render {
        /// Trace document (JSON file, or `-` for stdin)
        file: PathBuf,

        /// Prepend a computed metrics banner when the document carries none
        #[arg(long)]
        metrics: bool,

        /// Cap input/output payload dumps at this many chars
        #[arg(long)]
        truncate: Option<usize>,

        /// Emit a full standalone page instead of a bare fragment
        #[arg(long)]
        page: bool,

        /// Id of the display region wrapping the timeline
        #[arg(long)]
        region: Option<String>,

        /// Write output here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Print aggregate statistics for a trace file
    Stats {
        /// Trace document (JSON file, or `-` for stdin)
        file: PathBuf,
    },

    /// Emit a sample trace document
    Sample {
        /// Number of steps to generate
        #[arg(long, default_value = "4")]
        steps: usize,

        /// Write output here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}
