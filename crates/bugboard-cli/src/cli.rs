use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bugboard",
    about = "Bugboard: in-memory bug tracking over a seeded mock backend",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate and file a new bug report
    Add {
        /// Bug title (5-100 characters after trimming)
        #[arg(long)]
        title: String,

        /// What happened and how to reproduce it (10-1000 characters)
        #[arg(long)]
        description: String,

        /// Initial status: open, in-progress, or resolved
        #[arg(long, default_value = "open")]
        status: String,

        /// Priority: low, medium, or high
        #[arg(long, default_value = "medium")]
        priority: String,

        /// Simulated backend latency in milliseconds
        #[arg(long, default_value_t = 500)]
        latency_ms: u64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List bugs in the seeded session
    List {
        /// Only bugs with this status
        #[arg(long)]
        status: Option<String>,

        /// Only bugs with this priority
        #[arg(long)]
        priority: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update fields on an existing bug
    Update {
        /// Bug identifier
        id: u64,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New status: open, in-progress, or resolved
        #[arg(long)]
        status: Option<String>,

        /// New priority: low, medium, or high
        #[arg(long)]
        priority: Option<String>,

        /// Simulated backend latency in milliseconds
        #[arg(long, default_value_t = 500)]
        latency_ms: u64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a bug
    Delete {
        /// Bug identifier
        id: u64,

        /// Simulated backend latency in milliseconds
        #[arg(long, default_value_t = 500)]
        latency_ms: u64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the field validators against a submission without filing it
    Check {
        /// Title to validate
        #[arg(long, default_value = "")]
        title: String,

        /// Description to validate
        #[arg(long, default_value = "")]
        description: String,

        /// Priority to validate
        #[arg(long, default_value = "medium")]
        priority: String,

        /// Status to validate
        #[arg(long, default_value = "open")]
        status: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the session debug log
    Logs {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
