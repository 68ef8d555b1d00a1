//! Commands module
//!
//! Defines all CLI commands, their handlers, and the shared console
//! rendering helpers.

mod deploy;
mod git;
mod pipeline;
mod scaffold;

pub use git::GitCommands;
pub use pipeline::PipelineCommands;

use anyhow::Result;
use clap::Subcommand;
use colored::*;

use atelier_core::domain::narration::{NarrationEntry, NarrationKind};
use atelier_core::domain::step::PlaybackStep;
use atelier_engine::{NarrationSink, StepSink};

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Replay the project-scaffolding installation
    Scaffold {
        /// Uniform delay between steps in milliseconds (overrides the script)
        #[arg(long, env = "ATELIER_SPEED_MS")]
        speed_ms: Option<u64>,
    },
    /// Replay the deployment console
    Deploy {
        /// Uniform delay between steps in milliseconds (overrides the script)
        #[arg(long, env = "ATELIER_SPEED_MS")]
        speed_ms: Option<u64>,
    },
    /// Git exercises
    Git {
        #[command(subcommand)]
        command: GitCommands,
    },
    /// Recruitment pipeline simulation
    Pipeline {
        #[command(subcommand)]
        command: PipelineCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Scaffold { speed_ms } => scaffold::run(speed_ms).await,
        Commands::Deploy { speed_ms } => deploy::run(speed_ms).await,
        Commands::Git { command } => git::handle_git_command(command).await,
        Commands::Pipeline { command } => pipeline::handle_pipeline_command(command).await,
    }
}

/// Print a narration entry
pub(crate) fn print_narration_entry(entry: &NarrationEntry) {
    let kind_str = format!("{:?}", entry.kind).to_uppercase();
    let kind_colored = match entry.kind {
        NarrationKind::Action => kind_str.cyan(),
        NarrationKind::Success => kind_str.green(),
        NarrationKind::Warning => kind_str.yellow(),
        NarrationKind::Error => kind_str.red(),
        NarrationKind::Info => kind_str.blue(),
    };

    let day = entry
        .day
        .map(|d| format!("[day {d}] "))
        .unwrap_or_default();

    println!(
        "{} [{}] {}{}",
        entry.timestamp.format("%H:%M:%S").to_string().dimmed(),
        kind_colored,
        day.dimmed(),
        entry.message
    );
}

/// Narration sink that prints entries as they are recorded
pub(crate) struct EchoNarration;

impl NarrationSink for EchoNarration {
    fn record(&self, entry: NarrationEntry) {
        print_narration_entry(&entry);
    }
}

/// Step sink that renders playback steps to the console
pub(crate) struct ConsolePlayback {
    total: usize,
}

impl ConsolePlayback {
    pub(crate) fn new(total: usize) -> Self {
        Self { total }
    }
}

impl StepSink<PlaybackStep> for ConsolePlayback {
    fn apply(&self, index: usize, step: &PlaybackStep) {
        println!(
            "{} {} {}",
            format!("[{}/{}]", index + 1, self.total).dimmed(),
            "▸".cyan(),
            step.message.bold()
        );
        for line in &step.output {
            println!("      {line}");
        }
        if !step.detail.is_empty() {
            println!("      {}", step.detail.dimmed());
        }
    }
}
