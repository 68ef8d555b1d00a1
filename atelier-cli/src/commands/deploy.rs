//! Deploy command handler
//!
//! Replays the deployment console sequence.

use std::sync::Arc;

use anyhow::Result;
use colored::*;

use atelier_core::catalog;
use atelier_engine::Sequencer;

use super::ConsolePlayback;

/// Run the deployment playback
pub async fn run(speed_ms: Option<u64>) -> Result<()> {
    println!("{}", "Deploying the application".bold());
    println!("{}", "─".repeat(60).dimmed());

    let mut steps = catalog::deployment_steps();
    if let Some(ms) = speed_ms {
        for step in &mut steps {
            step.delay_ms = ms;
        }
    }
    let total = steps.len();

    let mut sequencer = Sequencer::new(steps);
    sequencer.start(Arc::new(ConsolePlayback::new(total)));
    sequencer.join().await;

    println!("{}", "─".repeat(60).dimmed());
    println!("{}", "✓ Your site is live.".green().bold());

    Ok(())
}
