//! Pipeline command handlers
//!
//! The recruitment day-cycle simulation: a one-shot run streaming its
//! narration, and an interactive roster sandbox with the simulator running
//! in the background.

use std::io::Write as _;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use atelier_core::catalog;
use atelier_core::domain::candidate::{Roster, Stage};
use atelier_core::stats::RosterStats;
use atelier_engine::{DayCycleSimulator, NarrationSink, Sampler, SeededSampler, SimulatorConfig};

use super::EchoNarration;

/// Pipeline subcommands
#[derive(Subcommand)]
pub enum PipelineCommands {
    /// Run the day-cycle simulation to its bound
    Simulate {
        /// Day bound of the simulation
        #[arg(long)]
        days: Option<u32>,

        /// Tick period in milliseconds
        #[arg(long)]
        tick_ms: Option<u64>,

        /// Fixed seed: same seed, same simulation
        #[arg(long)]
        seed: Option<u64>,

        /// Print the final recap as JSON
        #[arg(long)]
        json: bool,
    },
    /// Interactive roster sandbox with a background simulator
    Sandbox {
        /// Day bound of the simulation
        #[arg(long)]
        days: Option<u32>,

        /// Tick period in milliseconds
        #[arg(long)]
        tick_ms: Option<u64>,

        /// Fixed seed: same seed, same simulation
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Handle pipeline commands
pub async fn handle_pipeline_command(command: PipelineCommands) -> Result<()> {
    match command {
        PipelineCommands::Simulate {
            days,
            tick_ms,
            seed,
            json,
        } => run_simulate(days, tick_ms, seed, json).await,
        PipelineCommands::Sandbox {
            days,
            tick_ms,
            seed,
        } => run_roster_sandbox(days, tick_ms, seed).await,
    }
}

/// Final recap of a simulation run
#[derive(Serialize)]
struct SimulationRecap {
    days: u32,
    stats: RosterStats,
}

/// Build the simulator configuration from environment and flags
fn build_config(
    days: Option<u32>,
    tick_ms: Option<u64>,
    seed: Option<u64>,
) -> Result<SimulatorConfig> {
    let mut config = SimulatorConfig::from_env();
    if let Some(days) = days {
        config.max_days = days;
    }
    if let Some(ms) = tick_ms {
        config.tick_interval = Duration::from_millis(ms);
    }
    if let Some(seed) = seed {
        config.seed = Some(seed);
    }
    config.validate()?;
    Ok(config)
}

/// The sampler the configuration asks for
fn sampler_for(config: &SimulatorConfig) -> Box<dyn Sampler> {
    match config.seed {
        Some(seed) => Box::new(SeededSampler::new(seed)),
        None => Box::new(SeededSampler::from_entropy()),
    }
}

/// Run the simulation to its bound and print the recap
async fn run_simulate(
    days: Option<u32>,
    tick_ms: Option<u64>,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let config = build_config(days, tick_ms, seed)?;
    debug!(
        "simulating up to {} days every {:?}",
        config.max_days, config.tick_interval
    );

    let sampler = sampler_for(&config);
    let mut simulator = DayCycleSimulator::new(
        config,
        catalog::seed_roster(),
        sampler,
        Arc::new(EchoNarration),
    );

    simulator.start();
    simulator.join().await;

    let roster = simulator.roster();
    let roster = roster.lock().unwrap();
    let recap = SimulationRecap {
        days: simulator.state().day,
        stats: RosterStats::collect(&roster),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&recap)?);
    } else {
        println!();
        print_roster(&roster);
        print_stats(&recap.stats);
    }

    Ok(())
}

/// Run the interactive roster sandbox
async fn run_roster_sandbox(
    days: Option<u32>,
    tick_ms: Option<u64>,
    seed: Option<u64>,
) -> Result<()> {
    let config = build_config(days, tick_ms, seed)?;
    let sampler = sampler_for(&config);
    let narration = Arc::new(EchoNarration);
    let mut simulator = DayCycleSimulator::new(
        config,
        catalog::seed_roster(),
        sampler,
        narration.clone(),
    );

    println!("{}", "Recruitment pipeline sandbox".bold());
    print_sandbox_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{} ", "pipeline>".cyan());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        match command {
            "quit" | "exit" => break,
            "help" => print_sandbox_help(),
            "start" => {
                simulator.start();
                println!("▶ Simulation running (day resets to 0).");
            }
            "stop" => {
                simulator.stop();
                println!("⏹ Simulation stopped.");
            }
            "day" => {
                let state = simulator.state();
                let status = if state.running { "running" } else { "stopped" };
                println!(
                    "Day {} of {} ({status})",
                    state.day,
                    simulator.config().max_days
                );
            }
            "speed" => match rest.parse::<u64>() {
                Ok(ms) if ms > 0 => {
                    simulator.set_tick_interval(Duration::from_millis(ms));
                    if simulator.state().running {
                        simulator.start();
                        println!("Tick period set to {ms} ms; simulation restarted from day 0.");
                    } else {
                        println!("Tick period set to {ms} ms; applies on the next start.");
                    }
                }
                _ => println!("usage: speed <milliseconds>"),
            },
            "add" => {
                let fields: Vec<&str> = rest.split(';').map(str::trim).collect();
                match fields.as_slice() {
                    [name, role, years] => {
                        let years: u32 = years.parse().unwrap_or(0);
                        let roster = simulator.roster();
                        let mut roster = roster.lock().unwrap();
                        match roster.add(name, role, years) {
                            Ok(candidate) => narration.success(format!(
                                "✨ New candidate: {} ({})",
                                candidate.name, candidate.role
                            )),
                            Err(err) => println!("{}", format!("❌ {err}").red()),
                        }
                    }
                    _ => println!("usage: add <name>;<role>;<years>"),
                }
            }
            "advance" => {
                let roster = simulator.roster();
                let mut roster = roster.lock().unwrap();
                match roster.advance(rest) {
                    Ok(Some(stage)) => narration.action(format!("📈 {rest} -> {stage}")),
                    Ok(None) => narration.warning(format!("{rest} is already hired")),
                    Err(err) => println!("{}", format!("❌ {err}").red()),
                }
            }
            "remove" => {
                let roster = simulator.roster();
                let mut roster = roster.lock().unwrap();
                match roster.remove(rest) {
                    Ok(candidate) => narration.warning(format!("❌ Removed: {}", candidate.name)),
                    Err(err) => println!("{}", format!("❌ {err}").red()),
                }
            }
            "roster" => {
                let roster = simulator.roster();
                let roster = roster.lock().unwrap();
                print_roster(&roster);
            }
            "stats" => {
                let roster = simulator.roster();
                let roster = roster.lock().unwrap();
                print_stats(&RosterStats::collect(&roster));
            }
            other => println!("unknown command '{other}' (try 'help')"),
        }
    }

    simulator.stop();
    Ok(())
}

/// Print the roster as a table
fn print_roster(roster: &Roster) {
    println!("{}", format!("Roster ({} candidate(s)):", roster.len()).bold());
    for candidate in roster.iter() {
        println!(
            "  {:<18} {:<20} {:<10} {} yr  {}",
            candidate.name,
            candidate.role.dimmed(),
            colorize_stage(candidate.stage),
            candidate.experience_years,
            candidate.skills.join(", ").dimmed()
        );
    }
}

/// Print aggregate stats
fn print_stats(stats: &RosterStats) {
    println!();
    println!("{}", "Stats:".bold());
    println!("  Total:        {}", stats.total);
    println!("  In progress:  {}", stats.in_progress);
    println!("  Interviewing: {}", stats.interviewing);
    println!("  Hired:        {}", format!("{}", stats.hired).green());
    println!("  By role:");
    let mut by_role: Vec<_> = stats.by_role.iter().collect();
    by_role.sort();
    for (role, count) in by_role {
        println!("    {role}: {count}");
    }
}

/// Colorize a pipeline stage for display
fn colorize_stage(stage: Stage) -> colored::ColoredString {
    let label = stage.label();
    match stage {
        Stage::New => label.yellow(),
        Stage::Interview => label.cyan(),
        Stage::Offer => label.magenta(),
        Stage::Hired => label.green(),
    }
}

/// Print the sandbox command reference
fn print_sandbox_help() {
    println!("{}", "Commands:".bold());
    println!("  start                      run the simulation from day 0");
    println!("  stop                       stop the simulation");
    println!("  day                        print the current simulated day");
    println!("  speed <ms>                 change the tick period");
    println!("  add <name>;<role>;<years>  add a candidate");
    println!("  advance <name>             move a candidate one stage forward");
    println!("  remove <name>              remove a candidate");
    println!("  roster                     print the roster");
    println!("  stats                      print aggregate stats");
    println!("  quit                       leave the sandbox");
}
