//! Git command handlers
//!
//! The terminal drill (type the expected command) and the branch sandbox
//! REPL with its scripted workflow simulation.

use std::io::Write as _;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use tokio::io::{AsyncBufReadExt, BufReader};

use atelier_core::catalog;
use atelier_core::domain::branch::{Branch, CommitKind};
use atelier_core::domain::workflow::WorkflowStep;
use atelier_core::drill::{CommandDrill, DrillError};
use atelier_core::store::BranchStore;
use atelier_core::tasks::TaskList;
use atelier_engine::workflow::workflow_sequencer;
use atelier_engine::{Sequencer, WorkflowSink};

use super::EchoNarration;

/// Git subcommands
#[derive(Subcommand)]
pub enum GitCommands {
    /// Terminal exercise: type each expected git command
    Drill,
    /// Interactive branch sandbox (branch, commit, merge, scripted workflow)
    Sandbox {
        /// Delay between scripted workflow actions in milliseconds
        #[arg(long, default_value_t = catalog::WORKFLOW_STEP_DELAY_MS)]
        speed_ms: u64,
    },
}

/// Handle git commands
pub async fn handle_git_command(command: GitCommands) -> Result<()> {
    match command {
        GitCommands::Drill => run_drill().await,
        GitCommands::Sandbox { speed_ms } => run_sandbox(speed_ms).await,
    }
}

/// Run the expected-command terminal exercise
async fn run_drill() -> Result<()> {
    let mut drill = CommandDrill::new(catalog::git_drill_steps());

    println!("{}", "Git terminal exercise".bold());
    println!(
        "{}",
        "Type each expected command ('hint' for help, 'quit' to leave).".dimmed()
    );
    println!();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let Some((description, command, hint)) = drill
            .current_step()
            .map(|s| (s.description.clone(), s.command.clone(), s.hint.clone()))
        else {
            break;
        };

        println!(
            "{} {}",
            format!("Step {}/{}:", drill.index() + 1, drill.len()).bold(),
            description
        );
        println!("  {} {}", "expected:".dimmed(), command.cyan());
        print!("$ ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match line.trim() {
            "quit" => return Ok(()),
            "hint" => {
                println!("  {}", hint.yellow());
                println!();
                continue;
            }
            _ => {}
        }

        match drill.submit(&line) {
            Ok(advance) => {
                if let Some((success, output)) = advance.lines.split_last() {
                    for out in output {
                        println!("{out}");
                    }
                    println!("{}", success.green());
                }
            }
            Err(DrillError::WrongCommand { expected }) => {
                println!("{}", format!("✗ Unrecognized command, try '{expected}'").red());
            }
            Err(err) => {
                println!("{}", err.to_string().red());
            }
        }
        println!();
    }

    if drill.completed() {
        println!(
            "{}",
            "🎉 Exercise complete! Your project is on GitHub.".green().bold()
        );
    }

    Ok(())
}

/// Run the interactive branch sandbox
async fn run_sandbox(speed_ms: u64) -> Result<()> {
    let store = Arc::new(Mutex::new(BranchStore::new()));
    let narration = Arc::new(EchoNarration);
    let mut tasks = catalog::git_tasks();

    let mut active_branch = "main".to_string();
    let mut active_kind = CommitKind::Feature;
    let mut simulation: Option<Sequencer<WorkflowStep>> = None;
    let mut tasks_announced = false;

    println!("{}", "Branch sandbox".bold());
    print_sandbox_help();
    print_tasks(&tasks);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{} ", format!("({active_branch})>").cyan());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        match command {
            "quit" | "exit" => break,
            "help" => print_sandbox_help(),
            "tasks" => print_tasks(&tasks),
            "show" => print_branches(&store.lock().unwrap()),
            "use" => match args.first() {
                Some(name) if store.lock().unwrap().find(name).is_some() => {
                    active_branch = (*name).to_string();
                    println!("Active branch: {}", active_branch.cyan());
                }
                Some(name) => println!("{}", format!("no branch named '{name}'").red()),
                None => println!("usage: use <branch>"),
            },
            "kind" => match args.first().and_then(|label| CommitKind::parse(label)) {
                Some(kind) => {
                    active_kind = kind;
                    println!("Commit kind: {active_kind}");
                }
                None => println!("usage: kind <feature|bugfix|hotfix>"),
            },
            "branch" => match args.first() {
                Some(name) => {
                    let result = store
                        .lock()
                        .unwrap()
                        .create_branch(name, Some(active_branch.as_str()));
                    match result {
                        Ok(()) => {
                            println!(
                                "{}",
                                format!("✨ Branch {name} created from {active_branch}").green()
                            );
                            if *name == "feature/header" {
                                complete_task(&mut tasks, 1);
                            }
                        }
                        Err(err) => println!("{}", format!("❌ {err}").red()),
                    }
                }
                None => println!("usage: branch <name>"),
            },
            "commit" => {
                let message = args.join(" ");
                let result = store
                    .lock()
                    .unwrap()
                    .commit(&active_branch, &message, Some(active_kind))
                    .map(|commit| commit.id);
                match result {
                    Ok(_) => {
                        println!(
                            "{}",
                            format!("✨ Commit added on branch {active_branch}").green()
                        );
                        if active_branch == "feature/header" {
                            complete_task(&mut tasks, 2);
                        }
                    }
                    Err(err) => println!("{}", format!("❌ {err}").red()),
                }
            }
            "merge" => match args.first() {
                Some(source) => {
                    let target = args.get(1).copied().unwrap_or("main");
                    let result = store.lock().unwrap().merge(source, target);
                    match result {
                        Ok(0) => println!(
                            "{}",
                            format!("nothing to merge: unknown branch in {source} -> {target}")
                                .yellow()
                        ),
                        Ok(count) => {
                            println!(
                                "{}",
                                format!("🎉 Merged {count} commit(s) from {source} into {target}")
                                    .green()
                            );
                            if *source == "feature/header" && target == "main" {
                                complete_task(&mut tasks, 3);
                            }
                        }
                        Err(err) => println!("{}", format!("❌ {err}").red()),
                    }
                }
                None => println!("usage: merge <source> [target]"),
            },
            "simulate" => {
                let mut sequencer = workflow_sequencer(catalog::workflow_script(), Some(speed_ms));
                let sink = Arc::new(WorkflowSink::new(Arc::clone(&store), narration.clone()));
                sequencer.start(sink);
                // Replacing a running simulation cancels it.
                simulation = Some(sequencer);
                println!("⏳ Workflow simulation started ('stop' to cancel).");
            }
            "stop" => match simulation.take() {
                Some(mut sequencer) => {
                    sequencer.stop();
                    println!("⏹ Simulation stopped.");
                }
                None => println!("No simulation running."),
            },
            other => println!("unknown command '{other}' (try 'help')"),
        }

        if !tasks_announced && tasks.all_done() {
            println!("{}", "All tasks done, well played!".green().bold());
            tasks_announced = true;
        }
    }

    Ok(())
}

/// Mark a task done and announce it, once
fn complete_task(tasks: &mut TaskList, id: u32) {
    let open = tasks.tasks().iter().any(|t| t.id == id && !t.done);
    if open {
        tasks.complete(id);
        if let Some(task) = tasks.tasks().iter().find(|t| t.id == id) {
            println!("{}", format!("✓ Task done: {}", task.description).green());
        }
    }
}

/// Print the sandbox checklist
fn print_tasks(tasks: &TaskList) {
    if tasks.tasks().is_empty() {
        return;
    }
    println!("{}", "Tasks:".bold());
    for task in tasks.tasks() {
        let mark = if task.done { "✓".green() } else { "·".dimmed() };
        println!("  {} {}", mark, task.description);
        if !task.done {
            println!("      {}", task.hint.dimmed());
        }
    }
}

/// Print every branch with its commit history
fn print_branches(store: &BranchStore) {
    for branch in store.branches() {
        let origin = branch
            .parent
            .as_ref()
            .map(|p| format!(" (from {p})"))
            .unwrap_or_default();
        println!("  {} {}{}", "▸".cyan(), branch.name.bold(), origin.dimmed());
        print_commits(branch);
    }
}

fn print_commits(branch: &Branch) {
    for commit in &branch.commits {
        let short_id: String = commit.id.to_string().chars().take(8).collect();
        let kind = match commit.kind {
            Some(CommitKind::Feature) => " [feature]".blue(),
            Some(CommitKind::Bugfix) => " [bugfix]".yellow(),
            Some(CommitKind::Hotfix) => " [hotfix]".red(),
            None => "".normal(),
        };
        println!("    {}{} {}", short_id.dimmed(), kind, commit.message);
    }
}

/// Print the sandbox command reference
fn print_sandbox_help() {
    println!("{}", "Commands:".bold());
    println!("  use <branch>               select the active branch");
    println!("  branch <name>              create a branch from the active one");
    println!("  kind <feature|bugfix|hotfix>  select the commit kind");
    println!("  commit <message>           commit on the active branch");
    println!("  merge <source> [target]    copy a branch's commits (target: main)");
    println!("  show                       print every branch and commit");
    println!("  tasks                      print the checklist");
    println!("  simulate                   replay the scripted workflow");
    println!("  stop                       cancel the running simulation");
    println!("  quit                       leave the sandbox");
}
