//! Scaffold command handler
//!
//! Replays the project-scaffolding installation log, then prints the
//! resulting project structure recap.

use std::sync::Arc;

use anyhow::Result;
use colored::*;

use atelier_core::catalog;
use atelier_engine::Sequencer;

use super::ConsolePlayback;

/// Run the scaffolding playback
pub async fn run(speed_ms: Option<u64>) -> Result<()> {
    println!("{}", "Scaffolding a new project".bold());
    println!("{}", "─".repeat(60).dimmed());

    let mut steps = catalog::scaffold_steps();
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
    println!("{}", format!("{total} / {total} steps completed").green());
    println!();
    print_structure_recap();

    Ok(())
}

/// Print the generated project layout
fn print_structure_recap() {
    println!("{}", "Project structure:".bold());

    println!("  {}", "Pages: routes map onto the filesystem".cyan());
    println!("    /app/page.tsx           {}", "site home page".dimmed());
    println!("    /app/[route]/page.tsx   {}", "dynamically created pages".dimmed());
    println!("    /app/layout.tsx         {}", "shared template (menu, footer)".dimmed());

    println!("  {}", "Components: reusable interface blocks".cyan());
    println!("    /components/ui/         {}", "buttons, cards, forms".dimmed());
    println!("    /components/layout/     {}", "headers, menus, sections".dimmed());
    println!("    /components/forms/      {}", "fields, validation, submission".dimmed());

    println!("  {}", "Styles: appearance via Tailwind".cyan());
    println!("    /styles/globals.css     {}", "styles applied everywhere".dimmed());
    println!("    /tailwind.config.js     {}", "Tailwind customization".dimmed());
}
