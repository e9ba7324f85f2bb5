//! @acp:module "Run Command"
//! @acp:summary "Interactive session: setup wizard plus dashboard loop"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `forge run`. The session lives for this process only;
//! quitting discards it. One request runs at a time: the prompt does not
//! return until the pending generation finishes, so there is never a
//! second writer.

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, MultiSelect, Select};

use super::output;
use crate::catalog::options::{FORMATS, NICHES, PAIN_POINTS};
use crate::catalog::{ArtifactKind, Checklist, Payload};
use crate::engine::ForgeEngine;
use crate::error::ForgeError;
use crate::session::{Tier, UserSession};

/// Options for the run command
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Tier the session starts on
    pub tier: Tier,
    /// Skip the simulated working delay
    pub no_delay: bool,
}

/// Execute the run command
pub fn execute_run(options: RunOptions) -> Result<()> {
    println!("{} Micro-Product Forge\n", style("⚡").yellow());

    let mut session = UserSession::new(options.tier);
    run_setup_wizard(&mut session)?;
    let mut engine = ForgeEngine::new(session);

    loop {
        println!();
        output::print_quota(engine.session());

        let mut items: Vec<String> = ArtifactKind::ALL
            .iter()
            .map(|kind| kind.display_name().to_string())
            .collect();
        items.push("Product history".into());
        items.push("Upgrade plan".into());
        items.push("Quit".into());

        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Modules")
            .items(&items)
            .default(0)
            .interact()?;

        let kinds = ArtifactKind::ALL.len();
        match choice {
            i if i < kinds => generate_one(&mut engine, ArtifactKind::ALL[i], options.no_delay)?,
            i if i == kinds => show_history(engine.session()),
            i if i == kinds + 1 => upgrade_plan(&mut engine)?,
            _ => break,
        }
    }

    Ok(())
}

/// The three-step onboarding wizard: niche, pain point, delivery format
fn run_setup_wizard(session: &mut UserSession) -> Result<()> {
    println!("{} Setup Your Micro-Product\n", style("→").cyan());

    let niche_idx = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Step 1 of 3 · Pick your niche")
        .items(&NICHES)
        .default(0)
        .interact()?;
    let niche = NICHES[niche_idx];

    let pain_idx = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(format!(
            "Step 2 of 3 · What's your audience's biggest frustration in {}?",
            niche
        ))
        .items(&PAIN_POINTS)
        .default(0)
        .interact()?;

    let format_items: Vec<String> = FORMATS
        .iter()
        .map(|f| format!("{} — {}", f.name, f.description))
        .collect();
    let format_idx = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Step 3 of 3 · How do you want to deliver your solution?")
        .items(&format_items)
        .default(0)
        .interact()?;

    session.apply_setup(niche, PAIN_POINTS[pain_idx], FORMATS[format_idx].name)?;
    println!(
        "\n{} {} · {} · {}",
        style("✓").green(),
        niche,
        PAIN_POINTS[pain_idx],
        FORMATS[format_idx].name
    );
    Ok(())
}

fn generate_one(engine: &mut ForgeEngine, kind: ArtifactKind, no_delay: bool) -> Result<()> {
    output::simulate_generation(kind, no_delay);

    match engine.request_generation(kind, &mut rand::rng()) {
        Ok(artifact) => {
            print_artifact_header(kind);
            output::print_artifact(&artifact);
            if let Payload::Checklist(checklist) = &artifact.payload {
                review_checklist(checklist)?;
            }
            Ok(())
        }
        // Denial is a normal outcome here: show the upgrade prompt and
        // return to the menu.
        Err(ForgeError::Entitlement(denial)) => {
            output::print_upgrade_prompt(&denial);
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

/// Tick off launch tasks. Progress is display-only and lives for this
/// sitting; the artifact itself stays immutable.
fn review_checklist(checklist: &Checklist) -> Result<()> {
    let tasks: Vec<String> = checklist
        .phases
        .iter()
        .flat_map(|phase| {
            phase
                .tasks
                .iter()
                .map(move |task| format!("{} · {}", phase.name, task))
        })
        .collect();

    let done = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Mark tasks you've already completed (space to toggle, enter to confirm)")
        .items(&tasks)
        .interact()?;

    let total = tasks.len();
    println!(
        "{} {}/{} tasks done",
        style("✓").green(),
        done.len(),
        total
    );
    Ok(())
}

fn print_artifact_header(kind: ArtifactKind) {
    println!("\n{}", style(kind.display_name()).bold().underlined());
}

fn show_history(session: &UserSession) {
    if session.products().is_empty() {
        println!("{} No products yet. Generate your first one!", style("→").dim());
        return;
    }
    println!("\n{}", style("Product History").bold());
    for (i, artifact) in session.products().iter().enumerate() {
        println!("  {}. {}", i + 1, output::summary_line(artifact));
    }
    println!(
        "  {} total builds: {}",
        style("Σ").dim(),
        session.total_builds()
    );
}

fn upgrade_plan(engine: &mut ForgeEngine) -> Result<()> {
    let current = engine.session().tier();
    let upgrades: Vec<(Tier, &str)> = match current {
        Tier::Free => vec![
            (Tier::Paid, "10-Pack — 10 more builds"),
            (Tier::Lifetime, "Lifetime - $299 — unlimited builds + Oracle"),
        ],
        Tier::Paid => vec![(Tier::Lifetime, "Lifetime - $299 — unlimited builds + Oracle")],
        Tier::Lifetime => {
            println!("{} Already on the Lifetime plan.", style("✓").green());
            return Ok(());
        }
    };

    let mut items: Vec<&str> = upgrades.iter().map(|(_, label)| *label).collect();
    items.push("Cancel");
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Upgrade plan")
        .items(&items)
        .default(0)
        .interact()?;

    if choice < upgrades.len() {
        let (tier, _) = upgrades[choice];
        engine.session_mut().upgrade(tier)?;
        println!(
            "{} Upgraded to {}.",
            style("✓").green(),
            style(tier.label()).bold()
        );
    }
    Ok(())
}
