//! @acp:module "Output Rendering"
//! @acp:summary "Styled terminal rendering for artifacts and upgrade prompts"
//! @acp:domain cli
//! @acp:layer handler

use std::time::Duration;

use console::style;
use indicatif::ProgressBar;

use crate::catalog::{Artifact, ArtifactKind, Checklist, Offer, Payload, PromoKit, SalesCopy, Structure};
use crate::entitlement::Denial;
use crate::oracle::OracleReading;
use crate::session::{Tier, UserSession};

/// Spinner message shown while a generation "works"
pub fn working_message(kind: ArtifactKind) -> &'static str {
    match kind {
        ArtifactKind::Offer => "Forging Your Offer...",
        ArtifactKind::Structure => "Structuring Your Offer...",
        ArtifactKind::Copy => "Crafting Your Copy...",
        ArtifactKind::Checklist => "Creating Your Checklist...",
        ArtifactKind::PromoKit => "Creating Your Promo Kit...",
        ArtifactKind::Oracle => "Consulting the Oracle...",
    }
}

/// Simulated working delay. Pure theater: the engine result does not
/// depend on it, and `no_delay` skips it entirely.
pub fn simulate_generation(kind: ArtifactKind, no_delay: bool) {
    if no_delay {
        return;
    }
    let millis = match kind {
        ArtifactKind::Offer | ArtifactKind::Oracle => 3000,
        ArtifactKind::Copy | ArtifactKind::PromoKit => 2500,
        ArtifactKind::Structure | ArtifactKind::Checklist => 2000,
    };
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(working_message(kind));
    spinner.enable_steady_tick(Duration::from_millis(80));
    std::thread::sleep(Duration::from_millis(millis));
    spinner.finish_and_clear();
}

/// One-line session header: plan label and remaining builds
pub fn print_quota(session: &UserSession) {
    let builds = if session.tier() == Tier::Lifetime {
        "Unlimited".to_string()
    } else {
        format!("{} left", session.builds_remaining())
    };
    println!(
        "{} {} · {}",
        style("⚡").yellow(),
        style(session.tier().label()).bold(),
        builds
    );
}

/// Upgrade prompt for an entitlement denial
pub fn print_upgrade_prompt(denial: &Denial) {
    match denial {
        Denial::QuotaExhausted { tier: Tier::Free } => {
            eprintln!(
                "{} You've used your free build! Upgrade to continue creating.",
                style("✗").red()
            );
        }
        Denial::QuotaExhausted { .. } => {
            eprintln!(
                "{} You're out of builds. Don't stop now—unlock everything.",
                style("✗").red()
            );
        }
        Denial::TierRequired { .. } => {
            eprintln!(
                "{} Oracle access requires upgrade! Get the $299 Lifetime Deal to unlock this feature.",
                style("✗").red()
            );
        }
    }
    eprintln!("  🚀 Upgrade to Lifetime - $299");
}

/// Short history line for a generated artifact
pub fn summary_line(artifact: &Artifact) -> String {
    let title = match &artifact.payload {
        Payload::Offer(offer) => offer.name.clone(),
        Payload::Structure(structure) => structure.core_offer.name.clone(),
        Payload::Copy(_) => "Social post + CTA + mini sales page".to_string(),
        Payload::Checklist(checklist) => checklist.title.clone(),
        Payload::PromoKit(_) => "3 video scripts, 3 posts, welcome email".to_string(),
        Payload::Oracle(reading) => reading.custom_offer.name.clone(),
    };
    format!(
        "{} — {} ({})",
        artifact.kind.display_name(),
        title,
        artifact.created_at.format("%H:%M:%S")
    )
}

/// Render a full artifact to the terminal
pub fn print_artifact(artifact: &Artifact) {
    match &artifact.payload {
        Payload::Offer(offer) => print_offer(offer),
        Payload::Structure(structure) => print_structure(structure),
        Payload::Copy(copy) => print_copy(copy),
        Payload::Checklist(checklist) => print_checklist(checklist),
        Payload::PromoKit(kit) => print_promo(kit),
        Payload::Oracle(reading) => print_oracle(reading),
    }
}

fn heading(text: &str) {
    println!("\n{}", style(text).bold());
}

fn field(label: &str, value: &str) {
    println!("  {} {}", style(format!("{}:", label)).cyan(), value);
}

fn print_offer(offer: &Offer) {
    println!(
        "{} Your micro-product is ready!",
        style("🎉").yellow()
    );
    heading("Offer");
    field("Name", &offer.name);
    field("Transformation promise", &offer.transformation_promise);
    field("Core deliverable", &offer.core_deliverable);
    field("Unique angle", &offer.unique_angle);
    field("Target audience", &offer.target_audience);
}

fn print_structure(structure: &Structure) {
    heading("Core Offer");
    field("Name", &structure.core_offer.name);
    field("Price", &structure.core_offer.price);
    field("Description", &structure.core_offer.description);

    heading("Bonuses");
    for bonus in &structure.bonuses {
        println!(
            "  {} {} — {} ({})",
            style("🎁").green(),
            bonus.name,
            bonus.description,
            style(&bonus.value).green()
        );
    }

    heading("Pricing Breakdown");
    field("Total value", &structure.pricing.total_value);
    field("Your price", &structure.pricing.your_price);
    field("You save", &structure.pricing.savings);

    heading("Upsell Ideas");
    for upsell in &structure.upsells {
        println!(
            "  {} {} — {} ({})",
            style("📈").cyan(),
            upsell.name,
            upsell.description,
            style(&upsell.price).yellow()
        );
    }

    heading("Offer Stack Strategy");
    for (i, item) in structure.offer_stack.iter().enumerate() {
        println!("  {}. {}", style(i + 1).yellow(), item);
    }
}

fn print_copy(copy: &SalesCopy) {
    heading("Social Media Post");
    println!("{}", copy.social_post);

    heading("Link-in-Bio CTA");
    println!("{}", copy.cta_one_liner);

    heading("Mini Sales Page");
    println!("{}", copy.mini_sales_page);

    heading("Copy Tips");
    for tip in &copy.copy_tips {
        println!("  • {}", tip);
    }
}

fn print_checklist(checklist: &Checklist) {
    heading(&checklist.title);
    for phase in &checklist.phases {
        println!("\n  {}", style(&phase.name).bold());
        for task in &phase.tasks {
            println!("    [ ] {}", task);
        }
    }

    heading("Quick Wins");
    for win in &checklist.quick_wins {
        println!("  • {}", win);
    }

    heading("Recommended Tools");
    for tool in &checklist.tools {
        println!("  • {}", tool);
    }
}

fn print_promo(kit: &PromoKit) {
    heading("Video Scripts");
    for script in &kit.video_scripts {
        println!("\n  {}", style(&script.title).bold());
        for line in script.script.lines() {
            println!("    {}", line);
        }
    }

    heading("Social Media Posts");
    for post in &kit.social_posts {
        println!("\n  {}", style(&post.platform).bold());
        for line in post.post.lines() {
            println!("    {}", line);
        }
    }

    heading("Email Sequence Starter");
    for email in &kit.email_sequence {
        println!("  {} {}", style("Subject:").yellow(), email.subject);
        for line in email.body.lines() {
            println!("    {}", line);
        }
    }

    heading("Pro Tips");
    for tip in &kit.pro_tips {
        println!("  • {}", tip);
    }
}

fn print_oracle(reading: &OracleReading) {
    println!("{} The Oracle Has Spoken", style("🔮").magenta());
    if reading.archetype.trending {
        println!("  {}", style("TRENDING").red().bold());
    }

    heading(&reading.archetype.name);
    println!("  {}", reading.archetype.description);
    field("Theme", &reading.archetype.theme);
    field("Pain point", &reading.archetype.pain_point);

    heading("Your Custom Offer");
    field("Name", &reading.custom_offer.name);
    field("Tagline", &reading.custom_offer.tagline);
    field("Promise", &reading.custom_offer.core_promise);
    field("Suggested price", &reading.custom_offer.pricing);

    heading("Market Opportunity");
    field("Trending score", &format!("{}%", reading.trending_score));
    field("Market status", &reading.market_opportunity);

    heading("Inspiration Examples");
    for example in &reading.archetype.examples {
        println!("  • {}", example);
    }
}
