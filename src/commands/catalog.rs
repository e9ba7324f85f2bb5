//! @acp:module "Catalog Command"
//! @acp:summary "List the fixed setup options and oracle archetypes"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;

use crate::catalog::options::{FORMATS, NICHES, PAIN_POINTS};
use crate::oracle::ARCHETYPES;

/// Options for the catalog command
#[derive(Debug, Clone, Default)]
pub struct CatalogOptions {
    /// Also list the 10 oracle archetypes
    pub archetypes: bool,
}

/// Execute the catalog command
pub fn execute_catalog(options: CatalogOptions) -> Result<()> {
    println!("{}", style("Niches").bold());
    for niche in NICHES {
        println!("  {}", niche);
    }

    println!("\n{}", style("Pain Points").bold());
    for pain in PAIN_POINTS {
        println!("  {}", pain);
    }

    println!("\n{}", style("Delivery Formats").bold());
    for format in FORMATS {
        println!("  {} — {}", format.name, style(format.description).dim());
    }

    if options.archetypes {
        println!("\n{}", style("Oracle Archetypes").bold());
        for archetype in &ARCHETYPES {
            let trending = if archetype.trending {
                style(" TRENDING").red().to_string()
            } else {
                String::new()
            };
            println!(
                "  {}{} — {} ({})",
                style(archetype.name).cyan(),
                trending,
                archetype.description,
                archetype.theme
            );
        }
    }

    Ok(())
}
