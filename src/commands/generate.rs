//! @acp:module "Generate Command"
//! @acp:summary "One-shot artifact generation from CLI arguments"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `forge generate` for non-interactive use: the session is
//! built from flags, lives for one request, and the artifact goes to
//! stdout (styled or `--json`).

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::output;
use crate::catalog::ArtifactKind;
use crate::engine::ForgeEngine;
use crate::error::ForgeError;
use crate::session::{Tier, UserSession};

/// Options for the generate command
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Artifact kind to generate
    pub kind: ArtifactKind,
    /// Niche (one of the 12 fixed values)
    pub niche: String,
    /// Pain point (one of the 12 fixed values)
    pub pain_point: String,
    /// Delivery format (one of the 6 fixed values)
    pub format: String,
    /// Subscription tier for this run
    pub tier: Tier,
    /// Override the tier's starting build count
    pub builds: Option<u32>,
    /// Seed for reproducible oracle draws
    pub seed: Option<u64>,
    /// Emit the artifact as JSON instead of styled text
    pub json: bool,
    /// Skip the simulated working delay
    pub no_delay: bool,
}

/// Execute the generate command
pub fn execute_generate(options: GenerateOptions) -> Result<()> {
    let mut session = match options.builds {
        Some(builds) => UserSession::with_quota(options.tier, builds),
        None => UserSession::new(options.tier),
    };
    session.apply_setup(&options.niche, &options.pain_point, &options.format)?;

    let mut engine = ForgeEngine::new(session);

    if !options.json {
        output::simulate_generation(options.kind, options.no_delay);
    }

    let result = match options.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            engine.request_generation(options.kind, &mut rng)
        }
        None => engine.request_generation(options.kind, &mut rand::rng()),
    };

    match result {
        Ok(artifact) => {
            if options.json {
                println!("{}", serde_json::to_string_pretty(&artifact)?);
            } else {
                output::print_artifact(&artifact);
                println!();
                output::print_quota(engine.session());
            }
            Ok(())
        }
        Err(ForgeError::Entitlement(denial)) => {
            output::print_upgrade_prompt(&denial);
            std::process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}
