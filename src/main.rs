#![forbid(unsafe_code)]
//! Forge Command Line Interface

use clap::{Parser, Subcommand};

use forge::commands::{
    execute_catalog, execute_generate, execute_run, CatalogOptions, GenerateOptions, RunOptions,
};
use forge::{ArtifactKind, Tier};

#[derive(Parser)]
#[command(name = "forge")]
#[command(about = "Micro-Product Forge - plan-gated generation of launch-ready offer artifacts")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session: setup wizard plus dashboard
    Run {
        /// Tier the session starts on
        #[arg(long, value_enum, default_value_t = TierArg::Free)]
        tier: TierArg,

        /// Skip the simulated working delay
        #[arg(long)]
        no_delay: bool,
    },

    /// Generate one artifact non-interactively
    Generate {
        /// Artifact kind to generate
        #[arg(value_enum)]
        kind: KindArg,

        /// Niche (one of the 12 fixed values, see `forge catalog`)
        #[arg(long)]
        niche: String,

        /// Pain point (one of the 12 fixed values)
        #[arg(long)]
        pain_point: String,

        /// Delivery format (one of the 6 fixed values)
        #[arg(long)]
        format: String,

        /// Subscription tier for this run
        #[arg(long, value_enum, default_value_t = TierArg::Free)]
        tier: TierArg,

        /// Override the tier's starting build count
        #[arg(long)]
        builds: Option<u32>,

        /// Seed for reproducible oracle draws
        #[arg(long)]
        seed: Option<u64>,

        /// Emit the artifact as JSON instead of styled text
        #[arg(long)]
        json: bool,

        /// Skip the simulated working delay
        #[arg(long)]
        no_delay: bool,
    },

    /// List the fixed niches, pain points, and delivery formats
    Catalog {
        /// Also list the 10 oracle archetypes
        #[arg(long)]
        archetypes: bool,
    },
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum TierArg {
    Free,
    Paid,
    Lifetime,
}

impl From<TierArg> for Tier {
    fn from(arg: TierArg) -> Self {
        match arg {
            TierArg::Free => Tier::Free,
            TierArg::Paid => Tier::Paid,
            TierArg::Lifetime => Tier::Lifetime,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum KindArg {
    Offer,
    Structure,
    Copy,
    Checklist,
    PromoKit,
    Oracle,
}

impl From<KindArg> for ArtifactKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Offer => ArtifactKind::Offer,
            KindArg::Structure => ArtifactKind::Structure,
            KindArg::Copy => ArtifactKind::Copy,
            KindArg::Checklist => ArtifactKind::Checklist,
            KindArg::PromoKit => ArtifactKind::PromoKit,
            KindArg::Oracle => ArtifactKind::Oracle,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("forge=debug")),
            )
            .init();
    }

    match cli.command {
        Commands::Run { tier, no_delay } => execute_run(RunOptions {
            tier: tier.into(),
            no_delay,
        }),

        Commands::Generate {
            kind,
            niche,
            pain_point,
            format,
            tier,
            builds,
            seed,
            json,
            no_delay,
        } => execute_generate(GenerateOptions {
            kind: kind.into(),
            niche,
            pain_point,
            format,
            tier: tier.into(),
            builds,
            seed,
            json,
            no_delay,
        }),

        Commands::Catalog { archetypes } => execute_catalog(CatalogOptions { archetypes }),
    }
}
