#![forbid(unsafe_code)]

//! @acp:module "Forge Library"
//! @acp:summary "Entitlement-gated template generation for micro-product offers"
//! @acp:domain cli
//! @acp:layer api
//!
//! # Offer Forge
//!
//! Turns three onboarding answers (niche, pain point, delivery format)
//! into marketing artifacts: an offer pitch, a bundle structure, sales
//! copy, a 48-hour launch checklist, a promo kit, and a randomized
//! "oracle" archetype draw. Generation is metered by subscription tier
//! and a remaining-build counter.
//!
//! ## Example
//!
//! ```rust
//! use forge::{ArtifactKind, ForgeEngine, Tier, UserSession};
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut session = UserSession::new(Tier::Paid);
//!     session.apply_setup("Health & Fitness", "Lack of time", "Checklist")?;
//!
//!     let mut engine = ForgeEngine::new(session);
//!     let artifact = engine.request_generation(ArtifactKind::Offer, &mut rand::rng())?;
//!     println!("{}", serde_json::to_string_pretty(&artifact)?);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod commands;
pub mod engine;
pub mod entitlement;
pub mod error;
pub mod oracle;
pub mod session;

// Re-exports
pub use catalog::{Artifact, ArtifactKind, Payload};
pub use engine::ForgeEngine;
pub use entitlement::{Denial, Feature};
pub use error::{ForgeError, Result};
pub use oracle::{ArchetypeCard, CustomOffer, OracleReading};
pub use session::{Setup, Tier, UserSession};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
