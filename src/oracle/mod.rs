//! @acp:module "Oracle Selector"
//! @acp:summary "Randomized archetype draw with an injectable RNG source"
//! @acp:domain cli
//! @acp:layer logic
//!
//! The one place non-determinism enters the engine. All randomness comes
//! through the caller-supplied source, so a seeded source reproduces a
//! draw exactly. The draw order (archetype, format word, trending score,
//! price, market opportunity) is part of the contract.

pub mod archetypes;

use rand::Rng;
use serde::{Deserialize, Serialize};

pub use archetypes::{Archetype, ARCHETYPES, FORMAT_WORDS, MARKET_OPPORTUNITIES};

/// Owned snapshot of the drawn archetype, carried inside the artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchetypeCard {
    pub name: String,
    pub theme: String,
    pub description: String,
    pub examples: Vec<String>,
    pub pain_point: String,
    pub trending: bool,
}

impl From<&Archetype> for ArchetypeCard {
    fn from(archetype: &Archetype) -> Self {
        Self {
            name: archetype.name.to_string(),
            theme: archetype.theme.to_string(),
            description: archetype.description.to_string(),
            examples: archetype.examples.iter().map(|e| e.to_string()).collect(),
            pain_point: archetype.pain_point.to_string(),
            trending: archetype.trending,
        }
    }
}

/// Offer composed from the drawn archetype and format word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomOffer {
    pub name: String,
    pub tagline: String,
    pub core_promise: String,
    pub pricing: String,
}

/// One oracle draw result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OracleReading {
    pub archetype: ArchetypeCard,
    pub custom_offer: CustomOffer,
    /// Uniform in 60..=100
    pub trending_score: u32,
    pub market_opportunity: String,
}

/// Draw one oracle reading from the given random source.
///
/// Each pick is uniform: archetype over the 10-entry catalog (the
/// `trending` flag carries no weight), format word over 6, trending score
/// in `60..=100`, price in `27..=77`, opportunity over 5.
pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> OracleReading {
    let archetype = &ARCHETYPES[rng.random_range(0..ARCHETYPES.len())];
    let format = FORMAT_WORDS[rng.random_range(0..FORMAT_WORDS.len())];
    let trending_score = rng.random_range(60..=100u32);
    let price = rng.random_range(27..=77u32);
    let opportunity = MARKET_OPPORTUNITIES[rng.random_range(0..MARKET_OPPORTUNITIES.len())];

    OracleReading {
        archetype: archetype.into(),
        custom_offer: CustomOffer {
            name: format!("The {} {}", archetype.name, format),
            tagline: format!("Eliminate {} in 7 days or less", archetype.pain_point),
            core_promise: format!(
                "Transform your {} with this proven {}",
                archetype.theme.to_lowercase(),
                format.to_lowercase()
            ),
            pricing: format!("${}", price),
        },
        trending_score,
        market_opportunity: opportunity.to_string(),
    }
}
