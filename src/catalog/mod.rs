//! @acp:module "Template Catalog"
//! @acp:summary "Fixed artifact templates expanded by pure string interpolation"
//! @acp:domain cli
//! @acp:layer logic
//!
//! One pure generator per artifact kind. Same setup in, byte-identical
//! text out; timestamps are injected by the engine so nothing here touches
//! the clock. The oracle is the one randomized kind and lives in
//! `crate::oracle`.

pub mod checklist;
pub mod copy;
pub mod offer;
pub mod options;
pub mod promo;
pub mod structure;
pub mod types;

use serde::{Deserialize, Serialize};

pub use types::{
    Bonus, Checklist, ChecklistPhase, CoreOffer, Email, Offer, PricingSummary, PromoKit,
    SalesCopy, SocialPost, Structure, Upsell, VideoScript,
};

use crate::oracle::OracleReading;
use crate::session::Setup;
use chrono::{DateTime, Utc};

/// The six generatable artifact kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ArtifactKind {
    Offer,
    Structure,
    Copy,
    Checklist,
    PromoKit,
    Oracle,
}

impl ArtifactKind {
    /// Every kind, in dashboard order
    pub const ALL: [ArtifactKind; 6] = [
        ArtifactKind::Offer,
        ArtifactKind::Structure,
        ArtifactKind::Copy,
        ArtifactKind::Checklist,
        ArtifactKind::PromoKit,
        ArtifactKind::Oracle,
    ];

    /// Module name shown in the dashboard
    pub fn display_name(&self) -> &'static str {
        match self {
            ArtifactKind::Offer => "Offer Generator",
            ArtifactKind::Structure => "Offer Structure",
            ArtifactKind::Copy => "Sales Copy Builder",
            ArtifactKind::Checklist => "48-Hour MVP Checklist",
            ArtifactKind::PromoKit => "Organic Traffic Jumpstart Kit",
            ArtifactKind::Oracle => "Offer Oracle",
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ArtifactKind::Offer => "offer",
            ArtifactKind::Structure => "structure",
            ArtifactKind::Copy => "copy",
            ArtifactKind::Checklist => "checklist",
            ArtifactKind::PromoKit => "promo-kit",
            ArtifactKind::Oracle => "oracle",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for ArtifactKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "offer" => Ok(ArtifactKind::Offer),
            "structure" => Ok(ArtifactKind::Structure),
            "copy" => Ok(ArtifactKind::Copy),
            "checklist" => Ok(ArtifactKind::Checklist),
            "promo" | "promo-kit" | "promokit" => Ok(ArtifactKind::PromoKit),
            "oracle" => Ok(ArtifactKind::Oracle),
            _ => Err(format!(
                "Unknown artifact kind: {}. Use offer, structure, copy, checklist, promo-kit, or oracle",
                s
            )),
        }
    }
}

/// Generated content, one variant per artifact kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Payload {
    Offer(Offer),
    Structure(Structure),
    Copy(SalesCopy),
    Checklist(Checklist),
    PromoKit(PromoKit),
    Oracle(OracleReading),
}

/// A generated artifact: immutable once created, stamped with the setup
/// it was derived from and an engine-supplied creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub created_at: DateTime<Utc>,
    pub setup: Setup,
    pub payload: Payload,
}

/// Expand the template for a standard (deterministic) kind.
///
/// Returns `None` for [`ArtifactKind::Oracle`], which is randomized and
/// drawn through `crate::oracle::draw` instead.
pub fn generate(kind: ArtifactKind, setup: &Setup) -> Option<Payload> {
    match kind {
        ArtifactKind::Offer => Some(Payload::Offer(offer::generate(setup))),
        ArtifactKind::Structure => Some(Payload::Structure(structure::generate(setup))),
        ArtifactKind::Copy => Some(Payload::Copy(copy::generate(setup))),
        ArtifactKind::Checklist => Some(Payload::Checklist(checklist::generate(setup))),
        ArtifactKind::PromoKit => Some(Payload::PromoKit(promo::generate(setup))),
        ArtifactKind::Oracle => None,
    }
}

/// Hashtag form of a setup answer: all whitespace stripped
pub(crate) fn hashtag(text: &str) -> String {
    text.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_str() {
        for kind in ArtifactKind::ALL {
            assert_eq!(kind.to_string().parse::<ArtifactKind>(), Ok(kind));
        }
    }

    #[test]
    fn generate_covers_all_standard_kinds() {
        let setup = Setup {
            niche: "Health & Fitness".into(),
            pain_point: "Lack of time".into(),
            format: "Checklist".into(),
        };
        for kind in ArtifactKind::ALL {
            let payload = generate(kind, &setup);
            assert_eq!(payload.is_none(), kind == ArtifactKind::Oracle);
        }
    }

    #[test]
    fn hashtag_strips_all_whitespace() {
        assert_eq!(hashtag("Health & Fitness"), "Health&Fitness");
        assert_eq!(hashtag("Lack of time"), "Lackoftime");
    }
}
