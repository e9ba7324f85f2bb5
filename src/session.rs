//! @acp:module "User Session"
//! @acp:summary "Subscription tier, build quota, and product history for one session"
//! @acp:domain cli
//! @acp:layer state
//!
//! The session is the single mutable state object in the engine. It is
//! owned explicitly (constructed and passed in, never a global) and has
//! exactly one writer: the generation engine. `record_build` assumes the
//! entitlement check already passed; it does not re-check.

use serde::{Deserialize, Serialize};

use crate::catalog::{self, Artifact};
use crate::error::{ForgeError, Result};

/// Subscription tier gating feature access and quota.
///
/// Ordered: `Free < Paid < Lifetime`, so tier comparisons double as
/// upgrade-path checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Free,
    Paid,
    Lifetime,
}

impl Tier {
    /// Plan name shown in the dashboard header
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Free => "Free Trial",
            Tier::Paid => "10-Pack",
            Tier::Lifetime => "Lifetime",
        }
    }

    /// Builds granted when a session starts on this tier.
    /// Lifetime is unlimited; its counter is never consulted.
    pub fn starting_builds(&self) -> u32 {
        match self {
            Tier::Free => 1,
            Tier::Paid => 10,
            Tier::Lifetime => 0,
        }
    }

    /// Whether the remaining-build counter applies to this tier
    pub fn is_metered(&self) -> bool {
        !matches!(self, Tier::Lifetime)
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Tier::Free => "free",
            Tier::Paid => "paid",
            Tier::Lifetime => "lifetime",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "free" => Ok(Tier::Free),
            "paid" | "10-pack" => Ok(Tier::Paid),
            "lifetime" => Ok(Tier::Lifetime),
            _ => Err(format!(
                "Unknown tier: {}. Use 'free', 'paid', or 'lifetime'",
                s
            )),
        }
    }
}

/// The three onboarding answers every template interpolates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Setup {
    pub niche: String,
    pub pain_point: String,
    pub format: String,
}

impl Setup {
    /// All three answers present
    pub fn is_complete(&self) -> bool {
        !self.niche.is_empty() && !self.pain_point.is_empty() && !self.format.is_empty()
    }
}

/// Per-session user state: tier, quota, setup answers, and the ordered
/// history of generated artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    tier: Tier,
    builds_remaining: u32,
    total_builds: u32,
    setup: Setup,
    products: Vec<Artifact>,
}

impl UserSession {
    /// Start a fresh session with the tier's standard quota
    pub fn new(tier: Tier) -> Self {
        Self::with_quota(tier, tier.starting_builds())
    }

    /// Start a session with an explicit remaining-build count
    pub fn with_quota(tier: Tier, builds_remaining: u32) -> Self {
        Self {
            tier,
            builds_remaining,
            total_builds: 0,
            setup: Setup::default(),
            products: Vec::new(),
        }
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn builds_remaining(&self) -> u32 {
        self.builds_remaining
    }

    pub fn total_builds(&self) -> u32 {
        self.total_builds
    }

    pub fn setup(&self) -> &Setup {
        &self.setup
    }

    /// Generated artifacts in creation order (append-only)
    pub fn products(&self) -> &[Artifact] {
        &self.products
    }

    /// Replace all three setup answers atomically.
    ///
    /// Each answer must be a non-empty entry from its fixed catalog
    /// (12 niches, 12 pain points, 6 formats). On error no field changes.
    pub fn apply_setup(&mut self, niche: &str, pain_point: &str, format: &str) -> Result<()> {
        if niche.is_empty() || pain_point.is_empty() || format.is_empty() {
            return Err(ForgeError::Validation(
                "niche, pain point, and format are all required".into(),
            ));
        }
        if !catalog::options::is_known_niche(niche) {
            return Err(ForgeError::Validation(format!("unknown niche: {}", niche)));
        }
        if !catalog::options::is_known_pain_point(pain_point) {
            return Err(ForgeError::Validation(format!(
                "unknown pain point: {}",
                pain_point
            )));
        }
        if !catalog::options::is_known_format(format) {
            return Err(ForgeError::Validation(format!(
                "unknown delivery format: {}",
                format
            )));
        }

        self.setup = Setup {
            niche: niche.to_string(),
            pain_point: pain_point.to_string(),
            format: format.to_string(),
        };
        Ok(())
    }

    /// Record one successful generation: append the artifact, bump the
    /// total, and consume quota per tier.
    ///
    /// Free builds are single-use: the counter drops to zero no matter
    /// where it started. Paid consumes one build, floored at zero.
    /// Lifetime is unlimited and never decrements.
    pub fn record_build(&mut self, artifact: Artifact) {
        self.products.push(artifact);
        self.total_builds += 1;
        self.builds_remaining = match self.tier {
            Tier::Free => 0,
            Tier::Paid => self.builds_remaining.saturating_sub(1),
            Tier::Lifetime => self.builds_remaining,
        };
    }

    /// Switch to a higher tier and grant its quota.
    ///
    /// Payment is out of scope; this is the state transition behind the
    /// upgrade buttons. Downgrades are rejected.
    pub fn upgrade(&mut self, tier: Tier) -> Result<()> {
        if tier <= self.tier {
            return Err(ForgeError::Validation(format!(
                "already on the {} plan",
                self.tier.label()
            )));
        }
        self.tier = tier;
        if tier.is_metered() {
            self.builds_remaining = tier.starting_builds();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ArtifactKind, Payload};
    use chrono::Utc;

    fn valid_setup(session: &mut UserSession) {
        session
            .apply_setup("Health & Fitness", "Lack of time", "Checklist")
            .unwrap();
    }

    fn dummy_artifact(session: &UserSession) -> Artifact {
        Artifact {
            kind: ArtifactKind::Offer,
            created_at: Utc::now(),
            setup: session.setup().clone(),
            payload: Payload::Offer(catalog::offer::generate(session.setup())),
        }
    }

    #[test]
    fn apply_setup_rejects_empty_fields() {
        let mut session = UserSession::new(Tier::Free);
        let err = session.apply_setup("", "Lack of time", "Checklist");
        assert!(matches!(err, Err(ForgeError::Validation(_))));
        assert_eq!(session.setup(), &Setup::default());
    }

    #[test]
    fn apply_setup_rejects_unknown_catalog_entries() {
        let mut session = UserSession::new(Tier::Free);
        assert!(session
            .apply_setup("Underwater Basketry", "Lack of time", "Checklist")
            .is_err());
        assert!(session
            .apply_setup("Health & Fitness", "Mondays", "Checklist")
            .is_err());
        assert!(session
            .apply_setup("Health & Fitness", "Lack of time", "Hologram")
            .is_err());
        // Nothing partially applied
        assert_eq!(session.setup(), &Setup::default());
    }

    #[test]
    fn apply_setup_replaces_all_three_fields() {
        let mut session = UserSession::new(Tier::Paid);
        valid_setup(&mut session);
        session
            .apply_setup("Finance & Investing", "Analysis paralysis", "PDF Guide")
            .unwrap();
        assert_eq!(session.setup().niche, "Finance & Investing");
        assert_eq!(session.setup().pain_point, "Analysis paralysis");
        assert_eq!(session.setup().format, "PDF Guide");
    }

    #[test]
    fn free_build_is_single_use() {
        let mut session = UserSession::new(Tier::Free);
        valid_setup(&mut session);
        assert_eq!(session.builds_remaining(), 1);
        let artifact = dummy_artifact(&session);
        session.record_build(artifact);
        assert_eq!(session.builds_remaining(), 0);
        assert_eq!(session.total_builds(), 1);
        assert_eq!(session.products().len(), 1);
    }

    #[test]
    fn paid_decrements_by_one_floored_at_zero() {
        let mut session = UserSession::with_quota(Tier::Paid, 2);
        valid_setup(&mut session);
        for expected in [1u32, 0, 0] {
            let artifact = dummy_artifact(&session);
            session.record_build(artifact);
            assert_eq!(session.builds_remaining(), expected);
        }
        assert_eq!(session.total_builds(), 3);
        assert_eq!(session.products().len(), 3);
    }

    #[test]
    fn lifetime_counter_never_moves() {
        let mut session = UserSession::new(Tier::Lifetime);
        valid_setup(&mut session);
        for _ in 0..20 {
            let artifact = dummy_artifact(&session);
            session.record_build(artifact);
        }
        assert_eq!(session.builds_remaining(), 0);
        assert_eq!(session.total_builds(), 20);
        assert_eq!(session.products().len(), 20);
    }

    #[test]
    fn upgrade_grants_tier_quota_and_rejects_downgrade() {
        let mut session = UserSession::new(Tier::Free);
        session.upgrade(Tier::Paid).unwrap();
        assert_eq!(session.tier(), Tier::Paid);
        assert_eq!(session.builds_remaining(), 10);

        session.upgrade(Tier::Lifetime).unwrap();
        assert_eq!(session.tier(), Tier::Lifetime);

        assert!(session.upgrade(Tier::Paid).is_err());
        assert!(session.upgrade(Tier::Lifetime).is_err());
    }
}
