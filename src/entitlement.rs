//! @acp:module "Entitlement Policy"
//! @acp:summary "Feature gating by tier and remaining build quota"
//! @acp:domain cli
//! @acp:layer logic
//!
//! Pure gating decisions. A denial is a normal negative result carrying
//! the data an upgrade prompt needs; it never panics and never mutates
//! the session.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::ArtifactKind;
use crate::session::{Tier, UserSession};

/// Feature level a generation request needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    /// Offer, structure, sales copy, checklist, promo kit
    Standard,
    /// Oracle draws
    Premium,
}

impl Feature {
    /// Feature level required for an artifact kind
    pub fn for_kind(kind: ArtifactKind) -> Self {
        match kind {
            ArtifactKind::Oracle => Feature::Premium,
            _ => Feature::Standard,
        }
    }
}

/// Why a generation request was denied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "reason")]
pub enum Denial {
    /// No builds left on a metered plan
    #[error("no builds remaining on the {tier} plan")]
    QuotaExhausted { tier: Tier },

    /// Feature locked behind a higher tier regardless of quota
    #[error("requires the {required} plan (current plan: {current})")]
    TierRequired { current: Tier, required: Tier },
}

impl Denial {
    /// The cheapest tier that would unlock the denied request
    pub fn unlocked_by(&self) -> Tier {
        match self {
            Denial::QuotaExhausted { .. } => Tier::Lifetime,
            Denial::TierRequired { required, .. } => *required,
        }
    }
}

/// Decide whether the session may generate at the given feature level.
///
/// Standard needs builds remaining (lifetime is always allowed).
/// Premium additionally needs a non-free tier, regardless of quota.
pub fn check(session: &UserSession, feature: Feature) -> Result<(), Denial> {
    let tier = session.tier();

    if feature == Feature::Premium && tier == Tier::Free {
        return Err(Denial::TierRequired {
            current: tier,
            required: Tier::Paid,
        });
    }

    if tier.is_metered() && session.builds_remaining() == 0 {
        return Err(Denial::QuotaExhausted { tier });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_allowed_with_quota() {
        let session = UserSession::new(Tier::Free);
        assert_eq!(check(&session, Feature::Standard), Ok(()));
    }

    #[test]
    fn standard_denied_without_quota() {
        let session = UserSession::with_quota(Tier::Free, 0);
        assert_eq!(
            check(&session, Feature::Standard),
            Err(Denial::QuotaExhausted { tier: Tier::Free })
        );

        let session = UserSession::with_quota(Tier::Paid, 0);
        assert_eq!(
            check(&session, Feature::Standard),
            Err(Denial::QuotaExhausted { tier: Tier::Paid })
        );
    }

    #[test]
    fn lifetime_ignores_quota() {
        let session = UserSession::with_quota(Tier::Lifetime, 0);
        assert_eq!(check(&session, Feature::Standard), Ok(()));
        assert_eq!(check(&session, Feature::Premium), Ok(()));
    }

    #[test]
    fn premium_denied_for_free_even_with_quota() {
        let session = UserSession::with_quota(Tier::Free, 5);
        assert_eq!(
            check(&session, Feature::Premium),
            Err(Denial::TierRequired {
                current: Tier::Free,
                required: Tier::Paid,
            })
        );
    }

    #[test]
    fn premium_allowed_for_paid_with_quota() {
        let session = UserSession::new(Tier::Paid);
        assert_eq!(check(&session, Feature::Premium), Ok(()));
    }

    #[test]
    fn oracle_maps_to_premium_everything_else_standard() {
        assert_eq!(Feature::for_kind(ArtifactKind::Oracle), Feature::Premium);
        for kind in [
            ArtifactKind::Offer,
            ArtifactKind::Structure,
            ArtifactKind::Copy,
            ArtifactKind::Checklist,
            ArtifactKind::PromoKit,
        ] {
            assert_eq!(Feature::for_kind(kind), Feature::Standard);
        }
    }
}
