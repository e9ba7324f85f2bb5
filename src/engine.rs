//! @acp:module "Generation Engine"
//! @acp:summary "Entitlement-gated artifact generation over one user session"
//! @acp:domain cli
//! @acp:layer api
//!
//! The facade the UI layer calls. Checks setup and entitlement, expands
//! the template (or draws the oracle), records the build, and returns the
//! artifact. The session mutates exactly once per success and never on
//! denial or validation failure.

use chrono::Utc;
use rand::Rng;

use crate::catalog::{self, Artifact, ArtifactKind, Payload};
use crate::entitlement::{self, Feature};
use crate::error::{ForgeError, Result};
use crate::oracle;
use crate::session::UserSession;

/// Owns the session state and orchestrates generation requests
#[derive(Debug, Clone)]
pub struct ForgeEngine {
    session: UserSession,
}

impl ForgeEngine {
    pub fn new(session: UserSession) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &UserSession {
        &self.session
    }

    /// Mutable session access for the presentation layer (setup wizard,
    /// upgrade buttons). Generation itself goes through
    /// [`Self::request_generation`].
    pub fn session_mut(&mut self) -> &mut UserSession {
        &mut self.session
    }

    /// Generate one artifact of the requested kind.
    ///
    /// Randomness is only consulted for oracle draws; standard kinds
    /// ignore the source entirely.
    pub fn request_generation<R: Rng + ?Sized>(
        &mut self,
        kind: ArtifactKind,
        rng: &mut R,
    ) -> Result<Artifact> {
        if !self.session.setup().is_complete() {
            return Err(ForgeError::Validation(
                "setup is incomplete: choose a niche, pain point, and format first".into(),
            ));
        }

        let feature = Feature::for_kind(kind);
        if let Err(denial) = entitlement::check(&self.session, feature) {
            tracing::warn!(%kind, %denial, "generation denied");
            return Err(denial.into());
        }

        let payload = match kind {
            ArtifactKind::Oracle => Payload::Oracle(oracle::draw(rng)),
            _ => catalog::generate(kind, self.session.setup())
                .unwrap_or_else(|| unreachable!("standard kinds always expand")),
        };

        let artifact = Artifact {
            kind,
            created_at: Utc::now(),
            setup: self.session.setup().clone(),
            payload,
        };
        self.session.record_build(artifact.clone());
        debug_assert_eq!(
            self.session.total_builds() as usize,
            self.session.products().len()
        );
        tracing::debug!(
            %kind,
            total_builds = self.session.total_builds(),
            builds_remaining = self.session.builds_remaining(),
            "build recorded"
        );

        Ok(artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Tier;

    fn engine(tier: Tier) -> ForgeEngine {
        let mut session = UserSession::new(tier);
        session
            .apply_setup("Health & Fitness", "Lack of time", "Checklist")
            .unwrap();
        ForgeEngine::new(session)
    }

    #[test]
    fn incomplete_setup_blocks_generation() {
        let mut engine = ForgeEngine::new(UserSession::new(Tier::Lifetime));
        let err = engine
            .request_generation(ArtifactKind::Offer, &mut rand::rng())
            .unwrap_err();
        assert!(matches!(err, ForgeError::Validation(_)));
        assert_eq!(engine.session().total_builds(), 0);
    }

    #[test]
    fn success_mutates_session_exactly_once() {
        let mut engine = engine(Tier::Paid);
        let artifact = engine
            .request_generation(ArtifactKind::Structure, &mut rand::rng())
            .unwrap();
        assert_eq!(artifact.kind, ArtifactKind::Structure);
        assert_eq!(engine.session().total_builds(), 1);
        assert_eq!(engine.session().builds_remaining(), 9);
        assert_eq!(engine.session().products().len(), 1);
    }

    #[test]
    fn denial_leaves_session_untouched() {
        let mut engine = engine(Tier::Free);
        let err = engine
            .request_generation(ArtifactKind::Oracle, &mut rand::rng())
            .unwrap_err();
        assert!(err.denial().is_some());
        assert_eq!(engine.session().total_builds(), 0);
        assert_eq!(engine.session().builds_remaining(), 1);
        assert!(engine.session().products().is_empty());
    }
}
