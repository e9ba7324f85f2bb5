//! @acp:module "Offer Template"
//! @acp:summary "Core micro-product pitch expansion"
//! @acp:domain cli
//! @acp:layer logic

use super::types::Offer;
use crate::session::Setup;

/// Expand the offer pitch for the given setup
pub fn generate(setup: &Setup) -> Offer {
    let niche = &setup.niche;
    let niche_lower = setup.niche.to_lowercase();
    let pain_lower = setup.pain_point.to_lowercase();
    let format_lower = setup.format.to_lowercase();

    Offer {
        name: format!(
            "The {} {} That Eliminates {}",
            niche, setup.format, setup.pain_point
        ),
        transformation_promise: format!(
            "Transform your {} journey by completely eliminating {} in just 7 days",
            niche_lower, pain_lower
        ),
        core_deliverable: format!(
            "A comprehensive {} that provides step-by-step strategies, proven frameworks, \
             and actionable insights to overcome {} and achieve breakthrough results in {}",
            format_lower, pain_lower, niche_lower
        ),
        unique_angle: format!(
            "Unlike generic solutions, this focuses specifically on the {} that's holding \
             back {} enthusiasts",
            pain_lower, niche_lower
        ),
        target_audience: format!(
            "{} beginners and intermediates struggling with {}",
            niche, pain_lower
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn setup() -> Setup {
        Setup {
            niche: "Health & Fitness".into(),
            pain_point: "Lack of time".into(),
            format: "Checklist".into(),
        }
    }

    #[test]
    fn interpolates_all_fields() {
        let offer = generate(&setup());
        assert_eq!(
            offer.name,
            "The Health & Fitness Checklist That Eliminates Lack of time"
        );
        assert_eq!(
            offer.transformation_promise,
            "Transform your health & fitness journey by completely eliminating lack of time in just 7 days"
        );
        assert_eq!(
            offer.target_audience,
            "Health & Fitness beginners and intermediates struggling with lack of time"
        );
    }

    #[test]
    fn generation_is_pure() {
        assert_eq!(generate(&setup()), generate(&setup()));
    }
}
