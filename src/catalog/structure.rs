//! @acp:module "Structure Template"
//! @acp:summary "Bundle structure with fixed bonus, pricing, and upsell amounts"
//! @acp:domain cli
//! @acp:layer logic
//!
//! Every dollar amount here is a template constant. The $208 total and
//! $161 savings happen to be consistent with the bonus values but are
//! deliberately not computed.

use super::types::{Bonus, CoreOffer, PricingSummary, Structure, Upsell};
use crate::session::Setup;

/// Expand the bundle structure for the given setup
pub fn generate(setup: &Setup) -> Structure {
    let format_lower = setup.format.to_lowercase();
    let pain_lower = setup.pain_point.to_lowercase();

    Structure {
        core_offer: CoreOffer {
            name: format!("The {} {}", setup.niche, setup.format),
            price: "$47".into(),
            description: format!("Complete {} addressing {}", format_lower, pain_lower),
        },
        bonuses: vec![
            Bonus {
                name: "Quick Start Action Plan".into(),
                value: "$27".into(),
                description: "Get results in your first 24 hours".into(),
            },
            Bonus {
                name: "Private Community Access".into(),
                value: "$97".into(),
                description: "30-day access to exclusive community".into(),
            },
            Bonus {
                name: "Email Templates Pack".into(),
                value: "$37".into(),
                description: "Copy-paste templates for immediate use".into(),
            },
        ],
        pricing: PricingSummary {
            total_value: "$208".into(),
            your_price: "$47".into(),
            savings: "$161".into(),
        },
        upsells: vec![
            Upsell {
                name: "Advanced Masterclass".into(),
                price: "$97".into(),
                description: "Deep-dive 2-hour video training".into(),
            },
            Upsell {
                name: "Done-With-You Coaching".into(),
                price: "$297".into(),
                description: "1-on-1 implementation session".into(),
            },
        ],
        offer_stack: vec![
            "Core deliverable that solves the main problem".into(),
            "Quick-win bonus for immediate results".into(),
            "Community access for ongoing support".into(),
            "Templates/tools for easy implementation".into(),
            "Limited-time pricing with urgency".into(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pricing_constants_are_fixed() {
        let setup = Setup {
            niche: "Finance & Investing".into(),
            pain_point: "Analysis paralysis".into(),
            format: "PDF Guide".into(),
        };
        let structure = generate(&setup);

        assert_eq!(structure.core_offer.name, "The Finance & Investing PDF Guide");
        assert_eq!(structure.core_offer.price, "$47");
        assert_eq!(
            structure.core_offer.description,
            "Complete pdf guide addressing analysis paralysis"
        );
        assert_eq!(structure.pricing.total_value, "$208");
        assert_eq!(structure.pricing.your_price, "$47");
        assert_eq!(structure.pricing.savings, "$161");

        let values: Vec<&str> = structure.bonuses.iter().map(|b| b.value.as_str()).collect();
        assert_eq!(values, ["$27", "$97", "$37"]);

        let prices: Vec<&str> = structure.upsells.iter().map(|u| u.price.as_str()).collect();
        assert_eq!(prices, ["$97", "$297"]);

        assert_eq!(structure.offer_stack.len(), 5);
    }
}
