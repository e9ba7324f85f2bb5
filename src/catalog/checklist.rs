//! @acp:module "Checklist Template"
//! @acp:summary "Fixed 4-phase 48-hour launch plan"
//! @acp:domain cli
//! @acp:layer logic

use super::types::{Checklist, ChecklistPhase};
use crate::session::Setup;

/// Expand the 48-hour launch checklist for the given setup.
/// Only the title interpolates; phases, tasks, quick wins, and tools are
/// fixed template data.
pub fn generate(setup: &Setup) -> Checklist {
    Checklist {
        title: format!("48-Hour Launch Plan for Your {}", setup.format),
        phases: vec![
            ChecklistPhase {
                name: "Day 1: Content Creation (8 hours)".into(),
                tasks: vec![
                    "Write your core content outline (1 hour)".into(),
                    "Create the main content/guide (4 hours)".into(),
                    "Design simple cover/graphics (1 hour)".into(),
                    "Write bonus materials (1 hour)".into(),
                    "Review and edit everything (1 hour)".into(),
                ],
            },
            ChecklistPhase {
                name: "Day 1 Evening: Setup (2 hours)".into(),
                tasks: vec![
                    "Set up payment processor (Stripe/PayPal)".into(),
                    "Create simple landing page".into(),
                    "Set up email delivery system".into(),
                    "Test purchase flow end-to-end".into(),
                    "Write launch announcement".into(),
                ],
            },
            ChecklistPhase {
                name: "Day 2: Marketing & Launch (6 hours)".into(),
                tasks: vec![
                    "Create social media posts (1 hour)".into(),
                    "Record video testimonial/demo (1 hour)".into(),
                    "Post on relevant communities (1 hour)".into(),
                    "Email your network (1 hour)".into(),
                    "Go live on social media (1 hour)".into(),
                    "Monitor and respond to comments (1 hour)".into(),
                ],
            },
            ChecklistPhase {
                name: "Day 2 Evening: Optimization (2 hours)".into(),
                tasks: vec![
                    "Review analytics and feedback".into(),
                    "Make quick improvements".into(),
                    "Plan follow-up content".into(),
                    "Set up automated email sequence".into(),
                    "Schedule social media posts for week 2".into(),
                ],
            },
        ],
        quick_wins: vec![
            "Use Canva for quick graphics".into(),
            "Record on your phone for authenticity".into(),
            "Start with friends/family for initial sales".into(),
            "Use social proof immediately".into(),
            "Price low for quick validation".into(),
        ],
        tools: vec![
            "Canva (graphics)".into(),
            "Stripe (payments)".into(),
            "ConvertKit (email)".into(),
            "Carrd (landing page)".into(),
            "Zoom (video content)".into(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_has_four_phases_and_fixed_lists() {
        let setup = Setup {
            niche: "Creative Arts".into(),
            pain_point: "Perfectionism".into(),
            format: "Video Series".into(),
        };
        let plan = generate(&setup);

        assert_eq!(plan.title, "48-Hour Launch Plan for Your Video Series");
        assert_eq!(plan.phases.len(), 4);
        assert_eq!(plan.phases[0].tasks.len(), 5);
        assert_eq!(plan.phases[2].tasks.len(), 6);
        assert_eq!(plan.quick_wins.len(), 5);
        assert_eq!(plan.tools.len(), 5);
    }

    #[test]
    fn only_the_title_depends_on_setup() {
        let a = generate(&Setup {
            niche: "Creative Arts".into(),
            pain_point: "Perfectionism".into(),
            format: "Workbook".into(),
        });
        let b = generate(&Setup {
            niche: "Home & Garden".into(),
            pain_point: "Lack of clarity".into(),
            format: "Workbook".into(),
        });
        assert_eq!(a, b);
    }
}
