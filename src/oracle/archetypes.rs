//! @acp:module "Oracle Archetypes"
//! @acp:summary "Fixed archetype catalog, format words, and market opportunities"
//! @acp:domain cli
//! @acp:layer types
//!
//! Read-only data. The draw picks uniformly; the `trending` flag is
//! display-only and carries no selection weight.

/// A fixed thematic template entry used by the oracle draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Archetype {
    pub name: &'static str,
    pub theme: &'static str,
    pub description: &'static str,
    pub examples: [&'static str; 3],
    pub pain_point: &'static str,
    pub trending: bool,
}

/// The 10 offer archetypes, in catalog order
pub const ARCHETYPES: [Archetype; 10] = [
    Archetype {
        name: "The Recession Responder",
        theme: "Economic Resilience",
        description: "Help people thrive during tough economic times",
        examples: [
            "Side Hustle Starter Kit",
            "Debt Elimination Blueprint",
            "Emergency Fund Formula",
        ],
        pain_point: "Financial insecurity",
        trending: true,
    },
    Archetype {
        name: "The Time Savior",
        theme: "Productivity & Efficiency",
        description: "Give people their time back with smart systems",
        examples: [
            "2-Hour Workday System",
            "Automation Toolkit",
            "Quick Win Checklist",
        ],
        pain_point: "Time scarcity",
        trending: true,
    },
    Archetype {
        name: "The Lead Magnet Slayer",
        theme: "Marketing Optimization",
        description: "Transform boring lead magnets into conversion machines",
        examples: [
            "Irresistible Opt-in Formula",
            "List Building Accelerator",
            "Engagement Booster Pack",
        ],
        pain_point: "Low conversion rates",
        trending: false,
    },
    Archetype {
        name: "The Confidence Catalyst",
        theme: "Personal Development",
        description: "Eliminate self-doubt and imposter syndrome",
        examples: [
            "Confidence Code",
            "Fear Elimination Protocol",
            "Success Mindset Shift",
        ],
        pain_point: "Self-doubt",
        trending: true,
    },
    Archetype {
        name: "The Clarity Creator",
        theme: "Decision Making",
        description: "Cut through confusion and create crystal clear direction",
        examples: [
            "Decision Matrix",
            "Goal Clarity Framework",
            "Vision Board 2.0",
        ],
        pain_point: "Analysis paralysis",
        trending: false,
    },
    Archetype {
        name: "The Burnout Breaker",
        theme: "Work-Life Balance",
        description: "Prevent and recover from burnout with sustainable practices",
        examples: [
            "Energy Management System",
            "Boundary Setting Guide",
            "Recovery Roadmap",
        ],
        pain_point: "Burnout and exhaustion",
        trending: true,
    },
    Archetype {
        name: "The Skill Stacker",
        theme: "Learning & Development",
        description: "Fast-track skill acquisition for career advancement",
        examples: [
            "30-Day Skill Sprint",
            "Learning Acceleration Method",
            "Expertise Fast Track",
        ],
        pain_point: "Skill gaps",
        trending: false,
    },
    Archetype {
        name: "The Relationship Rescuer",
        theme: "Communication & Relationships",
        description: "Fix broken connections and build stronger bonds",
        examples: [
            "Communication Repair Kit",
            "Conflict Resolution Formula",
            "Trust Building Blueprint",
        ],
        pain_point: "Relationship struggles",
        trending: false,
    },
    Archetype {
        name: "The Digital Detox Doctor",
        theme: "Technology & Wellness",
        description: "Reclaim focus and mental clarity in the digital age",
        examples: [
            "Screen Time Solution",
            "Focus Recovery Program",
            "Digital Minimalism Guide",
        ],
        pain_point: "Digital overwhelm",
        trending: true,
    },
    Archetype {
        name: "The Momentum Multiplier",
        theme: "Motivation & Action",
        description: "Break through procrastination and build unstoppable momentum",
        examples: [
            "Action Trigger System",
            "Momentum Starter Pack",
            "Procrastination Killer",
        ],
        pain_point: "Lack of motivation",
        trending: false,
    },
];

/// The 6 format words composed into custom offer names
pub const FORMAT_WORDS: [&str; 6] = [
    "Blueprint",
    "Toolkit",
    "Masterclass",
    "Checklist",
    "Framework",
    "System",
];

/// The 5 market opportunity readings
pub const MARKET_OPPORTUNITIES: [&str; 5] = [
    "High search volume, low competition",
    "Trending topic with growing demand",
    "Underserved market segment",
    "Seasonal opportunity peak",
    "Emerging pain point trend",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_fixed_size() {
        assert_eq!(ARCHETYPES.len(), 10);
        assert_eq!(FORMAT_WORDS.len(), 6);
        assert_eq!(MARKET_OPPORTUNITIES.len(), 5);
    }

    #[test]
    fn archetype_names_are_unique() {
        let mut names: Vec<&str> = ARCHETYPES.iter().map(|a| a.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ARCHETYPES.len());
    }

    #[test]
    fn every_archetype_has_three_examples() {
        for archetype in &ARCHETYPES {
            assert!(archetype.examples.iter().all(|e| !e.is_empty()));
        }
    }
}
