//! @acp:module "Setup Options"
//! @acp:summary "Fixed onboarding catalogs: niches, pain points, delivery formats"
//! @acp:domain cli
//! @acp:layer types
//!
//! The wizard offers exactly these values and `apply_setup` accepts
//! nothing else. Read-only data, never mutated at runtime.

/// The 12 selectable niches
pub const NICHES: [&str; 12] = [
    "Health & Fitness",
    "Business & Marketing",
    "Personal Development",
    "Technology & AI",
    "Finance & Investing",
    "Relationships & Dating",
    "Parenting & Family",
    "Education & Learning",
    "Creative Arts",
    "Home & Garden",
    "Travel & Lifestyle",
    "Spiritual & Mindfulness",
];

/// The 12 selectable audience pain points
pub const PAIN_POINTS: [&str; 12] = [
    "Lack of time",
    "Overwhelm & stress",
    "Lack of knowledge",
    "Fear of failure",
    "Procrastination",
    "Lack of motivation",
    "Analysis paralysis",
    "Imposter syndrome",
    "Perfectionism",
    "Lack of clarity",
    "Information overload",
    "Lack of confidence",
];

/// A delivery format with its wizard description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOption {
    pub name: &'static str,
    pub description: &'static str,
}

/// The 6 selectable delivery formats
pub const FORMATS: [FormatOption; 6] = [
    FormatOption {
        name: "PDF Guide",
        description: "Comprehensive written guide",
    },
    FormatOption {
        name: "Checklist",
        description: "Step-by-step action items",
    },
    FormatOption {
        name: "Mini Audio Course",
        description: "3-5 short audio lessons",
    },
    FormatOption {
        name: "Template Pack",
        description: "Ready-to-use templates",
    },
    FormatOption {
        name: "Video Series",
        description: "Short video tutorials",
    },
    FormatOption {
        name: "Workbook",
        description: "Interactive exercises",
    },
];

pub fn is_known_niche(value: &str) -> bool {
    NICHES.contains(&value)
}

pub fn is_known_pain_point(value: &str) -> bool {
    PAIN_POINTS.contains(&value)
}

pub fn is_known_format(value: &str) -> bool {
    FORMATS.iter().any(|f| f.name == value)
}
