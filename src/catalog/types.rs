//! @acp:module "Artifact Types"
//! @acp:summary "Structured content carried by each artifact kind"
//! @acp:domain cli
//! @acp:layer types

use serde::{Deserialize, Serialize};

/// Core offer pitch: name, promise, deliverable, angle, audience
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub name: String,
    pub transformation_promise: String,
    pub core_deliverable: String,
    pub unique_angle: String,
    pub target_audience: String,
}

/// Bundle structure: core offer, bonuses, pricing, upsells, stack strategy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Structure {
    pub core_offer: CoreOffer,
    pub bonuses: Vec<Bonus>,
    pub pricing: PricingSummary,
    pub upsells: Vec<Upsell>,
    pub offer_stack: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreOffer {
    pub name: String,
    pub price: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bonus {
    pub name: String,
    pub value: String,
    pub description: String,
}

/// Fixed template constants, not derived arithmetic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingSummary {
    pub total_value: String,
    pub your_price: String,
    pub savings: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Upsell {
    pub name: String,
    pub price: String,
    pub description: String,
}

/// Sales copy set: social post, CTA one-liner, mini sales page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesCopy {
    pub social_post: String,
    pub cta_one_liner: String,
    pub mini_sales_page: String,
    pub copy_tips: Vec<String>,
}

/// 48-hour launch plan with fixed phases, quick wins, and tool picks.
/// Per-task completion state is a UI concern and lives outside the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checklist {
    pub title: String,
    pub phases: Vec<ChecklistPhase>,
    pub quick_wins: Vec<String>,
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistPhase {
    pub name: String,
    pub tasks: Vec<String>,
}

/// Promotion kit: video scripts, platform posts, welcome email
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromoKit {
    pub video_scripts: Vec<VideoScript>,
    pub social_posts: Vec<SocialPost>,
    pub email_sequence: Vec<Email>,
    pub pro_tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoScript {
    pub title: String,
    pub script: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialPost {
    pub platform: String,
    pub post: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Email {
    pub subject: String,
    pub body: String,
}
