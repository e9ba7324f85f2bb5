//! @acp:module "Sales Copy Template"
//! @acp:summary "Social post, CTA one-liner, and mini sales page expansion"
//! @acp:domain cli
//! @acp:layer logic

use super::hashtag;
use super::types::SalesCopy;
use crate::session::Setup;

/// Expand the sales copy set for the given setup
pub fn generate(setup: &Setup) -> SalesCopy {
    let niche = &setup.niche;
    let format = &setup.format;
    let pain = &setup.pain_point;
    let niche_lower = niche.to_lowercase();
    let format_lower = format.to_lowercase();
    let pain_lower = pain.to_lowercase();
    let pain_upper = pain.to_uppercase();
    let niche_tag = hashtag(niche);
    let pain_tag = hashtag(pain);

    let social_post = format!(
        "🚨 STRUGGLING WITH {pain_upper}? \n\
         \n\
         I just created the EXACT {format_lower} that helped me overcome this in {niche_lower}...\n\
         \n\
         ✅ No more {pain_lower}\n\
         ✅ Clear, actionable steps\n\
         ✅ Results in 7 days or less\n\
         \n\
         This isn't another generic guide. This is specifically designed for {niche_lower} \
         enthusiasts who are TIRED of {pain_lower}.\n\
         \n\
         Link in bio 👆\n\
         \n\
         #{niche_tag} #{pain_tag}Solution"
    );

    let cta_one_liner = format!(
        "Stop letting {pain_lower} hold you back in {niche_lower} - get the solution that \
         actually works 👆"
    );

    let mini_sales_page = format!(
        "# The {niche} {format} That Finally Eliminates {pain}\n\
         \n\
         ## Are You Tired of {pain} Sabotaging Your {niche} Success?\n\
         \n\
         You're not alone. \n\
         \n\
         Every day, thousands of {niche_lower} enthusiasts struggle with the same frustrating problem: **{pain_lower}**.\n\
         \n\
         ### Here's What's Really Happening:\n\
         \n\
         - You know what you want to achieve in {niche_lower}\n\
         - You've tried multiple approaches and \"solutions\"\n\
         - But {pain_lower} keeps holding you back\n\
         - You're starting to wonder if you're just not cut out for this\n\
         \n\
         **What if I told you the problem isn't YOU?**\n\
         \n\
         ## The Truth About {pain}\n\
         \n\
         Most {niche_lower} advice treats {pain_lower} like a minor inconvenience.\n\
         \n\
         But you and I both know it's NOT minor.\n\
         \n\
         It's the #1 thing standing between you and your {niche_lower} breakthrough.\n\
         \n\
         ## Introducing: The {niche} {format}\n\
         \n\
         This isn't another generic {format_lower}.\n\
         \n\
         This is a laser-focused solution that tackles {pain_lower} head-on with:\n\
         \n\
         ✅ **Proven Framework**: Step-by-step system that works even if you've failed before\n\
         ✅ **Quick Wins**: See results in the first 24 hours\n\
         ✅ **Real Solutions**: No fluff, just what actually works\n\
         ✅ **{niche} Specific**: Designed specifically for your situation\n\
         \n\
         ### What You'll Get:\n\
         \n\
         - Complete {format_lower} (47 pages of actionable content)\n\
         - Quick Start Action Plan (get results in 24 hours)\n\
         - Private Community Access (30 days)\n\
         - Email Templates Pack (copy-paste ready)\n\
         \n\
         **Total Value: $208**\n\
         **Your Price Today: $47**\n\
         **You Save: $161**\n\
         \n\
         ## Limited Time Offer\n\
         \n\
         This pricing is only available for the next 72 hours.\n\
         \n\
         After that, it goes to the full $97 price.\n\
         \n\
         **Don't let {pain_lower} steal another day from your {niche_lower} success.**\n\
         \n\
         [GET INSTANT ACCESS - $47]\n\
         \n\
         ### 30-Day Money-Back Guarantee\n\
         \n\
         If this doesn't help you overcome {pain_lower} in 30 days, I'll refund every penny.\n\
         \n\
         No questions asked.\n\
         \n\
         **Your success in {niche_lower} is just one click away.**\n\
         \n\
         [CLAIM YOUR COPY NOW - $47]"
    );

    SalesCopy {
        social_post,
        cta_one_liner,
        mini_sales_page,
        copy_tips: vec![
            "Personalize it: Replace generic terms with your specific audience language".into(),
            "Test variations: Try different headlines and CTAs".into(),
            "Add urgency: Limited time offers create action".into(),
            "Include social proof: Add testimonials when you have them".into(),
            "Keep it simple: One clear message, one clear action".into(),
        ],
    }
}
