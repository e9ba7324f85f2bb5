//! @acp:module "Promo Kit Template"
//! @acp:summary "Video scripts, platform posts, and welcome email expansion"
//! @acp:domain cli
//! @acp:layer logic

use super::hashtag;
use super::types::{Email, PromoKit, SocialPost, VideoScript};
use crate::session::Setup;

/// Expand the organic traffic jumpstart kit for the given setup
pub fn generate(setup: &Setup) -> PromoKit {
    let niche = &setup.niche;
    let format = &setup.format;
    let pain = &setup.pain_point;
    let niche_lower = niche.to_lowercase();
    let format_lower = format.to_lowercase();
    let pain_lower = pain.to_lowercase();
    let niche_tag = hashtag(niche);
    let pain_tag = hashtag(pain);

    PromoKit {
        video_scripts: vec![
            VideoScript {
                title: "The Problem Hook".into(),
                script: format!(
                    "[On screen: You looking frustrated]\n\
                     \n\
                     \"If you're struggling with {pain_lower} in {niche_lower}, this video is for you.\n\
                     \n\
                     I used to wake up every day feeling overwhelmed by {pain_lower}.\n\
                     \n\
                     I tried everything - courses, books, YouTube videos...\n\
                     \n\
                     Nothing worked.\n\
                     \n\
                     Until I discovered this one simple system.\n\
                     \n\
                     [Show your {format_lower}]\n\
                     \n\
                     This {format_lower} changed everything for me.\n\
                     \n\
                     And now I'm sharing it with you.\n\
                     \n\
                     Link in bio to get instant access.\n\
                     \n\
                     Stop letting {pain_lower} control your {niche_lower} journey.\n\
                     \n\
                     Your breakthrough is waiting.\"\n\
                     \n\
                     [Duration: 30-60 seconds]"
                ),
            },
            VideoScript {
                title: "The Transformation Story".into(),
                script: format!(
                    "[On screen: Before/after or transformation visual]\n\
                     \n\
                     \"3 months ago, I was exactly where you are.\n\
                     \n\
                     Frustrated with {pain_lower}.\n\
                     Tired of not seeing results in {niche_lower}.\n\
                     Ready to give up.\n\
                     \n\
                     But then I created this system.\n\
                     \n\
                     [Hold up your {format_lower}]\n\
                     \n\
                     And everything changed.\n\
                     \n\
                     Within 7 days, I saw results I hadn't seen in months.\n\
                     \n\
                     Now I'm sharing this exact system with you.\n\
                     \n\
                     {format} that eliminates {pain_lower} once and for all.\n\
                     \n\
                     No fluff. No theory. Just what works.\n\
                     \n\
                     Get it now - link in bio.\n\
                     \n\
                     Your {niche_lower} transformation starts today.\"\n\
                     \n\
                     [Duration: 45-60 seconds]"
                ),
            },
            VideoScript {
                title: "The Social Proof Angle".into(),
                script: format!(
                    "[On screen: Screenshots of results or testimonials]\n\
                     \n\
                     \"I wasn't going to share this...\n\
                     \n\
                     But after seeing the results people are getting with my {format_lower}, I had to.\n\
                     \n\
                     Sarah eliminated {pain_lower} in 5 days.\n\
                     Mike saw breakthrough results in his first week.\n\
                     Lisa called it 'life-changing.'\n\
                     \n\
                     This isn't just another {format_lower}.\n\
                     \n\
                     This is the {niche_lower} solution that actually works.\n\
                     \n\
                     Specifically designed to eliminate {pain_lower}.\n\
                     \n\
                     Get instant access - link in bio.\n\
                     \n\
                     Don't let {pain_lower} steal another day from your success.\"\n\
                     \n\
                     [Duration: 30-45 seconds]"
                ),
            },
        ],
        social_posts: vec![
            SocialPost {
                platform: "Instagram/TikTok".into(),
                post: format!(
                    "POV: You finally found the {niche_lower} solution that eliminates {pain_lower} 🎯\n\
                     \n\
                     ✨ No more struggling\n\
                     ✨ No more overwhelm\n\
                     ✨ Just results\n\
                     \n\
                     This {format_lower} changed everything for me.\n\
                     \n\
                     Link in bio 👆\n\
                     \n\
                     #{niche_tag} #{pain_tag}Solution #Breakthrough"
                ),
            },
            SocialPost {
                platform: "Twitter/X".into(),
                post: format!(
                    "Hot take: {pain} isn't your real problem.\n\
                     \n\
                     Your real problem is not having a system that works.\n\
                     \n\
                     I created the {format_lower} that finally eliminates {pain_lower} in {niche_lower}.\n\
                     \n\
                     Results in 7 days or less.\n\
                     \n\
                     Thread below 👇 or DM me for the link."
                ),
            },
            SocialPost {
                platform: "LinkedIn".into(),
                post: format!(
                    "After 3 years in {niche_lower}, I learned something important:\n\
                     \n\
                     {pain} isn't a character flaw.\n\
                     \n\
                     It's a system problem.\n\
                     \n\
                     So I created a system that solves it.\n\
                     \n\
                     My new {format_lower} helps {niche_lower} professionals eliminate {pain_lower} in 7 days or less.\n\
                     \n\
                     No theory. No fluff. Just what works.\n\
                     \n\
                     Comment \"SYSTEM\" and I'll send you the link.\n\
                     \n\
                     #{niche_tag} #Productivity #Success"
                ),
            },
        ],
        email_sequence: vec![Email {
            subject: format!("Your {niche} breakthrough starts here"),
            body: format!(
                "Hi [Name],\n\
                 \n\
                 Thanks for getting my {format} on eliminating {pain_lower}.\n\
                 \n\
                 You're about to discover the exact system I used to overcome {pain_lower} in {niche_lower}.\n\
                 \n\
                 Here's what to expect:\n\
                 \n\
                 📧 Day 1: Quick start guide (this email)\n\
                 📧 Day 3: Common mistakes to avoid\n\
                 📧 Day 7: Advanced strategies\n\
                 📧 Day 14: Success stories and next steps\n\
                 \n\
                 Start with page 3 - it's the most important part.\n\
                 \n\
                 To your success,\n\
                 [Your name]\n\
                 \n\
                 P.S. Hit reply if you have questions. I read every email."
            ),
        }],
        pro_tips: vec![
            "Video: Film multiple angles in one session".into(),
            "Consistency: Post daily for 7 days minimum".into(),
            "Engagement: Reply to every comment in first hour".into(),
            "Timing: Post when your audience is most active".into(),
            "Call-to-action: Always include clear next steps".into(),
        ],
    }
}
