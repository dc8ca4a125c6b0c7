use crate::models::{CampaignType, Platform, ScoringWeights};

/// Look up the scoring weight vector for a campaign type
///
/// Vectors sum to 1.0 except Product Launch, which sums to 1.10 (location
/// carries extra weight there). Brand Awareness doubles as the fallback for
/// unrecognized campaign types (handled during deserialization).
pub fn weights_for(campaign_type: CampaignType) -> ScoringWeights {
    match campaign_type {
        CampaignType::BrandAwareness => ScoringWeights::default(),
        CampaignType::ProductLaunch => ScoringWeights {
            budget_fit: 0.20,
            content_relevance: 0.35,
            audience_fit: 0.15,
            engagement_quality: 0.20,
            previous_performance: 0.05,
            platform_fit: 0.05,
            location_fit: 0.10,
        },
        CampaignType::CommunityEngagement => ScoringWeights {
            budget_fit: 0.10,
            content_relevance: 0.20,
            audience_fit: 0.30,
            engagement_quality: 0.25,
            previous_performance: 0.05,
            platform_fit: 0.05,
            location_fit: 0.05,
        },
        CampaignType::ConversionsAndSales => ScoringWeights {
            budget_fit: 0.15,
            content_relevance: 0.20,
            audience_fit: 0.25,
            engagement_quality: 0.30,
            previous_performance: 0.05,
            platform_fit: 0.05,
            location_fit: 0.05,
        },
    }
}

/// Per-platform multiplier for a campaign type
///
/// Multipliers can exceed 1.0 for a platform that is a particularly strong
/// fit for the campaign type. Platforms outside the known set contribute 0.
#[inline]
pub fn platform_multiplier(campaign_type: CampaignType, platform: &Platform) -> f64 {
    match campaign_type {
        CampaignType::BrandAwareness => match platform {
            Platform::TikTok => 1.2,
            Platform::YouTube => 1.0,
            Platform::Twitch => 0.8,
            Platform::Other(_) => 0.0,
        },
        CampaignType::ProductLaunch => match platform {
            Platform::TikTok => 1.1,
            Platform::YouTube => 1.2,
            Platform::Twitch => 0.9,
            Platform::Other(_) => 0.0,
        },
        CampaignType::CommunityEngagement => match platform {
            Platform::TikTok => 1.0,
            Platform::YouTube => 0.9,
            Platform::Twitch => 1.3,
            Platform::Other(_) => 0.0,
        },
        CampaignType::ConversionsAndSales => match platform {
            Platform::TikTok => 0.9,
            Platform::YouTube => 1.2,
            Platform::Twitch => 1.0,
            Platform::Other(_) => 0.0,
        },
    }
}
