use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Social platform a creator publishes on.
///
/// The set of first-class platforms is fixed, but unknown platform names
/// coming from the dataset or a request are preserved as `Other` rather
/// than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Platform {
    TikTok,
    YouTube,
    Twitch,
    Other(String),
}

impl Platform {
    pub fn as_str(&self) -> &str {
        match self {
            Platform::TikTok => "TikTok",
            Platform::YouTube => "YouTube",
            Platform::Twitch => "Twitch",
            Platform::Other(name) => name,
        }
    }
}

impl From<String> for Platform {
    fn from(value: String) -> Self {
        match value.as_str() {
            "TikTok" => Platform::TikTok,
            "YouTube" => Platform::YouTube,
            "Twitch" => Platform::Twitch,
            _ => Platform::Other(value),
        }
    }
}

impl From<Platform> for String {
    fn from(value: Platform) -> Self {
        value.as_str().to_string()
    }
}

/// Campaign type selecting the scoring weight vector and platform table.
///
/// Unrecognized campaign type strings fall back to `BrandAwareness`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CampaignType {
    #[default]
    BrandAwareness,
    ProductLaunch,
    CommunityEngagement,
    ConversionsAndSales,
}

impl CampaignType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignType::BrandAwareness => "Brand Awareness",
            CampaignType::ProductLaunch => "Product Launch",
            CampaignType::CommunityEngagement => "Community Engagement",
            CampaignType::ConversionsAndSales => "Conversions and Sales",
        }
    }
}

impl From<String> for CampaignType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Product Launch" => CampaignType::ProductLaunch,
            "Community Engagement" => CampaignType::CommunityEngagement,
            "Conversions and Sales" => CampaignType::ConversionsAndSales,
            _ => CampaignType::BrandAwareness,
        }
    }
}

impl From<CampaignType> for String {
    fn from(value: CampaignType) -> Self {
        value.as_str().to_string()
    }
}

/// Audience breakdown by age bucket and gender.
///
/// Values are percentages; each map is expected to sum to ~100 but this is
/// not enforced anywhere.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AudienceDemographics {
    #[serde(default)]
    pub age: HashMap<String, f64>,
    #[serde(default)]
    pub gender: HashMap<String, f64>,
}

/// Creator profile with platform, audience, and performance attributes.
///
/// Loaded once at startup and immutable for the process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Creator {
    pub id: String,
    pub name: String,
    pub platform: Platform,
    #[serde(rename = "contentCategories", default)]
    pub content_categories: Vec<String>,
    pub followers: u64,
    #[serde(rename = "engagementRate")]
    pub engagement_rate: f64,
    pub location: String,
    #[serde(default)]
    pub verified: bool,
    #[serde(rename = "hourlyRate")]
    pub hourly_rate: f64,
    #[serde(rename = "audienceDemographics", default)]
    pub audience_demographics: Option<AudienceDemographics>,
    #[serde(rename = "previousCampaignPerformance", default)]
    pub previous_campaign_performance: f64,
}

/// Parsed filter criteria applied to the creator dataset.
///
/// `None` means no constraint for that dimension. Built from raw query
/// parameters by `core::filters::parse_criteria`, which degrades malformed
/// values to `None` instead of failing.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub platforms: Option<Vec<Platform>>,
    pub categories: Option<Vec<String>>,
    pub follower_range: Option<(u64, u64)>,
    pub engagement_rate_min: Option<f64>,
    pub regions: Option<Vec<String>>,
    pub verified_only: bool,
}

/// Scoring weights over the seven match factors
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub budget_fit: f64,
    pub content_relevance: f64,
    pub audience_fit: f64,
    pub engagement_quality: f64,
    pub previous_performance: f64,
    pub platform_fit: f64,
    pub location_fit: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        // Brand Awareness vector, also the fallback for unknown campaign types
        Self {
            budget_fit: 0.15,
            content_relevance: 0.40,
            audience_fit: 0.20,
            engagement_quality: 0.10,
            previous_performance: 0.05,
            platform_fit: 0.05,
            location_fit: 0.05,
        }
    }
}
