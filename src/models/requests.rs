use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{CampaignType, Platform};

/// Campaign settings supplied with a match request.
///
/// Transient: exists only for the duration of one scoring request. All
/// targeting fields are optional; missing ones score neutrally. `platforms`
/// is required and must be non-empty, since platform fit divides by the
/// number of campaign platforms.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CampaignSettings {
    #[serde(rename = "campaignType", default)]
    pub campaign_type: CampaignType,
    /// [min, max] budget range; anything other than exactly two elements is
    /// treated as unspecified.
    #[serde(default)]
    pub budget: Option<Vec<f64>>,
    #[serde(rename = "targetGenres", default)]
    pub target_genres: Option<Vec<String>>,
    #[serde(rename = "targetAgeGroups", default)]
    pub target_age_groups: Option<Vec<String>>,
    #[serde(rename = "targetGenders", default)]
    pub target_genders: Option<Vec<String>>,
    #[validate(length(min = 1, message = "platforms must not be empty"))]
    #[serde(default)]
    pub platforms: Vec<Platform>,
}

/// Raw filter query parameters as they arrive on the wire.
///
/// List-valued parameters are comma-separated strings. Parsing into
/// `FilterCriteria` is fail-open and lives in `core::filters`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterQuery {
    #[serde(default)]
    pub platforms: Option<String>,
    #[serde(default)]
    pub categories: Option<String>,
    #[serde(rename = "followerRange", default)]
    pub follower_range: Option<String>,
    #[serde(rename = "engagementRateMin", default)]
    pub engagement_rate_min: Option<String>,
    #[serde(default)]
    pub regions: Option<String>,
    #[serde(rename = "verifiedOnly", default)]
    pub verified_only: Option<String>,
}
