use crate::core::weights::{platform_multiplier, weights_for};
use crate::models::{CampaignSettings, CampaignType, Creator, Platform};

/// Neutral sub-score used when a factor has no signal to evaluate
const NEUTRAL_SCORE: f64 = 0.5;

/// Engagement rate (percent) considered excellent
const EXCELLENT_ENGAGEMENT_RATE: f64 = 15.0;

/// Follower count treated as the normalization ceiling
const FOLLOWER_CEILING: f64 = 2_000_000.0;

/// Calculate a match score (0-100) for a creator against campaign settings
///
/// Scoring formula (weights vary by campaign type, Brand Awareness shown):
/// score = (
///     budget_fit * 0.15 +           # hourly rate within campaign budget
///     content_relevance * 0.40 +    # category overlap with target genres
///     audience_fit * 0.20 +         # demographic overlap with targets
///     engagement_quality * 0.10 +   # engagement rate + follower reach
///     previous_performance * 0.05 + # prior campaign results
///     platform_fit * 0.05 +         # campaign platform multipliers
///     location_fit * 0.05           # neutral, see calculate_location_fit
/// ) * 100, rounded and clamped
pub fn calculate_match_score(creator: &Creator, settings: &CampaignSettings) -> u8 {
    let weights = weights_for(settings.campaign_type);

    let budget_fit = calculate_budget_fit(creator, settings);
    let content_relevance = calculate_content_relevance(creator, settings);
    let audience_fit = calculate_audience_fit(creator, settings);
    let engagement_quality = calculate_engagement_quality(creator);
    let previous_performance = normalize_previous_performance(creator);
    let platform_fit = calculate_platform_fit(settings.campaign_type, &settings.platforms);
    let location_fit = calculate_location_fit();

    let total = (budget_fit * weights.budget_fit
        + content_relevance * weights.content_relevance
        + audience_fit * weights.audience_fit
        + engagement_quality * weights.engagement_quality
        + previous_performance * weights.previous_performance
        + platform_fit * weights.platform_fit
        + location_fit * weights.location_fit)
        * 100.0;

    total.round().clamp(0.0, 100.0) as u8
}

/// Calculate how well the creator's hourly rate fits the campaign budget (0-1)
///
/// Outside the range the score decays linearly with the relative gap.
/// A missing or malformed budget (not exactly [min, max]) scores neutral.
pub fn calculate_budget_fit(creator: &Creator, settings: &CampaignSettings) -> f64 {
    let (min_budget, max_budget) = match settings.budget.as_deref() {
        Some([min, max]) => (*min, *max),
        _ => return NEUTRAL_SCORE,
    };

    let rate = creator.hourly_rate;

    if rate < min_budget {
        (1.0 - (min_budget - rate) / min_budget).max(0.0)
    } else if rate > max_budget {
        (1.0 - (rate - max_budget) / max_budget).max(0.0)
    } else {
        1.0
    }
}

/// Calculate content relevance as category overlap with target genres (0-1)
pub fn calculate_content_relevance(creator: &Creator, settings: &CampaignSettings) -> f64 {
    let target_genres = match settings.target_genres.as_deref() {
        Some(genres) if !genres.is_empty() => genres,
        _ => return NEUTRAL_SCORE,
    };

    if creator.content_categories.is_empty() {
        return 0.0;
    }

    let matching = creator
        .content_categories
        .iter()
        .filter(|&category| target_genres.contains(category))
        .count();

    matching as f64 / target_genres.len().max(creator.content_categories.len()) as f64
}

/// Calculate audience demographic fit (0-1)
///
/// Averages the share of the creator's audience falling into the targeted
/// age buckets and genders. Neutral when the creator has no demographic
/// data or the campaign targets neither dimension.
pub fn calculate_audience_fit(creator: &Creator, settings: &CampaignSettings) -> f64 {
    let demographics = match &creator.audience_demographics {
        Some(d) => d,
        None => return NEUTRAL_SCORE,
    };

    let target_ages = settings.target_age_groups.as_deref().unwrap_or(&[]);
    let target_genders = settings.target_genders.as_deref().unwrap_or(&[]);

    if target_ages.is_empty() && target_genders.is_empty() {
        return NEUTRAL_SCORE;
    }

    let age_score = if target_ages.is_empty() {
        NEUTRAL_SCORE
    } else {
        let pct: f64 = target_ages
            .iter()
            .filter_map(|bucket| demographics.age.get(bucket))
            .sum();
        pct / 100.0
    };

    let gender_score = if target_genders.is_empty() {
        NEUTRAL_SCORE
    } else {
        let pct: f64 = target_genders
            .iter()
            .filter_map(|bucket| demographics.gender.get(bucket))
            .sum();
        pct / 100.0
    };

    (age_score + gender_score) / 2.0
}

/// Calculate engagement quality from engagement rate and reach (0-1)
#[inline]
pub fn calculate_engagement_quality(creator: &Creator) -> f64 {
    let normalized_engagement = (creator.engagement_rate / EXCELLENT_ENGAGEMENT_RATE).min(1.0);
    let normalized_followers = (creator.followers as f64 / FOLLOWER_CEILING).min(1.0);

    normalized_engagement * 0.7 + normalized_followers * 0.3
}

/// Normalize previous campaign performance from 0-100 to 0-1
#[inline]
fn normalize_previous_performance(creator: &Creator) -> f64 {
    creator.previous_campaign_performance / 100.0
}

/// Calculate platform fit as the mean multiplier over campaign platforms
///
/// Can exceed 1.0 when the campaign leans on platforms with strong
/// multipliers for its type. An empty platform list is rejected at the API
/// boundary; here it scores 0 so the function stays total.
pub fn calculate_platform_fit(campaign_type: CampaignType, platforms: &[Platform]) -> f64 {
    if platforms.is_empty() {
        return 0.0;
    }

    let total: f64 = platforms
        .iter()
        .map(|platform| platform_multiplier(campaign_type, platform))
        .sum();

    total / platforms.len() as f64
}

/// Location fit placeholder
///
/// Campaign settings carry no target location to compare against the
/// creator's, so this factor is pinned to neutral.
#[inline]
fn calculate_location_fit() -> f64 {
    NEUTRAL_SCORE
}
