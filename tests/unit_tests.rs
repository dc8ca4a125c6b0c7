// Unit tests for Creator Match

use creator_match::core::{
    filters::{filter_creators, parse_criteria},
    scoring::{
        calculate_audience_fit, calculate_budget_fit, calculate_content_relevance,
        calculate_engagement_quality, calculate_match_score, calculate_platform_fit,
    },
    weights::{platform_multiplier, weights_for},
};
use creator_match::models::{
    AudienceDemographics, CampaignSettings, CampaignType, Creator, FilterCriteria, FilterQuery,
    Platform,
};
use std::collections::HashMap;

fn create_creator(id: &str, platform: Platform, followers: u64, verified: bool) -> Creator {
    Creator {
        id: id.to_string(),
        name: format!("Creator {}", id),
        platform,
        content_categories: vec!["Gaming".to_string()],
        followers,
        engagement_rate: 5.0,
        location: "US".to_string(),
        verified,
        hourly_rate: 50.0,
        audience_demographics: None,
        previous_campaign_performance: 80.0,
    }
}

fn create_settings() -> CampaignSettings {
    CampaignSettings {
        campaign_type: CampaignType::BrandAwareness,
        budget: Some(vec![40.0, 60.0]),
        target_genres: Some(vec!["Gaming".to_string()]),
        target_age_groups: None,
        target_genders: None,
        platforms: vec![Platform::TikTok],
    }
}

#[test]
fn test_empty_criteria_returns_whole_dataset() {
    let dataset = vec![
        create_creator("1", Platform::TikTok, 1_000, true),
        create_creator("2", Platform::YouTube, 2_000, false),
    ];

    let filtered = filter_creators(&dataset, &FilterCriteria::default());
    assert_eq!(filtered.len(), dataset.len());
}

#[test]
fn test_filter_is_order_independent() {
    let dataset = vec![
        create_creator("1", Platform::TikTok, 100, true),
        create_creator("2", Platform::YouTube, 500_000, false),
        create_creator("3", Platform::TikTok, 900_000, true),
    ];

    // Same constraints, expressed once together and once as two passes in
    // opposite orders - the surviving set must be identical.
    let combined = FilterCriteria {
        platforms: Some(vec![Platform::TikTok]),
        verified_only: true,
        ..Default::default()
    };
    let platform_only = FilterCriteria {
        platforms: Some(vec![Platform::TikTok]),
        ..Default::default()
    };
    let verified_only = FilterCriteria {
        verified_only: true,
        ..Default::default()
    };

    let direct = filter_creators(&dataset, &combined);
    let platform_then_verified =
        filter_creators(&filter_creators(&dataset, &platform_only), &verified_only);
    let verified_then_platform =
        filter_creators(&filter_creators(&dataset, &verified_only), &platform_only);

    let ids = |creators: &[Creator]| -> Vec<String> {
        creators.iter().map(|c| c.id.clone()).collect()
    };

    assert_eq!(ids(&direct), ids(&platform_then_verified));
    assert_eq!(ids(&direct), ids(&verified_then_platform));
}

#[test]
fn test_follower_range_boundaries_inclusive() {
    let dataset = vec![
        create_creator("at_min", Platform::TikTok, 100, true),
        create_creator("at_max", Platform::TikTok, 1_000_000, true),
        create_creator("below", Platform::TikTok, 99, true),
        create_creator("above", Platform::TikTok, 1_000_001, true),
    ];

    let query = FilterQuery {
        follower_range: Some("100,1000000".to_string()),
        ..Default::default()
    };
    let filtered = filter_creators(&dataset, &parse_criteria(&query));

    let ids: Vec<_> = filtered.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["at_min", "at_max"]);
}

#[test]
fn test_budget_fit_rate_at_boundary_is_full_score() {
    let mut creator = create_creator("1", Platform::TikTok, 1_000, true);
    let settings = create_settings();

    creator.hourly_rate = 40.0;
    assert_eq!(calculate_budget_fit(&creator, &settings), 1.0);

    creator.hourly_rate = 60.0;
    assert_eq!(calculate_budget_fit(&creator, &settings), 1.0);
}

#[test]
fn test_budget_fit_zero_rate_against_min_100_is_zero() {
    let mut creator = create_creator("1", Platform::TikTok, 1_000, true);
    creator.hourly_rate = 0.0;

    let settings = CampaignSettings {
        budget: Some(vec![100.0, 200.0]),
        ..create_settings()
    };

    assert_eq!(calculate_budget_fit(&creator, &settings), 0.0);
}

#[test]
fn test_match_score_always_in_range() {
    let extreme_creators = vec![
        create_creator("zeroes", Platform::Other("Unknown".to_string()), 0, false),
        create_creator("huge", Platform::TikTok, u64::MAX / 2, true),
    ];

    for creator in &extreme_creators {
        for settings in [CampaignSettings::default(), create_settings()] {
            let score = calculate_match_score(creator, &settings);
            assert!(score <= 100, "score {} out of range", score);
        }
    }
}

#[test]
fn test_match_score_deterministic() {
    let creator = create_creator("1", Platform::TikTok, 500_000, true);
    let settings = create_settings();

    assert_eq!(
        calculate_match_score(&creator, &settings),
        calculate_match_score(&creator, &settings)
    );
}

#[test]
fn test_brand_awareness_gaming_tiktok_scenario() {
    let creator = create_creator("1", Platform::TikTok, 500_000, true);
    let settings = create_settings();

    assert_eq!(calculate_budget_fit(&creator, &settings), 1.0);
    assert_eq!(calculate_content_relevance(&creator, &settings), 1.0);
    assert_eq!(calculate_audience_fit(&creator, &settings), 0.5);

    // 0.7 * (5/15) + 0.3 * (500_000/2_000_000)
    let engagement = 0.7 * (5.0 / 15.0) + 0.3 * 0.25;
    assert!((calculate_engagement_quality(&creator) - engagement).abs() < 1e-9);

    assert_eq!(
        calculate_platform_fit(CampaignType::BrandAwareness, &settings.platforms),
        1.2
    );

    // Weighted sum 0.80583 under the Brand Awareness vector
    assert_eq!(calculate_match_score(&creator, &settings), 81);
}

#[test]
fn test_campaign_type_changes_weighting() {
    let mut creator = create_creator("1", Platform::TikTok, 500_000, true);
    let mut age = HashMap::new();
    age.insert("18-24".to_string(), 90.0);
    creator.audience_demographics = Some(AudienceDemographics {
        age,
        gender: HashMap::new(),
    });

    let base = create_settings();
    let community = CampaignSettings {
        campaign_type: CampaignType::CommunityEngagement,
        target_age_groups: Some(vec!["18-24".to_string()]),
        ..base.clone()
    };
    let awareness = CampaignSettings {
        target_age_groups: Some(vec!["18-24".to_string()]),
        ..base
    };

    // Community Engagement weights audience fit at 0.30 vs 0.20, so a
    // creator with a strong demographic match gains relative to the
    // content-heavy Brand Awareness vector losing its 0.40 relevance weight.
    let community_score = calculate_match_score(&creator, &community);
    let awareness_score = calculate_match_score(&creator, &awareness);
    assert_ne!(community_score, awareness_score);
}

#[test]
fn test_weight_vectors_and_tables_cover_all_campaign_types() {
    // Product Launch is the one vector that sums above 1.0 (1.10)
    let cases = [
        (CampaignType::BrandAwareness, 1.0),
        (CampaignType::ProductLaunch, 1.10),
        (CampaignType::CommunityEngagement, 1.0),
        (CampaignType::ConversionsAndSales, 1.0),
    ];

    for (ct, expected) in cases {
        let w = weights_for(ct);
        let sum = w.budget_fit
            + w.content_relevance
            + w.audience_fit
            + w.engagement_quality
            + w.previous_performance
            + w.platform_fit
            + w.location_fit;
        assert!((sum - expected).abs() < 1e-9);

        for platform in [Platform::TikTok, Platform::YouTube, Platform::Twitch] {
            assert!(platform_multiplier(ct, &platform) > 0.0);
        }
    }
}
