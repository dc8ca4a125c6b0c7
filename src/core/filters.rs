use std::str::FromStr;

use crate::models::{Creator, FilterCriteria, FilterQuery, Platform};

/// Parse a comma-separated list parameter, skipping it when blank
///
/// A missing parameter or a supplied empty string both mean "no constraint".
fn parse_list(raw: Option<&str>) -> Option<Vec<String>> {
    let values: Vec<String> = raw?
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

/// Parse a numeric parameter, skipping it when malformed
fn parse_number<T: FromStr>(raw: Option<&str>) -> Option<T> {
    raw?.trim().parse().ok()
}

/// Parse a "min,max" range parameter, skipping it when malformed
///
/// Both bounds must parse for the constraint to apply.
fn parse_range(raw: Option<&str>) -> Option<(u64, u64)> {
    let raw = raw?;
    let (min, max) = raw.split_once(',')?;
    let min = min.trim().parse().ok()?;
    let max = max.trim().parse().ok()?;
    Some((min, max))
}

/// Build filter criteria from raw query parameters
///
/// Every field parses fail-open: a malformed value degrades to "no
/// constraint" for that one dimension and never aborts the request.
pub fn parse_criteria(query: &FilterQuery) -> FilterCriteria {
    FilterCriteria {
        platforms: parse_list(query.platforms.as_deref())
            .map(|names| names.into_iter().map(Platform::from).collect()),
        categories: parse_list(query.categories.as_deref()),
        follower_range: parse_range(query.follower_range.as_deref()),
        engagement_rate_min: parse_number(query.engagement_rate_min.as_deref()),
        regions: parse_list(query.regions.as_deref()),
        verified_only: query.verified_only.as_deref() == Some("true"),
    }
}

/// Check whether a creator satisfies every supplied criterion
///
/// Predicates are independent, so evaluation order does not affect the
/// result.
#[inline]
pub fn matches_criteria(creator: &Creator, criteria: &FilterCriteria) -> bool {
    if let Some(platforms) = &criteria.platforms {
        if !platforms.contains(&creator.platform) {
            return false;
        }
    }

    if let Some(categories) = &criteria.categories {
        if !creator
            .content_categories
            .iter()
            .any(|category| categories.contains(category))
        {
            return false;
        }
    }

    if let Some((min, max)) = criteria.follower_range {
        if creator.followers < min || creator.followers > max {
            return false;
        }
    }

    if let Some(min_rate) = criteria.engagement_rate_min {
        if creator.engagement_rate < min_rate {
            return false;
        }
    }

    if let Some(regions) = &criteria.regions {
        if !regions.contains(&creator.location) {
            return false;
        }
    }

    if criteria.verified_only && !creator.verified {
        return false;
    }

    true
}

/// Filter the dataset, preserving its original order
pub fn filter_creators(creators: &[Creator], criteria: &FilterCriteria) -> Vec<Creator> {
    creators
        .iter()
        .filter(|creator| matches_criteria(creator, criteria))
        .cloned()
        .collect()
}
