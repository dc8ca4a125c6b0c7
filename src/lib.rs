//! Creator Match - matching service for influencer campaign planning
//!
//! This library scores a fixed dataset of creator profiles against
//! caller-supplied campaign settings and exposes filtered views of the
//! dataset over HTTP.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{calculate_match_score, Matcher};
pub use crate::models::{CampaignSettings, CampaignType, Creator, FilterCriteria, Platform, ScoredCreator};
pub use crate::services::DatasetProvider;
