// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{AudienceDemographics, CampaignType, Creator, FilterCriteria, Platform, ScoringWeights};
pub use requests::{CampaignSettings, FilterQuery};
pub use responses::{ErrorResponse, HealthResponse, ScoredCreator};
