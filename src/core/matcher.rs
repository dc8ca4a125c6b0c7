use crate::core::scoring::calculate_match_score;
use crate::models::{CampaignSettings, Creator, ScoredCreator};

/// Scoring orchestrator - runs the match formula over the whole dataset
///
/// Stateless: the weight vector is resolved per request from the campaign
/// type. Holding it in application state keeps handlers uniform and leaves
/// room for configured weight overrides later.
#[derive(Debug, Clone, Default)]
pub struct Matcher;

impl Matcher {
    pub fn new() -> Self {
        Self
    }

    /// Score every creator against the campaign settings
    ///
    /// Output preserves dataset order; each creator is returned augmented
    /// with its match score. Never mutates the dataset.
    pub fn score_all(
        &self,
        creators: &[Creator],
        settings: &CampaignSettings,
    ) -> Vec<ScoredCreator> {
        creators
            .iter()
            .map(|creator| ScoredCreator {
                creator: creator.clone(),
                match_score: calculate_match_score(creator, settings),
            })
            .collect()
    }
}
