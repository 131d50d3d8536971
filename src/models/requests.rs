use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{Opportunity, Team};

/// Request to score a single team against a single opportunity
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreMatchRequest {
    #[validate(nested)]
    pub team: Team,
    #[validate(nested)]
    pub opportunity: Opportunity,
}

/// Request to rank team/opportunity pairs
///
/// Omitted lists are read from the stores. Each inline list holds at most
/// 1000 records.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct TopMatchesRequest {
    #[serde(default)]
    #[validate(length(max = 1000), nested)]
    pub teams: Option<Vec<Team>>,
    #[serde(default)]
    #[validate(length(max = 1000), nested)]
    pub opportunities: Option<Vec<Opportunity>>,
    #[serde(default)]
    #[validate(range(min = 1))]
    pub limit: Option<usize>,
}
