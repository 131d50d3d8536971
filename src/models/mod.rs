// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CompensationExpectation, CompensationOffer, CompensationType, Impact, InsightType,
    LiftoutExperience, LiftoutType, MatchInsight, MatchReason, MatchResult, MatchWarning,
    Opportunity, RankedMatch, ScoringWeights, Severity, Team, TeamSizeRange, WarningType,
    WorkStyle,
};
pub use requests::{ScoreMatchRequest, TopMatchesRequest};
pub use responses::{ErrorResponse, HealthResponse, TopMatchesResponse};
