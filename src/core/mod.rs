// Core algorithm exports
pub mod dimensions;
pub mod insights;
pub mod matcher;
pub mod scoring;
pub mod skills;
pub mod tables;

pub use dimensions::{
    score_compensation, score_experience, score_industry, score_location, score_team_size,
    DimensionScore,
};
pub use insights::{generate_insights, predict_success, recommend_actions, timeline_months};
pub use matcher::{Matcher, DEFAULT_TOP_MATCHES};
pub use scoring::{assess, calculate_match_score, score_dimensions, Assessment, DimensionBreakdown};
pub use skills::{calculate_skill_overlap, calculate_skill_score, SkillOverlap};
pub use tables::{ScoringTables, TablesError};
