//! Liftout Match - compatibility scoring for the Liftout marketplace
//!
//! Scores how well an intact team fits an opportunity on six dimensions
//! (industry, skills, compensation, team size, location, liftout experience),
//! explains the result, and ranks team/opportunity pairs.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, ScoringTables};
pub use crate::models::{MatchResult, Opportunity, RankedMatch, ScoringWeights, Team};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let matcher = Matcher::default();
        assert_eq!(*matcher.weights(), ScoringWeights::default());
        assert_eq!(*matcher.tables(), ScoringTables::default());
    }
}
