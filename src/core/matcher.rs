use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex};

use crate::core::insights::{generate_insights, recommend_actions, InsightInputs};
use crate::core::scoring::{assess, calculate_match_score, score_dimensions};
use crate::core::tables::ScoringTables;
use crate::models::{MatchResult, Opportunity, RankedMatch, ScoringWeights, Team};

/// Default number of pairs returned by the batch ranker
pub const DEFAULT_TOP_MATCHES: usize = 5;

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Dimension scoring (industry, skills, compensation, size, location, experience)
/// 2. Weighted aggregation and warnings
/// 3. Insights and recommended actions
/// 4. Ranking (batch mode only)
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    tables: Arc<ScoringTables>,
    rng: Option<Arc<Mutex<StdRng>>>,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, tables: ScoringTables) -> Self {
        Self {
            weights,
            tables: Arc::new(tables),
            rng: None,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default(), ScoringTables::default())
    }

    /// Draw market intelligence from one generator seeded with `seed`
    ///
    /// The generator is shared by clones of this matcher and advances on
    /// every call, so a fresh matcher built with the same seed replays the
    /// same sequence of selections.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Some(Arc::new(Mutex::new(StdRng::seed_from_u64(seed))));
        self
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut dyn rand::RngCore) -> T) -> T {
        match &self.rng {
            Some(rng) => {
                let mut guard = rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                f(&mut *guard)
            }
            None => f(&mut rand::rng()),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn tables(&self) -> &ScoringTables {
        &self.tables
    }

    /// Score a team against an opportunity
    pub fn calculate_match(&self, team: &Team, opportunity: &Opportunity) -> MatchResult {
        self.with_rng(|rng| self.calculate_match_with_rng(team, opportunity, rng))
    }

    /// Score a team against an opportunity, drawing randomness from `rng`
    pub fn calculate_match_with_rng<R: Rng + ?Sized>(
        &self,
        team: &Team,
        opportunity: &Opportunity,
        rng: &mut R,
    ) -> MatchResult {
        let assessment = assess(team, opportunity, &self.weights, &self.tables);

        let inputs = InsightInputs {
            overall: assessment.score,
            industry: assessment.breakdown.industry.score,
            skills: assessment.breakdown.skills.score,
            location: assessment.breakdown.location.score,
        };

        let insights = generate_insights(&inputs, team, opportunity, rng);
        let recommended_actions = recommend_actions(&inputs, &assessment.warnings, opportunity);

        tracing::trace!(
            team = %team.id,
            opportunity = %opportunity.id,
            score = assessment.score,
            warnings = assessment.warnings.len(),
            "Scored match"
        );

        MatchResult {
            score: assessment.score,
            reasons: assessment.reasons,
            warnings: assessment.warnings,
            insights,
            recommended_actions,
        }
    }

    /// Rank every team against every opportunity and keep the best `limit`
    ///
    /// Ties keep input order (team first, then opportunity).
    pub fn top_matches<'a>(
        &self,
        teams: &'a [Team],
        opportunities: &'a [Opportunity],
        limit: usize,
    ) -> Vec<RankedMatch<'a>> {
        self.with_rng(|rng| self.top_matches_with_rng(teams, opportunities, limit, rng))
    }

    /// Pairs are ranked on the overall score alone; insights and actions
    /// are only generated for the `limit` pairs that are returned.
    pub fn top_matches_with_rng<'a, R: Rng + ?Sized>(
        &self,
        teams: &'a [Team],
        opportunities: &'a [Opportunity],
        limit: usize,
        rng: &mut R,
    ) -> Vec<RankedMatch<'a>> {
        let mut scored: Vec<(u8, &'a Team, &'a Opportunity)> =
            Vec::with_capacity(teams.len() * opportunities.len());

        for team in teams {
            for opportunity in opportunities {
                let breakdown = score_dimensions(team, opportunity, &self.tables);
                scored.push((calculate_match_score(&breakdown, &self.weights), team, opportunity));
            }
        }

        let total_pairs = scored.len();

        // Stable sort keeps input order between equal scores
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.truncate(limit);

        let ranked: Vec<RankedMatch<'a>> = scored
            .into_iter()
            .map(|(_, team, opportunity)| RankedMatch {
                team,
                opportunity,
                result: self.calculate_match_with_rng(team, opportunity, rng),
            })
            .collect();

        tracing::debug!(
            "Ranked {} pairs ({} teams x {} opportunities), returning {}",
            total_pairs,
            teams.len(),
            opportunities.len(),
            ranked.len()
        );

        ranked
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
