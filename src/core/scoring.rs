use crate::core::dimensions::{
    score_compensation, score_experience, score_industry, score_location, score_team_size,
    DimensionScore,
};
use crate::core::skills::{calculate_skill_overlap, describe_skill_overlap};
use crate::core::tables::ScoringTables;
use crate::models::{
    Impact, MatchReason, MatchWarning, Opportunity, ScoringWeights, Severity, Team, WarningType,
};

pub const INDUSTRY_FACTOR: &str = "Industry Alignment";
pub const SKILLS_FACTOR: &str = "Skills Compatibility";
pub const COMPENSATION_FACTOR: &str = "Compensation Match";
pub const TEAM_SIZE_FACTOR: &str = "Team Size Fit";
pub const LOCATION_FACTOR: &str = "Location & Work Style";
pub const EXPERIENCE_FACTOR: &str = "Liftout Experience";

/// Compensation scores below this raise a warning
const COMPENSATION_WARNING_THRESHOLD: u8 = 60;
const COMPENSATION_HIGH_SEVERITY: u8 = 40;

/// Per-dimension scores for one team/opportunity pair
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionBreakdown {
    pub industry: DimensionScore,
    pub skills: DimensionScore,
    pub compensation: DimensionScore,
    pub team_size: DimensionScore,
    pub location: DimensionScore,
    pub experience: DimensionScore,
}

/// Aggregated score with its explanations
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub score: u8,
    pub breakdown: DimensionBreakdown,
    pub reasons: Vec<MatchReason>,
    pub warnings: Vec<MatchWarning>,
}

/// Run every dimension scorer for a pair
pub fn score_dimensions(
    team: &Team,
    opportunity: &Opportunity,
    tables: &ScoringTables,
) -> DimensionBreakdown {
    let overlap = calculate_skill_overlap(&team.skills, &opportunity.skills, tables);

    DimensionBreakdown {
        industry: score_industry(&team.industry, &opportunity.industry, tables),
        skills: DimensionScore {
            score: overlap.score,
            description: describe_skill_overlap(&overlap, opportunity.skills.len()),
        },
        compensation: score_compensation(&team.compensation_expectation, &opportunity.compensation),
        team_size: score_team_size(team.size, &opportunity.team_size),
        location: score_location(
            &team.location,
            team.remote_status,
            &opportunity.location,
            opportunity.work_style,
        ),
        experience: score_experience(team.liftout_experience, tables),
    }
}

/// Calculate the overall compatibility score (0-100)
///
/// Scoring formula:
/// score = round(
///     industry * 0.25 +
///     skills * 0.30 +
///     compensation * 0.20 +
///     size * 0.10 +
///     location * 0.10 +
///     experience * 0.05
/// )
pub fn calculate_match_score(breakdown: &DimensionBreakdown, weights: &ScoringWeights) -> u8 {
    let total = breakdown.industry.score as f64 * weights.industry
        + breakdown.skills.score as f64 * weights.skills
        + breakdown.compensation.score as f64 * weights.compensation
        + breakdown.team_size.score as f64 * weights.size
        + breakdown.location.score as f64 * weights.location
        + breakdown.experience.score as f64 * weights.experience;

    total.round().clamp(0.0, 100.0) as u8
}

/// Score a pair and explain the result
pub fn assess(
    team: &Team,
    opportunity: &Opportunity,
    weights: &ScoringWeights,
    tables: &ScoringTables,
) -> Assessment {
    let breakdown = score_dimensions(team, opportunity, tables);
    let score = calculate_match_score(&breakdown, weights);
    let reasons = build_reasons(&breakdown, weights);
    let warnings = build_warnings(&breakdown, team, opportunity);

    Assessment {
        score,
        breakdown,
        reasons,
        warnings,
    }
}

fn build_reasons(breakdown: &DimensionBreakdown, weights: &ScoringWeights) -> Vec<MatchReason> {
    [
        (INDUSTRY_FACTOR, &breakdown.industry, weights.industry),
        (SKILLS_FACTOR, &breakdown.skills, weights.skills),
        (COMPENSATION_FACTOR, &breakdown.compensation, weights.compensation),
        (TEAM_SIZE_FACTOR, &breakdown.team_size, weights.size),
        (LOCATION_FACTOR, &breakdown.location, weights.location),
        (EXPERIENCE_FACTOR, &breakdown.experience, weights.experience),
    ]
    .into_iter()
    .map(|(factor, dimension, weight)| MatchReason {
        factor: factor.to_string(),
        score: dimension.score,
        description: dimension.description.clone(),
        impact: Impact::from_weight(weight),
    })
    .collect()
}

fn build_warnings(
    breakdown: &DimensionBreakdown,
    team: &Team,
    opportunity: &Opportunity,
) -> Vec<MatchWarning> {
    let mut warnings = Vec::new();

    let compensation = breakdown.compensation.score;
    if compensation < COMPENSATION_WARNING_THRESHOLD {
        let severity = if compensation < COMPENSATION_HIGH_SEVERITY {
            Severity::High
        } else {
            Severity::Medium
        };

        warnings.push(MatchWarning {
            kind: WarningType::CompensationGap,
            severity,
            description: "Compensation expectations and the offered package are misaligned"
                .to_string(),
            suggestion: "Consider equity, signing bonuses or performance incentives to bridge the gap"
                .to_string(),
        });
    }

    let team_currency = team.compensation_expectation.currency.trim();
    let offer_currency = opportunity.compensation.currency.trim();
    if !team_currency.eq_ignore_ascii_case(offer_currency) {
        warnings.push(MatchWarning {
            kind: WarningType::CurrencyMismatch,
            severity: Severity::Low,
            description: format!(
                "Team expects {} but the opportunity pays in {}; ranges were compared without conversion",
                team_currency, offer_currency
            ),
            suggestion: "Confirm compensation in a common currency before comparing offers"
                .to_string(),
        });
    }

    warnings
}
