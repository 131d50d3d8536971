use rand::Rng;

use crate::models::{
    InsightType, LiftoutExperience, MatchInsight, MatchWarning, Opportunity, Team, WarningType,
};

const TIMELINE_CONFIDENCE: u8 = 75;
const MARKET_CONFIDENCE: u8 = 82;

/// Statements the market intelligence insight picks from
pub const MARKET_INTELLIGENCE: [&str; 3] = [
    "Liftout activity in this sector has grown over the past year, strengthening the team's negotiating position.",
    "Comparable teams have secured a 15-25% compensation premium when moving together.",
    "Companies pursuing similar liftouts typically close within one quarter of first contact.",
];

/// Dimension scores the insight generator reads
#[derive(Debug, Clone, Copy)]
pub struct InsightInputs {
    pub overall: u8,
    pub industry: u8,
    pub skills: u8,
    pub location: u8,
}

/// Build the three insights for a match, in fixed order
pub fn generate_insights<R: Rng + ?Sized>(
    inputs: &InsightInputs,
    team: &Team,
    opportunity: &Opportunity,
    rng: &mut R,
) -> Vec<MatchInsight> {
    vec![
        predict_success(inputs.overall),
        estimate_timeline(inputs.industry, team, opportunity),
        market_intelligence(rng),
    ]
}

/// Success probability bucket for an overall score
pub fn predict_success(score: u8) -> MatchInsight {
    let (confidence, outlook) = if score >= 85 {
        (92, "excellent")
    } else if score >= 70 {
        (78, "strong")
    } else if score >= 55 {
        (61, "moderate")
    } else {
        (35, "lower compatibility")
    };

    MatchInsight {
        kind: InsightType::SuccessPrediction,
        title: "Success Probability".to_string(),
        description: format!(
            "With a {}% compatibility score this liftout shows {} success potential",
            score, outlook
        ),
        confidence,
    }
}

/// Estimated integration time in months (lower bound of the range)
pub fn timeline_months(industry_score: u8, team: &Team, opportunity: &Opportunity) -> u32 {
    let mut months = 3;
    if industry_score < 70 {
        months += 2;
    }
    if team.liftout_experience == LiftoutExperience::FirstTime {
        months += 1;
    }
    if opportunity.confidential {
        months += 1;
    }
    if team.size > 6 {
        months += 1;
    }
    months
}

fn estimate_timeline(industry_score: u8, team: &Team, opportunity: &Opportunity) -> MatchInsight {
    let months = timeline_months(industry_score, team, opportunity);

    MatchInsight {
        kind: InsightType::Timeline,
        title: "Integration Timeline".to_string(),
        description: format!("Expect a {}-{} month integration period", months, months + 2),
        confidence: TIMELINE_CONFIDENCE,
    }
}

fn market_intelligence<R: Rng + ?Sized>(rng: &mut R) -> MatchInsight {
    let message = MARKET_INTELLIGENCE[rng.random_range(0..MARKET_INTELLIGENCE.len())];

    MatchInsight {
        kind: InsightType::MarketIntelligence,
        title: "Market Intelligence".to_string(),
        description: message.to_string(),
        confidence: MARKET_CONFIDENCE,
    }
}

/// Next steps for the hiring company, most important first
pub fn recommend_actions(
    inputs: &InsightInputs,
    warnings: &[MatchWarning],
    opportunity: &Opportunity,
) -> Vec<String> {
    let mut actions: Vec<&str> = Vec::new();

    if inputs.overall >= 80 {
        actions.push("Schedule an introductory call with the team lead");
        actions.push("Prepare a tailored offer package");
    } else if inputs.overall >= 60 {
        actions.push("Arrange an exploratory conversation to validate fit");
    } else {
        actions.push("Review alignment gaps before initiating contact");
    }

    if warnings.iter().any(|w| w.kind == WarningType::CompensationGap) {
        actions.push("Discuss compensation structure, including equity and signing bonuses");
    }
    if inputs.skills < 50 {
        actions.push("Assess skill gaps and plan targeted onboarding");
    }
    if inputs.location < 60 {
        actions.push("Clarify remote work and relocation expectations");
    }
    if opportunity.confidential {
        actions.push("Arrange a confidential briefing under NDA");
    }

    actions.into_iter().map(String::from).collect()
}
