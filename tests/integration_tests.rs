// Integration tests for Liftout Match

use liftout_match::core::{Matcher, ScoringTables};
use liftout_match::models::{
    CompensationExpectation, CompensationOffer, CompensationType, InsightType, LiftoutExperience,
    LiftoutType, Opportunity, ScoringWeights, Team, TeamSizeRange, WarningType, WorkStyle,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const FACTORS: [&str; 6] = [
    "Industry Alignment",
    "Skills Compatibility",
    "Compensation Match",
    "Team Size Fit",
    "Location & Work Style",
    "Liftout Experience",
];

const INDUSTRIES: [&str; 5] = [
    "Financial Services",
    "Investment Banking",
    "Healthcare Tech",
    "Management Consulting",
    "Fintech",
];

fn create_test_team(id: usize) -> Team {
    let experience = match id % 4 {
        0 => LiftoutExperience::FirstTime,
        1 => LiftoutExperience::Experienced,
        2 => LiftoutExperience::Veteran,
        _ => LiftoutExperience::Unknown,
    };
    let style = match id % 3 {
        0 => WorkStyle::Remote,
        1 => WorkStyle::Hybrid,
        _ => WorkStyle::Onsite,
    };
    let min = 90_000.0 + id as f64 * 20_000.0;

    Team {
        id: format!("team-{}", id),
        name: format!("Team {}", id),
        industry: INDUSTRIES[id % INDUSTRIES.len()].to_string(),
        specialization: "Analytics".to_string(),
        size: 2 + id as u32,
        location: if id % 2 == 0 { "NYC" } else { "London" }.to_string(),
        remote_status: style,
        years_working_together: id as f64,
        liftout_experience: experience,
        compensation_expectation: CompensationExpectation {
            min,
            max: min + (id % 3) as f64 * 30_000.0,
            currency: "USD".to_string(),
        },
        skills: ["Python", "SQL", "Quantitative Finance", "Valuation"]
            .iter()
            .take(1 + id % 4)
            .map(|s| s.to_string())
            .collect(),
    }
}

fn create_test_opportunity(id: usize) -> Opportunity {
    let style = match id % 3 {
        0 => WorkStyle::Hybrid,
        1 => WorkStyle::Onsite,
        _ => WorkStyle::Remote,
    };
    let min = 100_000.0 + id as f64 * 15_000.0;

    Opportunity {
        id: format!("opp-{}", id),
        title: format!("Opportunity {}", id),
        industry: INDUSTRIES[(id + 1) % INDUSTRIES.len()].to_string(),
        location: if id % 2 == 0 { "London" } else { "SF" }.to_string(),
        work_style: style,
        compensation: CompensationOffer {
            min,
            max: min + 50_000.0,
            currency: "USD".to_string(),
            kind: CompensationType::TotalPackage,
        },
        team_size: TeamSizeRange {
            min: 2 + (id % 3) as u32,
            max: 5 + (id % 4) as u32,
        },
        skills: if id == 0 {
            vec![]
        } else {
            vec!["Python".to_string(), "Risk Management".to_string(), "Excel".to_string()]
        },
        liftout_type: LiftoutType::MarketEntry,
        confidential: id % 2 == 1,
    }
}

fn reference_team() -> Team {
    Team {
        id: "ref-team".to_string(),
        name: "Reference".to_string(),
        industry: "Financial Services".to_string(),
        specialization: "Payments".to_string(),
        size: 4,
        location: "NYC".to_string(),
        remote_status: WorkStyle::Hybrid,
        years_working_together: 3.0,
        liftout_experience: LiftoutExperience::Experienced,
        compensation_expectation: CompensationExpectation {
            min: 150_000.0,
            max: 200_000.0,
            currency: "USD".to_string(),
        },
        skills: vec!["Python".to_string(), "SQL".to_string()],
    }
}

fn reference_opportunity() -> Opportunity {
    Opportunity {
        id: "ref-opp".to_string(),
        title: "Reference".to_string(),
        industry: "Fintech".to_string(),
        location: "SF".to_string(),
        work_style: WorkStyle::Hybrid,
        compensation: CompensationOffer {
            min: 140_000.0,
            max: 190_000.0,
            currency: "USD".to_string(),
            kind: CompensationType::Salary,
        },
        team_size: TeamSizeRange { min: 3, max: 5 },
        skills: vec!["Python".to_string(), "Machine Learning".to_string()],
        liftout_type: LiftoutType::Expansion,
        confidential: false,
    }
}

#[test]
fn test_integration_reference_scenario() {
    let matcher = Matcher::with_default_weights();
    let result = matcher.calculate_match(&reference_team(), &reference_opportunity());

    let scores: Vec<u8> = result.reasons.iter().map(|r| r.score).collect();
    assert_eq!(scores, vec![85, 50, 100, 100, 85, 90]);

    let expected = (85.0 * 0.25 + 50.0 * 0.30 + 100.0 * 0.20 + 100.0 * 0.10 + 85.0 * 0.10 + 90.0 * 0.05_f64).round();
    assert_eq!(result.score as f64, expected);
    assert_eq!(result.score, 79);
    assert!(result.warnings.is_empty());

    assert_eq!(result.insights[0].kind, InsightType::SuccessPrediction);
    assert_eq!(result.insights[0].confidence, 78);
    assert!(result.insights[0].description.contains("79"));
    assert_eq!(result.insights[1].kind, InsightType::Timeline);
    assert!(result.insights[1].description.contains("3-5 month"));
    assert_eq!(result.insights[2].kind, InsightType::MarketIntelligence);
}

#[test]
fn test_integration_scores_stay_in_bounds() {
    let matcher = Matcher::with_default_weights();

    for t in 0..10 {
        for o in 0..10 {
            let result = matcher.calculate_match(&create_test_team(t), &create_test_opportunity(o));

            assert!(result.score <= 100);
            assert_eq!(result.reasons.len(), 6);
            assert_eq!(result.insights.len(), 3);
            assert!(!result.recommended_actions.is_empty());

            for (reason, factor) in result.reasons.iter().zip(FACTORS) {
                assert_eq!(reason.factor, factor);
                assert!(reason.score <= 100);
            }
        }
    }
}

#[test]
fn test_integration_idempotent() {
    let matcher = Matcher::with_default_weights();
    let team = create_test_team(3);
    let opportunity = create_test_opportunity(5);

    let first = matcher.calculate_match(&team, &opportunity);
    let second = matcher.calculate_match(&team, &opportunity);

    assert_eq!(first.score, second.score);
    assert_eq!(first.reasons, second.reasons);
    assert_eq!(first.warnings, second.warnings);
    assert_eq!(first.recommended_actions, second.recommended_actions);

    // With the same seed the insights match as well
    let first = matcher.calculate_match_with_rng(&team, &opportunity, &mut StdRng::seed_from_u64(3));
    let second = matcher.calculate_match_with_rng(&team, &opportunity, &mut StdRng::seed_from_u64(3));
    assert_eq!(first, second);
}

#[test]
fn test_integration_empty_required_skills() {
    let matcher = Matcher::with_default_weights();
    let result = matcher.calculate_match(&create_test_team(1), &create_test_opportunity(0));

    assert_eq!(result.reasons[1].score, 0);
}

#[test]
fn test_integration_compensation_gap_warning() {
    let matcher = Matcher::with_default_weights();
    let mut team = reference_team();
    team.compensation_expectation.min = 400_000.0;
    team.compensation_expectation.max = 450_000.0;

    let result = matcher.calculate_match(&team, &reference_opportunity());

    assert!(result.factor_score("Compensation Match").unwrap() < 60);
    assert!(result
        .warnings
        .iter()
        .any(|w| w.kind == WarningType::CompensationGap));
    assert!(result
        .recommended_actions
        .iter()
        .any(|a| a.contains("compensation structure")));
}

#[test]
fn test_integration_top_matches_limit_and_order() {
    let matcher = Matcher::with_default_weights();
    let teams: Vec<Team> = (0..10).map(create_test_team).collect();
    let opportunities: Vec<Opportunity> = (0..10).map(create_test_opportunity).collect();

    let ranked = matcher.top_matches(&teams, &opportunities, 5);

    assert!(ranked.len() <= 5);
    assert_eq!(ranked.len(), 5);
    assert!(ranked
        .windows(2)
        .all(|pair| pair[0].result.score >= pair[1].result.score));

    // The best pair must be at least as good as any pair scored directly
    let best = teams
        .iter()
        .flat_map(|t| opportunities.iter().map(move |o| (t, o)))
        .map(|(t, o)| matcher.calculate_match(t, o).score)
        .max()
        .unwrap();
    assert_eq!(ranked[0].result.score, best);
}

#[test]
fn test_integration_custom_tables_and_weights() {
    let raw = r#"
        [industry_transfer."Fintech"]
        "Financial Services" = 0.95
    "#;
    let tables = ScoringTables::from_toml_str(raw).unwrap();
    let weights = ScoringWeights {
        industry: 1.0,
        skills: 0.0,
        compensation: 0.0,
        size: 0.0,
        location: 0.0,
        experience: 0.0,
    };
    let matcher = Matcher::new(weights, tables);

    let mut team = reference_team();
    team.industry = "Fintech".to_string();
    let mut opportunity = reference_opportunity();
    opportunity.industry = "Financial Services".to_string();

    let result = matcher.calculate_match(&team, &opportunity);
    assert_eq!(result.score, 95);
    // Experience table was not provided, so the default applies
    assert_eq!(result.reasons[5].score, 70);
}

#[test]
fn test_integration_bundled_tables_match_defaults() {
    let tables = ScoringTables::load("config/scoring_tables.toml").unwrap();
    assert_eq!(tables, ScoringTables::default());
}
