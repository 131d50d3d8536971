use crate::core::tables::ScoringTables;
use crate::models::{
    CompensationExpectation, CompensationOffer, LiftoutExperience, TeamSizeRange, WorkStyle,
};

/// Score for a single compatibility dimension (0-100) with its explanation
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionScore {
    pub score: u8,
    pub description: String,
}

impl DimensionScore {
    fn new(score: f64, description: impl Into<String>) -> Self {
        Self {
            score: score.clamp(0.0, 100.0).round() as u8,
            description: description.into(),
        }
    }
}

/// Score how well a team's industry transfers into the opportunity's industry
pub fn score_industry(
    team_industry: &str,
    opportunity_industry: &str,
    tables: &ScoringTables,
) -> DimensionScore {
    let factor = tables.transfer_factor(team_industry, opportunity_industry);
    let score = (factor * 100.0).round();

    let description = if score >= 90.0 {
        format!("Excellent transfer from {} to {}", team_industry, opportunity_industry)
    } else if score >= 70.0 {
        format!("Strong transferability from {} to {}", team_industry, opportunity_industry)
    } else if score >= 50.0 {
        format!("Moderate transition from {} to {}", team_industry, opportunity_industry)
    } else {
        format!(
            "Significant change moving from {} to {}; expect a longer ramp-up",
            team_industry, opportunity_industry
        )
    };

    DimensionScore::new(score, description)
}

/// Score how well the team's compensation expectation fits the offered range
///
/// Overlapping ranges score by the share of the team range that is covered,
/// plus a 20 point bonus. Disjoint ranges lose points with the relative gap
/// between the two midpoints.
pub fn score_compensation(
    expectation: &CompensationExpectation,
    offer: &CompensationOffer,
) -> DimensionScore {
    let overlap_start = expectation.min.max(offer.min);
    let overlap_end = expectation.max.min(offer.max);

    if overlap_start <= overlap_end {
        let team_range = expectation.max - expectation.min;
        let score = if team_range <= 0.0 {
            // Single point expectation that lies inside the offer
            100.0
        } else {
            ((overlap_end - overlap_start) / team_range * 100.0 + 20.0).min(100.0)
        };

        let description = if score >= 80.0 {
            "Compensation expectations are well covered by the offered range"
        } else {
            "Compensation ranges partially overlap"
        };
        return DimensionScore::new(score, description);
    }

    let team_mid = (expectation.min + expectation.max) / 2.0;
    let offer_mid = (offer.min + offer.max) / 2.0;
    if team_mid <= 0.0 {
        return DimensionScore::new(0.0, "Compensation ranges do not overlap");
    }

    let gap = (team_mid - offer_mid).abs() / team_mid;
    let score = (100.0 - gap * 100.0).max(0.0);

    let description = if team_mid > offer_mid {
        format!("Team expectations exceed the offered range by about {:.0}%", gap * 100.0)
    } else {
        format!("Offered range exceeds team expectations by about {:.0}%", gap * 100.0)
    };

    DimensionScore::new(score, description)
}

/// Score the team size against the opportunity's accepted range
pub fn score_team_size(size: u32, range: &TeamSizeRange) -> DimensionScore {
    if range.contains(size) {
        return DimensionScore::new(
            100.0,
            format!("Team of {} fits the {}-{} member range", size, range.min, range.max),
        );
    }

    if size < range.min {
        let missing = range.min - size;
        return DimensionScore::new(
            100.0 - 20.0 * missing as f64,
            format!("Team is {} member(s) short of the minimum of {}", missing, range.min),
        );
    }

    let excess = size - range.max;
    DimensionScore::new(
        100.0 - 15.0 * excess as f64,
        format!("Team is {} member(s) over the maximum of {}", excess, range.max),
    )
}

/// Score location and work style compatibility
///
/// Rules are checked in order and the first match wins.
pub fn score_location(
    team_location: &str,
    team_style: WorkStyle,
    opportunity_location: &str,
    opportunity_style: WorkStyle,
) -> DimensionScore {
    use WorkStyle::*;

    if team_style == Remote && opportunity_style == Remote {
        return DimensionScore::new(100.0, "Fully remote on both sides");
    }

    if same_location(team_location, opportunity_location) {
        return DimensionScore::new(100.0, format!("Same location ({})", opportunity_location.trim()));
    }

    match (team_style, opportunity_style) {
        (Hybrid | Remote, Hybrid) => {
            DimensionScore::new(85.0, "Hybrid arrangement works for the team")
        }
        (Hybrid, Onsite) => {
            DimensionScore::new(60.0, "Hybrid team moving to an onsite role")
        }
        (Remote, Onsite) => {
            DimensionScore::new(30.0, "Remote team would need to relocate or commute onsite")
        }
        _ => DimensionScore::new(50.0, "Location and work style need discussion"),
    }
}

fn same_location(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

/// Score prior liftout experience
pub fn score_experience(experience: LiftoutExperience, tables: &ScoringTables) -> DimensionScore {
    let score = tables.experience_score(experience);

    let description = match experience {
        LiftoutExperience::FirstTime => "First liftout; extra transition support recommended",
        LiftoutExperience::Experienced => "Team has moved together before",
        LiftoutExperience::Veteran => "Veteran of several liftouts",
        LiftoutExperience::Unknown => "Liftout experience not specified",
    };

    DimensionScore::new(score as f64, description)
}
