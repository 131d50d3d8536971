use crate::core::tables::ScoringTables;

/// Weight of a related (synonym) skill match relative to an exact match
pub const RELATED_MATCH_WEIGHT: f64 = 0.7;

/// Breakdown of a skill comparison
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillOverlap {
    pub exact_matches: usize,
    pub related_matches: usize,
    pub score: u8,
}

/// Calculate skill compatibility (0-100) between a team and the skills an
/// opportunity requires
///
/// Every (team skill, opportunity skill) pair is checked against the synonym
/// table in both directions, so two skills listing each other count twice.
pub fn calculate_skill_overlap(
    team_skills: &[String],
    opportunity_skills: &[String],
    tables: &ScoringTables,
) -> SkillOverlap {
    if opportunity_skills.is_empty() {
        return SkillOverlap {
            exact_matches: 0,
            related_matches: 0,
            score: 0,
        };
    }

    let team: Vec<String> = team_skills.iter().map(|s| s.to_lowercase()).collect();
    let required: Vec<String> = opportunity_skills.iter().map(|s| s.to_lowercase()).collect();

    let exact_matches = team.iter().filter(|skill| required.contains(skill)).count();

    let mut related_matches = 0;
    for team_skill in &team {
        for required_skill in &required {
            if tables.related_skills(team_skill).contains(required_skill) {
                related_matches += 1;
            }
            if tables.related_skills(required_skill).contains(team_skill) {
                related_matches += 1;
            }
        }
    }

    let ratio = (exact_matches as f64 + related_matches as f64 * RELATED_MATCH_WEIGHT)
        / required.len() as f64;
    let score = (ratio * 100.0).min(100.0).round() as u8;

    SkillOverlap {
        exact_matches,
        related_matches,
        score,
    }
}

/// Skill compatibility score (0-100)
#[inline]
pub fn calculate_skill_score(
    team_skills: &[String],
    opportunity_skills: &[String],
    tables: &ScoringTables,
) -> u8 {
    calculate_skill_overlap(team_skills, opportunity_skills, tables).score
}

pub(crate) fn describe_skill_overlap(overlap: &SkillOverlap, required: usize) -> String {
    if required == 0 {
        return "Opportunity lists no required skills".to_string();
    }

    format!(
        "{} of {} required skills matched directly, {} related skill matches",
        overlap.exact_matches, required, overlap.related_matches
    )
}
