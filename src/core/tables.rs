use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::models::LiftoutExperience;

/// Transfer factor used when an industry pair is not in the matrix
pub const DEFAULT_TRANSFER_FACTOR: f64 = 0.3;

/// Experience score used when a level is not in the table
pub const DEFAULT_EXPERIENCE_SCORE: u8 = 70;

/// Errors that can occur while loading scoring tables
#[derive(Debug, Error)]
pub enum TablesError {
    #[error("Failed to read tables file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid tables file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Lookup data the dimension scorers read from
///
/// All keys are stored lowercase so lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringTables {
    /// team industry -> opportunity industry -> transfer factor (0-1)
    #[serde(default)]
    pub industry_transfer: HashMap<String, HashMap<String, f64>>,
    /// skill -> related skills
    #[serde(default)]
    pub skill_synonyms: HashMap<String, Vec<String>>,
    /// liftout experience level -> score (0-100)
    #[serde(default)]
    pub experience_scores: HashMap<String, u8>,
}

impl ScoringTables {
    /// Parse tables from a TOML document
    pub fn from_toml_str(raw: &str) -> Result<Self, TablesError> {
        let tables: ScoringTables = toml::from_str(raw)?;
        Ok(tables.normalized())
    }

    /// Load tables from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TablesError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let tables = Self::from_toml_str(&raw)?;
        tracing::info!(
            "Loaded scoring tables from {} ({} industries, {} synonym entries)",
            path.as_ref().display(),
            tables.industry_transfer.len(),
            tables.skill_synonyms.len()
        );
        Ok(tables)
    }

    /// Transfer factor from one industry into another
    pub fn transfer_factor(&self, from: &str, to: &str) -> f64 {
        self.industry_transfer
            .get(&from.trim().to_lowercase())
            .and_then(|row| row.get(&to.trim().to_lowercase()))
            .copied()
            .unwrap_or(DEFAULT_TRANSFER_FACTOR)
    }

    /// Skills related to `skill`; expects an already lowercased key
    pub fn related_skills(&self, skill: &str) -> &[String] {
        self.skill_synonyms
            .get(skill)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn experience_score(&self, experience: LiftoutExperience) -> u8 {
        self.experience_scores
            .get(experience.as_str())
            .copied()
            .unwrap_or(DEFAULT_EXPERIENCE_SCORE)
    }

    fn normalized(self) -> Self {
        let lower = |s: String| s.trim().to_lowercase();

        Self {
            industry_transfer: self
                .industry_transfer
                .into_iter()
                .map(|(from, row)| {
                    let row: HashMap<String, f64> =
                        row.into_iter().map(|(to, f)| (lower(to), f)).collect();
                    (lower(from), row)
                })
                .collect(),
            skill_synonyms: self
                .skill_synonyms
                .into_iter()
                .map(|(skill, related)| (lower(skill), related.into_iter().map(lower).collect::<Vec<_>>()))
                .collect(),
            experience_scores: self
                .experience_scores
                .into_iter()
                .map(|(level, score)| (lower(level), score.min(100)))
                .collect(),
        }
    }
}

impl Default for ScoringTables {
    fn default() -> Self {
        let industry_transfer: HashMap<String, HashMap<String, f64>> = [
            (
                "financial services",
                &[
                    ("financial services", 1.0),
                    ("fintech", 0.85),
                    ("investment banking", 0.90),
                    ("private equity", 0.80),
                    ("insurance", 0.75),
                    ("management consulting", 0.70),
                ][..],
            ),
            (
                "healthcare tech",
                &[
                    ("healthcare tech", 1.0),
                    ("healthcare", 0.90),
                    ("biotech", 0.80),
                    ("medical devices", 0.75),
                    ("technology", 0.70),
                ][..],
            ),
            (
                "investment banking",
                &[
                    ("investment banking", 1.0),
                    ("private equity", 0.90),
                    ("financial services", 0.85),
                    ("venture capital", 0.75),
                    ("fintech", 0.70),
                ][..],
            ),
            (
                "management consulting",
                &[
                    ("management consulting", 1.0),
                    ("strategy", 0.95),
                    ("financial services", 0.75),
                    ("technology", 0.70),
                    ("healthcare", 0.65),
                ][..],
            ),
        ]
        .into_iter()
        .map(|(from, row)| {
            let row: HashMap<String, f64> = row.iter().map(|(to, f)| (to.to_string(), *f)).collect();
            (from.to_string(), row)
        })
        .collect();

        let skill_synonyms: HashMap<String, Vec<String>> = [
            ("quantitative finance", &["risk management", "financial modeling", "python", "r"][..]),
            ("machine learning", &["ai", "data science", "deep learning", "statistics"][..]),
            ("investment banking", &["m&a", "financial modeling", "valuation", "capital markets"][..]),
            ("healthcare analytics", &["data science", "clinical research", "healthcare", "sql"][..]),
        ]
        .into_iter()
        .map(|(skill, related)| {
            (skill.to_string(), related.iter().map(|s| s.to_string()).collect())
        })
        .collect();

        let experience_scores: HashMap<String, u8> = [
            (LiftoutExperience::FirstTime, 70),
            (LiftoutExperience::Experienced, 90),
            (LiftoutExperience::Veteran, 85),
        ]
        .into_iter()
        .map(|(level, score)| (level.as_str().to_string(), score))
        .collect();

        Self {
            industry_transfer,
            skill_synonyms,
            experience_scores,
        }
    }
}
