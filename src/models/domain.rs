use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// How a team or an opportunity expects to work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkStyle {
    Remote,
    Hybrid,
    Onsite,
}

/// How many liftouts a team has been through before
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiftoutExperience {
    FirstTime,
    Experienced,
    Veteran,
    /// Any value the marketplace sends that we don't recognise
    #[serde(other)]
    Unknown,
}

impl LiftoutExperience {
    pub fn as_str(&self) -> &'static str {
        match self {
            LiftoutExperience::FirstTime => "first_time",
            LiftoutExperience::Experienced => "experienced",
            LiftoutExperience::Veteran => "veteran",
            LiftoutExperience::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompensationType {
    Salary,
    Equity,
    TotalPackage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiftoutType {
    Expansion,
    Acquisition,
    MarketEntry,
    CapabilityBuilding,
}

/// Compensation a team expects, per member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompensationExpectation {
    pub min: f64,
    pub max: f64,
    pub currency: String,
}

/// Compensation an opportunity offers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompensationOffer {
    pub min: f64,
    pub max: f64,
    pub currency: String,
    #[serde(rename = "type")]
    pub kind: CompensationType,
}

/// Accepted team size for an opportunity (inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSizeRange {
    pub min: u32,
    pub max: u32,
}

impl TeamSizeRange {
    #[inline]
    pub fn contains(&self, size: u32) -> bool {
        self.min <= size && size <= self.max
    }
}

/// Intact team looking to move together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[validate(length(min = 1))]
    pub industry: String,
    #[serde(default)]
    pub specialization: String,
    #[validate(range(min = 1))]
    pub size: u32,
    #[serde(default)]
    pub location: String,
    pub remote_status: WorkStyle,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub years_working_together: f64,
    pub liftout_experience: LiftoutExperience,
    #[validate(custom(function = "validate_expectation"))]
    pub compensation_expectation: CompensationExpectation,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Role a company is hiring an entire team into
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[validate(length(min = 1))]
    pub industry: String,
    #[serde(default)]
    pub location: String,
    pub work_style: WorkStyle,
    #[validate(custom(function = "validate_offer"))]
    pub compensation: CompensationOffer,
    #[validate(custom(function = "validate_team_size"))]
    pub team_size: TeamSizeRange,
    #[serde(default)]
    pub skills: Vec<String>,
    pub liftout_type: LiftoutType,
    #[serde(default)]
    pub confidential: bool,
}

fn validate_expectation(range: &CompensationExpectation) -> Result<(), ValidationError> {
    check_bounds(range.min, range.max)
}

fn validate_offer(range: &CompensationOffer) -> Result<(), ValidationError> {
    check_bounds(range.min, range.max)
}

fn check_bounds(min: f64, max: f64) -> Result<(), ValidationError> {
    if min < 0.0 || min > max {
        let mut err = ValidationError::new("compensation_range");
        err.message = Some("compensation min must be non-negative and not exceed max".into());
        return Err(err);
    }
    Ok(())
}

fn validate_team_size(range: &TeamSizeRange) -> Result<(), ValidationError> {
    if range.min > range.max {
        let mut err = ValidationError::new("team_size_range");
        err.message = Some("teamSize min must not exceed max".into());
        return Err(err);
    }
    Ok(())
}

/// Scoring weights, one per dimension
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub industry: f64,
    pub skills: f64,
    pub compensation: f64,
    pub size: f64,
    pub location: f64,
    pub experience: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.industry + self.skills + self.compensation + self.size + self.location + self.experience
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            industry: 0.25,
            skills: 0.30,
            compensation: 0.20,
            size: 0.10,
            location: 0.10,
            experience: 0.05,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl Impact {
    /// Impact of a factor follows how much it weighs in the overall score
    pub fn from_weight(weight: f64) -> Self {
        if weight >= 0.20 {
            Impact::High
        } else if weight >= 0.10 {
            Impact::Medium
        } else {
            Impact::Low
        }
    }
}

/// One scored dimension of a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReason {
    pub factor: String,
    pub score: u8,
    pub description: String,
    pub impact: Impact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    CompensationGap,
    CurrencyMismatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchWarning {
    #[serde(rename = "type")]
    pub kind: WarningType,
    pub severity: Severity,
    pub description: String,
    pub suggestion: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightType {
    SuccessPrediction,
    Timeline,
    MarketIntelligence,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchInsight {
    #[serde(rename = "type")]
    pub kind: InsightType,
    pub title: String,
    pub description: String,
    pub confidence: u8,
}

/// Full compatibility assessment of a team against an opportunity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub score: u8,
    pub reasons: Vec<MatchReason>,
    pub warnings: Vec<MatchWarning>,
    pub insights: Vec<MatchInsight>,
    pub recommended_actions: Vec<String>,
}

impl MatchResult {
    /// Score of a single factor, looked up by its display name
    pub fn factor_score(&self, factor: &str) -> Option<u8> {
        self.reasons.iter().find(|r| r.factor == factor).map(|r| r.score)
    }
}

/// A scored team/opportunity pair produced by the batch ranker
#[derive(Debug, Clone, Serialize)]
pub struct RankedMatch<'a> {
    pub team: &'a Team,
    pub opportunity: &'a Opportunity,
    #[serde(rename = "match")]
    pub result: MatchResult,
}
