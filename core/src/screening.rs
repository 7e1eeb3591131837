//! Stroke risk screening: a fixed, additive rule table over one set of
//! patient observations.
//!
//! The scorer is deliberately total. Whatever shape the submitted fields
//! are in, it produces a classification; missing or malformed values
//! degrade rule by rule instead of failing the whole assessment.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Weight of each hard FAST sign (facial droop, arm weakness, speech difficulty).
pub const FAST_SIGN_POINTS: u32 = 2;
/// Weight of each supporting factor (late onset, elevated age, prior history).
pub const SUPPORTING_FACTOR_POINTS: u32 = 1;
/// Hours since onset above which the onset factor fires.
pub const LATE_ONSET_THRESHOLD_HOURS: i64 = 3;
/// Age in years above which the age factor fires.
pub const ELEVATED_AGE_THRESHOLD_YEARS: i64 = 60;
/// Scores at or above this classify as Moderate.
pub const MODERATE_SCORE_MIN: u32 = 3;
/// Scores at or above this classify as High.
pub const HIGH_SCORE_MIN: u32 = 5;

/// One screening submission, exactly as entered on the triage form.
///
/// Every field is independently optional and string-valued: flags carry
/// "yes"/"no", numeric fields carry whatever the user typed. A flag only
/// counts when its value is exactly "yes".
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ObservationSet {
    /// Facial droop observed ("yes" to count)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facial_droop: Option<String>,
    /// Arm weakness observed ("yes" to count)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arm_weakness: Option<String>,
    /// Speech difficulty observed ("yes" to count)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speech_difficulty: Option<String>,
    /// Hours since symptom onset, as entered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onset_time: Option<String>,
    /// Patient age in years, as entered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    /// Prior stroke or TIA ("yes" to count)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<String>,
}

/// Risk classification derived from the cumulative score.
/// Ordered: `Low < Moderate < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// Classify a final score against the fixed thresholds.
    pub fn from_score(score: u32) -> Self {
        if score >= HIGH_SCORE_MIN {
            RiskLevel::High
        } else if score >= MODERATE_SCORE_MIN {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one screening pass: the classification, the cumulative score,
/// and one explanation line per rule that fired, in rule order.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Assessment {
    /// Overall risk classification
    pub risk: RiskLevel,
    /// Sum of the triggered rule weights
    pub score: u32,
    /// Contributing factors, in rule order
    pub details: Vec<String>,
}

/// Strict flag test: only the exact string "yes" counts. Case variants,
/// surrounding whitespace, and anything else ("true", "1", ...) do not.
fn flag_set(value: &Option<String>) -> bool {
    value.as_deref() == Some("yes")
}

/// Parse a form-entered integer, tolerating surrounding whitespace only.
fn parse_int(value: &Option<String>) -> Option<i64> {
    value.as_deref()?.trim().parse().ok()
}

/// Score one observation set against the rule table.
///
/// Rules are independent and evaluated in a fixed order, so the score is
/// the plain sum of the triggered weights and `details` lists the
/// triggered rules in that same order regardless of input shape.
pub fn assess(observations: &ObservationSet) -> Assessment {
    let mut score = 0;
    let mut details = Vec::new();

    if flag_set(&observations.facial_droop) {
        score += FAST_SIGN_POINTS;
        details.push(format!("Facial droop detected (+{FAST_SIGN_POINTS})"));
    }
    if flag_set(&observations.arm_weakness) {
        score += FAST_SIGN_POINTS;
        details.push(format!("Arm weakness detected (+{FAST_SIGN_POINTS})"));
    }
    if flag_set(&observations.speech_difficulty) {
        score += FAST_SIGN_POINTS;
        details.push(format!("Speech difficulty detected (+{FAST_SIGN_POINTS})"));
    }

    // Onset is skip-on-failure: a missing or unparseable value contributes
    // nothing and produces no detail line.
    if let Some(onset_hours) = parse_int(&observations.onset_time) {
        if onset_hours > LATE_ONSET_THRESHOLD_HOURS {
            score += SUPPORTING_FACTOR_POINTS;
            details.push(format!(
                "Symptom onset > {LATE_ONSET_THRESHOLD_HOURS} hrs (+{SUPPORTING_FACTOR_POINTS})"
            ));
        }
    }

    // Age is substitute-on-failure: the rule still runs against 0 when the
    // value is missing or unparseable.
    let age_years = parse_int(&observations.age).unwrap_or(0);
    if age_years > ELEVATED_AGE_THRESHOLD_YEARS {
        score += SUPPORTING_FACTOR_POINTS;
        details.push(format!(
            "Age > {ELEVATED_AGE_THRESHOLD_YEARS} (+{SUPPORTING_FACTOR_POINTS})"
        ));
    }

    if flag_set(&observations.history) {
        score += SUPPORTING_FACTOR_POINTS;
        details.push(format!(
            "History of stroke or TIA (+{SUPPORTING_FACTOR_POINTS})"
        ));
    }

    Assessment {
        risk: RiskLevel::from_score(score),
        score,
        details,
    }
}
