use std::fmt;

use serde::Serialize;

use super::domain::{OfferRecord, WeightKey, WeightSet};
use super::weights::{STEP, TOTAL};

pub const MIN_SALARY_MONTHS: f64 = 12.0;
pub const MAX_SALARY_MONTHS: f64 = 24.0;
pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 10.0;

/// Single rule violated by a submitted offer.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    #[error("{field} must not be empty")]
    MissingText { field: &'static str },
    #[error("{field} must be a non-negative number (found {found})")]
    Negative { field: &'static str, found: f64 },
    #[error("{field} must be between {min} and {max} (found {found})")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        found: f64,
    },
    #[error("work hours end ({end}) must not precede start ({start})")]
    InvertedWorkHours { start: f64, end: f64 },
    #[error("weight {key} exceeds 100 (found {found})")]
    WeightAboveLimit { key: WeightKey, found: u32 },
    #[error("weight {key} must be a multiple of {step} (found {found})")]
    WeightOffStep { key: WeightKey, step: u32, found: u32 },
    #[error("weights must sum to 100 (found {total})")]
    WeightTotal { total: u64 },
}

/// Every issue found in one offer, reported together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfferValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl fmt::Display for OfferValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let details = self
            .issues
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "invalid offer: {details}")
    }
}

impl std::error::Error for OfferValidationError {}

fn require_text(issues: &mut Vec<ValidationIssue>, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        issues.push(ValidationIssue::MissingText { field });
    }
}

fn require_non_negative(issues: &mut Vec<ValidationIssue>, field: &'static str, value: f64) {
    if !value.is_finite() || value < 0.0 {
        issues.push(ValidationIssue::Negative {
            field,
            found: value,
        });
    }
}

fn require_range(
    issues: &mut Vec<ValidationIssue>,
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) {
    if !(min..=max).contains(&value) {
        issues.push(ValidationIssue::OutOfRange {
            field,
            min,
            max,
            found: value,
        });
    }
}

fn collect_weight_issues(issues: &mut Vec<ValidationIssue>, weights: &WeightSet) {
    for (key, value) in weights.iter() {
        if value > TOTAL {
            issues.push(ValidationIssue::WeightAboveLimit { key, found: value });
        }
        if value % STEP != 0 {
            issues.push(ValidationIssue::WeightOffStep {
                key,
                step: STEP,
                found: value,
            });
        }
    }
    let total = weights.total();
    if total != u64::from(TOTAL) {
        issues.push(ValidationIssue::WeightTotal { total });
    }
}

pub fn validate_weights(weights: &WeightSet) -> Result<(), OfferValidationError> {
    let mut issues = Vec::new();
    collect_weight_issues(&mut issues, weights);
    if issues.is_empty() {
        Ok(())
    } else {
        Err(OfferValidationError { issues })
    }
}

/// Form-level checks run before scoring. The scoring engine itself never validates.
pub fn validate_offer(offer: &OfferRecord) -> Result<(), OfferValidationError> {
    let mut issues = Vec::new();

    require_text(&mut issues, "companyName", &offer.company_name);
    require_text(&mut issues, "jobTitle", &offer.job_title);

    require_non_negative(&mut issues, "baseSalary", offer.base_salary);
    require_range(
        &mut issues,
        "salaryMonths",
        offer.salary_months,
        MIN_SALARY_MONTHS,
        MAX_SALARY_MONTHS,
    );
    require_non_negative(&mut issues, "annualSubsidies", offer.annual_subsidies);
    require_non_negative(&mut issues, "stockOptionValue", offer.stock_option_value);
    require_non_negative(&mut issues, "commuteTime", offer.commute_time);
    require_non_negative(&mut issues, "paidLeave", offer.paid_leave);

    let hours = offer.work_hours;
    require_range(&mut issues, "workHours.start", hours.start, 0.0, 24.0);
    require_range(&mut issues, "workHours.end", hours.end, 0.0, 24.0);
    if hours.end < hours.start {
        issues.push(ValidationIssue::InvertedWorkHours {
            start: hours.start,
            end: hours.end,
        });
    }

    for (field, rating) in [
        ("careerDevelopment", offer.career_development),
        ("workContent", offer.work_content),
        ("workEnvironment", offer.work_environment),
        ("lifeBalance", offer.life_balance),
    ] {
        require_range(&mut issues, field, rating, MIN_RATING, MAX_RATING);
    }

    collect_weight_issues(&mut issues, &offer.weights);

    if issues.is_empty() {
        Ok(())
    } else {
        Err(OfferValidationError { issues })
    }
}
