use super::common::*;
use crate::offers::domain::{WeightKey, WeightSet, WorkHours};
use crate::offers::validation::{validate_offer, validate_weights, ValidationIssue};

#[test]
fn well_formed_offer_passes() {
    assert!(validate_offer(&listed_offer()).is_ok());
    assert!(validate_offer(&startup_offer()).is_ok());
}

#[test]
fn collects_every_issue_at_once() {
    let mut offer = listed_offer();
    offer.company_name = "   ".to_string();
    offer.base_salary = -1.0;
    offer.salary_months = 30.0;
    offer.career_development = 0.0;

    let error = validate_offer(&offer).expect_err("offer is invalid");

    assert_eq!(error.issues.len(), 4);
    assert!(error.issues.contains(&ValidationIssue::MissingText {
        field: "companyName"
    }));
    assert!(error.issues.contains(&ValidationIssue::Negative {
        field: "baseSalary",
        found: -1.0
    }));
    assert!(error.issues.iter().any(|issue| matches!(
        issue,
        ValidationIssue::OutOfRange { field: "salaryMonths", .. }
    )));
    assert!(error.to_string().starts_with("invalid offer: companyName must not be empty"));
}

#[test]
fn rejects_inverted_work_hours() {
    let mut offer = listed_offer();
    offer.work_hours = WorkHours::new(18.0, 9.0);

    let error = validate_offer(&offer).expect_err("hours are inverted");
    assert_eq!(
        error.issues,
        vec![ValidationIssue::InvertedWorkHours {
            start: 18.0,
            end: 9.0
        }]
    );
}

#[test]
fn weights_must_total_one_hundred() {
    let error = validate_weights(&WeightSet::new([40, 0, 15, 20, 10, 10])).expect_err("sums to 95");
    assert_eq!(error.issues, vec![ValidationIssue::WeightTotal { total: 95 }]);

    let error = validate_weights(&WeightSet::new([120, 0, 0, 0, 0, 0])).expect_err("too large");
    assert!(error.issues.contains(&ValidationIssue::WeightAboveLimit {
        key: WeightKey::Salary,
        found: 120
    }));
}

#[test]
fn rejects_non_finite_numbers() {
    let mut offer = listed_offer();
    offer.commute_time = f64::NAN;

    let error = validate_offer(&offer).expect_err("NaN commute");
    assert!(error.issues.iter().any(|issue| matches!(
        issue,
        ValidationIssue::Negative { field: "commuteTime", .. }
    )));
}

#[test]
fn weight_total_does_not_overflow_on_wire_extremes() {
    let mut body = serde_json::to_value(listed_offer()).expect("offer json");
    body["weights"]["salary"] = serde_json::json!(u32::MAX);
    body["weights"]["longTerm"] = serde_json::json!(1);
    let offer: crate::offers::domain::OfferRecord =
        serde_json::from_value(body).expect("weights fit in u32");

    let error = validate_offer(&offer).expect_err("weights out of range");

    assert!(error.issues.contains(&ValidationIssue::WeightTotal {
        total: u64::from(u32::MAX) + 1 + 15 + 20 + 10 + 15
    }));
    assert!(error.issues.contains(&ValidationIssue::WeightOffStep {
        key: WeightKey::LongTerm,
        step: 5,
        found: 1
    }));
}

#[test]
fn weights_must_sit_on_the_slider_grid() {
    let weights = WeightSet::new([42, 0, 13, 20, 10, 15]);
    let error = validate_weights(&weights).expect_err("off grid");
    assert_eq!(
        error.issues,
        vec![
            ValidationIssue::WeightOffStep {
                key: WeightKey::Salary,
                step: 5,
                found: 42
            },
            ValidationIssue::WeightOffStep {
                key: WeightKey::Development,
                step: 5,
                found: 13
            },
        ]
    );
}
