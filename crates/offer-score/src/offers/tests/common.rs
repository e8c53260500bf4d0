use axum::response::Response;
use serde_json::Value;

use crate::offers::domain::{
    CompanySize, CompanyStage, HealthBenefitLevel, OfferRecord, UserProfile, WeightSet, WorkHours,
};

/// Listed megacorp offer paying above the market median, no equity.
pub(super) fn listed_offer() -> OfferRecord {
    OfferRecord {
        user_profile: UserProfile::Experienced,
        company_name: "Northwind Systems".to_string(),
        job_title: "Backend Engineer".to_string(),
        company_size: CompanySize::Over10000,
        company_stage: CompanyStage::Listed,
        base_salary: 25_000.0,
        salary_months: 14.0,
        annual_subsidies: 20_000.0,
        has_stock_option: false,
        stock_option_value: 0.0,
        health_benefit_level: HealthBenefitLevel::Premium,
        commute_time: 20.0,
        work_hours: WorkHours::new(9.0, 18.0),
        paid_leave: 15.0,
        career_development: 8.0,
        work_content: 8.0,
        work_environment: 8.0,
        life_balance: 8.0,
        weights: WeightSet::new([40, 0, 15, 20, 10, 15]),
        created_at: None,
    }
}

/// Listed offer with a hostile team environment that the user weights heavily.
pub(super) fn hostile_environment_offer() -> OfferRecord {
    OfferRecord {
        work_environment: 1.0,
        weights: WeightSet::new([20, 0, 15, 20, 30, 15]),
        ..listed_offer()
    }
}

/// Early startup offer for a graduate: long days, long commute, illiquid equity.
pub(super) fn startup_offer() -> OfferRecord {
    OfferRecord {
        user_profile: UserProfile::Graduate,
        company_name: "Tiny Rocket".to_string(),
        job_title: "Full Stack Developer".to_string(),
        company_size: CompanySize::Under50,
        company_stage: CompanyStage::Startup,
        base_salary: 15_000.0,
        salary_months: 13.0,
        annual_subsidies: 0.0,
        has_stock_option: true,
        stock_option_value: 200_000.0,
        health_benefit_level: HealthBenefitLevel::Basic,
        commute_time: 60.0,
        work_hours: WorkHours::new(9.0, 21.0),
        paid_leave: 5.0,
        career_development: 9.0,
        work_content: 7.0,
        work_environment: 6.0,
        life_balance: 8.0,
        weights: WeightSet::new([30, 10, 25, 15, 10, 10]),
        created_at: None,
    }
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json body")
}
