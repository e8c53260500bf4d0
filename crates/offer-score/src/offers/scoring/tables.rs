//! Scoring policy tables. Each lookup is total: `Unknown` variants map to the neutral default.

use super::super::domain::{CompanySize, CompanyStage, HealthBenefitLevel, UserProfile, WeightSet};

/// Annual cash compensation treated as the market median.
pub const SALARY_MEDIAN: f64 = 250_000.0;
pub const SALARY_CURVE_STEEPNESS: f64 = 1.5;
/// Risk-adjusted annual equity value treated as the market median.
pub const STOCK_MEDIAN: f64 = 100_000.0;
pub const STOCK_CURVE_STEEPNESS: f64 = 1.2;
/// Long-term score awarded to offers without equity.
pub const NO_EQUITY_FLOOR: f64 = 10.0;

pub const DEFAULT_SALARY_MONTHS: f64 = 12.0;
pub const FREE_COMMUTE_MINUTES: f64 = 30.0;
pub const BASELINE_DAILY_HOURS: f64 = 9.0;
pub const BASELINE_PAID_LEAVE_DAYS: f64 = 10.0;
pub const LEAVE_BONUS_PER_DAY: f64 = 3.0;
pub const WORKLOAD_SHARE: f64 = 0.65;
pub const BENEFITS_SHARE: f64 = 0.35;

pub const SATISFACTION_THRESHOLD: f64 = 80.0;
/// A weight must exceed this before the satisfaction bonus applies.
pub const SATISFACTION_MIN_WEIGHT: f64 = 20.0;
pub const SHORTBOARD_THRESHOLD: f64 = 50.0;
pub const SHORTBOARD_PENALTY_FACTOR: f64 = 1.5;

const DEFAULT_MULTIPLIER: f64 = 1.0;

/// Profile-specific multipliers applied across the sub-scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileModel {
    pub salary_weight: f64,
    pub stock_weight: f64,
    pub growth_boost: f64,
    pub stability_boost: f64,
}

impl ProfileModel {
    pub const BASE: ProfileModel = ProfileModel {
        salary_weight: 1.0,
        stock_weight: 0.8,
        growth_boost: 1.0,
        stability_boost: 1.0,
    };
}

pub fn profile_model(profile: UserProfile) -> ProfileModel {
    match profile {
        UserProfile::Graduate => ProfileModel {
            salary_weight: 0.9,
            growth_boost: 1.5,
            stability_boost: 0.8,
            ..ProfileModel::BASE
        },
        UserProfile::Family => ProfileModel {
            salary_weight: 1.1,
            stability_boost: 1.3,
            ..ProfileModel::BASE
        },
        UserProfile::Experienced | UserProfile::Unknown => ProfileModel::BASE,
    }
}

/// Discount applied to equity value for illiquidity at earlier stages.
pub fn equity_risk_factor(stage: CompanyStage) -> f64 {
    match stage {
        CompanyStage::Startup => 0.2,
        CompanyStage::Growth => 0.5,
        CompanyStage::Mature => 0.8,
        CompanyStage::Listed => 1.0,
        CompanyStage::Unknown => DEFAULT_MULTIPLIER,
    }
}

pub fn stage_growth_boost(stage: CompanyStage) -> f64 {
    match stage {
        CompanyStage::Startup => 1.6,
        CompanyStage::Growth => 1.3,
        CompanyStage::Mature => 1.0,
        CompanyStage::Listed => 0.9,
        CompanyStage::Unknown => DEFAULT_MULTIPLIER,
    }
}

pub fn profile_development_match(profile: UserProfile) -> f64 {
    match profile {
        UserProfile::Graduate => 1.3,
        UserProfile::Experienced => 1.0,
        UserProfile::Family => 0.9,
        UserProfile::Unknown => DEFAULT_MULTIPLIER,
    }
}

pub fn company_stability_factor(size: CompanySize) -> f64 {
    match size {
        CompanySize::Under50 => 0.7,
        CompanySize::From50To200 => 0.85,
        CompanySize::From200To1000 => 1.0,
        CompanySize::From1000To10000 => 1.1,
        CompanySize::Over10000 => 1.2,
        CompanySize::Unknown => DEFAULT_MULTIPLIER,
    }
}

pub fn stage_prospects(stage: CompanyStage) -> f64 {
    match stage {
        CompanyStage::Startup => 0.7,
        CompanyStage::Growth => 1.2,
        CompanyStage::Mature => 1.1,
        CompanyStage::Listed => 1.5,
        CompanyStage::Unknown => DEFAULT_MULTIPLIER,
    }
}

pub fn health_benefit_score(level: HealthBenefitLevel) -> f64 {
    match level {
        HealthBenefitLevel::Basic | HealthBenefitLevel::Unknown => 60.0,
        HealthBenefitLevel::Standard => 85.0,
        HealthBenefitLevel::Premium => 100.0,
    }
}

/// Fixed market view: cash and platform first, soft factors last.
pub const MARKET_WEIGHTS: WeightSet = WeightSet {
    salary: 30,
    long_term: 20,
    development: 10,
    prospects: 25,
    environment: 5,
    balance: 10,
};

pub fn market_size_multiplier(size: CompanySize) -> f64 {
    match size {
        CompanySize::Over10000 => 1.1,
        CompanySize::From1000To10000 => 1.05,
        CompanySize::From200To1000 => 1.0,
        CompanySize::From50To200 => 0.95,
        CompanySize::Under50 => 0.9,
        CompanySize::Unknown => DEFAULT_MULTIPLIER,
    }
}

pub fn market_stage_multiplier(stage: CompanyStage) -> f64 {
    match stage {
        CompanyStage::Listed => 1.15,
        CompanyStage::Mature => 1.1,
        CompanyStage::Growth => 1.0,
        CompanyStage::Startup => 0.9,
        CompanyStage::Unknown => DEFAULT_MULTIPLIER,
    }
}
