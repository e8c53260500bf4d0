use super::super::domain::{OfferRecord, ScoreResult};
use super::tables::{
    company_stability_factor, equity_risk_factor, health_benefit_score, profile_development_match,
    profile_model, stage_growth_boost, stage_prospects, ProfileModel, BASELINE_DAILY_HOURS,
    BASELINE_PAID_LEAVE_DAYS, BENEFITS_SHARE, DEFAULT_SALARY_MONTHS, FREE_COMMUTE_MINUTES,
    LEAVE_BONUS_PER_DAY, NO_EQUITY_FLOOR, SALARY_CURVE_STEEPNESS, SALARY_MEDIAN,
    STOCK_CURVE_STEEPNESS, STOCK_MEDIAN, WORKLOAD_SHARE,
};

pub(crate) fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// S-curve centred on the anchor: 50 at the anchor, saturating towards 0 and 100.
fn saturating_curve(ratio: f64, steepness: f64) -> f64 {
    50.0 * (1.0 + ((ratio - 1.0) * steepness).tanh())
}

pub(crate) fn annual_cash(offer: &OfferRecord) -> f64 {
    let months = if offer.salary_months > 0.0 {
        offer.salary_months
    } else {
        DEFAULT_SALARY_MONTHS
    };
    offer.base_salary * months + offer.annual_subsidies
}

pub(crate) fn compensation_score(offer: &OfferRecord, model: &ProfileModel) -> f64 {
    let ratio = annual_cash(offer) / SALARY_MEDIAN;
    clamp_score(saturating_curve(ratio, SALARY_CURVE_STEEPNESS) * model.salary_weight)
}

/// Equity value discounted by stage risk. Zero whenever `has_stock_option` is false,
/// whatever `stock_option_value` holds.
pub(crate) fn risk_adjusted_equity(offer: &OfferRecord) -> f64 {
    if !offer.has_stock_option {
        return 0.0;
    }
    offer.stock_option_value * equity_risk_factor(offer.company_stage)
}

/// Long-term incentive score. The `has_stock_option` flag takes precedence over the
/// declared value: without it the score is the flat [`NO_EQUITY_FLOOR`].
pub(crate) fn long_term_score(offer: &OfferRecord, model: &ProfileModel) -> f64 {
    let equity = risk_adjusted_equity(offer);
    if equity <= 0.0 {
        return NO_EQUITY_FLOOR;
    }
    let ratio = equity / STOCK_MEDIAN;
    clamp_score(saturating_curve(ratio, STOCK_CURVE_STEEPNESS) * model.stock_weight)
}

pub(crate) fn development_score(offer: &OfferRecord, model: &ProfileModel) -> f64 {
    let raw = offer.career_development
        * 10.0
        * stage_growth_boost(offer.company_stage)
        * profile_development_match(offer.user_profile)
        * model.growth_boost;
    clamp_score(raw)
}

pub(crate) fn prospects_score(offer: &OfferRecord, model: &ProfileModel) -> f64 {
    let raw = offer.work_content
        * 6.0
        * company_stability_factor(offer.company_size)
        * stage_prospects(offer.company_stage);
    clamp_score(raw * model.stability_boost)
}

pub(crate) fn environment_score(offer: &OfferRecord) -> f64 {
    clamp_score(offer.work_environment * 10.0)
}

pub(crate) fn commute_penalty(commute_minutes: f64) -> f64 {
    (commute_minutes - FREE_COMMUTE_MINUTES).max(0.0).powf(1.5) * 0.1
}

pub(crate) fn overtime_penalty(daily_hours: f64) -> f64 {
    (daily_hours - BASELINE_DAILY_HOURS).max(0.0).powi(2) * 8.0
}

pub(crate) fn leave_bonus(paid_leave_days: f64) -> f64 {
    (paid_leave_days - BASELINE_PAID_LEAVE_DAYS).max(0.0) * LEAVE_BONUS_PER_DAY
}

pub(crate) fn life_balance_score(offer: &OfferRecord) -> f64 {
    let workload = 100.0
        - commute_penalty(offer.commute_time)
        - overtime_penalty(offer.work_hours.daily_hours());
    let benefits = health_benefit_score(offer.health_benefit_level) + leave_bonus(offer.paid_leave);
    clamp_score(workload * WORKLOAD_SHARE + benefits * BENEFITS_SHARE)
}

pub(crate) fn base_scores(offer: &OfferRecord) -> ScoreResult {
    let model = profile_model(offer.user_profile);

    ScoreResult {
        compensation_score: round1(compensation_score(offer, &model)),
        long_term_score: round1(long_term_score(offer, &model)),
        development_score: round1(development_score(offer, &model)),
        prospects_score: round1(prospects_score(offer, &model)),
        environment_score: round1(environment_score(offer)),
        life_balance_and_benefits_score: round1(life_balance_score(offer)),
    }
}
