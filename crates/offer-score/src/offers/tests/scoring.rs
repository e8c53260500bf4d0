use super::common::*;
use crate::offers::domain::{CompanySize, CompanyStage, HealthBenefitLevel, UserProfile, WeightSet};
use crate::offers::scoring::{
    calculate_market_power_index, calculate_offer_score, compute_base_scores, personalized,
    ScoringEngine,
};

#[test]
fn listed_offer_sub_scores_follow_the_curves() {
    let scores = compute_base_scores(&listed_offer());

    assert_close(scores.compensation_score, 80.8);
    assert_close(scores.long_term_score, 10.0);
    assert_close(scores.development_score, 72.0);
    assert_close(scores.prospects_score, 86.4);
    assert_close(scores.environment_score, 80.0);
    assert_close(scores.life_balance_and_benefits_score, 100.0);
}

#[test]
fn no_equity_offer_scores_the_floor_not_zero() {
    let scores = compute_base_scores(&listed_offer());
    assert_close(scores.long_term_score, 10.0);

    let mut offer = listed_offer();
    offer.has_stock_option = true;
    offer.stock_option_value = 0.0;
    assert_close(compute_base_scores(&offer).long_term_score, 10.0);
}

#[test]
fn stock_value_is_ignored_without_stock_option_flag() {
    let mut offer = listed_offer();
    offer.stock_option_value = 300_000.0;
    assert_close(compute_base_scores(&offer).long_term_score, 10.0);

    offer.has_stock_option = true;
    assert!(compute_base_scores(&offer).long_term_score > 10.0);
}

#[test]
fn compensation_above_anchor_scores_above_fifty() {
    let offer = listed_offer();
    // 25000 x 14 + 20000 = 370000 against the 250000 anchor
    assert!(compute_base_scores(&offer).compensation_score > 50.0);

    let mut median = listed_offer();
    median.base_salary = 250_000.0 / 12.0;
    median.salary_months = 12.0;
    median.annual_subsidies = 0.0;
    assert_close(compute_base_scores(&median).compensation_score, 50.0);
}

#[test]
fn offer_score_applies_satisfaction_bonus_to_heavily_weighted_strengths() {
    let offer = listed_offer();
    let scored = calculate_offer_score(&offer);

    let plain_average = (80.8 * 40.0 + 72.0 * 15.0 + 86.4 * 20.0 + 80.0 * 10.0 + 100.0 * 15.0)
        / 100.0;
    let breakdown = personalized(&scored.scores, &offer.weights);
    assert!(breakdown.weighted_average > plain_average);
    assert_close(breakdown.penalty, 0.0);
    assert_close(scored.final_score, 83.5);
}

#[test]
fn shortboard_penalty_drags_down_heavily_weighted_weakness() {
    let offer = hostile_environment_offer();
    let scored = calculate_offer_score(&offer);
    assert_close(scored.scores.environment_score, 10.0);

    let breakdown = personalized(&scored.scores, &offer.weights);
    // (50 - 10) x 0.30 x 1.5
    assert!((breakdown.penalty - 18.0).abs() < 1e-9);
    assert!((breakdown.weighted_average - 62.24).abs() < 1e-9);
    assert_close(scored.final_score, 44.2);
    assert!(breakdown.weighted_average - scored.final_score > 17.9);
}

#[test]
fn graduate_startup_offer_is_penalized_for_overtime_and_commute() {
    let scored = calculate_offer_score(&startup_offer());

    assert_close(scored.scores.development_score, 100.0);
    assert_close(scored.scores.prospects_score, 16.5);
    assert_close(scored.scores.life_balance_and_benefits_score, 28.5);
    assert_close(scored.final_score, 23.7);
}

#[test]
fn zero_weights_fall_back_to_equal_weighting() {
    let mut offer = listed_offer();
    offer.weights = WeightSet::new([0; 6]);

    let breakdown = personalized(&compute_base_scores(&offer), &offer.weights);
    assert!(breakdown.used_equal_weights);
    assert_close(calculate_offer_score(&offer).final_score, 61.5);
}

#[test]
fn market_power_index_ignores_user_weights() {
    let offer = listed_offer();
    let mut reweighted = listed_offer();
    reweighted.weights = WeightSet::new([0, 0, 0, 0, 100, 0]);

    let index = calculate_market_power_index(&offer);
    assert_close(index.final_score, 87.3);
    assert_eq!(
        index.final_score,
        calculate_market_power_index(&reweighted).final_score
    );
}

#[test]
fn market_power_index_rewards_stability() {
    let index = calculate_market_power_index(&startup_offer());
    assert_close(index.final_score, 26.1);

    let mut listed = startup_offer();
    listed.company_stage = CompanyStage::Listed;
    listed.company_size = CompanySize::Over10000;
    assert!(calculate_market_power_index(&listed).final_score > index.final_score);
}

#[test]
fn unknown_categories_score_without_error() {
    let mut offer = listed_offer();
    offer.user_profile = UserProfile::Unknown;
    offer.company_size = CompanySize::Unknown;
    offer.company_stage = CompanyStage::Unknown;
    offer.health_benefit_level = HealthBenefitLevel::Unknown;

    let scores = compute_base_scores(&offer);
    assert_close(scores.development_score, 80.0);
    assert_close(scores.prospects_score, 48.0);
    let scored = calculate_offer_score(&offer);
    assert!((0.0..=100.0).contains(&scored.final_score));
}

#[test]
fn engine_is_deterministic() {
    let engine = ScoringEngine::new();
    let offer = startup_offer();

    let first = engine.offer_score(&offer);
    let second = engine.offer_score(&offer);
    assert_eq!(first.final_score.to_bits(), second.final_score.to_bits());
    assert_eq!(first.scores, second.scores);
    assert_eq!(
        engine.market_power_index(&offer).final_score.to_bits(),
        engine.market_power_index(&offer).final_score.to_bits()
    );
    assert_eq!(engine.base_scores(&offer), first.scores);
}

#[test]
fn extreme_inputs_stay_within_bounds() {
    let mut offer = startup_offer();
    offer.base_salary = 10_000_000.0;
    offer.stock_option_value = 1e12;
    offer.commute_time = 600.0;
    offer.work_hours.end = 24.0;
    offer.work_hours.start = 0.0;
    offer.paid_leave = 365.0;

    let scored = calculate_offer_score(&offer);
    for (_, score) in scored.scores.iter() {
        assert!((0.0..=100.0).contains(&score), "sub-score {score} out of bounds");
    }
    assert!((0.0..=100.0).contains(&scored.final_score));
}
