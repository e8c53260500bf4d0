use super::super::domain::{CompanySize, CompanyStage, ScoreResult, WeightKey, WeightSet};
use super::components::{clamp_score, round1};
use super::tables::{
    market_size_multiplier, market_stage_multiplier, MARKET_WEIGHTS, SATISFACTION_MIN_WEIGHT,
    SATISFACTION_THRESHOLD, SHORTBOARD_PENALTY_FACTOR, SHORTBOARD_THRESHOLD,
};

const DIMENSIONS: f64 = WeightKey::ALL.len() as f64;

/// Intermediate figures of the personalized aggregate, kept for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PersonalizedBreakdown {
    pub weighted_average: f64,
    pub penalty: f64,
    pub used_equal_weights: bool,
    pub final_score: f64,
}

fn effective_weights(weights: &WeightSet) -> ([f64; 6], bool) {
    if weights.total() == 0 {
        return ([100.0 / DIMENSIONS; 6], true);
    }
    (weights.to_array().map(f64::from), false)
}

fn satisfaction_bonus(score: f64, weight: f64) -> f64 {
    if score > SATISFACTION_THRESHOLD && weight > SATISFACTION_MIN_WEIGHT {
        1.0 + ((score - SATISFACTION_THRESHOLD) / 100.0) * (weight / 100.0)
    } else {
        1.0
    }
}

fn shortboard_penalty(score: f64, weight: f64) -> f64 {
    if score < SHORTBOARD_THRESHOLD {
        (SHORTBOARD_THRESHOLD - score) * (weight / 100.0) * SHORTBOARD_PENALTY_FACTOR
    } else {
        0.0
    }
}

pub(crate) fn personalized(scores: &ScoreResult, weights: &WeightSet) -> PersonalizedBreakdown {
    let (effective, used_equal_weights) = effective_weights(weights);
    let total_weight: f64 = effective.iter().sum();

    let mut weighted_sum = 0.0;
    let mut penalty = 0.0;
    for (key, weight) in WeightKey::ALL.into_iter().zip(effective) {
        let score = scores.get(key);
        weighted_sum += score * satisfaction_bonus(score, weight) * weight;
        penalty += shortboard_penalty(score, weight);
    }

    let weighted_average = weighted_sum / total_weight;
    let final_score = clamp_score(round1(weighted_average - penalty));

    PersonalizedBreakdown {
        weighted_average,
        penalty,
        used_equal_weights,
        final_score,
    }
}

pub(crate) fn market_power(scores: &ScoreResult, size: CompanySize, stage: CompanyStage) -> f64 {
    let weighted_sum: f64 = scores
        .iter()
        .map(|(key, score)| score * f64::from(MARKET_WEIGHTS.get(key)))
        .sum();
    let stability = market_size_multiplier(size) * market_stage_multiplier(stage);
    clamp_score(round1(weighted_sum / 100.0 * stability))
}
