mod aggregate;
mod components;
pub mod tables;

use super::domain::{OfferRecord, ScoreResult, ScoredOffer};
use tracing::debug;

/// Stateless scoring engine. Every operation is a pure function of the offer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine;

impl ScoringEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn base_scores(&self, offer: &OfferRecord) -> ScoreResult {
        compute_base_scores(offer)
    }

    pub fn offer_score(&self, offer: &OfferRecord) -> ScoredOffer {
        calculate_offer_score(offer)
    }

    pub fn market_power_index(&self, offer: &OfferRecord) -> ScoredOffer {
        calculate_market_power_index(offer)
    }
}

/// Six normalized sub-scores, each clamped to [0, 100] and rounded to one decimal.
pub fn compute_base_scores(offer: &OfferRecord) -> ScoreResult {
    components::base_scores(offer)
}

/// Personalized score using the offer's own weights, with satisfaction bonus and
/// shortboard penalty applied.
pub fn calculate_offer_score(offer: &OfferRecord) -> ScoredOffer {
    let scores = compute_base_scores(offer);
    let breakdown = aggregate::personalized(&scores, &offer.weights);
    debug!(
        company = %offer.company_name,
        weighted_average = breakdown.weighted_average,
        penalty = breakdown.penalty,
        fallback_weights = breakdown.used_equal_weights,
        final_score = breakdown.final_score,
        "computed offer score"
    );

    ScoredOffer {
        scores,
        final_score: breakdown.final_score,
    }
}

/// Objective index using the fixed market weights and a company stability multiplier.
pub fn calculate_market_power_index(offer: &OfferRecord) -> ScoredOffer {
    let scores = compute_base_scores(offer);
    let final_score = aggregate::market_power(&scores, offer.company_size, offer.company_stage);
    debug!(company = %offer.company_name, final_score, "computed market power index");

    ScoredOffer {
        scores,
        final_score,
    }
}

#[cfg(test)]
pub(crate) use aggregate::{personalized, PersonalizedBreakdown};
