use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::domain::{OfferRecord, ScoreResult, WeightKey, WeightSet};
use super::export::{export_offer, ExportDocument, ExportError, ExportFormat};
use super::scoring::ScoringEngine;
use super::validation::{validate_offer, validate_weights, OfferValidationError};
use super::weights::rebalance;

/// Both aggregate indices for one offer, sharing a single set of sub-scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferEvaluation {
    pub scores: ScoreResult,
    pub offer_score: f64,
    pub market_power_index: f64,
}

/// Slider move requested by a client holding the current weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RebalanceRequest {
    pub weights: WeightSet,
    pub key: WeightKey,
    pub value: f64,
}

/// Service composing validation, scoring and export for callers outside the crate.
#[derive(Debug, Clone, Default)]
pub struct OfferEvaluationService {
    engine: ScoringEngine,
}

impl OfferEvaluationService {
    pub fn new(engine: ScoringEngine) -> Self {
        Self { engine }
    }

    /// Validate the offer, then compute the personalized score and the market index.
    pub fn evaluate(&self, offer: &OfferRecord) -> Result<OfferEvaluation, OfferServiceError> {
        self.validate(offer)?;

        let personal = self.engine.offer_score(offer);
        let market = self.engine.market_power_index(offer);

        info!(
            company = %offer.company_name,
            job = %offer.job_title,
            offer_score = personal.final_score,
            market_power_index = market.final_score,
            "evaluated offer"
        );

        Ok(OfferEvaluation {
            scores: personal.scores,
            offer_score: personal.final_score,
            market_power_index: market.final_score,
        })
    }

    /// Check the submitted weights, then apply the slider move.
    pub fn rebalance(&self, request: &RebalanceRequest) -> Result<WeightSet, OfferServiceError> {
        validate_weights(&request.weights).map_err(|error| {
            warn!(
                key = %request.key,
                issues = error.issues.len(),
                "rejected weights"
            );
            OfferServiceError::Validation(error)
        })?;
        Ok(rebalance(&request.weights, request.key, request.value))
    }

    pub fn export(
        &self,
        offer: &OfferRecord,
        format: ExportFormat,
        generated_at: DateTime<Utc>,
    ) -> Result<ExportDocument, OfferServiceError> {
        self.validate(offer)?;
        Ok(export_offer(offer, format, generated_at)?)
    }

    fn validate(&self, offer: &OfferRecord) -> Result<(), OfferServiceError> {
        validate_offer(offer).map_err(|error| {
            warn!(
                company = %offer.company_name,
                issues = error.issues.len(),
                "rejected offer"
            );
            OfferServiceError::Validation(error)
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OfferServiceError {
    #[error(transparent)]
    Validation(#[from] OfferValidationError),
    #[error(transparent)]
    Export(#[from] ExportError),
}
