//! Job offer evaluation: typed offer records, the multi-factor scoring engine, the
//! percentage weight rebalancer, form validation, report export and the HTTP router.

pub mod domain;
pub mod export;
pub mod router;
pub mod scoring;
pub mod service;
pub mod validation;
pub mod weights;

#[cfg(test)]
mod tests;

pub use domain::{
    CompanySize, CompanyStage, HealthBenefitLevel, OfferRecord, ScoreResult, ScoredOffer,
    UserProfile, WeightKey, WeightSet, WorkHours,
};
pub use export::{export_offer, ExportDocument, ExportError, ExportFormat, OfferReport};
pub use router::offer_router;
pub use scoring::{
    calculate_market_power_index, calculate_offer_score, compute_base_scores, ScoringEngine,
};
pub use service::{OfferEvaluation, OfferEvaluationService, OfferServiceError, RebalanceRequest};
pub use validation::{validate_offer, validate_weights, OfferValidationError, ValidationIssue};
pub use weights::{rebalance, snap, WeightRebalancer, STEP};
