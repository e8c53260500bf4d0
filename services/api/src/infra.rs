use metrics_exporter_prometheus::PrometheusHandle;
use offer_score::error::AppError;
use offer_score::offers::{ExportFormat, OfferRecord, WeightKey, WeightSet};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn read_offer(path: &Path) -> Result<OfferRecord, AppError> {
    let file = std::fs::File::open(path)?;
    let offer = serde_json::from_reader(std::io::BufReader::new(file))?;
    Ok(offer)
}

/// Parse six comma-separated percentages in declaration order.
pub(crate) fn parse_weights(raw: &str) -> Result<WeightSet, String> {
    let values = raw
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<u32>()
                .map_err(|err| format!("'{}' is not a whole percentage ({err})", part.trim()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let values: [u32; 6] = values
        .try_into()
        .map_err(|values: Vec<u32>| format!("expected 6 weights, found {}", values.len()))?;
    Ok(WeightSet::new(values))
}

pub(crate) fn parse_weight_key(raw: &str) -> Result<WeightKey, String> {
    WeightKey::parse(raw).ok_or_else(|| {
        let known = WeightKey::ALL.map(|key| key.as_str()).join(", ");
        format!("unknown weight '{raw}' (expected one of {known})")
    })
}

pub(crate) fn parse_export_format(raw: &str) -> Result<ExportFormat, String> {
    raw.parse::<ExportFormat>().map_err(|err| err.to_string())
}

/// Infer the export format from an output file name.
pub(crate) fn format_from_path(path: &Path) -> Option<ExportFormat> {
    let guessed = mime_guess::from_path(path).first()?;
    match (guessed.type_().as_str(), guessed.subtype().as_str()) {
        ("application", "json") => Some(ExportFormat::Json),
        ("text", "csv") => Some(ExportFormat::Csv),
        ("text", "plain") => Some(ExportFormat::Txt),
        _ => None,
    }
}
