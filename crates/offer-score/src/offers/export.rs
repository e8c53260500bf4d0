//! Report export: the offer, its six sub-scores and both aggregate indices rendered as
//! JSON, plain text or CSV.

use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

use super::domain::{OfferRecord, ScoreResult};
use super::scoring::{calculate_market_power_index, calculate_offer_score};

pub const REPORT_TITLE: &str = "OfferScore Evaluation Report";
const UTF8_BOM: &str = "\u{feff}";

/// Field key and human label, in the order reports list them.
pub const FIELD_LABELS: &[(&str, &str)] = &[
    ("createdAt", "Created At"),
    ("userProfile", "User Profile"),
    ("companyName", "Company Name"),
    ("jobTitle", "Job Title"),
    ("companySize", "Company Size"),
    ("companyStage", "Company Stage"),
    ("baseSalary", "Monthly Base Salary"),
    ("salaryMonths", "Salary Months"),
    ("annualSubsidies", "Annual Subsidies"),
    ("hasStockOption", "Has Stock Options"),
    ("stockOptionValue", "Annualized Stock Option Value"),
    ("healthBenefitLevel", "Health Benefits"),
    ("commuteTime", "One-way Commute (minutes)"),
    ("workHours", "Work Hours (per day)"),
    ("paidLeave", "Paid Leave (days)"),
    ("careerDevelopment", "Career Development Rating (1-10)"),
    ("workContent", "Work Content Rating (1-10)"),
    ("workEnvironment", "Work Environment Rating (1-10)"),
    ("lifeBalance", "Life Balance Rating (1-10)"),
    ("weights.salary", "Salary Weight (%)"),
    ("weights.longTerm", "Long-term Weight (%)"),
    ("weights.development", "Development Weight (%)"),
    ("weights.prospects", "Prospects Weight (%)"),
    ("weights.environment", "Environment Weight (%)"),
    ("weights.balance", "Balance Weight (%)"),
    ("compensationScore", "Compensation Score"),
    ("longTermScore", "Long-term Score"),
    ("developmentScore", "Career Development Score"),
    ("prospectsScore", "Company Prospects Score"),
    ("environmentScore", "Team Environment Score"),
    ("lifeBalanceAndBenefitsScore", "Life Balance & Benefits Score"),
    ("offerScore", "OfferScore (personal fit)"),
    ("marketPowerIndex", "Market Power Index"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Json,
    Txt,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Txt => "txt",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn content_type(&self) -> mime::Mime {
        match self {
            ExportFormat::Json => mime::APPLICATION_JSON,
            ExportFormat::Txt => mime::TEXT_PLAIN_UTF_8,
            ExportFormat::Csv => mime::TEXT_CSV_UTF_8,
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "txt" | "text" => Ok(ExportFormat::Txt),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(ExportError::UnsupportedFormat(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("unsupported export format '{0}'")]
    UnsupportedFormat(String),
    #[error("failed to encode report as JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to encode report as CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Offer plus every computed figure, as written to export files.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferReport {
    #[serde(flatten)]
    pub offer: OfferRecord,
    #[serde(flatten)]
    pub scores: ScoreResult,
    pub offer_score: f64,
    pub market_power_index: f64,
    pub generated_at: DateTime<Utc>,
}

impl OfferReport {
    pub fn prepare(offer: &OfferRecord, generated_at: DateTime<Utc>) -> Self {
        let personal = calculate_offer_score(offer);
        let market = calculate_market_power_index(offer);
        Self {
            offer: offer.clone(),
            scores: personal.scores,
            offer_score: personal.final_score,
            market_power_index: market.final_score,
            generated_at,
        }
    }

    /// `(label, value)` rows in [`FIELD_LABELS`] order; absent fields are skipped.
    pub fn labelled_rows(&self) -> Result<Vec<(&'static str, String)>, ExportError> {
        let value = serde_json::to_value(self)?;
        let rows = FIELD_LABELS
            .iter()
            .filter_map(|(key, label)| lookup(&value, key).map(|field| (*label, render(field))))
            .collect();
        Ok(rows)
    }
}

fn lookup<'a>(value: &'a Value, dotted: &str) -> Option<&'a Value> {
    dotted
        .split('.')
        .try_fold(value, |node, segment| node.get(segment))
        .filter(|node| !node.is_null())
}

fn render(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Array(items) => items.iter().map(render).collect::<Vec<_>>().join(" - "),
        other => other.to_string(),
    }
}

/// Rendered export ready to be written or served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    pub file_name: String,
    pub content_type: String,
    pub body: Vec<u8>,
}

fn is_reserved(ch: char) -> bool {
    matches!(ch, '/' | '\\' | '?' | '%' | '*' | ':' | '|' | '"' | '<' | '>')
}

pub fn sanitize_file_name(raw: &str) -> String {
    raw.chars()
        .map(|ch| {
            if ch.is_whitespace() || is_reserved(ch) {
                '_'
            } else {
                ch
            }
        })
        .collect()
}

pub fn report_file_name(offer: &OfferRecord, format: ExportFormat) -> String {
    let base = sanitize_file_name(&format!(
        "OfferScore_{}_{}",
        offer.company_name, offer.job_title
    ));
    format!("{base}.{}", format.extension())
}

pub fn export_offer(
    offer: &OfferRecord,
    format: ExportFormat,
    generated_at: DateTime<Utc>,
) -> Result<ExportDocument, ExportError> {
    let report = OfferReport::prepare(offer, generated_at);
    let body = match format {
        ExportFormat::Json => serde_json::to_vec_pretty(&report)?,
        ExportFormat::Txt => render_text(&report)?.into_bytes(),
        ExportFormat::Csv => render_csv(&report)?,
    };

    tracing::info!(
        company = %offer.company_name,
        format = format.extension(),
        bytes = body.len(),
        "exported offer report"
    );

    Ok(ExportDocument {
        file_name: report_file_name(offer, format),
        content_type: format.content_type().to_string(),
        body,
    })
}

fn render_text(report: &OfferReport) -> Result<String, ExportError> {
    let mut text = format!(
        "{REPORT_TITLE}\n{}\n\nGenerated At: {}\n",
        "=".repeat(REPORT_TITLE.len()),
        report
            .generated_at
            .to_rfc3339_opts(SecondsFormat::Secs, true)
    );
    for (label, value) in report.labelled_rows()? {
        text.push_str(&format!("{label}: {value}\n"));
    }
    Ok(text)
}

fn render_csv(report: &OfferReport) -> Result<Vec<u8>, ExportError> {
    let rows = report.labelled_rows()?;
    let mut writer = csv::Writer::from_writer(UTF8_BOM.as_bytes().to_vec());
    writer.write_record(rows.iter().map(|(label, _)| *label))?;
    writer.write_record(rows.iter().map(|(_, value)| value.as_str()))?;
    writer
        .into_inner()
        .map_err(|err| ExportError::Io(err.into_error()))
}
