use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Scoring model selected by the person evaluating the offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserProfile {
    Graduate,
    Experienced,
    Family,
    #[serde(other)]
    Unknown,
}

impl UserProfile {
    pub fn label(&self) -> &'static str {
        match self {
            UserProfile::Graduate => "graduate model",
            UserProfile::Experienced => "experienced professional model",
            UserProfile::Family => "family first model",
            UserProfile::Unknown => "default model",
        }
    }
}

/// Headcount bracket of the hiring company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompanySize {
    #[serde(rename = "<50")]
    Under50,
    #[serde(rename = "50-200")]
    From50To200,
    #[serde(rename = "200-1000")]
    From200To1000,
    #[serde(rename = "1000-10000")]
    From1000To10000,
    #[serde(rename = ">10000")]
    Over10000,
    #[serde(other, rename = "unknown")]
    Unknown,
}

impl CompanySize {
    pub fn label(&self) -> &'static str {
        match self {
            CompanySize::Under50 => "<50",
            CompanySize::From50To200 => "50-200",
            CompanySize::From200To1000 => "200-1000",
            CompanySize::From1000To10000 => "1000-10000",
            CompanySize::Over10000 => ">10000",
            CompanySize::Unknown => "unknown",
        }
    }
}

/// Funding or maturity stage of the hiring company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyStage {
    Startup,
    Growth,
    Mature,
    Listed,
    #[serde(other)]
    Unknown,
}

impl CompanyStage {
    pub fn label(&self) -> &'static str {
        match self {
            CompanyStage::Startup => "startup",
            CompanyStage::Growth => "growth",
            CompanyStage::Mature => "mature",
            CompanyStage::Listed => "listed",
            CompanyStage::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthBenefitLevel {
    Basic,
    Standard,
    Premium,
    #[serde(other)]
    Unknown,
}

impl HealthBenefitLevel {
    pub fn label(&self) -> &'static str {
        match self {
            HealthBenefitLevel::Basic => "basic",
            HealthBenefitLevel::Standard => "standard",
            HealthBenefitLevel::Premium => "premium",
            HealthBenefitLevel::Unknown => "unknown",
        }
    }
}

/// Daily working interval expressed as hours on a 24h clock, `[start, end]` on the wire.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkHours {
    pub start: f64,
    pub end: f64,
}

impl WorkHours {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn daily_hours(&self) -> f64 {
        self.end - self.start
    }
}

impl Serialize for WorkHours {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.start, self.end].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for WorkHours {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let [start, end] = <[f64; 2]>::deserialize(deserializer)?;
        Ok(Self { start, end })
    }
}

impl fmt::Display for WorkHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

/// The six scored dimensions, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WeightKey {
    Salary,
    LongTerm,
    Development,
    Prospects,
    Environment,
    Balance,
}

impl WeightKey {
    pub const ALL: [WeightKey; 6] = [
        WeightKey::Salary,
        WeightKey::LongTerm,
        WeightKey::Development,
        WeightKey::Prospects,
        WeightKey::Environment,
        WeightKey::Balance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WeightKey::Salary => "salary",
            WeightKey::LongTerm => "longTerm",
            WeightKey::Development => "development",
            WeightKey::Prospects => "prospects",
            WeightKey::Environment => "environment",
            WeightKey::Balance => "balance",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().replace(['_', '-'], "").to_ascii_lowercase();
        WeightKey::ALL
            .into_iter()
            .find(|key| key.as_str().to_ascii_lowercase() == normalized)
    }
}

impl fmt::Display for WeightKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-chosen percentage weights. Once initialized through the rebalancer they sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightSet {
    pub salary: u32,
    pub long_term: u32,
    pub development: u32,
    pub prospects: u32,
    pub environment: u32,
    pub balance: u32,
}

impl WeightSet {
    pub fn new(values: [u32; 6]) -> Self {
        let [salary, long_term, development, prospects, environment, balance] = values;
        Self {
            salary,
            long_term,
            development,
            prospects,
            environment,
            balance,
        }
    }

    pub fn get(&self, key: WeightKey) -> u32 {
        match key {
            WeightKey::Salary => self.salary,
            WeightKey::LongTerm => self.long_term,
            WeightKey::Development => self.development,
            WeightKey::Prospects => self.prospects,
            WeightKey::Environment => self.environment,
            WeightKey::Balance => self.balance,
        }
    }

    /// Sum of all six weights, widened so untrusted wire values cannot overflow.
    pub fn total(&self) -> u64 {
        self.iter().map(|(_, value)| u64::from(value)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (WeightKey, u32)> + '_ {
        WeightKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }

    pub fn to_array(&self) -> [u32; 6] {
        WeightKey::ALL.map(|key| self.get(key))
    }
}

impl Default for WeightSet {
    fn default() -> Self {
        Self::new([25, 10, 20, 15, 15, 15])
    }
}

/// Structured job offer collected by the evaluation form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferRecord {
    pub user_profile: UserProfile,
    pub company_name: String,
    pub job_title: String,
    pub company_size: CompanySize,
    pub company_stage: CompanyStage,
    pub base_salary: f64,
    pub salary_months: f64,
    #[serde(default)]
    pub annual_subsidies: f64,
    #[serde(default)]
    pub has_stock_option: bool,
    #[serde(default)]
    pub stock_option_value: f64,
    pub health_benefit_level: HealthBenefitLevel,
    pub commute_time: f64,
    pub work_hours: WorkHours,
    #[serde(default)]
    pub paid_leave: f64,
    pub career_development: f64,
    pub work_content: f64,
    pub work_environment: f64,
    pub life_balance: f64,
    pub weights: WeightSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Normalized 0-100 sub-scores, one decimal each.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub compensation_score: f64,
    pub long_term_score: f64,
    pub development_score: f64,
    pub prospects_score: f64,
    pub environment_score: f64,
    pub life_balance_and_benefits_score: f64,
}

impl ScoreResult {
    /// Sub-score governed by the given weight.
    pub fn get(&self, key: WeightKey) -> f64 {
        match key {
            WeightKey::Salary => self.compensation_score,
            WeightKey::LongTerm => self.long_term_score,
            WeightKey::Development => self.development_score,
            WeightKey::Prospects => self.prospects_score,
            WeightKey::Environment => self.environment_score,
            WeightKey::Balance => self.life_balance_and_benefits_score,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (WeightKey, f64)> + '_ {
        WeightKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }
}

/// Sub-scores plus one aggregate index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredOffer {
    pub scores: ScoreResult,
    pub final_score: f64,
}
