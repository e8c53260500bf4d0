use crate::infra::{
    format_from_path, parse_export_format, parse_weight_key, parse_weights, read_offer,
};
use chrono::Utc;
use clap::Args;
use offer_score::config::AppConfig;
use offer_score::error::AppError;
use offer_score::offers::{
    CompanySize, CompanyStage, ExportFormat, HealthBenefitLevel, OfferEvaluation,
    OfferEvaluationService, OfferRecord, RebalanceRequest, UserProfile, WeightKey, WeightSet,
    WorkHours,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to an offer record encoded as JSON
    #[arg(long)]
    pub(crate) offer: PathBuf,
    /// Print the evaluation as JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RebalanceArgs {
    /// Current weights as six comma-separated percentages
    /// (salary,longTerm,development,prospects,environment,balance)
    #[arg(long, default_value = "25,10,20,15,15,15", value_parser = parse_weights)]
    pub(crate) weights: WeightSet,
    /// Weight being moved (e.g. salary, longTerm, balance)
    #[arg(long, value_parser = parse_weight_key)]
    pub(crate) key: WeightKey,
    /// Requested value for the weight, snapped to steps of 5
    #[arg(long)]
    pub(crate) value: f64,
}

#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
    /// Path to an offer record encoded as JSON
    #[arg(long)]
    pub(crate) offer: PathBuf,
    /// Report format (json, txt or csv); inferred from --output when omitted
    #[arg(long, value_parser = parse_export_format)]
    pub(crate) format: Option<ExportFormat>,
    /// Destination file; defaults to the configured export directory
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let offer = read_offer(&args.offer)?;
    let evaluation = OfferEvaluationService::default().evaluate(&offer)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
    } else {
        print_evaluation(&offer, &evaluation);
    }
    Ok(())
}

pub(crate) fn run_rebalance(args: RebalanceArgs) -> Result<(), AppError> {
    let request = RebalanceRequest {
        weights: args.weights,
        key: args.key,
        value: args.value,
    };
    let updated = OfferEvaluationService::default().rebalance(&request)?;

    println!("Moved {} to {}", args.key, args.value);
    for (key, value) in updated.iter() {
        let before = args.weights.get(key);
        let marker = if before == value { "" } else { " *" };
        println!("  {:<12} {:>3}% (was {:>3}%){marker}", key.as_str(), value, before);
    }
    println!("  {:<12} {:>3}%", "total", updated.total());
    Ok(())
}

pub(crate) fn run_export(args: ExportArgs) -> Result<(), AppError> {
    let offer = read_offer(&args.offer)?;
    let format = args
        .format
        .or_else(|| args.output.as_deref().and_then(format_from_path))
        .unwrap_or(ExportFormat::Json);

    let document = OfferEvaluationService::default().export(&offer, format, Utc::now())?;

    let destination = match args.output {
        Some(path) => path,
        None => {
            let config = AppConfig::load()?;
            std::fs::create_dir_all(&config.export.output_dir)?;
            config.export.output_dir.join(&document.file_name)
        }
    };
    std::fs::write(&destination, &document.body)?;

    println!(
        "Wrote {} report ({} bytes) to {}",
        format.extension(),
        document.body.len(),
        destination.display()
    );
    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let service = OfferEvaluationService::default();
    for offer in sample_offers() {
        let evaluation = service.evaluate(&offer)?;
        print_evaluation(&offer, &evaluation);
        println!();
    }
    Ok(())
}

fn print_evaluation(offer: &OfferRecord, evaluation: &OfferEvaluation) {
    println!(
        "{} - {} ({}, {}, {}, {} health cover)",
        offer.company_name,
        offer.job_title,
        offer.user_profile.label(),
        offer.company_size.label(),
        offer.company_stage.label(),
        offer.health_benefit_level.label()
    );
    for (key, score) in evaluation.scores.iter() {
        println!(
            "  {:<12} {:>5.1}  weight {:>3}%",
            key.as_str(),
            score,
            offer.weights.get(key)
        );
    }
    println!("  Offer score:        {:.1}", evaluation.offer_score);
    println!("  Market power index: {:.1}", evaluation.market_power_index);
}

fn sample_offers() -> Vec<OfferRecord> {
    let listed = OfferRecord {
        user_profile: UserProfile::Experienced,
        company_name: "Northwind Systems".to_string(),
        job_title: "Backend Engineer".to_string(),
        company_size: CompanySize::Over10000,
        company_stage: CompanyStage::Listed,
        base_salary: 25_000.0,
        salary_months: 14.0,
        annual_subsidies: 20_000.0,
        has_stock_option: false,
        stock_option_value: 0.0,
        health_benefit_level: HealthBenefitLevel::Premium,
        commute_time: 20.0,
        work_hours: WorkHours::new(9.0, 18.0),
        paid_leave: 15.0,
        career_development: 8.0,
        work_content: 8.0,
        work_environment: 8.0,
        life_balance: 8.0,
        weights: WeightSet::new([40, 0, 15, 20, 10, 15]),
        created_at: None,
    };
    let startup = OfferRecord {
        user_profile: UserProfile::Graduate,
        company_name: "Tiny Rocket".to_string(),
        job_title: "Full Stack Developer".to_string(),
        company_size: CompanySize::Under50,
        company_stage: CompanyStage::Startup,
        base_salary: 15_000.0,
        salary_months: 13.0,
        annual_subsidies: 0.0,
        has_stock_option: true,
        stock_option_value: 200_000.0,
        health_benefit_level: HealthBenefitLevel::Basic,
        commute_time: 60.0,
        work_hours: WorkHours::new(9.0, 21.0),
        paid_leave: 5.0,
        career_development: 9.0,
        work_content: 7.0,
        work_environment: 6.0,
        life_balance: 8.0,
        weights: WeightSet::new([30, 10, 25, 15, 10, 10]),
        created_at: None,
    };
    vec![listed, startup]
}
