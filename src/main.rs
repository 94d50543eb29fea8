/*
    Disparity-Risk
    Copyright (C) 2026 Moroya Sakamoto
*/

//! Evaluate the simulated mortality risk for one set of inputs.
//!
//! Usage: cargo run --bin risk-predictor -- --age 65 --race Black --vaccination Unvaccinated

use anyhow::Result;
use clap::Parser;
use disparity_risk::{
    AgeRange, Race, RiskEstimator, RiskQuery, RiskReport, Sex, VaccinationStatus,
};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(author, version, about = "Simulated COVID-19 mortality risk predictor")]
struct Args {
    /// Age in years
    #[arg(short, long, default_value = "65", value_parser = parse_age)]
    age: u32,

    /// Sex: Male or Female
    #[arg(short, long, default_value = "Male")]
    sex: Sex,

    /// Race: White, Black, Asian, Hispanic or Other
    #[arg(short, long, default_value = "White")]
    race: Race,

    /// Vaccination status: Vaccinated or Unvaccinated
    #[arg(long, default_value = "Vaccinated")]
    vaccination: VaccinationStatus,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_age(s: &str) -> std::result::Result<u32, Box<dyn std::error::Error + Send + Sync>> {
    let age: u32 = s.trim().parse()?;
    Ok(AgeRange::default().validate(age)?)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        "disparity_risk=debug,risk_predictor=debug"
    } else {
        "disparity_risk=info,risk_predictor=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let query = RiskQuery::new(args.age, args.sex, args.race, args.vaccination)?;
    debug!(features = ?query.encode(), "encoded query");

    let estimator = RiskEstimator::default();
    let result = estimator.estimate(&query);
    info!(
        probability = result.risk_probability,
        category = %result.category,
        elevated = estimator.is_elevated_group(&query),
        "risk estimated"
    );

    let report = RiskReport::new(&result);
    if args.json {
        let out = serde_json::json!({
            "query": query,
            "features": query.encode(),
            "report": report,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{report}");
    }

    Ok(())
}
