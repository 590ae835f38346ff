use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use rss_activity::{classify_inactive, inactivity_threshold, ActivityAggregator, ActivityConfig, FeedRsParser};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Report companies whose RSS feeds have gone quiet.
#[derive(Debug, Parser)]
#[command(name = "rss-activity", version)]
struct Cli {
    /// JSON file mapping company names to feed sources
    #[arg(long, env = "RSS_ACTIVITY_CONFIG")]
    config: PathBuf,

    /// Minimum days without activity (repeatable, fractions allowed)
    #[arg(long = "days")]
    days: Vec<f64>,

    /// Also print each company's last activity
    #[arg(long)]
    report: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let config = ActivityConfig::load(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    let thresholds = if cli.days.is_empty() {
        config.min_days_inactive.clone()
    } else {
        cli.days.clone()
    };

    info!(
        "Checking {} companies against {} thresholds",
        config.companies.len(),
        thresholds.len()
    );

    let parser = FeedRsParser::from_config(config.fetch.clone()).context("failed to build HTTP client")?;
    let aggregator = ActivityAggregator::new(parser);

    // Fetch once and judge every threshold against the same snapshot.
    let now = Utc::now();
    let snapshot = aggregator.get_companies_last_modified(&config.companies)?;

    if cli.report {
        for (company, last_modified) in &snapshot {
            match last_modified {
                Some(date) => println!("{}: last active {}", company, date.to_rfc3339()),
                None => println!("{}: no activity found", company),
            }
        }
    }

    for min_days_inactive in thresholds {
        let threshold = inactivity_threshold(now, min_days_inactive)?;
        let inactive = classify_inactive(&snapshot, threshold);
        println!(
            "Companies that have not been active in the last {:.6} days: {:?}",
            min_days_inactive, inactive
        );
    }

    Ok(())
}
