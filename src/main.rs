//! Smart Tickets CLI
//!
//! Analyzes matches, prints or delivers the generated tickets, and can run
//! on a daily schedule.

use chrono::{Local, NaiveDate, Timelike};
use clap::{Parser, Subcommand};
use smart_tickets::{
    config::Config,
    engine::{BettingEngine, EngineReport},
    notify::{format, Notifier},
    source::{self, DemoSource, JsonFileSource, StatisticsSource},
    types::ConfidenceLevel,
};
use rust_decimal::Decimal;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// How often the scheduler checks the clock
const SCHEDULE_POLL: Duration = Duration::from_secs(30);
/// Back-off after a failed scheduled run
const ERROR_BACKOFF: Duration = Duration::from_secs(60);

#[derive(Parser)]
#[command(name = "smart-tickets")]
#[command(about = "Football betting opportunity analysis and smart ticket generation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze matches from a JSON file
    Analyze {
        /// JSON array of matches
        #[arg(short, long)]
        input: String,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
        /// Override generator.max_tickets
        #[arg(long)]
        max_tickets: Option<usize>,
        /// Override generator.min_confidence (low, medium, high, very_high)
        #[arg(long)]
        min_confidence: Option<ConfidenceLevel>,
        /// Also send the tickets to Telegram
        #[arg(long)]
        notify: bool,
    },
    /// Analyze the built-in demo fixtures
    Demo {
        /// Seed for the demo statistics
        #[arg(short, long, default_value = "2024")]
        seed: u64,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run now, then every day at schedule.daily_at
    Run {
        /// Log tickets instead of sending them
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::load_or_default(&cli.config)?;

    match cli.command {
        Commands::Analyze {
            input,
            json,
            max_tickets,
            min_confidence,
            notify,
        } => {
            if let Some(max) = max_tickets {
                config.generator.max_tickets = max;
            }
            if let Some(level) = min_confidence {
                config.generator.min_confidence = level;
            }
            config.validate()?;
            analyze(&config, &JsonFileSource::new(input), json, notify).await
        }
        Commands::Demo { seed, json } => analyze(&config, &DemoSource::new(seed), json, false).await,
        Commands::Run { dry_run } => run_daily(config, dry_run).await,
    }
}

async fn analyze(
    config: &Config,
    source: &dyn StatisticsSource,
    json: bool,
    notify: bool,
) -> anyhow::Result<()> {
    let engine = BettingEngine::from_config(config);
    let report = engine.run_from(source).await?;
    let bankroll = config.bankroll.as_ref().map(|b| b.amount);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, bankroll);
    }

    if notify {
        let notifier = Notifier::from_config(config.telegram.as_ref());
        if !notifier.is_enabled() {
            tracing::warn!("--notify given but Telegram is not configured");
        }
        deliver(&notifier, &report, bankroll).await?;
    }

    Ok(())
}

fn print_report(report: &EngineReport, bankroll: Option<Decimal>) {
    println!(
        "Analyzed {} matches: {} opportunities, {} skipped",
        report.matches_analyzed,
        report.opportunities.len(),
        report.failures.len()
    );
    for failure in &report.failures {
        println!("  skipped {}: {}", failure.match_label, failure.reason);
    }
    println!();

    if report.tickets.is_empty() {
        println!("No opportunities identified.");
        return;
    }

    for ticket in &report.tickets {
        println!("{}", format::ticket_text(ticket, bankroll));
    }

    if let Some(best) = report.ticket_of_the_day() {
        println!(
            "Ticket of the day: {} ({}, {}%)",
            best.ticket_id,
            best.strategy,
            best.confidence_pct()
        );
    }
}

async fn deliver(
    notifier: &Notifier,
    report: &EngineReport,
    bankroll: Option<Decimal>,
) -> smart_tickets::Result<()> {
    if report.matches_analyzed == 0 {
        return notifier.no_matches().await;
    }
    notifier.send_tickets(&report.tickets, bankroll).await?;
    if let Some(best) = report.ticket_of_the_day() {
        notifier.ticket_of_the_day(best).await?;
    }
    Ok(())
}

async fn run_daily(config: Config, dry_run: bool) -> anyhow::Result<()> {
    tracing::info!("Starting smart ticket scheduler");

    if dry_run {
        tracing::warn!("Running in DRY RUN mode - tickets will only be logged");
    }

    let daily_at = config.schedule.daily_time()?;
    let engine = BettingEngine::from_config(&config);
    let source = source::from_config(&config.source);
    let notifier = if dry_run {
        Notifier::disabled()
    } else {
        Notifier::from_config(config.telegram.as_ref())
    };
    let bankroll = config.bankroll.as_ref().map(|b| b.amount);

    if let Err(e) = notifier.startup(dry_run).await {
        tracing::warn!("Startup notification failed: {}", e);
    }

    // First run happens immediately
    let mut last_run: Option<NaiveDate> = None;
    run_once(&engine, source.as_ref(), &notifier, bankroll).await;
    tracing::info!("Next run scheduled daily at {}", daily_at.format("%H:%M"));

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutting down");
                return Ok(());
            }
            _ = tokio::time::sleep(SCHEDULE_POLL) => {}
        }

        let now = Local::now();
        let due = now.hour() == daily_at.hour() && now.minute() == daily_at.minute();
        if due && last_run != Some(now.date_naive()) {
            tracing::info!("Scheduled analysis time reached");
            last_run = Some(now.date_naive());
            if !run_once(&engine, source.as_ref(), &notifier, bankroll).await {
                tokio::time::sleep(ERROR_BACKOFF).await;
            }
        }
    }
}

/// One full run. Failures are logged and reported, never fatal.
async fn run_once(
    engine: &BettingEngine,
    source: &dyn StatisticsSource,
    notifier: &Notifier,
    bankroll: Option<Decimal>,
) -> bool {
    let result = match engine.run_from(source).await {
        Ok(report) => {
            for ticket in &report.tickets {
                tracing::info!("\n{}", format::ticket_text(ticket, bankroll));
            }
            deliver(notifier, &report, bankroll).await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => true,
        Err(e) => {
            tracing::error!("Daily analysis failed: {}", e);
            if let Err(notify_err) = notifier.error("daily analysis", &e.to_string()).await {
                tracing::error!("Failed to report error: {}", notify_err);
            }
            false
        }
    }
}
