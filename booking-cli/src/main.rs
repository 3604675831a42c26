use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use booking_cli::submit::{SubmitClient, messaging_handoff};
use booking_cli::{load_pricing, load_snapshot, logging, render_estimate};
use booking_core::summary::build_order_summary;
use booking_core::{EstimateEngine, FieldSnapshot, ValidationGate};
use clap::{Parser, Subcommand};

/// Estimate and submission tool for the reading reservation form.
///
/// Reads the current form state as a snapshot JSON file, computes the
/// priced line items and the total, checks submit-readiness, and can
/// deliver the finalized summary to the booking endpoint.
#[derive(Parser, Debug)]
#[command(name = "booking-estimator")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the snapshot JSON file capturing the current form state
    #[arg(short, long)]
    snapshot: PathBuf,

    /// Pricing TOML overriding the built-in deployment constants
    #[arg(short, long)]
    pricing: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the line items, subtotal and total
    Estimate,

    /// Check submit-readiness; exits non-zero when submission is blocked
    Validate,

    /// Print the submission summary text (validates first)
    Summary {
        /// Append the messaging-app deep link after the summary
        #[arg(long)]
        handoff: bool,
    },

    /// Validate, then POST the summary to the booking endpoint
    Submit {
        /// Endpoint URL expecting a form-encoded body
        #[arg(long)]
        endpoint: String,
    },
}

fn ensure_valid(
    gate: &ValidationGate<'_>,
    snapshot: &FieldSnapshot,
) -> Result<()> {
    let validation = gate.validate(snapshot);
    for failure in &validation.failures {
        tracing::warn!(field = failure.field.as_str(), "{}", failure.message);
    }
    if let Some(primary) = validation.primary() {
        bail!("submission blocked: {}", primary.message);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let pricing = load_pricing(args.pricing.as_deref()).context("failed to load pricing config")?;
    let snapshot = load_snapshot(&args.snapshot)
        .with_context(|| format!("failed to load snapshot: {}", args.snapshot.display()))?;

    let engine = EstimateEngine::new(&pricing);
    let gate = ValidationGate::new(&pricing);

    match args.command {
        Command::Estimate => {
            let result = engine.compute(&snapshot);
            print!("{}", render_estimate(&result));
        }
        Command::Validate => {
            let validation = gate.validate(&snapshot);
            if validation.ok {
                println!("OK: snapshot is ready for submission.");
            } else {
                for failure in &validation.failures {
                    eprintln!("{}: {}", failure.field.as_str(), failure.message);
                }
                bail!("validation failed ({} issue(s))", validation.failures.len());
            }
        }
        Command::Summary { handoff } => {
            ensure_valid(&gate, &snapshot)?;
            let result = engine.compute(&snapshot);
            let summary = build_order_summary(&result, &snapshot);
            if handoff {
                println!("{}", messaging_handoff(&summary));
            } else {
                println!("{summary}");
            }
        }
        Command::Submit { endpoint } => {
            ensure_valid(&gate, &snapshot)?;
            let result = engine.compute(&snapshot);
            let summary = build_order_summary(&result, &snapshot);
            let response = SubmitClient::new(endpoint)
                .submit(&summary, result.total)
                .await
                .context("submission failed")?;
            println!(
                "Submitted: {}",
                response.message.unwrap_or_else(|| response.result)
            );
        }
    }

    Ok(())
}
