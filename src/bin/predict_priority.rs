//! Loads the saved task priority model and prints one predicted label for
//! an (importance, urgency) pair supplied on the command line.
//!
//! Only the label reaches stdout; diagnostics go to stderr.

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use task_priority::artifact;
use task_priority::classifier::Classifier;

/// Predict a task's priority from its importance and urgency scores.
#[derive(Parser)]
#[command(name = "predict_priority", version, about, long_about = None)]
struct Cli {
    /// Importance score of the task
    importance: i64,

    /// Urgency score of the task
    urgency: i64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let model = artifact::load(artifact::MODEL_PATH)?;

    let prediction = model.predict(&[cli.importance as f64, cli.urgency as f64]);
    let label: i64 = num_traits::cast(prediction)
        .ok_or_else(|| anyhow!("model produced a non-integer label: {prediction}"))?;

    println!("{label}");

    Ok(())
}
