//! Fits the task priority model on the built-in example table and writes
//! the artifact to its well-known path, replacing any previous one.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use task_priority::artifact;
use task_priority::data;
use task_priority::forest::RandomForestBuilder;

/// Train the task priority model and save it to disk.
#[derive(Parser)]
#[command(name = "train_model", version, about, long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let builder = data::training_set();
    let dataset = builder.build();
    info!(
        rows = dataset.rows_len(),
        features = dataset.features_len(),
        "built training dataset"
    );

    let model = RandomForestBuilder::default().fit(dataset.clone());

    let train_accuracy = dataset.evaluate(&model);
    info!(trees = model.n_trees(), train_accuracy, "fitted random forest");

    artifact::save(&model, artifact::MODEL_PATH)?;

    Ok(())
}
