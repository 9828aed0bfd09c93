//! Persistence of the fitted model at its well-known path.
//!
//! The artifact is the crate's own tagged binary format, written wholesale
//! and overwritten wholesale. There is no version field, no checksum and no
//! locking; the file is owned by whatever working directory the binaries
//! run in.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::classifier::Classifier;
use crate::forest::RandomForestClassifier;

/// Where the trainer writes and the predictor reads, relative to the
/// working directory.
pub const MODEL_PATH: &str = "task_priority_model.bin";

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to write model artifact {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to read model artifact {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Serializes the classifier to `path`, truncating any previous artifact.
pub fn save(model: &RandomForestClassifier, path: impl AsRef<Path>) -> Result<(), ArtifactError> {
    let path = path.as_ref();

    let file = File::create(path).map_err(|source| ArtifactError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    model
        .serialize(&mut writer)
        .and_then(|_| writer.flush())
        .map_err(|source| ArtifactError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    info!(path = %path.display(), trees = model.n_trees(), "saved model artifact");

    Ok(())
}

/// Deserializes a classifier from `path`.
pub fn load(path: impl AsRef<Path>) -> Result<RandomForestClassifier, ArtifactError> {
    let path = path.as_ref();

    let read_error = |source| ArtifactError::Read {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_error)?;
    let model = RandomForestClassifier::deserialize(&mut BufReader::new(file)).map_err(read_error)?;

    info!(path = %path.display(), trees = model.n_trees(), "loaded model artifact");

    Ok(model)
}
