//! Task priority prediction through a persisted random-forest model.
//!
//! Two binaries share this library and nothing else: `train_model` fits a
//! forest on the fixed example table in [`data`] and writes the result to
//! [`artifact::MODEL_PATH`]; `predict_priority` loads that file and prints
//! one predicted label for an `(importance, urgency)` pair.
//!
//! The training table is a three-row demonstration set compiled into the
//! binary. This crate is scaffolding for the train-to-predict round trip
//! through a serialized model, not a production training pipeline.

pub mod artifact;
pub mod classifier;
pub mod data;
pub mod dataset;
pub mod forest;
pub mod functions;
pub mod node;
pub mod tree;
