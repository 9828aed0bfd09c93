//! The built-in training table.
//!
//! Three hand-written examples, compiled into the binary. Demonstration
//! data: nothing validates, deduplicates or range-checks it.

use crate::dataset;

pub struct TrainingExample {
    /// Descriptive only; never fed to the model.
    pub name: &'static str,
    pub importance: i64,
    pub urgency: i64,
    pub priority: i64,
}

pub const TRAINING_EXAMPLES: &[TrainingExample] = &[
    TrainingExample {
        name: "Task1",
        importance: 3,
        urgency: 2,
        priority: 1,
    },
    TrainingExample {
        name: "Task2",
        importance: 2,
        urgency: 4,
        priority: 2,
    },
    TrainingExample {
        name: "Task3",
        importance: 5,
        urgency: 1,
        priority: 1,
    },
];

/// Builds the training data from the fixed table, dropping the name column.
pub fn training_set() -> dataset::Builder {
    let mut builder = dataset::Builder::new();

    for example in TRAINING_EXAMPLES {
        builder.add(
            &[example.importance as f64, example.urgency as f64],
            example.priority as f64,
        );
    }

    builder
}
