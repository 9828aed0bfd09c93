use std::io::{Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tracing::debug;

use crate::classifier::Classifier;
use crate::dataset::Dataset;
use crate::functions::most_frequent;
use crate::tree::{DecisionTree, DecisionTreeBuilder};

/// Fits a bagged ensemble of Gini decision trees.
pub struct RandomForestBuilder {
    pub n_trees: usize,
    pub max_depth: usize,
    /// Bootstrap sample size as a fraction of the training rows.
    pub bag_amount: f64,
}

impl Default for RandomForestBuilder {
    fn default() -> Self {
        Self {
            n_trees: 100,
            max_depth: 32,
            bag_amount: 1.0,
        }
    }
}

impl RandomForestBuilder {
    pub fn fit(&self, dataset: Dataset) -> RandomForestClassifier {
        let max_features = (dataset.features_len() as f64).sqrt().ceil() as usize;

        let trees = self
            .tree_rngs()
            .enumerate()
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(|(i, mut rng)| {
                let tree = self.fit_tree(&mut rng, &dataset, max_features);
                debug!(tree = i, "fitted tree");
                tree
            })
            .collect::<Vec<_>>();

        RandomForestClassifier { trees }
    }

    fn fit_tree<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        dataset: &Dataset,
        max_features: usize,
    ) -> DecisionTree {
        let builder = DecisionTreeBuilder {
            max_features: Some(max_features),
            max_depth: self.max_depth,
        };

        let max_samples = (dataset.rows_len() as f64 * self.bag_amount) as usize;
        let bagged = dataset.bootstrap(rng, max_samples);

        builder.fit(rng, bagged)
    }

    /// One independently seeded rng per tree, all derived from a fresh
    /// master seed, so trees can be fit in parallel without sharing state.
    fn tree_rngs(&self) -> impl Iterator<Item = StdRng> {
        let master: u64 = rand::thread_rng().gen();
        let mut seed = [0u8; 32];
        seed[..8].copy_from_slice(&master.to_be_bytes());
        let mut rng = StdRng::from_seed(seed);

        (0..self.n_trees).map(move |_| {
            let mut seed = [0u8; 32];
            rng.fill(&mut seed);
            StdRng::from_seed(seed)
        })
    }
}

#[derive(Debug)]
pub struct RandomForestClassifier {
    trees: Vec<DecisionTree>,
}

impl RandomForestClassifier {
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }
}

impl Classifier for RandomForestClassifier {
    /// Majority vote over the ensemble.
    fn predict(&self, x: &[f64]) -> f64 {
        most_frequent(self.trees.iter().map(|tree| tree.predict(x)))
    }

    fn serialize<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_u16::<BigEndian>(self.trees.len() as u16)?;

        for tree in &self.trees {
            tree.serialize(writer)?;
        }

        Ok(())
    }

    fn deserialize<R: Read>(reader: &mut R) -> std::io::Result<Self> {
        let len = reader.read_u16::<BigEndian>()?;

        let trees = (0..len)
            .map(|_| DecisionTree::deserialize(reader))
            .collect::<std::io::Result<Vec<_>>>()?;

        Ok(Self { trees })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    #[test]
    fn forest_recovers_dominant_training_labels() {
        let builder = data::training_set();
        let model = RandomForestBuilder::default().fit(builder.build());

        assert_eq!(model.predict(&[3.0, 2.0]), 1.0);
        assert_eq!(model.predict(&[5.0, 1.0]), 1.0);
    }

    #[test]
    fn repeated_predictions_agree() {
        let builder = data::training_set();
        let model = RandomForestBuilder::default().fit(builder.build());

        let first = model.predict(&[2.0, 4.0]);
        for _ in 0..10 {
            assert_eq!(model.predict(&[2.0, 4.0]), first);
        }
    }

    #[test]
    fn forest_serialization_round_trips() -> std::io::Result<()> {
        let builder = data::training_set();
        let dataset = builder.build();
        let model = RandomForestBuilder::default().fit(dataset.clone());

        let mut buffer = Vec::new();
        model.serialize(&mut buffer)?;
        let restored = RandomForestClassifier::deserialize(&mut buffer.as_slice())?;

        assert_eq!(model.n_trees(), restored.n_trees());
        for row in dataset.rows() {
            assert_eq!(model.predict(&row), restored.predict(&row));
        }

        Ok(())
    }

    #[test]
    fn truncated_input_fails_to_deserialize() {
        let builder = data::training_set();
        let model = RandomForestBuilder::default().fit(builder.build());

        let mut buffer = Vec::new();
        model.serialize(&mut buffer).unwrap();
        buffer.truncate(buffer.len() / 2);

        assert!(RandomForestClassifier::deserialize(&mut buffer.as_slice()).is_err());
    }
}
