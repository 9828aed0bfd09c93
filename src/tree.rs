use std::io::{Read, Write};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::classifier::Classifier;
use crate::dataset::Dataset;
use crate::functions::{gini, most_frequent};
use crate::node::{Node, Split};

struct NodeBuilder<R> {
    max_features: usize,
    max_depth: usize,
    rng: R,
}

impl<R: Rng> NodeBuilder<R> {
    /// Greedy recursive construction: pick the candidate split with the
    /// best Gini gain over a random subset of columns, or emit a majority
    /// leaf when the depth cap is hit or no split improves impurity.
    fn build(&mut self, dataset: &mut Dataset, depth: usize) -> Node {
        if depth > self.max_depth {
            return Node::Leaf(most_frequent(dataset.targets()));
        }

        let impurity = gini(dataset.targets());

        let mut best_split: Option<Split> = None;
        let mut best_gain = 0.0;

        let columns = (0..dataset.features_len()).collect::<Vec<_>>();
        let max_features = std::cmp::min(columns.len(), self.max_features);

        for &column in columns.choose_multiple(&mut self.rng, max_features) {
            dataset.sort(column);

            for (row, value) in dataset.split_candidates(column) {
                let impurity_left = gini(dataset.targets().take(row));
                let impurity_right = gini(dataset.targets().skip(row));

                let ratio_left = row as f64 / dataset.rows_len() as f64;
                let gain =
                    impurity - (ratio_left * impurity_left + (1.0 - ratio_left) * impurity_right);

                if gain > best_gain {
                    best_split = Some(Split { column, value });
                    best_gain = gain;
                }
            }
        }

        match best_split {
            Some(split) => self.build_children(dataset, split, depth),
            None => Node::Leaf(most_frequent(dataset.targets())),
        }
    }

    fn build_children(&mut self, dataset: &mut Dataset, split: Split, depth: usize) -> Node {
        // The dataset may have been re-sorted by a later candidate column,
        // so restore the winning column's order before partitioning.
        dataset.sort(split.column);

        let row = dataset
            .column(split.column)
            .take_while(|&value| value < split.value)
            .count();

        let (left, right) = dataset.split(row, |part| Box::new(self.build(part, depth + 1)));

        Node::Branch { split, left, right }
    }
}

#[derive(Debug)]
pub struct DecisionTree {
    root: Node,
}

impl Classifier for DecisionTree {
    fn predict(&self, x: &[f64]) -> f64 {
        self.root.predict(x)
    }

    fn serialize<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        self.root.serialize(writer)
    }

    fn deserialize<R: Read>(reader: &mut R) -> std::io::Result<Self> {
        let root = Node::deserialize(reader)?;

        Ok(Self { root })
    }
}

pub struct DecisionTreeBuilder {
    /// Columns considered per node; all of them when `None`.
    pub max_features: Option<usize>,
    pub max_depth: usize,
}

impl Default for DecisionTreeBuilder {
    fn default() -> Self {
        Self {
            max_features: None,
            max_depth: 32,
        }
    }
}

impl DecisionTreeBuilder {
    pub fn fit<R: Rng + ?Sized>(&self, rng: &mut R, mut dataset: Dataset) -> DecisionTree {
        let max_features = self.max_features.unwrap_or_else(|| dataset.features_len());

        let root = (NodeBuilder {
            max_features,
            max_depth: self.max_depth,
            rng,
        })
        .build(&mut dataset, 1);

        DecisionTree { root }
    }
}
