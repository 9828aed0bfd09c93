use std::ops::Range;

use ordered_float::OrderedFloat;
use rand::Rng;
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::classifier::Classifier;

/// A borrowed view over column-major training data.
///
/// The view never moves feature values; it carries an index permutation and
/// an active row range instead, so sorting and partitioning only touch the
/// permutation and many views can share one set of columns.
#[derive(Clone, Debug)]
pub struct Dataset<'a> {
    columns: &'a [Vec<f64>],
    targets: &'a [f64],

    index: Vec<usize>,
    range: Range<usize>,
}

impl<'a> Dataset<'a> {
    /// Fraction of rows the classifier labels the same way as the targets.
    pub fn evaluate<C: Classifier + Sync>(&self, classifier: &C) -> f64 {
        self.rows()
            .zip(self.targets())
            .collect::<Vec<_>>()
            .into_par_iter()
            .filter(|(x, y)| classifier.predict(x) == *y)
            .count() as f64
            / self.rows_len() as f64
    }

    /// Reorders the active rows by ascending value in `column`.
    pub fn sort(&mut self, column: usize) {
        let column = &self.columns[column];
        self.index[self.range.start..self.range.end].sort_by_key(|&i| OrderedFloat(column[i]));
    }

    /// Candidate decision boundaries for `column`, which must already be
    /// sorted by that column. Each candidate is the row where the right
    /// half would begin, paired with the midpoint between the two distinct
    /// adjacent values it separates.
    pub fn split_candidates(&self, column: usize) -> Vec<(usize, f64)> {
        let mut candidates = Vec::new();
        let mut prev: Option<f64> = None;

        for (row, value) in self.column(column).enumerate() {
            if let Some(prev) = prev {
                if (value - prev).abs() > f64::EPSILON {
                    candidates.push((row, (prev + value) / 2.0));
                }
            }
            prev = Some(value);
        }

        candidates
    }

    /// Runs `f` first on the rows before `row`, then on the rest, narrowing
    /// the active range for each call.
    pub fn split<F, T>(&mut self, row: usize, mut f: F) -> (T, T)
    where
        F: FnMut(&mut Self) -> T,
    {
        let row = self.range.start + row;
        let original = self.range.clone();

        self.range.end = row;
        let left = f(self);
        self.range.end = original.end;

        self.range.start = row;
        let right = f(self);
        self.range.start = original.start;

        (left, right)
    }

    /// Samples `max_samples` active rows with replacement into a new view.
    pub fn bootstrap<R: Rng + ?Sized>(&self, rng: &mut R, max_samples: usize) -> Self {
        let samples = std::cmp::min(max_samples, self.rows_len());

        let range = 0..samples;
        let index = range
            .clone()
            .map(|_| self.index[rng.gen_range(self.range.start, self.range.end)])
            .collect::<Vec<_>>();

        Self {
            columns: self.columns,
            targets: self.targets,
            index,
            range,
        }
    }

    fn indices(&self) -> impl Iterator<Item = usize> + Clone + '_ {
        self.index[self.range.start..self.range.end].iter().copied()
    }

    pub fn targets(&self) -> impl Iterator<Item = f64> + '_ {
        self.indices().map(|i| self.targets[i])
    }

    pub fn column(&self, column: usize) -> impl Iterator<Item = f64> + '_ {
        let column = &self.columns[column];
        self.indices().map(move |i| column[i])
    }

    pub fn rows(&self) -> impl Iterator<Item = Vec<f64>> + '_ {
        self.indices()
            .map(move |i| self.columns.iter().map(|column| column[i]).collect())
    }

    pub fn features_len(&self) -> usize {
        self.columns.len()
    }

    pub fn rows_len(&self) -> usize {
        self.range.end - self.range.start
    }
}

/// Owns the column-major data that [`Dataset`] views borrow from.
#[derive(Debug, Default)]
pub struct Builder {
    columns: Vec<Vec<f64>>,
    targets: Vec<f64>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one labelled row. The first row fixes the feature count.
    pub fn add(&mut self, x: &[f64], y: f64) {
        if self.columns.is_empty() {
            self.columns = vec![Vec::new(); x.len()];
        }

        for (column, value) in self.columns.iter_mut().zip(x) {
            column.push(*value);
        }

        self.targets.push(y);
    }

    pub fn build(&self) -> Dataset<'_> {
        let range = 0..self.targets.len();

        Dataset {
            columns: &self.columns,
            targets: &self.targets,

            index: range.clone().collect(),
            range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_builder() -> Builder {
        let mut builder = Builder::new();
        builder.add(&[3.0, 2.0], 1.0);
        builder.add(&[2.0, 4.0], 2.0);
        builder.add(&[5.0, 1.0], 1.0);
        builder
    }

    #[test]
    fn builder_is_column_major() {
        let builder = sample_builder();
        let dataset = builder.build();

        assert_eq!(dataset.features_len(), 2);
        assert_eq!(dataset.rows_len(), 3);
        assert_eq!(dataset.column(0).collect::<Vec<_>>(), vec![3.0, 2.0, 5.0]);
        assert_eq!(dataset.column(1).collect::<Vec<_>>(), vec![2.0, 4.0, 1.0]);
        assert_eq!(dataset.targets().collect::<Vec<_>>(), vec![1.0, 2.0, 1.0]);
    }

    #[test]
    fn sort_orders_rows_without_moving_data() {
        let builder = sample_builder();
        let mut dataset = builder.build();

        dataset.sort(0);

        assert_eq!(dataset.column(0).collect::<Vec<_>>(), vec![2.0, 3.0, 5.0]);
        assert_eq!(dataset.targets().collect::<Vec<_>>(), vec![2.0, 1.0, 1.0]);
    }

    #[test]
    fn split_candidates_fall_between_distinct_values() {
        let builder = sample_builder();
        let mut dataset = builder.build();

        dataset.sort(0);
        let candidates = dataset.split_candidates(0);

        assert_eq!(candidates, vec![(1, 2.5), (2, 4.0)]);
    }

    #[test]
    fn split_narrows_and_restores_the_range() {
        let builder = sample_builder();
        let mut dataset = builder.build();

        dataset.sort(0);
        let (left, right) = dataset.split(1, |part| part.targets().collect::<Vec<_>>());

        assert_eq!(left, vec![2.0]);
        assert_eq!(right, vec![1.0, 1.0]);
        assert_eq!(dataset.rows_len(), 3);
    }

    #[test]
    fn bootstrap_samples_from_active_rows() {
        let builder = sample_builder();
        let dataset = builder.build();
        let mut rng: StdRng = SeedableRng::from_seed([7u8; 32]);

        let sample = dataset.bootstrap(&mut rng, 3);

        assert_eq!(sample.rows_len(), 3);
        for row in sample.rows() {
            assert!(dataset.rows().any(|original| original == row));
        }
    }
}
