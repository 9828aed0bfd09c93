use std::collections::BTreeMap;

use ordered_float::OrderedFloat;

/// Counts occurrences of each label, returning the histogram and the total
/// number of values seen.
///
/// Keys are ordered so that consumers iterating the histogram see labels in
/// a stable order regardless of insertion sequence.
pub fn histogram(
    values: impl Iterator<Item = f64>,
) -> (BTreeMap<OrderedFloat<f64>, usize>, usize) {
    let mut counts = BTreeMap::new();
    let mut len = 0;

    for value in values {
        *counts.entry(OrderedFloat(value)).or_default() += 1;
        len += 1;
    }

    (counts, len)
}

/// Gini impurity of a label sequence. 0.0 for a pure set.
pub fn gini(values: impl Iterator<Item = f64>) -> f64 {
    let (counts, len) = histogram(values);

    1.0 - counts
        .values()
        .map(|&n| (n as f64 / len as f64).powi(2))
        .sum::<f64>()
}

/// Majority label of a non-empty sequence.
///
/// Ties resolve to the largest tied label; the outcome is a pure function
/// of the label counts.
pub fn most_frequent(values: impl Iterator<Item = f64>) -> f64 {
    let (counts, _) = histogram(values);

    counts
        .into_iter()
        .max_by_key(|&(_, n)| n)
        .map(|(label, _)| label.into_inner())
        .unwrap()
}
