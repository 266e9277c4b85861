//! Label summarization
//!
//! Leaves of a decision tree and the vote of a forest both collapse a column of raw labels into a
//! single string. A column in which every label parses as a number (or is missing) is treated as a
//! regression target and summarized by its mean; anything else is treated as categorical and
//! summarized by its most frequent value.
use std::collections::HashMap;

use crate::value::{format_number, is_number, to_number, MISSING};

/// Collapses a column of labels into one representative label
///
/// * A single label is returned verbatim, without trimming or parsing.
/// * If all labels are numeric the mean of the non-missing ones is returned, or `?` if every label
///   is missing.
/// * Otherwise the most frequent trimmed label is returned. Ties go to the value seen first.
///
/// ```rust
/// use sylva::summarize_labels;
///
/// assert_eq!(summarize_labels(&["3", "4", "5"]), "4.0");
/// assert_eq!(summarize_labels(&["a", "b", "a"]), "a");
/// assert_eq!(summarize_labels(&["?", "?", "5"]), "5.0");
/// ```
pub fn summarize_labels<S: AsRef<str>>(labels: &[S]) -> String {
    if let [single] = labels {
        return single.as_ref().to_string();
    }

    if labels.iter().all(|label| is_number(label.as_ref())) {
        mean_label(labels)
    } else {
        modal_label(labels)
    }
}

/// Mean of the non-missing numeric labels
fn mean_label<S: AsRef<str>>(labels: &[S]) -> String {
    let (sum, count) = labels
        .iter()
        .filter_map(|label| to_number(label.as_ref()).ok())
        .filter_map(|value| value.number())
        .fold((0.0, 0usize), |(sum, count), x| (sum + x, count + 1));

    if count > 0 {
        format_number(sum / count as f64)
    } else {
        MISSING.to_string()
    }
}

/// Finds the most frequent trimmed label. If two labels have the same count then the one seen
/// first is returned.
fn modal_label<S: AsRef<str>>(labels: &[S]) -> String {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen = Vec::new();

    for label in labels {
        let label = label.as_ref().trim();
        let count = counts.entry(label).or_insert_with(|| {
            first_seen.push(label);
            0
        });
        *count += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for label in first_seen {
        let count = counts[label];
        best = match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((label, count)),
        };
    }

    best.map(|(label, _)| label.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_label_is_verbatim() {
        assert_eq!(summarize_labels(&["abc"]), "abc");
        assert_eq!(summarize_labels(&[" 7 "]), " 7 ");
        assert_eq!(summarize_labels(&["?"]), "?");
    }

    #[test]
    fn numeric_labels_are_averaged() {
        assert_eq!(summarize_labels(&["3", "4", "5"]), "4.0");
        assert_eq!(summarize_labels(&["1", "2"]), "1.5");
        assert_eq!(summarize_labels(&[" 10", "20 ", "?", ""]), "15.0");
    }

    #[test]
    fn missing_labels_are_excluded() {
        assert_eq!(summarize_labels(&["?", "?", "5"]), "5.0");
        assert_eq!(summarize_labels(&["?", ""]), "?");
        assert_eq!(summarize_labels::<&str>(&[]), "?");
    }

    #[test]
    fn nan_labels_are_excluded() {
        assert_eq!(summarize_labels(&["1", "nan", "3"]), "2.0");
        assert_eq!(summarize_labels(&["NaN", "?"]), "?");
    }

    #[test]
    fn categorical_majority() {
        assert_eq!(summarize_labels(&["a", "b", "a"]), "a");
        assert_eq!(summarize_labels(&["b", " a", "a ", "b", "a"]), "a");
        // a single non-numeric label makes the whole column categorical
        assert_eq!(summarize_labels(&["1", "1", "x"]), "1");
    }

    #[test]
    fn ties_go_to_first_seen() {
        assert_eq!(summarize_labels(&["b", "a", "a", "b"]), "b");
        assert_eq!(summarize_labels(&["x", "y", "z"]), "x");
        assert_eq!(summarize_labels(&["?", "dog", "cat"]), "?");
    }
}
