//! Entropy, information gain and best-attribute selection over categorical
//! rows.
//!
//! Candidates are evaluated in the order given by the caller and the first
//! attribute reaching the maximal gain wins. Distinct attribute values are
//! visited in the order they first occur in the data.

use crate::classifiers::id3::attribute_split_suggestion::AttributeSplitSuggestion;
use crate::classifiers::id3::class_distribution::ClassDistribution;
use crate::classifiers::id3::gain_history::GainHistory;
use crate::classifiers::id3::split_criteria::{InfoGainSplitCriterion, SplitCriterion};
use crate::core::instances::Instance;
use crate::error::{Id3Error, Result};
use std::collections::HashMap;

/// Rows (and their labels) sharing one value of the split attribute.
pub(crate) struct Partition<'d, R: ?Sized> {
    pub value: &'d str,
    pub rows: Vec<&'d R>,
    pub labels: Vec<&'d str>,
}

pub(crate) fn partition<'d, R: Instance + ?Sized>(
    rows: &[&'d R],
    labels: &[&'d str],
    attribute: &str,
) -> Result<Vec<Partition<'d, R>>> {
    if rows.len() != labels.len() {
        return Err(Id3Error::LengthMismatch {
            left: rows.len(),
            right: labels.len(),
        });
    }

    let mut parts: Vec<Partition<'d, R>> = Vec::new();
    let mut index: HashMap<&'d str, usize> = HashMap::new();
    for (&row, &label) in rows.iter().zip(labels) {
        let value = row
            .value(attribute)
            .ok_or_else(|| Id3Error::MissingValue {
                attribute: attribute.to_string(),
            })?;
        let slot = *index.entry(value).or_insert_with(|| {
            parts.push(Partition {
                value,
                rows: Vec::new(),
                labels: Vec::new(),
            });
            parts.len() - 1
        });
        parts[slot].rows.push(row);
        parts[slot].labels.push(label);
    }
    Ok(parts)
}

pub(crate) fn information_gain_of<R: Instance + ?Sized>(
    rows: &[&R],
    labels: &[&str],
    attribute: &str,
) -> Result<f64> {
    if labels.is_empty() {
        return Err(Id3Error::EmptyLabels);
    }
    let pre = ClassDistribution::from_labels(labels.iter().copied());
    let post: Vec<Vec<f64>> = partition(rows, labels, attribute)?
        .iter()
        .map(|p| ClassDistribution::from_labels(p.labels.iter().copied()).counts().to_vec())
        .collect();
    Ok(InfoGainSplitCriterion::new().get_merit_of_split(pre.counts(), &post))
}

pub(crate) fn best_attribute<R: Instance + ?Sized, A: AsRef<str>>(
    rows: &[&R],
    candidates: &[A],
    labels: &[&str],
    gain_history: &mut GainHistory,
) -> Result<AttributeSplitSuggestion> {
    // nothing is recorded unless every candidate can be scored
    let gains = candidates
        .iter()
        .map(|c| information_gain_of(rows, labels, c.as_ref()).map(|g| (c.as_ref(), g)))
        .collect::<Result<Vec<_>>>()?;

    let mut best: Option<AttributeSplitSuggestion> = None;
    for (attribute, gain) in gains {
        gain_history.record(attribute, gain);

        let suggestion = AttributeSplitSuggestion::new(attribute, gain);
        if best.as_ref().is_none_or(|b| suggestion > *b) {
            best = Some(suggestion);
        }
    }
    best.ok_or(Id3Error::NoCandidateAttributes)
}

/// Entropy in bits of the label distribution.
///
/// Fails with [`Id3Error::EmptyLabels`] on an empty sequence.
pub fn compute_entropy<S: AsRef<str>>(labels: &[S]) -> Result<f64> {
    if labels.is_empty() {
        return Err(Id3Error::EmptyLabels);
    }
    let dist = ClassDistribution::from_labels(labels.iter().map(AsRef::as_ref));
    Ok(InfoGainSplitCriterion::compute_entropy(dist.counts()))
}

/// Expected reduction in label entropy from splitting `data` on `attribute`.
/// Never negative.
pub fn compute_information_gain<R: Instance, S: AsRef<str>>(
    data: &[R],
    labels: &[S],
    attribute: &str,
) -> Result<f64> {
    let rows: Vec<&R> = data.iter().collect();
    let labels: Vec<&str> = labels.iter().map(AsRef::as_ref).collect();
    information_gain_of(&rows, &labels, attribute)
}

/// Evaluates every candidate, records each gain in `gain_history` and returns
/// the first candidate with the highest gain.
pub fn select_best_attribute<R: Instance, A: AsRef<str>, S: AsRef<str>>(
    data: &[R],
    candidate_attributes: &[A],
    labels: &[S],
    gain_history: &mut GainHistory,
) -> Result<AttributeSplitSuggestion> {
    if candidate_attributes.is_empty() {
        return Err(Id3Error::NoCandidateAttributes);
    }
    let rows: Vec<&R> = data.iter().collect();
    let labels: Vec<&str> = labels.iter().map(AsRef::as_ref).collect();
    best_attribute(&rows, candidate_attributes, &labels, gain_history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::{map_row, toy_rows, weather_dataset};

    const EPS: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn entropy_of_single_class_is_zero() {
        assert_eq!(compute_entropy(&["yes", "yes", "yes"]).unwrap(), 0.0);
    }

    #[test]
    fn entropy_of_even_binary_split_is_one() {
        let e = compute_entropy(&["pos", "neg", "neg", "pos"]).unwrap();
        assert!(approx_eq(e, 1.0, EPS));
    }

    #[test]
    fn entropy_of_weather_labels() {
        let ds = weather_dataset();
        let e = compute_entropy(&ds.labels()).unwrap();
        assert!(approx_eq(e, 0.940_285_958_670_631, EPS));
    }

    #[test]
    fn entropy_rejects_empty_labels() {
        let empty: [&str; 0] = [];
        assert!(matches!(compute_entropy(&empty), Err(Id3Error::EmptyLabels)));
    }

    #[test]
    fn toy_gain_matches_total_entropy_for_determining_attribute() {
        let (rows, labels) = toy_rows();
        let gain_a = compute_information_gain(&rows, &labels, "A").unwrap();
        let gain_b = compute_information_gain(&rows, &labels, "B").unwrap();
        assert!(approx_eq(gain_a, compute_entropy(&labels).unwrap(), EPS));
        assert!(approx_eq(gain_b, 0.0, EPS));
    }

    #[test]
    fn weather_gains_match_textbook_values() {
        let ds = weather_dataset();
        let labels = ds.labels();
        let rows = ds.instances();
        let outlook = compute_information_gain(rows, &labels, "outlook").unwrap();
        let humidity = compute_information_gain(rows, &labels, "humidity").unwrap();
        let windy = compute_information_gain(rows, &labels, "windy").unwrap();
        let temperature = compute_information_gain(rows, &labels, "temperature").unwrap();
        assert!(approx_eq(outlook, 0.246_749_819_774_439, 1e-9));
        assert!(approx_eq(humidity, 0.151_835_501_362_341, 1e-9));
        assert!(approx_eq(windy, 0.048_127_030_408_27, 1e-9));
        assert!(approx_eq(temperature, 0.029_222_565_658_954, 1e-9));
    }

    #[test]
    fn gain_is_never_negative() {
        let ds = weather_dataset();
        let labels = ds.labels();
        for attribute in ds.feature_names() {
            for n in 1..=ds.len() {
                let g = compute_information_gain(&ds.instances()[..n], &labels[..n], attribute)
                    .unwrap();
                assert!(g >= 0.0, "{attribute} on {n} rows gave {g}");
            }
        }
    }

    #[test]
    fn gain_reports_missing_value_and_length_mismatch() {
        let rows = vec![map_row(&[("A", "x")]), map_row(&[("B", "0")])];
        let err = compute_information_gain(&rows, &["pos", "neg"], "A").unwrap_err();
        assert!(matches!(err, Id3Error::MissingValue { ref attribute } if attribute == "A"));

        let err = compute_information_gain(&rows, &["pos"], "A").unwrap_err();
        assert!(matches!(err, Id3Error::LengthMismatch { left: 2, right: 1 }));
    }

    #[test]
    fn select_best_records_every_candidate() {
        let (rows, labels) = toy_rows();
        let mut history = GainHistory::new();
        let best = select_best_attribute(&rows, &["B", "A"], &labels, &mut history).unwrap();
        assert_eq!(best.attribute(), "A");
        assert!(approx_eq(best.merit(), 1.0, EPS));
        assert_eq!(history.gains("A").map(<[f64]>::len), Some(1));
        assert_eq!(history.gains("B").map(<[f64]>::len), Some(1));

        select_best_attribute(&rows, &["A"], &labels, &mut history).unwrap();
        assert_eq!(history.gains("A").map(<[f64]>::len), Some(2));
    }

    #[test]
    fn select_best_breaks_ties_by_candidate_order() {
        let rows = vec![
            map_row(&[("P", "1"), ("Q", "1")]),
            map_row(&[("P", "2"), ("Q", "2")]),
        ];
        let labels = ["a", "b"];
        let mut history = GainHistory::new();
        let best = select_best_attribute(&rows, &["Q", "P"], &labels, &mut history).unwrap();
        assert_eq!(best.attribute(), "Q");
        let best = select_best_attribute(&rows, &["P", "Q"], &labels, &mut history).unwrap();
        assert_eq!(best.attribute(), "P");
    }

    #[test]
    fn select_best_rejects_empty_candidates() {
        let (rows, labels) = toy_rows();
        let none: [&str; 0] = [];
        let mut history = GainHistory::new();
        let err = select_best_attribute(&rows, &none, &labels, &mut history).unwrap_err();
        assert!(matches!(err, Id3Error::NoCandidateAttributes));
        assert!(history.is_empty());
    }

    #[test]
    fn failed_selection_leaves_history_untouched() {
        let rows = vec![
            map_row(&[("A", "x"), ("B", "0")]),
            map_row(&[("A", "y")]),
        ];
        let mut history = GainHistory::new();
        history.record("A", 0.5);

        let err = select_best_attribute(&rows, &["A", "B"], &["pos", "neg"], &mut history)
            .unwrap_err();
        assert!(matches!(err, Id3Error::MissingValue { ref attribute } if attribute == "B"));
        assert_eq!(history.gains("A"), Some(&[0.5][..]));
        assert_eq!(history.gains("B"), None);
        assert_eq!(history.total_evaluations(), 1);
    }

    #[test]
    fn partition_keeps_first_seen_value_order() {
        let (rows, labels) = toy_rows();
        let rows: Vec<_> = rows.iter().collect();
        let parts = partition(&rows, &labels, "B").unwrap();
        let values: Vec<_> = parts.iter().map(|p| p.value).collect();
        assert_eq!(values, vec!["0", "1"]);
        assert_eq!(parts[0].labels, vec!["pos", "neg"]);
    }
}
