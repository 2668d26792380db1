use crate::evaluation::{Estimator, Measurement, PerformanceEvaluator};
use std::collections::BTreeMap;

/// Batch classifier evaluator.
///
/// Tracks:
/// - overall accuracy, unrouted (`None`) predictions counted as misses;
/// - the share of unrouted predictions (`unknown_rate`);
/// - optionally, recall per true class (`recall_<class>`).
pub struct BasicClassificationEvaluator<E: Estimator + Default> {
    correct: E,
    unknown: E,
    recall: BTreeMap<String, E>,
    instances: usize,
    show_recall_per_class: bool,
}

impl<E: Estimator + Default> BasicClassificationEvaluator<E> {
    pub fn new(show_recall_per_class: bool) -> Self {
        Self {
            correct: E::default(),
            unknown: E::default(),
            recall: BTreeMap::new(),
            instances: 0,
            show_recall_per_class,
        }
    }

    pub fn new_with_default_flags() -> Self {
        Self::new(false)
    }

    pub fn instances(&self) -> usize {
        self.instances
    }
}

impl<E: Estimator + Default> PerformanceEvaluator for BasicClassificationEvaluator<E> {
    fn reset(&mut self) {
        *self = Self::new(self.show_recall_per_class)
    }

    fn add_result(&mut self, predicted: Option<&str>, actual: &str) {
        let hit = if predicted == Some(actual) { 1.0 } else { 0.0 };
        self.instances += 1;
        self.correct.add(hit);
        self.unknown.add(if predicted.is_none() { 1.0 } else { 0.0 });
        self.recall.entry(actual.to_string()).or_default().add(hit);
    }

    fn performance(&self) -> Vec<Measurement> {
        let mut m = vec![
            Measurement::new("accuracy", self.correct.estimation()),
            Measurement::new("unknown_rate", self.unknown.estimation()),
            Measurement::new("instances", self.instances as f64),
        ];
        if self.show_recall_per_class {
            for (class, est) in &self.recall {
                m.push(Measurement::new(format!("recall_{class}"), est.estimation()));
            }
        }
        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::{BasicEstimator, PerformanceEvaluatorExt};

    #[test]
    fn empty_evaluator_reports_nan_accuracy() {
        let e = BasicClassificationEvaluator::<BasicEstimator>::new_with_default_flags();
        assert!(e.metric("accuracy").unwrap().is_nan());
        assert_eq!(e.metric("instances"), Some(0.0));
        assert_eq!(e.metric("recall_pos"), None);
    }

    #[test]
    fn unknown_counts_as_miss() {
        let mut e = BasicClassificationEvaluator::<BasicEstimator>::new_with_default_flags();
        e.add_result(Some("pos"), "pos");
        e.add_result(None, "pos");
        e.add_result(Some("neg"), "neg");
        e.add_result(Some("pos"), "neg");

        assert_eq!(e.metric("accuracy"), Some(0.5));
        assert_eq!(e.metric("unknown_rate"), Some(0.25));
        assert_eq!(e.instances(), 4);
    }

    #[test]
    fn recall_per_class_when_enabled() {
        let mut e = BasicClassificationEvaluator::<BasicEstimator>::new(true);
        e.add_result(Some("pos"), "pos");
        e.add_result(Some("neg"), "pos");
        e.add_result(Some("neg"), "neg");

        let got = e.metrics(["recall_neg", "recall_pos"]);
        assert_eq!(got[0], ("recall_neg".to_string(), Some(1.0)));
        assert_eq!(got[1], ("recall_pos".to_string(), Some(0.5)));
    }

    #[test]
    fn reset_clears_but_keeps_flags() {
        let mut e = BasicClassificationEvaluator::<BasicEstimator>::new(true);
        e.add_result(Some("a"), "a");
        e.reset();
        assert_eq!(e.instances(), 0);
        e.add_result(Some("b"), "b");
        assert_eq!(e.metric("recall_b"), Some(1.0));
        assert_eq!(e.metric("recall_a"), None);
    }
}
