use crate::error::{Id3Error, Result};
use crate::evaluation::{
    BasicClassificationEvaluator, BasicEstimator, Estimator, Measurement, PerformanceEvaluator,
};

pub(crate) fn check_lengths(predictions: usize, actual: usize) -> Result<()> {
    if predictions != actual {
        return Err(Id3Error::LengthMismatch {
            left: predictions,
            right: actual,
        });
    }
    Ok(())
}

/// Fraction of positions where the prediction equals the actual label.
/// Unknown (`None`) predictions never match. NaN for empty input.
pub fn accuracy<P: AsRef<str>, S: AsRef<str>>(
    predictions: &[Option<P>],
    actual: &[S],
) -> Result<f64> {
    check_lengths(predictions.len(), actual.len())?;
    let mut est = BasicEstimator::default();
    for (predicted, truth) in predictions.iter().zip(actual) {
        let hit = predicted
            .as_ref()
            .is_some_and(|p| p.as_ref() == truth.as_ref());
        est.add(if hit { 1.0 } else { 0.0 });
    }
    Ok(est.estimation())
}

/// Accuracy, unknown rate and instance count for a batch of predictions.
pub fn performance<P: AsRef<str>, S: AsRef<str>>(
    predictions: &[Option<P>],
    actual: &[S],
) -> Result<Vec<Measurement>> {
    check_lengths(predictions.len(), actual.len())?;
    let mut evaluator = BasicClassificationEvaluator::<BasicEstimator>::new_with_default_flags();
    for (predicted, truth) in predictions.iter().zip(actual) {
        evaluator.add_result(predicted.as_ref().map(AsRef::as_ref), truth.as_ref());
    }
    Ok(evaluator.performance())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_of_three() {
        let predictions = [Some("pos"), Some("neg"), Some("pos")];
        let acc = accuracy(&predictions, &["pos", "pos", "pos"]).unwrap();
        assert!((acc - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn unknown_never_matches() {
        let acc = accuracy(&[None, Some("b")], &["a", "b"]).unwrap();
        assert_eq!(acc, 0.5);
    }

    #[test]
    fn owned_strings_work() {
        let predictions = vec![Some("a".to_string()), None];
        let actual = vec!["a".to_string(), "a".to_string()];
        assert_eq!(accuracy(&predictions, &actual).unwrap(), 0.5);
    }

    #[test]
    fn length_mismatch_is_an_error() {
        let err = accuracy(&[Some("a")], &["a", "b"]).unwrap_err();
        assert!(matches!(err, Id3Error::LengthMismatch { left: 1, right: 2 }));
        assert!(performance(&[Some("a")], &["a", "b"]).is_err());
    }

    #[test]
    fn empty_input_is_nan() {
        let p: [Option<&str>; 0] = [];
        let a: [&str; 0] = [];
        assert!(accuracy(&p, &a).unwrap().is_nan());
    }

    #[test]
    fn performance_lists_measurements() {
        let predictions = [Some("a"), None, Some("c"), Some("b")];
        let m = performance(&predictions, &["a", "b", "c", "c"]).unwrap();
        assert_eq!(
            m,
            vec![
                Measurement::new("accuracy", 0.5),
                Measurement::new("unknown_rate", 0.25),
                Measurement::new("instances", 4.0),
            ]
        );
    }
}
