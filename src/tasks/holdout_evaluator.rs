use crate::classifiers::{Classifier, Id3Tree};
use crate::classifiers::id3::GainHistory;
use crate::config::{ConfigError, HoldoutParams};
use crate::core::Dataset;
use crate::evaluation::preview::GainReport;
use crate::evaluation::{ConfusionMatrix, Measurement, accuracy, performance};
use anyhow::{Context, Result};
use std::fmt;

/// Outcome of one train/test experiment.
#[derive(Debug, Clone)]
pub struct HoldoutReport {
    pub train_size: usize,
    pub test_size: usize,
    pub train_accuracy: f64,
    pub test_accuracy: f64,
    pub unknown_predictions: usize,
    pub measurements: Vec<Measurement>,
    /// Rows per class over the whole dataset, most frequent first.
    pub class_counts: Vec<(String, usize)>,
    pub confusion: ConfusionMatrix,
    pub gain_history: GainHistory,
}

impl HoldoutReport {
    pub fn gain_report(&self) -> GainReport {
        GainReport::from_history(&self.gain_history)
    }
}

impl fmt::Display for HoldoutReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "train rows:          {}", self.train_size)?;
        writeln!(f, "test rows:           {}", self.test_size)?;
        writeln!(f, "train accuracy:      {:.4}", self.train_accuracy)?;
        writeln!(f, "test accuracy:       {:.4}", self.test_accuracy)?;
        writeln!(f, "unknown predictions: {}", self.unknown_predictions)?;
        writeln!(f, "class distribution:")?;
        for (class, n) in &self.class_counts {
            writeln!(f, "  {class:<24} {n}")?;
        }
        writeln!(f, "confusion matrix (test split):")?;
        write!(f, "{}", self.confusion)?;
        writeln!(f, "attribute importance (mean gain):")?;
        for entry in self.gain_report().entries() {
            writeln!(
                f,
                "  {:<24} {:.6} ({} evaluations)",
                entry.attribute, entry.mean_gain, entry.evaluations
            )?;
        }
        Ok(())
    }
}

/// Shuffle, split, fit on the training part and score the held-out part.
pub struct HoldoutEvaluator {
    learner: Box<dyn Classifier>,
    dataset: Dataset,
    params: HoldoutParams,
}

impl HoldoutEvaluator {
    pub fn new(dataset: Dataset, params: HoldoutParams) -> Result<Self, ConfigError> {
        params.validate()?;
        let learner: Box<dyn Classifier> = Box::new(Id3Tree::from(params.tree_params()));
        Ok(Self {
            learner,
            dataset,
            params,
        })
    }

    pub fn with_learner(mut self, learner: Box<dyn Classifier>) -> Self {
        self.learner = learner;
        self
    }

    pub fn params(&self) -> &HoldoutParams {
        &self.params
    }

    pub fn run(&mut self) -> Result<HoldoutReport> {
        let (train, test) = self
            .dataset
            .train_test_split(self.params.train_fraction, self.params.seed)
            .context("splitting dataset")?;

        let mut gain_history = GainHistory::new();
        let train_accuracy = self
            .learner
            .train_on_dataset(&train, &mut gain_history)
            .context("training on the train split")?;

        let predictions: Vec<Option<&str>> = test
            .instances()
            .iter()
            .map(|instance| self.learner.predict(instance))
            .collect();
        let actual = test.labels();
        let test_accuracy = accuracy(&predictions, &actual)?;
        let measurements = performance(&predictions, &actual)?;
        let confusion = ConfusionMatrix::from_predictions(&predictions, &actual)?;
        let unknown_predictions = predictions.iter().filter(|p| p.is_none()).count();

        log::info!(
            "hold-out: train={} test={} train_acc={:.4} test_acc={:.4} unknown={}",
            train.len(),
            test.len(),
            train_accuracy,
            test_accuracy,
            unknown_predictions
        );

        let class_counts = self
            .dataset
            .class_counts()
            .into_iter()
            .map(|(class, n)| (class.to_string(), n))
            .collect();

        Ok(HoldoutReport {
            train_size: train.len(),
            test_size: test.len(),
            train_accuracy,
            test_accuracy,
            unknown_predictions,
            measurements,
            class_counts,
            confusion,
            gain_history,
        })
    }
}
