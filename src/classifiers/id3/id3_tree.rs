use crate::classifiers::Classifier;
use crate::classifiers::id3::builder::train;
use crate::classifiers::id3::gain_history::GainHistory;
use crate::classifiers::id3::nodes::Node;
use crate::classifiers::id3::predict::{classify_batch, classify_one};
use crate::core::Dataset;
use crate::core::instances::Instance;
use crate::error::Result;

/// ID3 model: a depth limit and, once trained, the induced tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Id3Tree {
    max_depth: usize,
    root: Option<Node>,
}

impl Id3Tree {
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            root: None,
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    pub fn is_trained(&self) -> bool {
        self.root.is_some()
    }

    /// Trains on arbitrary rows. `attributes` fixes the candidate order used to
    /// break gain ties. Replaces any previous tree.
    pub fn train_on<R: Instance, S: AsRef<str>, A: AsRef<str>>(
        &mut self,
        rows: &[R],
        labels: &[S],
        attributes: &[A],
        gain_history: &mut GainHistory,
    ) -> Result<f64> {
        let (tree, train_accuracy) = train(rows, labels, attributes, self.max_depth, gain_history)?;
        self.root = Some(tree);
        Ok(train_accuracy)
    }

    pub fn classify<R: Instance + ?Sized>(&self, sample: &R) -> Option<&str> {
        classify_one(self.root.as_ref()?, sample)
    }

    pub fn classify_batch<R: Instance>(&self, rows: &[R]) -> Vec<Option<&str>> {
        match &self.root {
            Some(root) => classify_batch(root, rows),
            None => vec![None; rows.len()],
        }
    }
}

impl Classifier for Id3Tree {
    fn train_on_dataset(
        &mut self,
        dataset: &Dataset,
        gain_history: &mut GainHistory,
    ) -> Result<f64> {
        self.train_on(
            dataset.instances(),
            &dataset.labels(),
            &dataset.feature_names(),
            gain_history,
        )
    }

    fn predict(&self, instance: &dyn Instance) -> Option<&str> {
        self.classify(instance)
    }
}
