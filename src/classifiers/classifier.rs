use crate::classifiers::id3::GainHistory;
use crate::core::Dataset;
use crate::core::instances::Instance;
use crate::error::Result;

pub trait Classifier {
    /// Fits the model to `dataset` and returns its accuracy on that same data.
    fn train_on_dataset(
        &mut self,
        dataset: &Dataset,
        gain_history: &mut GainHistory,
    ) -> Result<f64>;

    /// Predicted class, or `None` when the instance cannot be routed.
    fn predict(&self, instance: &dyn Instance) -> Option<&str>;
}
