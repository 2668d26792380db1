mod accuracy;
mod confusion_matrix;
mod estimators;
mod evaluators;
mod measurement;
pub mod preview;

pub use accuracy::{accuracy, performance};
pub use confusion_matrix::ConfusionMatrix;
pub use estimators::{BasicEstimator, Estimator};
pub use evaluators::{BasicClassificationEvaluator, PerformanceEvaluator, PerformanceEvaluatorExt};
pub use measurement::Measurement;
