/// Running scalar estimator (e.g. a mean of 0/1 hit indicators).
///
/// Implementations accept values incrementally via [`add`](Estimator::add)
/// and expose the current estimate via [`estimation`](Estimator::estimation).
pub trait Estimator {
    /// Incorporates a new observation.
    fn add(&mut self, v: f64);

    /// Returns the current estimate.
    fn estimation(&self) -> f64;
}
