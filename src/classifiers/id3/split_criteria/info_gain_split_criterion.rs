use crate::classifiers::id3::split_criteria::split_criterion::SplitCriterion;

/// Information gain: entropy of the parent distribution minus the
/// size-weighted entropy of the child distributions.
#[derive(Debug, Default, Clone, Copy)]
pub struct InfoGainSplitCriterion;

impl InfoGainSplitCriterion {
    pub fn new() -> Self {
        Self
    }

    /// Entropy in bits of a distribution of counts. Zero-probability entries
    /// contribute nothing.
    pub fn compute_entropy(distribution: &[f64]) -> f64 {
        let total: f64 = distribution.iter().sum();
        if total <= 0.0 {
            return 0.0;
        }
        let mut entropy = 0.0;
        for &count in distribution {
            let p = count / total;
            if p > 0.0 {
                entropy -= p * p.log2();
            }
        }
        entropy
    }

    pub fn compute_weighted_entropy(dists: &[Vec<f64>]) -> f64 {
        let weights: Vec<f64> = dists.iter().map(|d| d.iter().sum()).collect();
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return 0.0;
        }
        dists
            .iter()
            .zip(&weights)
            .map(|(dist, w)| (w / total) * Self::compute_entropy(dist))
            .sum()
    }
}

impl SplitCriterion for InfoGainSplitCriterion {
    fn get_merit_of_split(
        &self,
        pre_split_distribution: &[f64],
        post_split_dists: &[Vec<f64>],
    ) -> f64 {
        let gain = Self::compute_entropy(pre_split_distribution)
            - Self::compute_weighted_entropy(post_split_dists);
        // float residue on uninformative splits
        gain.max(0.0)
    }
}
