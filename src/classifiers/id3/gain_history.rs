use std::collections::BTreeMap;

/// Every information gain computed for each attribute during training, in
/// evaluation order. Filled by the builder, read afterwards for importance
/// reporting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GainHistory {
    gains: BTreeMap<String, Vec<f64>>,
}

impl GainHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, attribute: &str, gain: f64) {
        match self.gains.get_mut(attribute) {
            Some(history) => history.push(gain),
            None => {
                self.gains.insert(attribute.to_string(), vec![gain]);
            }
        }
    }

    pub fn gains(&self, attribute: &str) -> Option<&[f64]> {
        self.gains.get(attribute).map(Vec::as_slice)
    }

    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.gains.keys().map(String::as_str)
    }

    /// Number of attributes with at least one recorded gain.
    pub fn len(&self) -> usize {
        self.gains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gains.is_empty()
    }

    pub fn total_evaluations(&self) -> usize {
        self.gains.values().map(Vec::len).sum()
    }

    /// Appends another history, e.g. one collected by a separate subtree build.
    pub fn merge(&mut self, other: GainHistory) {
        for (attribute, mut gains) in other.gains {
            self.gains.entry(attribute).or_default().append(&mut gains);
        }
    }

    /// Mean gain per attribute, highest first. Ties are ordered by name.
    pub fn mean_gains(&self) -> Vec<(String, f64)> {
        let mut means: Vec<(String, f64)> = self
            .gains
            .iter()
            .filter(|(_, gains)| !gains.is_empty())
            .map(|(name, gains)| (name.clone(), gains.iter().sum::<f64>() / gains.len() as f64))
            .collect();
        means.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        means
    }
}
