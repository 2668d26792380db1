use std::cmp::Ordering;

/// The attribute chosen to split a partition and the information gain it
/// achieved.
#[derive(Debug, Clone)]
pub struct AttributeSplitSuggestion {
    attribute: String,
    merit: f64,
}

impl AttributeSplitSuggestion {
    pub fn new(attribute: impl Into<String>, merit: f64) -> Self {
        Self {
            attribute: attribute.into(),
            merit,
        }
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    pub fn merit(&self) -> f64 {
        self.merit
    }
}

impl PartialEq for AttributeSplitSuggestion {
    fn eq(&self, other: &Self) -> bool {
        self.merit == other.merit
    }
}

impl PartialOrd for AttributeSplitSuggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.merit.partial_cmp(&other.merit)
    }
}
