use std::collections::HashMap;

/// A categorical column together with the values observed for it, in
/// first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct NominalAttribute {
    pub name: String,
    pub values: Vec<String>,
    pub label_to_index: HashMap<String, usize>,
}

impl NominalAttribute {
    pub fn new(name: String) -> NominalAttribute {
        NominalAttribute {
            name,
            values: Vec::new(),
            label_to_index: HashMap::new(),
        }
    }

    pub fn with_values(name: String, values: Vec<String>) -> NominalAttribute {
        let mut attribute = NominalAttribute::new(name);
        for value in values {
            attribute.add_value(&value);
        }
        attribute
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers `value` in the domain and returns its index.
    pub fn add_value(&mut self, value: &str) -> usize {
        if let Some(&index) = self.label_to_index.get(value) {
            return index;
        }
        let index = self.values.len();
        self.values.push(value.to_string());
        self.label_to_index.insert(value.to_string(), index);
        index
    }

    pub fn index_of_value(&self, value: &str) -> Option<usize> {
        self.label_to_index.get(value).copied()
    }

    pub fn number_of_values(&self) -> usize {
        self.values.len()
    }

    pub fn enumerate_values(&self) -> impl Iterator<Item = (usize, &String)> {
        self.values.iter().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_value_keeps_first_seen_order_and_dedups() {
        let mut attr = NominalAttribute::new("vote".into());
        assert_eq!(attr.add_value("y"), 0);
        assert_eq!(attr.add_value("n"), 1);
        assert_eq!(attr.add_value("y"), 0);
        assert_eq!(attr.add_value("?"), 2);

        assert_eq!(attr.values, vec!["y", "n", "?"]);
        assert_eq!(attr.number_of_values(), 3);
        assert_eq!(attr.index_of_value("n"), Some(1));
        assert_eq!(attr.index_of_value("maybe"), None);
    }

    #[test]
    fn with_values_builds_lookup() {
        let attr = NominalAttribute::with_values(
            "outlook".into(),
            vec!["sunny".into(), "rain".into(), "sunny".into()],
        );
        let collected: Vec<_> = attr.enumerate_values().map(|(i, v)| (i, v.as_str())).collect();
        assert_eq!(collected, vec![(0, "sunny"), (1, "rain")]);
        assert_eq!(attr.name(), "outlook");
    }
}
