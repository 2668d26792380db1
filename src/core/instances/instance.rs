use std::collections::{BTreeMap, HashMap};

/// Read access to one row: the categorical value stored under an attribute
/// name, or `None` when the row has no such attribute.
pub trait Instance {
    fn value(&self, attribute: &str) -> Option<&str>;
}

impl Instance for HashMap<String, String> {
    fn value(&self, attribute: &str) -> Option<&str> {
        self.get(attribute).map(String::as_str)
    }
}

impl Instance for BTreeMap<String, String> {
    fn value(&self, attribute: &str) -> Option<&str> {
        self.get(attribute).map(String::as_str)
    }
}

impl<T: Instance + ?Sized> Instance for &T {
    fn value(&self, attribute: &str) -> Option<&str> {
        (**self).value(attribute)
    }
}
