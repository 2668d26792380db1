use crate::classifiers::id3::nodes::node::Node;
use std::collections::BTreeMap;

/// Internal node: tests one attribute and owns one child per value of that
/// attribute observed in the training partition that reached it.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitNode {
    attribute: String,
    children: BTreeMap<String, Node>,
}

impl SplitNode {
    pub fn new(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            children: BTreeMap::new(),
        }
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    pub fn set_child(&mut self, value: impl Into<String>, child: Node) {
        self.children.insert(value.into(), child);
    }

    pub fn get_child(&self, value: &str) -> Option<&Node> {
        self.children.get(value)
    }

    pub fn children(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.children.iter().map(|(v, n)| (v.as_str(), n))
    }

    pub fn number_of_branches(&self) -> usize {
        self.children.len()
    }
}
