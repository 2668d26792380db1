use crate::classifiers::id3::nodes::Node;
use crate::core::instances::Instance;

/// Walks `tree` for one sample. Returns `None` when the sample carries a value
/// (or no value) for a split attribute that has no branch at that node.
pub fn classify_one<'t, R: Instance + ?Sized>(tree: &'t Node, sample: &R) -> Option<&'t str> {
    let mut node = tree;
    loop {
        match node {
            Node::Leaf(label) => return Some(label.as_str()),
            Node::Split(split) => {
                let value = sample.value(split.attribute())?;
                node = split.get_child(value)?;
            }
        }
    }
}

/// Classifies every row, preserving input order.
pub fn classify_batch<'t, R: Instance>(tree: &'t Node, rows: &[R]) -> Vec<Option<&'t str>> {
    rows.iter().map(|row| classify_one(tree, row)).collect()
}
