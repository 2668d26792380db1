use crate::classifiers::id3::nodes::split_node::SplitNode;
use std::fmt::{Display, Formatter, Result};

/// A decision tree: either a leaf holding a class label or a split on one
/// attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Leaf(String),
    Split(SplitNode),
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Node::Leaf(label) => Some(label.as_str()),
            Node::Split(_) => None,
        }
    }

    /// Number of split nodes on the longest root-to-leaf path. A lone leaf
    /// has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf(_) => 0,
            Node::Split(split) => {
                1 + split
                    .children()
                    .map(|(_, child)| child.depth())
                    .max()
                    .unwrap_or(0)
            }
        }
    }

    pub fn number_of_leaves(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Split(split) => split.children().map(|(_, c)| c.number_of_leaves()).sum(),
        }
    }

    pub fn number_of_split_nodes(&self) -> usize {
        match self {
            Node::Leaf(_) => 0,
            Node::Split(split) => {
                1 + split
                    .children()
                    .map(|(_, c)| c.number_of_split_nodes())
                    .sum::<usize>()
            }
        }
    }

    /// Split attributes along every root-to-leaf path, in path order.
    pub fn paths(&self) -> Vec<Vec<&str>> {
        match self {
            Node::Leaf(_) => vec![vec![]],
            Node::Split(split) => {
                let attribute = split.attribute();
                split
                    .children()
                    .flat_map(move |(_, child)| {
                        child.paths().into_iter().map(move |mut path| {
                            path.insert(0, attribute);
                            path
                        })
                    })
                    .collect()
            }
        }
    }

    fn fmt_indented(&self, f: &mut Formatter<'_>, indent: usize) -> Result {
        match self {
            Node::Leaf(label) => writeln!(f, "{:indent$}-> {label}", ""),
            Node::Split(split) => {
                for (value, child) in split.children() {
                    match child {
                        Node::Leaf(label) => {
                            writeln!(f, "{:indent$}{} = {value} -> {label}", "", split.attribute())?
                        }
                        Node::Split(_) => {
                            writeln!(f, "{:indent$}{} = {value}", "", split.attribute())?;
                            child.fmt_indented(f, indent + 2)?;
                        }
                    }
                }
                Ok(())
            }
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        self.fmt_indented(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> Node {
        let mut humidity = SplitNode::new("humidity");
        humidity.set_child("high", Node::Leaf("no".into()));
        humidity.set_child("normal", Node::Leaf("yes".into()));

        let mut root = SplitNode::new("outlook");
        root.set_child("sunny", Node::Split(humidity));
        root.set_child("overcast", Node::Leaf("yes".into()));
        Node::Split(root)
    }

    #[test]
    fn shape_queries() {
        let tree = sample_tree();
        assert!(!tree.is_leaf());
        assert_eq!(tree.label(), None);
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.number_of_leaves(), 3);
        assert_eq!(tree.number_of_split_nodes(), 2);

        let leaf = Node::Leaf("yes".into());
        assert_eq!(leaf.depth(), 0);
        assert_eq!(leaf.label(), Some("yes"));
    }

    #[test]
    fn paths_list_split_attributes() {
        let tree = sample_tree();
        let paths = tree.paths();
        assert_eq!(
            paths,
            vec![vec!["outlook"], vec!["outlook", "humidity"], vec!["outlook", "humidity"]]
        );
    }

    #[test]
    fn display_renders_nested_branches() {
        let rendered = sample_tree().to_string();
        let expected = "\
outlook = overcast -> yes
outlook = sunny
  humidity = high -> no
  humidity = normal -> yes
";
        assert_eq!(rendered, expected);
        assert_eq!(Node::Leaf("yes".into()).to_string(), "-> yes\n");
    }
}
