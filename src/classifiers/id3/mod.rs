mod attribute_selection;
mod attribute_split_suggestion;
mod builder;
mod class_distribution;
mod gain_history;
mod id3_tree;
pub mod nodes;
mod predict;
pub mod split_criteria;

pub use attribute_selection::{compute_entropy, compute_information_gain, select_best_attribute};
pub use attribute_split_suggestion::AttributeSplitSuggestion;
pub use builder::{build, train};
pub use class_distribution::ClassDistribution;
pub use gain_history::GainHistory;
pub use id3_tree::Id3Tree;
pub use nodes::{Node, SplitNode};
pub use predict::{classify_batch, classify_one};
