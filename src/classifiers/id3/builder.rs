use crate::classifiers::id3::attribute_selection::{best_attribute, partition};
use crate::classifiers::id3::class_distribution::ClassDistribution;
use crate::classifiers::id3::gain_history::GainHistory;
use crate::classifiers::id3::nodes::{Node, SplitNode};
use crate::classifiers::id3::predict::classify_batch;
use crate::core::instances::Instance;
use crate::error::{Id3Error, Result};
use crate::evaluation::accuracy;

/// Grows a tree over `data`/`labels` starting at `depth`.
///
/// Stops with a leaf when the labels are pure, or with the majority label
/// when no candidate is left or `depth >= max_depth`. Otherwise splits on the
/// best candidate (first wins on ties), which is not offered again below.
pub fn build<R: Instance, A: AsRef<str>, S: AsRef<str>>(
    data: &[R],
    candidate_attributes: &[A],
    labels: &[S],
    depth: usize,
    max_depth: usize,
    gain_history: &mut GainHistory,
) -> Result<Node> {
    if data.len() != labels.len() {
        return Err(Id3Error::LengthMismatch {
            left: data.len(),
            right: labels.len(),
        });
    }
    let rows: Vec<&R> = data.iter().collect();
    let labels: Vec<&str> = labels.iter().map(AsRef::as_ref).collect();
    let candidates: Vec<&str> = candidate_attributes.iter().map(AsRef::as_ref).collect();
    build_node(&rows, &candidates, &labels, depth, max_depth, gain_history)
}

fn build_node<R: Instance + ?Sized>(
    rows: &[&R],
    candidates: &[&str],
    labels: &[&str],
    depth: usize,
    max_depth: usize,
    gain_history: &mut GainHistory,
) -> Result<Node> {
    let dist = ClassDistribution::from_labels(labels.iter().copied());
    let Some(majority) = dist.majority_class() else {
        return Err(Id3Error::EmptyLabels);
    };

    if dist.is_pure() {
        return Ok(Node::Leaf(majority.to_string()));
    }

    if candidates.is_empty() || depth >= max_depth {
        log::debug!(
            "leaf '{majority}' at depth {depth} ({} rows, {} candidates left)",
            rows.len(),
            candidates.len()
        );
        return Ok(Node::Leaf(majority.to_string()));
    }

    let best = best_attribute(rows, candidates, labels, gain_history)?;
    log::debug!(
        "split on '{}' at depth {depth}: gain {:.6} over {} rows",
        best.attribute(),
        best.merit(),
        rows.len()
    );

    let remaining: Vec<&str> = candidates
        .iter()
        .copied()
        .filter(|c| *c != best.attribute())
        .collect();

    let mut split = SplitNode::new(best.attribute());
    for part in partition(rows, labels, best.attribute())? {
        let child = if part.rows.is_empty() {
            Node::Leaf(majority.to_string())
        } else {
            build_node(
                &part.rows,
                &remaining,
                &part.labels,
                depth + 1,
                max_depth,
                gain_history,
            )?
        };
        split.set_child(part.value, child);
    }
    Ok(Node::Split(split))
}

/// Builds a tree from depth 0 and returns it together with its accuracy on
/// the training rows.
pub fn train<R: Instance, S: AsRef<str>, A: AsRef<str>>(
    rows: &[R],
    labels: &[S],
    attributes: &[A],
    max_depth: usize,
    gain_history: &mut GainHistory,
) -> Result<(Node, f64)> {
    let tree = build(rows, attributes, labels, 0, max_depth, gain_history)?;
    let predictions = classify_batch(&tree, rows);
    let train_accuracy = accuracy(&predictions, labels)?;

    log::info!(
        "trained tree on {} rows, {} attributes, max depth {max_depth}: {} leaves, depth {}, train accuracy {train_accuracy:.4}",
        rows.len(),
        attributes.len(),
        tree.number_of_leaves(),
        tree.depth()
    );
    Ok((tree, train_accuracy))
}
