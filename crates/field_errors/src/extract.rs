//! Bottom-up reduction of an error tree to a single record.

use crate::node::ErrorNode;
use crate::order::{CompareResult, ExtractOrder, compare_with_chain};
use crate::record::{ErrorRecord, split_path};

/// Reduce `node` (located at `path`) to its winning record.
///
/// A container's own error competes first, then its children in declaration
/// order. The result is empty when nothing below `node` carries an error.
pub fn extract<O: ExtractOrder>(node: &ErrorNode, path: &str, chain: &[O]) -> ErrorRecord {
    let mut segments = split_path(path);
    extract_at(node, path, &mut segments, chain)
}

fn extract_at<O: ExtractOrder>(
    node: &ErrorNode,
    path: &str,
    segments: &mut Vec<String>,
    chain: &[O],
) -> ErrorRecord {
    let record = ErrorRecord::from_node(path, node).at_segments(segments);
    let ErrorNode::Internal { children, .. } = node else {
        return record;
    };

    children.iter().fold(record, |current, (segment, child)| {
        segments.push(segment.clone());
        let candidate = extract_at(child, &join_path(path, segment), segments, chain);
        segments.pop();
        merge(current, candidate, chain)
    })
}

/// Keep whichever record the chain prefers.
///
/// Without a verdict a non-empty record beats an empty one; otherwise `current`
/// stays, so the earlier-declared field wins full ties.
pub fn merge<O: ExtractOrder>(
    current: ErrorRecord,
    candidate: ErrorRecord,
    chain: &[O],
) -> ErrorRecord {
    let verdict = compare_with_chain(chain, &current, &candidate);
    log::trace!(
        target: "field_errors.extract",
        "merge {:?} vs {:?}: {verdict:?}",
        current.path(),
        candidate.path()
    );

    match verdict {
        CompareResult::First => current,
        CompareResult::Second => candidate,
        CompareResult::Equal if current.is_empty() && !candidate.is_empty() => candidate,
        CompareResult::Equal => current,
    }
}

pub fn join_path(parent: &str, segment: &str) -> String {
    if parent.is_empty() {
        return segment.to_string();
    }
    let mut out = String::with_capacity(parent.len() + 1 + segment.len());
    out.push_str(parent);
    out.push('.');
    out.push_str(segment);
    out
}
