use crate::{Id, Node};

/// Give every node still carrying `Id(0)` a fresh id, numbering in pre-order
/// after the largest id already present.
///
/// Ids that are already set are left alone, so callers can pin a few handles
/// and let the rest be filled in.
pub fn assign_node_ids(root: &mut Node) {
    fn max_id(node: &Node) -> u32 {
        node.children()
            .iter()
            .map(max_id)
            .fold(node.id().0, u32::max)
    }

    fn walk(node: &mut Node, next: &mut u32) {
        let id = node.id_mut();
        if *id == Id(0) {
            *id = Id(*next);
            *next = next.wrapping_add(1);
        }
        for child in node.children_mut() {
            walk(child, next);
        }
    }

    let mut next = max_id(root).wrapping_add(1).max(1);
    walk(root, &mut next);
}
