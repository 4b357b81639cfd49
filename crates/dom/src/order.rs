//! Document-order index.
//!
//! Positions are pre-order indices; each entry also records the last pre-order
//! index inside its subtree, so ancestry is an interval check. Building the
//! index is O(n); every query afterwards is a hash lookup.

use crate::{Id, Node};
use std::collections::HashMap;

/// How node `a` relates to node `b` in one document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relation {
    Same,
    /// `a` comes before `b` and is not its ancestor.
    Precedes,
    /// `a` comes after `b` and is not its descendant.
    Follows,
    /// `a` is an ancestor of `b`.
    Contains,
    /// `a` is a descendant of `b`.
    ContainedBy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Span {
    pre: usize,
    last: usize,
}

#[derive(Clone, Debug, Default)]
pub struct DocumentOrder {
    spans: HashMap<Id, Span>,
}

impl DocumentOrder {
    pub fn new(root: &Node) -> Self {
        fn walk(node: &Node, next: &mut usize, spans: &mut HashMap<Id, Span>) {
            let pre = *next;
            *next += 1;
            for c in node.children() {
                walk(c, next, spans);
            }
            let span = Span {
                pre,
                last: *next - 1,
            };
            // Duplicate ids keep the first occurrence.
            spans.entry(node.id()).or_insert(span);
        }

        let mut spans = HashMap::new();
        let mut next = 0;
        walk(root, &mut next, &mut spans);
        log::trace!(target: "dom.order", "indexed {next} nodes");
        Self { spans }
    }

    pub fn contains_id(&self, id: Id) -> bool {
        self.spans.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Pre-order position of `id`, if it is part of the indexed document.
    pub fn position(&self, id: Id) -> Option<usize> {
        self.spans.get(&id).map(|s| s.pre)
    }

    /// `None` when either node is not in the indexed document.
    pub fn relation(&self, a: Id, b: Id) -> Option<Relation> {
        let sa = self.spans.get(&a)?;
        let sb = self.spans.get(&b)?;

        if sa.pre == sb.pre {
            return Some(Relation::Same);
        }
        if sa.pre < sb.pre {
            if sb.pre <= sa.last {
                Some(Relation::Contains)
            } else {
                Some(Relation::Precedes)
            }
        } else if sa.pre <= sb.last {
            Some(Relation::ContainedBy)
        } else {
            Some(Relation::Follows)
        }
    }
}
