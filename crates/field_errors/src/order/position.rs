use super::{CompareResult, ExtractOrder, presence};
use crate::record::ErrorRecord;
use dom::{DocumentOrder, Node, Relation};

/// Prefers the record whose element appears first in the document.
///
/// An element that contains the other one counts as appearing first. Records
/// without an element, or with an element that is not part of the indexed
/// document, lose to records that have one.
#[derive(Clone, Debug)]
pub struct DocumentPosition {
    order: DocumentOrder,
}

impl DocumentPosition {
    pub fn new(document: &Node) -> Self {
        Self {
            order: DocumentOrder::new(document),
        }
    }

    pub fn from_order(order: DocumentOrder) -> Self {
        Self { order }
    }
}

impl ExtractOrder for DocumentPosition {
    fn compare(&self, first: &ErrorRecord, second: &ErrorRecord) -> CompareResult {
        let e1 = first.element().filter(|id| self.order.contains_id(*id));
        let e2 = second.element().filter(|id| self.order.contains_id(*id));
        if let Some(result) = presence(e1, e2) {
            return result;
        }
        let (Some(e1), Some(e2)) = (e1, e2) else {
            return CompareResult::Equal;
        };

        match self.order.relation(e1, e2) {
            Some(Relation::Precedes | Relation::Contains) => CompareResult::First,
            Some(Relation::Follows | Relation::ContainedBy) => CompareResult::Second,
            Some(Relation::Same) | None => CompareResult::Equal,
        }
    }
}
