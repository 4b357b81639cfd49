use crate::extract::extract;
use crate::node::ErrorNode;
use crate::order::ExtractOrder;
use crate::record::ErrorRecord;

/// Queries over one error tree.
///
/// Every query walks the tree afresh; the extractor holds no state besides the
/// borrowed tree, so repeated calls with the same chain give the same answer.
#[derive(Clone, Copy, Debug)]
pub struct FieldErrorExtractor<'a> {
    tree: &'a ErrorNode,
}

impl<'a> FieldErrorExtractor<'a> {
    pub fn new(tree: &'a ErrorNode) -> Self {
        Self { tree }
    }

    /// The winning error under `chain`, or `None` if the tree holds no error.
    pub fn best_record<O: ExtractOrder>(&self, chain: &[O]) -> Option<ErrorRecord> {
        let record = extract(self.tree, "", chain);
        if record.is_empty() {
            log::debug!(target: "field_errors.extract", "no error in tree");
            return None;
        }
        Some(record)
    }

    pub fn best_message<O: ExtractOrder>(&self, chain: &[O]) -> Option<String> {
        self.best_record(chain).and_then(ErrorRecord::into_message)
    }

    /// First message in declaration order, ignoring elements and priorities.
    pub fn first_message(&self) -> Option<&'a str> {
        fn walk(node: &ErrorNode) -> Option<&str> {
            match node {
                ErrorNode::Absent => None,
                ErrorNode::Leaf(leaf) => leaf.message.as_deref(),
                ErrorNode::Internal { own, children } => own
                    .as_ref()
                    .and_then(|leaf| leaf.message.as_deref())
                    .or_else(|| children.iter().find_map(|(_, child)| walk(child))),
            }
        }

        walk(self.tree)
    }
}
