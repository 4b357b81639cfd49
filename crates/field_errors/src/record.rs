use crate::node::{ErrorNode, Leaf};
use dom::Id;

/// One candidate error: where it sits in the tree and what it carries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorRecord {
    path: String,
    segments: Vec<String>,
    message: Option<String>,
    element: Option<Id>,
}

impl ErrorRecord {
    /// The path is split on `.` into segments; records found by
    /// [`extract`](crate::extract::extract) carry the exact keys instead.
    pub fn new(path: impl Into<String>, message: Option<String>, element: Option<Id>) -> Self {
        let path = path.into();
        let segments = split_path(&path);
        Self {
            path,
            segments,
            message,
            element,
        }
    }

    pub fn empty(path: impl Into<String>) -> Self {
        Self::new(path, None, None)
    }

    /// Record for `node`'s own error fields. Containers without their own
    /// error and absent nodes yield an empty record; this never fails.
    pub fn from_node(path: impl Into<String>, node: &ErrorNode) -> Self {
        match node {
            ErrorNode::Leaf(leaf)
            | ErrorNode::Internal {
                own: Some(leaf), ..
            } => Self::from_leaf(path, leaf),
            ErrorNode::Internal { own: None, .. } | ErrorNode::Absent => Self::empty(path),
        }
    }

    pub fn from_leaf(path: impl Into<String>, leaf: &Leaf) -> Self {
        Self::new(path, leaf.message.clone(), leaf.element)
    }

    pub(crate) fn at_segments(mut self, segments: &[String]) -> Self {
        self.segments = segments.to_vec();
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Child keys from the root down to this record's node. Unlike
    /// [`path`](Self::path) this stays exact when a key contains a `.`, so it
    /// is what [`ErrorNode::remove_at`] expects.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn element(&self) -> Option<Id> {
        self.element
    }

    pub fn into_message(self) -> Option<String> {
        self.message
    }

    /// Neither a message nor an element: nothing to report.
    pub fn is_empty(&self) -> bool {
        self.message.is_none() && self.element.is_none()
    }
}

pub(crate) fn split_path(path: &str) -> Vec<String> {
    if path.is_empty() {
        return Vec::new();
    }
    path.split('.').map(str::to_string).collect()
}
