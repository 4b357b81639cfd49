//! The error tree as handed over by the form integration layer.
//!
//! Shape detection happens once, when the tree is built (see
//! [`normalize`](crate::normalize)); the extraction engine only ever sees these
//! closed variants.

use dom::Id;

/// The error fields a node can carry itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Leaf {
    pub message: Option<String>,
    pub element: Option<Id>,
}

impl Leaf {
    pub fn new(message: Option<String>, element: Option<Id>) -> Self {
        Self { message, element }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            element: None,
        }
    }

    pub fn with_element(mut self, element: Id) -> Self {
        self.element = Some(element);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.message.is_none() && self.element.is_none()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ErrorNode {
    /// Malformed or missing input; contributes nothing.
    #[default]
    Absent,
    Leaf(Leaf),
    /// Named children in declaration order. `own` holds the node's own error
    /// when a field group reports one next to its children's.
    Internal {
        own: Option<Leaf>,
        children: Vec<(String, ErrorNode)>,
    },
}

impl ErrorNode {
    pub fn leaf(message: impl Into<String>) -> Self {
        ErrorNode::Leaf(Leaf::message(message))
    }

    pub fn internal<S: Into<String>>(children: impl IntoIterator<Item = (S, ErrorNode)>) -> Self {
        ErrorNode::Internal {
            own: None,
            children: children.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    pub fn with_own(self, leaf: Leaf) -> Self {
        match self {
            ErrorNode::Internal { children, .. } => ErrorNode::Internal {
                own: Some(leaf),
                children,
            },
            ErrorNode::Absent | ErrorNode::Leaf(_) => ErrorNode::Leaf(leaf),
        }
    }

    pub fn child(&self, segment: &str) -> Option<&ErrorNode> {
        match self {
            ErrorNode::Internal { children, .. } => children
                .iter()
                .find(|(k, _)| k == segment)
                .map(|(_, v)| v),
            ErrorNode::Absent | ErrorNode::Leaf(_) => None,
        }
    }

    /// Node at a dot-joined field path; `""` is the node itself.
    ///
    /// Keys may contain dots themselves, so at each level the longest key that
    /// covers the rest of the path is tried first. Use [`get_at`](Self::get_at)
    /// with [`ErrorRecord::segments`](crate::ErrorRecord::segments) when the
    /// exact node matters.
    pub fn get(&self, path: &str) -> Option<&ErrorNode> {
        if path.is_empty() {
            return Some(self);
        }
        self.locate(path)?
            .into_iter()
            .try_fold(self, |node, i| node.child_at(i))
    }

    /// Detach the node at `path`, e.g. once the user has fixed that field.
    ///
    /// Resolves `path` like [`get`](Self::get), except that the root itself is
    /// never removed: `""` names a child with an empty key.
    pub fn remove(&mut self, path: &str) -> Option<ErrorNode> {
        let trail = self.locate(path)?;
        self.remove_trail(&trail)
    }

    /// Node reached by following `segments` as exact child keys.
    pub fn get_at<S: AsRef<str>>(&self, segments: &[S]) -> Option<&ErrorNode> {
        segments
            .iter()
            .try_fold(self, |node, segment| node.child(segment.as_ref()))
    }

    /// Detach the node reached by `segments`. An empty slice names the root,
    /// which cannot be removed. The first child with a repeated key is taken.
    pub fn remove_at<S: AsRef<str>>(&mut self, segments: &[S]) -> Option<ErrorNode> {
        let mut trail = Vec::with_capacity(segments.len());
        let mut node: &ErrorNode = self;
        for segment in segments {
            let ErrorNode::Internal { children, .. } = node else {
                return None;
            };
            let i = children.iter().position(|(k, _)| k == segment.as_ref())?;
            trail.push(i);
            node = &children[i].1;
        }
        self.remove_trail(&trail)
    }

    fn child_at(&self, i: usize) -> Option<&ErrorNode> {
        match self {
            ErrorNode::Internal { children, .. } => children.get(i).map(|(_, v)| v),
            ErrorNode::Absent | ErrorNode::Leaf(_) => None,
        }
    }

    /// Child indices leading to the node at `path`.
    fn locate(&self, path: &str) -> Option<Vec<usize>> {
        let ErrorNode::Internal { children, .. } = self else {
            return None;
        };
        if let Some(i) = children.iter().position(|(k, _)| k == path) {
            return Some(vec![i]);
        }

        let mut prefixed: Vec<(usize, &str)> = children
            .iter()
            .enumerate()
            .filter_map(|(i, (k, _))| {
                let rest = path.strip_prefix(k.as_str())?.strip_prefix('.')?;
                Some((i, rest))
            })
            .collect();
        // Shortest rest first means longest key first.
        prefixed.sort_by_key(|&(_, rest)| rest.len());

        prefixed.into_iter().find_map(|(i, rest)| {
            let mut trail = children[i].1.locate(rest)?;
            trail.insert(0, i);
            Some(trail)
        })
    }

    fn remove_trail(&mut self, trail: &[usize]) -> Option<ErrorNode> {
        let (&last, parents) = trail.split_last()?;
        let mut node = self;
        for &i in parents {
            let ErrorNode::Internal { children, .. } = node else {
                return None;
            };
            node = &mut children.get_mut(i)?.1;
        }

        let ErrorNode::Internal { children, .. } = node else {
            return None;
        };
        (last < children.len()).then(|| children.remove(last).1)
    }
}
