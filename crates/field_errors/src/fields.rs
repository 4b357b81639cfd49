use dom::{Id, Node};
use std::collections::HashMap;

/// Form controls of a document keyed by their `name` attribute.
///
/// Error objects coming from a form library refer to the offending control by
/// field name; this index turns that name into the element handle that
/// [`DocumentPosition`](crate::order::DocumentPosition) orders by.
#[derive(Clone, Debug, Default)]
pub struct FormFieldIndex {
    by_name: HashMap<String, Id>,
}

impl FormFieldIndex {
    pub fn from_dom(dom: &Node) -> Self {
        fn is_form_control(name: &str) -> bool {
            ["input", "select", "textarea", "button"]
                .iter()
                .any(|tag| name.eq_ignore_ascii_case(tag))
        }

        fn walk(node: &Node, index: &mut FormFieldIndex) {
            if let Some(tag) = node.element_name()
                && is_form_control(tag)
                && let Some(name) = node.attr("name").map(str::trim).filter(|s| !s.is_empty())
            {
                // First control registered under a name wins.
                index.by_name.entry(name.to_string()).or_insert(node.id());
            }
            for c in node.children() {
                walk(c, index);
            }
        }

        let mut index = Self::default();
        walk(dom, &mut index);
        index
    }

    pub fn insert(&mut self, name: impl Into<String>, id: Id) {
        self.by_name.insert(name.into(), id);
    }

    pub fn get(&self, name: &str) -> Option<Id> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
