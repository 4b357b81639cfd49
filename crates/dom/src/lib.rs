//! # dom
//!
//! The slice of a document model that form error ranking needs: nodes with
//! stable ids, id assignment, and a document-order index answering
//! "which of these two elements comes first".

pub mod order;
pub mod traverse;

mod types;

pub use crate::order::{DocumentOrder, Relation};
pub use crate::traverse::assign_node_ids;
pub use crate::types::{Id, Node};
