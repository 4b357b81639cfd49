//! # field_errors
//!
//! Picks the one error a form should show out of a nested tree of field
//! errors.
//!
//! - [`ErrorNode`]: the error tree, one node per field or field group
//! - [`ErrorRecord`]: a candidate error with its dot-joined field path
//! - [`ExtractOrder`]: a priority rule; rules are chained as a slice
//! - [`FieldErrorExtractor`]: runs a chain over a tree
//!
//! ```ignore
//! let tree = normalize::from_json_str(errors_json, Some(&FormFieldIndex::from_dom(&dom)))?;
//! let chain: [&dyn ExtractOrder; 2] = [&MessageExistence::trimmed(), &DocumentPosition::new(&dom)];
//! let message = FieldErrorExtractor::new(&tree).best_message(&chain);
//! ```
//!
//! Nothing here fails on odd input: malformed parts of a tree simply hold no
//! error. Only parsing JSON text and loading a chain config return `Result`.

pub mod config;
pub mod extract;
pub mod normalize;
pub mod order;

mod extractor;
mod fields;
mod node;
mod record;

pub use crate::config::{BoxedOrder, ChainConfig, ConfigError, OrderConfig};
pub use crate::extractor::FieldErrorExtractor;
pub use crate::fields::FormFieldIndex;
pub use crate::node::{ErrorNode, Leaf};
pub use crate::normalize::NormalizeError;
pub use crate::order::{
    CompareResult, DocumentPosition, ExtractOrder, MessageExistence, MessageExistenceOptions,
    NO_ORDERS, PathMatch, PathMatchOptions,
};
pub use crate::record::ErrorRecord;

#[cfg(test)]
mod tests;
