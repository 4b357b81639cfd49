//! Priority rules for choosing between two candidate errors.
//!
//! A chain is a plain slice of rules. The first rule with an opinion decides;
//! when every rule answers [`CompareResult::Equal`] the engine falls back to
//! "some error beats none, otherwise keep the earlier one".

mod message;
mod path;
mod position;

pub use message::{MessageExistence, MessageExistenceOptions};
pub use path::{PathMatch, PathMatchOptions};
pub use position::DocumentPosition;

use crate::record::ErrorRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompareResult {
    First,
    Second,
    Equal,
}

/// A pure, three-way preference between two records.
///
/// `compare(a, a)` must be `Equal`. Implementations must not keep state that
/// changes between calls.
pub trait ExtractOrder {
    fn compare(&self, first: &ErrorRecord, second: &ErrorRecord) -> CompareResult;
}

impl<T: ExtractOrder + ?Sized> ExtractOrder for &T {
    fn compare(&self, first: &ErrorRecord, second: &ErrorRecord) -> CompareResult {
        (**self).compare(first, second)
    }
}

impl<T: ExtractOrder + ?Sized> ExtractOrder for Box<T> {
    fn compare(&self, first: &ErrorRecord, second: &ErrorRecord) -> CompareResult {
        (**self).compare(first, second)
    }
}

/// The empty chain: only the fallback rule applies.
pub const NO_ORDERS: &[&dyn ExtractOrder] = &[];

/// Verdict of the first rule in `chain` that prefers one side.
pub fn compare_with_chain<O: ExtractOrder>(
    chain: &[O],
    first: &ErrorRecord,
    second: &ErrorRecord,
) -> CompareResult {
    chain
        .iter()
        .map(|order| order.compare(first, second))
        .find(|result| *result != CompareResult::Equal)
        .unwrap_or(CompareResult::Equal)
}

/// Present beats missing; two missing sides tie. `None` when both are present.
fn presence<T>(first: Option<T>, second: Option<T>) -> Option<CompareResult> {
    match (first, second) {
        (None, None) => Some(CompareResult::Equal),
        (Some(_), None) => Some(CompareResult::First),
        (None, Some(_)) => Some(CompareResult::Second),
        (Some(_), Some(_)) => None,
    }
}
