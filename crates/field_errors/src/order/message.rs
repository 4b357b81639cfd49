use super::{CompareResult, ExtractOrder, presence};
use crate::record::ErrorRecord;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MessageExistenceOptions {
    /// Treat whitespace-only messages as placeholders that lose to real text.
    pub trim: bool,
}

/// Prefers records that carry a message.
///
/// A defined message always beats a missing one, even if it is blank. Between
/// two defined messages only the `trim` option can decide: a blank message
/// loses to one with visible text.
#[derive(Clone, Copy, Debug, Default)]
pub struct MessageExistence {
    options: MessageExistenceOptions,
}

impl MessageExistence {
    pub fn new(options: MessageExistenceOptions) -> Self {
        Self { options }
    }

    pub fn trimmed() -> Self {
        Self::new(MessageExistenceOptions { trim: true })
    }
}

impl ExtractOrder for MessageExistence {
    fn compare(&self, first: &ErrorRecord, second: &ErrorRecord) -> CompareResult {
        let (m1, m2) = (first.message(), second.message());
        if let Some(result) = presence(m1, m2) {
            return result;
        }
        if !self.options.trim {
            return CompareResult::Equal;
        }

        let blank1 = m1.is_some_and(|m| m.trim().is_empty());
        let blank2 = m2.is_some_and(|m| m.trim().is_empty());
        match (blank1, blank2) {
            (false, true) => CompareResult::First,
            (true, false) => CompareResult::Second,
            _ => CompareResult::Equal,
        }
    }
}
