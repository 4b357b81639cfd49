use super::{CompareResult, ExtractOrder, presence};
use crate::record::ErrorRecord;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PathMatchOptions {
    /// Match whole paths only. Otherwise a target also matches every field
    /// below it (`"animal"` matches `"animal.dog"`).
    pub exact: bool,
}

/// Prefers records whose path matches an earlier entry of a target list.
///
/// Records matching no target lose to records matching any. Empty records
/// never match: a field group without an error of its own has nothing to
/// prioritize.
#[derive(Clone, Debug)]
pub struct PathMatch {
    targets: Vec<String>,
    options: PathMatchOptions,
}

impl PathMatch {
    pub fn new<S: Into<String>>(
        targets: impl IntoIterator<Item = S>,
        options: PathMatchOptions,
    ) -> Self {
        let mut deduped: Vec<String> = Vec::new();
        for target in targets {
            let target = target.into();
            if !deduped.contains(&target) {
                deduped.push(target);
            }
        }
        Self {
            targets: deduped,
            options,
        }
    }

    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    fn matches(&self, target: &str, path: &str) -> bool {
        if self.options.exact {
            return path == target;
        }
        path.strip_prefix(target)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('.'))
    }

    /// Index of the first target matching `record`'s path.
    pub fn rank(&self, record: &ErrorRecord) -> Option<usize> {
        if record.is_empty() {
            return None;
        }
        self.targets
            .iter()
            .position(|target| self.matches(target, record.path()))
    }
}

impl ExtractOrder for PathMatch {
    fn compare(&self, first: &ErrorRecord, second: &ErrorRecord) -> CompareResult {
        let (r1, r2) = (self.rank(first), self.rank(second));
        if let Some(result) = presence(r1, r2) {
            return result;
        }
        match (r1, r2) {
            (Some(r1), Some(r2)) if r1 < r2 => CompareResult::First,
            (Some(r1), Some(r2)) if r1 > r2 => CompareResult::Second,
            _ => CompareResult::Equal,
        }
    }
}
