//! Result roll-up for reporting.

use crate::core::arrayable::Arrayable;
use crate::core::traverse::collect_tests;
use crate::tree::{ResultState, RunMode, TaskId, TaskTree};

/// Counts of test outcomes across the queried subtree(s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    /// Collected but not yet executed.
    pub pending: usize,
}

impl RunSummary {
    /// True once every test either passed or was skipped.
    pub fn complete_and_passed(&self) -> bool {
        self.failed == 0 && self.pending == 0
    }
}

/// Tally test outcomes under the queried task(s).
///
/// A test without a result record counts as skipped when its resolved mode
/// is `skip`, otherwise as pending; partial watch-mode runs stay visible
/// instead of folding into skips.
pub fn summarize(tree: &TaskTree, input: impl Into<Arrayable<TaskId>>) -> RunSummary {
    let mut summary = RunSummary::default();
    for id in collect_tests(tree, input) {
        let task = tree.task(id);
        summary.total += 1;
        match task.result.as_ref().map(|result| result.state) {
            Some(ResultState::Pass) => summary.passed += 1,
            Some(ResultState::Fail) => summary.failed += 1,
            Some(ResultState::Skip) => summary.skipped += 1,
            None if task.mode == RunMode::Skip => summary.skipped += 1,
            None => summary.pending += 1,
        }
    }
    summary
}
