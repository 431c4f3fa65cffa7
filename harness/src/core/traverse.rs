//! Read-only flattening queries over the task tree.
//!
//! Every walk is an explicit-stack, left-to-right, depth-first traversal:
//! deeply nested suites must not grow the call stack, and the predicate
//! queries stop at the first match.

use crate::core::arrayable::{Arrayable, to_array};
use crate::tree::{ResultState, TaskId, TaskKind, TaskTree};

/// Seed a depth-first stack so ids pop in left-to-right document order.
fn dfs_stack(input: impl Into<Arrayable<TaskId>>) -> Vec<TaskId> {
    let mut stack = to_array(input);
    stack.reverse();
    stack
}

/// Every test in the subtree(s), depth-first, children in declaration order.
///
/// Suites are descended regardless of their run mode; a skipped suite's
/// tests are still collected (reporters list them as skipped).
pub fn collect_tests(tree: &TaskTree, input: impl Into<Arrayable<TaskId>>) -> Vec<TaskId> {
    let mut tests = Vec::new();
    let mut stack = dfs_stack(input);
    while let Some(id) = stack.pop() {
        match &tree.task(id).kind {
            TaskKind::Test => tests.push(id),
            TaskKind::Suite { tasks } => stack.extend(tasks.iter().rev()),
        }
    }
    tests
}

/// Every task in the subtree(s) in depth-first pre-order: a suite appears
/// before its descendants.
pub fn collect_tasks(tree: &TaskTree, input: impl Into<Arrayable<TaskId>>) -> Vec<TaskId> {
    let mut out = Vec::new();
    let mut stack = dfs_stack(input);
    while let Some(id) = stack.pop() {
        out.push(id);
        if let TaskKind::Suite { tasks } = &tree.task(id).kind {
            stack.extend(tasks.iter().rev());
        }
    }
    out
}

/// Every suite in the subtree(s) in depth-first pre-order; tests excluded.
pub fn collect_suites(tree: &TaskTree, input: impl Into<Arrayable<TaskId>>) -> Vec<TaskId> {
    let mut suites = Vec::new();
    let mut stack = dfs_stack(input);
    while let Some(id) = stack.pop() {
        if let TaskKind::Suite { tasks } = &tree.task(id).kind {
            suites.push(id);
            stack.extend(tasks.iter().rev());
        }
    }
    suites
}

/// True iff at least one test is reachable; stops at the first match.
pub fn has_tests(tree: &TaskTree, input: impl Into<Arrayable<TaskId>>) -> bool {
    let mut stack = dfs_stack(input);
    while let Some(id) = stack.pop() {
        match &tree.task(id).kind {
            TaskKind::Test => return true,
            TaskKind::Suite { tasks } => stack.extend(tasks.iter().rev()),
        }
    }
    false
}

/// True iff any reachable task carries a recorded `fail` state; stops at the
/// first match.
///
/// The result slot is read before descending, so an engine that records a
/// collection failure on a suite itself is still surfaced.
pub fn has_failed(tree: &TaskTree, input: impl Into<Arrayable<TaskId>>) -> bool {
    let mut stack = dfs_stack(input);
    while let Some(id) = stack.pop() {
        let task = tree.task(id);
        if task
            .result
            .as_ref()
            .is_some_and(|result| result.state == ResultState::Fail)
        {
            return true;
        }
        if let TaskKind::Suite { tasks } = &task.kind {
            stack.extend(tasks.iter().rev());
        }
    }
    false
}
