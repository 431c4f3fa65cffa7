//! Grouping of suite children into concurrency batches.

use std::mem;

use crate::tree::{TaskId, TaskTree};

/// Partition `suite`'s direct children into maximal runs of consecutive
/// tasks sharing a compute mode.
///
/// Declaration order is preserved across mode changes (`serial, serial,
/// concurrent, serial` yields three groups in that order), so the scheduler
/// applies the right concurrency policy per group while honoring the
/// author's interleaving.
pub fn partition_suite_children(tree: &TaskTree, suite: TaskId) -> Vec<Vec<TaskId>> {
    let mut groups: Vec<Vec<TaskId>> = Vec::new();
    let mut group: Vec<TaskId> = Vec::new();
    for &child in tree.task(suite).children() {
        match group.first() {
            Some(&head) if tree.task(head).compute_mode != tree.task(child).compute_mode => {
                groups.push(mem::take(&mut group));
                group.push(child);
            }
            _ => group.push(child),
        }
    }
    if !group.is_empty() {
        groups.push(group);
    }
    groups
}
