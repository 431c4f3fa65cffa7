//! Qualified name rendering for display paths.

use std::collections::HashSet;

use crate::tree::{TaskId, TaskTree};

/// Names from the outermost ancestor down to the task itself.
///
/// Ancestry follows the `suite` back-reference, falling back to `file` only
/// when `suite` is absent; the walk stops when neither is set. An ancestor
/// with an empty name contributes nothing but the walk continues through it.
pub fn name_path(tree: &TaskTree, id: TaskId) -> Vec<String> {
    let mut names = vec![tree.task(id).name.clone()];
    let mut visited = HashSet::from([id]);
    let mut current = id;
    loop {
        let task = tree.task(current);
        let Some(ancestor) = task.suite.or(task.file) else {
            break;
        };
        if !visited.insert(ancestor) {
            // Construction keeps ancestry acyclic; bail instead of spinning.
            debug_assert!(false, "ancestry cycle through task {}", ancestor.index());
            break;
        }
        let ancestor_task = tree.task(ancestor);
        if !ancestor_task.name.is_empty() {
            names.push(ancestor_task.name.clone());
        }
        current = ancestor;
    }
    names.reverse();
    names
}

/// `"File > Suite > Test"` display form of [`name_path`].
pub fn full_name(tree: &TaskTree, id: TaskId) -> String {
    name_path(tree, id).join(" > ")
}

/// Normalize a file path for display: backslashes to forward slashes.
pub fn slash(path: &str) -> String {
    path.replace('\\', "/")
}
