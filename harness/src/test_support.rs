//! Test-only helpers for constructing task trees.

use crate::tree::{ComputeMode, RunMode, TaskId, TaskResult, TaskTree};

/// Tree holding a single file-level suite named `name`.
pub fn file_tree(name: &str) -> (TaskTree, TaskId) {
    let mut tree = TaskTree::new();
    let file = tree.add_file(name);
    (tree, file)
}

/// Append a `run`/`serial` suite under `parent`.
pub fn suite_in(tree: &mut TaskTree, parent: TaskId, name: &str) -> TaskId {
    tree.add_suite(parent, name).expect("suite under suite")
}

/// Append a `run`/`serial` test under `parent`.
pub fn test_in(tree: &mut TaskTree, parent: TaskId, name: &str) -> TaskId {
    tree.add_test(parent, name).expect("test under suite")
}

/// Append a test with explicit modes under `parent`.
pub fn test_with(
    tree: &mut TaskTree,
    parent: TaskId,
    name: &str,
    mode: RunMode,
    compute_mode: ComputeMode,
) -> TaskId {
    tree.add_test_with(parent, name, mode, compute_mode)
        .expect("test under suite")
}

/// Record a passing result for `id`.
pub fn pass(tree: &mut TaskTree, id: TaskId) {
    tree.set_result(id, TaskResult::pass()).expect("first result");
}

/// Record a failing result for `id`.
pub fn fail(tree: &mut TaskTree, id: TaskId, message: &str) {
    tree.set_result(id, TaskResult::fail(message))
        .expect("first result");
}
