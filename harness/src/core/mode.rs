//! Run-mode resolution implementing `only` isolation.
//!
//! Marking one sibling `only` is the authoring idiom for "run just this":
//! every sibling left at `run` is skipped without the author touching it.
//! Resolution is scope-local: an `only` deep inside one suite must not
//! suppress unrelated siblings at a shallower level.

use crate::tree::{RunMode, TaskId, TaskTree};

/// Rewrite one sibling scope in place.
///
/// If any task in `scope` is `only`: every `run` becomes `skip` and every
/// `only` becomes `run`; tasks already `skip` are untouched. Without an
/// `only` the scope is left unchanged. Idempotent once a scope is resolved.
///
/// Never recurses into children; drive nested scopes with [`resolve_modes`]
/// or per level from the collection phase.
pub fn interpret_only_mode(tree: &mut TaskTree, scope: &[TaskId]) {
    if !scope.iter().any(|&id| tree.task(id).mode == RunMode::Only) {
        return;
    }
    for &id in scope {
        let task = tree.task_mut(id);
        match task.mode {
            RunMode::Run => task.mode = RunMode::Skip,
            RunMode::Only => task.mode = RunMode::Run,
            RunMode::Skip => {}
        }
    }
}

/// Apply [`interpret_only_mode`] to every sibling scope under `root`,
/// top-down, each scope independently.
///
/// `root` itself belongs to its parent's scope (for file-level roots, the
/// cross-file scope) and is not rewritten here.
pub fn resolve_modes(tree: &mut TaskTree, root: TaskId) {
    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        let children = tree.task(id).children().to_vec();
        interpret_only_mode(tree, &children);
        stack.extend(children.iter().rev());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{file_tree, suite_in, test_in, test_with};
    use crate::tree::ComputeMode;

    fn modes(tree: &TaskTree, scope: &[TaskId]) -> Vec<RunMode> {
        scope.iter().map(|&id| tree.task(id).mode).collect()
    }

    #[test]
    fn only_skips_run_siblings_and_runs_itself() {
        let (mut tree, file) = file_tree("math.test");
        test_in(&mut tree, file, "a");
        test_with(&mut tree, file, "b", RunMode::Only, ComputeMode::Serial);
        test_with(&mut tree, file, "c", RunMode::Skip, ComputeMode::Serial);
        test_in(&mut tree, file, "d");
        let scope = tree.task(file).children().to_vec();

        interpret_only_mode(&mut tree, &scope);

        assert_eq!(
            modes(&tree, &scope),
            vec![RunMode::Skip, RunMode::Run, RunMode::Skip, RunMode::Skip]
        );
    }

    #[test]
    fn scope_without_only_is_unchanged() {
        let (mut tree, file) = file_tree("math.test");
        test_in(&mut tree, file, "a");
        test_in(&mut tree, file, "b");
        let scope = tree.task(file).children().to_vec();

        interpret_only_mode(&mut tree, &scope);

        assert_eq!(modes(&tree, &scope), vec![RunMode::Run, RunMode::Run]);
    }

    #[test]
    fn several_onlys_all_run() {
        let (mut tree, file) = file_tree("math.test");
        test_with(&mut tree, file, "a", RunMode::Only, ComputeMode::Serial);
        test_with(&mut tree, file, "b", RunMode::Only, ComputeMode::Serial);
        let scope = tree.task(file).children().to_vec();

        interpret_only_mode(&mut tree, &scope);

        assert_eq!(modes(&tree, &scope), vec![RunMode::Run, RunMode::Run]);
    }

    /// Resolving an already-resolved scope is a no-op: the pass rewrote every
    /// `only` away, so a second pass finds none and changes nothing.
    #[test]
    fn resolution_is_idempotent() {
        let (mut tree, file) = file_tree("math.test");
        test_in(&mut tree, file, "a");
        test_with(&mut tree, file, "b", RunMode::Only, ComputeMode::Serial);
        let scope = tree.task(file).children().to_vec();

        interpret_only_mode(&mut tree, &scope);
        let first_pass = modes(&tree, &scope);
        interpret_only_mode(&mut tree, &scope);

        assert_eq!(modes(&tree, &scope), first_pass);
    }

    /// An `only` inside a nested suite narrows that suite's scope without
    /// suppressing siblings of the suite itself.
    #[test]
    fn resolve_modes_keeps_only_isolation_per_scope() {
        let (mut tree, file) = file_tree("math.test");
        let math = suite_in(&mut tree, file, "math");
        let adds = test_in(&mut tree, math, "adds");
        let focused = test_with(&mut tree, math, "focused", RunMode::Only, ComputeMode::Serial);
        let unrelated = test_in(&mut tree, file, "unrelated");

        resolve_modes(&mut tree, file);

        assert_eq!(tree.task(adds).mode, RunMode::Skip);
        assert_eq!(tree.task(focused).mode, RunMode::Run);
        assert_eq!(tree.task(unrelated).mode, RunMode::Run);
        assert_eq!(tree.task(math).mode, RunMode::Run);
    }

    /// `only` among suites at one level composes with `only` among tests at a
    /// deeper level: each scope resolves independently.
    #[test]
    fn resolve_modes_applies_each_level_independently() {
        let (mut tree, file) = file_tree("math.test");
        let focused_suite = tree
            .add_suite_with(file, "focused", RunMode::Only, ComputeMode::Serial)
            .expect("suite");
        let background = suite_in(&mut tree, file, "background");
        let kept = test_with(
            &mut tree,
            focused_suite,
            "kept",
            RunMode::Only,
            ComputeMode::Serial,
        );
        let dropped = test_in(&mut tree, focused_suite, "dropped");
        let shadowed = test_in(&mut tree, background, "shadowed");

        resolve_modes(&mut tree, file);

        assert_eq!(tree.task(focused_suite).mode, RunMode::Run);
        assert_eq!(tree.task(background).mode, RunMode::Skip);
        assert_eq!(tree.task(kept).mode, RunMode::Run);
        assert_eq!(tree.task(dropped).mode, RunMode::Skip);
        // The suite was skipped by its own scope; its children resolve on
        // their own and the scheduler honors the suite-level skip.
        assert_eq!(tree.task(shadowed).mode, RunMode::Run);
    }
}
