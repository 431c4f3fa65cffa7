//! Structural invariants for task trees.
//!
//! Queries assume a well-formed tree and do not defend against a malformed
//! one; guaranteeing the structure is the construction side's job. This
//! check makes the guarantee verifiable (debug builds, CI fixtures,
//! deserialized trees of unverified origin).

use std::collections::{HashMap, HashSet};

use crate::tree::{TaskId, TaskTree};

/// Check structural invariants the type system cannot express:
/// - every `TaskId` reference stays inside the arena
/// - a child's `suite` back-reference names the suite that owns it
/// - no task is owned by more than one suite, or twice by the same
/// - `file` back-references name the root of the owning chain
/// - every non-root task is reachable from a root (no cycles, no orphans)
/// - sibling names are unique within their scope
///
/// Returns a list of stable error messages (empty on success).
pub fn validate_invariants(tree: &TaskTree) -> Vec<String> {
    let mut errors = reference_bounds_errors(tree);
    if !errors.is_empty() {
        // Out-of-range ids would panic the remaining checks; report and stop.
        return errors;
    }

    let mut owners: HashMap<TaskId, Vec<TaskId>> = HashMap::new();
    for id in tree.ids() {
        let task = tree.task(id);
        for &child in task.children() {
            owners.entry(child).or_default().push(id);
        }

        let mut seen = HashSet::new();
        for &child in task.children() {
            let child_name = tree.task(child).name.as_str();
            if !seen.insert(child_name) {
                errors.push(format!(
                    "suite '{}': duplicate child name '{}'",
                    task.name, child_name
                ));
            }
        }
    }

    for id in tree.ids() {
        let task = tree.task(id);
        match owners.get(&id).map(Vec::as_slice) {
            None => {
                if let Some(claimed) = task.suite {
                    errors.push(format!(
                        "task '{}': suite back-reference to '{}' but no suite owns it",
                        task.name,
                        tree.task(claimed).name
                    ));
                }
            }
            Some([owner]) => {
                if task.suite != Some(*owner) {
                    errors.push(format!(
                        "task '{}': owned by suite '{}' but suite back-reference disagrees",
                        task.name,
                        tree.task(*owner).name
                    ));
                }
            }
            Some(several) => {
                errors.push(format!(
                    "task '{}': owned by {} suites",
                    task.name,
                    several.len()
                ));
            }
        }
    }

    let mut visited = HashSet::new();
    for root in tree.ids().filter(|id| !owners.contains_key(id)) {
        let root_task = tree.task(root);
        if root_task.file.is_some() {
            errors.push(format!(
                "root '{}' carries a file back-reference",
                root_task.name
            ));
        }
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }
            let task = tree.task(id);
            if id != root && task.file != Some(root) {
                errors.push(format!(
                    "task '{}': file back-reference does not name its root '{}'",
                    task.name, root_task.name
                ));
            }
            stack.extend(task.children().iter().rev());
        }
    }
    for id in tree.ids() {
        if !visited.contains(&id) {
            errors.push(format!(
                "task '{}' unreachable from any root",
                tree.task(id).name
            ));
        }
    }

    errors
}

fn reference_bounds_errors(tree: &TaskTree) -> Vec<String> {
    let mut errors = Vec::new();
    for id in tree.ids() {
        let task = tree.task(id);
        for &child in task.children() {
            if tree.get(child).is_none() {
                errors.push(format!(
                    "task '{}': child id {} outside the arena",
                    task.name,
                    child.index()
                ));
            }
        }
        for (label, reference) in [("suite", task.suite), ("file", task.file)] {
            if let Some(target) = reference {
                if tree.get(target).is_none() {
                    errors.push(format!(
                        "task '{}': {} back-reference {} outside the arena",
                        task.name,
                        label,
                        target.index()
                    ));
                }
            }
        }
    }
    errors
}
