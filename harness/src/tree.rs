//! Arena-backed task tree shared by collection, scheduling, and reporting.
//!
//! Suites own their children through the arena: [`TaskTree`] holds every
//! node, and a suite's [`TaskKind::Suite`] payload lists child ids in
//! declaration order. The `suite`/`file` fields on [`Task`] are lookup-only
//! back-references and never participate in ownership.

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Index of a task inside its [`TaskTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub(crate) usize);

impl TaskId {
    /// Raw arena index, for diagnostics.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Per-task inclusion state, resolved before execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    Run,
    Skip,
    Only,
}

/// Per-task concurrency policy; drives batching within a suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComputeMode {
    Serial,
    Concurrent,
}

/// Outcome state written by the execution engine.
///
/// Pending is represented by the absence of a [`TaskResult`] record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultState {
    Pass,
    Fail,
    Skip,
}

/// Outcome record for a finished task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResult {
    pub state: ResultState,
    /// Failure detail surfaced by reporters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TaskResult {
    pub fn pass() -> Self {
        Self {
            state: ResultState::Pass,
            error: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            state: ResultState::Fail,
            error: Some(message.into()),
        }
    }

    pub fn skip() -> Self {
        Self {
            state: ResultState::Skip,
            error: None,
        }
    }
}

/// Variant payload distinguishing containers from leaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    /// Container owning an ordered run of children. Order is declaration
    /// order and is semantically meaningful: it drives partitioning and
    /// report ordering.
    Suite { tasks: Vec<TaskId> },
    /// Leaf representing one executable assertion unit.
    Test,
}

/// One node of the task tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Unique within its sibling scope only, not globally.
    pub name: String,
    pub mode: RunMode,
    pub compute_mode: ComputeMode,
    /// Owning suite; `None` for a file-level root.
    pub suite: Option<TaskId>,
    /// File-level suite at the top of the ancestry chain; `None` for that
    /// root itself.
    pub file: Option<TaskId>,
    /// Set exactly once per run by the execution engine.
    pub result: Option<TaskResult>,
    pub kind: TaskKind,
}

impl Task {
    pub fn is_suite(&self) -> bool {
        matches!(self.kind, TaskKind::Suite { .. })
    }

    pub fn is_test(&self) -> bool {
        matches!(self.kind, TaskKind::Test)
    }

    /// Child ids in declaration order; empty for tests.
    pub fn children(&self) -> &[TaskId] {
        match &self.kind {
            TaskKind::Suite { tasks } => tasks,
            TaskKind::Test => &[],
        }
    }
}

/// Arena owning every task of one run; holds any number of file-level roots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskTree {
    tasks: Vec<Task>,
}

impl TaskTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks in the arena.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Every task id in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = TaskId> + '_ {
        (0..self.tasks.len()).map(TaskId)
    }

    /// Borrow a task.
    ///
    /// Panics when `id` does not belong to this arena; such an id is an
    /// internal-consistency fault, not a recoverable condition.
    pub fn task(&self, id: TaskId) -> &Task {
        &self.tasks[id.0]
    }

    /// Mutably borrow a task. Panics like [`TaskTree::task`].
    pub fn task_mut(&mut self, id: TaskId) -> &mut Task {
        &mut self.tasks[id.0]
    }

    /// Borrow a task, `None` when `id` is outside the arena. For callers
    /// handling ids of unverified origin (e.g. deserialized trees).
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(id.0)
    }

    /// Register a file-level suite: the root of one ancestry chain, with no
    /// back-references of its own.
    pub fn add_file(&mut self, name: impl Into<String>) -> TaskId {
        let name = name.into();
        debug!(file = %name, "registered file-level suite");
        let id = TaskId(self.tasks.len());
        self.tasks.push(Task {
            id,
            name,
            mode: RunMode::Run,
            compute_mode: ComputeMode::Serial,
            suite: None,
            file: None,
            result: None,
            kind: TaskKind::Suite { tasks: Vec::new() },
        });
        id
    }

    /// Append a `run`/`serial` suite under `parent`.
    pub fn add_suite(&mut self, parent: TaskId, name: impl Into<String>) -> Result<TaskId> {
        self.add_suite_with(parent, name, RunMode::Run, ComputeMode::Serial)
    }

    /// Append a suite under `parent` with explicit collection-time modes.
    pub fn add_suite_with(
        &mut self,
        parent: TaskId,
        name: impl Into<String>,
        mode: RunMode,
        compute_mode: ComputeMode,
    ) -> Result<TaskId> {
        self.add_child(
            parent,
            name.into(),
            mode,
            compute_mode,
            TaskKind::Suite { tasks: Vec::new() },
        )
    }

    /// Append a `run`/`serial` test under `parent`.
    pub fn add_test(&mut self, parent: TaskId, name: impl Into<String>) -> Result<TaskId> {
        self.add_test_with(parent, name, RunMode::Run, ComputeMode::Serial)
    }

    /// Append a test under `parent` with explicit collection-time modes.
    pub fn add_test_with(
        &mut self,
        parent: TaskId,
        name: impl Into<String>,
        mode: RunMode,
        compute_mode: ComputeMode,
    ) -> Result<TaskId> {
        self.add_child(parent, name.into(), mode, compute_mode, TaskKind::Test)
    }

    fn add_child(
        &mut self,
        parent: TaskId,
        name: String,
        mode: RunMode,
        compute_mode: ComputeMode,
        kind: TaskKind,
    ) -> Result<TaskId> {
        let parent_task = self.task(parent);
        if parent_task.is_test() {
            return Err(anyhow!(
                "cannot add '{}' under test '{}'",
                name,
                parent_task.name
            ));
        }
        // A child of the root belongs to that root's file; deeper children
        // inherit the parent's file reference.
        let file = parent_task.file.or(Some(parent));
        let id = TaskId(self.tasks.len());
        self.tasks.push(Task {
            id,
            name,
            mode,
            compute_mode,
            suite: Some(parent),
            file,
            result: None,
            kind,
        });
        if let TaskKind::Suite { tasks } = &mut self.tasks[parent.0].kind {
            tasks.push(id);
        }
        Ok(id)
    }

    /// Record the outcome for `id`.
    ///
    /// The execution engine assigns each task's result exactly once per run;
    /// a second assignment is rejected.
    pub fn set_result(&mut self, id: TaskId, result: TaskResult) -> Result<()> {
        let task = self.task_mut(id);
        if task.result.is_some() {
            return Err(anyhow!("result for '{}' already recorded", task.name));
        }
        debug!(task = %task.name, state = ?result.state, "recorded result");
        task.result = Some(result);
        Ok(())
    }

    /// Drop every recorded result so the same arena can serve a rerun.
    pub fn clear_results(&mut self) {
        for task in &mut self.tasks {
            task.result = None;
        }
    }
}
