//! Async task bookkeeping.
//!
//! The runtime announces each spawned task with a `TaskStarted` and reports
//! its outcome with a `TaskCompleted`. Only the reducer mutates `TaskState`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TaskStarted {
    pub id: TaskId,
}

#[derive(Debug)]
pub struct TaskCompleted<T> {
    pub id: TaskId,
    pub result: T,
}

#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn on_started(&mut self, started: TaskStarted) {
        self.active = Some(started.id);
    }

    /// Clears the task if `id` is the active one. Stale completions return false.
    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.active = None;
        }
        ok
    }
}
