//! Composite nodes: ordered multi-child control flow.
//!
//! The memory variants remember which child last returned `Running` and
//! resume there on the next tick; the plain variants re-run every child from
//! the first, which lets earlier conditions veto a branch that had already
//! started running.

use bt_core::{Blackboard, Node, Status};

/// Runs children in order; the first non-`Success` status short-circuits and
/// is returned as-is (so `Failure`, `Running`, and `Error` all stop the
/// scan). `Success` only when every child succeeded.
pub struct Sequence {
    children: Vec<Box<dyn Node>>,
}

impl Sequence {
    pub fn new(children: Vec<Box<dyn Node>>) -> Self {
        Self { children }
    }
}

impl Node for Sequence {
    fn tick(&mut self, blackboard: &mut Blackboard) -> Status {
        for child in &mut self.children {
            let status = child.tick(blackboard);
            if status != Status::Success {
                return status;
            }
        }
        Status::Success
    }
}

/// [`Sequence`] with memory: while a child is `Running`, earlier children are
/// skipped on re-entry and evaluation resumes at that child. The remembered
/// position is cleared the moment the child returns anything else.
pub struct MemSequence {
    children: Vec<Box<dyn Node>>,
    last_running: Option<usize>,
}

impl MemSequence {
    pub fn new(children: Vec<Box<dyn Node>>) -> Self {
        Self {
            children,
            last_running: None,
        }
    }
}

impl Node for MemSequence {
    fn tick(&mut self, blackboard: &mut Blackboard) -> Status {
        for (index, child) in self.children.iter_mut().enumerate() {
            if let Some(resume_at) = self.last_running {
                if index != resume_at {
                    continue;
                }
            }

            let status = child.tick(blackboard);
            if status == Status::Running {
                self.last_running = Some(index);
                return Status::Running;
            }

            self.last_running = None;
            if status != Status::Success {
                return status;
            }
        }
        Status::Success
    }
}

/// Selector: runs children in order and returns the first non-`Failure`
/// status; `Failure` only when every child failed.
pub struct Priority {
    children: Vec<Box<dyn Node>>,
}

impl Priority {
    pub fn new(children: Vec<Box<dyn Node>>) -> Self {
        Self { children }
    }
}

impl Node for Priority {
    fn tick(&mut self, blackboard: &mut Blackboard) -> Status {
        for child in &mut self.children {
            let status = child.tick(blackboard);
            if status != Status::Failure {
                return status;
            }
        }
        Status::Failure
    }
}

/// [`Priority`] with the same resume-at-running-child memory as
/// [`MemSequence`].
pub struct MemPriority {
    children: Vec<Box<dyn Node>>,
    last_running: Option<usize>,
}

impl MemPriority {
    pub fn new(children: Vec<Box<dyn Node>>) -> Self {
        Self {
            children,
            last_running: None,
        }
    }
}

impl Node for MemPriority {
    fn tick(&mut self, blackboard: &mut Blackboard) -> Status {
        for (index, child) in self.children.iter_mut().enumerate() {
            if let Some(resume_at) = self.last_running {
                if index != resume_at {
                    continue;
                }
            }

            let status = child.tick(blackboard);
            if status == Status::Running {
                self.last_running = Some(index);
                return Status::Running;
            }

            self.last_running = None;
            if status != Status::Failure {
                return status;
            }
        }
        Status::Failure
    }
}
