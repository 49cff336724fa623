//! Decorator nodes: single-child wrappers that gate or transform their
//! child's invocation and status.
//!
//! Loop bounds and time budgets are extracted from the document into typed
//! fields at build time (see [`crate::registry::Params`] for the defaulting
//! rules) rather than re-read from the blackboard on every tick.

use std::time::{Duration, Instant};

use bt_core::{Blackboard, Node, Status};

/// Synthetic entry point above the document's declared root.
///
/// The builder always wraps the declared root in one of these so the tree has
/// a fixed single-child entry regardless of the declared root's own kind.
pub struct Root {
    child: Box<dyn Node>,
}

impl Root {
    pub fn new(child: Box<dyn Node>) -> Self {
        Self { child }
    }
}

impl Node for Root {
    fn tick(&mut self, blackboard: &mut Blackboard) -> Status {
        self.child.tick(blackboard)
    }
}

/// Re-runs its child up to `maxLoop` times within one tick, short-circuiting
/// on any non-terminal status; the loop itself reports `Success` once the
/// count is exhausted.
///
/// The whole loop runs synchronously inside a single tick; with the default
/// `maxLoop` of 0 the child is never invoked.
pub struct Repeater {
    max_loop: u32,
    child: Box<dyn Node>,
}

impl Repeater {
    pub fn new(max_loop: u32, child: Box<dyn Node>) -> Self {
        Self { max_loop, child }
    }
}

impl Node for Repeater {
    fn tick(&mut self, blackboard: &mut Blackboard) -> Status {
        for _ in 0..self.max_loop {
            let status = self.child.tick(blackboard);
            if !status.is_terminal() {
                return status;
            }
        }
        Status::Success
    }
}

/// Repeats the child until it fails or an optional `maxLoop` bound is
/// reached (`maxLoop == 0` means unbounded). Non-terminal statuses
/// short-circuit; loop exit reports `Success`.
pub struct RepeatUntilFailure {
    max_loop: u32,
    child: Box<dyn Node>,
}

impl RepeatUntilFailure {
    pub fn new(max_loop: u32, child: Box<dyn Node>) -> Self {
        Self { max_loop, child }
    }
}

impl Node for RepeatUntilFailure {
    fn tick(&mut self, blackboard: &mut Blackboard) -> Status {
        let mut count = 0u32;
        loop {
            let status = self.child.tick(blackboard);
            if !status.is_terminal() {
                return status;
            }
            count += 1;

            if status == Status::Failure {
                break;
            }
            if self.max_loop > 0 && count >= self.max_loop {
                break;
            }
        }
        Status::Success
    }
}

/// Symmetric to [`RepeatUntilFailure`]: repeats until the child succeeds or
/// the optional `maxLoop` bound is reached.
pub struct RepeatUntilSuccess {
    max_loop: u32,
    child: Box<dyn Node>,
}

impl RepeatUntilSuccess {
    pub fn new(max_loop: u32, child: Box<dyn Node>) -> Self {
        Self { max_loop, child }
    }
}

impl Node for RepeatUntilSuccess {
    fn tick(&mut self, blackboard: &mut Blackboard) -> Status {
        let mut count = 0u32;
        loop {
            let status = self.child.tick(blackboard);
            if !status.is_terminal() {
                return status;
            }
            count += 1;

            if status == Status::Success {
                break;
            }
            if self.max_loop > 0 && count >= self.max_loop {
                break;
            }
        }
        Status::Success
    }
}

/// Gives its child a wall-clock budget of `maxTime` milliseconds.
///
/// The timer starts on the first tick after being idle. While elapsed time is
/// under budget the child's status is passed through, except `Failure`,
/// which idles the timer and is returned. Once the budget is exceeded the
/// child is not invoked; the timer idles and the node reports `Failure`.
/// A `Success` return leaves the timer armed, exactly like the continuing
/// `Running` case: only the `Failure` paths reset it.
pub struct MaxTime {
    budget: Duration,
    started: Option<Instant>,
    child: Box<dyn Node>,
}

impl MaxTime {
    pub fn new(max_time_ms: u64, child: Box<dyn Node>) -> Self {
        Self {
            budget: Duration::from_millis(max_time_ms),
            started: None,
            child,
        }
    }
}

impl Node for MaxTime {
    fn tick(&mut self, blackboard: &mut Blackboard) -> Status {
        let started = *self.started.get_or_insert_with(Instant::now);
        if started.elapsed() < self.budget {
            let status = self.child.tick(blackboard);
            if status != Status::Failure {
                return status;
            }
        }

        self.started = None;
        Status::Failure
    }
}

/// Swaps `Success` and `Failure`; `Running` and `Error` pass through.
pub struct Inverter {
    child: Box<dyn Node>,
}

impl Inverter {
    pub fn new(child: Box<dyn Node>) -> Self {
        Self { child }
    }
}

impl Node for Inverter {
    fn tick(&mut self, blackboard: &mut Blackboard) -> Status {
        self.child.tick(blackboard).invert()
    }
}

/// Allows at most `maxLoop` delegations to its child over the node's
/// lifetime; once the allowance is spent, every tick returns `Failure`
/// without invoking the child. The counter is never reset.
pub struct Limiter {
    max_loop: u32,
    used: u32,
    child: Box<dyn Node>,
}

impl Limiter {
    pub fn new(max_loop: u32, child: Box<dyn Node>) -> Self {
        Self {
            max_loop,
            used: 0,
            child,
        }
    }
}

impl Node for Limiter {
    fn tick(&mut self, blackboard: &mut Blackboard) -> Status {
        if self.used < self.max_loop {
            self.used += 1;
            self.child.tick(blackboard)
        } else {
            Status::Failure
        }
    }
}
