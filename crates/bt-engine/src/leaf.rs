//! Stock leaf nodes.
//!
//! The fixed-status leaves exist so tree authors (and tests) can exercise
//! every control-flow path without host-specific behaviors; `Wait` is the
//! one stock leaf with real multi-tick semantics.

use std::time::{Duration, Instant};

use bt_core::{Blackboard, Node, Status};
use tracing::trace;

/// Always returns `Success`.
pub struct Succeeder;

impl Node for Succeeder {
    fn tick(&mut self, _blackboard: &mut Blackboard) -> Status {
        trace!("succeeder");
        Status::Success
    }
}

/// Always returns `Failure`.
pub struct Failer;

impl Node for Failer {
    fn tick(&mut self, _blackboard: &mut Blackboard) -> Status {
        trace!("failer");
        Status::Failure
    }
}

/// Always returns `Running`.
pub struct Runner;

impl Node for Runner {
    fn tick(&mut self, _blackboard: &mut Blackboard) -> Status {
        trace!("runner");
        Status::Running
    }
}

/// Always returns `Error`. Registered under the type name `"Error"`.
pub struct ErrorLeaf;

impl Node for ErrorLeaf {
    fn tick(&mut self, _blackboard: &mut Blackboard) -> Status {
        trace!("error leaf");
        Status::Error
    }
}

/// Returns `Running` until `milliseconds` of wall-clock time have elapsed
/// since the first tick after being idle, then `Success` and idles again.
pub struct Wait {
    duration: Duration,
    started: Option<Instant>,
}

impl Wait {
    pub fn new(milliseconds: u64) -> Self {
        Self {
            duration: Duration::from_millis(milliseconds),
            started: None,
        }
    }
}

impl Node for Wait {
    fn tick(&mut self, _blackboard: &mut Blackboard) -> Status {
        let started = *self.started.get_or_insert_with(Instant::now);
        if started.elapsed() < self.duration {
            trace!("waiting");
            return Status::Running;
        }

        self.started = None;
        Status::Success
    }
}
