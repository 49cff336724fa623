/// The result of one evaluation of a behavior node.
///
/// `Running` means the node has not finished and must be re-entered on a
/// later tick; how the traversal resumes is decided by the node's ancestors
/// (memory composites resume at the running child, plain ones restart).
/// `Error` is an abnormal leaf outcome that every ancestor passes through
/// verbatim so the host can surface it for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Success,
    Failure,
    Running,
    Error,
}

impl Status {
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Returns `true` for the two completed outcomes, `Success` and `Failure`.
    ///
    /// Repeat-style decorators loop only over terminal statuses; anything
    /// else short-circuits out of the loop.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Success | Status::Failure)
    }

    /// Swaps `Success` and `Failure`; `Running` and `Error` pass through
    /// unchanged. This is exactly the mapping the `Inverter` decorator
    /// applies to its child.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            other => other,
        }
    }
}
