use thiserror::Error;

/// A bounded collection refused a push.
///
/// Per-frame collections never grow past their configured bound; the caller
/// decides whether that is recoverable (frame cache) or a contract violation
/// (style stacks, widget storage).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("capacity exhausted ({len}/{capacity})")]
pub struct CapacityError {
    pub len: usize,
    pub capacity: usize,
}
