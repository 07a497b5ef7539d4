//! # Queue task.
//!
//! [`QueueTask`] pairs a caller-chosen identifier with the payload handed to the
//! executor. Identifiers must be unique within a batch; the payload is opaque to
//! the runner and is cloned once per attempt.

use std::borrow::Cow;

/// One identified unit of work.
///
/// ## Example
/// ```rust
/// use taskqueue::QueueTask;
///
/// let task = QueueTask::new("flag-checkout", 42u32);
/// assert_eq!(task.id(), "flag-checkout");
/// assert_eq!(*task.data(), 42);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueueTask<D> {
    id: String,
    data: D,
}

impl<D> QueueTask<D> {
    /// Creates a new task.
    pub fn new(id: impl Into<Cow<'static, str>>, data: D) -> Self {
        Self {
            id: id.into().into_owned(),
            data,
        }
    }

    /// Returns the task identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns a reference to the payload.
    pub fn data(&self) -> &D {
        &self.data
    }

    /// Splits the task into identifier and payload.
    pub fn into_parts(self) -> (String, D) {
        (self.id, self.data)
    }
}

impl<D> From<(String, D)> for QueueTask<D> {
    fn from((id, data): (String, D)) -> Self {
        Self { id, data }
    }
}
