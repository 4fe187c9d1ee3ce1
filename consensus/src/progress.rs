//! Progress notifications for the admission pipeline.
//!
//! Sinks receive human-readable milestones (quorum start, each ballot,
//! settlement, final verdict) synchronously and in emission order. A sink is
//! write-only: nothing it does feeds back into admission.

/// Receives admission milestones.
pub trait ProgressSink {
    fn notify(&mut self, message: &str);
}

impl<F> ProgressSink for F
where
    F: FnMut(&str),
{
    fn notify(&mut self, message: &str) {
        self(message)
    }
}

impl ProgressSink for Vec<String> {
    fn notify(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

/// Discards every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn notify(&mut self, _message: &str) {}
}
