//! Nullable progress sink: captures admission milestones for assertions.

use permchain_consensus::ProgressSink;

/// Records every notification in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingProgress {
    messages: Vec<String>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Whether any recorded message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.contains(needle))
    }

    pub fn last(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }
}

impl ProgressSink for RecordingProgress {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let mut sink = RecordingProgress::new();
        sink.notify("quorum");
        sink.notify("accepted");
        assert_eq!(sink.messages(), ["quorum", "accepted"]);
        assert!(sink.contains("quor"));
        assert_eq!(sink.last(), Some("accepted"));
    }
}
