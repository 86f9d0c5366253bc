//! Display log: what the user sees, in arrival order.

use std::fmt;

/// Who a display line is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    /// Local notices (connection status)
    System,
    /// Anything the relay sent, including our own echoed messages
    Server,
    /// What the user typed
    Me,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::System => "system",
            Label::Server => "server",
            Label::Me => "me",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rendered line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayEntry {
    pub label: Label,
    pub text: String,
}

impl DisplayEntry {
    pub fn new(label: Label, text: impl Into<String>) -> Self {
        Self {
            label,
            text: text.into(),
        }
    }
}

impl fmt::Display for DisplayEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.text)
    }
}

/// Append-only sequence of display entries for one session
#[derive(Debug, Default)]
pub struct DisplayLog {
    entries: Vec<DisplayEntry>,
}

impl DisplayLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line and return it
    pub fn push(&mut self, label: Label, text: impl Into<String>) -> &DisplayEntry {
        self.entries.push(DisplayEntry::new(label, text));
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[DisplayEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&DisplayEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_renders_label_then_text() {
        // テスト項目: 表示行は "<ラベル>: <本文>" 形式で描画される
        let entry = DisplayEntry::new(Label::Server, "abc: hi");
        assert_eq!(entry.to_string(), "server: abc: hi");
        assert_eq!(DisplayEntry::new(Label::Me, "hi").to_string(), "me: hi");
    }

    #[test]
    fn test_log_preserves_arrival_order() {
        // テスト項目: ログは追加された順序を保つ
        // given (前提条件):
        let mut log = DisplayLog::new();

        // when (操作):
        log.push(Label::System, "one");
        log.push(Label::Server, "two");
        let last = log.push(Label::Me, "three").clone();

        // then (期待する結果):
        assert_eq!(log.len(), 3);
        assert_eq!(last, DisplayEntry::new(Label::Me, "three"));
        let labels: Vec<Label> = log.entries().iter().map(|e| e.label).collect();
        assert_eq!(labels, vec![Label::System, Label::Server, Label::Me]);
    }
}
