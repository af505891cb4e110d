//! Presentation side: output frames and the sinks that show them
//!
//! The calculator produces exactly two strings: the expression preview and
//! the buffer. A [`DisplaySink`] receives them whenever they change.
//! [`RecordingSink`] keeps both element texts plus every write, which is
//! what tests and scripted runs inspect.

use crate::core::format::truncate_display;
use serde::Serialize;

/// Snapshot of both output lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    /// Expression preview line
    pub expression: String,
    /// Full buffer text
    pub buffer: String,
}

impl Frame {
    /// Creates a frame
    #[must_use]
    pub fn new(expression: impl Into<String>, buffer: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            buffer: buffer.into(),
        }
    }

    /// Buffer as rendered on a display `width` characters wide
    #[must_use]
    pub fn buffer_text(&self, width: usize) -> &str {
        truncate_display(&self.buffer, width)
    }

    /// Serializes the frame to JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Receives the calculator's two output strings
pub trait DisplaySink {
    /// Replaces the expression line
    fn set_expression(&mut self, text: &str);

    /// Replaces the main display
    fn set_display(&mut self, text: &str);

    /// Shows a frame, truncating the buffer to `width`
    fn render(&mut self, frame: &Frame, width: usize) {
        self.set_expression(&frame.expression);
        self.set_display(frame.buffer_text(width));
    }
}

/// One write observed by a [`RecordingSink`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "target", content = "text", rename_all = "snake_case")]
pub enum SinkWrite {
    /// `set_expression` call
    Expression(String),
    /// `set_display` call
    Display(String),
}

/// Sink that keeps the current element texts and a write log
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSink {
    expression: String,
    display: String,
    writes: Vec<SinkWrite>,
}

impl RecordingSink {
    /// Creates an empty sink
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current expression element text
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Current display element text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Every write, oldest first
    #[must_use]
    pub fn writes(&self) -> &[SinkWrite] {
        &self.writes
    }

    /// All texts the display element has shown, oldest first
    #[must_use]
    pub fn display_history(&self) -> Vec<&str> {
        self.writes
            .iter()
            .filter_map(|w| match w {
                SinkWrite::Display(text) => Some(text.as_str()),
                SinkWrite::Expression(_) => None,
            })
            .collect()
    }

    /// Current texts as a frame
    #[must_use]
    pub fn frame(&self) -> Frame {
        Frame::new(self.expression.clone(), self.display.clone())
    }

    /// Forgets the write log, keeping the current texts
    pub fn clear_writes(&mut self) {
        self.writes.clear();
    }
}

impl DisplaySink for RecordingSink {
    fn set_expression(&mut self, text: &str) {
        self.expression = text.to_string();
        self.writes.push(SinkWrite::Expression(text.to_string()));
    }

    fn set_display(&mut self, text: &str) {
        self.display = text.to_string();
        self.writes.push(SinkWrite::Display(text.to_string()));
    }
}
