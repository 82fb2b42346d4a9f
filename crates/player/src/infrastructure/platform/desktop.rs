//! Desktop display target
//!
//! Renders the readout to a terminal (or any `io::Write`), turning the
//! line-break marker back into newlines.

use std::io::{self, Write};

use crate::ports::outbound::DisplayTarget;

/// Writes each flushed frame to stdout or a supplied writer
#[derive(Debug)]
pub struct TerminalTarget<W: Write = io::Stdout> {
    writer: W,
    line_break: String,
}

impl TerminalTarget<io::Stdout> {
    pub fn stdout(line_break: impl Into<String>) -> Self {
        Self::with_writer(io::stdout(), line_break)
    }
}

impl<W: Write> TerminalTarget<W> {
    pub fn with_writer(writer: W, line_break: impl Into<String>) -> Self {
        Self {
            writer,
            line_break: line_break.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn render(&self, content: &str) -> String {
        if self.line_break.is_empty() || self.line_break == "\n" {
            content.to_string()
        } else {
            content.replace(&self.line_break, "\n")
        }
    }
}

impl<W: Write> DisplayTarget for TerminalTarget<W> {
    fn set_content(&mut self, content: &str) {
        let rendered = self.render(content);
        let result = self
            .writer
            .write_all(rendered.as_bytes())
            .and_then(|()| self.writer.flush());
        if let Err(e) = result {
            tracing::warn!(error = %e, "Failed to write debug readout to terminal");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_breaks_become_newlines() {
        let mut target = TerminalTarget::with_writer(Vec::new(), "<br/>");
        target.set_content("a b<br/>c<br/>");
        assert_eq!(target.into_inner(), b"a b\nc\n");
    }

    #[test]
    fn test_plain_newline_config_passes_through() {
        let mut target = TerminalTarget::with_writer(Vec::new(), "\n");
        target.set_content("x\ny\n");
        assert_eq!(target.into_inner(), b"x\ny\n");
    }

    #[test]
    fn test_empty_frame_writes_nothing() {
        let mut target = TerminalTarget::with_writer(Vec::new(), "<br/>");
        target.set_content("");
        assert!(target.into_inner().is_empty());
    }
}
