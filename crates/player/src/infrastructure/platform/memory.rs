//! In-memory display target for tests and headless runs

use crate::ports::outbound::DisplayTarget;

/// Keeps the last content it was given
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryTarget {
    content: String,
    writes: usize,
}

impl MemoryTarget {
    pub fn content(&self) -> &str {
        &self.content
    }

    /// How many times content has been set
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl DisplayTarget for MemoryTarget {
    fn set_content(&mut self, content: &str) {
        self.content.clear();
        self.content.push_str(content);
        self.writes += 1;
    }
}
