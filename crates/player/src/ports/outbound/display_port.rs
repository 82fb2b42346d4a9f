//! DisplayTarget - where a flushed debug readout is shown
//!
//! The browser build writes into a DOM element; the desktop build writes
//! to the terminal. Tests use `MockDisplayTarget` or `MemoryTarget`.

/// A surface with a single writable block of text
#[cfg_attr(test, mockall::automock)]
pub trait DisplayTarget {
    /// Replace whatever the target shows with `content`
    fn set_content(&mut self, content: &str);
}
