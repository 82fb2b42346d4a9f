//! Debug readout buffer
//!
//! Text printed during a frame accumulates here and is handed to a
//! [`DisplayTarget`] once per display refresh. The buffer is owned by
//! whoever drives the frame loop, so appends and flushes can never race.

use std::fmt;

use crate::config::ReadoutConfig;
use crate::ports::outbound::DisplayTarget;

/// Accumulates debug lines between flushes.
///
/// The contents are always the concatenation of every `print` since the
/// last [`show_readout`](Self::show_readout), each ended by the configured
/// line break.
#[derive(Debug, Default, Clone)]
pub struct DebugReadout {
    buffer: String,
    config: ReadoutConfig,
}

impl DebugReadout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ReadoutConfig) -> Self {
        Self {
            buffer: String::new(),
            config,
        }
    }

    pub fn config(&self) -> &ReadoutConfig {
        &self.config
    }

    /// Appends one line made of `parts` joined by the separator.
    ///
    /// ```
    /// use hudkit_player::DebugReadout;
    ///
    /// let mut readout = DebugReadout::new();
    /// readout.print(["speed", "4.2"]);
    /// assert_eq!(readout.contents(), "speed 4.2<br/>");
    /// ```
    pub fn print<I>(&mut self, parts: I)
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        for (i, part) in parts.into_iter().enumerate() {
            if i > 0 {
                self.buffer.push_str(&self.config.separator);
            }
            self.buffer.push_str(&part.to_string());
        }
        self.buffer.push_str(&self.config.line_break);
    }

    /// Text accumulated since the last flush.
    pub fn contents(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Writes the buffer to `target` and starts the next frame empty.
    ///
    /// Call once per refresh; otherwise the buffer keeps growing.
    pub fn show_readout<T: DisplayTarget + ?Sized>(&mut self, target: &mut T) {
        tracing::trace!(bytes = self.buffer.len(), "Flushing debug readout");
        target.set_content(&self.buffer);
        self.buffer.clear();
    }
}

/// Prints any number of `Display` values as one readout line.
///
/// ```
/// use hudkit_player::{readout_print, DebugReadout};
///
/// let mut readout = DebugReadout::new();
/// readout_print!(readout, "fps", 60);
/// readout_print!(readout);
/// assert_eq!(readout.contents(), "fps 60<br/><br/>");
/// ```
#[macro_export]
macro_rules! readout_print {
    ($readout:expr $(,)?) => {
        $readout.print(::std::iter::empty::<&str>())
    };
    ($readout:expr, $($part:expr),+ $(,)?) => {
        $readout.print([$(::std::format!("{}", $part)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::MemoryTarget;
    use crate::ports::outbound::MockDisplayTarget;
    use hudkit_domain::{vector_to_string, Vec3};

    #[test]
    fn test_print_joins_parts_with_space() {
        let mut readout = DebugReadout::new();
        readout.print(["a", "b"]);
        readout.print(["c"]);
        assert_eq!(readout.contents(), "a b<br/>c<br/>");
    }

    #[test]
    fn test_print_without_parts_adds_line_break() {
        let mut readout = DebugReadout::new();
        readout.print(std::iter::empty::<&str>());
        assert_eq!(readout.contents(), "<br/>");
    }

    #[test]
    fn test_print_mixed_display_values() {
        let mut readout = DebugReadout::new();
        readout_print!(readout, "pos", vector_to_string(&Vec3::new(1.0, 2.0, 3.0)), 7);
        assert_eq!(readout.contents(), "pos (1.000, 2.000, 3.000) 7<br/>");
    }

    #[test]
    fn test_show_readout_flushes_then_clears() {
        let mut readout = DebugReadout::new();
        let mut target = MemoryTarget::default();

        readout_print!(readout, "a", "b");
        readout_print!(readout, "c");
        readout.show_readout(&mut target);
        assert_eq!(target.content(), "a b<br/>c<br/>");
        assert!(readout.is_empty());

        readout.show_readout(&mut target);
        assert_eq!(target.content(), "");
        assert_eq!(target.writes(), 2);
    }

    #[test]
    fn test_show_readout_calls_target_once() {
        let mut target = MockDisplayTarget::new();
        target
            .expect_set_content()
            .withf(|content| content == "hello world<br/>")
            .times(1)
            .return_const(());

        let mut readout = DebugReadout::new();
        readout.print(["hello", "world"]);
        readout.show_readout(&mut target);
    }

    #[test]
    fn test_show_readout_through_trait_object() {
        let mut target: Box<dyn DisplayTarget> = Box::new(MemoryTarget::default());
        let mut readout = DebugReadout::new();
        readout.print(["x"]);
        readout.show_readout(target.as_mut());
        assert!(readout.is_empty());
    }

    #[test]
    fn test_custom_config() {
        let mut readout = DebugReadout::with_config(ReadoutConfig {
            separator: " | ".to_string(),
            line_break: "\n".to_string(),
        });
        readout.print(["hp", "10"]);
        assert_eq!(readout.contents(), "hp | 10\n");
    }
}
