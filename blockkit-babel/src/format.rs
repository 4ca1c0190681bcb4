//! Formatting options
//!
//! The options are an explicit value passed to the render entry points and carried
//! by the render context. Nothing here is process-wide: two renders with different
//! options can run side by side.

/// Zero-width space used to guard delimiters in exact mode.
pub const ZERO_WIDTH_SPACE: char = '\u{200b}';

/// Knobs that affect how mrkdwn text is produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Guard emphasis delimiters with zero-width spaces so they cannot merge
    /// with adjacent characters (e.g. `foo*bar*baz` stays formatted).
    pub exact_mode: bool,
}

impl FormatOptions {
    /// Options with exact mode switched on.
    pub fn exact() -> Self {
        Self { exact_mode: true }
    }

    /// Delimiters to use for inline styles under these options.
    pub fn delimiters(&self) -> Delimiters {
        if self.exact_mode {
            Delimiters {
                strong: "\u{200b}*\u{200b}",
                emphasis: "\u{200b}_\u{200b}",
                strikethrough: "\u{200b}~\u{200b}",
                code: "\u{200b}`\u{200b}",
            }
        } else {
            Delimiters {
                strong: "*",
                emphasis: "_",
                strikethrough: "~",
                code: "`",
            }
        }
    }
}

/// Concrete delimiter strings for each inline style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    pub strong: &'static str,
    pub emphasis: &'static str,
    pub strikethrough: &'static str,
    pub code: &'static str,
}
