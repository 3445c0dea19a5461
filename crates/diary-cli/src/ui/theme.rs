//! Fixed symbols and control sequences.

/// Clear the whole screen and home the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

/// A line holding only this character ends a free-text block (Ctrl+D).
pub const END_OF_TEXT: &str = "\u{4}";

/// Character used for the rules around an entry.
pub const RULE: char = '=';

/// strftime pattern for entry headers, e.g. "Tuesday March 05, 2024 02:07PM".
pub const TIMESTAMP_FORMAT: &str = "%A %B %d, %Y %I:%M%p";
