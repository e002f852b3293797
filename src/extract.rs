//! Extraction of a human-authored message from raw assertion failures.
//!
//! Grading suites attach a custom message to their assertions; the raw
//! failure text the engine records buries it inside the assertion diff.
//! Two textual rules recover it, tried in a fixed order for each message:
//! the `expect(<expr>, "<text>")` call shape first, then the prefix before
//! a `": expected"` marker. The first rule to fire on any message ends the
//! whole search; later messages are never consulted.

use lazy_static::lazy_static;
use regex::Regex;
use unicode_width::UnicodeWidthStr;

/// Maximum display columns per line when reflowing a single-line message.
pub const WRAP_COLUMNS: usize = 68;

lazy_static! {
    static ref EXPECT_CALL: Regex =
        Regex::new(r#"expect\(\s*[^,]+,\s*['"](.*?)['"]\s*\)"#).unwrap();
}

/// Rule 1: the custom-message argument of an assertion call.
///
/// Matches a call-shaped fragment `expect(<expr>, "<text>")` or
/// `expect(<expr>, '<text>')` anywhere in the message and returns
/// `<text>`.
pub fn expect_call_message(message: &str) -> Option<String> {
    EXPECT_CALL
        .captures(message)
        .map(|caps| caps[1].to_string())
}

/// Rule 2: the prefix before the assertion library's `": expected"`
/// marker.
pub fn assertion_prefix(message: &str) -> Option<String> {
    message
        .find(": expected")
        .map(|idx| message[..idx].to_string())
}

/// Search the ordered message sequence for a custom message.
///
/// For each message rule 1 is tried, then rule 2. The first hit wins and
/// short-circuits everything: this is first-message-first-match, not
/// best-match. `None` means neither rule fired on any message.
pub fn find_custom_message<S: AsRef<str>>(messages: &[S]) -> Option<String> {
    for message in messages {
        let message = message.as_ref();
        if let Some(text) = expect_call_message(message) {
            return Some(text);
        }
        if let Some(prefix) = assertion_prefix(message) {
            return Some(prefix);
        }
    }
    None
}

/// Reflow a candidate message for fixed-width display.
///
/// A message that already contains a line break was formatted by its
/// author and passes through untouched. Anything else is greedily wrapped
/// at whitespace into lines of at most `width` display columns; a single
/// word wider than the limit is never split. A message with no wrappable
/// content also passes through untouched.
pub fn reflow(message: &str, width: usize) -> String {
    if message.contains('\n') {
        return message.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    for word in message.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
        } else if line.width() + 1 + word.width() <= width {
            line.push(' ');
            line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }

    if lines.is_empty() {
        return message.to_string();
    }
    lines.join("\n")
}
