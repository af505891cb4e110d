//! Keyboard adapter
//!
//! Maps `KeyboardEvent.key` names to events, and expands compact key
//! scripts such as `12+7=` for batch evaluation.

use super::CalcEvent;
use crate::core::{DigitKey, Operator};

/// Maps a key name to a calculator event
///
/// | key | event |
/// |---|---|
/// | `0`-`9`, `.` | digit |
/// | `+ - * / %` | operator |
/// | `Enter`, `=` | equals |
/// | `Backspace` | delete |
/// | `c`, `C` | clear |
///
/// Everything else is ignored.
#[must_use]
pub fn key_to_event(key: &str) -> Option<CalcEvent> {
    match key {
        "Enter" | "=" => return Some(CalcEvent::Equals),
        "Backspace" => return Some(CalcEvent::DeleteLast),
        "c" | "C" => return Some(CalcEvent::Clear),
        _ => {}
    }

    let mut chars = key.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return None;
    };
    if let Some(digit) = DigitKey::new(c) {
        return Some(CalcEvent::Digit(digit));
    }
    Operator::from_symbol(c).map(CalcEvent::Operator)
}

/// Events parsed from a key script
///
/// A script is a string of single-character key names. Named keys are
/// written in angle brackets: `<BS>` / `<Backspace>` and `<CR>` /
/// `<Enter>`. Whitespace separates nothing and is dropped; any other
/// unmapped character is recorded in [`KeyScript::skipped`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyScript {
    /// Events in script order
    pub events: Vec<CalcEvent>,
    /// Keys that did not map to an event
    pub skipped: Vec<String>,
}

impl KeyScript {
    /// Parses a key script
    #[must_use]
    pub fn parse(script: &str) -> Self {
        let mut parsed = Self::default();
        let mut rest = script;

        while let Some(c) = rest.chars().next() {
            if c == '<' {
                if let Some(end) = rest.find('>') {
                    let name = &rest[1..end];
                    match named_key(name) {
                        Some(event) => parsed.events.push(event),
                        None => parsed.skipped.push(rest[..=end].to_string()),
                    }
                    rest = &rest[end + 1..];
                    continue;
                }
            }

            rest = &rest[c.len_utf8()..];
            if c.is_whitespace() {
                continue;
            }
            let mut buf = [0u8; 4];
            match key_to_event(c.encode_utf8(&mut buf)) {
                Some(event) => parsed.events.push(event),
                None => parsed.skipped.push(c.to_string()),
            }
        }

        parsed
    }

    /// True when every key was understood
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

fn named_key(name: &str) -> Option<CalcEvent> {
    match name.to_ascii_lowercase().as_str() {
        "bs" | "backspace" => Some(CalcEvent::DeleteLast),
        "cr" | "enter" => Some(CalcEvent::Equals),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(c: char) -> CalcEvent {
        CalcEvent::Digit(DigitKey::new(c).unwrap())
    }

    // ===== key_to_event tests =====

    #[test]
    fn test_digits_and_point() {
        for c in "0123456789.".chars() {
            assert_eq!(key_to_event(&c.to_string()), Some(digit(c)));
        }
    }

    #[test]
    fn test_operators() {
        assert_eq!(key_to_event("+"), Some(CalcEvent::Operator(Operator::Add)));
        assert_eq!(
            key_to_event("-"),
            Some(CalcEvent::Operator(Operator::Subtract))
        );
        assert_eq!(
            key_to_event("*"),
            Some(CalcEvent::Operator(Operator::Multiply))
        );
        assert_eq!(
            key_to_event("/"),
            Some(CalcEvent::Operator(Operator::Divide))
        );
        assert_eq!(
            key_to_event("%"),
            Some(CalcEvent::Operator(Operator::Modulo))
        );
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(key_to_event("Enter"), Some(CalcEvent::Equals));
        assert_eq!(key_to_event("="), Some(CalcEvent::Equals));
        assert_eq!(key_to_event("Backspace"), Some(CalcEvent::DeleteLast));
        assert_eq!(key_to_event("c"), Some(CalcEvent::Clear));
        assert_eq!(key_to_event("C"), Some(CalcEvent::Clear));
    }

    #[test]
    fn test_unmapped_keys() {
        for key in ["F1", "Escape", "Shift", "x", "Delete", "", "12", "^"] {
            assert_eq!(key_to_event(key), None, "{key}");
        }
    }

    // ===== KeyScript tests =====

    #[test]
    fn test_script_simple() {
        let script = KeyScript::parse("12+7=");
        assert!(script.is_clean());
        assert_eq!(
            script.events,
            vec![
                digit('1'),
                digit('2'),
                CalcEvent::Operator(Operator::Add),
                digit('7'),
                CalcEvent::Equals,
            ]
        );
    }

    #[test]
    fn test_script_named_keys() {
        let script = KeyScript::parse("12<BS>3<cr>");
        assert_eq!(
            script.events,
            vec![
                digit('1'),
                digit('2'),
                CalcEvent::DeleteLast,
                digit('3'),
                CalcEvent::Equals,
            ]
        );
    }

    #[test]
    fn test_script_whitespace_dropped() {
        let script = KeyScript::parse(" 5 * 2 ");
        assert!(script.is_clean());
        assert_eq!(script.events.len(), 3);
    }

    #[test]
    fn test_script_skips_unknown() {
        let script = KeyScript::parse("2x3<F5>");
        assert_eq!(script.events, vec![digit('2'), digit('3')]);
        assert_eq!(script.skipped, vec!["x".to_string(), "<F5>".to_string()]);
        assert!(!script.is_clean());
    }

    #[test]
    fn test_script_unclosed_bracket_is_a_key() {
        let script = KeyScript::parse("1<2");
        assert_eq!(script.events, vec![digit('1'), digit('2')]);
        assert_eq!(script.skipped, vec!["<".to_string()]);
    }

    #[test]
    fn test_script_clear() {
        let script = KeyScript::parse("9c");
        assert_eq!(script.events, vec![digit('9'), CalcEvent::Clear]);
    }
}
