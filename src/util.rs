//! Utility functions.

use std::num::NonZeroUsize;
use std::thread;

/// Returns true if the string is empty or contains only whitespace.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Returns true if `s` starts with an ASCII letter and continues with ASCII
/// letters, digits, hyphens or underscores only.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        }
        _ => false,
    }
}

/// Returns the number of processors available to the process, never less
/// than one.
pub fn available_processors() -> i32 {
    let count = thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1);
    i32::try_from(count).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\n"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("a"));
        assert!(is_identifier("group_1-test"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("1abc"));
        assert!(!is_identifier("_abc"));
        assert!(!is_identifier("ab.c"));
        assert!(!is_identifier("ab c"));
        assert!(!is_identifier("grüppe"));
    }

    #[test]
    fn test_available_processors() {
        assert!(available_processors() >= 1);
    }
}
