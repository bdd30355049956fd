//! Last-resort book-code extraction shared by the audio and text parsers.

use regex::Regex;

use crate::registry::{self, BookId};

/// The ordered extraction strategies.
///
/// Only the first match of each pattern is considered: a candidate that is
/// not a registry member moves on to the next strategy, not to the next match
/// of the same pattern. Spelling corrections are NOT applied on this path;
/// exact registry membership is required.
fn strategies() -> [&'static Regex; 4] {
    [
        // _MAT_ or _MAT001: a 3-letter run bounded by non-letters
        regex!(r"[^A-Za-z]([A-Z]{3})[^A-Za-z]"),
        // MAT_001: anchored at the start
        regex!(r"^([A-Z]{3})[^A-Za-z]"),
        // 040MAT: anchored at the end
        regex!(r"[^A-Za-z]([A-Z]{3})$"),
        // any 3 consecutive uppercase letters
        regex!(r"([A-Z]{3})"),
    ]
}

/// Strip a trailing media extension (case-insensitive), if present.
pub(crate) fn strip_media_extension(filename: &str) -> &str {
    match regex!(r"(?i)\.(mp3|wav|usx)$").find(filename) {
        Some(found) => &filename[..found.start()],
        None => filename,
    }
}

/// Scan `filename` for a registered 3-letter book code.
pub(crate) fn extract_book_code(filename: &str) -> Option<BookId> {
    let name = strip_media_extension(filename);
    for pattern in strategies() {
        if let Some(caps) = pattern.captures(name) {
            if let Some(book) = caps.get(1).and_then(|m| registry::lookup_exact(m.as_str())) {
                return Some(book);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_run_wins_over_later_strategies() {
        let book = extract_book_code("x_MAT_001.mp3").unwrap();
        assert_eq!(book.as_str(), "MAT");
    }

    #[test]
    fn anchored_at_start_and_end() {
        assert_eq!(extract_book_code("MAT_001.mp3").unwrap().as_str(), "MAT");
        assert_eq!(extract_book_code("040MAT.usx").unwrap().as_str(), "MAT");
    }

    #[test]
    fn bare_three_letter_run() {
        assert_eq!(extract_book_code("MAT.mp3").unwrap().as_str(), "MAT");
    }

    #[test]
    fn unregistered_codes_never_match() {
        assert_eq!(extract_book_code("XYZ_001.mp3"), None);
    }

    #[test]
    fn corrections_are_not_applied_here() {
        // PSM corrects to PSA during resolution, but the fallback path
        // requires exact membership.
        assert_eq!(extract_book_code("PSM_001.mp3"), None);
    }

    #[test]
    fn only_the_first_match_per_strategy_is_considered() {
        // ZZZ is the first match of every applicable strategy, so MAT in the
        // middle of the name is never reached.
        assert_eq!(extract_book_code("0ZZZ0MAT0.mp3"), None);
        // With MAT at the end, the end-anchored strategy finds it.
        assert_eq!(extract_book_code("0ZZZ0MAT.mp3").unwrap().as_str(), "MAT");
    }

    #[test]
    fn lowercase_runs_are_ignored() {
        assert_eq!(extract_book_code("mat_001.mp3"), None);
    }
}
