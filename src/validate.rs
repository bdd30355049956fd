//! Folder-level cross-validation of the audio and text file sets.

use serde::Serialize;

use crate::error::{ParseError, ValidationError};
use crate::parsers::{audio, text};
use crate::registry::BookId;

/// A file handed in by the I/O layer.
///
/// `size` is carried through for the upload layer; validation itself only
/// looks at names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub name: String,
    pub size: u64,
}

impl FileEntry {
    pub fn new(name: impl Into<String>, size: u64) -> FileEntry {
        FileEntry { name: name.into(), size }
    }
}

/// Outcome of validating one folder.
///
/// Book collections and file counts are reported even when invalid, so the
/// caller can render partial diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<String>,
    /// Books seen in audio filenames, in first-seen order, deduplicated.
    pub audio_books: Vec<BookId>,
    /// Books seen in text filenames, in first-seen order, deduplicated.
    pub text_books: Vec<BookId>,
    pub total_audio_files: usize,
    pub total_text_files: usize,
}

impl ValidationResult {
    /// The error list rendered as user-facing diagnostic strings.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }
}

/// Parse every file in `files`, collecting distinct books in first-seen order
/// and one error per failing file. No failure stops the sweep.
fn extract_books(
    files: &[FileEntry],
    parse: impl Fn(&str) -> Result<BookId, ParseError>,
) -> (Vec<BookId>, Vec<ValidationError>) {
    let mut books: Vec<BookId> = Vec::new();
    let mut errors = Vec::new();
    for file in files {
        match parse(&file.name) {
            Ok(book) => {
                if !books.contains(&book) {
                    books.push(book);
                }
            }
            Err(source) => {
                errors.push(ValidationError::File { filename: file.name.clone(), source });
            }
        }
    }
    (books, errors)
}

/// Validate that the audio and text file sets describe the same books.
pub(crate) fn validate_folder(
    audio_files: &[FileEntry],
    text_files: &[FileEntry],
) -> ValidationResult {
    let mut errors = Vec::new();
    let warnings = Vec::new();

    // Both categories are checked before bailing, so an empty folder reports
    // both problems at once.
    if audio_files.is_empty() {
        errors.push(ValidationError::NoAudioFiles);
    }
    if text_files.is_empty() {
        errors.push(ValidationError::NoTextFiles);
    }
    if !errors.is_empty() {
        return ValidationResult {
            valid: false,
            errors,
            warnings,
            audio_books: Vec::new(),
            text_books: Vec::new(),
            total_audio_files: audio_files.len(),
            total_text_files: text_files.len(),
        };
    }

    let (audio_books, audio_errors) =
        extract_books(audio_files, |name| audio::parse_audio_filename(name).map(|p| p.book_id()));
    errors.extend(audio_errors);

    let (text_books, text_errors) =
        extract_books(text_files, |name| text::parse_text_filename(name).map(|p| p.book_id()));
    errors.extend(text_errors);

    let audio_only: Vec<BookId> =
        audio_books.iter().filter(|book| !text_books.contains(book)).copied().collect();
    let text_only: Vec<BookId> =
        text_books.iter().filter(|book| !audio_books.contains(book)).copied().collect();

    if !audio_only.is_empty() {
        errors.push(ValidationError::AudioOnlyBooks(audio_only));
    }
    if !text_only.is_empty() {
        errors.push(ValidationError::TextOnlyBooks(text_only));
    }

    if audio_books.is_empty() {
        errors.push(ValidationError::NoValidAudioFiles);
    }
    if text_books.is_empty() {
        errors.push(ValidationError::NoValidTextFiles);
    }

    ValidationResult {
        valid: errors.is_empty(),
        errors,
        warnings,
        audio_books,
        text_books,
        total_audio_files: audio_files.len(),
        total_text_files: text_files.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(names: &[&str]) -> Vec<FileEntry> {
        names.iter().map(|name| FileEntry::new(*name, 1024)).collect()
    }

    #[test]
    fn a_matching_folder_is_valid() {
        let audio = files(&[
            "N2_ANL_BSM_001_MAT_001_VOX.mp3",
            "N2_ANL_BSM_001_MAT_002_VOX.mp3",
            "N2_ANL_BSM_002_MRK_001_VOX.mp3",
        ]);
        let text = files(&["040MAT.usx", "041MRK.usx"]);

        let result = validate_folder(&audio, &text);
        assert!(result.valid, "unexpected errors: {:?}", result.error_messages());
        assert_eq!(result.audio_books.len(), 2);
        assert_eq!(result.audio_books[0].as_str(), "MAT");
        assert_eq!(result.audio_books[1].as_str(), "MRK");
        assert_eq!(result.text_books, result.audio_books);
        assert_eq!(result.total_audio_files, 3);
        assert_eq!(result.total_text_files, 2);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn empty_categories_short_circuit_with_both_errors() {
        let result = validate_folder(&[], &[]);
        assert!(!result.valid);
        assert_eq!(
            result.error_messages(),
            vec![
                "No audio files found. Expected audio files in .mp3 or .wav format.".to_string(),
                "No text files found. Expected USX files (.usx format).".to_string(),
            ]
        );
        assert!(result.audio_books.is_empty());
        assert_eq!(result.total_audio_files, 0);
    }

    #[test]
    fn one_empty_category_still_reports_the_other_count() {
        let audio = files(&["N2_ANL_BSM_001_MAT_001_VOX.mp3"]);
        let result = validate_folder(&audio, &[]);
        assert_eq!(
            result.error_messages(),
            vec!["No text files found. Expected USX files (.usx format).".to_string()]
        );
        assert_eq!(result.total_audio_files, 1);
        assert_eq!(result.total_text_files, 0);
        // The short circuit happens before any filename is parsed.
        assert!(result.audio_books.is_empty());
    }

    #[test]
    fn book_set_mismatches_are_reported_per_direction() {
        let audio = files(&["N2_ANL_BSM_001_MAT_001_VOX.mp3"]);
        let text = files(&["040MAT.usx", "041MRK.usx"]);

        let result = validate_folder(&audio, &text);
        assert!(!result.valid);
        assert_eq!(
            result.error_messages(),
            vec!["Text files contain books not found in audio: MRK".to_string()]
        );
    }

    #[test]
    fn every_file_is_parsed_even_after_failures() {
        let audio = files(&["bad.txt", "N2_ANL_BSM_001_MAT_001_VOX.mp3", "also_bad.doc"]);
        let text = files(&["040MAT.usx"]);

        let result = validate_folder(&audio, &text);
        assert_eq!(
            result.error_messages(),
            vec![
                "bad.txt: Audio file must end with .mp3 or .wav: bad.txt".to_string(),
                "also_bad.doc: Audio file must end with .mp3 or .wav: also_bad.doc".to_string(),
            ]
        );
        assert_eq!(result.audio_books.len(), 1);
        assert_eq!(result.total_audio_files, 3);
    }

    #[test]
    fn all_invalid_audio_reports_no_valid_files() {
        let audio = files(&["one.txt", "two.txt"]);
        let text = files(&["040MAT.usx"]);

        let result = validate_folder(&audio, &text);
        let messages = result.error_messages();
        assert!(messages.contains(&"Text files contain books not found in audio: MAT".to_string()));
        assert!(messages.contains(&"No valid audio files found after validation".to_string()));
        assert!(result.audio_books.is_empty());
        assert_eq!(result.text_books.len(), 1);
    }

    #[test]
    fn duplicate_books_collapse_in_first_seen_order() {
        let audio = files(&[
            "ENGESVN2DA_B002_MRK_001.mp3",
            "N2_ANL_BSM_001_MAT_001_VOX.mp3",
            "ENGESVN2DA_B002_MRK_002.mp3",
        ]);
        let text = files(&["041MRK.usx", "040MAT.usx"]);

        let result = validate_folder(&audio, &text);
        assert!(result.valid);
        let audio_codes: Vec<&str> = result.audio_books.iter().map(|b| b.as_str()).collect();
        assert_eq!(audio_codes, vec!["MRK", "MAT"]);
        let text_codes: Vec<&str> = result.text_books.iter().map(|b| b.as_str()).collect();
        assert_eq!(text_codes, vec!["MRK", "MAT"]);
    }
}
