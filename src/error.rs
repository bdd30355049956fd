//! Failure taxonomy for filename parsing and folder validation.
//!
//! Every failure is an ordinary value, never a panic, so the validator can
//! keep aggregating after any individual file fails. The `Display` output of
//! each variant is the exact diagnostic string the upload UI renders; wording
//! changes here are breaking changes.

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::registry::BookId;

/// A filename or folder-name parsing failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The 3-letter code is absent from the registry even after correction.
    /// Carries the rendered correction table for the diagnostic.
    #[error("BookId \"{code}\" is not known. Available corrections: {corrections}")]
    UnknownBookCode { code: String, corrections: &'static str },

    #[error("Audio file must end with .mp3 or .wav: {0}")]
    AudioExtension(String),

    #[error("VOX filename expected to have 7 parts, got {got}: {filename}")]
    VoxPartCount { filename: String, got: usize },

    /// The VOX drama prefix starts with something other than N, O, or P.
    #[error("Unknown media type: {0}")]
    UnknownMediaType(String),

    #[error("Invalid chapter number: {0}")]
    InvalidChapter(String),

    #[error("V4 filename expected at least 4 parts, got {got}: {filename}")]
    V4PartCount { filename: String, got: usize },

    /// The V4 book-sequence field starts with something other than A or B.
    #[error("Invalid A/B prefix: {0}")]
    InvalidTestamentPrefix(String),

    #[error("Invalid chapter end number: {0}")]
    InvalidChapterEnd(String),

    #[error("No valid book code found in audio filename: {0}")]
    NoAudioBookCode(String),

    #[error("Text file must be .usx format: {0}")]
    TextExtension(String),

    #[error("USX file must end with .usx: {0}")]
    UsxExtension(String),

    #[error("USX files expected in format 001GEN.usx, 040MAT.usx, or GEN.usx, got: {0}")]
    UsxShape(String),

    #[error("No valid book code found in USX filename: {0}")]
    NoTextBookCode(String),

    #[error("Folder name does not match expected pattern. Expected: N1/N2/O1/O2 + 3-letter ISO + Bible ID. Got: {0}")]
    FolderPattern(String),

    #[error("Core folder name does not match expected pattern. Expected: N1/N2/O1/O2 + 3-letter ISO + Bible ID. Got: {0}")]
    FolderCorePattern(String),
}

/// A folder-level failure produced by [`crate::validate_folder`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("No audio files found. Expected audio files in .mp3 or .wav format.")]
    NoAudioFiles,

    #[error("No text files found. Expected USX files (.usx format).")]
    NoTextFiles,

    /// One file failed to parse; the message is prefixed with the filename so
    /// the diagnostic list is self-contained.
    #[error("{filename}: {source}")]
    File { filename: String, source: ParseError },

    #[error("Audio files contain books not found in text: {}", join_codes(.0))]
    AudioOnlyBooks(Vec<BookId>),

    #[error("Text files contain books not found in audio: {}", join_codes(.0))]
    TextOnlyBooks(Vec<BookId>),

    #[error("No valid audio files found after validation")]
    NoValidAudioFiles,

    #[error("No valid text files found after validation")]
    NoValidTextFiles,
}

fn join_codes(books: &[BookId]) -> String {
    books.iter().map(BookId::as_str).collect::<Vec<_>>().join(", ")
}

// The UI consumes diagnostics as plain strings.
impl Serialize for ParseError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;

    #[test]
    fn file_errors_prefix_the_filename() {
        let err = ValidationError::File {
            filename: "song.txt".to_string(),
            source: ParseError::AudioExtension("song.txt".to_string()),
        };
        assert_eq!(err.to_string(), "song.txt: Audio file must end with .mp3 or .wav: song.txt");
    }

    #[test]
    fn mismatch_errors_join_codes_in_order() {
        let books = vec![registry::resolve("MRK").unwrap(), registry::resolve("LUK").unwrap()];
        let err = ValidationError::TextOnlyBooks(books);
        assert_eq!(err.to_string(), "Text files contain books not found in audio: MRK, LUK");
    }

    #[test]
    fn errors_serialize_as_display_strings() {
        let err = ValidationError::NoAudioFiles;
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, "\"No audio files found. Expected audio files in .mp3 or .wav format.\"");
    }
}
