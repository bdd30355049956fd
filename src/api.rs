//! Public entry points.
//!
//! Everything here is a thin, stable wrapper over the internal modules; the
//! I/O layer (directory listing, upload orchestration, UI) supplies filename
//! lists and consumes the returned values.

use crate::error::ParseError;
use crate::parsers::audio::{ParsedAudioFilename, V4Audio, VoxAudio};
use crate::parsers::folder::FolderNameInfo;
use crate::parsers::text::{ParsedTextFilename, UsxText};
use crate::parsers::{audio, fallback, folder, text};
use crate::registry::{self, BookId, Testament};
use crate::validate;
use crate::validate::{FileEntry, ValidationResult};

/// Resolve and correct a raw 3-letter book code.
///
/// Known misspellings are corrected once before the registry lookup.
///
/// # Example
/// ```
/// use artie::validate_book_id;
///
/// let book = validate_book_id("PSM").unwrap();
/// assert_eq!(book.as_str(), "PSA");
/// ```
pub fn validate_book_id(code: &str) -> Result<BookId, ParseError> {
    registry::resolve(code)
}

/// Testament for a raw code, if it is registered. No correction is applied.
pub fn testament_of(code: &str) -> Option<Testament> {
    registry::testament_of(code)
}

/// Parse an audio filename, trying the VOX grammar, then V4, then the
/// generic fallback.
///
/// # Example
/// ```
/// use artie::{parse_audio_filename, Testament};
///
/// let parsed = parse_audio_filename("N2_ANL_BSM_001_MAT_001_VOX.mp3").unwrap();
/// assert_eq!(parsed.book_id().as_str(), "MAT");
/// assert_eq!(parsed.testament(), Testament::NT);
/// ```
pub fn parse_audio_filename(filename: &str) -> Result<ParsedAudioFilename, ParseError> {
    audio::parse_audio_filename(filename)
}

/// Parse the 7-part VOX grammar directly, with its precise diagnostics.
pub fn parse_vox_audio_filename(filename: &str) -> Result<VoxAudio, ParseError> {
    audio::parse_vox(filename)
}

/// Parse the V4 grammar directly, with its precise diagnostics.
pub fn parse_v4_audio_filename(filename: &str) -> Result<V4Audio, ParseError> {
    audio::parse_v4(filename)
}

/// Parse a text filename, trying the USX grammar, then the generic fallback.
///
/// # Example
/// ```
/// use artie::parse_text_filename;
///
/// let parsed = parse_text_filename("040MAT.usx").unwrap();
/// assert_eq!(parsed.book_id().as_str(), "MAT");
/// assert_eq!(parsed.book_seq(), "040");
/// ```
pub fn parse_text_filename(filename: &str) -> Result<ParsedTextFilename, ParseError> {
    text::parse_text_filename(filename)
}

/// Parse the USX grammar directly, with its precise diagnostics.
pub fn parse_usx_filename(filename: &str) -> Result<UsxText, ParseError> {
    text::parse_usx(filename)
}

/// Scan a filename for any registered 3-letter book code.
///
/// This is the shared last-resort extractor; it never returns a code absent
/// from the registry.
pub fn extract_book_code(filename: &str) -> Option<BookId> {
    fallback::extract_book_code(filename)
}

/// Decompose a folder name into dataset identity.
///
/// # Example
/// ```
/// use artie::parse_folder_name;
///
/// let info = parse_folder_name("N2ANLBSM Khongso (ANL)").unwrap();
/// assert_eq!(info.dataset_name, "ANLBSMN2DA");
/// ```
pub fn parse_folder_name(folder_name: &str) -> Result<FolderNameInfo, ParseError> {
    folder::parse_folder_name(folder_name)
}

/// Validate that a folder's audio and text files describe the same books.
///
/// Every filename is parsed even after earlier failures; only the two
/// empty-category checks short-circuit. The result carries book sets and file
/// counts regardless of validity.
///
/// # Example
/// ```
/// use artie::{validate_folder, FileEntry};
///
/// let audio = vec![FileEntry::new("N2_ANL_BSM_001_MAT_001_VOX.mp3", 4_096)];
/// let text = vec![FileEntry::new("040MAT.usx", 512)];
///
/// let result = validate_folder(&audio, &text);
/// assert!(result.valid);
/// assert_eq!(result.audio_books[0].as_str(), "MAT");
/// ```
pub fn validate_folder(audio_files: &[FileEntry], text_files: &[FileEntry]) -> ValidationResult {
    validate::validate_folder(audio_files, text_files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_result_serializes_for_the_ui() {
        let result = validate_folder(&[], &[]);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["valid"], serde_json::json!(false));
        assert_eq!(
            json["errors"][0],
            serde_json::json!("No audio files found. Expected audio files in .mp3 or .wav format.")
        );
        assert_eq!(json["totalAudioFiles"], serde_json::json!(0));
        assert_eq!(json["audioBooks"], serde_json::json!([]));
    }

    #[test]
    fn book_ids_serialize_as_code_strings() {
        let audio = vec![FileEntry::new("N2_ANL_BSM_001_MAT_001_VOX.mp3", 1)];
        let text = vec![FileEntry::new("040MAT.usx", 1)];
        let json = serde_json::to_value(validate_folder(&audio, &text)).unwrap();

        assert_eq!(json["audioBooks"], serde_json::json!(["MAT"]));
        assert_eq!(json["textBooks"], serde_json::json!(["MAT"]));
    }

    #[test]
    fn folder_info_serializes_with_ui_field_names() {
        let info = parse_folder_name("N2ANLBSM").unwrap();
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["bibleId"], serde_json::json!("BSM"));
        assert_eq!(json["datasetName"], serde_json::json!("ANLBSMN2DA"));
    }
}
