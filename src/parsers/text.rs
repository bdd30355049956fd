//! Text (USX) filename grammars.

use serde::Serialize;

use crate::error::ParseError;
use crate::parsers::fallback;
use crate::registry::{self, BookId, Testament};

/// A successfully parsed text filename, tagged by the grammar that matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ParsedTextFilename {
    Usx(UsxText),
    Generic(GenericText),
}

/// A name matching one of the accepted USX shapes
/// (`001GEN.usx`, `040MAT.usx`, or `GEN.usx`-style).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsxText {
    pub book_id: BookId,
    pub book_seq: String,
    pub testament: Testament,
}

/// A fallback match: only the book could be identified; the sequence comes
/// from the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericText {
    pub book_id: BookId,
    pub book_seq: String,
    pub testament: Testament,
}

impl ParsedTextFilename {
    /// The canonical book this file belongs to.
    pub fn book_id(&self) -> BookId {
        match self {
            ParsedTextFilename::Usx(usx) => usx.book_id,
            ParsedTextFilename::Generic(generic) => generic.book_id,
        }
    }

    pub fn book_seq(&self) -> &str {
        match self {
            ParsedTextFilename::Usx(usx) => &usx.book_seq,
            ParsedTextFilename::Generic(generic) => &generic.book_seq,
        }
    }

    pub fn testament(&self) -> Testament {
        match self {
            ParsedTextFilename::Usx(usx) => usx.testament,
            ParsedTextFilename::Generic(generic) => generic.testament,
        }
    }

    /// Legacy media-type tag carried by fallback matches.
    pub fn media_type(&self) -> Option<&'static str> {
        match self {
            ParsedTextFilename::Generic(_) => Some("robust_usx"),
            _ => None,
        }
    }
}

/// Parse the USX grammar, dispatched on the length of the name with the
/// extension removed.
///
/// The 10- and 6-character branches share the same `seq = first 3,
/// code = next 3` extraction, leaving positions 6..10 of the long shape
/// unused. That mirrors the legacy tool exactly; whether the long shape was
/// ever meant to be distinct is an open product question (TODO: confirm with
/// the ingest team before tightening it).
pub(crate) fn parse_usx(filename: &str) -> Result<UsxText, ParseError> {
    if !filename.ends_with(".usx") {
        return Err(ParseError::UsxExtension(filename.to_string()));
    }
    let name = filename.strip_suffix(".usx").unwrap_or(filename);

    let (book_seq, raw_code) = match name.len() {
        10 | 6 => match (name.get(..3), name.get(3..6)) {
            (Some(seq), Some(code)) => (seq.to_string(), code),
            _ => return Err(ParseError::UsxShape(filename.to_string())),
        },
        7 => match name.get(..3) {
            // The sequence is looked up for the raw, uncorrected code; a
            // misspelled code yields an empty sequence even though the book
            // itself still resolves.
            Some(code) => {
                let seq = registry::sequence_of(code).map(|s| s.to_string()).unwrap_or_default();
                (seq, code)
            }
            None => return Err(ParseError::UsxShape(filename.to_string())),
        },
        _ => return Err(ParseError::UsxShape(filename.to_string())),
    };

    let book_id = registry::resolve(raw_code)?;
    Ok(UsxText { book_id, book_seq, testament: book_id.testament() })
}

/// Parse a text filename: the USX grammar first, then the fallback.
pub(crate) fn parse_text_filename(filename: &str) -> Result<ParsedTextFilename, ParseError> {
    if !filename.to_ascii_lowercase().ends_with(".usx") {
        return Err(ParseError::TextExtension(filename.to_string()));
    }
    if let Ok(usx) = parse_usx(filename) {
        return Ok(ParsedTextFilename::Usx(usx));
    }
    if let Some(book) = fallback::extract_book_code(filename) {
        return Ok(ParsedTextFilename::Generic(GenericText {
            book_seq: book.sequence().to_string(),
            testament: book.testament(),
            book_id: book,
        }));
    }
    Err(ParseError::NoTextBookCode(filename.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_character_shape() {
        let usx = parse_usx("040MAT.usx").unwrap();
        assert_eq!(usx.book_seq, "040");
        assert_eq!(usx.book_id.as_str(), "MAT");
        assert_eq!(usx.testament, Testament::NT);
    }

    #[test]
    fn six_character_shape_old_testament() {
        let usx = parse_usx("001GEN.usx").unwrap();
        assert_eq!(usx.book_seq, "001");
        assert_eq!(usx.book_id.as_str(), "GEN");
        assert_eq!(usx.testament, Testament::OT);
    }

    #[test]
    fn ten_character_shape_uses_the_same_slices() {
        let usx = parse_usx("040MATXXXX.usx").unwrap();
        assert_eq!(usx.book_seq, "040");
        assert_eq!(usx.book_id.as_str(), "MAT");
    }

    #[test]
    fn seven_character_shape_derives_the_sequence() {
        let usx = parse_usx("MAT_001.usx").unwrap();
        assert_eq!(usx.book_seq, "41");
        assert_eq!(usx.book_id.as_str(), "MAT");
    }

    #[test]
    fn seven_character_shape_with_misspelling_loses_the_sequence() {
        // PSM is not registered, so the raw lookup yields no sequence; the
        // book code itself still corrects to PSA.
        let usx = parse_usx("PSM_001.usx").unwrap();
        assert_eq!(usx.book_seq, "");
        assert_eq!(usx.book_id.as_str(), "PSA");
    }

    #[test]
    fn other_lengths_are_rejected() {
        let err = parse_usx("XY.usx").unwrap_err();
        assert_eq!(
            err.to_string(),
            "USX files expected in format 001GEN.usx, 040MAT.usx, or GEN.usx, got: XY.usx"
        );
    }

    #[test]
    fn dispatch_requires_a_usx_extension() {
        let err = parse_text_filename("MAT.txt").unwrap_err();
        assert_eq!(err.to_string(), "Text file must be .usx format: MAT.txt");
    }

    #[test]
    fn bare_book_names_land_in_the_fallback() {
        let parsed = parse_text_filename("MAT.usx").unwrap();
        assert_eq!(parsed.media_type(), Some("robust_usx"));
        assert_eq!(parsed.book_id().as_str(), "MAT");
        assert_eq!(parsed.book_seq(), "41");
    }

    #[test]
    fn uppercase_extensions_land_in_the_fallback() {
        let parsed = parse_text_filename("MAT.USX").unwrap();
        assert_eq!(parsed.media_type(), Some("robust_usx"));
    }

    #[test]
    fn dispatch_reports_missing_book_code() {
        let err = parse_text_filename("XY.usx").unwrap_err();
        assert_eq!(err.to_string(), "No valid book code found in USX filename: XY.usx");
    }
}
