//! Audio filename grammars: VOX, V4, and the generic fallback.

use serde::Serialize;

use crate::error::ParseError;
use crate::parsers::fallback;
use crate::registry::{self, BookId, Testament};

/// A successfully parsed audio filename, tagged by the grammar that matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ParsedAudioFilename {
    Vox(VoxAudio),
    V4(V4Audio),
    Generic(GenericAudio),
}

/// Fields of the 7-part VOX convention, e.g. `N2_ANL_BSM_001_MAT_001_VOX.mp3`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoxAudio {
    pub drama: String,
    pub lang_code: String,
    pub version_code: String,
    pub book_seq: String,
    pub book_id: BookId,
    pub chapter: u32,
    pub verse: String,
    pub testament: Testament,
    /// Derived identifier `langCode + versionCode + drama + "DA"`.
    pub media_id: String,
}

/// Fields of the V4 convention, e.g. `ENGESVN2DA_B001_MAT_001.mp3`, with an
/// optional verse range suffix `_{verse}-{chapterEnd}_{verseEnd}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct V4Audio {
    pub media_id: String,
    pub testament: Testament,
    pub book_seq: String,
    pub book_id: BookId,
    pub chapter: u32,
    pub verse: Option<String>,
    pub chapter_end: Option<u32>,
    pub verse_end: Option<String>,
}

/// A fallback match: only the book could be identified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericAudio {
    pub book_id: BookId,
    pub testament: Testament,
}

impl ParsedAudioFilename {
    /// The canonical book this file belongs to.
    pub fn book_id(&self) -> BookId {
        match self {
            ParsedAudioFilename::Vox(vox) => vox.book_id,
            ParsedAudioFilename::V4(v4) => v4.book_id,
            ParsedAudioFilename::Generic(generic) => generic.book_id,
        }
    }

    pub fn testament(&self) -> Testament {
        match self {
            ParsedAudioFilename::Vox(vox) => vox.testament,
            ParsedAudioFilename::V4(v4) => v4.testament,
            ParsedAudioFilename::Generic(generic) => generic.testament,
        }
    }

    /// Legacy media-type tag carried by fallback matches.
    pub fn media_type(&self) -> Option<&'static str> {
        match self {
            ParsedAudioFilename::Generic(_) => Some("robust_audio"),
            _ => None,
        }
    }
}

/// An audio naming grammar: a cheap applicability test plus the parse itself.
///
/// Grammars are tried in declaration order; the first success wins and any
/// failure falls through to the next entry.
struct Grammar {
    applies: fn(&str) -> bool,
    parse: fn(&str) -> Option<ParsedAudioFilename>,
}

fn grammars() -> [Grammar; 3] {
    [
        Grammar {
            applies: |name| name.contains("_VOX.") && has_exact_media_extension(name),
            parse: |name| parse_vox(name).ok().map(ParsedAudioFilename::Vox),
        },
        Grammar {
            applies: |name| name.contains('_') && has_exact_media_extension(name),
            parse: |name| parse_v4(name).ok().map(ParsedAudioFilename::V4),
        },
        Grammar {
            applies: |_| true,
            parse: |name| {
                fallback::extract_book_code(name).map(|book| {
                    ParsedAudioFilename::Generic(GenericAudio {
                        testament: book.testament(),
                        book_id: book,
                    })
                })
            },
        },
    ]
}

// The VOX and V4 grammars only fire on lowercase extensions; uppercase
// variants are still accepted overall but land in the fallback.
fn has_exact_media_extension(name: &str) -> bool {
    name.ends_with(".mp3") || name.ends_with(".wav")
}

fn strip_exact_media_extension(name: &str) -> &str {
    name.strip_suffix(".mp3").or_else(|| name.strip_suffix(".wav")).unwrap_or(name)
}

fn parse_chapter(field: &str) -> Option<u32> {
    field.parse::<u32>().ok().filter(|n| *n >= 1)
}

/// Parse the 7-part VOX grammar:
/// `{drama}_{langCode}_{versionCode}_{bookSeq}_{bookCode}_{chapter}_{verse+ext}`.
pub(crate) fn parse_vox(filename: &str) -> Result<VoxAudio, ParseError> {
    let parts: Vec<&str> = filename.split('_').collect();
    if parts.len() != 7 {
        return Err(ParseError::VoxPartCount { filename: filename.to_string(), got: parts.len() });
    }
    let (drama, lang_code, version_code, book_seq, book_code, chapter) =
        (parts[0], parts[1], parts[2], parts[3], parts[4], parts[5]);
    let verse = strip_exact_media_extension(parts[6]);

    let book_id = registry::resolve(book_code)?;

    let testament = match drama.chars().next() {
        Some('N') => Testament::NT,
        Some('O') => Testament::OT,
        Some('P') => book_id.testament(),
        _ => return Err(ParseError::UnknownMediaType(drama.to_string())),
    };

    let chapter_num = match parse_chapter(chapter) {
        Some(n) => n,
        None => return Err(ParseError::InvalidChapter(chapter.to_string())),
    };

    Ok(VoxAudio {
        drama: drama.to_string(),
        lang_code: lang_code.to_string(),
        version_code: version_code.to_string(),
        book_seq: book_seq.to_string(),
        book_id,
        chapter: chapter_num,
        verse: verse.to_string(),
        testament,
        media_id: format!("{lang_code}{version_code}{drama}DA"),
    })
}

/// Parse the V4 grammar:
/// `{mediaId}_{A|B}{bookSeq}_{bookCode}_{chapter}[_{verse}-{chapterEnd}_{verseEnd}]`.
///
/// Hyphens are normalized to underscores before splitting, which is how the
/// range suffix becomes plain trailing fields.
pub(crate) fn parse_v4(filename: &str) -> Result<V4Audio, ParseError> {
    let clean = strip_exact_media_extension(filename).replace('-', "_");
    let parts: Vec<&str> = clean.split('_').collect();
    if parts.len() < 4 {
        return Err(ParseError::V4PartCount { filename: filename.to_string(), got: parts.len() });
    }
    let (media_id, ab_seq, book_code, chapter) = (parts[0], parts[1], parts[2], parts[3]);
    let remaining = &parts[4..];

    let testament = match ab_seq.chars().next() {
        Some('A') => Testament::OT,
        Some('B') => Testament::NT,
        first => {
            return Err(ParseError::InvalidTestamentPrefix(
                first.map(String::from).unwrap_or_default(),
            ));
        }
    };
    let book_seq = &ab_seq[1..];

    let book_id = registry::resolve(book_code)?;

    let chapter_num = match parse_chapter(chapter) {
        Some(n) => n,
        None => return Err(ParseError::InvalidChapter(chapter.to_string())),
    };

    let verse = remaining.first().map(|v| v.to_string());
    let (chapter_end, verse_end) = if remaining.len() >= 3 {
        let end = match parse_chapter(remaining[1]) {
            Some(n) => n,
            None => return Err(ParseError::InvalidChapterEnd(remaining[1].to_string())),
        };
        (Some(end), Some(remaining[2].to_string()))
    } else {
        (None, None)
    };

    Ok(V4Audio {
        media_id: media_id.to_string(),
        testament,
        book_seq: book_seq.to_string(),
        book_id,
        chapter: chapter_num,
        verse,
        chapter_end,
        verse_end,
    })
}

/// Parse an audio filename by trying each grammar in order.
pub(crate) fn parse_audio_filename(filename: &str) -> Result<ParsedAudioFilename, ParseError> {
    if !regex!(r"(?i)\.(mp3|wav)$").is_match(filename) {
        return Err(ParseError::AudioExtension(filename.to_string()));
    }
    for grammar in grammars() {
        if (grammar.applies)(filename) {
            if let Some(parsed) = (grammar.parse)(filename) {
                return Ok(parsed);
            }
        }
    }
    Err(ParseError::NoAudioBookCode(filename.to_string()))
}
