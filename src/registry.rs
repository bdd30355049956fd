//! Canonical book-code registry.
//!
//! The two lookup tables here are process-wide immutable constants: the USFM
//! book sequence map and the known-misspelling correction table. Every parser
//! in the crate funnels candidate codes through [`resolve`] (or
//! [`lookup_exact`] on the fallback path), so a [`BookId`] value is proof of
//! registry membership.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Serialize, Serializer};

use crate::error::ParseError;

/// Map of USFM book codes to their canonical sequence numbers.
///
/// Sequence numbers run 1..=118 with gaps (40, 99 are unassigned); the ranges
/// partition books into Old Testament, New Testament, and Apocrypha.
static BOOK_SEQ_MAP: Lazy<HashMap<&'static str, u16>> = Lazy::new(|| {
    HashMap::from([
        ("GEN", 1),
        ("EXO", 2),
        ("LEV", 3),
        ("NUM", 4),
        ("DEU", 5),
        ("JOS", 6),
        ("JDG", 7),
        ("RUT", 8),
        ("1SA", 9),
        ("2SA", 10),
        ("1KI", 11),
        ("2KI", 12),
        ("1CH", 13),
        ("2CH", 14),
        ("EZR", 15),
        ("NEH", 16),
        ("EST", 17),
        ("JOB", 18),
        ("PSA", 19),
        ("PRO", 20),
        ("ECC", 21),
        ("SNG", 22),
        ("ISA", 23),
        ("JER", 24),
        ("LAM", 25),
        ("EZK", 26),
        ("DAN", 27),
        ("HOS", 28),
        ("JOL", 29),
        ("AMO", 30),
        ("OBA", 31),
        ("JON", 32),
        ("MIC", 33),
        ("NAM", 34),
        ("HAB", 35),
        ("ZEP", 36),
        ("HAG", 37),
        ("ZEC", 38),
        ("MAL", 39),
        ("MAT", 41),
        ("MRK", 42),
        ("LUK", 43),
        ("JHN", 44),
        ("ACT", 45),
        ("ROM", 46),
        ("1CO", 47),
        ("2CO", 48),
        ("GAL", 49),
        ("EPH", 50),
        ("PHP", 51),
        ("COL", 52),
        ("1TH", 53),
        ("2TH", 54),
        ("1TI", 55),
        ("2TI", 56),
        ("TIT", 57),
        ("PHM", 58),
        ("HEB", 59),
        ("JAS", 60),
        ("1PE", 61),
        ("2PE", 62),
        ("1JN", 63),
        ("2JN", 64),
        ("3JN", 65),
        ("JUD", 66),
        ("REV", 67),
        ("TOB", 68),
        ("JDT", 69),
        ("ESG", 70),
        ("WIS", 71),
        ("SIR", 72),
        ("BAR", 73),
        ("LJE", 74),
        ("S3Y", 75),
        ("SUS", 76),
        ("BEL", 77),
        ("1MA", 78),
        ("2MA", 79),
        ("3MA", 80),
        ("4MA", 81),
        ("1ES", 82),
        ("2ES", 83),
        ("MAN", 84),
        ("PS2", 85),
        ("ODA", 86),
        ("PSS", 87),
        ("EZA", 88),
        ("5EZ", 89),
        ("6EZ", 90),
        ("DAG", 91),
        ("PS3", 92),
        ("2BA", 93),
        ("LBA", 94),
        ("JUB", 95),
        ("ENO", 96),
        ("1MQ", 97),
        ("2MQ", 98),
        ("3MQ", 100),
        ("REP", 101),
        ("4BA", 102),
        ("LAO", 103),
        ("FRT", 104),
        ("BAK", 105),
        ("OTH", 106),
        ("INT", 107),
        ("CNC", 108),
        ("GLO", 109),
        ("TDX", 110),
        ("NDX", 111),
        ("XXA", 112),
        ("XXB", 113),
        ("XXC", 114),
        ("XXD", 115),
        ("XXE", 116),
        ("XXF", 117),
        ("XXG", 118),
    ])
});

/// Known misspelled or alternate codes mapped to their canonical form.
///
/// Applied once, before the sequence lookup; a corrected code is already
/// canonical and is never re-corrected. Kept as an ordered slice because the
/// unknown-code diagnostic enumerates the table in this order.
pub(crate) static BOOK_CORRECTIONS: &[(&str, &str)] = &[
    ("PSM", "PSA"),
    ("PRV", "PRO"),
    ("SOS", "SNG"),
    ("EZE", "EZK"),
    ("JOE", "JOL"),
    ("NAH", "NAM"),
    ("MRC", "MRK"),
    ("LUC", "LUK"),
    ("JUA", "JHN"),
    ("HEC", "ACT"),
    ("EFE", "EPH"),
    ("FHP", "PHP"),
    ("1TE", "1TH"),
    ("2TE", "2TH"),
    ("TTO", "TIT"),
    ("TTL", "TIT"),
    ("TTS", "TIT"),
    ("FHM", "PHM"),
    ("JMS", "JAS"),
    ("SNT", "JAS"),
    ("APO", "REV"),
];

static CORRECTION_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| BOOK_CORRECTIONS.iter().copied().collect());

/// Compact JSON rendering of the correction table, in table order.
///
/// Embedded verbatim in the unknown-code diagnostic the UI displays.
static CORRECTIONS_JSON: Lazy<String> = Lazy::new(|| {
    let mut map = serde_json::Map::new();
    for (from, to) in BOOK_CORRECTIONS {
        map.insert((*from).to_string(), serde_json::Value::String((*to).to_string()));
    }
    serde_json::Value::Object(map).to_string()
});

pub(crate) fn corrections_json() -> &'static str {
    CORRECTIONS_JSON.as_str()
}

/// Old Testament, New Testament, or Apocrypha classification of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Testament {
    OT,
    NT,
    AP,
}

impl Testament {
    fn from_sequence(seq: u16) -> Testament {
        if seq < 40 {
            Testament::OT
        } else if seq < 68 {
            Testament::NT
        } else {
            Testament::AP
        }
    }
}

impl fmt::Display for Testament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Testament::OT => "OT",
            Testament::NT => "NT",
            Testament::AP => "AP",
        };
        f.write_str(name)
    }
}

/// A canonical book identifier that is known to exist in the registry.
///
/// Values are only constructed by [`resolve`] and [`lookup_exact`], so holding
/// a `BookId` is proof the code is registered; sequence and testament queries
/// are total. Equality, hashing, and serialization go by the code string.
#[derive(Debug, Clone, Copy)]
pub struct BookId {
    code: &'static str,
    seq: u16,
}

impl BookId {
    /// The canonical 3-character code, e.g. `"MAT"`.
    pub fn as_str(&self) -> &'static str {
        self.code
    }

    /// Canonical ordinal within the combined OT/NT/Apocrypha ordering.
    pub fn sequence(&self) -> u16 {
        self.seq
    }

    /// Testament classification derived from the sequence number.
    pub fn testament(&self) -> Testament {
        Testament::from_sequence(self.seq)
    }
}

impl PartialEq for BookId {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for BookId {}

impl std::hash::Hash for BookId {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl Serialize for BookId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

/// Resolve a raw 3-letter code to a canonical [`BookId`].
///
/// Known misspellings are corrected first (a single substitution, never
/// transitive), then the result must be present in the sequence table. The
/// error carries the attempted code and the rendered correction table for the
/// UI diagnostic.
pub fn resolve(code: &str) -> Result<BookId, ParseError> {
    let corrected = CORRECTION_MAP.get(code).copied().unwrap_or(code);
    match BOOK_SEQ_MAP.get_key_value(corrected) {
        Some((key, seq)) => Ok(BookId { code: *key, seq: *seq }),
        None => Err(ParseError::UnknownBookCode {
            code: corrected.to_string(),
            corrections: corrections_json(),
        }),
    }
}

/// Look up a raw code without applying corrections.
///
/// Used by the fallback extraction path, which accepts exact registry members
/// only.
pub(crate) fn lookup_exact(code: &str) -> Option<BookId> {
    BOOK_SEQ_MAP.get_key_value(code).map(|(key, seq)| BookId { code: *key, seq: *seq })
}

/// Sequence number for a raw code, if registered. No correction is applied.
pub(crate) fn sequence_of(code: &str) -> Option<u16> {
    BOOK_SEQ_MAP.get(code).copied()
}

/// Testament for a raw code, if registered. No correction is applied.
pub fn testament_of(code: &str) -> Option<Testament> {
    sequence_of(code).map(Testament::from_sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrections_resolve_to_canonical_codes() {
        let book = resolve("PSM").unwrap();
        assert_eq!(book.as_str(), "PSA");
        assert_eq!(book.sequence(), 19);
        assert_eq!(book.testament(), Testament::OT);
    }

    #[test]
    fn resolve_is_idempotent_after_correction() {
        for (from, to) in BOOK_CORRECTIONS {
            let once = resolve(from).unwrap();
            assert_eq!(once.as_str(), *to);
            assert_eq!(resolve(once.as_str()).unwrap(), once);
        }
    }

    #[test]
    fn unknown_code_reports_the_correction_table() {
        let message = resolve("ZZZ").unwrap_err().to_string();
        assert!(
            message.starts_with("BookId \"ZZZ\" is not known. Available corrections: {\"PSM\":\"PSA\",\"PRV\":\"PRO\","),
            "unexpected message: {message}"
        );
        assert!(message.ends_with("\"APO\":\"REV\"}"));
    }

    #[test]
    fn testament_ranges_partition_the_registry() {
        let (mut ot, mut nt, mut ap) = (0, 0, 0);
        for code in BOOK_SEQ_MAP.keys() {
            match testament_of(code) {
                Some(Testament::OT) => ot += 1,
                Some(Testament::NT) => nt += 1,
                Some(Testament::AP) => ap += 1,
                None => panic!("unclassified book {code}"),
            }
        }
        assert_eq!((ot, nt, ap), (39, 27, 50));
    }

    #[test]
    fn testament_boundaries() {
        assert_eq!(testament_of("MAL"), Some(Testament::OT));
        assert_eq!(testament_of("MAT"), Some(Testament::NT));
        assert_eq!(testament_of("REV"), Some(Testament::NT));
        assert_eq!(testament_of("TOB"), Some(Testament::AP));
        assert_eq!(testament_of("QQQ"), None);
    }
}
