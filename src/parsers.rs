//! Filename and folder-name grammars.
//!
//! Parsing a filename is a cascade: each naming convention is tried in a
//! fixed order and the first grammar that succeeds wins, with the shared
//! fallback extractor as the last resort.
//!
//! ```text
//! audio name ── extension check ──┬─ VOX grammar      (audio.rs)
//!                                 ├─ V4 grammar       (audio.rs)
//!                                 └─ fallback cascade (fallback.rs)
//!
//! text name ─── extension check ──┬─ USX grammar      (text.rs)
//!                                 └─ fallback cascade (fallback.rs)
//!
//! folder name ─ trim ─ leading token ─ decomposition  (folder.rs)
//! ```
//!
//! Grammar-level failures carry precise diagnostics and surface when a grammar
//! is invoked directly; the dispatching entry points report only the
//! extension error or the final no-book-code error, because a failure in one
//! grammar simply falls through to the next. Every book code in a successful
//! parse has been resolved against the registry, so downstream code never
//! sees an unregistered code.

pub(crate) mod audio;
pub(crate) mod fallback;
pub(crate) mod folder;
pub(crate) mod text;
