extern crate self as artie;

#[macro_use]
mod macros;
mod api;
mod error;
mod parsers;
mod registry;
mod validate;

pub use api::{
    extract_book_code, parse_audio_filename, parse_folder_name, parse_text_filename,
    parse_usx_filename, parse_v4_audio_filename, parse_vox_audio_filename, testament_of,
    validate_book_id, validate_folder,
};
pub use error::{ParseError, ValidationError};
pub use parsers::audio::{GenericAudio, ParsedAudioFilename, V4Audio, VoxAudio};
pub use parsers::folder::FolderNameInfo;
pub use parsers::text::{GenericText, ParsedTextFilename, UsxText};
pub use registry::{BookId, Testament};
pub use validate::{FileEntry, ValidationResult};
