//! Folder-name decomposition into dataset identity.

use serde::Serialize;

use crate::error::ParseError;

/// Dataset identity derived from the folder's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderNameInfo {
    /// 2-character dramatization/testament marker (`N1`, `N2`, `O1`, `O2`).
    pub drama: String,
    /// 3-letter language code.
    pub iso: String,
    pub bible_id: String,
    /// Derived identifier `iso + bibleId + drama + "DA"`, used to name the
    /// resulting processing job.
    pub dataset_name: String,
}

/// Decompose a folder name such as `"N2ANLBSM Khongso (ANL)"`.
///
/// Trailing slashes and whitespace are trimmed, then the leading
/// `{N|O}{1|2} + ISO + bibleId` run is extracted; any free text after the run
/// is discarded.
pub(crate) fn parse_folder_name(folder_name: &str) -> Result<FolderNameInfo, ParseError> {
    let clean = regex!(r"[/\\\s]+$").replace(folder_name, "").into_owned();

    let core = regex!(r"^([NO][12][A-Z]{3}[A-Z0-9]+)")
        .find(&clean)
        .map(|found| found.as_str().to_string());
    let core = match core {
        Some(core) => core,
        None => return Err(ParseError::FolderPattern(clean)),
    };

    let caps = match regex!(r"^([NO][12])([A-Z]{3})(.+)$").captures(&core) {
        Some(caps) => caps,
        None => return Err(ParseError::FolderCorePattern(core.clone())),
    };
    let (drama, iso, bible_id) = (&caps[1], &caps[2], &caps[3]);

    Ok(FolderNameInfo {
        drama: drama.to_string(),
        iso: iso.to_string(),
        bible_id: bible_id.to_string(),
        dataset_name: format!("{iso}{bible_id}{drama}DA"),
    })
}
