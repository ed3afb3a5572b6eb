// crates/region_locator/src/lib.rs

use thiserror::Error;

/// Opening delimiter of a module's embedded code block.
///
/// The bracket escaping is pre-configured in the main file template as
/// `[==[ ]==]`, so module content is spliced in as-is with no escaping.
pub const CODE_BLOCK_OPEN: &str = "code = [==[";

/// Closing delimiter of a module's embedded code block.
pub const CODE_BLOCK_CLOSE: &str = "]==]";

/// Builds the structural marker that introduces a module entry in the
/// main file's code table: two leading spaces, the module name, ` = {`.
pub fn module_marker(name: &str) -> String {
    format!("  {} = {{", name)
}

/// Failure locating a module's code block. Each variant names the module
/// so callers can report which entry of the catalog went wrong.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocateError {
    #[error("could not find module {0} in main file")]
    ModuleNotFound(String),
    #[error("could not find code block for module {0}")]
    CodeBlockNotFound(String),
    #[error("could not find closing bracket for module {0}")]
    ClosingBracketNotFound(String),
}

/// Byte offsets bounding a module's replaceable payload. `start` is just
/// past the opening delimiter; `end` is where the closing delimiter begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub start: usize,
    pub end: usize,
}

/// Locates the payload of `name`'s code block inside `document`.
///
/// All searches are leftmost, case-sensitive, exact substring matches. The
/// structural marker search always starts from the beginning of the
/// document, because module entries may be stored in any relative order.
pub fn locate_region(document: &str, name: &str) -> Result<Region, LocateError> {
    let marker = module_marker(name);
    let marker_idx = document
        .find(&marker)
        .ok_or_else(|| LocateError::ModuleNotFound(name.to_string()))?;

    let open_idx = document[marker_idx..]
        .find(CODE_BLOCK_OPEN)
        .map(|i| marker_idx + i)
        .ok_or_else(|| LocateError::CodeBlockNotFound(name.to_string()))?;
    let start = open_idx + CODE_BLOCK_OPEN.len();

    let end = document[start..]
        .find(CODE_BLOCK_CLOSE)
        .map(|i| start + i)
        .ok_or_else(|| LocateError::ClosingBracketNotFound(name.to_string()))?;

    Ok(Region { start, end })
}

/// Returns a new document with `name`'s code block payload replaced by
/// `payload`, byte for byte. The rest of the document is untouched.
pub fn replace_region(document: &str, name: &str, payload: &str) -> Result<String, LocateError> {
    let region = locate_region(document, name)?;
    let mut out =
        String::with_capacity(document.len() - (region.end - region.start) + payload.len());
    out.push_str(&document[..region.start]);
    out.push_str(payload);
    out.push_str(&document[region.end..]);
    Ok(out)
}

/// Returns a new document with `name`'s code block payload reduced to a
/// single newline, leaving the surrounding template intact.
pub fn clear_region(document: &str, name: &str) -> Result<String, LocateError> {
    replace_region(document, name, "\n")
}
