//! Error types for haru

use hpdf_sys::*;
use std::fmt;
use thiserror::Error;

/// Result type for haru operations
pub type Result<T> = std::result::Result<T, HpdfError>;

/// A libharu status code (`HPDF_STATUS`).
///
/// Zero is `HPDF_OK`; every other value is one of the error codes from
/// `hpdf_error.h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Status(pub u64);

impl Status {
    pub const OK: Status = Status(HPDF_OK as u64);
    pub const EXCEED_GSTATE_LIMIT: Status = Status(HPDF_EXCEED_GSTATE_LIMIT as u64);
    pub const FAILED_TO_ALLOC_MEM: Status = Status(HPDF_FAILD_TO_ALLOC_MEM as u64);
    pub const FILE_IO_ERROR: Status = Status(HPDF_FILE_IO_ERROR as u64);
    pub const FILE_OPEN_ERROR: Status = Status(HPDF_FILE_OPEN_ERROR as u64);
    pub const INVALID_COMPRESSION_MODE: Status = Status(HPDF_INVALID_COMPRESSION_MODE as u64);
    pub const INVALID_DATE_TIME: Status = Status(HPDF_INVALID_DATE_TIME as u64);
    pub const INVALID_DOCUMENT: Status = Status(HPDF_INVALID_DOCUMENT as u64);
    pub const INVALID_DOCUMENT_STATE: Status = Status(HPDF_INVALID_DOCUMENT_STATE as u64);
    pub const INVALID_FONT_NAME: Status = Status(HPDF_INVALID_FONT_NAME as u64);
    pub const INVALID_IMAGE: Status = Status(HPDF_INVALID_IMAGE as u64);
    pub const INVALID_JPEG_DATA: Status = Status(HPDF_INVALID_JPEG_DATA as u64);
    pub const INVALID_PAGE: Status = Status(HPDF_INVALID_PAGE as u64);
    pub const INVALID_PARAMETER: Status = Status(HPDF_INVALID_PARAMETER as u64);
    pub const INVALID_PNG_IMAGE: Status = Status(HPDF_INVALID_PNG_IMAGE as u64);
    pub const PAGE_CANNOT_RESTORE_GSTATE: Status = Status(HPDF_PAGE_CANNOT_RESTORE_GSTATE as u64);
    pub const PAGE_FONT_NOT_FOUND: Status = Status(HPDF_PAGE_FONT_NOT_FOUND as u64);
    pub const PAGE_INVALID_FONT_SIZE: Status = Status(HPDF_PAGE_INVALID_FONT_SIZE as u64);
    pub const PAGE_INVALID_GMODE: Status = Status(HPDF_PAGE_INVALID_GMODE as u64);
    pub const PAGE_INVALID_SIZE: Status = Status(HPDF_PAGE_INVALID_SIZE as u64);
    pub const PAGE_INSUFFICIENT_SPACE: Status = Status(HPDF_PAGE_INSUFFICIENT_SPACE as u64);
    pub const STREAM_EOF: Status = Status(HPDF_STREAM_EOF as u64);

    /// Wrap a raw status returned by a libharu call.
    pub fn from_raw(status: HPDF_STATUS) -> Self {
        Status(status as u64)
    }

    pub fn is_ok(self) -> bool {
        self == Status::OK
    }

    /// The `hpdf_error.h` name of this status, if it is one haru knows.
    pub fn name(self) -> Option<&'static str> {
        let name = match self {
            Status::OK => "HPDF_OK",
            Status::EXCEED_GSTATE_LIMIT => "HPDF_EXCEED_GSTATE_LIMIT",
            Status::FAILED_TO_ALLOC_MEM => "HPDF_FAILD_TO_ALLOC_MEM",
            Status::FILE_IO_ERROR => "HPDF_FILE_IO_ERROR",
            Status::FILE_OPEN_ERROR => "HPDF_FILE_OPEN_ERROR",
            Status::INVALID_COMPRESSION_MODE => "HPDF_INVALID_COMPRESSION_MODE",
            Status::INVALID_DATE_TIME => "HPDF_INVALID_DATE_TIME",
            Status::INVALID_DOCUMENT => "HPDF_INVALID_DOCUMENT",
            Status::INVALID_DOCUMENT_STATE => "HPDF_INVALID_DOCUMENT_STATE",
            Status::INVALID_FONT_NAME => "HPDF_INVALID_FONT_NAME",
            Status::INVALID_IMAGE => "HPDF_INVALID_IMAGE",
            Status::INVALID_JPEG_DATA => "HPDF_INVALID_JPEG_DATA",
            Status::INVALID_PAGE => "HPDF_INVALID_PAGE",
            Status::INVALID_PARAMETER => "HPDF_INVALID_PARAMETER",
            Status::INVALID_PNG_IMAGE => "HPDF_INVALID_PNG_IMAGE",
            Status::PAGE_CANNOT_RESTORE_GSTATE => "HPDF_PAGE_CANNOT_RESTORE_GSTATE",
            Status::PAGE_FONT_NOT_FOUND => "HPDF_PAGE_FONT_NOT_FOUND",
            Status::PAGE_INVALID_FONT_SIZE => "HPDF_PAGE_INVALID_FONT_SIZE",
            Status::PAGE_INVALID_GMODE => "HPDF_PAGE_INVALID_GMODE",
            Status::PAGE_INVALID_SIZE => "HPDF_PAGE_INVALID_SIZE",
            Status::PAGE_INSUFFICIENT_SPACE => "HPDF_PAGE_INSUFFICIENT_SPACE",
            Status::STREAM_EOF => "HPDF_STREAM_EOF",
            _ => return None,
        };
        Some(name)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} (0x{:04X})", name, self.0),
            None => write!(f, "0x{:04X}", self.0),
        }
    }
}

/// Error types for PDF generation
#[derive(Error, Debug)]
pub enum HpdfError {
    /// libharu could not allocate a new object
    #[error("Failed to allocate {what}")]
    AllocationFailed { what: &'static str },

    /// A libharu call returned a non-OK status
    #[error("{op} failed: {status} (detail {detail})")]
    Status {
        op: &'static str,
        status: Status,
        detail: u64,
    },

    /// Saving the document failed
    #[error("Error saving to file {path}: {status}")]
    Save { path: String, status: Status },

    /// Loading an image resource failed
    #[error("Failed to load {format} image from {source_kind}: {status}")]
    ImageLoad {
        format: &'static str,
        source_kind: &'static str,
        status: Status,
    },

    /// libharu does not know the requested font or encoding
    #[error("Font not found: {name}")]
    FontNotFound { name: String },

    /// A string could not be passed to C (interior NUL)
    #[error("Invalid string: {0}")]
    InvalidString(#[from] std::ffi::NulError),

    /// An integer code does not map to any value of the enumeration
    #[error("Unknown {kind} code: {code}")]
    UnknownCode { kind: &'static str, code: i32 },

    /// The serialized stream was shorter than libharu reported
    #[error("Truncated stream: read {read} of {expected} bytes")]
    TruncatedStream { read: usize, expected: usize },
}

impl HpdfError {
    /// The libharu status behind this error, when there is one.
    pub fn status(&self) -> Option<Status> {
        match self {
            HpdfError::Status { status, .. }
            | HpdfError::Save { status, .. }
            | HpdfError::ImageLoad { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Turn a libharu status into a `Result`.
///
/// On failure the document's error state is read for the detail code and
/// then cleared, so the next call starts from a clean slate.
///
/// # Safety
///
/// `doc` must be a live document handle.
pub(crate) unsafe fn check_status(
    doc: HPDF_Doc,
    op: &'static str,
    status: HPDF_STATUS,
) -> Result<()> {
    if status == HPDF_OK {
        return Ok(());
    }
    let detail = HPDF_GetErrorDetail(doc) as u64;
    HPDF_ResetError(doc);
    Err(HpdfError::Status {
        op,
        status: Status::from_raw(status),
        detail,
    })
}

/// Check for an error raised by a libharu call that reports no status.
///
/// Getters like `HPDF_Page_TextWidth` record failures on the document and
/// return a plain value.
///
/// # Safety
///
/// `doc` must be a live document handle.
pub(crate) unsafe fn check_raised(doc: HPDF_Doc, op: &'static str) -> Result<()> {
    if HPDF_GetError(doc) == HPDF_OK {
        return Ok(());
    }
    Err(take_error(doc, op))
}

/// Build an error for a libharu call that signals failure by returning null.
///
/// # Safety
///
/// `doc` must be a live document handle.
pub(crate) unsafe fn take_error(doc: HPDF_Doc, op: &'static str) -> HpdfError {
    let status = Status::from_raw(HPDF_GetError(doc));
    let detail = HPDF_GetErrorDetail(doc) as u64;
    HPDF_ResetError(doc);
    if status.is_ok() {
        HpdfError::AllocationFailed { what: op }
    } else {
        HpdfError::Status { op, status, detail }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_names() {
        assert_eq!(Status::OK.name(), Some("HPDF_OK"));
        assert_eq!(Status::FILE_IO_ERROR.name(), Some("HPDF_FILE_IO_ERROR"));
        assert_eq!(Status::FAILED_TO_ALLOC_MEM.name(), Some("HPDF_FAILD_TO_ALLOC_MEM"));
        assert_eq!(Status(0x7777).name(), None);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(Status::INVALID_DOCUMENT.to_string(), "HPDF_INVALID_DOCUMENT (0x1025)");
        assert_eq!(Status(0xABCD).to_string(), "0xABCD");
    }

    #[test]
    fn test_error_status_accessor() {
        let err = HpdfError::Save {
            path: "/tmp/out.pdf".to_string(),
            status: Status::FILE_IO_ERROR,
        };
        assert_eq!(err.status(), Some(Status::FILE_IO_ERROR));
        assert_eq!(
            HpdfError::FontNotFound {
                name: "Nope".to_string()
            }
            .status(),
            None
        );
    }
}
