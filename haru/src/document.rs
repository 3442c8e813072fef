//! PDF document lifecycle, attributes and serialization

use crate::error::{check_status, take_error, HpdfError, Result, Status};
use crate::font::PdfFont;
use crate::image::{ImageFormat, PdfImage};
use crate::page::PdfPage;
use crate::types::{CompressionMode, DateInfo, PageLayout, PageMode, TextInfo};
use chrono::{DateTime, Datelike, FixedOffset, Timelike};
use hpdf_sys::*;
use libc::{c_char, c_void};
use std::ffi::{CStr, CString};
use std::mem::ManuallyDrop;
use std::path::Path;
use std::ptr::{self, NonNull};

/// Chunk size used when draining the in-memory stream.
const STREAM_CHUNK: usize = 4096;

/// Receives every error libharu raises for documents created by [`PdfDocument::new`].
///
/// Callers get the same status back through `Result`, so this only traces.
unsafe extern "C" fn log_error_handler(
    error_no: HPDF_STATUS,
    detail_no: HPDF_STATUS,
    _user_data: *mut c_void,
) {
    log::debug!(
        "libharu error {} (detail {})",
        Status::from_raw(error_no),
        detail_no
    );
}

/// An owned libharu document object (`HPDF_Doc`).
///
/// Dropping it calls `HPDF_Free`, which releases the document and every
/// page, font and image created from it. Pages and images borrow the
/// document, so they cannot outlive it.
///
/// # Example
///
/// ```no_run
/// use haru::{PdfDocument, PageSize, PageDirection};
///
/// let doc = PdfDocument::new()?;
/// let page = doc.add_page()?;
/// page.set_size(PageSize::Letter, PageDirection::Portrait)?;
/// page.begin_text()?;
/// page.set_font_and_size(&doc.font("Helvetica", None)?, 24.0)?;
/// page.text_out(72.0, 700.0, "Hello")?;
/// page.end_text()?;
/// doc.save_to_file("hello.pdf")?;
/// # Ok::<(), haru::HpdfError>(())
/// ```
#[derive(Debug)]
pub struct PdfDocument {
    handle: NonNull<_HPDF_Doc_Rec>,
}

// SAFETY: a libharu document has no thread affinity. It is not Sync because
// libharu does no locking of its own.
unsafe impl Send for PdfDocument {}

impl PdfDocument {
    /// Allocate a document object with an empty document ready for pages.
    pub fn new() -> Result<Self> {
        let handle = unsafe { HPDF_New(Some(log_error_handler), ptr::null_mut()) };
        let handle = NonNull::new(handle).ok_or(HpdfError::AllocationFailed {
            what: "document",
        })?;
        log::trace!("HPDF_New -> {:p}", handle);
        Ok(Self { handle })
    }

    /// Take ownership of a handle produced by [`into_raw`](Self::into_raw).
    ///
    /// # Safety
    ///
    /// `handle` must come from `HPDF_New` and must not be owned by any other
    /// `PdfDocument`. It is freed when the returned value drops.
    pub unsafe fn from_raw(handle: NonNull<_HPDF_Doc_Rec>) -> Self {
        Self { handle }
    }

    /// Borrow a handle without taking ownership.
    ///
    /// The returned view never frees the document.
    ///
    /// # Safety
    ///
    /// Same requirements as [`from_raw`](Self::from_raw), except that some
    /// other owner remains responsible for freeing the handle.
    pub unsafe fn borrow_raw(handle: NonNull<_HPDF_Doc_Rec>) -> ManuallyDrop<Self> {
        ManuallyDrop::new(Self { handle })
    }

    /// Release ownership, returning the handle without freeing it.
    pub fn into_raw(self) -> NonNull<_HPDF_Doc_Rec> {
        ManuallyDrop::new(self).handle
    }

    pub fn as_raw(&self) -> HPDF_Doc {
        self.handle.as_ptr()
    }

    fn check(&self, op: &'static str, status: HPDF_STATUS) -> Result<()> {
        unsafe { check_status(self.as_raw(), op, status) }
    }

    // ========================================
    // Document lifecycle
    // ========================================

    /// Discard the current document and start a fresh one on the same object.
    pub fn new_doc(&mut self) -> Result<()> {
        let status = unsafe { HPDF_NewDoc(self.as_raw()) };
        self.check("HPDF_NewDoc", status)
    }

    /// Discard the current document, keeping loaded fonts and encodings.
    pub fn free_doc(&mut self) {
        unsafe { HPDF_FreeDoc(self.as_raw()) }
    }

    /// Discard the current document together with all loaded resources.
    pub fn free_doc_all(&mut self) {
        unsafe { HPDF_FreeDocAll(self.as_raw()) }
    }

    /// Whether the object currently holds a document.
    ///
    /// A negative answer leaves the error state clear.
    pub fn has_doc(&self) -> bool {
        let has = unsafe { HPDF_HasDoc(self.as_raw()) } != HPDF_FALSE;
        if !has && unsafe { HPDF_GetError(self.as_raw()) } != HPDF_OK {
            unsafe { HPDF_ResetError(self.as_raw()) };
        }
        has
    }

    // ========================================
    // Serialization
    // ========================================

    /// Write the document to `path`.
    ///
    /// Fails with [`HpdfError::Save`] carrying libharu's status, e.g.
    /// `FILE_OPEN_ERROR` for a path in a missing directory.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let c_path = path_to_cstring(path)?;
        let status = unsafe { HPDF_SaveToFile(self.as_raw(), c_path.as_ptr()) };
        self.check("HPDF_SaveToFile", status)
            .map_err(|_| HpdfError::Save {
                path: path.display().to_string(),
                status: Status::from_raw(status),
            })
    }

    /// Serialize the document into memory.
    pub fn save_to_bytes(&self) -> Result<Vec<u8>> {
        let raw = self.as_raw();
        let status = unsafe { HPDF_SaveToStream(raw) };
        self.check("HPDF_SaveToStream", status)?;

        let expected = unsafe { HPDF_GetStreamSize(raw) } as usize;
        let mut bytes = Vec::with_capacity(expected);
        let mut chunk = [0u8; STREAM_CHUNK];
        loop {
            let mut size = STREAM_CHUNK as HPDF_UINT32;
            let status = Status::from_raw(unsafe {
                HPDF_ReadFromStream(raw, chunk.as_mut_ptr(), &mut size)
            });
            let read = (size as usize).min(STREAM_CHUNK);
            bytes.extend_from_slice(&chunk[..read]);

            if status == Status::STREAM_EOF || read == 0 {
                break;
            }
            if !status.is_ok() {
                let detail = unsafe { HPDF_GetErrorDetail(raw) } as u64;
                unsafe { HPDF_ResetError(raw) };
                return Err(HpdfError::Status {
                    op: "HPDF_ReadFromStream",
                    status,
                    detail,
                });
            }
        }
        // Reaching the end of the stream is reported as an error.
        unsafe {
            HPDF_ResetError(raw);
            HPDF_ResetStream(raw);
        }

        if bytes.len() != expected {
            return Err(HpdfError::TruncatedStream {
                read: bytes.len(),
                expected,
            });
        }
        Ok(bytes)
    }

    // ========================================
    // Attributes
    // ========================================

    pub fn set_info_attr(&self, info: TextInfo, value: &str) -> Result<()> {
        let value = CString::new(value)?;
        let status = unsafe { HPDF_SetInfoAttr(self.as_raw(), info.to_raw(), value.as_ptr()) };
        self.check("HPDF_SetInfoAttr", status)
    }

    /// Read a text entry of the info dictionary, `None` when unset.
    pub fn info_attr(&self, info: TextInfo) -> Option<String> {
        let value = unsafe { HPDF_GetInfoAttr(self.as_raw(), info.to_raw()) };
        if value.is_null() {
            return None;
        }
        let value = unsafe { CStr::from_ptr(value) };
        Some(value.to_string_lossy().into_owned())
    }

    pub fn set_creator(&self, creator: &str) -> Result<()> {
        self.set_info_attr(TextInfo::Creator, creator)
    }

    pub fn set_info_date(&self, info: DateInfo, date: DateTime<FixedOffset>) -> Result<()> {
        let status =
            unsafe { HPDF_SetInfoDateAttr(self.as_raw(), info.to_raw(), to_hpdf_date(&date)) };
        self.check("HPDF_SetInfoDateAttr", status)
    }

    pub fn set_compression_mode(&self, mode: CompressionMode) -> Result<()> {
        let status = unsafe { HPDF_SetCompressionMode(self.as_raw(), mode.bits()) };
        self.check("HPDF_SetCompressionMode", status)
    }

    pub fn set_page_layout(&self, layout: PageLayout) -> Result<()> {
        let status = unsafe { HPDF_SetPageLayout(self.as_raw(), layout.to_raw()) };
        self.check("HPDF_SetPageLayout", status)
    }

    /// The layout set on the catalog, `None` if it was never set.
    pub fn page_layout(&self) -> Option<PageLayout> {
        PageLayout::from_raw(unsafe { HPDF_GetPageLayout(self.as_raw()) })
    }

    pub fn set_page_mode(&self, mode: PageMode) -> Result<()> {
        let status = unsafe { HPDF_SetPageMode(self.as_raw(), mode.to_raw()) };
        self.check("HPDF_SetPageMode", status)
    }

    pub fn page_mode(&self) -> Option<PageMode> {
        PageMode::from_raw(unsafe { HPDF_GetPageMode(self.as_raw()) })
    }

    // ========================================
    // Pages
    // ========================================

    /// Append a new page (A4 portrait) and make it current.
    pub fn add_page(&self) -> Result<PdfPage<'_>> {
        let page = unsafe { HPDF_AddPage(self.as_raw()) };
        match NonNull::new(page) {
            Some(page) => Ok(unsafe { self.page_from_raw(page) }),
            None => Err(unsafe { take_error(self.as_raw(), "HPDF_AddPage") }),
        }
    }

    /// Insert a new page immediately before `target`.
    pub fn insert_page(&self, target: &PdfPage<'_>) -> Result<PdfPage<'_>> {
        let page = unsafe { HPDF_InsertPage(self.as_raw(), target.as_raw()) };
        match NonNull::new(page) {
            Some(page) => Ok(unsafe { self.page_from_raw(page) }),
            None => Err(unsafe { take_error(self.as_raw(), "HPDF_InsertPage") }),
        }
    }

    pub fn current_page(&self) -> Option<PdfPage<'_>> {
        let page = unsafe { HPDF_GetCurrentPage(self.as_raw()) };
        NonNull::new(page).map(|page| unsafe { self.page_from_raw(page) })
    }

    /// Wrap a page handle that belongs to this document.
    ///
    /// # Safety
    ///
    /// `page` must have been created from this document and the document
    /// must not have been freed or reset since.
    pub unsafe fn page_from_raw(&self, page: NonNull<_HPDF_Dict_Rec>) -> PdfPage<'_> {
        PdfPage::new(page, self.handle)
    }

    // ========================================
    // Resources
    // ========================================

    /// Look up a font by name, e.g. one of the base-14 fonts.
    ///
    /// `encoding` defaults to libharu's standard encoding when `None`.
    pub fn font(&self, name: &str, encoding: Option<&str>) -> Result<PdfFont<'_>> {
        let c_name = CString::new(name)?;
        let c_encoding = encoding.map(CString::new).transpose()?;
        let encoding_ptr = c_encoding
            .as_ref()
            .map_or(ptr::null(), |encoding| encoding.as_ptr());

        let font = unsafe { HPDF_GetFont(self.as_raw(), c_name.as_ptr(), encoding_ptr) };
        match NonNull::new(font) {
            Some(font) => Ok(PdfFont::new(font)),
            None => {
                let err = unsafe { take_error(self.as_raw(), "HPDF_GetFont") };
                log::debug!("font lookup for {name} failed: {err}");
                Err(HpdfError::FontNotFound {
                    name: name.to_string(),
                })
            }
        }
    }

    pub fn load_png_image_from_mem(&self, data: &[u8]) -> Result<PdfImage<'_>> {
        self.load_image_from_mem(ImageFormat::Png, data)
    }

    pub fn load_jpeg_image_from_mem(&self, data: &[u8]) -> Result<PdfImage<'_>> {
        self.load_image_from_mem(ImageFormat::Jpeg, data)
    }

    pub fn load_png_image_from_file(&self, path: impl AsRef<Path>) -> Result<PdfImage<'_>> {
        self.load_image_from_file(ImageFormat::Png, path.as_ref())
    }

    pub fn load_jpeg_image_from_file(&self, path: impl AsRef<Path>) -> Result<PdfImage<'_>> {
        self.load_image_from_file(ImageFormat::Jpeg, path.as_ref())
    }

    fn load_image_from_mem(&self, format: ImageFormat, data: &[u8]) -> Result<PdfImage<'_>> {
        let size = HPDF_UINT::try_from(data.len()).map_err(|_| HpdfError::ImageLoad {
            format: format.name(),
            source_kind: "memory",
            status: Status::INVALID_PARAMETER,
        })?;
        let image = unsafe {
            match format {
                ImageFormat::Png => HPDF_LoadPngImageFromMem(self.as_raw(), data.as_ptr(), size),
                ImageFormat::Jpeg => HPDF_LoadJpegImageFromMem(self.as_raw(), data.as_ptr(), size),
            }
        };
        self.wrap_image(format, "memory", image)
    }

    fn load_image_from_file(&self, format: ImageFormat, path: &Path) -> Result<PdfImage<'_>> {
        let c_path = path_to_cstring(path)?;
        let image = unsafe {
            match format {
                ImageFormat::Png => HPDF_LoadPngImageFromFile(self.as_raw(), c_path.as_ptr()),
                ImageFormat::Jpeg => HPDF_LoadJpegImageFromFile(self.as_raw(), c_path.as_ptr()),
            }
        };
        self.wrap_image(format, "file", image)
    }

    fn wrap_image(
        &self,
        format: ImageFormat,
        source_kind: &'static str,
        image: HPDF_Image,
    ) -> Result<PdfImage<'_>> {
        match NonNull::new(image) {
            Some(image) => Ok(PdfImage::new(image)),
            None => {
                let raw = self.as_raw();
                let status = Status::from_raw(unsafe { HPDF_GetError(raw) });
                unsafe { HPDF_ResetError(raw) };
                Err(HpdfError::ImageLoad {
                    format: format.name(),
                    source_kind,
                    status,
                })
            }
        }
    }

    // ========================================
    // Error state
    // ========================================

    /// The pending libharu error and its detail code, if any.
    pub fn last_error(&self) -> Option<(Status, u64)> {
        let status = Status::from_raw(unsafe { HPDF_GetError(self.as_raw()) });
        if status.is_ok() {
            return None;
        }
        let detail = unsafe { HPDF_GetErrorDetail(self.as_raw()) } as u64;
        Some((status, detail))
    }

    pub fn reset_error(&self) {
        unsafe { HPDF_ResetError(self.as_raw()) }
    }
}

impl Drop for PdfDocument {
    fn drop(&mut self) {
        log::trace!("HPDF_Free({:p})", self.handle);
        unsafe { HPDF_Free(self.as_raw()) }
    }
}

#[cfg(unix)]
fn path_to_cstring(path: &Path) -> Result<CString> {
    use std::os::unix::ffi::OsStrExt;
    Ok(CString::new(path.as_os_str().as_bytes())?)
}

#[cfg(not(unix))]
fn path_to_cstring(path: &Path) -> Result<CString> {
    Ok(CString::new(path.to_string_lossy().as_bytes())?)
}

fn to_hpdf_date(date: &DateTime<FixedOffset>) -> HPDF_Date {
    let offset = date.offset().local_minus_utc();
    let ind = match offset {
        0 => b'Z',
        o if o > 0 => b'+',
        _ => b'-',
    };
    let offset = offset.unsigned_abs();
    HPDF_Date {
        year: date.year(),
        month: date.month() as HPDF_INT,
        day: date.day() as HPDF_INT,
        hour: date.hour() as HPDF_INT,
        minutes: date.minute() as HPDF_INT,
        seconds: date.second() as HPDF_INT,
        ind: ind as c_char,
        off_hour: (offset / 3600) as HPDF_INT,
        off_minutes: ((offset % 3600) / 60) as HPDF_INT,
    }
}
