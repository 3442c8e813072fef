//! Font handles

use hpdf_sys::*;
use std::ffi::CStr;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// A font resource obtained from [`PdfDocument::font`](crate::PdfDocument::font).
///
/// Fonts are owned by the document and stay valid until it is freed.
#[derive(Debug, Clone, Copy)]
pub struct PdfFont<'doc> {
    handle: NonNull<_HPDF_Dict_Rec>,
    _doc: PhantomData<&'doc ()>,
}

impl<'doc> PdfFont<'doc> {
    pub(crate) fn new(handle: NonNull<_HPDF_Dict_Rec>) -> Self {
        Self {
            handle,
            _doc: PhantomData,
        }
    }

    pub fn as_raw(&self) -> HPDF_Font {
        self.handle.as_ptr()
    }

    /// The PostScript name libharu resolved the font to.
    pub fn name(&self) -> Option<String> {
        let name = unsafe { HPDF_Font_GetFontName(self.as_raw()) };
        if name.is_null() {
            return None;
        }
        Some(unsafe { CStr::from_ptr(name) }.to_string_lossy().into_owned())
    }
}
