//! Image XObjects loaded into a document

use hpdf_sys::*;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// Encoded image formats libharu can embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    pub fn name(self) -> &'static str {
        match self {
            ImageFormat::Png => "PNG",
            ImageFormat::Jpeg => "JPEG",
        }
    }
}

/// An image loaded into a document, ready to be drawn on any of its pages.
///
/// The same image can be drawn any number of times; libharu embeds it once.
#[derive(Debug, Clone, Copy)]
pub struct PdfImage<'doc> {
    handle: NonNull<_HPDF_Dict_Rec>,
    _doc: PhantomData<&'doc ()>,
}

impl<'doc> PdfImage<'doc> {
    pub(crate) fn new(handle: NonNull<_HPDF_Dict_Rec>) -> Self {
        Self {
            handle,
            _doc: PhantomData,
        }
    }

    pub fn as_raw(&self) -> HPDF_Image {
        self.handle.as_ptr()
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        unsafe { HPDF_Image_GetWidth(self.as_raw()) }
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        unsafe { HPDF_Image_GetHeight(self.as_raw()) }
    }
}
