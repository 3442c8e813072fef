//! # haru
//!
//! Safe Rust bindings for [libharu](https://github.com/libharu/libharu), a
//! C library for generating PDF files.
//!
//! - [`PdfDocument`] owns a libharu document object and frees it on drop
//! - [`PdfPage`], [`PdfFont`] and [`PdfImage`] borrow the document that created them
//! - every libharu status is checked and surfaces as [`HpdfError`]
//!
//! ## Quick Start
//!
//! ```no_run
//! use haru::{CompressionMode, LineCap, PdfDocument};
//!
//! let doc = PdfDocument::new()?;
//! doc.set_compression_mode(CompressionMode::ALL)?;
//!
//! let page = doc.add_page()?;
//! page.set_line_width(4.0)?;
//! page.set_line_cap(LineCap::RoundEnd)?;
//! page.set_rgb_stroke(0.8, 0.1, 0.1)?;
//! page.move_to(72.0, 72.0)?;
//! page.line_to(page.width() - 72.0, page.height() - 72.0)?;
//! page.stroke()?;
//!
//! let bytes = doc.save_to_bytes()?;
//! assert!(bytes.starts_with(b"%PDF-"));
//! # Ok::<(), haru::HpdfError>(())
//! ```

mod document;
mod error;
mod font;
mod image;
mod page;
mod types;

pub use document::PdfDocument;
pub use error::{HpdfError, Result, Status};
pub use font::PdfFont;
pub use image::{ImageFormat, PdfImage};
pub use page::PdfPage;
pub use types::{
    CodeTable, CompressionMode, DateInfo, GraphicsMode, LineCap, LineJoin, PageDirection,
    PageLayout, PageMode, PageSize, Point, TextAlignment, TextInfo, TextRenderingMode,
};

/// Raw libharu handle and record types, for FFI hand-off.
pub mod raw {
    pub use hpdf_sys::{HPDF_Doc, HPDF_Page, _HPDF_Dict_Rec, _HPDF_Doc_Rec};
}

/// The version string of the linked libharu.
pub fn version() -> String {
    let version = unsafe { hpdf_sys::HPDF_GetVersion() };
    if version.is_null() {
        return String::new();
    }
    unsafe { std::ffi::CStr::from_ptr(version) }
        .to_string_lossy()
        .into_owned()
}
