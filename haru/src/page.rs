//! Page geometry, path construction, painting and the text protocol
//!
//! libharu tracks a graphics mode per page and rejects operators that are
//! not legal in the current mode with `HPDF_PAGE_INVALID_GMODE`. Those
//! rejections come back as [`HpdfError::Status`](crate::HpdfError::Status);
//! nothing is shadowed on the Rust side. In short:
//!
//! - path construction (`move_to`, `rectangle`, ...) opens a path object,
//!   which a painting operator (`stroke`, `fill`, `end_path`, ...) closes;
//! - `begin_text`/`end_text` bracket a text object, and the text showing
//!   and positioning operators are only valid inside it.

use crate::document::PdfDocument;
use crate::error::{check_raised, check_status, Result, Status};
use crate::font::PdfFont;
use crate::image::PdfImage;
use crate::types::{
    GraphicsMode, LineCap, LineJoin, PageDirection, PageSize, Point, TextAlignment,
    TextRenderingMode,
};
use hpdf_sys::*;
use std::ffi::CString;
use std::marker::PhantomData;
use std::path::Path;
use std::ptr::NonNull;

/// A page of a [`PdfDocument`].
///
/// Pages are owned by their document; this is a copyable handle that
/// borrows it. libharu records page errors on the parent document, so the
/// handle carries both.
#[derive(Debug, Clone, Copy)]
pub struct PdfPage<'doc> {
    page: NonNull<_HPDF_Dict_Rec>,
    doc: NonNull<_HPDF_Doc_Rec>,
    _doc: PhantomData<&'doc PdfDocument>,
}

impl<'doc> PdfPage<'doc> {
    pub(crate) fn new(page: NonNull<_HPDF_Dict_Rec>, doc: NonNull<_HPDF_Doc_Rec>) -> Self {
        Self {
            page,
            doc,
            _doc: PhantomData,
        }
    }

    pub fn as_raw(&self) -> HPDF_Page {
        self.page.as_ptr()
    }

    /// The handle of the document this page belongs to.
    pub fn parent_raw(&self) -> HPDF_Doc {
        self.doc.as_ptr()
    }

    fn check(&self, op: &'static str, status: HPDF_STATUS) -> Result<()> {
        unsafe { check_status(self.parent_raw(), op, status) }
    }

    // ========================================
    // Geometry
    // ========================================

    /// Set the page to a predefined size and orientation.
    pub fn set_size(&self, size: PageSize, direction: PageDirection) -> Result<()> {
        let status = unsafe { HPDF_Page_SetSize(self.as_raw(), size.to_raw(), direction.to_raw()) };
        self.check("HPDF_Page_SetSize", status)
    }

    /// Set the width in points. libharu accepts 3 to 14400.
    pub fn set_width(&self, width: f32) -> Result<()> {
        let status = unsafe { HPDF_Page_SetWidth(self.as_raw(), width) };
        self.check("HPDF_Page_SetWidth", status)
    }

    /// Set the height in points. libharu accepts 3 to 14400.
    pub fn set_height(&self, height: f32) -> Result<()> {
        let status = unsafe { HPDF_Page_SetHeight(self.as_raw(), height) };
        self.check("HPDF_Page_SetHeight", status)
    }

    pub fn width(&self) -> f32 {
        unsafe { HPDF_Page_GetWidth(self.as_raw()) }
    }

    pub fn height(&self) -> f32 {
        unsafe { HPDF_Page_GetHeight(self.as_raw()) }
    }

    pub fn graphics_mode(&self) -> GraphicsMode {
        GraphicsMode::from_raw(unsafe { HPDF_Page_GetGMode(self.as_raw()) })
    }

    /// Current point of the path under construction.
    pub fn current_pos(&self) -> Point {
        unsafe { HPDF_Page_GetCurrentPos(self.as_raw()) }.into()
    }

    /// Current text position. Only meaningful inside a text object.
    pub fn current_text_pos(&self) -> Point {
        unsafe { HPDF_Page_GetCurrentTextPos(self.as_raw()) }.into()
    }

    // ========================================
    // Graphics state
    // ========================================

    pub fn line_width(&self) -> f32 {
        unsafe { HPDF_Page_GetLineWidth(self.as_raw()) }
    }

    pub fn set_line_width(&self, width: f32) -> Result<()> {
        let status = unsafe { HPDF_Page_SetLineWidth(self.as_raw(), width) };
        self.check("HPDF_Page_SetLineWidth", status)
    }

    pub fn line_cap(&self) -> LineCap {
        LineCap::from_raw(unsafe { HPDF_Page_GetLineCap(self.as_raw()) }).unwrap_or_default()
    }

    pub fn set_line_cap(&self, cap: LineCap) -> Result<()> {
        let status = unsafe { HPDF_Page_SetLineCap(self.as_raw(), cap.to_raw()) };
        self.check("HPDF_Page_SetLineCap", status)
    }

    pub fn line_join(&self) -> LineJoin {
        LineJoin::from_raw(unsafe { HPDF_Page_GetLineJoin(self.as_raw()) }).unwrap_or_default()
    }

    pub fn set_line_join(&self, join: LineJoin) -> Result<()> {
        let status = unsafe { HPDF_Page_SetLineJoin(self.as_raw(), join.to_raw()) };
        self.check("HPDF_Page_SetLineJoin", status)
    }

    pub fn miter_limit(&self) -> f32 {
        unsafe { HPDF_Page_GetMiterLimit(self.as_raw()) }
    }

    pub fn set_miter_limit(&self, limit: f32) -> Result<()> {
        let status = unsafe { HPDF_Page_SetMiterLimit(self.as_raw(), limit) };
        self.check("HPDF_Page_SetMiterLimit", status)
    }

    /// Set the dash pattern. An empty pattern restores solid lines.
    ///
    /// libharu rejects patterns longer than eight entries.
    pub fn set_dash(&self, pattern: &[f32], phase: f32) -> Result<()> {
        let count = HPDF_UINT::try_from(pattern.len()).unwrap_or(HPDF_UINT::MAX);
        let status = unsafe { HPDF_Page_SetDash(self.as_raw(), pattern.as_ptr(), count, phase) };
        self.check("HPDF_Page_SetDash", status)
    }

    /// Push the graphics state.
    pub fn g_save(&self) -> Result<()> {
        let status = unsafe { HPDF_Page_GSave(self.as_raw()) };
        self.check("HPDF_Page_GSave", status)
    }

    /// Pop the graphics state.
    pub fn g_restore(&self) -> Result<()> {
        let status = unsafe { HPDF_Page_GRestore(self.as_raw()) };
        self.check("HPDF_Page_GRestore", status)
    }

    /// Concatenate a transformation matrix onto the CTM.
    pub fn concat(&self, a: f32, b: f32, c: f32, d: f32, x: f32, y: f32) -> Result<()> {
        let status = unsafe { HPDF_Page_Concat(self.as_raw(), a, b, c, d, x, y) };
        self.check("HPDF_Page_Concat", status)
    }

    // ========================================
    // Color
    // ========================================

    pub fn set_gray_fill(&self, gray: f32) -> Result<()> {
        let status = unsafe { HPDF_Page_SetGrayFill(self.as_raw(), gray) };
        self.check("HPDF_Page_SetGrayFill", status)
    }

    pub fn set_gray_stroke(&self, gray: f32) -> Result<()> {
        let status = unsafe { HPDF_Page_SetGrayStroke(self.as_raw(), gray) };
        self.check("HPDF_Page_SetGrayStroke", status)
    }

    pub fn set_rgb_fill(&self, r: f32, g: f32, b: f32) -> Result<()> {
        let status = unsafe { HPDF_Page_SetRGBFill(self.as_raw(), r, g, b) };
        self.check("HPDF_Page_SetRGBFill", status)
    }

    pub fn set_rgb_stroke(&self, r: f32, g: f32, b: f32) -> Result<()> {
        let status = unsafe { HPDF_Page_SetRGBStroke(self.as_raw(), r, g, b) };
        self.check("HPDF_Page_SetRGBStroke", status)
    }

    pub fn set_cmyk_fill(&self, c: f32, m: f32, y: f32, k: f32) -> Result<()> {
        let status = unsafe { HPDF_Page_SetCMYKFill(self.as_raw(), c, m, y, k) };
        self.check("HPDF_Page_SetCMYKFill", status)
    }

    pub fn set_cmyk_stroke(&self, c: f32, m: f32, y: f32, k: f32) -> Result<()> {
        let status = unsafe { HPDF_Page_SetCMYKStroke(self.as_raw(), c, m, y, k) };
        self.check("HPDF_Page_SetCMYKStroke", status)
    }

    // ========================================
    // Path construction
    // ========================================

    pub fn move_to(&self, x: f32, y: f32) -> Result<()> {
        let status = unsafe { HPDF_Page_MoveTo(self.as_raw(), x, y) };
        self.check("HPDF_Page_MoveTo", status)
    }

    pub fn line_to(&self, x: f32, y: f32) -> Result<()> {
        let status = unsafe { HPDF_Page_LineTo(self.as_raw(), x, y) };
        self.check("HPDF_Page_LineTo", status)
    }

    /// Cubic Bézier with two explicit control points.
    pub fn curve_to(&self, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32) -> Result<()> {
        let status = unsafe { HPDF_Page_CurveTo(self.as_raw(), x1, y1, x2, y2, x3, y3) };
        self.check("HPDF_Page_CurveTo", status)
    }

    /// Cubic Bézier whose first control point is the current point.
    pub fn curve_to2(&self, x2: f32, y2: f32, x3: f32, y3: f32) -> Result<()> {
        let status = unsafe { HPDF_Page_CurveTo2(self.as_raw(), x2, y2, x3, y3) };
        self.check("HPDF_Page_CurveTo2", status)
    }

    /// Cubic Bézier whose second control point is the end point.
    pub fn curve_to3(&self, x1: f32, y1: f32, x3: f32, y3: f32) -> Result<()> {
        let status = unsafe { HPDF_Page_CurveTo3(self.as_raw(), x1, y1, x3, y3) };
        self.check("HPDF_Page_CurveTo3", status)
    }

    pub fn close_path(&self) -> Result<()> {
        let status = unsafe { HPDF_Page_ClosePath(self.as_raw()) };
        self.check("HPDF_Page_ClosePath", status)
    }

    pub fn rectangle(&self, x: f32, y: f32, width: f32, height: f32) -> Result<()> {
        let status = unsafe { HPDF_Page_Rectangle(self.as_raw(), x, y, width, height) };
        self.check("HPDF_Page_Rectangle", status)
    }

    pub fn circle(&self, x: f32, y: f32, radius: f32) -> Result<()> {
        let status = unsafe { HPDF_Page_Circle(self.as_raw(), x, y, radius) };
        self.check("HPDF_Page_Circle", status)
    }

    pub fn ellipse(&self, x: f32, y: f32, x_radius: f32, y_radius: f32) -> Result<()> {
        let status = unsafe { HPDF_Page_Ellipse(self.as_raw(), x, y, x_radius, y_radius) };
        self.check("HPDF_Page_Ellipse", status)
    }

    /// Arc from `start_angle` to `end_angle` in degrees, clockwise from 12 o'clock.
    pub fn arc(&self, x: f32, y: f32, radius: f32, start_angle: f32, end_angle: f32) -> Result<()> {
        let status = unsafe { HPDF_Page_Arc(self.as_raw(), x, y, radius, start_angle, end_angle) };
        self.check("HPDF_Page_Arc", status)
    }

    // ========================================
    // Painting and clipping
    // ========================================

    pub fn stroke(&self) -> Result<()> {
        let status = unsafe { HPDF_Page_Stroke(self.as_raw()) };
        self.check("HPDF_Page_Stroke", status)
    }

    pub fn close_path_stroke(&self) -> Result<()> {
        let status = unsafe { HPDF_Page_ClosePathStroke(self.as_raw()) };
        self.check("HPDF_Page_ClosePathStroke", status)
    }

    pub fn fill(&self) -> Result<()> {
        let status = unsafe { HPDF_Page_Fill(self.as_raw()) };
        self.check("HPDF_Page_Fill", status)
    }

    /// Fill using the even-odd rule.
    pub fn eofill(&self) -> Result<()> {
        let status = unsafe { HPDF_Page_Eofill(self.as_raw()) };
        self.check("HPDF_Page_Eofill", status)
    }

    pub fn fill_stroke(&self) -> Result<()> {
        let status = unsafe { HPDF_Page_FillStroke(self.as_raw()) };
        self.check("HPDF_Page_FillStroke", status)
    }

    pub fn eofill_stroke(&self) -> Result<()> {
        let status = unsafe { HPDF_Page_EofillStroke(self.as_raw()) };
        self.check("HPDF_Page_EofillStroke", status)
    }

    pub fn close_path_fill_stroke(&self) -> Result<()> {
        let status = unsafe { HPDF_Page_ClosePathFillStroke(self.as_raw()) };
        self.check("HPDF_Page_ClosePathFillStroke", status)
    }

    pub fn close_path_eofill_stroke(&self) -> Result<()> {
        let status = unsafe { HPDF_Page_ClosePathEofillStroke(self.as_raw()) };
        self.check("HPDF_Page_ClosePathEofillStroke", status)
    }

    /// End the path without painting it.
    pub fn end_path(&self) -> Result<()> {
        let status = unsafe { HPDF_Page_EndPath(self.as_raw()) };
        self.check("HPDF_Page_EndPath", status)
    }

    /// Intersect the clip with the current path. Takes effect after the next painting operator.
    pub fn clip(&self) -> Result<()> {
        let status = unsafe { HPDF_Page_Clip(self.as_raw()) };
        self.check("HPDF_Page_Clip", status)
    }

    pub fn eoclip(&self) -> Result<()> {
        let status = unsafe { HPDF_Page_Eoclip(self.as_raw()) };
        self.check("HPDF_Page_Eoclip", status)
    }

    // ========================================
    // Text
    // ========================================

    pub fn begin_text(&self) -> Result<()> {
        let status = unsafe { HPDF_Page_BeginText(self.as_raw()) };
        self.check("HPDF_Page_BeginText", status)
    }

    pub fn end_text(&self) -> Result<()> {
        let status = unsafe { HPDF_Page_EndText(self.as_raw()) };
        self.check("HPDF_Page_EndText", status)
    }

    pub fn set_font_and_size(&self, font: &PdfFont<'_>, size: f32) -> Result<()> {
        let status = unsafe { HPDF_Page_SetFontAndSize(self.as_raw(), font.as_raw(), size) };
        self.check("HPDF_Page_SetFontAndSize", status)
    }

    pub fn current_font_size(&self) -> f32 {
        unsafe { HPDF_Page_GetCurrentFontSize(self.as_raw()) }
    }

    /// Width of `text` in the current font and size.
    ///
    /// Fails with `HPDF_PAGE_FONT_NOT_FOUND` when no font is set.
    pub fn text_width(&self, text: &str) -> Result<f32> {
        let text = CString::new(text)?;
        let width = unsafe { HPDF_Page_TextWidth(self.as_raw(), text.as_ptr()) };
        unsafe { check_raised(self.parent_raw(), "HPDF_Page_TextWidth") }?;
        Ok(width)
    }

    pub fn set_char_space(&self, value: f32) -> Result<()> {
        let status = unsafe { HPDF_Page_SetCharSpace(self.as_raw(), value) };
        self.check("HPDF_Page_SetCharSpace", status)
    }

    pub fn set_word_space(&self, value: f32) -> Result<()> {
        let status = unsafe { HPDF_Page_SetWordSpace(self.as_raw(), value) };
        self.check("HPDF_Page_SetWordSpace", status)
    }

    /// Horizontal scaling in percent (100 is unscaled).
    pub fn set_horizontal_scaling(&self, value: f32) -> Result<()> {
        let status = unsafe { HPDF_Page_SetHorizontalScalling(self.as_raw(), value) };
        self.check("HPDF_Page_SetHorizontalScalling", status)
    }

    pub fn set_text_leading(&self, value: f32) -> Result<()> {
        let status = unsafe { HPDF_Page_SetTextLeading(self.as_raw(), value) };
        self.check("HPDF_Page_SetTextLeading", status)
    }

    pub fn set_text_rendering_mode(&self, mode: TextRenderingMode) -> Result<()> {
        let status = unsafe { HPDF_Page_SetTextRenderingMode(self.as_raw(), mode.to_raw()) };
        self.check("HPDF_Page_SetTextRenderingMode", status)
    }

    pub fn set_text_rise(&self, value: f32) -> Result<()> {
        let status = unsafe { HPDF_Page_SetTextRise(self.as_raw(), value) };
        self.check("HPDF_Page_SetTextRise", status)
    }

    pub fn set_text_matrix(&self, a: f32, b: f32, c: f32, d: f32, x: f32, y: f32) -> Result<()> {
        let status = unsafe { HPDF_Page_SetTextMatrix(self.as_raw(), a, b, c, d, x, y) };
        self.check("HPDF_Page_SetTextMatrix", status)
    }

    pub fn move_text_pos(&self, x: f32, y: f32) -> Result<()> {
        let status = unsafe { HPDF_Page_MoveTextPos(self.as_raw(), x, y) };
        self.check("HPDF_Page_MoveTextPos", status)
    }

    /// Like [`move_text_pos`](Self::move_text_pos), also setting the leading to `-y`.
    pub fn move_text_pos2(&self, x: f32, y: f32) -> Result<()> {
        let status = unsafe { HPDF_Page_MoveTextPos2(self.as_raw(), x, y) };
        self.check("HPDF_Page_MoveTextPos2", status)
    }

    pub fn move_to_next_line(&self) -> Result<()> {
        let status = unsafe { HPDF_Page_MoveToNextLine(self.as_raw()) };
        self.check("HPDF_Page_MoveToNextLine", status)
    }

    pub fn show_text(&self, text: &str) -> Result<()> {
        let text = CString::new(text)?;
        let status = unsafe { HPDF_Page_ShowText(self.as_raw(), text.as_ptr()) };
        self.check("HPDF_Page_ShowText", status)
    }

    pub fn show_text_next_line(&self, text: &str) -> Result<()> {
        let text = CString::new(text)?;
        let status = unsafe { HPDF_Page_ShowTextNextLine(self.as_raw(), text.as_ptr()) };
        self.check("HPDF_Page_ShowTextNextLine", status)
    }

    pub fn show_text_next_line_ex(
        &self,
        word_space: f32,
        char_space: f32,
        text: &str,
    ) -> Result<()> {
        let text = CString::new(text)?;
        let status = unsafe {
            HPDF_Page_ShowTextNextLineEx(self.as_raw(), word_space, char_space, text.as_ptr())
        };
        self.check("HPDF_Page_ShowTextNextLineEx", status)
    }

    pub fn text_out(&self, x: f32, y: f32, text: &str) -> Result<()> {
        let text = CString::new(text)?;
        let status = unsafe { HPDF_Page_TextOut(self.as_raw(), x, y, text.as_ptr()) };
        self.check("HPDF_Page_TextOut", status)
    }

    /// Lay `text` out inside a rectangle. Returns the number of characters
    /// placed, which is short of the whole text when the rectangle fills up.
    #[allow(clippy::too_many_arguments)]
    pub fn text_rect(
        &self,
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
        text: &str,
        align: TextAlignment,
    ) -> Result<u32> {
        let text = CString::new(text)?;
        let mut len: HPDF_UINT = 0;
        let status = unsafe {
            HPDF_Page_TextRect(
                self.as_raw(),
                left,
                top,
                right,
                bottom,
                text.as_ptr(),
                align.to_raw(),
                &mut len,
            )
        };
        // Running out of room is reported without raising an error.
        if Status::from_raw(status) == Status::PAGE_INSUFFICIENT_SPACE {
            return Ok(len);
        }
        self.check("HPDF_Page_TextRect", status)?;
        Ok(len)
    }

    // ========================================
    // Images
    // ========================================

    pub fn draw_image(
        &self,
        image: &PdfImage<'_>,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Result<()> {
        let status =
            unsafe { HPDF_Page_DrawImage(self.as_raw(), image.as_raw(), x, y, width, height) };
        self.check("HPDF_Page_DrawImage", status)
    }

    /// Load a JPEG from memory into the parent document and draw it.
    pub fn draw_jpeg_image(
        &self,
        data: &[u8],
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Result<()> {
        let doc = self.parent();
        let image = doc.load_jpeg_image_from_mem(data)?;
        self.draw_image(&image, x, y, width, height)
    }

    pub fn draw_jpeg_image_from_file(
        &self,
        path: impl AsRef<Path>,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Result<()> {
        let doc = self.parent();
        let image = doc.load_jpeg_image_from_file(path)?;
        self.draw_image(&image, x, y, width, height)
    }

    /// Load a PNG from memory into the parent document and draw it.
    pub fn draw_png_image(
        &self,
        data: &[u8],
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Result<()> {
        let doc = self.parent();
        let image = doc.load_png_image_from_mem(data)?;
        self.draw_image(&image, x, y, width, height)
    }

    pub fn draw_png_image_from_file(
        &self,
        path: impl AsRef<Path>,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Result<()> {
        let doc = self.parent();
        let image = doc.load_png_image_from_file(path)?;
        self.draw_image(&image, x, y, width, height)
    }

    fn parent(&self) -> std::mem::ManuallyDrop<PdfDocument> {
        // SAFETY: the page borrows a live document for 'doc, and the view
        // is never dropped.
        unsafe { PdfDocument::borrow_raw(self.doc) }
    }
}
