//! FFI bindings to libharu
//!
//! This crate declares the subset of the libharu (`libhpdf`) C API used by the
//! binding layer: document lifecycle and serialization, document attributes,
//! page geometry, the path/text drawing operators, fonts and images.
//!
//! The declarations follow `hpdf.h`, `hpdf_types.h`, `hpdf_consts.h` and
//! `hpdf_error.h` from libharu 2.4 and later. libharu 2.3 declares
//! `HPDF_Page_SetDash` with `HPDF_UINT16` dash entries and an integer phase,
//! which is not ABI compatible with the declaration here.
//!
//! # Safety
//!
//! Every function here is an `unsafe extern "C"` call straight into libharu.
//! Handles are opaque pointers owned by libharu; nothing is validated on the
//! Rust side.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]

use libc::{c_char, c_float, c_int, c_uint, c_ulong, c_void};

// ========================================
// Scalar types (hpdf_types.h)
// ========================================

pub type HPDF_INT = c_int;
pub type HPDF_UINT = c_uint;
pub type HPDF_UINT16 = u16;
pub type HPDF_UINT32 = u32;
pub type HPDF_BYTE = u8;
pub type HPDF_REAL = c_float;
pub type HPDF_BOOL = c_int;
pub type HPDF_STATUS = c_ulong;

pub const HPDF_TRUE: HPDF_BOOL = 1;
pub const HPDF_FALSE: HPDF_BOOL = 0;
pub const HPDF_OK: HPDF_STATUS = 0;

// ========================================
// Opaque handles
// ========================================

#[repr(C)]
pub struct _HPDF_Doc_Rec {
    _private: [u8; 0],
}

#[repr(C)]
pub struct _HPDF_Dict_Rec {
    _private: [u8; 0],
}

pub type HPDF_Doc = *mut _HPDF_Doc_Rec;
/// Pages, fonts and images are all dictionary objects inside libharu.
pub type HPDF_Page = *mut _HPDF_Dict_Rec;
pub type HPDF_Font = *mut _HPDF_Dict_Rec;
pub type HPDF_Image = *mut _HPDF_Dict_Rec;

pub type HPDF_Error_Handler =
    Option<
        unsafe extern "C" fn(error_no: HPDF_STATUS, detail_no: HPDF_STATUS, user_data: *mut c_void),
    >;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HPDF_Point {
    pub x: HPDF_REAL,
    pub y: HPDF_REAL,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HPDF_Date {
    pub year: HPDF_INT,
    pub month: HPDF_INT,
    pub day: HPDF_INT,
    pub hour: HPDF_INT,
    pub minutes: HPDF_INT,
    pub seconds: HPDF_INT,
    /// One of `' '`, `'+'`, `'-'` or `'Z'`.
    pub ind: c_char,
    pub off_hour: HPDF_INT,
    pub off_minutes: HPDF_INT,
}

// ========================================
// Enumerations (hpdf_types.h)
// ========================================

pub type HPDF_PageSizes = c_uint;
pub const HPDF_PAGE_SIZE_LETTER: HPDF_PageSizes = 0;
pub const HPDF_PAGE_SIZE_LEGAL: HPDF_PageSizes = 1;
pub const HPDF_PAGE_SIZE_A3: HPDF_PageSizes = 2;
pub const HPDF_PAGE_SIZE_A4: HPDF_PageSizes = 3;
pub const HPDF_PAGE_SIZE_A5: HPDF_PageSizes = 4;
pub const HPDF_PAGE_SIZE_B4: HPDF_PageSizes = 5;
pub const HPDF_PAGE_SIZE_B5: HPDF_PageSizes = 6;
pub const HPDF_PAGE_SIZE_EXECUTIVE: HPDF_PageSizes = 7;
pub const HPDF_PAGE_SIZE_US4x6: HPDF_PageSizes = 8;
pub const HPDF_PAGE_SIZE_US4x8: HPDF_PageSizes = 9;
pub const HPDF_PAGE_SIZE_US5x7: HPDF_PageSizes = 10;
pub const HPDF_PAGE_SIZE_COMM10: HPDF_PageSizes = 11;

pub type HPDF_PageDirection = c_uint;
pub const HPDF_PAGE_PORTRAIT: HPDF_PageDirection = 0;
pub const HPDF_PAGE_LANDSCAPE: HPDF_PageDirection = 1;

pub type HPDF_LineCap = c_uint;
pub const HPDF_BUTT_END: HPDF_LineCap = 0;
pub const HPDF_ROUND_END: HPDF_LineCap = 1;
/// Spelled as in libharu.
pub const HPDF_PROJECTING_SCUARE_END: HPDF_LineCap = 2;

pub type HPDF_LineJoin = c_uint;
pub const HPDF_MITER_JOIN: HPDF_LineJoin = 0;
pub const HPDF_ROUND_JOIN: HPDF_LineJoin = 1;
pub const HPDF_BEVEL_JOIN: HPDF_LineJoin = 2;

pub type HPDF_TextRenderingMode = c_uint;
pub const HPDF_FILL: HPDF_TextRenderingMode = 0;
pub const HPDF_STROKE: HPDF_TextRenderingMode = 1;
pub const HPDF_FILL_THEN_STROKE: HPDF_TextRenderingMode = 2;
pub const HPDF_INVISIBLE: HPDF_TextRenderingMode = 3;
pub const HPDF_FILL_CLIPPING: HPDF_TextRenderingMode = 4;
pub const HPDF_STROKE_CLIPPING: HPDF_TextRenderingMode = 5;
pub const HPDF_FILL_STROKE_CLIPPING: HPDF_TextRenderingMode = 6;
pub const HPDF_CLIPPING: HPDF_TextRenderingMode = 7;

pub type HPDF_TextAlignment = c_uint;
pub const HPDF_TALIGN_LEFT: HPDF_TextAlignment = 0;
pub const HPDF_TALIGN_RIGHT: HPDF_TextAlignment = 1;
pub const HPDF_TALIGN_CENTER: HPDF_TextAlignment = 2;
pub const HPDF_TALIGN_JUSTIFY: HPDF_TextAlignment = 3;

pub type HPDF_InfoType = c_uint;
pub const HPDF_INFO_CREATION_DATE: HPDF_InfoType = 0;
pub const HPDF_INFO_MOD_DATE: HPDF_InfoType = 1;
pub const HPDF_INFO_AUTHOR: HPDF_InfoType = 2;
pub const HPDF_INFO_CREATOR: HPDF_InfoType = 3;
pub const HPDF_INFO_PRODUCER: HPDF_InfoType = 4;
pub const HPDF_INFO_TITLE: HPDF_InfoType = 5;
pub const HPDF_INFO_SUBJECT: HPDF_InfoType = 6;
pub const HPDF_INFO_KEYWORDS: HPDF_InfoType = 7;

pub type HPDF_PageLayout = c_uint;
pub const HPDF_PAGE_LAYOUT_SINGLE: HPDF_PageLayout = 0;
pub const HPDF_PAGE_LAYOUT_ONE_COLUMN: HPDF_PageLayout = 1;
pub const HPDF_PAGE_LAYOUT_TWO_COLUMN_LEFT: HPDF_PageLayout = 2;
pub const HPDF_PAGE_LAYOUT_TWO_COLUMN_RIGHT: HPDF_PageLayout = 3;

pub type HPDF_PageMode = c_uint;
pub const HPDF_PAGE_MODE_USE_NONE: HPDF_PageMode = 0;
pub const HPDF_PAGE_MODE_USE_OUTLINE: HPDF_PageMode = 1;
pub const HPDF_PAGE_MODE_USE_THUMBS: HPDF_PageMode = 2;
pub const HPDF_PAGE_MODE_FULL_SCREEN: HPDF_PageMode = 3;

// ========================================
// Constants (hpdf_consts.h)
// ========================================

pub const HPDF_COMP_NONE: HPDF_UINT = 0x00;
pub const HPDF_COMP_TEXT: HPDF_UINT = 0x01;
pub const HPDF_COMP_IMAGE: HPDF_UINT = 0x02;
pub const HPDF_COMP_METADATA: HPDF_UINT = 0x04;
pub const HPDF_COMP_ALL: HPDF_UINT = 0x0F;

pub const HPDF_GMODE_PAGE_DESCRIPTION: HPDF_UINT16 = 0x0001;
pub const HPDF_GMODE_PATH_OBJECT: HPDF_UINT16 = 0x0002;
pub const HPDF_GMODE_TEXT_OBJECT: HPDF_UINT16 = 0x0004;
pub const HPDF_GMODE_CLIPPING_PATH: HPDF_UINT16 = 0x0008;
pub const HPDF_GMODE_SHADING: HPDF_UINT16 = 0x0010;
pub const HPDF_GMODE_INLINE_IMAGE: HPDF_UINT16 = 0x0020;
pub const HPDF_GMODE_EXTERNAL_OBJECT: HPDF_UINT16 = 0x0040;

pub const HPDF_DEF_PAGE_WIDTH: HPDF_REAL = 595.276;
pub const HPDF_DEF_PAGE_HEIGHT: HPDF_REAL = 841.89;
pub const HPDF_MIN_PAGE_SIZE: HPDF_REAL = 3.0;
pub const HPDF_MAX_PAGE_SIZE: HPDF_REAL = 14400.0;
pub const HPDF_MAX_DASH_PATTERN: usize = 8;

// ========================================
// Error codes (hpdf_error.h)
// ========================================

pub const HPDF_EXCEED_GSTATE_LIMIT: HPDF_STATUS = 0x1014;
pub const HPDF_FAILD_TO_ALLOC_MEM: HPDF_STATUS = 0x1015;
pub const HPDF_FILE_IO_ERROR: HPDF_STATUS = 0x1016;
pub const HPDF_FILE_OPEN_ERROR: HPDF_STATUS = 0x1017;
pub const HPDF_INVALID_COMPRESSION_MODE: HPDF_STATUS = 0x1021;
pub const HPDF_INVALID_DATE_TIME: HPDF_STATUS = 0x1022;
pub const HPDF_INVALID_DOCUMENT: HPDF_STATUS = 0x1025;
pub const HPDF_INVALID_DOCUMENT_STATE: HPDF_STATUS = 0x1026;
pub const HPDF_INVALID_FONT_NAME: HPDF_STATUS = 0x102F;
pub const HPDF_INVALID_IMAGE: HPDF_STATUS = 0x1030;
pub const HPDF_INVALID_JPEG_DATA: HPDF_STATUS = 0x1031;
pub const HPDF_INVALID_PAGE: HPDF_STATUS = 0x1037;
pub const HPDF_INVALID_PARAMETER: HPDF_STATUS = 0x1039;
pub const HPDF_INVALID_PNG_IMAGE: HPDF_STATUS = 0x103B;
pub const HPDF_PAGE_CANNOT_RESTORE_GSTATE: HPDF_STATUS = 0x104C;
pub const HPDF_PAGE_FONT_NOT_FOUND: HPDF_STATUS = 0x104E;
pub const HPDF_PAGE_INVALID_FONT_SIZE: HPDF_STATUS = 0x1050;
pub const HPDF_PAGE_INVALID_GMODE: HPDF_STATUS = 0x1051;
pub const HPDF_PAGE_INVALID_SIZE: HPDF_STATUS = 0x1054;
pub const HPDF_STREAM_EOF: HPDF_STATUS = 0x1058;
pub const HPDF_PAGE_INSUFFICIENT_SPACE: HPDF_STATUS = 0x1076;

extern "C" {
    // ----------------------------------------
    // Document lifecycle
    // ----------------------------------------

    pub fn HPDF_GetVersion() -> *const c_char;

    /// Allocate a document object and an empty document. Returns null when
    /// allocation fails.
    pub fn HPDF_New(user_error_fn: HPDF_Error_Handler, user_data: *mut c_void) -> HPDF_Doc;

    pub fn HPDF_NewDoc(pdf: HPDF_Doc) -> HPDF_STATUS;

    pub fn HPDF_FreeDoc(pdf: HPDF_Doc);

    pub fn HPDF_FreeDocAll(pdf: HPDF_Doc);

    pub fn HPDF_Free(pdf: HPDF_Doc);

    pub fn HPDF_HasDoc(pdf: HPDF_Doc) -> HPDF_BOOL;

    // ----------------------------------------
    // Serialization
    // ----------------------------------------

    pub fn HPDF_SaveToFile(pdf: HPDF_Doc, file_name: *const c_char) -> HPDF_STATUS;

    pub fn HPDF_SaveToStream(pdf: HPDF_Doc) -> HPDF_STATUS;

    pub fn HPDF_GetStreamSize(pdf: HPDF_Doc) -> HPDF_UINT32;

    pub fn HPDF_ReadFromStream(
        pdf: HPDF_Doc,
        buf: *mut HPDF_BYTE,
        size: *mut HPDF_UINT32,
    ) -> HPDF_STATUS;

    pub fn HPDF_ResetStream(pdf: HPDF_Doc) -> HPDF_STATUS;

    // ----------------------------------------
    // Error state
    // ----------------------------------------

    pub fn HPDF_GetError(pdf: HPDF_Doc) -> HPDF_STATUS;

    pub fn HPDF_GetErrorDetail(pdf: HPDF_Doc) -> HPDF_STATUS;

    pub fn HPDF_ResetError(pdf: HPDF_Doc);

    // ----------------------------------------
    // Document attributes
    // ----------------------------------------

    pub fn HPDF_SetCompressionMode(pdf: HPDF_Doc, mode: HPDF_UINT) -> HPDF_STATUS;

    pub fn HPDF_SetInfoAttr(pdf: HPDF_Doc, type_: HPDF_InfoType, value: *const c_char)
        -> HPDF_STATUS;

    pub fn HPDF_GetInfoAttr(pdf: HPDF_Doc, type_: HPDF_InfoType) -> *const c_char;

    pub fn HPDF_SetInfoDateAttr(pdf: HPDF_Doc, type_: HPDF_InfoType, value: HPDF_Date)
        -> HPDF_STATUS;

    pub fn HPDF_SetPageLayout(pdf: HPDF_Doc, layout: HPDF_PageLayout) -> HPDF_STATUS;

    pub fn HPDF_GetPageLayout(pdf: HPDF_Doc) -> HPDF_PageLayout;

    pub fn HPDF_SetPageMode(pdf: HPDF_Doc, mode: HPDF_PageMode) -> HPDF_STATUS;

    pub fn HPDF_GetPageMode(pdf: HPDF_Doc) -> HPDF_PageMode;

    // ----------------------------------------
    // Pages, fonts, images
    // ----------------------------------------

    pub fn HPDF_GetCurrentPage(pdf: HPDF_Doc) -> HPDF_Page;

    pub fn HPDF_AddPage(pdf: HPDF_Doc) -> HPDF_Page;

    pub fn HPDF_InsertPage(pdf: HPDF_Doc, page: HPDF_Page) -> HPDF_Page;

    pub fn HPDF_GetFont(
        pdf: HPDF_Doc,
        font_name: *const c_char,
        encoding_name: *const c_char,
    ) -> HPDF_Font;

    pub fn HPDF_Font_GetFontName(font: HPDF_Font) -> *const c_char;

    pub fn HPDF_LoadPngImageFromMem(
        pdf: HPDF_Doc,
        buffer: *const HPDF_BYTE,
        size: HPDF_UINT,
    ) -> HPDF_Image;

    pub fn HPDF_LoadPngImageFromFile(pdf: HPDF_Doc, filename: *const c_char) -> HPDF_Image;

    pub fn HPDF_LoadJpegImageFromMem(
        pdf: HPDF_Doc,
        buffer: *const HPDF_BYTE,
        size: HPDF_UINT,
    ) -> HPDF_Image;

    pub fn HPDF_LoadJpegImageFromFile(pdf: HPDF_Doc, filename: *const c_char) -> HPDF_Image;

    pub fn HPDF_Image_GetWidth(image: HPDF_Image) -> HPDF_UINT;

    pub fn HPDF_Image_GetHeight(image: HPDF_Image) -> HPDF_UINT;

    // ----------------------------------------
    // Page geometry and state
    // ----------------------------------------

    pub fn HPDF_Page_SetWidth(page: HPDF_Page, value: HPDF_REAL) -> HPDF_STATUS;

    pub fn HPDF_Page_SetHeight(page: HPDF_Page, value: HPDF_REAL) -> HPDF_STATUS;

    pub fn HPDF_Page_SetSize(
        page: HPDF_Page,
        size: HPDF_PageSizes,
        direction: HPDF_PageDirection,
    ) -> HPDF_STATUS;

    pub fn HPDF_Page_GetWidth(page: HPDF_Page) -> HPDF_REAL;

    pub fn HPDF_Page_GetHeight(page: HPDF_Page) -> HPDF_REAL;

    pub fn HPDF_Page_GetGMode(page: HPDF_Page) -> HPDF_UINT16;

    pub fn HPDF_Page_GetCurrentPos(page: HPDF_Page) -> HPDF_Point;

    pub fn HPDF_Page_GetCurrentTextPos(page: HPDF_Page) -> HPDF_Point;

    pub fn HPDF_Page_GetCurrentFontSize(page: HPDF_Page) -> HPDF_REAL;

    pub fn HPDF_Page_TextWidth(page: HPDF_Page, text: *const c_char) -> HPDF_REAL;

    pub fn HPDF_Page_GetLineWidth(page: HPDF_Page) -> HPDF_REAL;

    pub fn HPDF_Page_GetLineCap(page: HPDF_Page) -> HPDF_LineCap;

    pub fn HPDF_Page_GetLineJoin(page: HPDF_Page) -> HPDF_LineJoin;

    pub fn HPDF_Page_GetMiterLimit(page: HPDF_Page) -> HPDF_REAL;

    // ----------------------------------------
    // General graphics state
    // ----------------------------------------

    pub fn HPDF_Page_SetLineWidth(page: HPDF_Page, line_width: HPDF_REAL) -> HPDF_STATUS;

    pub fn HPDF_Page_SetLineCap(page: HPDF_Page, line_cap: HPDF_LineCap) -> HPDF_STATUS;

    pub fn HPDF_Page_SetLineJoin(page: HPDF_Page, line_join: HPDF_LineJoin) -> HPDF_STATUS;

    pub fn HPDF_Page_SetMiterLimit(page: HPDF_Page, miter_limit: HPDF_REAL) -> HPDF_STATUS;

    /// libharu 2.4 signature (`HPDF_REAL` pattern and phase).
    pub fn HPDF_Page_SetDash(
        page: HPDF_Page,
        dash_ptn: *const HPDF_REAL,
        num_param: HPDF_UINT,
        phase: HPDF_REAL,
    ) -> HPDF_STATUS;

    pub fn HPDF_Page_GSave(page: HPDF_Page) -> HPDF_STATUS;

    pub fn HPDF_Page_GRestore(page: HPDF_Page) -> HPDF_STATUS;

    pub fn HPDF_Page_Concat(
        page: HPDF_Page,
        a: HPDF_REAL,
        b: HPDF_REAL,
        c: HPDF_REAL,
        d: HPDF_REAL,
        x: HPDF_REAL,
        y: HPDF_REAL,
    ) -> HPDF_STATUS;

    // ----------------------------------------
    // Path construction
    // ----------------------------------------

    pub fn HPDF_Page_MoveTo(page: HPDF_Page, x: HPDF_REAL, y: HPDF_REAL) -> HPDF_STATUS;

    pub fn HPDF_Page_LineTo(page: HPDF_Page, x: HPDF_REAL, y: HPDF_REAL) -> HPDF_STATUS;

    pub fn HPDF_Page_CurveTo(
        page: HPDF_Page,
        x1: HPDF_REAL,
        y1: HPDF_REAL,
        x2: HPDF_REAL,
        y2: HPDF_REAL,
        x3: HPDF_REAL,
        y3: HPDF_REAL,
    ) -> HPDF_STATUS;

    pub fn HPDF_Page_CurveTo2(
        page: HPDF_Page,
        x2: HPDF_REAL,
        y2: HPDF_REAL,
        x3: HPDF_REAL,
        y3: HPDF_REAL,
    ) -> HPDF_STATUS;

    pub fn HPDF_Page_CurveTo3(
        page: HPDF_Page,
        x1: HPDF_REAL,
        y1: HPDF_REAL,
        x3: HPDF_REAL,
        y3: HPDF_REAL,
    ) -> HPDF_STATUS;

    pub fn HPDF_Page_ClosePath(page: HPDF_Page) -> HPDF_STATUS;

    pub fn HPDF_Page_Rectangle(
        page: HPDF_Page,
        x: HPDF_REAL,
        y: HPDF_REAL,
        width: HPDF_REAL,
        height: HPDF_REAL,
    ) -> HPDF_STATUS;

    pub fn HPDF_Page_Circle(page: HPDF_Page, x: HPDF_REAL, y: HPDF_REAL, ray: HPDF_REAL)
        -> HPDF_STATUS;

    pub fn HPDF_Page_Ellipse(
        page: HPDF_Page,
        x: HPDF_REAL,
        y: HPDF_REAL,
        xray: HPDF_REAL,
        yray: HPDF_REAL,
    ) -> HPDF_STATUS;

    pub fn HPDF_Page_Arc(
        page: HPDF_Page,
        x: HPDF_REAL,
        y: HPDF_REAL,
        ray: HPDF_REAL,
        ang1: HPDF_REAL,
        ang2: HPDF_REAL,
    ) -> HPDF_STATUS;

    // ----------------------------------------
    // Path painting and clipping
    // ----------------------------------------

    pub fn HPDF_Page_Stroke(page: HPDF_Page) -> HPDF_STATUS;

    pub fn HPDF_Page_ClosePathStroke(page: HPDF_Page) -> HPDF_STATUS;

    pub fn HPDF_Page_Fill(page: HPDF_Page) -> HPDF_STATUS;

    pub fn HPDF_Page_Eofill(page: HPDF_Page) -> HPDF_STATUS;

    pub fn HPDF_Page_FillStroke(page: HPDF_Page) -> HPDF_STATUS;

    pub fn HPDF_Page_EofillStroke(page: HPDF_Page) -> HPDF_STATUS;

    pub fn HPDF_Page_ClosePathFillStroke(page: HPDF_Page) -> HPDF_STATUS;

    pub fn HPDF_Page_ClosePathEofillStroke(page: HPDF_Page) -> HPDF_STATUS;

    pub fn HPDF_Page_EndPath(page: HPDF_Page) -> HPDF_STATUS;

    pub fn HPDF_Page_Clip(page: HPDF_Page) -> HPDF_STATUS;

    pub fn HPDF_Page_Eoclip(page: HPDF_Page) -> HPDF_STATUS;

    // ----------------------------------------
    // Text objects and text state
    // ----------------------------------------

    pub fn HPDF_Page_BeginText(page: HPDF_Page) -> HPDF_STATUS;

    pub fn HPDF_Page_EndText(page: HPDF_Page) -> HPDF_STATUS;

    pub fn HPDF_Page_SetCharSpace(page: HPDF_Page, value: HPDF_REAL) -> HPDF_STATUS;

    pub fn HPDF_Page_SetWordSpace(page: HPDF_Page, value: HPDF_REAL) -> HPDF_STATUS;

    /// Spelled as in libharu.
    pub fn HPDF_Page_SetHorizontalScalling(page: HPDF_Page, value: HPDF_REAL) -> HPDF_STATUS;

    pub fn HPDF_Page_SetTextLeading(page: HPDF_Page, value: HPDF_REAL) -> HPDF_STATUS;

    pub fn HPDF_Page_SetFontAndSize(page: HPDF_Page, font: HPDF_Font, size: HPDF_REAL)
        -> HPDF_STATUS;

    pub fn HPDF_Page_SetTextRenderingMode(
        page: HPDF_Page,
        mode: HPDF_TextRenderingMode,
    ) -> HPDF_STATUS;

    pub fn HPDF_Page_SetTextRise(page: HPDF_Page, value: HPDF_REAL) -> HPDF_STATUS;

    pub fn HPDF_Page_MoveTextPos(page: HPDF_Page, x: HPDF_REAL, y: HPDF_REAL) -> HPDF_STATUS;

    pub fn HPDF_Page_MoveTextPos2(page: HPDF_Page, x: HPDF_REAL, y: HPDF_REAL) -> HPDF_STATUS;

    pub fn HPDF_Page_SetTextMatrix(
        page: HPDF_Page,
        a: HPDF_REAL,
        b: HPDF_REAL,
        c: HPDF_REAL,
        d: HPDF_REAL,
        x: HPDF_REAL,
        y: HPDF_REAL,
    ) -> HPDF_STATUS;

    pub fn HPDF_Page_MoveToNextLine(page: HPDF_Page) -> HPDF_STATUS;

    pub fn HPDF_Page_ShowText(page: HPDF_Page, text: *const c_char) -> HPDF_STATUS;

    pub fn HPDF_Page_ShowTextNextLine(page: HPDF_Page, text: *const c_char) -> HPDF_STATUS;

    pub fn HPDF_Page_ShowTextNextLineEx(
        page: HPDF_Page,
        word_space: HPDF_REAL,
        char_space: HPDF_REAL,
        text: *const c_char,
    ) -> HPDF_STATUS;

    pub fn HPDF_Page_TextOut(
        page: HPDF_Page,
        xpos: HPDF_REAL,
        ypos: HPDF_REAL,
        text: *const c_char,
    ) -> HPDF_STATUS;

    pub fn HPDF_Page_TextRect(
        page: HPDF_Page,
        left: HPDF_REAL,
        top: HPDF_REAL,
        right: HPDF_REAL,
        bottom: HPDF_REAL,
        text: *const c_char,
        align: HPDF_TextAlignment,
        len: *mut HPDF_UINT,
    ) -> HPDF_STATUS;

    // ----------------------------------------
    // Color
    // ----------------------------------------

    pub fn HPDF_Page_SetGrayFill(page: HPDF_Page, gray: HPDF_REAL) -> HPDF_STATUS;

    pub fn HPDF_Page_SetGrayStroke(page: HPDF_Page, gray: HPDF_REAL) -> HPDF_STATUS;

    pub fn HPDF_Page_SetRGBFill(
        page: HPDF_Page,
        r: HPDF_REAL,
        g: HPDF_REAL,
        b: HPDF_REAL,
    ) -> HPDF_STATUS;

    pub fn HPDF_Page_SetRGBStroke(
        page: HPDF_Page,
        r: HPDF_REAL,
        g: HPDF_REAL,
        b: HPDF_REAL,
    ) -> HPDF_STATUS;

    pub fn HPDF_Page_SetCMYKFill(
        page: HPDF_Page,
        c: HPDF_REAL,
        m: HPDF_REAL,
        y: HPDF_REAL,
        k: HPDF_REAL,
    ) -> HPDF_STATUS;

    pub fn HPDF_Page_SetCMYKStroke(
        page: HPDF_Page,
        c: HPDF_REAL,
        m: HPDF_REAL,
        y: HPDF_REAL,
        k: HPDF_REAL,
    ) -> HPDF_STATUS;

    // ----------------------------------------
    // XObjects
    // ----------------------------------------

    pub fn HPDF_Page_DrawImage(
        page: HPDF_Page,
        image: HPDF_Image,
        x: HPDF_REAL,
        y: HPDF_REAL,
        width: HPDF_REAL,
        height: HPDF_REAL,
    ) -> HPDF_STATUS;
}
