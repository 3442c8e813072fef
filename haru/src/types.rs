//! Typed enumerations over libharu's integer constants
//!
//! Each enumeration has a stable integer *code* (its declaration order, which
//! is also the ordinal used by the Java `org.libharu` enums) and a libharu
//! *raw* constant. The two happen to coincide numerically for most tables,
//! but callers must never rely on that: codes go through `TryFrom<i32>`, raw
//! values through `to_raw`/`from_raw`.

use crate::error::HpdfError;
use hpdf_sys::*;
use std::ops::{BitOr, BitOrAssign};

/// An enumeration addressable by integer code.
pub trait CodeTable: Sized + Copy + Default + PartialEq + 'static {
    /// Human-readable table name used in diagnostics.
    const KIND: &'static str;

    /// Every value, in code order.
    const ALL: &'static [Self];

    /// The integer code of this value.
    fn code(self) -> i32;

    /// Look up a value by code.
    fn from_code(code: i32) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::ALL.get(index))
            .copied()
    }
}

macro_rules! code_table {
    (
        $(#[$meta:meta])*
        $name:ident: $raw:ty, $kind:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $constant:ident,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            #[default]
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Convert to the libharu constant.
            pub fn to_raw(self) -> $raw {
                match self {
                    $($name::$variant => $constant,)+
                }
            }

            /// Convert from a libharu constant.
            pub fn from_raw(value: $raw) -> Option<Self> {
                match value {
                    $($constant => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl CodeTable for $name {
            const KIND: &'static str = $kind;
            const ALL: &'static [Self] = &[$($name::$variant,)+];

            fn code(self) -> i32 {
                self as i32
            }
        }

        impl TryFrom<i32> for $name {
            type Error = HpdfError;

            fn try_from(code: i32) -> Result<Self, Self::Error> {
                <$name as CodeTable>::from_code(code).ok_or(HpdfError::UnknownCode {
                    kind: $kind,
                    code,
                })
            }
        }
    };
}

code_table! {
    /// Predefined page sizes. The default value of the table is `Letter`.
    PageSize: HPDF_PageSizes, "page size" {
        /// 8½ x 11 in (612 x 792 pt)
        Letter => HPDF_PAGE_SIZE_LETTER,
        /// 8½ x 14 in
        Legal => HPDF_PAGE_SIZE_LEGAL,
        A3 => HPDF_PAGE_SIZE_A3,
        A4 => HPDF_PAGE_SIZE_A4,
        A5 => HPDF_PAGE_SIZE_A5,
        B4 => HPDF_PAGE_SIZE_B4,
        B5 => HPDF_PAGE_SIZE_B5,
        Executive => HPDF_PAGE_SIZE_EXECUTIVE,
        Us4x6 => HPDF_PAGE_SIZE_US4x6,
        Us4x8 => HPDF_PAGE_SIZE_US4x8,
        Us5x7 => HPDF_PAGE_SIZE_US5x7,
        /// No. 10 envelope
        Comm10 => HPDF_PAGE_SIZE_COMM10,
    }
}

code_table! {
    /// Page orientation used with a predefined [`PageSize`].
    PageDirection: HPDF_PageDirection, "page direction" {
        Portrait => HPDF_PAGE_PORTRAIT,
        Landscape => HPDF_PAGE_LANDSCAPE,
    }
}

code_table! {
    /// Shape drawn at the ends of open stroked subpaths.
    LineCap: HPDF_LineCap, "line cap" {
        ButtEnd => HPDF_BUTT_END,
        RoundEnd => HPDF_ROUND_END,
        ProjectingSquareEnd => HPDF_PROJECTING_SCUARE_END,
    }
}

code_table! {
    /// Shape drawn where two stroked segments meet.
    LineJoin: HPDF_LineJoin, "line join" {
        MiterJoin => HPDF_MITER_JOIN,
        RoundJoin => HPDF_ROUND_JOIN,
        BevelJoin => HPDF_BEVEL_JOIN,
    }
}

code_table! {
    /// How glyph outlines are painted and whether they join the clip path.
    TextRenderingMode: HPDF_TextRenderingMode, "text rendering mode" {
        Fill => HPDF_FILL,
        Stroke => HPDF_STROKE,
        FillThenStroke => HPDF_FILL_THEN_STROKE,
        Invisible => HPDF_INVISIBLE,
        FillClipping => HPDF_FILL_CLIPPING,
        StrokeClipping => HPDF_STROKE_CLIPPING,
        FillStrokeClipping => HPDF_FILL_STROKE_CLIPPING,
        Clipping => HPDF_CLIPPING,
    }
}

code_table! {
    /// Alignment for [`PdfPage::text_rect`](crate::PdfPage::text_rect).
    TextAlignment: HPDF_TextAlignment, "text alignment" {
        Left => HPDF_TALIGN_LEFT,
        Right => HPDF_TALIGN_RIGHT,
        Center => HPDF_TALIGN_CENTER,
        Justify => HPDF_TALIGN_JUSTIFY,
    }
}

code_table! {
    /// Page layout a viewer should use when opening the document.
    PageLayout: HPDF_PageLayout, "page layout" {
        Single => HPDF_PAGE_LAYOUT_SINGLE,
        OneColumn => HPDF_PAGE_LAYOUT_ONE_COLUMN,
        TwoColumnLeft => HPDF_PAGE_LAYOUT_TWO_COLUMN_LEFT,
        TwoColumnRight => HPDF_PAGE_LAYOUT_TWO_COLUMN_RIGHT,
    }
}

code_table! {
    /// Which viewer panel is shown when the document opens.
    PageMode: HPDF_PageMode, "page mode" {
        UseNone => HPDF_PAGE_MODE_USE_NONE,
        UseOutline => HPDF_PAGE_MODE_USE_OUTLINE,
        UseThumbs => HPDF_PAGE_MODE_USE_THUMBS,
        FullScreen => HPDF_PAGE_MODE_FULL_SCREEN,
    }
}

/// Text entries of the document information dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextInfo {
    Author,
    Creator,
    Producer,
    Title,
    Subject,
    Keywords,
}

impl TextInfo {
    pub(crate) fn to_raw(self) -> HPDF_InfoType {
        match self {
            TextInfo::Author => HPDF_INFO_AUTHOR,
            TextInfo::Creator => HPDF_INFO_CREATOR,
            TextInfo::Producer => HPDF_INFO_PRODUCER,
            TextInfo::Title => HPDF_INFO_TITLE,
            TextInfo::Subject => HPDF_INFO_SUBJECT,
            TextInfo::Keywords => HPDF_INFO_KEYWORDS,
        }
    }
}

/// Date entries of the document information dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateInfo {
    CreationDate,
    ModDate,
}

impl DateInfo {
    pub(crate) fn to_raw(self) -> HPDF_InfoType {
        match self {
            DateInfo::CreationDate => HPDF_INFO_CREATION_DATE,
            DateInfo::ModDate => HPDF_INFO_MOD_DATE,
        }
    }
}

/// Stream compression flags for
/// [`PdfDocument::set_compression_mode`](crate::PdfDocument::set_compression_mode).
///
/// Flags combine with `|`. The value is passed to libharu unchanged, so
/// masks libharu does not accept surface as a native error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CompressionMode(pub u32);

impl CompressionMode {
    pub const NONE: CompressionMode = CompressionMode(HPDF_COMP_NONE);
    /// Page content streams
    pub const TEXT: CompressionMode = CompressionMode(HPDF_COMP_TEXT);
    /// Image streams
    pub const IMAGE: CompressionMode = CompressionMode(HPDF_COMP_IMAGE);
    /// Font, cmap and other stream data
    pub const METADATA: CompressionMode = CompressionMode(HPDF_COMP_METADATA);
    pub const ALL: CompressionMode = CompressionMode(HPDF_COMP_ALL);

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn contains(self, other: CompressionMode) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for CompressionMode {
    type Output = CompressionMode;

    fn bitor(self, rhs: Self) -> Self::Output {
        CompressionMode(self.0 | rhs.0)
    }
}

impl BitOrAssign for CompressionMode {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// The page's current graphics mode, as tracked by libharu.
///
/// Path and text operators are only legal in some modes; libharu rejects
/// them with `HPDF_PAGE_INVALID_GMODE` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphicsMode {
    /// Outside of any path or text object.
    PageDescription,
    /// A path is under construction.
    PathObject,
    /// Inside a `BeginText`/`EndText` bracket.
    TextObject,
    ClippingPath,
    Shading,
    InlineImage,
    ExternalObject,
    Unknown(u16),
}

impl GraphicsMode {
    pub fn from_raw(value: HPDF_UINT16) -> Self {
        match value {
            HPDF_GMODE_PAGE_DESCRIPTION => GraphicsMode::PageDescription,
            HPDF_GMODE_PATH_OBJECT => GraphicsMode::PathObject,
            HPDF_GMODE_TEXT_OBJECT => GraphicsMode::TextObject,
            HPDF_GMODE_CLIPPING_PATH => GraphicsMode::ClippingPath,
            HPDF_GMODE_SHADING => GraphicsMode::Shading,
            HPDF_GMODE_INLINE_IMAGE => GraphicsMode::InlineImage,
            HPDF_GMODE_EXTERNAL_OBJECT => GraphicsMode::ExternalObject,
            other => GraphicsMode::Unknown(other),
        }
    }
}

/// A point in default user space (1/72 inch units, origin bottom-left).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl From<HPDF_Point> for Point {
    fn from(point: HPDF_Point) -> Self {
        Point {
            x: point.x,
            y: point.y,
        }
    }
}
