//! Native methods of `org.libharu.PdfPage`
//!
//! Every method resolves `mHPDFPagePointer` and `mParentHPDFDocPointer`,
//! makes one libharu call and logs a rejection. Enum arguments arrive as
//! Java ordinals and go through [`lenient`].

use crate::codes::lenient;
use crate::document::arg_handle;
use crate::error::{report, BindingError, Result};
use crate::fields::{self, PAGE_POINTER, PARENT_DOC_POINTER};
use crate::handle;
use haru::{PdfDocument, PdfPage};
use jni::objects::{JByteArray, JClass, JObject, JString};
use jni::sys::{jfloat, jint};
use jni::JNIEnv;

/// Run `f` against the page behind `obj`.
fn with_page<R>(
    env: &mut JNIEnv,
    obj: &JObject,
    f: impl FnOnce(&PdfPage<'_>) -> haru::Result<R>,
) -> Result<R> {
    let fields = fields::page_fields(env, obj)?;
    let page = fields::get_int(env, obj, fields.page)?;
    let parent = fields::get_int(env, obj, fields.parent)?;
    let page = handle::decode(page).ok_or(BindingError::NullHandle { field: PAGE_POINTER })?;
    let parent = handle::decode(parent).ok_or(BindingError::NullHandle {
        field: PARENT_DOC_POINTER,
    })?;

    let doc = unsafe { PdfDocument::borrow_raw(parent) };
    let page = unsafe { doc.page_from_raw(page) };
    Ok(f(&page)?)
}

/// Like [`with_page`], with a Java string argument converted first.
fn with_page_text<R>(
    env: &mut JNIEnv,
    obj: &JObject,
    text: &JString,
    f: impl FnOnce(&PdfPage<'_>, &str) -> haru::Result<R>,
) -> Result<R> {
    let text: String = env.get_string(text)?.into();
    with_page(env, obj, |page| f(page, &text))
}

/// Like [`with_page`], with a Java `byte[]` argument copied first.
fn with_page_bytes<R>(
    env: &mut JNIEnv,
    obj: &JObject,
    bytes: &JByteArray,
    f: impl FnOnce(&PdfPage<'_>, &[u8]) -> haru::Result<R>,
) -> Result<R> {
    let bytes = env.convert_byte_array(bytes)?;
    with_page(env, obj, |page| f(page, &bytes))
}

/// Define a `void` method whose arguments are all primitives.
macro_rules! page_method {
    ($export:ident, $op:literal, |$page:ident $(, $arg:ident: $ty:ty)*| $body:expr) => {
        #[no_mangle]
        #[allow(clippy::too_many_arguments)]
        pub extern "system" fn $export<'local>(
            mut env: JNIEnv<'local>,
            obj: JObject<'local>,
            $($arg: $ty),*
        ) {
            report(concat!("PdfPage.", $op), with_page(&mut env, &obj, |$page| $body));
        }
    };
}

/// Define a `float` getter.
macro_rules! page_getter {
    ($export:ident, $op:literal, $method:ident) => {
        #[no_mangle]
        pub extern "system" fn $export<'local>(
            mut env: JNIEnv<'local>,
            obj: JObject<'local>,
        ) -> jfloat {
            report(
                concat!("PdfPage.", $op),
                with_page(&mut env, &obj, |page| Ok(page.$method())),
            )
        }
    };
}

// ========================================
// Lifecycle
// ========================================

#[no_mangle]
pub extern "system" fn Java_org_libharu_PdfPage_initIDs<'local>(
    mut env: JNIEnv<'local>,
    class: JClass<'local>,
) {
    report(
        "PdfPage.initIDs",
        fields::init_page_fields(&mut env, &class).map(|_| ()),
    );
}

/// `void create(int pdf)`: append a page to `pdf`.
#[no_mangle]
pub extern "system" fn Java_org_libharu_PdfPage_create<'local>(
    mut env: JNIEnv<'local>,
    obj: JObject<'local>,
    pdf: jint,
) {
    report("PdfPage.create", create_page(&mut env, &obj, pdf, None));
}

/// `void insertPage(int pdf, int page)`: insert a page before `page`.
#[no_mangle]
pub extern "system" fn Java_org_libharu_PdfPage_insertPage<'local>(
    mut env: JNIEnv<'local>,
    obj: JObject<'local>,
    pdf: jint,
    target: jint,
) {
    report(
        "PdfPage.insertPage",
        create_page(&mut env, &obj, pdf, Some(target)),
    );
}

/// On any failure both fields keep their previous values.
fn create_page(env: &mut JNIEnv, obj: &JObject, pdf: jint, target: Option<jint>) -> Result<()> {
    let fields = fields::page_fields(env, obj)?;
    let doc = unsafe { PdfDocument::borrow_raw(arg_handle(pdf, "pdf")?) };

    let page = match target {
        None => doc.add_page()?,
        Some(target) => {
            let target = unsafe { doc.page_from_raw(arg_handle(target, "page")?) };
            doc.insert_page(&target)?
        }
    };
    let value = handle::encode(page.as_raw())?;

    fields::set_int(env, obj, fields.page, value)?;
    fields::set_int(env, obj, fields.parent, pdf)?;
    Ok(())
}

// ========================================
// Geometry
// ========================================

page_method!(Java_org_libharu_PdfPage_setSize, "setSize", |page, size: jint, direction: jint| {
    page.set_size(lenient(size), lenient(direction))
});
page_method!(
    Java_org_libharu_PdfPage_setWidth,
    "setWidth",
    |page, width: jfloat| page.set_width(width)
);
page_method!(
    Java_org_libharu_PdfPage_setHeight,
    "setHeight",
    |page, height: jfloat| page.set_height(height)
);

page_getter!(Java_org_libharu_PdfPage_getWidth, "getWidth", width);
page_getter!(Java_org_libharu_PdfPage_getHeight, "getHeight", height);
page_getter!(Java_org_libharu_PdfPage_getLineWidth, "getLineWidth", line_width);

// ========================================
// Graphics state
// ========================================

page_method!(
    Java_org_libharu_PdfPage_setLineWidth,
    "setLineWidth",
    |page, width: jfloat| page.set_line_width(width)
);
page_method!(
    Java_org_libharu_PdfPage_setLineCap,
    "setLineCap",
    |page, cap: jint| page.set_line_cap(lenient(cap))
);
page_method!(
    Java_org_libharu_PdfPage_setLineJoin,
    "setLineJoin",
    |page, join: jint| page.set_line_join(lenient(join))
);
page_method!(
    Java_org_libharu_PdfPage_setMiterLimit,
    "setMiterLimit",
    |page, limit: jfloat| page.set_miter_limit(limit)
);
page_method!(Java_org_libharu_PdfPage_gSave, "gSave", |page| page.g_save());
page_method!(Java_org_libharu_PdfPage_gRestore, "gRestore", |page| page.g_restore());
page_method!(
    Java_org_libharu_PdfPage_concat,
    "concat",
    |page, a: jfloat, b: jfloat, c: jfloat, d: jfloat, x: jfloat, y: jfloat| {
        page.concat(a, b, c, d, x, y)
    }
);

// ========================================
// Color
// ========================================

page_method!(
    Java_org_libharu_PdfPage_setGrayFill,
    "setGrayFill",
    |page, gray: jfloat| page.set_gray_fill(gray)
);
page_method!(
    Java_org_libharu_PdfPage_setGrayStroke,
    "setGrayStroke",
    |page, gray: jfloat| page.set_gray_stroke(gray)
);
page_method!(
    Java_org_libharu_PdfPage_setRGBFill,
    "setRGBFill",
    |page, r: jfloat, g: jfloat, b: jfloat| page.set_rgb_fill(r, g, b)
);
page_method!(
    Java_org_libharu_PdfPage_setRGBStroke,
    "setRGBStroke",
    |page, r: jfloat, g: jfloat, b: jfloat| page.set_rgb_stroke(r, g, b)
);
page_method!(
    Java_org_libharu_PdfPage_setCMYKFill,
    "setCMYKFill",
    |page, c: jfloat, m: jfloat, y: jfloat, k: jfloat| page.set_cmyk_fill(c, m, y, k)
);
page_method!(
    Java_org_libharu_PdfPage_setCMYKStroke,
    "setCMYKStroke",
    |page, c: jfloat, m: jfloat, y: jfloat, k: jfloat| page.set_cmyk_stroke(c, m, y, k)
);

// ========================================
// Path construction
// ========================================

page_method!(
    Java_org_libharu_PdfPage_moveTo,
    "moveTo",
    |page, x: jfloat, y: jfloat| page.move_to(x, y)
);
page_method!(
    Java_org_libharu_PdfPage_lineTo,
    "lineTo",
    |page, x: jfloat, y: jfloat| page.line_to(x, y)
);
page_method!(
    Java_org_libharu_PdfPage_curveTo,
    "curveTo",
    |page, x1: jfloat, y1: jfloat, x2: jfloat, y2: jfloat, x3: jfloat, y3: jfloat| {
        page.curve_to(x1, y1, x2, y2, x3, y3)
    }
);
page_method!(
    Java_org_libharu_PdfPage_curveTo2,
    "curveTo2",
    |page, x2: jfloat, y2: jfloat, x3: jfloat, y3: jfloat| page.curve_to2(x2, y2, x3, y3)
);
page_method!(
    Java_org_libharu_PdfPage_curveTo3,
    "curveTo3",
    |page, x1: jfloat, y1: jfloat, x3: jfloat, y3: jfloat| page.curve_to3(x1, y1, x3, y3)
);
page_method!(
    Java_org_libharu_PdfPage_arc,
    "arc",
    |page, x: jfloat, y: jfloat, radius: jfloat, start: jfloat, end: jfloat| {
        page.arc(x, y, radius, start, end)
    }
);
page_method!(
    Java_org_libharu_PdfPage_circle,
    "circle",
    |page, x: jfloat, y: jfloat, radius: jfloat| page.circle(x, y, radius)
);
page_method!(
    Java_org_libharu_PdfPage_ellipse,
    "ellipse",
    |page, x: jfloat, y: jfloat, x_radius: jfloat, y_radius: jfloat| {
        page.ellipse(x, y, x_radius, y_radius)
    }
);
page_method!(
    Java_org_libharu_PdfPage_rectangle,
    "rectangle",
    |page, x: jfloat, y: jfloat, width: jfloat, height: jfloat| page.rectangle(x, y, width, height)
);
page_method!(Java_org_libharu_PdfPage_closePath, "closePath", |page| page.close_path());

// ========================================
// Painting and clipping
// ========================================

page_method!(Java_org_libharu_PdfPage_stroke, "stroke", |page| page.stroke());
page_method!(
    Java_org_libharu_PdfPage_closePathStroke,
    "closePathStroke",
    |page| page.close_path_stroke()
);
page_method!(Java_org_libharu_PdfPage_fill, "fill", |page| page.fill());
page_method!(Java_org_libharu_PdfPage_eofill, "eofill", |page| page.eofill());
page_method!(Java_org_libharu_PdfPage_fillStroke, "fillStroke", |page| page.fill_stroke());
page_method!(Java_org_libharu_PdfPage_eofillStroke, "eofillStroke", |page| page.eofill_stroke());
page_method!(
    Java_org_libharu_PdfPage_closePathFillStroke,
    "closePathFillStroke",
    |page| page.close_path_fill_stroke()
);
page_method!(
    Java_org_libharu_PdfPage_closePathEofillStroke,
    "closePathEofillStroke",
    |page| page.close_path_eofill_stroke()
);
page_method!(Java_org_libharu_PdfPage_endPath, "endPath", |page| page.end_path());
page_method!(Java_org_libharu_PdfPage_clip, "clip", |page| page.clip());
page_method!(Java_org_libharu_PdfPage_eoclip, "eoclip", |page| page.eoclip());

// ========================================
// Text
// ========================================

page_method!(Java_org_libharu_PdfPage_beginText, "beginText", |page| page.begin_text());
page_method!(Java_org_libharu_PdfPage_endText, "endText", |page| page.end_text());
page_method!(
    Java_org_libharu_PdfPage_moveTextPos,
    "moveTextPos",
    |page, x: jfloat, y: jfloat| page.move_text_pos(x, y)
);
page_method!(
    Java_org_libharu_PdfPage_moveTextPos2,
    "moveTextPos2",
    |page, x: jfloat, y: jfloat| page.move_text_pos2(x, y)
);
page_method!(
    Java_org_libharu_PdfPage_moveToNextLine,
    "moveToNextLine",
    |page| page.move_to_next_line()
);
page_method!(
    Java_org_libharu_PdfPage_setCharSpace,
    "setCharSpace",
    |page, value: jfloat| page.set_char_space(value)
);
page_method!(
    Java_org_libharu_PdfPage_setTextWordSpace,
    "setTextWordSpace",
    |page, value: jfloat| page.set_word_space(value)
);
page_method!(
    Java_org_libharu_PdfPage_setHorizontalScaling,
    "setHorizontalScaling",
    |page, value: jfloat| page.set_horizontal_scaling(value)
);
page_method!(
    Java_org_libharu_PdfPage_setTextLeading,
    "setTextLeading",
    |page, value: jfloat| page.set_text_leading(value)
);
page_method!(
    Java_org_libharu_PdfPage_setTextRise,
    "setTextRise",
    |page, value: jfloat| page.set_text_rise(value)
);
page_method!(
    Java_org_libharu_PdfPage_setTextRenderingMode,
    "setTextRenderingMode",
    |page, mode: jint| page.set_text_rendering_mode(lenient(mode))
);

#[no_mangle]
pub extern "system" fn Java_org_libharu_PdfPage_showText<'local>(
    mut env: JNIEnv<'local>,
    obj: JObject<'local>,
    text: JString<'local>,
) {
    let result = with_page_text(&mut env, &obj, &text, |page, text| page.show_text(text));
    report("PdfPage.showText", result);
}

#[no_mangle]
pub extern "system" fn Java_org_libharu_PdfPage_showTextNextLine<'local>(
    mut env: JNIEnv<'local>,
    obj: JObject<'local>,
    text: JString<'local>,
) {
    let result = with_page_text(&mut env, &obj, &text, |page, text| {
        page.show_text_next_line(text)
    });
    report("PdfPage.showTextNextLine", result);
}

#[no_mangle]
pub extern "system" fn Java_org_libharu_PdfPage_showTextNextLineEx<'local>(
    mut env: JNIEnv<'local>,
    obj: JObject<'local>,
    word_space: jfloat,
    char_space: jfloat,
    text: JString<'local>,
) {
    let result = with_page_text(&mut env, &obj, &text, |page, text| {
        page.show_text_next_line_ex(word_space, char_space, text)
    });
    report("PdfPage.showTextNextLineEx", result);
}

#[no_mangle]
pub extern "system" fn Java_org_libharu_PdfPage_textOut<'local>(
    mut env: JNIEnv<'local>,
    obj: JObject<'local>,
    x: jfloat,
    y: jfloat,
    text: JString<'local>,
) {
    let result = with_page_text(&mut env, &obj, &text, |page, text| page.text_out(x, y, text));
    report("PdfPage.textOut", result);
}

#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub extern "system" fn Java_org_libharu_PdfPage_textRect<'local>(
    mut env: JNIEnv<'local>,
    obj: JObject<'local>,
    left: jfloat,
    top: jfloat,
    right: jfloat,
    bottom: jfloat,
    text: JString<'local>,
    align: jint,
) {
    let align = lenient(align);
    let result = with_page_text(&mut env, &obj, &text, |page, text| {
        page.text_rect(left, top, right, bottom, text, align)
    });
    if let Some(placed) = report("PdfPage.textRect", result.map(Some)) {
        log::trace!("textRect placed {placed} bytes");
    }
}

// ========================================
// Images
// ========================================

#[no_mangle]
pub extern "system" fn Java_org_libharu_PdfPage_drawJpegImage<'local>(
    mut env: JNIEnv<'local>,
    obj: JObject<'local>,
    image: JByteArray<'local>,
    x: jfloat,
    y: jfloat,
    width: jfloat,
    height: jfloat,
) {
    let result = with_page_bytes(&mut env, &obj, &image, |page, data| {
        page.draw_jpeg_image(data, x, y, width, height)
    });
    report("PdfPage.drawJpegImage", result);
}

#[no_mangle]
pub extern "system" fn Java_org_libharu_PdfPage_drawJpegImageFromFile<'local>(
    mut env: JNIEnv<'local>,
    obj: JObject<'local>,
    path: JString<'local>,
    x: jfloat,
    y: jfloat,
    width: jfloat,
    height: jfloat,
) {
    let result = with_page_text(&mut env, &obj, &path, |page, path| {
        page.draw_jpeg_image_from_file(path, x, y, width, height)
    });
    report("PdfPage.drawJpegImageFromFile", result);
}

#[no_mangle]
pub extern "system" fn Java_org_libharu_PdfPage_drawPngImage<'local>(
    mut env: JNIEnv<'local>,
    obj: JObject<'local>,
    image: JByteArray<'local>,
    x: jfloat,
    y: jfloat,
    width: jfloat,
    height: jfloat,
) {
    let result = with_page_bytes(&mut env, &obj, &image, |page, data| {
        page.draw_png_image(data, x, y, width, height)
    });
    report("PdfPage.drawPngImage", result);
}

#[no_mangle]
pub extern "system" fn Java_org_libharu_PdfPage_drawPngImageFromFile<'local>(
    mut env: JNIEnv<'local>,
    obj: JObject<'local>,
    path: JString<'local>,
    x: jfloat,
    y: jfloat,
    width: jfloat,
    height: jfloat,
) {
    let result = with_page_text(&mut env, &obj, &path, |page, path| {
        page.draw_png_image_from_file(path, x, y, width, height)
    });
    report("PdfPage.drawPngImageFromFile", result);
}
