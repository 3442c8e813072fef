//! Native methods of `org.libharu.PdfDocument`

use crate::error::{report, BindingError, Result};
use crate::fields::{self, DOC_POINTER};
use crate::handle;
use haru::raw::_HPDF_Doc_Rec;
use haru::{CompressionMode, HpdfError, PdfDocument, Status};
use jni::objects::{JClass, JObject, JString};
use jni::sys::{jboolean, jint, JNI_FALSE, JNI_TRUE};
use jni::JNIEnv;
use std::ptr::NonNull;

fn to_jboolean(value: bool) -> jboolean {
    if value {
        JNI_TRUE
    } else {
        JNI_FALSE
    }
}

/// Read `mHPDFDocPointer`.
pub(crate) fn doc_handle(env: &mut JNIEnv, obj: &JObject) -> Result<NonNull<_HPDF_Doc_Rec>> {
    let fields = fields::document_fields(env, obj)?;
    let raw = fields::get_int(env, obj, fields.doc)?;
    handle::decode(raw).ok_or(BindingError::NullHandle { field: DOC_POINTER })
}

/// Decode a handle passed as an `int` argument.
pub(crate) fn arg_handle<T>(value: jint, name: &'static str) -> Result<NonNull<T>> {
    handle::decode(value).ok_or(BindingError::NullHandle { field: name })
}

/// Run `f` against a borrowed view of the object's document.
fn with_document<R>(
    env: &mut JNIEnv,
    obj: &JObject,
    f: impl FnOnce(&PdfDocument) -> Result<R>,
) -> Result<R> {
    let handle = doc_handle(env, obj)?;
    let doc = unsafe { PdfDocument::borrow_raw(handle) };
    f(&doc)
}

#[no_mangle]
pub extern "system" fn Java_org_libharu_PdfDocument_initIDs<'local>(
    mut env: JNIEnv<'local>,
    class: JClass<'local>,
) {
    report(
        "PdfDocument.initIDs",
        fields::init_document_fields(&mut env, &class).map(|_| ()),
    );
}

/// `boolean create()`: allocate a document object and store its handle.
#[no_mangle]
pub extern "system" fn Java_org_libharu_PdfDocument_create__<'local>(
    mut env: JNIEnv<'local>,
    obj: JObject<'local>,
) -> jboolean {
    to_jboolean(report("PdfDocument.create", create(&mut env, &obj)))
}

fn create(env: &mut JNIEnv, obj: &JObject) -> Result<bool> {
    let fields = fields::document_fields(env, obj)?;
    let doc = PdfDocument::new()?;
    let value = handle::encode(doc.as_raw())?;
    fields::set_int(env, obj, fields.doc, value)?;
    log::debug!("created document {:#x}", handle::decode_addr(value));
    doc.into_raw();
    Ok(true)
}

/// `static boolean create(int pdf)`: start a new document on an existing object.
#[no_mangle]
pub extern "system" fn Java_org_libharu_PdfDocument_create__I<'local>(
    _env: JNIEnv<'local>,
    _class: JClass<'local>,
    pdf: jint,
) -> jboolean {
    let result = arg_handle(pdf, "pdf").and_then(|handle| {
        let mut doc = unsafe { PdfDocument::borrow_raw(handle) };
        doc.new_doc()?;
        Ok(true)
    });
    to_jboolean(report("PdfDocument.create(int)", result))
}

/// `void free()`: release the document object and clear the field.
#[no_mangle]
pub extern "system" fn Java_org_libharu_PdfDocument_free<'local>(
    mut env: JNIEnv<'local>,
    obj: JObject<'local>,
) {
    report("PdfDocument.free", free(&mut env, &obj));
}

fn free(env: &mut JNIEnv, obj: &JObject) -> Result<()> {
    let handle = doc_handle(env, obj)?;
    let fields = fields::document_fields(env, obj)?;
    fields::set_int(env, obj, fields.doc, 0)?;
    drop(unsafe { PdfDocument::from_raw(handle) });
    Ok(())
}

#[no_mangle]
pub extern "system" fn Java_org_libharu_PdfDocument_freeDoc<'local>(
    _env: JNIEnv<'local>,
    _class: JClass<'local>,
    pdf: jint,
) {
    let result = arg_handle(pdf, "pdf").map(|handle| {
        let mut doc = unsafe { PdfDocument::borrow_raw(handle) };
        doc.free_doc();
    });
    report("PdfDocument.freeDoc", result);
}

#[no_mangle]
pub extern "system" fn Java_org_libharu_PdfDocument_freeDocAll<'local>(
    _env: JNIEnv<'local>,
    _class: JClass<'local>,
    pdf: jint,
) {
    let result = arg_handle(pdf, "pdf").map(|handle| {
        let mut doc = unsafe { PdfDocument::borrow_raw(handle) };
        doc.free_doc_all();
    });
    report("PdfDocument.freeDocAll", result);
}

/// `boolean saveToFile(String)`
#[no_mangle]
pub extern "system" fn Java_org_libharu_PdfDocument_saveToFile<'local>(
    mut env: JNIEnv<'local>,
    obj: JObject<'local>,
    filename: JString<'local>,
) -> jboolean {
    to_jboolean(report(
        "PdfDocument.saveToFile",
        save_to_file(&mut env, &obj, &filename),
    ))
}

fn save_to_file(env: &mut JNIEnv, obj: &JObject, filename: &JString) -> Result<bool> {
    let path: String = env.get_string(filename)?.into();
    with_document(env, obj, |doc| match doc.save_to_file(&path) {
        Ok(()) => Ok(true),
        Err(HpdfError::Save { status, .. }) => {
            log_save_failure(&path, status);
            Ok(false)
        }
        Err(err) => Err(err.into()),
    })
}

fn log_save_failure(path: &str, status: Status) {
    match status {
        Status::INVALID_DOCUMENT => {
            log::error!("Error saving to file {path}: HPDF_INVALID_DOCUMENT")
        }
        Status::FAILED_TO_ALLOC_MEM => {
            log::error!("Error saving to file {path}: HPDF_FAILD_TO_ALLOC_MEM")
        }
        Status::FILE_IO_ERROR => log::error!("Error saving to file {path}: HPDF_FILE_IO_ERROR"),
        other => log::error!("Error saving to file {path}: status {other}"),
    }
}

#[no_mangle]
pub extern "system" fn Java_org_libharu_PdfDocument_setCreator<'local>(
    mut env: JNIEnv<'local>,
    obj: JObject<'local>,
    creator: JString<'local>,
) {
    let result = env
        .get_string(&creator)
        .map(String::from)
        .map_err(BindingError::from)
        .and_then(|name| with_document(&mut env, &obj, |doc| Ok(doc.set_creator(&name)?)));
    report("PdfDocument.setCreator", result);
}

/// `static boolean hasDoc(int pdf)`
#[no_mangle]
pub extern "system" fn Java_org_libharu_PdfDocument_hasDoc<'local>(
    _env: JNIEnv<'local>,
    _class: JClass<'local>,
    pdf: jint,
) -> jboolean {
    // A zero handle is a normal "no document" answer.
    let Some(handle) = handle::decode(pdf) else {
        return JNI_FALSE;
    };
    let doc = unsafe { PdfDocument::borrow_raw(handle) };
    to_jboolean(doc.has_doc())
}

/// `void setCompressionMode(int)`: the mask goes to libharu unchecked.
#[no_mangle]
pub extern "system" fn Java_org_libharu_PdfDocument_setCompressionMode<'local>(
    mut env: JNIEnv<'local>,
    obj: JObject<'local>,
    mode: jint,
) {
    let mode = CompressionMode(mode as u32);
    let result = with_document(&mut env, &obj, |doc| Ok(doc.set_compression_mode(mode)?));
    report("PdfDocument.setCompressionMode", result);
}
