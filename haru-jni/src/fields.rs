//! Cached field ids of the Java handle fields
//!
//! Resolved once per class, by the class's `initIDs` or lazily from the
//! first object seen, and immutable afterwards.

use crate::error::{BindingError, Result};
use jni::objects::{JClass, JFieldID, JObject, JValue};
use jni::signature::{Primitive, ReturnType};
use jni::sys::jint;
use jni::JNIEnv;
use std::sync::OnceLock;

pub const DOC_POINTER: &str = "mHPDFDocPointer";
pub const PAGE_POINTER: &str = "mHPDFPagePointer";
pub const PARENT_DOC_POINTER: &str = "mParentHPDFDocPointer";

const INT_SIGNATURE: &str = "I";

#[derive(Clone, Copy)]
pub struct DocumentFields {
    pub doc: JFieldID,
}

#[derive(Clone, Copy)]
pub struct PageFields {
    pub page: JFieldID,
    pub parent: JFieldID,
}

static DOCUMENT_FIELDS: OnceLock<DocumentFields> = OnceLock::new();
static PAGE_FIELDS: OnceLock<PageFields> = OnceLock::new();

fn lookup(env: &mut JNIEnv, class: &JClass, name: &str) -> Result<JFieldID> {
    match env.get_field_id(class, name, INT_SIGNATURE) {
        Ok(id) => Ok(id),
        Err(err) => {
            log::error!("Failed to find the field '{name}': {err}");
            // Leave no NoSuchFieldError pending for the caller.
            if env.exception_check()? {
                env.exception_clear()?;
            }
            Err(err.into())
        }
    }
}

pub fn init_document_fields(env: &mut JNIEnv, class: &JClass) -> Result<DocumentFields> {
    if let Some(fields) = DOCUMENT_FIELDS.get() {
        return Ok(*fields);
    }
    let doc = lookup(env, class, DOC_POINTER)?;
    Ok(*DOCUMENT_FIELDS.get_or_init(|| DocumentFields { doc }))
}

pub fn init_page_fields(env: &mut JNIEnv, class: &JClass) -> Result<PageFields> {
    if let Some(fields) = PAGE_FIELDS.get() {
        return Ok(*fields);
    }
    let page = lookup(env, class, PAGE_POINTER)?;
    let parent = lookup(env, class, PARENT_DOC_POINTER)?;
    Ok(*PAGE_FIELDS.get_or_init(|| PageFields { page, parent }))
}

pub fn document_fields(env: &mut JNIEnv, obj: &JObject) -> Result<DocumentFields> {
    if let Some(fields) = DOCUMENT_FIELDS.get() {
        return Ok(*fields);
    }
    let class = env.get_object_class(obj)?;
    init_document_fields(env, &class).map_err(|err| {
        log::debug!("lazy field lookup failed: {err}");
        BindingError::FieldsUnavailable {
            class: "org.libharu.PdfDocument",
        }
    })
}

pub fn page_fields(env: &mut JNIEnv, obj: &JObject) -> Result<PageFields> {
    if let Some(fields) = PAGE_FIELDS.get() {
        return Ok(*fields);
    }
    let class = env.get_object_class(obj)?;
    init_page_fields(env, &class).map_err(|err| {
        log::debug!("lazy field lookup failed: {err}");
        BindingError::FieldsUnavailable {
            class: "org.libharu.PdfPage",
        }
    })
}

pub fn get_int(env: &mut JNIEnv, obj: &JObject, field: JFieldID) -> Result<jint> {
    // SAFETY: every cached id was resolved with signature "I".
    let value =
        unsafe { env.get_field_unchecked(obj, field, ReturnType::Primitive(Primitive::Int)) }?;
    Ok(value.i()?)
}

pub fn set_int(env: &mut JNIEnv, obj: &JObject, field: JFieldID, value: jint) -> Result<()> {
    // SAFETY: as in `get_int`.
    unsafe { env.set_field_unchecked(obj, field, JValue::Int(value)) }?;
    Ok(())
}
