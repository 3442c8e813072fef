//! # hpdf (JNI)
//!
//! The native half of the `org.libharu` Java classes. Each exported
//! `Java_org_libharu_*` function reads the handle fields of its Java
//! object, translates Java enum ordinals, and makes one call through the
//! `haru` crate.
//!
//! Handles live in 32-bit Java `int` fields (see [`handle`]). Failures are
//! logged and mapped to the Java-side default; no exception is thrown.

mod codes;
mod document;
mod error;
mod fields;
pub mod handle;
mod logging;
mod page;
#[cfg(test)]
mod test_log;

pub use error::{BindingError, HandleError, Result};

use jni::sys::{jint, JNI_VERSION_1_6};
use jni::JavaVM;
use std::ffi::c_void;

/// Called by the JVM from `System.loadLibrary("hpdf")`.
#[no_mangle]
pub extern "system" fn JNI_OnLoad(_vm: JavaVM, _reserved: *mut c_void) -> jint {
    logging::init();
    log::info!("hpdf loaded, libharu {}", haru::version());
    JNI_VERSION_1_6
}
