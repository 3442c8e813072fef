//! Error types for the JNI layer

use haru::HpdfError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BindingError>;

/// A native handle could not be stored in its 32-bit Java field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleError {
    #[error("native handle {addr:#x} does not fit in a 32-bit Java field")]
    Overflow { addr: usize },
}

#[derive(Error, Debug)]
pub enum BindingError {
    #[error("JNI error: {0}")]
    Jni(#[from] jni::errors::Error),

    #[error(transparent)]
    Hpdf(#[from] HpdfError),

    #[error(transparent)]
    Handle(#[from] HandleError),

    /// The handle fields of the Java class could not be resolved
    #[error("Field ids for {class} are unavailable")]
    FieldsUnavailable { class: &'static str },

    /// A Java field or argument held 0 where a native handle was expected
    #[error("{field} holds no native handle")]
    NullHandle { field: &'static str },
}

/// Log a failed JNI call and fall back to the Java-side default.
///
/// Java signatures carry no error channel, so this is where every failure
/// ends up: `false` for booleans, `0.0` for floats, nothing for `void`.
pub fn report<T: Default>(op: &str, result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            log::error!("{op}: {err}");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_report_falls_back_to_default() {
        let failed: Result<f32> = Err(BindingError::NullHandle {
            field: "mHPDFPagePointer",
        });
        assert_eq!(report("getWidth", failed), 0.0);
        assert_eq!(report("getWidth", Ok(612.0f32)), 612.0);
        let overflow = HandleError::Overflow { addr: usize::MAX };
        assert!(!report::<bool>("hasDoc", Err(overflow.into())));
    }

    #[test]
    fn test_error_messages() {
        let err = BindingError::NullHandle {
            field: "mHPDFDocPointer",
        };
        assert_eq!(err.to_string(), "mHPDFDocPointer holds no native handle");

        let err = BindingError::from(HandleError::Overflow { addr: 0xdead_beef });
        assert_eq!(
            err.to_string(),
            "native handle 0xdeadbeef does not fit in a 32-bit Java field"
        );
    }
}
