//! Java enum ordinals to typed libharu values

use haru::CodeTable;
use jni::sys::jint;
use std::fmt::Debug;

/// Translate a Java ordinal, falling back to the table default.
///
/// An unknown ordinal is not fatal. It produces exactly one warning naming
/// the table, the code and the value used instead.
pub fn lenient<T: CodeTable + Debug>(code: jint) -> T {
    match T::from_code(code) {
        Some(value) => value,
        None => {
            let fallback = T::default();
            log::warn!("Failed to match {}: {}, using {:?}", T::KIND, code, fallback);
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_log::captured;
    use haru::{LineCap, LineJoin, PageDirection, PageSize, TextAlignment, TextRenderingMode};
    use log::Level;
    use serial_test::serial;

    fn assert_table<T: CodeTable + Debug>() {
        captured();
        for (index, value) in T::ALL.iter().enumerate() {
            assert_eq!(lenient::<T>(index as jint), *value);
        }
        assert!(captured().is_empty(), "valid {} codes must not warn", T::KIND);

        for code in [-1, T::ALL.len() as jint, 999] {
            assert_eq!(lenient::<T>(code), T::default());
            let records = captured();
            assert_eq!(records.len(), 1, "{} code {code}: {records:?}", T::KIND);
            assert_eq!(records[0].0, Level::Warn);
            assert!(records[0].1.contains(T::KIND));
            assert!(records[0].1.contains(&code.to_string()));
        }
    }

    #[test]
    #[serial]
    fn test_page_size_codes() {
        assert_table::<PageSize>();
        assert_eq!(lenient::<PageSize>(3), PageSize::A4);
    }

    #[test]
    #[serial]
    fn test_direction_codes() {
        assert_table::<PageDirection>();
    }

    #[test]
    #[serial]
    fn test_line_style_codes() {
        assert_table::<LineCap>();
        assert_table::<LineJoin>();
        assert_eq!(lenient::<LineCap>(2), LineCap::ProjectingSquareEnd);
    }

    #[test]
    #[serial]
    fn test_text_codes() {
        assert_table::<TextRenderingMode>();
        assert_table::<TextAlignment>();
        assert_eq!(lenient::<TextRenderingMode>(999), TextRenderingMode::Fill);
    }
}
