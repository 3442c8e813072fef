//! Native handles carried in 32-bit Java `int` fields
//!
//! The Java classes store libharu pointers in `int` fields. Encoding is
//! checked: an address above `u32::MAX` is an error, never truncated.
//! Decoding zero-extends, and a stored 0 means "no handle".

use crate::error::HandleError;
use jni::sys::jint;
use std::ptr::NonNull;

/// Encode a native pointer for an `int` field.
pub fn encode<T>(ptr: *mut T) -> Result<jint, HandleError> {
    encode_addr(ptr as usize)
}

pub fn encode_addr(addr: usize) -> Result<jint, HandleError> {
    u32::try_from(addr)
        .map(|value| value as jint)
        .map_err(|_| HandleError::Overflow { addr })
}

/// Decode an `int` field back into a pointer, `None` for 0.
pub fn decode<T>(value: jint) -> Option<NonNull<T>> {
    NonNull::new(decode_addr(value) as *mut T)
}

pub fn decode_addr(value: jint) -> usize {
    value as u32 as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_addresses_round_trip() {
        for addr in [0x1usize, 0x1000, 0x7fff_ffff, 0x8000_0000, 0xffff_fff0] {
            let encoded = encode_addr(addr).unwrap();
            assert_eq!(decode_addr(encoded), addr);
        }
    }

    #[test]
    fn test_high_bit_is_zero_extended() {
        let encoded = encode_addr(0xffff_fff0).unwrap();
        assert_eq!(encoded, -16);
        assert_eq!(decode_addr(encoded), 0xffff_fff0);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_wide_address_is_rejected() {
        let addr = 0x7f12_3456_7000usize;
        assert_eq!(encode_addr(addr), Err(HandleError::Overflow { addr }));
        assert!(encode(addr as *mut u8).is_err());
    }

    #[test]
    fn test_zero_is_no_handle() {
        assert!(decode::<u8>(0).is_none());
        assert_eq!(encode::<u8>(std::ptr::null_mut()), Ok(0));
    }

    #[test]
    fn test_pointer_round_trip() {
        let ptr = 0x4000_1000usize as *mut u32;
        let encoded = encode(ptr).unwrap();
        assert_eq!(decode::<u32>(encoded).map(NonNull::as_ptr), Some(ptr));
    }
}
