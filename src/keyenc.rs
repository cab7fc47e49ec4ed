//! Canonical opcode key encoding.
//!
//! The original dispatch table stringifies each `u32` opcode
//! (`hutils_stringify_hex_key`) because its backing map (`zhash`) is
//! string-keyed; this crate keys [`crate::DispatchTable`] directly on
//! `u32` (see the registry module), so these functions exist only for
//! callers that need the canonical textual form at a wire or logging
//! boundary — lowercase hex, no padding, no `0x` prefix.

use crate::error::{DispatchError, Result};

/// Encode an opcode as lowercase hexadecimal with no padding and no
/// `0x` prefix (e.g. `0x2A -> "2a"`).
#[must_use]
pub fn encode_opcode(opcode: u32) -> String {
    format!("{opcode:x}")
}

/// Decode an opcode previously produced by [`encode_opcode`].
///
/// # Errors
///
/// Returns [`DispatchError::NullPointer`] if `s` is not valid
/// lowercase hexadecimal for a `u32`.
pub fn decode_opcode(s: &str) -> Result<u32> {
    u32::from_str_radix(s, 16).map_err(|_| DispatchError::NullPointer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn known_values() {
        assert_eq!(encode_opcode(0x2A), "2a");
        assert_eq!(decode_opcode("2a").unwrap(), 0x2A);
        assert_eq!(encode_opcode(0), "0");
        assert_eq!(decode_opcode("0").unwrap(), 0);
    }

    #[test]
    fn rejects_non_hex() {
        assert!(decode_opcode("not-hex").is_err());
        assert!(decode_opcode("0x2a").is_err());
    }

    proptest! {
        #[test]
        fn round_trip(opcode: u32) {
            let encoded = encode_opcode(opcode);
            prop_assert_eq!(decode_opcode(&encoded).unwrap(), opcode);
        }
    }
}
