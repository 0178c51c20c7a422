//! Embedded sound data.
//!
//! This module provides the placeholder sound payloads that are compiled
//! into the binary. The intercom normally plays chimes produced by an
//! external audio-generation step (sox); this crate stands in for that
//! dependency, so the payloads here are deliberately minimal stand-ins
//! rather than real audio.

/// Registry key of the doorbell chime asset.
pub const DING_DONG: &str = "ding_dong";

/// Placeholder doorbell chime payload (4 zero bytes).
///
/// The real chime is supplied by an external audio-generation collaborator
/// that is not part of this crate. The payload is an opaque blob: no
/// container header, no sample-rate metadata. Consumers must not assume
/// any structure beyond "a sequence of bytes".
pub const DING_DONG_DATA: &[u8] = &[0x00, 0x00, 0x00, 0x00];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ding_dong_key() {
        assert_eq!(DING_DONG, "ding_dong");
    }

    #[test]
    fn test_ding_dong_data_is_four_zero_bytes() {
        assert_eq!(DING_DONG_DATA.len(), 4);
        assert!(DING_DONG_DATA.iter().all(|&b| b == 0x00));
    }
}
