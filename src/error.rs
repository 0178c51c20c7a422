//! Sound registry error types.
//!
//! Plain lookups report absence through `Option`; the only error in this
//! crate is produced by [`require`](crate::registry::require), for callers
//! that cannot proceed without the asset.

use thiserror::Error;

/// Errors that can occur when resolving sound assets.
#[derive(Debug, Error)]
pub enum SoundError {
    /// No asset with the requested name is registered.
    #[error("サウンドアセットが見つかりません: {0}")]
    UnknownAsset(String),
}

impl SoundError {
    /// Returns the asset name the failed resolution asked for.
    #[must_use]
    pub fn asset_name(&self) -> &str {
        match self {
            Self::UnknownAsset(name) => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SoundError::UnknownAsset("doorbell".to_string());
        assert!(err.to_string().contains("doorbell"));
        assert!(err.to_string().contains("サウンドアセットが見つかりません"));
    }

    #[test]
    fn test_asset_name() {
        let err = SoundError::UnknownAsset("doorbell".to_string());
        assert_eq!(err.asset_name(), "doorbell");
    }
}
