//! Sound asset resolution.
//!
//! The registry is a fixed table built from [`embedded`](crate::embedded)
//! payloads at compile time. It has exactly one state (populated,
//! immutable) from initialization to process end, so any number of
//! threads may resolve names concurrently without coordination.

use tracing::{debug, trace};

use crate::embedded::{DING_DONG, DING_DONG_DATA};
use crate::error::SoundError;

/// A named, immutable sound payload.
///
/// Assets are owned by the process-wide registry; callers only ever hold
/// non-owning `&'static` references, valid for the whole program run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundAsset {
    name: &'static str,
    data: &'static [u8],
}

impl SoundAsset {
    const fn new(name: &'static str, data: &'static [u8]) -> Self {
        Self { name, data }
    }

    /// Returns the registry key of this asset.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the raw payload bytes.
    #[must_use]
    pub const fn data(&self) -> &'static [u8] {
        self.data
    }

    /// Returns the payload length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the payload is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Every asset the crate ships, keyed by name. Keys are unique.
static ASSETS: &[SoundAsset] = &[SoundAsset::new(DING_DONG, DING_DONG_DATA)];

/// The process-wide registry instance.
static REGISTRY: SoundRegistry = SoundRegistry { assets: ASSETS };

/// The fixed, immutable mapping from identifier to [`SoundAsset`].
///
/// Populated once as a compile-time constant and never mutated, so shared
/// read access from any number of callers is safe without synchronization.
#[derive(Debug)]
pub struct SoundRegistry {
    assets: &'static [SoundAsset],
}

impl SoundRegistry {
    /// Resolves a name to its asset.
    ///
    /// The match is exact and case-sensitive. Absence is a normal
    /// outcome, not an error; callers handle the `None` case themselves.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&'static SoundAsset> {
        match self.assets.iter().find(|asset| asset.name == name) {
            Some(asset) => {
                trace!(name = %name, len = asset.len(), "sound asset resolved");
                Some(asset)
            }
            None => {
                debug!(name = %name, "unknown sound asset requested");
                None
            }
        }
    }

    /// Returns an iterator over all registered assets.
    pub fn iter(&self) -> std::slice::Iter<'static, SoundAsset> {
        self.assets.iter()
    }

    /// Returns the number of registered assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Returns true if the registry has no assets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

/// Returns the process-wide sound registry.
#[must_use]
pub fn registry() -> &'static SoundRegistry {
    &REGISTRY
}

/// Resolves a name against the process-wide registry.
///
/// # Example
///
/// ```rust
/// use intercom_sound::lookup;
///
/// match lookup("ding_dong") {
///     Some(asset) => assert_eq!(asset.len(), 4),
///     None => unreachable!("the chime is always registered"),
/// }
/// assert!(lookup("DING_DONG").is_none());
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<&'static SoundAsset> {
    REGISTRY.lookup(name)
}

/// Resolves a name, treating absence as an error.
///
/// Convenience for callers that cannot proceed without the asset. The
/// registry itself never signals failure; this wrapper is the only place
/// absence becomes an error.
///
/// # Errors
///
/// Returns `SoundError::UnknownAsset` if no asset with the given name is
/// registered.
pub fn require(name: &str) -> Result<&'static SoundAsset, SoundError> {
    lookup(name).ok_or_else(|| SoundError::UnknownAsset(name.to_string()))
}

/// Returns the names of all registered assets.
///
/// Sorted by name for consistent ordering.
#[must_use]
pub fn sound_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = REGISTRY.iter().map(SoundAsset::name).collect();
    names.sort_unstable();
    names
}
