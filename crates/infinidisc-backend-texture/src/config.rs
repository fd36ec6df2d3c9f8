//! Album art configuration.

use serde::{Deserialize, Serialize};

use crate::error::{TextureError, TextureResult};

/// Default edge length of the square cover in pixels.
pub const DEFAULT_ART_SIZE: u32 = 600;
/// Smallest supported edge length.
pub const MIN_ART_SIZE: u32 = 16;
/// Largest supported edge length.
pub const MAX_ART_SIZE: u32 = 4096;

/// Output format of the album art renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArtConfig {
    /// Edge length of the square cover in pixels.
    pub size: u32,
}

impl Default for ArtConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_ART_SIZE,
        }
    }
}

impl ArtConfig {
    /// Checks that the size is supported.
    pub fn validate(&self) -> TextureResult<()> {
        if !(MIN_ART_SIZE..=MAX_ART_SIZE).contains(&self.size) {
            return Err(TextureError::InvalidSize {
                size: self.size,
                min: MIN_ART_SIZE,
                max: MAX_ART_SIZE,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_range() {
        assert!(ArtConfig::default().validate().is_ok());
        assert!(ArtConfig { size: 16 }.validate().is_ok());
        assert!(ArtConfig { size: 4096 }.validate().is_ok());
        assert!(ArtConfig { size: 15 }.validate().is_err());
        assert!(ArtConfig { size: 0 }.validate().is_err());
        assert!(ArtConfig { size: 4097 }.validate().is_err());
    }
}
