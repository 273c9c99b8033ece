use crate::constants::{DEFAULT_LOOKAHEAD, LOOKAHEAD_WARN_THRESHOLD};
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Page building configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuildOptions {
    /// Number of leading pool items searched for the next featured video.
    /// See [`DEFAULT_LOOKAHEAD`] for the cost trade-off.
    pub lookahead: usize,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            lookahead: DEFAULT_LOOKAHEAD,
        }
    }
}

impl BuildOptions {
    pub fn with_lookahead(lookahead: usize) -> Self {
        Self { lookahead }
    }

    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| GalleryError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| GalleryError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.lookahead == 0 {
            return Err(GalleryError::Config(
                "Lookahead must be at least 1".to_string(),
            ));
        }

        if self.lookahead > LOOKAHEAD_WARN_THRESHOLD {
            log::warn!(
                "Lookahead {} exceeds {}; selection cost grows towards O(n^2)",
                self.lookahead,
                LOOKAHEAD_WARN_THRESHOLD
            );
        }

        Ok(())
    }
}
