//! Platform capability descriptor

use serde::{Deserialize, Serialize};

/// Hardware capabilities of the pipeline instance
///
/// Some pipeline revisions ship without the histogram statistics block;
/// the validator rejects histogram updates on those.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceCaps {
    /// Whether the histogram statistics block is present
    pub has_histogram: bool,
}

impl Default for DeviceCaps {
    fn default() -> Self {
        Self {
            has_histogram: true,
        }
    }
}

impl DeviceCaps {
    /// Load the capability descriptor from a platform config file
    /// (TOML/YAML/JSON, resolved by extension)
    pub fn from_file(path: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_caps() {
        assert!(DeviceCaps::default().has_histogram);
    }
}
