//! Application configuration

use crate::extractor::format::DEFAULT_QUALITY;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Address the HTTP server listens on
    pub bind_address: String,

    /// Root directory for fetched files; each request gets its own
    /// scratch directory underneath
    pub downloads_root: PathBuf,

    /// Quality used when a request does not specify one
    pub default_quality: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:5000".to_string(),
            downloads_root: PathBuf::from("downloads"),
            default_quality: DEFAULT_QUALITY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppSettings::default();
        assert!(!config.bind_address.is_empty());
        assert!(config.bind_address.contains(':'));
        assert_eq!(config.default_quality, "1080p");
        assert_eq!(config.downloads_root, PathBuf::from("downloads"));
    }
}
