//! Error taxonomy
//!
//! Only configuration and asset loading can fail. The simulation itself is
//! infallible; configuration errors are recovered with defaults by callers.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A settings or localization file does not exist
    #[error("configuration file not found: {}", .path.display())]
    ConfigurationMissing { path: PathBuf },

    /// A configuration file exists but could not be used
    #[error("invalid configuration in {}: {reason}", .path.display())]
    InvalidConfiguration { path: PathBuf, reason: String },

    /// An image or font required by a render sink could not be loaded
    #[error("failed to load asset {asset}: {reason}")]
    AssetLoadFailure { asset: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_source() {
        let missing = Error::ConfigurationMissing {
            path: PathBuf::from("locales/xx.json"),
        };
        assert!(missing.to_string().contains("locales/xx.json"));

        let asset = Error::AssetLoadFailure {
            asset: "frog.png".into(),
            reason: "not found".into(),
        };
        assert_eq!(asset.to_string(), "failed to load asset frog.png: not found");
    }
}
