//! Error types for the configurable edges of the crate
//!
//! Matching, stripping and tokenizing never fail; only loading and validating
//! affix configuration can.

use thiserror::Error;

/// Error type for configuration operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration failed validation
    #[error("Invalid affix configuration: {0}")]
    Configuration(String),

    /// TOML could not be parsed into a configuration
    #[error("Failed to parse affix configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration could not be rendered as TOML
    #[error("Failed to serialize affix configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Configuration file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        /// The configuration file path
        path: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        let error = Error::Configuration("prefix set is empty".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid affix configuration: prefix set is empty"
        );
    }

    #[test]
    fn test_io_error_display() {
        let error = Error::Io {
            path: "affixes.toml".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(error.to_string(), "Failed to read affixes.toml: missing");
    }

    #[test]
    fn test_parse_error_conversion() {
        let parse = toml::from_str::<toml::Table>("not = [valid").unwrap_err();
        let error: Error = parse.into();
        assert!(error.to_string().starts_with("Failed to parse affix configuration"));
    }
}
