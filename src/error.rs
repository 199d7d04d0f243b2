use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot error: {0}")]
    Snapshot(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display_names_field() {
        let err = ConfigError::InvalidValue {
            field: "total_stake",
            reason: "must be greater than 0".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value for total_stake: must be greater than 0"
        );
    }

    #[test]
    fn config_error_converts_transparently() {
        let err: Error = ConfigError::InvalidValue {
            field: "interval_secs",
            reason: "must be greater than 0".to_string(),
        }
        .into();
        assert!(matches!(err, Error::Config(ConfigError::InvalidValue { .. })));
        assert!(err.to_string().starts_with("invalid value for interval_secs"));
    }
}
