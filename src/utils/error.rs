use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("Failed to parse the compose manifest: {0}")]
    ManifestError(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Malformed environment entry {entry:?} for service {service}: missing '='")]
    MalformedEnv { entry: String, service: String },

    #[error("Invalid container port {port:?} for service {service}")]
    InvalidPort { port: String, service: String },

    #[error("Unknown restart policy {policy:?} for service {service}")]
    UnknownRestartPolicy { policy: String, service: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, ComposeError>;
