#![forbid(unsafe_code)]

use bento_widgets::ConfigError;

use crate::script::ScriptError;

pub const EXIT_IO: i32 = 1;
pub const EXIT_USAGE: i32 = 2;
pub const EXIT_CONFIG: i32 = 3;

pub type Result<T> = std::result::Result<T, DemoError>;

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error("script: {0}")]
    Script(#[from] ScriptError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("logging setup failed: {0}")]
    Logging(String),

    #[error("{0}")]
    Usage(String),
}

impl DemoError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => EXIT_CONFIG,
            Self::Script(_) | Self::Usage(_) => EXIT_USAGE,
            Self::Io(_) | Self::Json(_) | Self::Logging(_) => EXIT_IO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_by_kind() {
        let usage = DemoError::Usage("bad".into());
        assert_eq!(usage.exit_code(), EXIT_USAGE);
        assert_eq!(usage.to_string(), "bad");

        let config = DemoError::from(ConfigError::Invalid(vec!["panels must not be empty".into()]));
        assert_eq!(config.exit_code(), EXIT_CONFIG);
        assert!(config.to_string().contains("panels must not be empty"));

        let io = DemoError::from(std::io::Error::other("disk"));
        assert_eq!(io.exit_code(), EXIT_IO);
    }
}
