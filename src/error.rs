// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

/// Failures of the ambient I/O around the app: reading preferences and
/// loading translations. Navigation itself cannot fail.
#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Translation error: {0}")]
    I18n(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn io_error_converts_to_io_variant() {
        let err: Error = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        match err {
            Error::Io(message) => assert!(message.contains("missing")),
            other => panic!("expected Io variant, got {other:?}"),
        }
    }

    #[test]
    fn toml_parse_error_converts_to_config_variant() {
        let parse_error = toml::from_str::<toml::Value>("key = = value")
            .expect_err("invalid toml should fail");
        let err: Error = parse_error.into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn display_includes_category() {
        let err = Error::I18n("bad ftl".into());
        assert_eq!(err.to_string(), "Translation error: bad ftl");
    }
}
