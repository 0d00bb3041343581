use std::env::VarError;
use std::str::FromStr;

use thiserror::Error;

/// Environment variable the Lambda custom runtime sets to the configured handler.
pub const HANDLER_ENV_VAR: &str = "_HANDLER";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind {
    WithPromise,
    WithoutPromise,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("_HANDLER must be configured")]
    MissingHandler,
    #[error("unknown handler `{0}`; expected helloWithPromise or helloWithoutPromise")]
    UnknownHandler(String),
}

impl HandlerKind {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_value(std::env::var(HANDLER_ENV_VAR))
    }

    fn from_env_value(value: Result<String, VarError>) -> Result<Self, ConfigError> {
        match value {
            Ok(name) => name.parse(),
            Err(VarError::NotPresent) => Err(ConfigError::MissingHandler),
            Err(VarError::NotUnicode(raw)) => Err(ConfigError::UnknownHandler(
                raw.to_string_lossy().into_owned(),
            )),
        }
    }

    pub fn function_name(self) -> &'static str {
        match self {
            Self::WithPromise => "helloWithPromise",
            Self::WithoutPromise => "helloWithoutPromise",
        }
    }
}

impl FromStr for HandlerKind {
    type Err = ConfigError;

    /// Accepts camelCase or snake_case names, optionally behind a module path
    /// such as `handler.helloWithPromise`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::MissingHandler);
        }

        let name = trimmed.rsplit('.').next().unwrap_or(trimmed);
        match name {
            "helloWithPromise" | "hello_with_promise" => Ok(Self::WithPromise),
            "helloWithoutPromise" | "hello_without_promise" => Ok(Self::WithoutPromise),
            _ => Err(ConfigError::UnknownHandler(trimmed.to_string())),
        }
    }
}
