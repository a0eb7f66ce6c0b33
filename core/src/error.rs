//! Error types and handling for eventvis Core

use thiserror::Error;

/// Result type alias for eventvis operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for eventvis Core
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Errors raised while resolving user-supplied tool configuration.
///
/// These are always caused by bad user input: they are surfaced with a message
/// naming the offending category, plugin or argument and are never retried.
/// A failed resolution leaves no partial state behind.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("unknown tool category '{name}'")]
    UnknownCategory { name: String },

    #[error("tool category '{name}' is already registered")]
    DuplicateCategory { name: String },

    #[error("{category} '{name}' is already registered")]
    DuplicateRegistration { category: String, name: String },

    #[error("no such {category}: {name}\npossible choices are: {available}")]
    UnknownPlugin {
        category: String,
        name: String,
        available: String,
    },

    #[error("{tool}: unknown argument '{name}'")]
    UnknownArgument { tool: String, name: String },

    #[error("{tool}: unknown global argument '{name}'")]
    UnknownGlobalArgument { tool: String, name: String },

    #[error("{tool}: too many '=' in '{token}'")]
    MalformedToken { tool: String, token: String },

    #[error("{tool}: cannot convert '{value}' for argument '{argument}'")]
    ConversionError {
        tool: String,
        argument: String,
        value: String,
    },

    #[error("{tool}: argument '{name}' specified as both positional and keyword argument")]
    DuplicateArgument { tool: String, name: String },

    #[error("{tool}: too many arguments")]
    TooManyArguments { tool: String },

    #[error("{tool}: invalid choice '{value}' for argument '{argument}' ({choices})")]
    InvalidChoice {
        tool: String,
        argument: String,
        value: String,
        choices: String,
    },

    #[error(
        "you tried to construct a combination of {category}s without including \
         one of the base {category}s; please use at least one of: {available}"
    )]
    MissingFundamental { category: String, available: String },

    #[error(
        "you tried to construct a combination of {category}s with more than one \
         base {category}; please use only one of: {names}"
    )]
    ConflictingFundamentals { category: String, names: String },
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Generic(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Generic(msg.to_string())
    }
}
