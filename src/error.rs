use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Failed to parse JSON. Original error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to parse YAML. Original error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse config file '{path}': {reason}.")]
    ConfigParseError { path: String, reason: String },

    /// The rendering context is not a JSON/YAML object.
    #[error("Failed to parse context: {0}.")]
    ContextParseError(String),

    /// Represents validation failures in emitter declarations.
    #[error("Validation error: {0}.")]
    ValidationError(String),

    #[error("Unknown emitter '{name}'. Available emitters: {available}.")]
    UnknownEmitter { name: String, available: String },

    #[error("Emitter '{name}' is declared more than once in '{path}'.")]
    DuplicateEmitter { name: String, path: String },

    #[error("Cannot proceed: root directory '{root_dir}' does not exist.")]
    RootDirectoryNotFound { root_dir: String },

    #[error("Template for emitter '{emitter}' not found at '{path}'.")]
    TemplateNotFound { emitter: String, path: String },

    #[error("Generated files are out of date: {}.", .targets.join(", "))]
    OutOfDate { targets: Vec<String> },

    #[error("Generation failed for {failed} emitter(s). See log output for details.")]
    GenerationFailed { failed: usize },
}

/// Convenience type alias for Results with textconvert's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
