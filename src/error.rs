use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse recipe file. Original error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A loaded document is missing one of the required recipe fields.
    #[error("Recipe is missing required field '{field}'.")]
    MissingFieldError { field: String },

    #[error("Cannot proceed: recipe file '{path}' does not exist.")]
    RecipeNotFoundError { path: String },

    #[error("Cannot determine the user home directory for '{path}'.")]
    HomeDirError { path: String },
}

/// Convenience type alias for Results with the larder Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
