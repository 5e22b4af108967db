use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored enum-like string column holds a value the application does not know.
    ///
    /// Covers permissions, chat platforms and log levels. Results in a 500 Internal Server
    /// Error with a generic message returned to client.
    #[error("Unknown {field} '{value}' stored in database")]
    UnknownStoredValue { field: &'static str, value: String },

    /// A row that was just written could not be read back.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("{entity} with id {id} vanished after write")]
    MissingAfterWrite { entity: &'static str, id: i32 },

    /// Hashing a password or parsing a stored password hash failed.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Password hash error: {0}")]
    PasswordHash(argon2::password_hash::Error),
}
