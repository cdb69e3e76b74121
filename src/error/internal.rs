use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse a stored Discord id from String
    ///
    /// Ids are written by the bot itself, so a parse failure means the row was
    /// corrupted or written by something else.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// A stored enum column holds an unknown value
    #[error("Unknown {column} value '{value}' in database")]
    UnknownColumnValue {
        /// Column that held the value
        column: &'static str,
        /// The unrecognised value
        value: String,
    },
}
