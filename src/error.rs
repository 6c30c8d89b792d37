use thiserror::Error;

pub const ISO8601_DURATIONS_HELP: &str = "https://en.wikipedia.org/wiki/ISO_8601#Durations";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DurationError {
    #[error(
        "'{input}' is not a valid ISO 8601 duration (expected P[n]Y[n]M[n]W[n]D[T[n]H[n]M[n]S], see {help})",
        help = ISO8601_DURATIONS_HELP
    )]
    InvalidFormat { input: String },

    #[error("duration '{input}' is too large to represent")]
    OutOfRange { input: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PimError {
    #[error("{field} must not be empty")]
    MissingField { field: &'static str },

    #[error("activation duration must be greater than zero")]
    ZeroDuration,

    #[error("activation duration {requested} exceeds the maximum of {maximum}")]
    ExceedsMaximum { requested: String, maximum: String },

    #[error(transparent)]
    Duration(#[from] DurationError),
}
