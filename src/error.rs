/*!
Errors
======

Errors raised at the input boundary. The load computation itself has no error path: missing or
non numeric values are coerced to zero while reading the input document.
*/

use std::fmt;

/// Errors of the hvacload crate
#[derive(Debug)]
pub enum HvacError {
    /// Input document could not be parsed
    Parse {
        /// What was being read (file name, "stdin", ...)
        from: String,
        /// Type that was expected
        into: String,
        /// Parser message
        desc: String,
    },
    /// Region code is not one of the 27 known codes
    RegionUnknown(String),
    /// Manual climate factor outside of the accepted range
    ClimateFactorOutOfRange(f64),
}

impl fmt::Display for HvacError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use HvacError::*;
        match self {
            Parse { from, into, desc } => {
                write!(f, "Could not parse {} from \"{}\" ({})", into, from, desc)
            }
            RegionUnknown(code) => write!(f, "Unknown region code: \"{}\"", code),
            ClimateFactorOutOfRange(value) => write!(
                f,
                "Climate factor {:.2} outside of the accepted range [{:.2}, {:.2}]",
                value,
                crate::climate::MANUAL_FACTOR_MIN,
                crate::climate::MANUAL_FACTOR_MAX
            ),
        }
    }
}

impl std::error::Error for HvacError {}

impl From<serde_json::Error> for HvacError {
    fn from(err: serde_json::Error) -> Self {
        HvacError::Parse {
            from: "JSON".into(),
            into: "ProjectInput".into(),
            desc: err.to_string(),
        }
    }
}

/// Result type with an HvacError error
pub type Result<T> = std::result::Result<T, HvacError>;
