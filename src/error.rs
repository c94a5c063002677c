//! Error types for the kelvin-convert crate.

use thiserror::Error;

/// The main error type for this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The scale identifier did not select any supported scale.
    ///
    /// Only the first character of the identifier takes part in scale
    /// dispatch, so this fires when that character (uppercased) is not
    /// one of `C`, `F`, `R` or `K`.
    #[error("Unknown scale '{scale}'")]
    UnknownScale {
        /// The identifier as supplied by the caller, possibly empty.
        scale: String,
    },
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
