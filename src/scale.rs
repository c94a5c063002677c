//! Temperature scale identification.
//!
//! A scale is selected from a caller-supplied text label. Only the first
//! character of the label takes part in the match, case-folded to uppercase,
//! so `"Fahrenheit"`, `"fahrenheit"` and even `"Fahrenheitish"` all select
//! the same scale. This first-letter lookup is a documented quirk of the
//! original dispatch table and is preserved, not fixed.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A supported temperature scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scale {
    /// Degrees Centigrade (Celsius).
    Centigrade,
    /// Degrees Fahrenheit.
    Fahrenheit,
    /// Degrees Rankine.
    Rankine,
    /// Kelvins, the absolute scale itself.
    Kelvin,
}

impl Scale {
    /// Select a scale from a caller-supplied identifier.
    ///
    /// Dispatch looks at the first character only, uppercased. An empty
    /// identifier is treated as a single blank character and therefore
    /// fails.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownScale`] carrying the original identifier
    /// when its first character is not one of `C`, `F`, `R` or `K`.
    ///
    /// # Example
    ///
    /// ```
    /// use kelvin_convert::Scale;
    ///
    /// assert_eq!(Scale::from_identifier("Centigrade").unwrap(), Scale::Centigrade);
    /// assert_eq!(Scale::from_identifier("rankin").unwrap(), Scale::Rankine);
    /// assert!(Scale::from_identifier("Xylophone").is_err());
    /// ```
    pub fn from_identifier(identifier: &str) -> Result<Self> {
        let first = identifier.chars().next().unwrap_or(' ');
        match first.to_uppercase().next().unwrap_or(first) {
            'C' => Ok(Self::Centigrade),
            'F' => Ok(Self::Fahrenheit),
            'R' => Ok(Self::Rankine),
            'K' => Ok(Self::Kelvin),
            _ => Err(Error::UnknownScale {
                scale: identifier.to_string(),
            }),
        }
    }

    /// Canonical name of the scale.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Centigrade => "Centigrade",
            Self::Fahrenheit => "Fahrenheit",
            Self::Rankine => "Rankine",
            Self::Kelvin => "Kelvin",
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_identifier(s)
    }
}
