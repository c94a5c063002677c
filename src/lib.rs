//! # kelvin-convert
//!
//! A small library for mapping a named temperature scale and a numeric
//! value to the equivalent temperature in kelvins, using exact decimal
//! arithmetic.
//!
//! ## Features
//!
//! - **Four scales**: Centigrade, Fahrenheit, Rankine and Kelvin itself
//! - **Exact decimals**: all arithmetic on [`rust_decimal::Decimal`], so
//!   273.15 is exactly 273.15 and rounding is half-to-even
//! - **Forgiving names**: scale identifiers are case-insensitive and match
//!   on their first letter only
//! - **One failure mode**: an unrecognized scale returns
//!   [`Error::UnknownScale`]; nothing else can fail
//!
//! ## Quick Start
//!
//! ```rust
//! use kelvin_convert::{to_kelvin, Result};
//! use rust_decimal_macros::dec;
//!
//! fn main() -> Result<()> {
//!     let boiling = to_kelvin("Centigrade", dec!(100))?;
//!     assert_eq!(boiling, dec!(373.15));
//!
//!     let body = to_kelvin("Fahrenheit", dec!(98.6))?;
//!     assert_eq!(body.round_dp(2), dec!(310.15));
//!
//!     // Kelvin input passes through unchanged.
//!     assert_eq!(to_kelvin("Kelvin", dec!(0))?, dec!(0));
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization for [`Scale`]

// Public modules
pub mod calculator;
pub mod convert;
pub mod error;
pub mod scale;

// Re-exports for convenience
pub use calculator::TemperatureCalculator;
pub use convert::to_kelvin;
pub use error::{Error, Result};
pub use scale::Scale;
