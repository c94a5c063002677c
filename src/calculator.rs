//! Thin calculator wrapper over the conversion function.

use rust_decimal::Decimal;

use crate::convert::to_kelvin;
use crate::error::Result;

/// Stateless calculator for absolute temperatures.
///
/// Delegates to [`to_kelvin`](crate::to_kelvin); it exists for callers that
/// prefer holding a value with a method over calling a free function. It
/// carries no state and is free to share or copy across threads.
///
/// # Example
///
/// ```
/// use kelvin_convert::TemperatureCalculator;
/// use rust_decimal_macros::dec;
///
/// let calculator = TemperatureCalculator::new();
/// let kelvins = calculator.temperature_in_kelvins("Centigrade", dec!(100))?;
/// assert_eq!(kelvins, dec!(373.15));
/// # Ok::<(), kelvin_convert::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemperatureCalculator;

impl TemperatureCalculator {
    /// Create a new calculator.
    pub fn new() -> Self {
        Self
    }

    /// Convert `value` on the scale named by `scale` to kelvins.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownScale`](crate::Error::UnknownScale) when the
    /// scale identifier is not recognized.
    pub fn temperature_in_kelvins(&self, scale: &str, value: Decimal) -> Result<Decimal> {
        to_kelvin(scale, value)
    }
}
