//! Conversion of scale-qualified temperatures to kelvins.
//!
//! All arithmetic is performed on [`rust_decimal::Decimal`] so that results
//! carry exact base-10 semantics. Binary floating point would drift on
//! values such as 273.15, and callers comparing against 2-decimal-place
//! expectations need round-half-to-even behavior (`Decimal::round_dp`).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::Result;
use crate::scale::Scale;

/// Offset between the Centigrade and Kelvin scales.
const CENTIGRADE_OFFSET: Decimal = dec!(273.15);

/// Offset between the Fahrenheit and Rankine scales.
const FAHRENHEIT_OFFSET: Decimal = dec!(459.67);

impl Scale {
    /// Convert a temperature on this scale to kelvins.
    ///
    /// The mapping is a pure function of `(self, value)`:
    ///
    /// | Scale | Formula |
    /// |---|---|
    /// | Centigrade | `value + 273.15` |
    /// | Fahrenheit | `(value + 459.67) * 5 / 9` |
    /// | Rankine | `value * 5 / 9` |
    /// | Kelvin | `value` |
    ///
    /// # Example
    ///
    /// ```
    /// use kelvin_convert::Scale;
    /// use rust_decimal_macros::dec;
    ///
    /// assert_eq!(Scale::Centigrade.to_kelvin(dec!(0)), dec!(273.15));
    /// assert_eq!(Scale::Kelvin.to_kelvin(dec!(100.12)), dec!(100.12));
    /// ```
    pub fn to_kelvin(self, value: Decimal) -> Decimal {
        match self {
            Self::Centigrade => value + CENTIGRADE_OFFSET,
            Self::Fahrenheit => (value + FAHRENHEIT_OFFSET) * dec!(5) / dec!(9),
            Self::Rankine => value * dec!(5) / dec!(9),
            Self::Kelvin => value,
        }
    }
}

/// Convert `value`, expressed on the scale named by `identifier`, to kelvins.
///
/// This is the crate's single entry point: it parses the identifier with
/// [`Scale::from_identifier`] and applies the matching formula. The call is
/// referentially transparent and safe to invoke concurrently.
///
/// # Errors
///
/// Returns [`Error::UnknownScale`](crate::Error::UnknownScale) when the
/// identifier does not select a supported scale.
///
/// # Example
///
/// ```
/// use kelvin_convert::to_kelvin;
/// use rust_decimal_macros::dec;
///
/// let kelvins = to_kelvin("Fahrenheit", dec!(32))?;
/// assert_eq!(kelvins.round_dp(2), dec!(273.15));
/// # Ok::<(), kelvin_convert::Error>(())
/// ```
pub fn to_kelvin(identifier: &str, value: Decimal) -> Result<Decimal> {
    use tracing::trace;

    let scale = Scale::from_identifier(identifier)?;
    let kelvins = scale.to_kelvin(value);
    trace!("Converted {} {} to {} K", value, scale, kelvins);
    Ok(kelvins)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::to_kelvin;
    use crate::error::Error;

    /// Expected results compare at 2 decimal places, half-to-even.
    fn tolerance(value: Decimal) -> Decimal {
        value.round_dp(2)
    }

    #[test]
    fn test_known_scale_conversions() {
        let cases: &[(&str, Decimal, Decimal)] = &[
            ("Centigrade", dec!(0), dec!(273.15)),
            ("Centigrade", dec!(100), dec!(373.15)),
            ("Fahrenheit", dec!(0), dec!(255.37)),
            ("Fahrenheit", dec!(32), dec!(273.15)),
            ("Fahrenheit", dec!(100), dec!(310.928)),
            ("Rankin", dec!(0), dec!(0)),
            ("Rankin", dec!(250), dec!(138.89)),
            ("Kelvin", dec!(0), dec!(0)),
            ("Kelvin", dec!(100.12), dec!(100.12)),
        ];

        for (scale, input, expected) in cases {
            let actual = to_kelvin(scale, *input).unwrap();
            assert_eq!(
                tolerance(*expected),
                tolerance(actual),
                "{scale} {input} should convert to {expected}"
            );
        }
    }

    #[test]
    fn test_fahrenheit_operation_order() {
        // (100 + 459.67) * 5 / 9, not 100 + 459.67 * 5 / 9.
        let kelvins = to_kelvin("Fahrenheit", dec!(100)).unwrap();
        assert_eq!(kelvins.round_dp(2), dec!(310.93));
    }

    #[test]
    fn test_rankine_repeating_fraction_rounds_half_to_even() {
        // 250 * 5 / 9 = 138.888..., which must round up to 138.89.
        let kelvins = to_kelvin("Rankin", dec!(250)).unwrap();
        assert_eq!(kelvins.round_dp(2), dec!(138.89));
    }

    #[test]
    fn test_negative_temperatures() {
        assert_eq!(
            to_kelvin("Centigrade", dec!(-273.15)).unwrap(),
            dec!(0.00)
        );
        assert_eq!(
            to_kelvin("Fahrenheit", dec!(-459.67))
                .unwrap()
                .round_dp(2),
            dec!(0.00)
        );
    }

    #[test]
    fn test_unknown_scale_is_an_error() {
        let err = to_kelvin("Xylophone", dec!(10)).unwrap_err();
        assert_eq!(
            err,
            Error::UnknownScale {
                scale: "Xylophone".to_string()
            }
        );
    }

    #[test]
    fn test_empty_identifier_is_an_error() {
        let err = to_kelvin("", dec!(10)).unwrap_err();
        assert_eq!(
            err,
            Error::UnknownScale {
                scale: String::new()
            }
        );
    }
}
