//! Amount validation for EPC transfers.
//!
//! The amount travels through the payload as the caller wrote it; parsing only
//! decides whether it is acceptable.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::{
    errors::{AmountFormatError, ValidationError},
    validate::in_range,
};

/// Smallest amount the standard accepts: `0.01`.
pub fn min_amount() -> Decimal {
    Decimal::new(1, 2)
}

/// Largest amount the standard accepts: `999999999.99`.
pub fn max_amount() -> Decimal {
    Decimal::new(99_999_999_999, 2)
}

/// Parses `amount` as a decimal and checks it against the accepted range (inclusive).
///
/// The grammar is that of a float literal: an optional sign, digits with an
/// optional fraction and an optional exponent. Digit separators, `NaN` and
/// infinities are malformed. Numbers too large or too small to be held
/// exactly are out of range.
///
/// ```
/// use epc_qr::{errors::ValidationError, types::parse_amount};
///
/// assert!(parse_amount("0.01").is_ok());
/// assert!(matches!(parse_amount("0.00"), Err(ValidationError::AmountOutOfRange { .. })));
/// assert!(matches!(parse_amount("abc"), Err(ValidationError::AmountFormatInvalid { .. })));
/// ```
pub fn parse_amount(amount: &str) -> Result<Decimal, ValidationError> {
    let format_invalid = |source| ValidationError::AmountFormatInvalid {
        amount: amount.to_string(),
        source,
    };
    let out_of_range = || ValidationError::AmountOutOfRange {
        amount: amount.to_string(),
    };

    let float =
        f64::from_str(amount).map_err(|err| format_invalid(AmountFormatError::from(err)))?;
    if !float.is_finite() {
        return Err(format_invalid(AmountFormatError::NotFinite));
    }

    let value = Decimal::from_str(amount)
        .or_else(|_| Decimal::from_scientific(amount))
        .or_else(|_| Decimal::try_from(float))
        .map_err(|_| out_of_range())?;

    if !in_range(&min_amount(), &max_amount(), &value) {
        return Err(out_of_range());
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_inclusive() {
        assert_eq!(parse_amount("0.01").unwrap(), min_amount());
        assert_eq!(parse_amount("999999999.99").unwrap(), max_amount());
    }

    #[test]
    fn out_of_range() {
        for amount in [
            "0.00",
            "0.009",
            "-5",
            "1000000000.00",
            "999999999.991",
            "100000000000000000000000000000",
            "1e40",
            "1e-40",
        ] {
            assert!(
                matches!(
                    parse_amount(amount),
                    Err(ValidationError::AmountOutOfRange { .. })
                ),
                "{amount} should be out of range"
            );
        }
    }

    #[test]
    fn invalid_format() {
        for amount in [
            "", "abc", "EUR1.00", "NaN", "inf", "1_000.00", "1__0", "_5", "12,50", " 5",
        ] {
            assert!(
                matches!(
                    parse_amount(amount),
                    Err(ValidationError::AmountFormatInvalid { .. })
                ),
                "{amount:?} should be rejected as malformed"
            );
        }
    }

    #[test]
    fn float_literal_forms_are_accepted() {
        assert_eq!(parse_amount("1e2").unwrap(), Decimal::new(100, 0));
        assert_eq!(parse_amount("+5").unwrap(), Decimal::new(5, 0));
        assert_eq!(parse_amount(".5").unwrap(), Decimal::new(5, 1));
        assert_eq!(parse_amount("5.").unwrap(), Decimal::new(5, 0));
    }

    #[test]
    fn separators_are_not_digits() {
        let err = parse_amount("1_000.00").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::AmountFormatInvalid {
                source: AmountFormatError::Syntax(_),
                ..
            }
        ));
    }

    #[test]
    fn non_finite_is_malformed() {
        assert!(matches!(
            parse_amount("infinity"),
            Err(ValidationError::AmountFormatInvalid {
                source: AmountFormatError::NotFinite,
                ..
            })
        ));
    }

    #[test]
    fn error_echoes_the_input() {
        let err = parse_amount("1000000000.00").unwrap_err();
        assert_eq!(
            err.to_string(),
            "error amount 1000000000.00 out of valid range"
        );
    }
}
