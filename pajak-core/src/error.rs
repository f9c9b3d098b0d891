use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;

/// Largest monetary input accepted, Rp 10^24. Every intermediate product
/// of an accepted input stays inside the `Decimal` range.
pub const MAX_AMOUNT: Decimal = dec!(1000000000000000000000000);

/// Errors raised for inputs no calculation can give a meaningful answer
/// for.
///
/// Domain-normal conditions (zero amounts, unknown categories, deductions
/// that exceed income, more than three dependents) never produce an
/// error; they are clamped or mapped to a default instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalculationError {
    /// A monetary input was below zero.
    #[error("{field} must not be negative, got {value}")]
    NegativeAmount { field: &'static str, value: Decimal },

    /// A monetary input above [`MAX_AMOUNT`].
    #[error("{field} must not exceed {}, got {value}", MAX_AMOUNT)]
    AmountTooLarge { field: &'static str, value: Decimal },

    /// A tax treaty rate outside the 0-20% range.
    #[error("treaty rate must be between 0 and 20 percent, got {0}")]
    TreatyRateOutOfRange(Decimal),

    /// A progressive schedule was built without any brackets.
    #[error("no tax brackets provided")]
    NoTaxBrackets,
}

/// A category tag that matches no variant of a strict category enum.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {category} '{tag}', expected one of: {}", .expected.join(", "))]
pub struct UnknownCategoryError {
    pub category: &'static str,
    pub tag: String,
    pub expected: &'static [&'static str],
}

/// Rejects a monetary input below zero or above [`MAX_AMOUNT`].
pub(crate) fn ensure_amount(
    field: &'static str,
    value: Decimal,
) -> Result<Decimal, CalculationError> {
    if value < Decimal::ZERO {
        return Err(CalculationError::NegativeAmount { field, value });
    }
    if value > MAX_AMOUNT {
        return Err(CalculationError::AmountTooLarge { field, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn ensure_amount_accepts_zero_positive_and_limit() {
        assert_eq!(ensure_amount("salary", dec!(0)), Ok(dec!(0)));
        assert_eq!(ensure_amount("salary", dec!(10.5)), Ok(dec!(10.5)));
        assert_eq!(ensure_amount("salary", MAX_AMOUNT), Ok(MAX_AMOUNT));
    }

    #[test]
    fn ensure_amount_names_the_negative_field() {
        let err = ensure_amount("salary", dec!(-1)).unwrap_err();

        assert_eq!(
            err,
            CalculationError::NegativeAmount {
                field: "salary",
                value: dec!(-1)
            }
        );
        assert_eq!(err.to_string(), "salary must not be negative, got -1");
    }

    #[test]
    fn ensure_amount_rejects_values_above_limit() {
        let value = dec!(10000000000000000000000000000);
        let err = ensure_amount("salary", value).unwrap_err();

        assert_eq!(err, CalculationError::AmountTooLarge { field: "salary", value });
        assert_eq!(
            err.to_string(),
            "salary must not exceed 1000000000000000000000000, got 10000000000000000000000000000"
        );
    }
}
