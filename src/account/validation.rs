//! Field rules for account records and transaction amounts

use rust_decimal::Decimal;

pub const MIN_AGE: u32 = 18;
pub const PIN_LENGTH: usize = 4;
pub const MOBILE_NUMBER_LENGTH: usize = 10;

/// Upper bound for a single deposit or withdrawal
pub const MAX_TRANSACTION_AMOUNT: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("Account holder must be at least {min} years old (got {age}).", min = MIN_AGE)]
    Underage { age: u32 },

    #[error("Pin must be exactly {len} digits.", len = PIN_LENGTH)]
    InvalidPin,

    #[error("Mobile number must be exactly {len} digits.", len = MOBILE_NUMBER_LENGTH)]
    InvalidMobileNumber,

    #[error("Name must not be empty.")]
    EmptyName,

    #[error("Amount should be > 0 and <= {max} (got {amount}).", max = MAX_TRANSACTION_AMOUNT)]
    AmountOutOfRange { amount: Decimal },
}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

pub fn validate_age(age: u32) -> Result<(), ValidationError> {
    if age < MIN_AGE {
        return Err(ValidationError::Underage { age });
    }
    Ok(())
}

pub fn validate_pin(pin: &str) -> Result<(), ValidationError> {
    if !is_digits(pin, PIN_LENGTH) {
        return Err(ValidationError::InvalidPin);
    }
    Ok(())
}

pub fn validate_mobile_number(mobile_number: &str) -> Result<(), ValidationError> {
    if !is_digits(mobile_number, MOBILE_NUMBER_LENGTH) {
        return Err(ValidationError::InvalidMobileNumber);
    }
    Ok(())
}

/// Returns the trimmed name
pub fn validate_name(name: &str) -> Result<&str, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(name)
}

pub fn validate_amount(amount: Decimal) -> Result<(), ValidationError> {
    if amount <= Decimal::ZERO || amount > MAX_TRANSACTION_AMOUNT {
        return Err(ValidationError::AmountOutOfRange { amount });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_boundary() {
        assert_eq!(validate_age(17), Err(ValidationError::Underage { age: 17 }));
        assert!(validate_age(18).is_ok());
    }

    #[test]
    fn test_pin_format() {
        assert!(validate_pin("0000").is_ok());
        assert!(validate_pin("0123").is_ok());
        for bad in ["", "123", "12345", "12a4", " 123", "١٢٣٤"] {
            assert_eq!(validate_pin(bad), Err(ValidationError::InvalidPin), "{bad:?}");
        }
    }

    #[test]
    fn test_mobile_number_format() {
        assert!(validate_mobile_number("0123456789").is_ok());
        assert!(validate_mobile_number("987654321").is_err());
        assert!(validate_mobile_number("98765432100").is_err());
        assert!(validate_mobile_number("98765-4321").is_err());
    }

    #[test]
    fn test_name_is_trimmed() {
        assert_eq!(validate_name("  Asha "), Ok("Asha"));
        assert_eq!(validate_name("   "), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_amount_range() {
        assert!(validate_amount(Decimal::new(1, 2)).is_ok());
        assert!(validate_amount(Decimal::from(10_000)).is_ok());
        assert!(validate_amount(Decimal::ZERO).is_err());
        assert!(validate_amount(Decimal::from(-5)).is_err());
        assert!(validate_amount(Decimal::new(1_000_001, 2)).is_err());
    }

    #[test]
    fn test_messages_name_the_rule() {
        assert_eq!(ValidationError::InvalidPin.to_string(), "Pin must be exactly {len} digits.", len = PIN_LENGTH);
        assert_eq!(
            ValidationError::AmountOutOfRange { amount: Decimal::ZERO }.to_string(),
            "Amount should be > 0 and <= 10000 (got 0)."
        );
    }
}
