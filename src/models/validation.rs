//! Field-level validation shared by the request types.

use crate::error::{AppError, AppResult};
use rust_decimal::Decimal;

pub const MAX_NAME_LEN: usize = 200;
pub const MAX_COMMENT_LEN: usize = 2000;

/// Require a non-blank value of at most `max` characters and return it trimmed.
pub fn required_text(field: &str, value: &str, max: usize) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    if trimmed.chars().count() > max {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(trimmed.to_string())
}

/// Blank optional strings are treated as absent.
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Lower-case and trim an email, rejecting anything that is not `local@domain.tld`.
pub fn normalize_email(value: &str) -> AppResult<String> {
    let email = value.trim().to_lowercase();

    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    };

    if !valid {
        return Err(AppError::Validation(format!("Invalid email address: {}", value.trim())));
    }
    Ok(email)
}

pub fn non_negative_amount(field: &str, value: Decimal) -> AppResult<()> {
    if value < Decimal::ZERO {
        return Err(AppError::Validation(format!("{} cannot be negative", field)));
    }
    Ok(())
}

pub fn non_negative_count<T: PartialOrd + Default>(field: &str, value: T) -> AppResult<()> {
    if value < T::default() {
        return Err(AppError::Validation(format!("{} cannot be negative", field)));
    }
    Ok(())
}

pub fn rating(field: &str, value: i16) -> AppResult<()> {
    if !(1..=5).contains(&value) {
        return Err(AppError::Validation(format!("{} must be between 1 and 5", field)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_trims() {
        assert_eq!(required_text("title", "  Launch  ", 10).unwrap(), "Launch");
        assert!(required_text("title", "   ", 10).is_err());
        assert!(required_text("title", "abcdefghijk", 10).is_err());
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email(" Ada@Example.COM ").unwrap(), "ada@example.com");
        assert!(normalize_email("ada.example.com").is_err());
        assert!(normalize_email("@example.com").is_err());
        assert!(normalize_email("ada@example").is_err());
        assert!(normalize_email("ada@@example.com").is_err());
        assert!(normalize_email("ada lovelace@example.com").is_err());
    }

    #[test]
    fn test_amounts_and_ratings() {
        assert!(non_negative_amount("budget", Decimal::new(0, 0)).is_ok());
        assert!(non_negative_amount("budget", Decimal::new(-1, 2)).is_err());
        assert!(non_negative_count("attendees", -1_i32).is_err());
        assert!(non_negative_count("minutes", 0.0_f64).is_ok());
        assert!(rating("rating", 5).is_ok());
        assert!(rating("rating", 0).is_err());
        assert!(rating("rating", 6).is_err());
    }

    #[test]
    fn test_optional_text_drops_blank() {
        assert_eq!(optional_text(Some("  ")), None);
        assert_eq!(optional_text(Some(" x ")), Some("x".to_string()));
        assert_eq!(optional_text(None), None);
    }
}
