use crate::utils::error::{RosterError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RosterError::invalid_argument(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// Raise multipliers are ratios applied to a salary, so they must be finite and positive.
pub fn validate_raise_amount(field_name: &str, amount: f64) -> Result<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(RosterError::invalid_argument(
            field_name,
            amount.to_string(),
            "Raise amount must be a finite number greater than zero",
        ));
    }
    Ok(())
}

pub fn validate_email_domain(field_name: &str, domain: &str) -> Result<()> {
    if domain.is_empty() {
        return Err(RosterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: domain.to_string(),
            reason: "Email domain cannot be empty".to_string(),
        });
    }

    match url::Host::parse(domain) {
        Ok(url::Host::Domain(_)) => Ok(()),
        Ok(_) => Err(RosterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: domain.to_string(),
            reason: "Email domain must be a host name, not an IP address".to_string(),
        }),
        Err(e) => Err(RosterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: domain.to_string(),
            reason: format!("Invalid domain: {}", e),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("first_name", "Mary").is_ok());
        assert!(validate_non_empty_string("first_name", "").is_err());
        assert!(validate_non_empty_string("first_name", "   ").is_err());
    }

    #[test]
    fn test_validate_raise_amount() {
        assert!(validate_raise_amount("raise_amount", 1.07).is_ok());
        assert!(validate_raise_amount("raise_amount", 0.0).is_err());
        assert!(validate_raise_amount("raise_amount", -1.5).is_err());
        assert!(validate_raise_amount("raise_amount", f64::NAN).is_err());
        assert!(validate_raise_amount("raise_amount", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_email_domain() {
        assert!(validate_email_domain("email_domain", "email.com").is_ok());
        assert!(validate_email_domain("email_domain", "corp.example.org").is_ok());
        assert!(validate_email_domain("email_domain", "").is_err());
        assert!(validate_email_domain("email_domain", "127.0.0.1").is_err());
        assert!(validate_email_domain("email_domain", "bad host").is_err());
    }
}
