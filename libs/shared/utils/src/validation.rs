use once_cell::sync::Lazy;
use regex::Regex;

use shared_models::error::AppError;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email regex is valid")
});

pub fn validate_email(email: &str) -> bool {
    email.len() <= 254 && EMAIL_REGEX.is_match(email)
}

/// Trims an optional field and rejects it when absent or blank.
pub fn required_field(value: Option<&str>, field: &str) -> Result<String, AppError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::ValidationError(format!("{} is required", field)))
}

/// Trims an optional field, mapping blank values to `None`.
pub fn optional_field(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Normalizes and validates an email address (trimmed, lowercased).
pub fn normalize_email(value: Option<&str>) -> Result<String, AppError> {
    let email = required_field(value, "Email")?.to_lowercase();
    if !validate_email(&email) {
        return Err(AppError::ValidationError("Invalid email address".to_string()));
    }
    Ok(email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("patient@example.com"));
        assert!(validate_email("first.last+tag@clinic.co.uk"));
        assert!(!validate_email("not-an-email"));
        assert!(!validate_email("missing@tld"));
        assert!(!validate_email("@example.com"));
    }

    #[test]
    fn test_required_field() {
        assert_eq!(required_field(Some("  Jane  "), "Full name").unwrap(), "Jane");
        assert_matches!(
            required_field(Some("   "), "Message"),
            Err(AppError::ValidationError(msg)) if msg == "Message is required"
        );
        assert!(required_field(None, "Message").is_err());
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email(Some(" Jane@Example.COM ")).unwrap(), "jane@example.com");
        assert!(normalize_email(Some("jane")).is_err());
        assert!(normalize_email(None).is_err());
    }

    #[test]
    fn test_optional_field() {
        assert_eq!(optional_field(Some(" Hello ")), Some("Hello".to_string()));
        assert_eq!(optional_field(Some("  ")), None);
        assert_eq!(optional_field(None), None);
    }
}
