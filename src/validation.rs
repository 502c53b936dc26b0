use crate::error::{BookError, BookResult};

/// Minimum number of digits a phone number must carry once punctuation is removed.
pub const MIN_PHONE_DIGITS: usize = 10;

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> BookResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(BookError::InvalidInput {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Trims an optional text field. Blank input becomes the empty string,
/// which the model reads as "not provided".
pub fn trim_optional(value: &str) -> String {
    value.trim().to_string()
}

/// True when the phone number has at least [`MIN_PHONE_DIGITS`] digits,
/// ignoring spaces, dashes, parentheses and any other separators.
pub fn valid_phone(phone: &str) -> bool {
    phone.chars().filter(|c| c.is_ascii_digit()).count() >= MIN_PHONE_DIGITS
}

/// Checks an email address of the shape `local@domain.tld`.
///
/// An empty string is accepted since the email field is optional.
pub fn valid_email(email: &str) -> bool {
    if email.is_empty() {
        return true;
    }

    let Some((local, host)) = email.split_once('@') else {
        return false;
    };
    // The TLD can hold no dots, so it always follows the last one.
    let Some((domain, tld)) = host.rsplit_once('.') else {
        return false;
    };

    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-'));
    let domain_ok = !domain.is_empty()
        && domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'));
    let tld_ok = tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic());

    local_ok && domain_ok && tld_ok
}
