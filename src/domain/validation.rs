//! Contact-field checks shared by customer and staff records.

pub type ValidationResult = Result<(), String>;

/// Non-empty, at most 100 characters.
pub fn validate_name(name: &str) -> ValidationResult {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("name must not be empty".into());
    }
    if trimmed.chars().count() > 100 {
        return Err("name must be at most 100 characters".into());
    }
    Ok(())
}

/// 7-15 digits; spaces, dashes and a leading `+` are allowed.
pub fn validate_phone(phone: &str) -> ValidationResult {
    let trimmed = phone.trim();
    let body = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if !body.chars().all(|c| c.is_ascii_digit() || c == ' ' || c == '-') {
        return Err(format!("phone number {trimmed:?} contains invalid characters"));
    }
    let digits = body.chars().filter(char::is_ascii_digit).count();
    if !(7..=15).contains(&digits) {
        return Err(format!("phone number {trimmed:?} must have 7-15 digits"));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> ValidationResult {
    let trimmed = email.trim();
    match trimmed.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') && !domain.contains('@') => Ok(()),
        _ => Err(format!("email {trimmed:?} is not valid")),
    }
}
