use super::*;

fn creds(email: &str, password: &str) -> Credentials {
    Credentials {
        email: email.to_owned(),
        password: password.to_owned(),
    }
}

// =============================================================
// Email field
// =============================================================

#[test]
fn email_empty_is_required() {
    assert_eq!(validate_email(""), Some(FieldError::Required));
}

#[test]
fn email_without_at_is_invalid() {
    assert_eq!(validate_email("userexample.com"), Some(FieldError::InvalidFormat));
}

#[test]
fn email_without_domain_dot_is_invalid() {
    assert_eq!(validate_email("user@localhost"), Some(FieldError::InvalidFormat));
}

#[test]
fn email_with_empty_local_part_is_invalid() {
    assert_eq!(validate_email("@example.com"), Some(FieldError::InvalidFormat));
}

#[test]
fn email_with_empty_domain_label_is_invalid() {
    assert_eq!(validate_email("user@.com"), Some(FieldError::InvalidFormat));
    assert_eq!(validate_email("user@example."), Some(FieldError::InvalidFormat));
    assert_eq!(validate_email("user@example..com"), Some(FieldError::InvalidFormat));
}

#[test]
fn email_with_whitespace_is_invalid() {
    assert_eq!(validate_email("user name@example.com"), Some(FieldError::InvalidFormat));
}

#[test]
fn email_with_two_at_signs_is_invalid() {
    assert_eq!(validate_email("user@host@example.com"), Some(FieldError::InvalidFormat));
}

#[test]
fn plain_address_is_valid() {
    assert_eq!(validate_email("user@example.com"), None);
}

#[test]
fn subdomain_address_is_valid() {
    assert_eq!(validate_email("user@mail.example.co.uk"), None);
}

#[test]
fn plus_tag_address_is_valid() {
    assert_eq!(validate_email("user+tag@example.com"), None);
}

// =============================================================
// Password field
// =============================================================

#[test]
fn password_empty_is_required() {
    assert_eq!(validate_password(""), Some(FieldError::Required));
}

#[test]
fn password_of_seven_chars_is_too_short() {
    assert_eq!(validate_password("1234567"), Some(FieldError::TooShort));
}

#[test]
fn password_of_eight_chars_is_accepted() {
    assert_eq!(validate_password("12345678"), None);
}

#[test]
fn password_length_counts_chars_not_bytes() {
    // Eight characters, more than eight bytes.
    assert_eq!(validate_password("pässwörd"), None);
}

// =============================================================
// validate()
// =============================================================

#[test]
fn validate_reports_both_fields() {
    let result = validate(&creds("nope", "short"));
    assert_eq!(result.email, Some(FieldError::InvalidFormat));
    assert_eq!(result.password, Some(FieldError::TooShort));
    assert!(!result.is_ok());
}

#[test]
fn validate_passes_valid_credentials() {
    let result = validate(&creds("user@example.com", "hunter2hunter2"));
    assert_eq!(result, ValidationResult::default());
    assert!(result.is_ok());
}

#[test]
fn field_error_messages() {
    assert_eq!(FieldError::Required.message(), "Required");
    assert_eq!(FieldError::InvalidFormat.message(), "Invalid email address");
    assert_eq!(
        FieldError::TooShort.message(),
        "Password must be at least 8 characters"
    );
}
