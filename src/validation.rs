//! Stateless input validators. Callers report the outcome; nothing here
//! raises or logs.

use chrono::NaiveDate;

const PERSONAL_EMAIL_DOMAINS: [&str; 5] = [
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "icloud.com",
];

/// Minimal structural email check: an `@` with non-empty local and domain
/// parts, and a dot somewhere after the `@` that is not the final character.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    let Some(at) = email.find('@') else {
        return false;
    };
    if at == 0 || at == email.len() - 1 {
        return false;
    }
    match email.rfind('.') {
        Some(dot) => dot > at && dot < email.len() - 1,
        None => false,
    }
}

/// Corporate email rule used for company-rep registration: structurally valid
/// and not hosted on a known personal provider.
pub fn is_corporate_email(email: &str) -> bool {
    let email = email.trim().to_ascii_lowercase();
    if !is_valid_email(&email) {
        return false;
    }
    let Some(at) = email.find('@') else {
        return false;
    };
    let domain = &email[at + 1..];
    !PERSONAL_EMAIL_DOMAINS.contains(&domain)
}

/// Student id format: `U` followed by 7 digits and a trailing letter.
pub fn is_valid_student_id(student_id: &str) -> bool {
    let bytes = student_id.as_bytes();
    if bytes.len() != 9 || bytes[0] != b'U' {
        return false;
    }
    if !bytes[1..8].iter().all(u8::is_ascii_digit) {
        return false;
    }
    bytes[8].is_ascii_alphabetic()
}

pub fn is_valid_password(password: &str, min_length: usize) -> bool {
    password.len() >= min_length && !password.trim().is_empty()
}

/// Trimmed length within `[min, max]`.
pub fn is_valid_field_length(field: &str, min: usize, max: usize) -> bool {
    let length = field.trim().chars().count();
    length >= min && length <= max
}

pub fn closing_after_opening(opening: NaiveDate, closing: NaiveDate) -> bool {
    closing > opening
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_requires_local_domain_and_dot() {
        assert!(is_valid_email("rep@acme.com"));
        assert!(is_valid_email("first.last@sub.acme.org"));
        assert!(!is_valid_email("acme.com"));
        assert!(!is_valid_email("@acme.com"));
        assert!(!is_valid_email("rep@"));
        assert!(!is_valid_email("rep@acmecom"));
        assert!(!is_valid_email("rep@acme.com."));
        assert!(!is_valid_email("rep.lead@acmecom@"));
    }

    #[test]
    fn corporate_email_rejects_personal_providers() {
        assert!(is_corporate_email("talent@acme.com"));
        assert!(is_corporate_email("Talent@Acme.COM"));
        assert!(!is_corporate_email("someone@gmail.com"));
        assert!(!is_corporate_email("someone@OUTLOOK.com"));
        assert!(!is_corporate_email("not-an-email"));
    }

    #[test]
    fn student_id_format_is_strict() {
        assert!(is_valid_student_id("U2345123F"));
        assert!(!is_valid_student_id("U123"));
        assert!(!is_valid_student_id("X2345123F"));
        assert!(!is_valid_student_id("U234512FF"));
        assert!(!is_valid_student_id("U23451234"));
        assert!(!is_valid_student_id("U2345123FA"));
    }

    #[test]
    fn password_needs_length_and_substance() {
        assert!(is_valid_password("hunter2x", 6));
        assert!(!is_valid_password("abc", 6));
        assert!(!is_valid_password("        ", 6));
    }

    #[test]
    fn field_length_uses_trimmed_bounds() {
        assert!(is_valid_field_length("  Backend Intern  ", 1, 20));
        assert!(!is_valid_field_length("   ", 1, 20));
        assert!(!is_valid_field_length("x".repeat(21).as_str(), 1, 20));
    }

    #[test]
    fn closing_date_must_follow_opening_date() {
        let opening = NaiveDate::from_ymd_opt(2026, 1, 10).expect("valid date");
        let closing = NaiveDate::from_ymd_opt(2026, 2, 10).expect("valid date");
        assert!(closing_after_opening(opening, closing));
        assert!(!closing_after_opening(closing, opening));
        assert!(!closing_after_opening(opening, opening));
    }
}
