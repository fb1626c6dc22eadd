use tracing::info;

use super::directory::UserDirectory;
use super::domain::{CompanyRep, UserAccount};
use crate::rules::ProgramRules;
use crate::validation;

/// Self-registration form submitted by a company representative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepRegistration {
    pub user_id: String,
    pub password: String,
    pub name: String,
    pub company_name: String,
    pub department: String,
    pub position: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    #[error("user id '{0}' is already taken")]
    DuplicateUserId(String),
    #[error("invalid email '{0}': must be a corporate address (not gmail, yahoo, hotmail, etc)")]
    NonCorporateEmail(String),
    #[error("password must be at least {min} characters long and not blank")]
    WeakPassword { min: usize },
    #[error("{field} must be between {min} and {max} characters")]
    FieldLength {
        field: &'static str,
        min: usize,
        max: usize,
    },
}

/// Validate and queue a company-rep account for staff approval. The account
/// cannot log in until staff approve it.
pub fn register_company_rep(
    directory: &mut UserDirectory,
    rules: &ProgramRules,
    registration: RepRegistration,
) -> Result<(), RegistrationError> {
    if directory.contains(&registration.user_id) {
        return Err(RegistrationError::DuplicateUserId(registration.user_id));
    }
    if !validation::is_corporate_email(&registration.email) {
        return Err(RegistrationError::NonCorporateEmail(registration.email));
    }
    if !validation::is_valid_password(&registration.password, rules.min_password_length) {
        return Err(RegistrationError::WeakPassword {
            min: rules.min_password_length,
        });
    }

    let bounded_fields = [
        ("name", &registration.name),
        ("company name", &registration.company_name),
        ("department", &registration.department),
        ("position", &registration.position),
    ];
    for (field, value) in bounded_fields {
        if !validation::is_valid_field_length(value, 1, rules.max_field_length) {
            return Err(RegistrationError::FieldLength {
                field,
                min: 1,
                max: rules.max_field_length,
            });
        }
    }

    let user_id = registration.user_id.clone();
    directory.add(UserAccount::CompanyRep(CompanyRep {
        user_id: registration.user_id,
        password: registration.password,
        name: registration.name,
        company_name: registration.company_name,
        department: registration.department,
        position: registration.position,
        email: registration.email,
        approved: false,
    }));
    info!(%user_id, "company rep registration queued for staff approval");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration() -> RepRegistration {
        RepRegistration {
            user_id: "rep-acme".to_string(),
            password: "secret1".to_string(),
            name: "Dana Reyes".to_string(),
            company_name: "Acme Robotics".to_string(),
            department: "Talent".to_string(),
            position: "Recruiter".to_string(),
            email: "dana@acme.com".to_string(),
        }
    }

    #[test]
    fn valid_registration_lands_in_pending_queue() {
        let mut directory = UserDirectory::new();
        register_company_rep(&mut directory, &ProgramRules::default(), registration())
            .expect("registration");

        assert!(directory.pending_rep("rep-acme").is_some());
        assert!(directory.find("rep-acme").is_none());
    }

    #[test]
    fn personal_email_is_rejected() {
        let mut directory = UserDirectory::new();
        let request = RepRegistration {
            email: "dana@gmail.com".to_string(),
            ..registration()
        };
        assert!(matches!(
            register_company_rep(&mut directory, &ProgramRules::default(), request),
            Err(RegistrationError::NonCorporateEmail(_))
        ));
    }

    #[test]
    fn duplicate_and_weak_password_are_rejected() {
        let mut directory = UserDirectory::new();
        let rules = ProgramRules::default();
        register_company_rep(&mut directory, &rules, registration()).expect("registration");

        assert!(matches!(
            register_company_rep(&mut directory, &rules, registration()),
            Err(RegistrationError::DuplicateUserId(_))
        ));

        let weak = RepRegistration {
            user_id: "rep-globex".to_string(),
            password: "abc".to_string(),
            ..registration()
        };
        assert_eq!(
            register_company_rep(&mut directory, &rules, weak),
            Err(RegistrationError::WeakPassword { min: 6 })
        );
    }
}
