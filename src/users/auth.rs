use super::directory::UserDirectory;
use super::domain::UserAccount;
use crate::rules::ProgramRules;
use crate::validation;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("invalid ID: user not found")]
    UnknownUser,
    #[error("incorrect password")]
    IncorrectPassword,
    #[error("account not approved by career center staff")]
    NotApproved,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordChangeError {
    #[error("invalid ID: user not found")]
    UnknownUser,
    #[error("incorrect current password")]
    IncorrectOldPassword,
    #[error("new password must be at least {min} characters long and not blank")]
    WeakPassword { min: usize },
}

/// Authenticate against the directory. Passwords are compared in plain text;
/// an unapproved company rep is refused even with correct credentials.
pub fn login<'a>(
    directory: &'a UserDirectory,
    user_id: &str,
    password: &str,
) -> Result<&'a UserAccount, LoginError> {
    if let Some(account) = directory.find(user_id) {
        if account.password() != password {
            return Err(LoginError::IncorrectPassword);
        }
        return Ok(account);
    }

    if let Some(rep) = directory.pending_rep(user_id) {
        if rep.password != password {
            return Err(LoginError::IncorrectPassword);
        }
        return Err(LoginError::NotApproved);
    }

    Err(LoginError::UnknownUser)
}

pub fn change_password(
    directory: &mut UserDirectory,
    user_id: &str,
    old_password: &str,
    new_password: &str,
    rules: &ProgramRules,
) -> Result<(), PasswordChangeError> {
    let account = directory
        .find_mut(user_id)
        .ok_or(PasswordChangeError::UnknownUser)?;

    if account.password() != old_password {
        return Err(PasswordChangeError::IncorrectOldPassword);
    }
    if !validation::is_valid_password(new_password, rules.min_password_length) {
        return Err(PasswordChangeError::WeakPassword {
            min: rules.min_password_length,
        });
    }

    account.set_password(new_password.to_string());
    Ok(())
}
