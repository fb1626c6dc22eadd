pub mod auth;
pub mod directory;
pub mod domain;
pub mod register;

pub use auth::{login, LoginError, PasswordChangeError};
pub use directory::{DirectoryError, UserDirectory};
pub use domain::{CompanyRep, Major, ParseMajorError, Staff, Student, UserAccount, UserRole};
pub use register::{register_company_rep, RegistrationError, RepRegistration};
