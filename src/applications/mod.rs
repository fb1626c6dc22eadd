pub mod domain;
pub mod ledger;

pub use domain::{Application, ApplicationId, ApplicationStatus, WithdrawalStatus};
pub use ledger::ApplicationLedger;
