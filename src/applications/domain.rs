use std::fmt;

use serde::{Deserialize, Serialize};

use crate::internships::InternshipId;

/// Identifier assigned sequentially by the owning ledger.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ApplicationId(pub u32);

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Pending,
    Successful,
    Unsuccessful,
    Withdrawn,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::Successful => "Successful",
            ApplicationStatus::Unsuccessful => "Unsuccessful",
            ApplicationStatus::Withdrawn => "Withdrawn",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// State of a student's withdrawal request, absent until one is filed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WithdrawalStatus {
    Pending,
    Approved,
    Rejected,
}

impl WithdrawalStatus {
    pub const fn label(self) -> &'static str {
        match self {
            WithdrawalStatus::Pending => "Pending",
            WithdrawalStatus::Approved => "Approved",
            WithdrawalStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for WithdrawalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One student application. The internship is a weak reference resolved by
/// lookup, never owned.
#[derive(Debug, Clone, Serialize)]
pub struct Application {
    pub id: ApplicationId,
    pub student_id: String,
    pub internship_id: InternshipId,
    status: ApplicationStatus,
    placement_accepted: bool,
    withdrawal_reason: Option<String>,
    withdrawal_status: Option<WithdrawalStatus>,
}

impl Application {
    pub(crate) fn new(id: ApplicationId, student_id: String, internship_id: InternshipId) -> Self {
        Self {
            id,
            student_id,
            internship_id,
            status: ApplicationStatus::Pending,
            placement_accepted: false,
            withdrawal_reason: None,
            withdrawal_status: None,
        }
    }

    pub fn status(&self) -> ApplicationStatus {
        self.status
    }

    pub fn placement_accepted(&self) -> bool {
        self.placement_accepted
    }

    pub fn withdrawal_reason(&self) -> Option<&str> {
        self.withdrawal_reason.as_deref()
    }

    pub fn withdrawal_status(&self) -> Option<WithdrawalStatus> {
        self.withdrawal_status
    }

    pub fn is_withdrawal_pending(&self) -> bool {
        self.withdrawal_status == Some(WithdrawalStatus::Pending)
    }

    /// Withdrawal may be requested while the application is live (Pending or
    /// Successful) or after a placement was accepted.
    pub fn can_request_withdrawal(&self) -> bool {
        matches!(
            self.status,
            ApplicationStatus::Pending | ApplicationStatus::Successful
        ) || self.placement_accepted
    }

    pub(crate) fn set_status(&mut self, status: ApplicationStatus) {
        self.status = status;
    }

    pub(crate) fn accept_placement(&mut self) {
        self.placement_accepted = true;
    }

    pub(crate) fn request_withdrawal(&mut self, reason: String) {
        self.withdrawal_reason = Some(reason);
        self.withdrawal_status = Some(WithdrawalStatus::Pending);
    }

    /// Staff approval: the application is withdrawn and any accepted
    /// placement is relinquished. The caller releases the internship slot.
    pub(crate) fn approve_withdrawal(&mut self) {
        self.withdrawal_status = Some(WithdrawalStatus::Approved);
        self.status = ApplicationStatus::Withdrawn;
        self.placement_accepted = false;
    }

    /// Staff rejection: status, slots, and a still-accepted placement are
    /// untouched; only the request itself is closed out.
    pub(crate) fn reject_withdrawal(&mut self) {
        self.withdrawal_status = Some(WithdrawalStatus::Rejected);
        self.withdrawal_reason = None;
    }
}
