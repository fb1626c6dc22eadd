//! Career-center facade composing the user directory, internship board, and
//! application ledger. Cross-store rules (placement acceptance, withdrawal
//! approval, cascading deletes) live here so each store stays a plain list.

use chrono::NaiveDate;
use tracing::info;

use crate::applications::{Application, ApplicationId, ApplicationLedger, ApplicationStatus};
use crate::internships::{
    Internship, InternshipBoard, InternshipDraft, InternshipFilter, InternshipId,
    InternshipLevel, InternshipStatus, PostingError,
};
use crate::rules::ProgramRules;
use crate::users::{
    self, CompanyRep, DirectoryError, LoginError, PasswordChangeError, RegistrationError,
    RepRegistration, UserAccount, UserDirectory,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApplyError {
    #[error("unknown student '{0}'")]
    UnknownStudent(String),
    #[error("no internship with id {0}")]
    UnknownInternship(InternshipId),
    #[error("you are not eligible for {0}-level internships")]
    LevelNotEligible(InternshipLevel),
    #[error("internship is not open for applications")]
    NotOpen,
    #[error("you have already applied for this internship")]
    DuplicateApplication,
    #[error("you can only have {max} pending applications at a time")]
    PendingCapReached { max: usize },
    #[error("you have already accepted a placement")]
    PlacementAlreadyAccepted,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReviewError {
    #[error("no application with id {0}")]
    UnknownApplication(ApplicationId),
    #[error("only pending applications can be reviewed")]
    NotPending,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("no application with id {0}")]
    UnknownApplication(ApplicationId),
    #[error("this application does not belong to you")]
    NotOwner,
    #[error("only successful applications can be accepted")]
    NotSuccessful,
    #[error("no internship with id {0}")]
    UnknownInternship(InternshipId),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WithdrawalError {
    #[error("no application with id {0}")]
    UnknownApplication(ApplicationId),
    #[error("this application does not belong to you")]
    NotOwner,
    #[error("this application cannot be withdrawn")]
    NotWithdrawable,
    #[error("a withdrawal request is already pending")]
    AlreadyRequested,
    #[error("no withdrawal request is pending for this application")]
    NoPendingRequest,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApprovalError {
    #[error("no internship with id {0}")]
    UnknownInternship(InternshipId),
    #[error("only pending internships can be decided")]
    NotPending,
}

/// The single entry point role-scoped callers (CLI menus, tests) drive.
#[derive(Debug, Default)]
pub struct CareerCenter {
    rules: ProgramRules,
    users: UserDirectory,
    internships: InternshipBoard,
    applications: ApplicationLedger,
}

impl CareerCenter {
    pub fn new(rules: ProgramRules) -> Self {
        Self {
            rules,
            users: UserDirectory::new(),
            internships: InternshipBoard::new(),
            applications: ApplicationLedger::new(),
        }
    }

    pub fn rules(&self) -> &ProgramRules {
        &self.rules
    }

    pub fn users(&self) -> &UserDirectory {
        &self.users
    }

    pub fn users_mut(&mut self) -> &mut UserDirectory {
        &mut self.users
    }

    pub fn internships(&self) -> &InternshipBoard {
        &self.internships
    }

    pub fn applications(&self) -> &ApplicationLedger {
        &self.applications
    }

    // ── Accounts ──

    pub fn login(&self, user_id: &str, password: &str) -> Result<&UserAccount, LoginError> {
        users::login(&self.users, user_id, password)
    }

    pub fn change_password(
        &mut self,
        user_id: &str,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), PasswordChangeError> {
        users::auth::change_password(&mut self.users, user_id, old_password, new_password, &self.rules)
    }

    pub fn register_company_rep(
        &mut self,
        registration: RepRegistration,
    ) -> Result<(), RegistrationError> {
        users::register_company_rep(&mut self.users, &self.rules, registration)
    }

    pub fn pending_company_reps(&self) -> &[CompanyRep] {
        self.users.pending_reps()
    }

    pub fn approve_company_rep(&mut self, user_id: &str) -> Result<(), DirectoryError> {
        self.users.approve_rep(user_id)?;
        info!(%user_id, "company rep approved");
        Ok(())
    }

    pub fn reject_company_rep(&mut self, user_id: &str) -> Result<(), DirectoryError> {
        self.users.reject_rep(user_id)?;
        info!(%user_id, "company rep rejected");
        Ok(())
    }

    // ── Company rep operations ──

    pub fn create_internship(
        &mut self,
        rep_id: &str,
        draft: InternshipDraft,
    ) -> Result<InternshipId, PostingError> {
        let rep = self
            .users
            .company_rep(rep_id)
            .ok_or_else(|| PostingError::UnknownRep(rep_id.to_string()))?;
        let id = self.internships.post(rep, draft, &self.rules)?;
        info!(internship = %id, %rep_id, "internship posted, pending staff approval");
        Ok(id)
    }

    /// Title/description edits, allowed only before the staff decision.
    pub fn update_internship(
        &mut self,
        internship_id: InternshipId,
        title: String,
        description: String,
    ) -> Result<(), PostingError> {
        let internship = self
            .internships
            .get_mut(internship_id)
            .ok_or(PostingError::NotFound(internship_id))?;
        if !internship.can_edit() {
            return Err(PostingError::NotEditable(internship_id));
        }
        internship.title = title;
        internship.description = description;
        Ok(())
    }

    /// Delete an unapproved posting and cascade-remove its applications.
    pub fn delete_internship(&mut self, internship_id: InternshipId) -> Result<(), PostingError> {
        self.internships.delete(internship_id)?;
        let dropped = self.applications.remove_for_internship(internship_id);
        info!(internship = %internship_id, applications_removed = dropped, "internship deleted");
        Ok(())
    }

    /// Returns the new visibility.
    pub fn toggle_visibility(&mut self, internship_id: InternshipId) -> Result<bool, PostingError> {
        let internship = self
            .internships
            .get_mut(internship_id)
            .ok_or(PostingError::NotFound(internship_id))?;
        Ok(internship.toggle_visibility())
    }

    /// Rep decision on a pending application: `Pending -> Successful`.
    pub fn approve_application(&mut self, application_id: ApplicationId) -> Result<(), ReviewError> {
        self.review_application(application_id, ApplicationStatus::Successful)
    }

    /// Rep decision on a pending application: `Pending -> Unsuccessful`.
    pub fn reject_application(&mut self, application_id: ApplicationId) -> Result<(), ReviewError> {
        self.review_application(application_id, ApplicationStatus::Unsuccessful)
    }

    fn review_application(
        &mut self,
        application_id: ApplicationId,
        outcome: ApplicationStatus,
    ) -> Result<(), ReviewError> {
        let application = self
            .applications
            .get_mut(application_id)
            .ok_or(ReviewError::UnknownApplication(application_id))?;
        if application.status() != ApplicationStatus::Pending {
            return Err(ReviewError::NotPending);
        }
        application.set_status(outcome);
        info!(application = %application_id, outcome = %outcome, "application reviewed");
        Ok(())
    }

    // ── Staff operations ──

    pub fn pending_internships(&self) -> Vec<&Internship> {
        self.internships.pending()
    }

    /// `Pending -> Approved`; the posting becomes visible to students.
    pub fn approve_internship(&mut self, internship_id: InternshipId) -> Result<(), ApprovalError> {
        let internship = self
            .internships
            .get_mut(internship_id)
            .ok_or(ApprovalError::UnknownInternship(internship_id))?;
        if internship.status() != InternshipStatus::Pending {
            return Err(ApprovalError::NotPending);
        }
        internship.approve();
        info!(internship = %internship_id, "internship approved");
        Ok(())
    }

    /// `Pending -> Rejected`.
    pub fn reject_internship(&mut self, internship_id: InternshipId) -> Result<(), ApprovalError> {
        let internship = self
            .internships
            .get_mut(internship_id)
            .ok_or(ApprovalError::UnknownInternship(internship_id))?;
        if internship.status() != InternshipStatus::Pending {
            return Err(ApprovalError::NotPending);
        }
        internship.reject();
        info!(internship = %internship_id, "internship rejected");
        Ok(())
    }

    pub fn pending_withdrawals(&self) -> Vec<&Application> {
        self.applications.pending_withdrawals()
    }

    /// Approve a pending withdrawal: the application is withdrawn, and an
    /// accepted placement returns its slot to the internship.
    pub fn approve_withdrawal(&mut self, application_id: ApplicationId) -> Result<(), WithdrawalError> {
        let application = self
            .applications
            .get_mut(application_id)
            .ok_or(WithdrawalError::UnknownApplication(application_id))?;
        if !application.is_withdrawal_pending() {
            return Err(WithdrawalError::NoPendingRequest);
        }

        let had_placement = application.placement_accepted();
        let internship_id = application.internship_id;
        application.approve_withdrawal();

        if had_placement {
            if let Some(internship) = self.internships.get_mut(internship_id) {
                internship.release_slot();
            }
        }
        info!(application = %application_id, slot_released = had_placement, "withdrawal approved");
        Ok(())
    }

    /// Reject a pending withdrawal; a still-accepted placement survives.
    pub fn reject_withdrawal(&mut self, application_id: ApplicationId) -> Result<(), WithdrawalError> {
        let application = self
            .applications
            .get_mut(application_id)
            .ok_or(WithdrawalError::UnknownApplication(application_id))?;
        if !application.is_withdrawal_pending() {
            return Err(WithdrawalError::NoPendingRequest);
        }
        application.reject_withdrawal();
        info!(application = %application_id, "withdrawal rejected");
        Ok(())
    }

    pub fn report(&self, filter: &InternshipFilter) -> Vec<&Internship> {
        self.internships.report(filter)
    }

    // ── Student operations ──

    /// Postings the student may browse, already narrowed to their major and
    /// level eligibility.
    pub fn open_internships(
        &self,
        student_id: &str,
        today: NaiveDate,
    ) -> Result<Vec<&Internship>, ApplyError> {
        let student = self
            .users
            .student(student_id)
            .ok_or_else(|| ApplyError::UnknownStudent(student_id.to_string()))?;
        Ok(self.internships.for_student(student, today))
    }

    pub fn apply(
        &mut self,
        student_id: &str,
        internship_id: InternshipId,
        today: NaiveDate,
    ) -> Result<ApplicationId, ApplyError> {
        let student = self
            .users
            .student(student_id)
            .ok_or_else(|| ApplyError::UnknownStudent(student_id.to_string()))?;
        let internship = self
            .internships
            .get(internship_id)
            .ok_or(ApplyError::UnknownInternship(internship_id))?;

        if !student.can_apply_for_level(internship.level) {
            return Err(ApplyError::LevelNotEligible(internship.level));
        }
        if !internship.is_open_for_applications(today) {
            return Err(ApplyError::NotOpen);
        }
        if self.applications.has_applied(student_id, internship_id) {
            return Err(ApplyError::DuplicateApplication);
        }
        if self.applications.pending_count(student_id) >= self.rules.max_pending_applications {
            return Err(ApplyError::PendingCapReached {
                max: self.rules.max_pending_applications,
            });
        }
        if self.applications.has_accepted_placement(student_id) {
            return Err(ApplyError::PlacementAlreadyAccepted);
        }

        let application_id = self.applications.submit(student_id, internship_id);
        info!(application = %application_id, %student_id, internship = %internship_id, "application submitted");
        Ok(application_id)
    }

    /// Accept a successful offer. Takes one slot on the internship and
    /// withdraws the student's other live applications, so at most one
    /// placement is ever accepted.
    pub fn accept_placement(
        &mut self,
        student_id: &str,
        application_id: ApplicationId,
    ) -> Result<(), PlacementError> {
        let application = self
            .applications
            .get(application_id)
            .ok_or(PlacementError::UnknownApplication(application_id))?;
        if application.student_id != student_id {
            return Err(PlacementError::NotOwner);
        }
        if application.status() != ApplicationStatus::Successful {
            return Err(PlacementError::NotSuccessful);
        }
        let internship_id = application.internship_id;

        let internship = self
            .internships
            .get_mut(internship_id)
            .ok_or(PlacementError::UnknownInternship(internship_id))?;
        internship.take_slot();

        let application = self
            .applications
            .get_mut(application_id)
            .ok_or(PlacementError::UnknownApplication(application_id))?;
        application.accept_placement();
        self.applications.withdraw_siblings(student_id, application_id);

        info!(application = %application_id, %student_id, internship = %internship_id, "placement accepted");
        Ok(())
    }

    pub fn request_withdrawal(
        &mut self,
        student_id: &str,
        application_id: ApplicationId,
        reason: String,
    ) -> Result<(), WithdrawalError> {
        let application = self
            .applications
            .get_mut(application_id)
            .ok_or(WithdrawalError::UnknownApplication(application_id))?;
        if application.student_id != student_id {
            return Err(WithdrawalError::NotOwner);
        }
        if application.is_withdrawal_pending() {
            return Err(WithdrawalError::AlreadyRequested);
        }
        if !application.can_request_withdrawal() {
            return Err(WithdrawalError::NotWithdrawable);
        }
        application.request_withdrawal(reason);
        info!(application = %application_id, %student_id, "withdrawal requested");
        Ok(())
    }

    pub fn applications_for_student(&self, student_id: &str) -> Vec<&Application> {
        self.applications.for_student(student_id)
    }

    /// Successful offers the student has not yet accepted.
    pub fn pending_offers(&self, student_id: &str) -> Vec<&Application> {
        self.applications.successful_unaccepted(student_id)
    }

    pub fn applications_for_internship(&self, internship_id: InternshipId) -> Vec<&Application> {
        self.applications.for_internship(internship_id)
    }

    pub fn withdrawable_applications(&self, student_id: &str) -> Vec<&Application> {
        self.applications.withdrawable(student_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::{Major, Student};
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 1).expect("valid date")
    }

    fn center_with_open_internship(total_slots: u32) -> (CareerCenter, InternshipId) {
        let mut center = CareerCenter::default();
        center.users_mut().add(UserAccount::CompanyRep(CompanyRep {
            user_id: "rep-acme".to_string(),
            password: "secret1".to_string(),
            name: "Dana Reyes".to_string(),
            company_name: "Acme Robotics".to_string(),
            department: "Talent".to_string(),
            position: "Recruiter".to_string(),
            email: "dana@acme.com".to_string(),
            approved: true,
        }));
        let id = center
            .create_internship(
                "rep-acme",
                InternshipDraft {
                    title: "Platform Intern".to_string(),
                    description: "Tooling work".to_string(),
                    level: InternshipLevel::Basic,
                    preferred_major: Major::Csc,
                    opening_date: NaiveDate::from_ymd_opt(2026, 1, 5).expect("valid date"),
                    closing_date: NaiveDate::from_ymd_opt(2026, 3, 31).expect("valid date"),
                    total_slots,
                },
            )
            .expect("posting");
        center.approve_internship(id).expect("pending internship");
        (center, id)
    }

    fn add_student(center: &mut CareerCenter, user_id: &str) {
        center.users_mut().add(UserAccount::Student(Student {
            user_id: user_id.to_string(),
            password: "secret1".to_string(),
            name: "Jordan Teo".to_string(),
            major: Major::Csc,
            year_of_study: 2,
        }));
    }

    #[test]
    fn apply_guards_reject_in_order() {
        let (mut center, internship_id) = center_with_open_internship(1);
        add_student(&mut center, "U1111111A");

        assert_eq!(
            center.apply("U0000000X", internship_id, today()).unwrap_err(),
            ApplyError::UnknownStudent("U0000000X".to_string())
        );

        center
            .apply("U1111111A", internship_id, today())
            .expect("first application");
        assert_eq!(
            center.apply("U1111111A", internship_id, today()).unwrap_err(),
            ApplyError::DuplicateApplication
        );
    }

    #[test]
    fn double_decision_on_application_is_refused() {
        let (mut center, internship_id) = center_with_open_internship(1);
        add_student(&mut center, "U1111111A");
        let application_id = center
            .apply("U1111111A", internship_id, today())
            .expect("application");

        center.approve_application(application_id).expect("pending");
        assert_eq!(
            center.reject_application(application_id).unwrap_err(),
            ReviewError::NotPending
        );
    }

    #[test]
    fn withdrawal_requires_pending_request() {
        let (mut center, internship_id) = center_with_open_internship(1);
        add_student(&mut center, "U1111111A");
        let application_id = center
            .apply("U1111111A", internship_id, today())
            .expect("application");

        assert_eq!(
            center.approve_withdrawal(application_id).unwrap_err(),
            WithdrawalError::NoPendingRequest
        );

        center
            .request_withdrawal("U1111111A", application_id, "clash".to_string())
            .expect("request");
        assert_eq!(
            center
                .request_withdrawal("U1111111A", application_id, "again".to_string())
                .unwrap_err(),
            WithdrawalError::AlreadyRequested
        );
    }

    #[test]
    fn staff_decisions_require_pending_status() {
        let (mut center, internship_id) = center_with_open_internship(1);
        assert_eq!(
            center.approve_internship(internship_id).unwrap_err(),
            ApprovalError::NotPending
        );
        assert_eq!(
            center.reject_internship(internship_id).unwrap_err(),
            ApprovalError::NotPending
        );
    }
}
