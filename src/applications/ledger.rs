use super::domain::{Application, ApplicationId, ApplicationStatus};
use crate::internships::InternshipId;
use crate::sequence::IdSequence;

/// In-memory application store; every query is a linear scan. Business-rule
/// checks live in the career-center facade, which owns the cross-store
/// orchestration.
#[derive(Debug, Default)]
pub struct ApplicationLedger {
    applications: Vec<Application>,
    sequence: IdSequence,
}

impl ApplicationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new `Pending` application and return its id.
    pub(crate) fn submit(&mut self, student_id: &str, internship_id: InternshipId) -> ApplicationId {
        let id = ApplicationId(self.sequence.next());
        self.applications
            .push(Application::new(id, student_id.to_string(), internship_id));
        id
    }

    pub fn get(&self, id: ApplicationId) -> Option<&Application> {
        self.applications.iter().find(|app| app.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: ApplicationId) -> Option<&mut Application> {
        self.applications.iter_mut().find(|app| app.id == id)
    }

    pub fn all(&self) -> &[Application] {
        &self.applications
    }

    pub fn for_student(&self, student_id: &str) -> Vec<&Application> {
        self.applications
            .iter()
            .filter(|app| app.student_id == student_id)
            .collect()
    }

    pub fn for_internship(&self, internship_id: InternshipId) -> Vec<&Application> {
        self.applications
            .iter()
            .filter(|app| app.internship_id == internship_id)
            .collect()
    }

    /// Concurrently `Pending` applications count toward the student's cap;
    /// Successful/Unsuccessful/Withdrawn do not.
    pub fn pending_count(&self, student_id: &str) -> usize {
        self.applications
            .iter()
            .filter(|app| {
                app.student_id == student_id && app.status() == ApplicationStatus::Pending
            })
            .count()
    }

    pub fn has_applied(&self, student_id: &str, internship_id: InternshipId) -> bool {
        self.applications
            .iter()
            .any(|app| app.student_id == student_id && app.internship_id == internship_id)
    }

    pub fn has_accepted_placement(&self, student_id: &str) -> bool {
        self.applications
            .iter()
            .any(|app| app.student_id == student_id && app.placement_accepted())
    }

    /// Offers the student may still accept.
    pub fn successful_unaccepted(&self, student_id: &str) -> Vec<&Application> {
        self.applications
            .iter()
            .filter(|app| {
                app.student_id == student_id
                    && app.status() == ApplicationStatus::Successful
                    && !app.placement_accepted()
            })
            .collect()
    }

    /// Applications the student could file a withdrawal request for: live or
    /// accepted, with no request currently pending.
    pub fn withdrawable(&self, student_id: &str) -> Vec<&Application> {
        self.applications
            .iter()
            .filter(|app| {
                app.student_id == student_id
                    && app.can_request_withdrawal()
                    && !app.is_withdrawal_pending()
            })
            .collect()
    }

    /// Withdrawal requests awaiting a staff decision.
    pub fn pending_withdrawals(&self) -> Vec<&Application> {
        self.applications
            .iter()
            .filter(|app| app.is_withdrawal_pending())
            .collect()
    }

    /// Transition the student's other live applications to `Withdrawn` after
    /// a placement is accepted.
    pub(crate) fn withdraw_siblings(&mut self, student_id: &str, accepted: ApplicationId) {
        for app in &mut self.applications {
            if app.student_id == student_id
                && app.id != accepted
                && matches!(
                    app.status(),
                    ApplicationStatus::Pending | ApplicationStatus::Successful
                )
            {
                app.set_status(ApplicationStatus::Withdrawn);
            }
        }
    }

    /// Cascading removal when a posting is deleted. Returns how many
    /// applications were dropped.
    pub(crate) fn remove_for_internship(&mut self, internship_id: InternshipId) -> usize {
        let before = self.applications.len();
        self.applications
            .retain(|app| app.internship_id != internship_id);
        before - self.applications.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_count_ignores_resolved_applications() {
        let mut ledger = ApplicationLedger::new();
        let first = ledger.submit("U1111111A", InternshipId(1));
        ledger.submit("U1111111A", InternshipId(2));
        ledger.submit("U2222222B", InternshipId(1));

        assert_eq!(ledger.pending_count("U1111111A"), 2);

        ledger
            .get_mut(first)
            .expect("submitted")
            .set_status(ApplicationStatus::Successful);
        assert_eq!(ledger.pending_count("U1111111A"), 1);
    }

    #[test]
    fn withdraw_siblings_spares_the_accepted_and_terminal_ones() {
        let mut ledger = ApplicationLedger::new();
        let accepted = ledger.submit("U1111111A", InternshipId(1));
        let pending = ledger.submit("U1111111A", InternshipId(2));
        let unsuccessful = ledger.submit("U1111111A", InternshipId(3));
        let other_student = ledger.submit("U2222222B", InternshipId(1));

        ledger
            .get_mut(accepted)
            .expect("submitted")
            .set_status(ApplicationStatus::Successful);
        ledger
            .get_mut(unsuccessful)
            .expect("submitted")
            .set_status(ApplicationStatus::Unsuccessful);

        ledger.withdraw_siblings("U1111111A", accepted);

        assert_eq!(
            ledger.get(accepted).expect("kept").status(),
            ApplicationStatus::Successful
        );
        assert_eq!(
            ledger.get(pending).expect("kept").status(),
            ApplicationStatus::Withdrawn
        );
        assert_eq!(
            ledger.get(unsuccessful).expect("kept").status(),
            ApplicationStatus::Unsuccessful
        );
        assert_eq!(
            ledger.get(other_student).expect("kept").status(),
            ApplicationStatus::Pending
        );
    }

    #[test]
    fn remove_for_internship_cascades() {
        let mut ledger = ApplicationLedger::new();
        ledger.submit("U1111111A", InternshipId(1));
        ledger.submit("U2222222B", InternshipId(1));
        let kept = ledger.submit("U1111111A", InternshipId(2));

        assert_eq!(ledger.remove_for_internship(InternshipId(1)), 2);
        assert_eq!(ledger.all().len(), 1);
        assert!(ledger.get(kept).is_some());
    }

    #[test]
    fn withdrawable_excludes_pending_requests() {
        let mut ledger = ApplicationLedger::new();
        let id = ledger.submit("U1111111A", InternshipId(1));
        assert_eq!(ledger.withdrawable("U1111111A").len(), 1);

        ledger
            .get_mut(id)
            .expect("submitted")
            .request_withdrawal("reason".to_string());
        assert!(ledger.withdrawable("U1111111A").is_empty());
        assert_eq!(ledger.pending_withdrawals().len(), 1);
    }
}
