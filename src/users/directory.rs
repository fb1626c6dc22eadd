use super::domain::{CompanyRep, Staff, Student, UserAccount};

/// In-memory account store. Company reps awaiting staff approval sit in a
/// separate queue and are not part of the active listing until approved.
#[derive(Debug, Default)]
pub struct UserDirectory {
    users: Vec<UserAccount>,
    pending_reps: Vec<CompanyRep>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    #[error("no pending company representative '{0}'")]
    UnknownPendingRep(String),
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an account; the first write for a given id wins. Unapproved
    /// company reps land in the pending queue. Returns whether the account
    /// was stored.
    pub fn add(&mut self, account: UserAccount) -> bool {
        if self.contains(account.user_id()) {
            return false;
        }
        match account {
            UserAccount::CompanyRep(rep) if !rep.approved => self.pending_reps.push(rep),
            account => self.users.push(account),
        }
        true
    }

    pub fn contains(&self, user_id: &str) -> bool {
        self.find(user_id).is_some() || self.pending_rep(user_id).is_some()
    }

    /// Look up an active account. Pending reps are excluded; use
    /// [`UserDirectory::pending_rep`] for those.
    pub fn find(&self, user_id: &str) -> Option<&UserAccount> {
        self.users.iter().find(|user| user.user_id() == user_id)
    }

    pub fn find_mut(&mut self, user_id: &str) -> Option<&mut UserAccount> {
        self.users.iter_mut().find(|user| user.user_id() == user_id)
    }

    pub fn pending_rep(&self, user_id: &str) -> Option<&CompanyRep> {
        self.pending_reps.iter().find(|rep| rep.user_id == user_id)
    }

    pub fn student(&self, user_id: &str) -> Option<&Student> {
        match self.find(user_id) {
            Some(UserAccount::Student(student)) => Some(student),
            _ => None,
        }
    }

    pub fn company_rep(&self, user_id: &str) -> Option<&CompanyRep> {
        match self.find(user_id) {
            Some(UserAccount::CompanyRep(rep)) => Some(rep),
            _ => None,
        }
    }

    pub fn students(&self) -> Vec<&Student> {
        self.users
            .iter()
            .filter_map(|user| match user {
                UserAccount::Student(student) => Some(student),
                _ => None,
            })
            .collect()
    }

    pub fn company_reps(&self) -> Vec<&CompanyRep> {
        self.users
            .iter()
            .filter_map(|user| match user {
                UserAccount::CompanyRep(rep) => Some(rep),
                _ => None,
            })
            .collect()
    }

    pub fn staff(&self) -> Vec<&Staff> {
        self.users
            .iter()
            .filter_map(|user| match user {
                UserAccount::Staff(staff) => Some(staff),
                _ => None,
            })
            .collect()
    }

    pub fn pending_reps(&self) -> &[CompanyRep] {
        &self.pending_reps
    }

    /// Staff decision: move a pending rep into the active listing.
    pub fn approve_rep(&mut self, user_id: &str) -> Result<(), DirectoryError> {
        let index = self
            .pending_reps
            .iter()
            .position(|rep| rep.user_id == user_id)
            .ok_or_else(|| DirectoryError::UnknownPendingRep(user_id.to_string()))?;
        let mut rep = self.pending_reps.remove(index);
        rep.approved = true;
        self.users.push(UserAccount::CompanyRep(rep));
        Ok(())
    }

    /// Staff decision: drop a pending rep entirely.
    pub fn reject_rep(&mut self, user_id: &str) -> Result<CompanyRep, DirectoryError> {
        let index = self
            .pending_reps
            .iter()
            .position(|rep| rep.user_id == user_id)
            .ok_or_else(|| DirectoryError::UnknownPendingRep(user_id.to_string()))?;
        Ok(self.pending_reps.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::domain::Major;

    fn student(id: &str) -> UserAccount {
        UserAccount::Student(Student {
            user_id: id.to_string(),
            password: "secret1".to_string(),
            name: "Sam Lim".to_string(),
            major: Major::Eee,
            year_of_study: 2,
        })
    }

    fn unapproved_rep(id: &str) -> UserAccount {
        UserAccount::CompanyRep(CompanyRep {
            user_id: id.to_string(),
            password: "secret1".to_string(),
            name: "Dana Reyes".to_string(),
            company_name: "Acme Robotics".to_string(),
            department: "Talent".to_string(),
            position: "Recruiter".to_string(),
            email: "dana@acme.com".to_string(),
            approved: false,
        })
    }

    #[test]
    fn first_write_wins_on_duplicate_ids() {
        let mut directory = UserDirectory::new();
        assert!(directory.add(student("U1111111A")));
        assert!(!directory.add(student("U1111111A")));
        assert_eq!(directory.students().len(), 1);
    }

    #[test]
    fn unapproved_reps_queue_until_decided() {
        let mut directory = UserDirectory::new();
        directory.add(unapproved_rep("rep-acme"));

        assert!(directory.find("rep-acme").is_none());
        assert!(directory.pending_rep("rep-acme").is_some());

        directory.approve_rep("rep-acme").expect("pending rep");
        let rep = directory.company_rep("rep-acme").expect("active rep");
        assert!(rep.approved);
        assert!(directory.pending_reps().is_empty());
    }

    #[test]
    fn rejected_reps_are_dropped() {
        let mut directory = UserDirectory::new();
        directory.add(unapproved_rep("rep-acme"));
        directory.reject_rep("rep-acme").expect("pending rep");

        assert!(!directory.contains("rep-acme"));
        assert_eq!(
            directory.approve_rep("rep-acme"),
            Err(DirectoryError::UnknownPendingRep("rep-acme".to_string()))
        );
    }
}
