use chrono::NaiveDate;

use super::domain::{Internship, InternshipDraft, InternshipId, InternshipStatus};
use super::filter::InternshipFilter;
use crate::rules::ProgramRules;
use crate::sequence::IdSequence;
use crate::users::{CompanyRep, Student};
use crate::validation;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PostingError {
    #[error("no internship with id {0}")]
    NotFound(InternshipId),
    #[error("unknown company representative '{0}'")]
    UnknownRep(String),
    #[error("a company can list at most {max} internship postings")]
    PostingCapReached { max: usize },
    #[error("at most {max} slots are allowed per internship")]
    SlotCapExceeded { max: u32 },
    #[error("closing date {closing} must be after opening date {opening}")]
    ClosingBeforeOpening {
        opening: NaiveDate,
        closing: NaiveDate,
    },
    #[error("internship {0} can no longer be edited")]
    NotEditable(InternshipId),
    #[error("internship {0} can no longer be deleted")]
    NotDeletable(InternshipId),
}

/// In-memory posting store; every query is a linear scan.
#[derive(Debug, Default)]
pub struct InternshipBoard {
    internships: Vec<Internship>,
    sequence: IdSequence,
}

impl InternshipBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Post a new internship for a rep, enforcing the per-company posting cap
    /// and the per-posting slot cap. Returns the assigned id.
    pub fn post(
        &mut self,
        rep: &CompanyRep,
        draft: InternshipDraft,
        rules: &ProgramRules,
    ) -> Result<InternshipId, PostingError> {
        if self.count_for_rep(&rep.user_id) >= rules.max_postings_per_rep {
            return Err(PostingError::PostingCapReached {
                max: rules.max_postings_per_rep,
            });
        }
        if draft.total_slots > rules.max_slots_per_posting {
            return Err(PostingError::SlotCapExceeded {
                max: rules.max_slots_per_posting,
            });
        }
        if !validation::closing_after_opening(draft.opening_date, draft.closing_date) {
            return Err(PostingError::ClosingBeforeOpening {
                opening: draft.opening_date,
                closing: draft.closing_date,
            });
        }

        let id = InternshipId(self.sequence.next());
        let internship =
            Internship::new(id, draft, rep.company_name.clone(), rep.user_id.clone());
        self.internships.push(internship);
        Ok(id)
    }

    pub fn get(&self, id: InternshipId) -> Option<&Internship> {
        self.internships.iter().find(|i| i.id == id)
    }

    pub fn get_mut(&mut self, id: InternshipId) -> Option<&mut Internship> {
        self.internships.iter_mut().find(|i| i.id == id)
    }

    pub fn all(&self) -> &[Internship] {
        &self.internships
    }

    /// Postings the given student may browse and apply to: open for
    /// applications, matching their major, and within their level
    /// eligibility. Sorted by title.
    pub fn for_student(&self, student: &Student, today: NaiveDate) -> Vec<&Internship> {
        let mut result: Vec<&Internship> = self
            .internships
            .iter()
            .filter(|i| {
                i.is_open_for_applications(today)
                    && i.preferred_major == student.major
                    && student.can_apply_for_level(i.level)
            })
            .collect();
        result.sort_by(|a, b| a.title.cmp(&b.title));
        result
    }

    pub fn for_rep(&self, rep_id: &str) -> Vec<&Internship> {
        self.internships
            .iter()
            .filter(|i| i.rep_id == rep_id)
            .collect()
    }

    pub fn count_for_rep(&self, rep_id: &str) -> usize {
        self.internships.iter().filter(|i| i.rep_id == rep_id).count()
    }

    /// Postings awaiting a staff decision.
    pub fn pending(&self) -> Vec<&Internship> {
        self.internships
            .iter()
            .filter(|i| i.status() == InternshipStatus::Pending)
            .collect()
    }

    /// Staff report: every posting matching the filter, sorted by title.
    pub fn report(&self, filter: &InternshipFilter) -> Vec<&Internship> {
        let mut result: Vec<&Internship> = self
            .internships
            .iter()
            .filter(|i| filter.matches(i))
            .collect();
        result.sort_by(|a, b| a.title.cmp(&b.title));
        result
    }

    /// Remove a posting that has not been approved. Approved (or filled)
    /// postings are never deleted.
    pub fn delete(&mut self, id: InternshipId) -> Result<Internship, PostingError> {
        let index = self
            .internships
            .iter()
            .position(|i| i.id == id)
            .ok_or(PostingError::NotFound(id))?;
        if !self.internships[index].is_deletable() {
            return Err(PostingError::NotDeletable(id));
        }
        Ok(self.internships.remove(index))
    }
}
