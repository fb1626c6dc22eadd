use serde::{Deserialize, Serialize};

/// Program-wide caps and bounds applied by the stores and the service facade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramRules {
    /// Concurrent `Pending` applications a student may hold.
    pub max_pending_applications: usize,
    /// Internship postings a single company representative may list.
    pub max_postings_per_rep: usize,
    /// Slots a single posting may offer.
    pub max_slots_per_posting: u32,
    pub min_password_length: usize,
    pub max_title_length: usize,
    pub max_description_length: usize,
    pub max_field_length: usize,
}

impl Default for ProgramRules {
    fn default() -> Self {
        Self {
            max_pending_applications: 3,
            max_postings_per_rep: 5,
            max_slots_per_posting: 10,
            min_password_length: 6,
            max_title_length: 200,
            max_description_length: 1000,
            max_field_length: 100,
        }
    }
}
