use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{Internship, InternshipLevel, InternshipStatus};
use crate::users::Major;

/// Optional report criteria; active criteria are ANDed together. Company
/// names compare case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternshipFilter {
    pub status: Option<InternshipStatus>,
    pub major: Option<Major>,
    pub level: Option<InternshipLevel>,
    pub company: Option<String>,
    pub closing_date: Option<NaiveDate>,
}

impl InternshipFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn has_active_criteria(&self) -> bool {
        self.status.is_some()
            || self.major.is_some()
            || self.level.is_some()
            || self.company.is_some()
            || self.closing_date.is_some()
    }

    pub fn matches(&self, internship: &Internship) -> bool {
        if let Some(status) = self.status {
            if internship.status() != status {
                return false;
            }
        }
        if let Some(major) = self.major {
            if internship.preferred_major != major {
                return false;
            }
        }
        if let Some(level) = self.level {
            if internship.level != level {
                return false;
            }
        }
        if let Some(company) = &self.company {
            if !internship.company_name.eq_ignore_ascii_case(company) {
                return false;
            }
        }
        if let Some(closing_date) = self.closing_date {
            if internship.closing_date != closing_date {
                return false;
            }
        }
        true
    }
}

impl fmt::Display for InternshipFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.has_active_criteria() {
            return Ok(());
        }
        write!(f, "Active Filters:")?;
        if let Some(status) = self.status {
            write!(f, " Status={status}")?;
        }
        if let Some(major) = self.major {
            write!(f, " Major={major}")?;
        }
        if let Some(level) = self.level {
            write!(f, " Level={level}")?;
        }
        if let Some(company) = &self.company {
            write!(f, " Company={company}")?;
        }
        if let Some(closing_date) = self.closing_date {
            write!(f, " ClosingDate={closing_date}")?;
        }
        Ok(())
    }
}
