use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::internships::InternshipLevel;

/// Majors recognized by the placement program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Major {
    Csc,
    Eee,
    Mae,
}

impl Major {
    pub const fn label(self) -> &'static str {
        match self {
            Major::Csc => "CSC",
            Major::Eee => "EEE",
            Major::Mae => "MAE",
        }
    }
}

impl fmt::Display for Major {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown major '{0}', expected CSC, EEE, or MAE")]
pub struct ParseMajorError(pub String);

impl FromStr for Major {
    type Err = ParseMajorError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "CSC" => Ok(Major::Csc),
            "EEE" => Ok(Major::Eee),
            "MAE" => Ok(Major::Mae),
            _ => Err(ParseMajorError(value.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub user_id: String,
    pub password: String,
    pub name: String,
    pub major: Major,
    pub year_of_study: u8,
}

impl Student {
    /// Years 1-2 are restricted to Basic-level internships; years 3-4 may
    /// apply at any level.
    pub fn can_apply_for_level(&self, level: InternshipLevel) -> bool {
        if self.year_of_study <= 2 {
            level == InternshipLevel::Basic
        } else {
            true
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRep {
    pub user_id: String,
    pub password: String,
    pub name: String,
    pub company_name: String,
    pub department: String,
    pub position: String,
    pub email: String,
    pub approved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    pub user_id: String,
    pub password: String,
    pub name: String,
    pub email: String,
    pub department: String,
}

/// One account in the system, tagged by role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserAccount {
    Student(Student),
    CompanyRep(CompanyRep),
    Staff(Staff),
}

impl UserAccount {
    pub fn user_id(&self) -> &str {
        match self {
            UserAccount::Student(student) => &student.user_id,
            UserAccount::CompanyRep(rep) => &rep.user_id,
            UserAccount::Staff(staff) => &staff.user_id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            UserAccount::Student(student) => &student.name,
            UserAccount::CompanyRep(rep) => &rep.name,
            UserAccount::Staff(staff) => &staff.name,
        }
    }

    // Stored and compared in plain text.
    pub fn password(&self) -> &str {
        match self {
            UserAccount::Student(student) => &student.password,
            UserAccount::CompanyRep(rep) => &rep.password,
            UserAccount::Staff(staff) => &staff.password,
        }
    }

    pub(crate) fn set_password(&mut self, password: String) {
        match self {
            UserAccount::Student(student) => student.password = password,
            UserAccount::CompanyRep(rep) => rep.password = password,
            UserAccount::Staff(staff) => staff.password = password,
        }
    }

    pub const fn role(&self) -> UserRole {
        match self {
            UserAccount::Student(_) => UserRole::Student,
            UserAccount::CompanyRep(_) => UserRole::CompanyRep,
            UserAccount::Staff(_) => UserRole::Staff,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Student,
    CompanyRep,
    Staff,
}

impl UserRole {
    pub const fn label(self) -> &'static str {
        match self {
            UserRole::Student => "STUDENT",
            UserRole::CompanyRep => "COMPANY_REP",
            UserRole::Staff => "STAFF",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(year: u8) -> Student {
        Student {
            user_id: "U2345123F".to_string(),
            password: "secret1".to_string(),
            name: "Jordan Teo".to_string(),
            major: Major::Csc,
            year_of_study: year,
        }
    }

    #[test]
    fn junior_years_are_limited_to_basic() {
        let first_year = student(1);
        assert!(first_year.can_apply_for_level(InternshipLevel::Basic));
        assert!(!first_year.can_apply_for_level(InternshipLevel::Intermediate));
        assert!(!first_year.can_apply_for_level(InternshipLevel::Advanced));

        let second_year = student(2);
        assert!(!second_year.can_apply_for_level(InternshipLevel::Advanced));
    }

    #[test]
    fn senior_years_are_unrestricted() {
        let third_year = student(3);
        assert!(third_year.can_apply_for_level(InternshipLevel::Basic));
        assert!(third_year.can_apply_for_level(InternshipLevel::Advanced));
    }

    #[test]
    fn major_parses_case_insensitively() {
        assert_eq!("csc".parse::<Major>(), Ok(Major::Csc));
        assert_eq!(" EEE ".parse::<Major>(), Ok(Major::Eee));
        assert!("ART".parse::<Major>().is_err());
    }
}
