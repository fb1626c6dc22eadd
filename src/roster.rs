//! CSV roster import for students and staff.
//!
//! Malformed rows are skipped with a warning rather than failing the load; a
//! missing or unreadable file surfaces as an error the caller may degrade to
//! "zero users loaded".

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::users::{Major, Staff, Student, UserAccount, UserDirectory};
use crate::validation;

#[derive(Debug, thiserror::Error)]
pub enum RosterImportError {
    #[error("failed to read roster file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid roster CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Outcome of one roster load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RosterSummary {
    pub loaded: usize,
    pub skipped: usize,
}

#[derive(Debug, Deserialize)]
struct StudentRow {
    id: String,
    password: String,
    name: String,
    major: String,
    year: String,
}

#[derive(Debug, Deserialize)]
struct StaffRow {
    id: String,
    password: String,
    email: String,
    name: String,
    department: String,
}

pub struct RosterLoader;

impl RosterLoader {
    pub fn load_students_path<P: AsRef<Path>>(
        path: P,
        directory: &mut UserDirectory,
    ) -> Result<RosterSummary, RosterImportError> {
        let file = std::fs::File::open(path)?;
        Self::load_students(file, directory)
    }

    /// Read `id,password,name,major,year` rows after a header line.
    pub fn load_students<R: Read>(
        reader: R,
        directory: &mut UserDirectory,
    ) -> Result<RosterSummary, RosterImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut summary = RosterSummary::default();
        for (row, record) in csv_reader.deserialize::<StudentRow>().enumerate() {
            let line = row + 2; // header occupies line 1
            let row = match record {
                Ok(row) => row,
                // A failed read is fatal; a row that merely fails to parse
                // is skipped.
                Err(err) if err.is_io_error() => return Err(err.into()),
                Err(err) => {
                    warn!(line, %err, "skipping malformed student row");
                    summary.skipped += 1;
                    continue;
                }
            };

            if !validation::is_valid_student_id(&row.id) {
                warn!(line, id = %row.id, "skipping student row: id must match U#######L");
                summary.skipped += 1;
                continue;
            }
            let major: Major = match row.major.parse() {
                Ok(major) => major,
                Err(err) => {
                    warn!(line, id = %row.id, %err, "skipping student row");
                    summary.skipped += 1;
                    continue;
                }
            };
            let year: u8 = match row.year.parse() {
                Ok(year @ 1..=4) => year,
                _ => {
                    warn!(line, id = %row.id, year = %row.year, "skipping student row: year must be 1-4");
                    summary.skipped += 1;
                    continue;
                }
            };

            let added = directory.add(UserAccount::Student(Student {
                user_id: row.id.clone(),
                password: row.password,
                name: row.name,
                major,
                year_of_study: year,
            }));
            if added {
                summary.loaded += 1;
            } else {
                warn!(line, id = %row.id, "skipping duplicate student id");
                summary.skipped += 1;
            }
        }

        Ok(summary)
    }

    pub fn load_staff_path<P: AsRef<Path>>(
        path: P,
        directory: &mut UserDirectory,
    ) -> Result<RosterSummary, RosterImportError> {
        let file = std::fs::File::open(path)?;
        Self::load_staff(file, directory)
    }

    /// Read `id,password,email,name,department` rows after a header line.
    pub fn load_staff<R: Read>(
        reader: R,
        directory: &mut UserDirectory,
    ) -> Result<RosterSummary, RosterImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut summary = RosterSummary::default();
        for (row, record) in csv_reader.deserialize::<StaffRow>().enumerate() {
            let line = row + 2;
            let row = match record {
                Ok(row) => row,
                Err(err) if err.is_io_error() => return Err(err.into()),
                Err(err) => {
                    warn!(line, %err, "skipping malformed staff row");
                    summary.skipped += 1;
                    continue;
                }
            };

            if !validation::is_valid_email(&row.email) {
                warn!(line, id = %row.id, email = %row.email, "skipping staff row: invalid email");
                summary.skipped += 1;
                continue;
            }

            let added = directory.add(UserAccount::Staff(Staff {
                user_id: row.id.clone(),
                password: row.password,
                name: row.name,
                email: row.email,
                department: row.department,
            }));
            if added {
                summary.loaded += 1;
            } else {
                warn!(line, id = %row.id, "skipping duplicate staff id");
                summary.skipped += 1;
            }
        }

        Ok(summary)
    }
}
