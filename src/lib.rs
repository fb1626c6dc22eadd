//! Internship placement hub: postings, applications, and approval workflows
//! for students, company representatives, and career-center staff.
//!
//! All state lives in in-memory stores ([`users::UserDirectory`],
//! [`internships::InternshipBoard`], [`applications::ApplicationLedger`])
//! composed behind the [`center::CareerCenter`] facade. Rosters are imported
//! from flat CSV files at startup via [`roster`].

pub mod applications;
pub mod center;
pub mod config;
pub mod error;
pub mod internships;
pub mod roster;
pub mod rules;
pub mod telemetry;
pub mod users;
pub mod validation;

mod sequence;
