//! Integration coverage for the CSV roster import: happy path, malformed-row
//! skipping, and degraded behavior on unreadable files.

use std::io::Cursor;

use internship_hub::roster::{RosterImportError, RosterLoader, RosterSummary};
use internship_hub::users::{Major, UserDirectory};

#[test]
fn student_roster_round_trips_into_the_directory() {
    let csv = "id,password,name,major,year\n\
U2345123F,password1,Jordan Teo,CSC,2\n\
U7654321K,password2,Sam Lim,eee,4\n\
U1111111A,password3,Priya Nair,MAE,1\n";
    let mut directory = UserDirectory::new();
    let summary =
        RosterLoader::load_students(Cursor::new(csv), &mut directory).expect("load succeeds");

    assert_eq!(summary, RosterSummary { loaded: 3, skipped: 0 });

    let sam = directory.student("U7654321K").expect("loaded");
    assert_eq!(sam.name, "Sam Lim");
    assert_eq!(sam.major, Major::Eee);
    assert_eq!(sam.year_of_study, 4);
}

#[test]
fn malformed_rows_are_skipped_and_the_load_continues() {
    let csv = "id,password,name,major,year\n\
U2345123F,password1,Jordan Teo,CSC,2\n\
U123,short,row\n\
U7654321K,password2,Sam Lim,EEE,four\n\
U1111111A,password3,Priya Nair,MAE,1\n";
    let mut directory = UserDirectory::new();
    let summary =
        RosterLoader::load_students(Cursor::new(csv), &mut directory).expect("load succeeds");

    assert_eq!(summary, RosterSummary { loaded: 2, skipped: 2 });
    assert!(directory.student("U2345123F").is_some());
    assert!(directory.student("U7654321K").is_none());
    assert!(directory.student("U1111111A").is_some());
}

#[test]
fn staff_roster_uses_its_own_column_order() {
    let csv = "id,password,email,name,department\n\
staff01,password1,admin@career.edu,Alex Chen,Career Center\n";
    let mut directory = UserDirectory::new();
    let summary =
        RosterLoader::load_staff(Cursor::new(csv), &mut directory).expect("load succeeds");

    assert_eq!(summary, RosterSummary { loaded: 1, skipped: 0 });
    let staff = directory.staff();
    assert_eq!(staff.len(), 1);
    assert_eq!(staff[0].email, "admin@career.edu");
    assert_eq!(staff[0].department, "Career Center");
}

#[test]
fn both_rosters_share_one_directory_without_id_collisions() {
    let students = "id,password,name,major,year\nU2345123F,password1,Jordan Teo,CSC,2\n";
    let staff = "id,password,email,name,department\n\
U2345123F,password1,jordan@career.edu,Imposter,Career Center\n\
staff01,password1,admin@career.edu,Alex Chen,Career Center\n";

    let mut directory = UserDirectory::new();
    RosterLoader::load_students(Cursor::new(students), &mut directory).expect("load succeeds");
    let summary =
        RosterLoader::load_staff(Cursor::new(staff), &mut directory).expect("load succeeds");

    // The duplicate id is skipped; the student entry wins.
    assert_eq!(summary, RosterSummary { loaded: 1, skipped: 1 });
    assert!(directory.student("U2345123F").is_some());
    assert_eq!(directory.staff().len(), 1);
}

#[test]
fn missing_roster_file_reports_io_error() {
    let mut directory = UserDirectory::new();
    let error = RosterLoader::load_staff_path("./no-such-roster.csv", &mut directory)
        .expect_err("expected io error");
    assert!(matches!(error, RosterImportError::Io(_)));
    assert!(directory.staff().is_empty());
}
