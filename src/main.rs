use std::path::PathBuf;

use chrono::{Duration, Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use tracing::{error, info};

use internship_hub::center::CareerCenter;
use internship_hub::config::AppConfig;
use internship_hub::error::AppError;
use internship_hub::internships::{
    Internship, InternshipDraft, InternshipFilter, InternshipLevel, InternshipStatus,
};
use internship_hub::roster::RosterLoader;
use internship_hub::telemetry;
use internship_hub::users::{Major, RepRegistration, Student, UserAccount, UserDirectory};

#[derive(Parser, Debug)]
#[command(
    name = "Internship Hub",
    about = "Manage internship postings, student applications, and career-center approvals",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load and validate the student and staff rosters
    Roster(RosterArgs),
    /// Print a filtered internship report over seeded demo data
    Report(ReportArgs),
    /// Walk a seeded placement lifecycle end to end (default command)
    Demo,
}

#[derive(Args, Debug, Default)]
struct RosterArgs {
    /// Override the configured students roster path
    #[arg(long)]
    students: Option<PathBuf>,
    /// Override the configured staff roster path
    #[arg(long)]
    staff: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ReportArgs {
    /// Filter by posting status (Pending, Approved, Rejected, Filled)
    #[arg(long)]
    status: Option<InternshipStatus>,
    /// Filter by preferred major (CSC, EEE, MAE)
    #[arg(long)]
    major: Option<Major>,
    /// Filter by level (Basic, Intermediate, Advanced)
    #[arg(long)]
    level: Option<InternshipLevel>,
    /// Filter by company name (case-insensitive)
    #[arg(long)]
    company: Option<String>,
    /// Filter by exact closing date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    closing_date: Option<NaiveDate>,
    /// Emit the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load();
    telemetry::init(&config.telemetry)?;
    info!(environment = ?config.environment, "internship hub starting");

    match cli.command.unwrap_or(Command::Demo) {
        Command::Roster(args) => run_roster(args, &config),
        Command::Report(args) => run_report(args),
        Command::Demo => run_demo(),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Load both rosters. A missing or unreadable file degrades to zero users
/// from that roster instead of aborting.
fn run_roster(args: RosterArgs, config: &AppConfig) -> Result<(), AppError> {
    let students_path = args
        .students
        .unwrap_or_else(|| config.roster.students_path.clone());
    let staff_path = args.staff.unwrap_or_else(|| config.roster.staff_path.clone());

    let mut directory = UserDirectory::new();

    match RosterLoader::load_students_path(&students_path, &mut directory) {
        Ok(summary) => println!(
            "Loaded {} students from {} ({} rows skipped)",
            summary.loaded,
            students_path.display(),
            summary.skipped
        ),
        Err(err) => {
            error!(%err, path = %students_path.display(), "student roster unavailable");
            println!("Student roster unavailable, 0 students loaded");
        }
    }

    match RosterLoader::load_staff_path(&staff_path, &mut directory) {
        Ok(summary) => println!(
            "Loaded {} staff from {} ({} rows skipped)",
            summary.loaded,
            staff_path.display(),
            summary.skipped
        ),
        Err(err) => {
            error!(%err, path = %staff_path.display(), "staff roster unavailable");
            println!("Staff roster unavailable, 0 staff loaded");
        }
    }

    println!(
        "Directory now holds {} students and {} staff",
        directory.students().len(),
        directory.staff().len()
    );
    Ok(())
}

fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let center = seeded_center()?;
    let filter = InternshipFilter {
        status: args.status,
        major: args.major,
        level: args.level,
        company: args.company,
        closing_date: args.closing_date,
    };

    let postings = center.report(&filter);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&postings)?);
        return Ok(());
    }

    if filter.has_active_criteria() {
        println!("{filter}");
    }
    if postings.is_empty() {
        println!("No internships match the filter");
        return Ok(());
    }
    for posting in postings {
        print_posting(posting);
    }
    Ok(())
}

fn print_posting(posting: &Internship) {
    println!(
        "- #{} {} | {} | {} | {} | closes {} | {} | {}/{} slots open{}",
        posting.id,
        posting.title,
        posting.company_name,
        posting.level,
        posting.preferred_major,
        posting.closing_date,
        posting.status(),
        posting.available_slots(),
        posting.total_slots,
        if posting.is_visible() { "" } else { " | hidden" }
    );
}

/// A small career center used by `report` and `demo`: one approved company,
/// three students, and postings in assorted lifecycle states.
fn seeded_center() -> Result<CareerCenter, AppError> {
    let today = Local::now().date_naive();
    let mut center = CareerCenter::default();

    for (user_id, name, major, year) in [
        ("U2345123F", "Jordan Teo", Major::Csc, 2),
        ("U7654321K", "Sam Lim", Major::Csc, 3),
        ("U1111111A", "Priya Nair", Major::Eee, 1),
    ] {
        center.users_mut().add(UserAccount::Student(Student {
            user_id: user_id.to_string(),
            password: "password".to_string(),
            name: name.to_string(),
            major,
            year_of_study: year,
        }));
    }

    center
        .register_company_rep(RepRegistration {
            user_id: "rep-acme".to_string(),
            password: "password".to_string(),
            name: "Dana Reyes".to_string(),
            company_name: "Acme Robotics".to_string(),
            department: "Talent".to_string(),
            position: "Recruiter".to_string(),
            email: "dana@acme.com".to_string(),
        })
        .map_err(AppError::workflow)?;
    center
        .approve_company_rep("rep-acme")
        .map_err(AppError::workflow)?;

    let robotics = center
        .create_internship(
            "rep-acme",
            InternshipDraft {
                title: "Robotics Software Intern".to_string(),
                description: "Motion planning and simulation tooling".to_string(),
                level: InternshipLevel::Basic,
                preferred_major: Major::Csc,
                opening_date: today,
                closing_date: today + Duration::days(60),
                total_slots: 2,
            },
        )
        .map_err(AppError::workflow)?;
    let autonomy = center
        .create_internship(
            "rep-acme",
            InternshipDraft {
                title: "Autonomy Research Intern".to_string(),
                description: "Perception research prototypes".to_string(),
                level: InternshipLevel::Advanced,
                preferred_major: Major::Csc,
                opening_date: today,
                closing_date: today + Duration::days(45),
                total_slots: 1,
            },
        )
        .map_err(AppError::workflow)?;
    // Left pending so staff queues and report filters have something to show.
    center
        .create_internship(
            "rep-acme",
            InternshipDraft {
                title: "Power Systems Intern".to_string(),
                description: "Battery test-bench support".to_string(),
                level: InternshipLevel::Intermediate,
                preferred_major: Major::Eee,
                opening_date: today,
                closing_date: today + Duration::days(30),
                total_slots: 3,
            },
        )
        .map_err(AppError::workflow)?;

    center.approve_internship(robotics).map_err(AppError::workflow)?;
    center.approve_internship(autonomy).map_err(AppError::workflow)?;

    Ok(center)
}

fn run_demo() -> Result<(), AppError> {
    let today = Local::now().date_naive();
    let mut center = seeded_center()?;
    info!("seeded demo career center");

    println!("Internship placement walkthrough (evaluated {today})\n");

    let account = center
        .login("U2345123F", "password")
        .map_err(AppError::workflow)?;
    println!("Logged in {} ({})\n", account.name(), account.role());

    println!("Postings after staff review:");
    for posting in center.internships().all() {
        print_posting(posting);
    }

    let robotics = center
        .internships()
        .all()
        .iter()
        .find(|posting| posting.title == "Robotics Software Intern")
        .map(|posting| posting.id)
        .ok_or_else(|| AppError::Workflow("seeded posting missing".into()))?;
    let autonomy = center
        .internships()
        .all()
        .iter()
        .find(|posting| posting.title == "Autonomy Research Intern")
        .map(|posting| posting.id)
        .ok_or_else(|| AppError::Workflow("seeded posting missing".into()))?;

    println!("\nEligibility gate:");
    match center.apply("U2345123F", autonomy, today) {
        Ok(_) => println!("- unexpected: year-2 student admitted to an advanced posting"),
        Err(err) => println!("- year-2 student applying to the advanced posting: {err}"),
    }

    println!("\nApplications:");
    let first = center
        .apply("U2345123F", robotics, today)
        .map_err(AppError::workflow)?;
    let second = center
        .apply("U7654321K", robotics, today)
        .map_err(AppError::workflow)?;
    println!("- Jordan Teo and Sam Lim applied to the robotics posting");

    center.approve_application(first).map_err(AppError::workflow)?;
    center.approve_application(second).map_err(AppError::workflow)?;
    println!(
        "- company rep marked both applications Successful ({} offer(s) awaiting Jordan's decision)",
        center.pending_offers("U2345123F").len()
    );

    center
        .accept_placement("U2345123F", first)
        .map_err(AppError::workflow)?;
    center
        .accept_placement("U7654321K", second)
        .map_err(AppError::workflow)?;
    println!("- both students accepted their placements");

    if let Some(posting) = center.internships().get(robotics) {
        print_posting(posting);
    }

    println!("\nWithdrawal cycle:");
    center
        .request_withdrawal("U2345123F", first, "family relocation".to_string())
        .map_err(AppError::workflow)?;
    println!(
        "- Jordan Teo requested withdrawal; {} request(s) now pending staff review",
        center.pending_withdrawals().len()
    );

    center.approve_withdrawal(first).map_err(AppError::workflow)?;
    println!("- staff approved the withdrawal, slot released:");
    if let Some(posting) = center.internships().get(robotics) {
        print_posting(posting);
    }

    println!("\nFinal application states:");
    for student_id in ["U2345123F", "U7654321K"] {
        for application in center.applications_for_student(student_id) {
            println!(
                "- application #{} ({}): {}{}",
                application.id,
                application.student_id,
                application.status(),
                if application.placement_accepted() {
                    ", placement accepted"
                } else {
                    ""
                }
            );
        }
    }

    Ok(())
}
