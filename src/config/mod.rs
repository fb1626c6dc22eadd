use std::env;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub roster: RosterConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Environment-driven; every knob has a default, so loading never fails.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let students_path = env::var("ROSTER_STUDENTS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("students.csv"));
        let staff_path = env::var("ROSTER_STAFF_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("staff.csv"));

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            environment,
            roster: RosterConfig {
                students_path,
                staff_path,
            },
            telemetry: TelemetryConfig { log_level },
        }
    }
}

/// Locations of the flat-file rosters read at startup.
#[derive(Debug, Clone)]
pub struct RosterConfig {
    pub students_path: PathBuf,
    pub staff_path: PathBuf,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("ROSTER_STUDENTS_PATH");
        env::remove_var("ROSTER_STAFF_PATH");
        env::remove_var("APP_LOG_LEVEL");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load();
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.roster.students_path, PathBuf::from("students.csv"));
        assert_eq!(config.roster.staff_path, PathBuf::from("staff.csv"));
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn environment_aliases_are_recognized() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "prod");
        env::set_var("ROSTER_STUDENTS_PATH", "/data/students.csv");
        let config = AppConfig::load();
        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(
            config.roster.students_path,
            PathBuf::from("/data/students.csv")
        );
        reset_env();
    }
}
