use directories::{BaseDirs, ProjectDirs};
use std::path::PathBuf;

/// Profile mode for the application (dev or prod)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Dev,
    Prod,
}

impl Profile {
    fn app_name(self) -> &'static str {
        match self {
            Profile::Dev => "career-dashboard-dev",
            Profile::Prod => "career-dashboard",
        }
    }
}

/// Get the configuration directory path
/// If profile is Dev, uses "career-dashboard-dev" so dev data never mixes with real data
pub fn get_config_dir(profile: Profile) -> Option<PathBuf> {
    ProjectDirs::from("com", "career-dashboard", profile.app_name())
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the data directory path (where the storage file lives)
pub fn get_data_dir(profile: Profile) -> Option<PathBuf> {
    ProjectDirs::from("com", "career-dashboard", profile.app_name())
        .map(|dirs| dirs.data_dir().to_path_buf())
}

/// Expand `~` in a path string to the user's home directory
pub fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = BaseDirs::new().map(|d| d.home_dir().to_path_buf()) {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// Parse a date string in ISO 8601 format (YYYY-MM-DD)
pub fn parse_date(date_str: &str) -> Result<chrono::NaiveDate, chrono::ParseError> {
    chrono::NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
}

/// Get the current date as an ISO 8601 string (YYYY-MM-DD)
pub fn get_current_date_string() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

/// Human-friendly form of an ISO date, e.g. "Friday, January 5".
/// Unparseable input is returned unchanged.
pub fn format_long_date(date_str: &str) -> String {
    match parse_date(date_str) {
        Ok(date) => date.format("%A, %B %-d").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Split a comma-separated tag list, trimming whitespace and dropping blanks and repeats
pub fn parse_tags(input: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

/// `None` for missing or whitespace-only text
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert!(parse_date("2024-01-05").is_ok());
        assert!(parse_date("2024-13-05").is_err());
        assert!(parse_date("05/01/2024").is_err());
    }

    #[test]
    fn test_format_long_date() {
        assert_eq!(format_long_date("2024-01-05"), "Friday, January 5");
        assert_eq!(format_long_date("someday"), "someday");
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(
            parse_tags(" rust, async ,, rust,tokio "),
            vec!["rust".to_string(), "async".to_string(), "tokio".to_string()]
        );
        assert!(parse_tags("  ").is_empty());
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("  ".to_string())), None);
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("x".to_string())).as_deref(), Some("x"));
    }

    #[test]
    fn test_expand_path_leaves_plain_paths() {
        assert_eq!(expand_path("/tmp/store.db"), PathBuf::from("/tmp/store.db"));
    }
}
