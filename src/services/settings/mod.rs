// Settings service
// Loads NavigatorConfig from TOML files

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::models::settings::NavigatorConfig;

const CONFIG_FILE_NAME: &str = "navigator.toml";

/// Per-user configuration file, when the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "CalendarNavigator", "CalendarNavigator")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

pub fn parse_config(text: &str) -> Result<NavigatorConfig> {
    let config = toml::from_str(text).context("failed to parse navigator configuration")?;
    Ok(config)
}

/// Load the configuration at `path`. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<NavigatorConfig> {
    if !path.exists() {
        log::debug!("no configuration at {}, using defaults", path.display());
        return Ok(NavigatorConfig::default());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read configuration from {}", path.display()))?;
    parse_config(&data).with_context(|| format!("invalid configuration in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::granularity::Granularity;
    use crate::models::settings::CalendarType;
    use crate::models::value::{DateInput, LooseValue, ReturnValue};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = load_config(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, NavigatorConfig::default());
    }

    #[test]
    fn test_load_full_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            r#"
min_date = "2024-01-01"
max_date = 1735603200000
min_detail = "year"
max_detail = "month"
default_view = "year"
default_value = ["2024-03-10", "2024-03-01"]
select_range = true
return_value = "range"
calendar_type = "US"
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();

        assert_eq!(config.min_date, Some(DateInput::Text("2024-01-01".to_string())));
        assert_eq!(config.max_date, Some(DateInput::Millis(1_735_603_200_000)));
        assert_eq!(config.min_detail, Granularity::Year);
        assert_eq!(config.default_view, Some(Granularity::Year));
        assert_eq!(
            config.default_value,
            Some(LooseValue::Range(
                DateInput::Text("2024-03-10".to_string()),
                DateInput::Text("2024-03-01".to_string()),
            ))
        );
        assert!(config.select_range);
        assert_eq!(config.return_value, ReturnValue::Range);
        assert_eq!(config.calendar_type, CalendarType::Us);
    }

    #[test]
    fn test_year_quarter_spellings() {
        let config = parse_config("max_detail = \"yearQuarter\"\nmin_detail = \"year_quarter\"").unwrap();
        assert_eq!(config.max_detail, Granularity::YearQuarter);
        assert_eq!(config.min_detail, Granularity::YearQuarter);
    }

    #[test]
    fn test_unknown_view_is_rejected() {
        let err = parse_config("max_detail = \"week\"").unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid view"));
    }

    #[test]
    fn test_unknown_return_value_is_rejected() {
        let err = parse_config("return_value = \"middle\"").unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid configuration"));
    }
}
