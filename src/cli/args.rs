use crate::core::EngineConfig;
use chrono::NaiveDate;
use chrono_tz::Tz;
use clap::Parser;
use std::path::PathBuf;

/// Retrieve transaction history from a recorded account-data session
#[derive(Parser, Debug)]
#[command(name = "transaction-retriever")]
#[command(about = "Retrieve transaction history as CSV", long_about = None)]
pub struct CliArgs {
    /// Recorded session fixture answering API requests
    #[arg(value_name = "FIXTURE", help = "Path to the JSON session fixture")]
    pub fixture: PathBuf,

    /// First posting date to include
    #[arg(long = "start", value_name = "DATE", help = "Start date (YYYY-MM-DD)")]
    pub start: NaiveDate,

    /// Last posting date to include
    #[arg(
        long = "end",
        value_name = "DATE",
        help = "End date (YYYY-MM-DD, default: today in the reference timezone)"
    )]
    pub end: Option<NaiveDate>,

    /// Fetch the merchant order identifier of every transaction
    #[arg(long = "enrich", help = "Fetch merchant order identifiers")]
    pub enrich: bool,

    /// API root the fixture was recorded against
    #[arg(long = "base-url", value_name = "URL", help = "API base URL")]
    pub base_url: Option<String>,

    /// Channel header value
    #[arg(long = "channel", value_name = "NAME", help = "Channel identifier (default: web)")]
    pub channel: Option<String>,

    /// Reference timezone for "today"
    #[arg(
        long = "timezone",
        value_name = "TZ",
        help = "IANA timezone defining today (default: America/New_York)"
    )]
    pub timezone: Option<Tz>,

    /// Date to treat as today, for sessions recorded in the past
    #[arg(long = "today", value_name = "DATE", help = "Override today (YYYY-MM-DD)")]
    pub today: Option<NaiveDate>,
}

impl CliArgs {
    /// Create an EngineConfig from CLI arguments
    ///
    /// Values not given on the command line fall back to the defaults.
    pub fn to_engine_config(&self) -> EngineConfig {
        let default = EngineConfig::default();
        EngineConfig::new(
            self.base_url.as_deref().unwrap_or(&default.base_url),
            self.channel.as_deref().unwrap_or(&default.channel),
            self.timezone.unwrap_or(default.timezone),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case::start_only(&["program", "--start", "2024-01-01", "s.json"], None)]
    #[case::with_end(
        &["program", "--start", "2024-01-01", "--end", "2024-03-01", "s.json"],
        Some(date(2024, 3, 1))
    )]
    fn test_date_parsing(#[case] args: &[&str], #[case] end: Option<NaiveDate>) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.start, date(2024, 1, 1));
        assert_eq!(parsed.end, end);
        assert_eq!(parsed.fixture, PathBuf::from("s.json"));
        assert!(!parsed.enrich);
    }

    #[test]
    fn test_enrich_and_today_flags() {
        let parsed = CliArgs::try_parse_from([
            "program",
            "--start",
            "2024-01-01",
            "--enrich",
            "--today",
            "2024-03-01",
            "s.json",
        ])
        .unwrap();
        assert!(parsed.enrich);
        assert_eq!(parsed.today, Some(date(2024, 3, 1)));
    }

    #[rstest]
    #[case::defaults(&["program", "--start", "2024-01-01", "s.json"], "https://api.example.com", "web", chrono_tz::America::New_York)]
    #[case::custom_base_url(
        &["program", "--start", "2024-01-01", "--base-url", "https://bank.test/", "s.json"],
        "https://bank.test",
        "web",
        chrono_tz::America::New_York
    )]
    #[case::custom_channel_and_timezone(
        &["program", "--start", "2024-01-01", "--channel", "mobile", "--timezone", "Europe/London", "s.json"],
        "https://api.example.com",
        "mobile",
        chrono_tz::Europe::London
    )]
    #[case::blank_base_url_falls_back(
        &["program", "--start", "2024-01-01", "--base-url", "  ", "s.json"],
        "https://api.example.com",
        "web",
        chrono_tz::America::New_York
    )]
    fn test_engine_config_conversion(
        #[case] args: &[&str],
        #[case] base_url: &str,
        #[case] channel: &str,
        #[case] timezone: Tz,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        let config = parsed.to_engine_config();

        assert_eq!(config.base_url, base_url);
        assert_eq!(config.channel, channel);
        assert_eq!(config.timezone, timezone);
    }

    #[test]
    fn test_no_overrides_gives_default_config() {
        let parsed = CliArgs::try_parse_from(["program", "--start", "2024-01-01", "s.json"]).unwrap();
        assert_eq!(parsed.to_engine_config(), EngineConfig::default());
    }

    #[rstest]
    #[case::missing_fixture(&["program", "--start", "2024-01-01"])]
    #[case::missing_start(&["program", "s.json"])]
    #[case::invalid_date(&["program", "--start", "01/01/2024", "s.json"])]
    #[case::invalid_timezone(&["program", "--start", "2024-01-01", "--timezone", "Mars/Base", "s.json"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
