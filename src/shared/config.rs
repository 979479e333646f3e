//! Application configuration. Input corpus, output directory, inference switches.

use serde::Deserialize;

/// Reports go here unless MENTION_GRAPH_REPORTS_DIR says otherwise.
pub const DEFAULT_REPORTS_DIR: &str = "./reports";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Post corpus (.jsonl / .ndjson / .csv / .tsv). Read from MENTION_GRAPH_POSTS_PATH.
    #[serde(default)]
    pub posts_path: Option<String>,

    /// Directory for Markdown and JSON reports. Read from MENTION_GRAPH_REPORTS_DIR.
    #[serde(default)]
    pub reports_dir: Option<String>,

    /// Keep only the N most-followed users in reports. Read from MENTION_GRAPH_TOP_N.
    #[serde(default)]
    pub top_n: Option<usize>,

    /// Count replies as follow evidence (default false). Read from MENTION_GRAPH_REPLY_EVIDENCE.
    #[serde(default)]
    pub reply_evidence: Option<bool>,

    /// Field delimiter for CSV input (default ','). Read from MENTION_GRAPH_CSV_DELIMITER.
    #[serde(default)]
    pub csv_delimiter: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("MENTION_GRAPH").try_parsing(true));
        if let Ok(path) = std::env::var("MENTION_GRAPH_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the reports directory. Defaults to DEFAULT_REPORTS_DIR.
    pub fn reports_dir_or_default(&self) -> String {
        self.reports_dir
            .clone()
            .unwrap_or_else(|| DEFAULT_REPORTS_DIR.to_string())
    }

    /// Returns whether replies count as evidence. Defaults to false (mentions only).
    pub fn reply_evidence_or_default(&self) -> bool {
        self.reply_evidence.unwrap_or(false)
    }

    /// Returns the CSV delimiter byte. Defaults to ','; only single ASCII characters are accepted
    /// (`\t` is spelled out as a tab).
    pub fn csv_delimiter_or_default(&self) -> Result<u8, String> {
        match self.csv_delimiter.as_deref() {
            None | Some("") => Ok(b','),
            Some("\\t") => Ok(b'\t'),
            Some(s) if s.len() == 1 && s.is_ascii() => Ok(s.as_bytes()[0]),
            Some(other) => Err(format!(
                "csv delimiter must be a single ASCII character, got {:?}",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.reports_dir_or_default(), DEFAULT_REPORTS_DIR);
        assert!(!cfg.reply_evidence_or_default());
        assert_eq!(cfg.csv_delimiter_or_default(), Ok(b','));
        assert!(cfg.top_n.is_none());
    }

    #[test]
    fn test_csv_delimiter() {
        let mut cfg = AppConfig {
            csv_delimiter: Some(";".to_string()),
            ..Default::default()
        };
        assert_eq!(cfg.csv_delimiter_or_default(), Ok(b';'));
        cfg.csv_delimiter = Some("\\t".to_string());
        assert_eq!(cfg.csv_delimiter_or_default(), Ok(b'\t'));
        cfg.csv_delimiter = Some("::".to_string());
        assert!(cfg.csv_delimiter_or_default().is_err());
    }

    #[test]
    fn test_deserialize_from_map() {
        let cfg: AppConfig = config::Config::builder()
            .set_override("top_n", 5)
            .unwrap()
            .set_override("reply_evidence", true)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(cfg.top_n, Some(5));
        assert!(cfg.reply_evidence_or_default());
    }
}
