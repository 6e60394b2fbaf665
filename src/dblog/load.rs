use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};

use super::parse::{RawRecord, parse_records};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    Stdin,
    File(PathBuf),
}

impl DataSource {
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    fn read_to_string(&self) -> Result<String> {
        match self {
            Self::Stdin => {
                let mut raw = String::new();
                io::stdin()
                    .read_to_string(&mut raw)
                    .context("failed to read log records from stdin")?;
                Ok(raw)
            }
            Self::File(path) => fs::read_to_string(path)
                .with_context(|| format!("failed to read log records from {}", path.display())),
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

pub fn load_records(source: &DataSource) -> Result<Vec<RawRecord>> {
    let raw = source.read_to_string()?;
    let records =
        parse_records(&raw).with_context(|| format!("failed to parse log records from {source}"))?;
    tracing::info!(%source, count = records.len(), "loaded log records");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_selects_stdin() {
        assert_eq!(DataSource::from_arg("-"), DataSource::Stdin);
        assert_eq!(
            DataSource::from_arg("records.json"),
            DataSource::File(PathBuf::from("records.json"))
        );
    }

    #[test]
    fn reads_records_from_file() {
        let path = std::env::temp_dir().join(format!("log-bubbles-{}.json", std::process::id()));
        fs::write(
            &path,
            r#"[{"type": "cron", "severity": 5, "message": "ok", "total": 10}]"#,
        )
        .expect("write fixture");

        let records = load_records(&DataSource::File(path.clone())).expect("load fixture");
        let _ = fs::remove_file(&path);

        assert_eq!(records, vec![RawRecord::new("cron", "Notice", "ok", 10.0)]);
    }

    #[test]
    fn missing_file_reports_the_path() {
        let source = DataSource::File(PathBuf::from("/nonexistent/log-bubbles.json"));
        let error = load_records(&source).expect_err("missing file");
        assert!(format!("{error:#}").contains("/nonexistent/log-bubbles.json"));
    }
}
