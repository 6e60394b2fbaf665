use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use serde_json::Value;

use super::severity::severity_label;

/// One aggregated log tuple as delivered by the data source.
#[derive(Clone, Debug, PartialEq)]
pub struct RawRecord {
    pub category: String,
    pub severity: String,
    pub message: String,
    pub total: f64,
}

impl RawRecord {
    pub fn new(
        category: impl Into<String>,
        severity: impl Into<String>,
        message: impl Into<String>,
        total: f64,
    ) -> Self {
        Self {
            category: category.into(),
            severity: severity.into(),
            message: message.into(),
            total: coerce_finite(total),
        }
    }

    fn from_wire(wire: WireRecord) -> Self {
        let category = wire.category.or(wire.kind);
        Self {
            category: category.as_ref().map(text_field).unwrap_or_default(),
            severity: severity_label(wire.severity.as_ref()),
            message: wire.message.as_ref().map(text_field).unwrap_or_default(),
            total: coerce_total(wire.total.as_ref()),
        }
    }
}

/// Field-level view of one record. Values stay untyped so that loosely
/// typed sources (numeric strings, numeric severities) still decode.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireRecord {
    category: Option<Value>,
    /// Older payloads name the category `type`.
    #[serde(rename = "type")]
    kind: Option<Value>,
    severity: Option<Value>,
    message: Option<Value>,
    total: Option<Value>,
}

pub fn parse_records(raw: &str) -> Result<Vec<RawRecord>> {
    let parsed: Value = serde_json::from_str(raw).context("invalid JSON from data source")?;
    let entries = parsed
        .as_array()
        .ok_or_else(|| anyhow!("expected a JSON array of log records"))?;

    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        if !entry.is_object() {
            tracing::warn!(index, "skipping log record that is not a JSON object");
            continue;
        }
        match WireRecord::deserialize(entry) {
            Ok(wire) => records.push(RawRecord::from_wire(wire)),
            Err(error) => tracing::warn!(index, %error, "skipping malformed log record"),
        }
    }

    Ok(records)
}

fn text_field(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn coerce_total(value: Option<&Value>) -> f64 {
    let total = match value {
        Some(Value::Number(number)) => number.as_f64().unwrap_or(0.0),
        Some(Value::String(text)) => text.trim().parse::<f64>().unwrap_or(0.0),
        Some(Value::Bool(flag)) => f64::from(u8::from(*flag)),
        _ => 0.0,
    };
    coerce_finite(total)
}

fn coerce_finite(total: f64) -> f64 {
    if total.is_finite() && total > 0.0 {
        total
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_producer_payload_with_type_alias_and_string_totals() {
        let raw = r#"[
            {"type": "php", "severity": 3, "message": "fail", "total": "90"},
            {"category": "cron", "severity": "Notice", "message": "ok", "total": 10}
        ]"#;

        let records = parse_records(raw).expect("valid payload");
        assert_eq!(
            records,
            vec![
                RawRecord::new("php", "Error", "fail", 90.0),
                RawRecord::new("cron", "Notice", "ok", 10.0),
            ]
        );
    }

    #[test]
    fn malformed_totals_coerce_to_zero() {
        let raw = r#"[
            {"category": "a", "severity": "Info", "message": "m"},
            {"category": "b", "severity": "Info", "message": "m", "total": null},
            {"category": "c", "severity": "Info", "message": "m", "total": "lots"},
            {"category": "d", "severity": "Info", "message": "m", "total": -4}
        ]"#;

        let records = parse_records(raw).expect("valid payload");
        assert_eq!(records.len(), 4);
        assert!(records.iter().all(|record| record.total == 0.0));
    }

    #[test]
    fn empty_array_is_not_an_error() {
        assert!(parse_records("[]").expect("empty payload").is_empty());
    }

    #[test]
    fn non_object_entries_are_skipped() {
        let records = parse_records(r#"[1, "x", {"category": "user", "total": 2}]"#)
            .expect("valid payload");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category, "user");
        assert_eq!(records[0].severity, "");
    }

    #[test]
    fn category_wins_over_type_and_extra_fields_are_ignored() {
        let raw = r#"[{"category": "user", "type": "php", "wid": 12, "total": 1}]"#;
        let records = parse_records(raw).expect("valid payload");
        assert_eq!(records[0].category, "user");
    }

    #[test]
    fn rejects_non_array_payloads() {
        assert!(parse_records(r#"{"category": "php"}"#).is_err());
        assert!(parse_records("not json").is_err());
    }

    #[test]
    fn constructor_clamps_non_finite_totals() {
        assert_eq!(RawRecord::new("php", "Error", "", f64::NAN).total, 0.0);
        assert_eq!(RawRecord::new("php", "Error", "", f64::INFINITY).total, 0.0);
    }
}
